//! One play session: the game plus everything around it.
//!
//! The session owns the game, the persisted settings and the intro dialog
//! flag, and is handed its tour controller, settings store and optional
//! share target at construction. Nothing is looked up from shared state.
//!
//! ```
//! use number_balance::{BalanceConfig, MemoryStore, Session, SessionOptions, TourSequencer, default_steps};
//!
//! let session = Session::start(
//!     BalanceConfig::new().with_seed(7),
//!     TourSequencer::new(default_steps()),
//!     MemoryStore::new(),
//!     SessionOptions::default(),
//! );
//!
//! // First run: the tour starts on its own.
//! assert!(session.tour().is_visible());
//! assert!(session.settings().has_seen_tour);
//! ```

use crate::core::{BalanceConfig, Side};
use crate::game::{BalanceCheck, BalanceGame};
use crate::settings::{KeyValueStore, Settings};
use crate::share::{share_or_log, SharePayload, ShareTarget};
use crate::tour::TourControl;

/// Startup switches.
#[derive(Clone, Debug)]
pub struct SessionOptions {
    /// Start the tour on first run.
    pub auto_tour: bool,
    /// Link attached to shared results.
    pub share_url: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            auto_tour: true,
            share_url: None,
        }
    }
}

/// What the check control did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Checked(BalanceCheck),
    /// The game was already complete, so a new one was dealt.
    NewGame,
}

/// A play session wired to its collaborators.
pub struct Session<T: TourControl, S: KeyValueStore> {
    game: BalanceGame,
    tour: T,
    store: S,
    settings: Settings,
    how_to_play_open: bool,
    share_target: Option<Box<dyn ShareTarget>>,
    share_url: Option<String>,
}

impl<T: TourControl, S: KeyValueStore> Session<T, S> {
    /// Deal a game, read settings, and run the first-start behaviour:
    /// the intro dialog opens unless the player opted out, and the tour
    /// starts once ever.
    pub fn start(config: BalanceConfig, mut tour: T, mut store: S, options: SessionOptions) -> Self {
        let mut settings = Settings::load_or_default(&store);

        if options.auto_tour && !settings.has_seen_tour {
            tour.start_tour();
            if let Err(err) = settings.mark_tour_seen(&mut store) {
                tracing::warn!(%err, "could not persist tour flag");
            }
        }

        let game = BalanceGame::new(config);
        tracing::debug!(seed = game.seed(), ?settings, "session started");

        Self {
            game,
            tour,
            store,
            how_to_play_open: !settings.hide_how_to_play,
            settings,
            share_target: None,
            share_url: options.share_url,
        }
    }

    /// Attach the platform share capability.
    #[must_use]
    pub fn with_share_target(mut self, target: Box<dyn ShareTarget>) -> Self {
        self.share_target = Some(target);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn game(&self) -> &BalanceGame {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut BalanceGame {
        &mut self.game
    }

    #[must_use]
    pub fn tour(&self) -> &T {
        &self.tour
    }

    pub fn tour_mut(&mut self) -> &mut T {
        &mut self.tour
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn how_to_play_open(&self) -> bool {
        self.how_to_play_open
    }

    // === How to play ===

    pub fn show_how_to_play(&mut self) {
        self.how_to_play_open = true;
    }

    pub fn close_how_to_play(&mut self) {
        self.how_to_play_open = false;
    }

    /// Close the dialog and never open it on startup again.
    pub fn dont_show_how_to_play_again(&mut self) {
        self.how_to_play_open = false;
        if let Err(err) = self.settings.hide_how_to_play(&mut self.store) {
            tracing::warn!(%err, "could not persist how-to-play flag");
        }
    }

    /// Close the dialog and walk through the tour.
    pub fn start_tour_from_how_to_play(&mut self) {
        self.how_to_play_open = false;
        self.tour.start_tour();
    }

    // === Game controls ===

    /// The check button: checks the balance, or deals a new game once the
    /// current one is complete.
    pub fn check_or_play_again(&mut self) -> CheckOutcome {
        if self.game.is_complete() {
            self.new_game();
            CheckOutcome::NewGame
        } else {
            CheckOutcome::Checked(self.game.check_balance())
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
    }

    // === Sharing ===

    /// Whether a share control should be offered at all.
    #[must_use]
    pub fn can_share(&self) -> bool {
        self.share_target.is_some()
    }

    /// The payload a share would send right now.
    #[must_use]
    pub fn share_payload(&self) -> SharePayload {
        SharePayload::for_totals(
            self.game.total(Side::Left),
            self.game.total(Side::Right),
            self.share_url.clone(),
        )
    }

    /// Share the current totals. Failures are logged and never touch the game.
    pub fn share(&self) -> bool {
        share_or_log(self.share_target.as_deref(), &self.share_payload())
    }
}
