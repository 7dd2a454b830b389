//! Persisted player preferences.
//!
//! Only two flags survive between runs:
//! - `hasSeenTour`: the tour has auto-started once
//! - `hideHowToPlay`: the player opted out of the intro dialog
//!
//! Both are read once when a session starts and written once when the
//! triggering action happens. Storage is whatever `KeyValueStore` the
//! caller injects.

pub mod store;

use std::path::PathBuf;
use thiserror::Error;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

/// Store key for the tour flag.
pub const HAS_SEEN_TOUR_KEY: &str = "hasSeenTour";

/// Store key for the intro dialog opt-out.
pub const HIDE_HOW_TO_PLAY_KEY: &str = "hideHowToPlay";

const TRUE: &str = "true";

/// Errors from the settings store.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The persisted flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub has_seen_tour: bool,
    pub hide_how_to_play: bool,
}

impl Settings {
    /// Read both flags from `store`.
    pub fn load(store: &impl KeyValueStore) -> Result<Self, SettingsError> {
        Ok(Self {
            has_seen_tour: read_flag(store, HAS_SEEN_TOUR_KEY)?,
            hide_how_to_play: read_flag(store, HIDE_HOW_TO_PLAY_KEY)?,
        })
    }

    /// Read both flags, falling back to defaults if the store fails.
    pub fn load_or_default(store: &impl KeyValueStore) -> Self {
        Self::load(store).unwrap_or_else(|err| {
            tracing::warn!(%err, "could not read settings, using defaults");
            Self::default()
        })
    }

    /// Record that the tour has been shown.
    pub fn mark_tour_seen(&mut self, store: &mut impl KeyValueStore) -> Result<(), SettingsError> {
        self.has_seen_tour = true;
        store.set(HAS_SEEN_TOUR_KEY, TRUE)
    }

    /// Record the "don't show this again" choice.
    pub fn hide_how_to_play(&mut self, store: &mut impl KeyValueStore) -> Result<(), SettingsError> {
        self.hide_how_to_play = true;
        store.set(HIDE_HOW_TO_PLAY_KEY, TRUE)
    }
}

/// Any non-empty value other than `"false"` counts as set.
fn read_flag(store: &impl KeyValueStore, key: &str) -> Result<bool, SettingsError> {
    Ok(store
        .get(key)?
        .is_some_and(|v| !v.is_empty() && v != "false"))
}
