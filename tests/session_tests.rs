//! Session integration tests.
//!
//! These tests cover first-run behaviour across restarts with a real
//! settings file, and the check / play-again / share controls.

use std::cell::RefCell;
use std::rc::Rc;

use number_balance::{
    default_steps, BalanceConfig, CheckOutcome, JsonFileStore, KeyValueStore, MemoryStore,
    Operator, Session, SessionOptions, ShareError, SharePayload, ShareTarget, Side, TourControl,
    TourSequencer,
};

fn start<S: KeyValueStore>(store: S) -> Session<TourSequencer, S> {
    Session::start(
        BalanceConfig::new().with_seed(77),
        TourSequencer::new(default_steps()),
        store,
        SessionOptions::default(),
    )
}

// =============================================================================
// First Run
// =============================================================================

/// Test that the tour runs once across restarts backed by a file.
#[test]
fn test_tour_runs_once_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let first = start(JsonFileStore::open(&path).unwrap());
    assert!(first.tour().is_visible());
    assert!(first.how_to_play_open());
    drop(first);

    let second = start(JsonFileStore::open(&path).unwrap());
    assert!(!second.tour().is_visible());
    assert!(second.how_to_play_open());
}

/// Test that "don't show again" survives a restart.
#[test]
fn test_intro_opt_out_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut first = start(JsonFileStore::open(&path).unwrap());
    first.dont_show_how_to_play_again();
    drop(first);

    let second = start(JsonFileStore::open(&path).unwrap());
    assert!(!second.how_to_play_open());
    assert!(second.settings().hide_how_to_play);
}

/// A tour controller that only counts calls.
#[derive(Default)]
struct CountingTour {
    starts: usize,
    ends: usize,
}

impl TourControl for CountingTour {
    fn start_tour(&mut self) {
        self.starts += 1;
    }

    fn end_tour(&mut self) {
        self.ends += 1;
    }
}

/// Test that any tour controller can be injected.
#[test]
fn test_injected_tour_controller() {
    let mut session = Session::start(
        BalanceConfig::new().with_seed(1),
        CountingTour::default(),
        MemoryStore::new(),
        SessionOptions::default(),
    );
    assert_eq!(session.tour().starts, 1);

    session.start_tour_from_how_to_play();
    assert_eq!(session.tour().starts, 2);
    assert_eq!(session.tour().ends, 0);
}

// =============================================================================
// Game Controls
// =============================================================================

/// Test the check button switching to "play again" after a win.
#[test]
fn test_check_and_play_again() {
    let mut session = start(MemoryStore::new());
    let game = session.game_mut();

    for side in Side::ALL {
        let a = game.pool(side)[0].id;
        let b = game.pool(side)[1].id;
        game.select(side, a);
        game.select(side, b);
        game.choose_operator(Operator::Subtract);
        game.commit(side).unwrap();
        let id = game.operations(side)[0].id;
        game.undo(side, id).unwrap();
    }

    match session.check_or_play_again() {
        CheckOutcome::Checked(check) => assert!(check.is_balanced()),
        CheckOutcome::NewGame => panic!("game was not complete yet"),
    }
    assert_eq!(session.check_or_play_again(), CheckOutcome::NewGame);
    assert!(session.game().history().is_empty());
}

// =============================================================================
// Sharing
// =============================================================================

/// A share target that remembers what it was sent.
struct Recorder(Rc<RefCell<Vec<SharePayload>>>);

impl ShareTarget for Recorder {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        self.0.borrow_mut().push(payload.clone());
        Ok(())
    }
}

/// Test that sharing sends the current totals.
#[test]
fn test_share_sends_totals() {
    let sent = Rc::new(RefCell::new(Vec::new()));
    let mut session = start(MemoryStore::new()).with_share_target(Box::new(Recorder(sent.clone())));

    let game = session.game_mut();
    let a = game.pool(Side::Right)[0].id;
    let b = game.pool(Side::Right)[1].id;
    let expected = game.pool(Side::Right)[0].value * game.pool(Side::Right)[1].value;
    game.select(Side::Right, a);
    game.select(Side::Right, b);
    game.choose_operator(Operator::Multiply);
    game.commit(Side::Right).unwrap();

    assert!(session.share());

    let sent = sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "Number Balance Game");
    assert_eq!(
        sent[0].text,
        format!("I balanced the numbers! Left total: 0, Right total: {expected}")
    );
}

/// Test that a cancelled share is not fatal.
#[test]
fn test_cancelled_share() {
    struct Cancelling;
    impl ShareTarget for Cancelling {
        fn share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
            Err(ShareError::Cancelled)
        }
    }

    let session = start(MemoryStore::new()).with_share_target(Box::new(Cancelling));
    assert!(!session.share());
    assert!(!session.game().is_complete());
}
