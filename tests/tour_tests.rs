//! Guided tour integration tests.
//!
//! These tests walk the default tour against a fake screen and check
//! step order, the last-step flag and tooltip placement.

use number_balance::tour::regions;
use number_balance::{
    default_steps, Placement, Rect, TourControl, TourSequencer, TourStep, UiLocator, Viewport,
};
use rustc_hash::FxHashMap;

/// A screen where every region is laid out in a fixed spot.
struct FakeScreen {
    regions: FxHashMap<&'static str, Rect>,
}

impl FakeScreen {
    fn game_layout() -> Self {
        let mut layout = FxHashMap::default();
        layout.insert(regions::TOTAL, Rect::new(10.0, 5.0, 80.0, 10.0));
        layout.insert(regions::NUMBERS, Rect::new(10.0, 40.0, 80.0, 10.0));
        layout.insert(regions::OPERATORS, Rect::new(5.0, 45.0, 10.0, 10.0));
        layout.insert(regions::CURRENT_OPERATION, Rect::new(85.0, 45.0, 10.0, 10.0));
        layout.insert(regions::OPERATIONS_LIST, Rect::new(40.0, 45.0, 20.0, 10.0));
        layout.insert(regions::CHECK_BALANCE, Rect::new(40.0, 85.0, 20.0, 10.0));
        Self { regions: layout }
    }
}

impl UiLocator for FakeScreen {
    fn locate(&self, selector: &str) -> Option<Rect> {
        self.regions.get(selector).copied()
    }
}

const VIEWPORT: Viewport = Viewport::new(100.0, 100.0);

// =============================================================================
// Sequencing
// =============================================================================

/// Test walking every default step to the end.
#[test]
fn test_walk_default_tour() {
    let mut tour = TourSequencer::new(default_steps());
    tour.start_tour();

    let mut seen = Vec::new();
    while let Some(step) = tour.active_step() {
        seen.push(step.target.clone());
        let was_last = tour.is_last_step();
        tour.next();
        assert_eq!(was_last, !tour.is_visible());
    }

    let expected: Vec<String> = default_steps().into_iter().map(|s| s.target).collect();
    assert_eq!(seen, expected);
    assert_eq!(tour.current_index(), None);
}

/// Test that ending mid-tour and restarting begins from the first step.
#[test]
fn test_restart_after_skip() {
    let mut tour = TourSequencer::new(default_steps());
    tour.start_tour();
    tour.next();
    tour.next();
    tour.end_tour();
    assert!(!tour.is_visible());
    assert!(tour.active_step().is_none());

    tour.start_tour();
    assert_eq!(tour.current_index(), Some(0));
}

/// Test that a tour with no steps never shows.
#[test]
fn test_empty_tour_never_shows() {
    let mut tour = TourSequencer::new(Vec::new());
    tour.start_tour();
    assert!(!tour.is_visible());
    assert!(tour.focus(&FakeScreen::game_layout(), VIEWPORT).is_none());
}

// =============================================================================
// Placement
// =============================================================================

/// Test the placement chosen for each default step on the fake layout.
#[test]
fn test_default_tour_placements() {
    let screen = FakeScreen::game_layout();
    let mut tour = TourSequencer::new(default_steps());
    tour.start_tour();

    let mut placements = Vec::new();
    while let Some(focus) = tour.focus(&screen, VIEWPORT) {
        placements.push((focus.step.target.clone(), focus.placement));
        tour.next();
    }

    let placement_of = |target: &str| {
        placements
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, p)| *p)
            .unwrap()
    };
    assert_eq!(placement_of(regions::TOTAL), Placement::Bottom);
    assert_eq!(placement_of(regions::CHECK_BALANCE), Placement::Top);
    assert_eq!(placement_of(regions::OPERATORS), Placement::Right);
    assert_eq!(placement_of(regions::CURRENT_OPERATION), Placement::Left);
    assert_eq!(placement_of(regions::OPERATIONS_LIST), Placement::Top);
}

/// Test that a missing target still produces a focus, placed on top.
#[test]
fn test_missing_target_defaults_to_top() {
    let screen = FakeScreen {
        regions: FxHashMap::default(),
    };
    let mut tour = TourSequencer::new(vec![TourStep::new("nowhere", "hello")]);
    tour.start_tour();

    let focus = tour.focus(&screen, VIEWPORT).unwrap();
    assert_eq!(focus.target, None);
    assert_eq!(focus.placement, Placement::Top);
    assert!(focus.is_last);
    assert!(!screen.exists("nowhere"));
}
