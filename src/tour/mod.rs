//! Guided tour: a fixed list of (region, message) steps shown one at a
//! time over the game.
//!
//! ## Key Types
//!
//! - `TourSequencer`: current step index and visibility
//! - `TourControl`: the start/end handle other components are given
//! - `UiLocator` / `Placement`: resolving a step's region and placing its tooltip

pub mod placement;
pub mod sequencer;
pub mod steps;

pub use placement::{Placement, Rect, UiLocator, Viewport};
pub use sequencer::{TourFocus, TourSequencer, TourStep};
pub use steps::{default_steps, regions};

/// Start/end handle for the tour.
///
/// Components that may launch the tour (the session on first run, the
/// how-to-play dialog) receive an implementation instead of reaching for
/// shared state.
pub trait TourControl {
    fn start_tour(&mut self);
    fn end_tour(&mut self);
}
