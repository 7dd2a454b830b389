//! Linear guided-tour sequencer.

use serde::{Deserialize, Serialize};

use super::placement::{Placement, Rect, UiLocator, Viewport};
use super::TourControl;

/// One stop on the tour: a UI region and what to say about it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourStep {
    /// Selector of the region to highlight.
    pub target: String,
    /// Tooltip text.
    pub message: String,
}

impl TourStep {
    pub fn new(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            message: message.into(),
        }
    }
}

/// Where the active step should be drawn, as resolved by a locator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TourFocus<'a> {
    pub index: usize,
    pub step: &'a TourStep,
    /// Region bounds, `None` if the target is not on screen right now.
    pub target: Option<Rect>,
    pub placement: Placement,
    pub is_last: bool,
}

/// Index into a fixed step list, plus visibility.
///
/// `(None, hidden)` is both the initial and the terminal state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourSequencer {
    steps: Vec<TourStep>,
    current: Option<usize>,
    visible: bool,
}

impl TourSequencer {
    /// Create a hidden tour over `steps`.
    #[must_use]
    pub fn new(steps: Vec<TourStep>) -> Self {
        Self {
            steps,
            current: None,
            visible: false,
        }
    }

    #[must_use]
    pub fn steps(&self) -> &[TourStep] {
        &self.steps
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the first step. A tour without steps stays hidden.
    pub fn start(&mut self) {
        if self.steps.is_empty() {
            tracing::debug!("tour has no steps, not starting");
            return;
        }
        self.current = Some(0);
        self.visible = true;
        tracing::debug!(steps = self.steps.len(), "tour started");
    }

    /// Advance one step; past the last step the tour ends.
    pub fn next(&mut self) {
        match self.current {
            Some(i) if i + 1 < self.steps.len() => self.current = Some(i + 1),
            _ => {
                self.current = None;
                self.visible = false;
                tracing::debug!("tour finished");
            }
        }
    }

    /// Hide the tour from any step.
    pub fn end(&mut self) {
        self.current = None;
        self.visible = false;
    }

    /// The step being shown, if any.
    #[must_use]
    pub fn active_step(&self) -> Option<&TourStep> {
        if !self.visible {
            return None;
        }
        self.steps.get(self.current?)
    }

    /// On the last step the tooltip offers "Finish" instead of "Skip"/"Next".
    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.active_step().is_some() && self.current == Some(self.steps.len() - 1)
    }

    /// Resolve the active step against the live UI.
    #[must_use]
    pub fn focus(&self, locator: &dyn UiLocator, viewport: Viewport) -> Option<TourFocus<'_>> {
        let step = self.active_step()?;
        let target = locator.locate(&step.target);
        if target.is_none() {
            tracing::trace!(target = %step.target, "tour target not on screen");
        }

        Some(TourFocus {
            index: self.current?,
            step,
            target,
            placement: Placement::for_target(target, viewport),
            is_last: self.is_last_step(),
        })
    }
}

impl TourControl for TourSequencer {
    fn start_tour(&mut self) {
        self.start();
    }

    fn end_tour(&mut self) {
        self.end();
    }
}
