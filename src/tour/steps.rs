//! The built-in tour and the region selectors it points at.
//!
//! Front-ends tag the matching parts of their view with these selectors
//! so that a `UiLocator` can find them.

use super::sequencer::TourStep;

/// Selectors for the game's tour-addressable regions.
pub mod regions {
    pub const NUMBERS: &str = "numbers";
    pub const OPERATORS: &str = "operators";
    pub const CURRENT_OPERATION: &str = "current-operation";
    pub const OPERATIONS_LIST: &str = "operations-list";
    pub const TOTAL: &str = "total";
    pub const CHECK_BALANCE: &str = "check-balance";
}

/// The standard six-step tour, in the order a new player meets the controls.
#[must_use]
pub fn default_steps() -> Vec<TourStep> {
    vec![
        TourStep::new(
            regions::NUMBERS,
            "These are your numbers. Pick two of them on the same side to build an expression.",
        ),
        TourStep::new(
            regions::OPERATORS,
            "Choose an operator to combine the two numbers: add, subtract, multiply or divide.",
        ),
        TourStep::new(
            regions::CURRENT_OPERATION,
            "Your expression builds up here. Play it to add the result to this side.",
        ),
        TourStep::new(
            regions::OPERATIONS_LIST,
            "Played expressions are listed here. Remove one to get its numbers back.",
        ),
        TourStep::new(
            regions::TOTAL,
            "Each side's total is the sum of its results. Aim for equal totals, as high as you can.",
        ),
        TourStep::new(
            regions::CHECK_BALANCE,
            "When both sides match, check the balance to win.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_steps_cover_every_region() {
        let steps = default_steps();
        let targets: Vec<_> = steps.iter().map(|s| s.target.as_str()).collect();

        assert_eq!(
            targets,
            vec![
                regions::NUMBERS,
                regions::OPERATORS,
                regions::CURRENT_OPERATION,
                regions::OPERATIONS_LIST,
                regions::TOTAL,
                regions::CHECK_BALANCE,
            ]
        );
        assert!(steps.iter().all(|s| !s.message.is_empty()));
    }
}
