//! Game errors.

use thiserror::Error;

use crate::core::{Side, Value};

/// Errors a commit or undo can produce.
///
/// Ignored input (a third token, a commit with an incomplete selection) is
/// not an error; those calls simply leave the game unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// The selected operator was `/` and the second token is zero.
    #[error("cannot divide {dividend} by zero")]
    DivisionByZero { dividend: Value },

    /// The result does not fit the value representation.
    #[error("result of {lhs} {operator} {rhs} is out of range")]
    Overflow { lhs: Value, operator: char, rhs: Value },

    /// The side's total would no longer fit the value representation.
    #[error("{side} total is out of range")]
    TotalOverflow { side: Side },
}
