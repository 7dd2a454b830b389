//! Player actions and the action log.
//!
//! Every input the game accepts is an `Action`. Front-ends may call the
//! typed methods on `BalanceGame` directly or route everything through
//! `BalanceGame::apply_action`; both paths record the same history.
//!
//! ```
//! use number_balance::game::{Action, Operator};
//! use number_balance::core::Side;
//!
//! let commit = Action::Commit(Side::Left);
//! let op = Action::ChooseOperator(Operator::Multiply);
//! assert_ne!(commit, op);
//! ```

use serde::{Deserialize, Serialize};

use super::token::Operator;
use crate::core::{OperationId, Side, TokenId};

/// A single player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Toggle a token in a side's pool.
    Select { side: Side, token: TokenId },
    /// Set the pending operator.
    ChooseOperator(Operator),
    /// Commit the pending operation to a side.
    Commit(Side),
    /// Remove a committed operation and return its tokens.
    Undo { side: Side, operation: OperationId },
    /// Compare the two totals.
    CheckBalance,
    /// Hide the balance result.
    DismissResult,
    /// End the game without a balanced result.
    GiveUp,
    /// Deal a new game.
    Reset,
}

/// An accepted action with its position in the log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Position in the game's log, starting at 0 after each reset.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(action: Action, sequence: u32) -> Self {
        Self { action, sequence }
    }
}
