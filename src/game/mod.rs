//! The balance game: token pools, the selection cursor, committed
//! operations, totals and the balance check.
//!
//! ## Key Types
//!
//! - `BalanceGame`: the state machine for one session
//! - `Selection`: up to two tokens and one operator awaiting commit
//! - `Token` / `Operation`: pool entries and committed expressions
//! - `Action` / `ActionRecord`: inputs and the log of accepted ones

pub mod action;
pub mod error;
pub mod selection;
pub mod state;
pub mod token;

pub use action::{Action, ActionRecord};
pub use error::BalanceError;
pub use selection::{PendingOperation, SelectOutcome, Selection, Slot};
pub use state::{BalanceCheck, BalanceGame, Completion, GamePhase, RestoredTokens, Verdict};
pub use token::{Operation, Operator, Token};
