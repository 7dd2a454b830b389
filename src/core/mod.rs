//! Core types: sides, identifiers, exact values, RNG, configuration.
//!
//! These building blocks know nothing about selections or operations;
//! the `game` module composes them into the balance state machine.

pub mod entity;
pub mod side;
pub mod value;
pub mod rng;
pub mod config;

pub use entity::{IdAllocator, OperationId, TokenId};
pub use side::{Side, SideMap};
pub use value::Value;
pub use rng::GameRng;
pub use config::{BalanceConfig, MAX_TOKEN_MAGNITUDE};
