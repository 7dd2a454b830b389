//! Identifiers for tokens and committed operations.
//!
//! Ids are handed out by a per-game `IdAllocator` counter. They carry no
//! game meaning: they only let the selection and undo bookkeeping tell two
//! tokens with the same value apart.
//!
//! ```
//! use number_balance::core::IdAllocator;
//!
//! let mut ids = IdAllocator::new();
//! let a = ids.token();
//! let b = ids.token();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a live token in a side's pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u32);

impl TokenId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Identifier of a committed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperationId(pub u32);

impl OperationId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Operation({})", self.0)
    }
}

/// Monotonic id source shared by tokens and operations of one game.
///
/// Ids are never reused for the lifetime of the allocator, so a token
/// re-created by an undo never aliases a token that is still selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new token id.
    pub fn token(&mut self) -> TokenId {
        TokenId(self.bump())
    }

    /// Allocate a new operation id.
    pub fn operation(&mut self) -> OperationId {
        OperationId(self.bump())
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.next
    }

    fn bump(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}
