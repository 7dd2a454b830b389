//! The in-progress selection: up to two tokens and one operator.
//!
//! ## Slots
//!
//! Tokens fill the first empty slot. Deselecting the first token leaves
//! the second where it is, so the next pick becomes `num1` again.
//!
//! ## Sides
//!
//! All held tokens come from `active_side`. While a token is held, picks
//! from the other side are ignored; once the selection is empty the next
//! pick may move `active_side`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::token::{Operator, Token};
use crate::core::{Side, TokenId};

/// Which operand slot a token occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    First,
    Second,
}

/// What a pick did to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The token now occupies this slot.
    Selected(Slot),
    /// The token was held and has been released from this slot.
    Deselected(Slot),
    /// Nothing changed (both slots full, or the token is on the other side).
    Ignored,
}

/// A selection ready to be committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingOperation {
    pub side: Side,
    pub first: Token,
    pub second: Token,
    pub operator: Operator,
}

/// Transient selection state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    first: Option<Token>,
    second: Option<Token>,
    operator: Option<Operator>,
    active_side: Side,
}

impl Selection {
    /// An empty selection on the left side.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn first(&self) -> Option<Token> {
        self.first
    }

    #[must_use]
    pub fn second(&self) -> Option<Token> {
        self.second
    }

    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Side of the most recent accepted pick.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    /// Does either slot hold this token?
    #[must_use]
    pub fn holds(&self, id: TokenId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Ids of the held tokens, first slot first.
    #[must_use]
    pub fn held_ids(&self) -> SmallVec<[TokenId; 2]> {
        self.first.iter().chain(self.second.iter()).map(|t| t.id).collect()
    }

    /// No tokens held. The operator may still be set.
    #[must_use]
    pub fn has_no_tokens(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    /// Pick a token from `side`.
    ///
    /// Picking a held token releases it. Otherwise the token fills the
    /// first empty slot. A third token, or a token from the side opposite
    /// the held ones, is ignored.
    pub fn toggle(&mut self, token: Token, side: Side) -> SelectOutcome {
        if !self.has_no_tokens() && side != self.active_side {
            return SelectOutcome::Ignored;
        }

        if let Some(slot) = self.slot_of(token.id) {
            *self.slot_mut(slot) = None;
            self.active_side = side;
            return SelectOutcome::Deselected(slot);
        }

        let slot = if self.first.is_none() {
            Slot::First
        } else if self.second.is_none() {
            Slot::Second
        } else {
            return SelectOutcome::Ignored;
        };

        *self.slot_mut(slot) = Some(token);
        self.active_side = side;
        SelectOutcome::Selected(slot)
    }

    /// Set the pending operator, replacing any previous choice.
    pub fn set_operator(&mut self, operator: Operator) {
        self.operator = Some(operator);
    }

    /// The complete selection, if both tokens and the operator are set.
    #[must_use]
    pub fn pending(&self) -> Option<PendingOperation> {
        Some(PendingOperation {
            side: self.active_side,
            first: self.first?,
            second: self.second?,
            operator: self.operator?,
        })
    }

    /// Release both tokens and the operator. `active_side` is kept.
    pub fn clear(&mut self) {
        self.first = None;
        self.second = None;
        self.operator = None;
    }

    fn slot_of(&self, id: TokenId) -> Option<Slot> {
        if self.first.is_some_and(|t| t.id == id) {
            Some(Slot::First)
        } else if self.second.is_some_and(|t| t.id == id) {
            Some(Slot::Second)
        } else {
            None
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Token> {
        match slot {
            Slot::First => &mut self.first,
            Slot::Second => &mut self.second,
        }
    }
}
