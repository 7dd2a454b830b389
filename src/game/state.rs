//! The balance game state machine.
//!
//! ## Phases
//!
//! ```text
//! Idle ──(select/operator/commit/undo)──> Playing
//! Playing ──check (unequal)──> Unbalanced ──dismiss or keep playing──> Playing
//! Playing ──check (equal)──> Complete(Balanced)
//! any ──give up──> Complete(GaveUp)
//! any ──reset──> Idle
//! ```
//!
//! A complete game is frozen: selections, operators, commits and undos are
//! ignored until the next reset.
//!
//! ## Persistence
//!
//! Pools, operation lists and the action log are `im` vectors, so cloning a
//! `BalanceGame` for a view snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ActionRecord};
use super::error::BalanceError;
use super::selection::{SelectOutcome, Selection};
use super::token::{Operation, Operator, Token};
use crate::core::{
    BalanceConfig, GameRng, IdAllocator, OperationId, Side, SideMap, TokenId, Value,
    MAX_TOKEN_MAGNITUDE,
};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Completion {
    /// Both totals were equal when checked.
    Balanced,
    /// The player gave up.
    GaveUp,
}

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh deal, nothing touched yet.
    Idle,
    /// The player has made at least one move since the deal or last check.
    Playing,
    /// The last check found unequal totals. Not terminal.
    Unbalanced,
    /// Terminal until reset.
    Complete(Completion),
}

/// Outcome of comparing the two totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Balanced,
    Unbalanced,
}

/// A balance check with the totals it compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceCheck {
    pub verdict: Verdict,
    pub left: Value,
    pub right: Value,
}

impl BalanceCheck {
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.verdict == Verdict::Balanced
    }
}

/// Token ids handed back by an undo.
pub type RestoredTokens = SmallVec<[TokenId; 2]>;

/// Full game state for one session.
#[derive(Clone, Debug)]
pub struct BalanceGame {
    config: BalanceConfig,
    rng: GameRng,
    ids: IdAllocator,
    pools: SideMap<Vector<Token>>,
    operations: SideMap<Vector<Operation>>,
    /// Exact sum of each side's results, kept in step with `operations`.
    totals: SideMap<Value>,
    selection: Selection,
    phase: GamePhase,
    result_shown: bool,
    history: Vector<ActionRecord>,
}

impl BalanceGame {
    /// Create a game and deal both sides.
    #[must_use]
    pub fn new(config: BalanceConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut game = Self {
            config,
            rng,
            ids: IdAllocator::new(),
            pools: SideMap::with_default(),
            operations: SideMap::with_default(),
            totals: SideMap::with_default(),
            selection: Selection::new(),
            phase: GamePhase::Idle,
            result_shown: false,
            history: Vector::new(),
        };
        game.deal();
        game
    }

    /// Create a game with fixed pools instead of a random deal.
    ///
    /// Later resets deal randomly from `config`.
    #[must_use]
    pub fn from_deal(config: BalanceConfig, left: &[i64], right: &[i64]) -> Self {
        assert!(
            left.iter().chain(right).all(|v| v.abs() <= MAX_TOKEN_MAGNITUDE),
            "Token values must stay within ±{MAX_TOKEN_MAGNITUDE}"
        );
        assert!(
            left.len() == config.tokens_per_side && right.len() == config.tokens_per_side,
            "Each side must be dealt exactly {} tokens",
            config.tokens_per_side
        );

        let mut game = Self::new(config);
        let ids = &mut game.ids;
        game.pools = SideMap::new(|side| {
            let values = match side {
                Side::Left => left,
                Side::Right => right,
            };
            values.iter().map(|&v| Token::new(ids.token(), v)).collect()
        });
        game
    }

    fn deal(&mut self) {
        let deal = self.rng.next_deal();
        let count = self.config.tokens_per_side;
        let range = self.config.value_range();
        let ids = &mut self.ids;

        self.pools = SideMap::new(|side| {
            let mut stream = deal.side_stream(side);
            (0..count)
                .map(|_| Token::new(ids.token(), stream.gen_value(range.clone())))
                .collect()
        });

        tracing::debug!(
            seed = self.rng.seed(),
            left = ?self.pools[Side::Left].iter().map(|t| t.value).collect::<Vec<_>>(),
            right = ?self.pools[Side::Right].iter().map(|t| t.value).collect::<Vec<_>>(),
            "dealt new game"
        );
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    /// Seed of the session RNG. Replaying it reproduces every deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Live tokens on a side.
    #[must_use]
    pub fn pool(&self, side: Side) -> &Vector<Token> {
        &self.pools[side]
    }

    /// Committed operations on a side, in commit order.
    #[must_use]
    pub fn operations(&self, side: Side) -> &Vector<Operation> {
        &self.operations[side]
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, GamePhase::Complete(_))
    }

    /// Is the balance result dialog showing?
    #[must_use]
    pub fn result_shown(&self) -> bool {
        self.result_shown
    }

    /// Accepted actions since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Totals ===

    /// Sum of a side's operation results; zero with no operations.
    #[must_use]
    pub fn total(&self, side: Side) -> Value {
        self.totals[side]
    }

    #[must_use]
    pub fn totals(&self) -> SideMap<Value> {
        self.totals.clone()
    }

    /// The heavier side, or `None` when level.
    #[must_use]
    pub fn heavier_side(&self) -> Option<Side> {
        let (left, right) = (self.total(Side::Left), self.total(Side::Right));
        match left.cmp(&right) {
            std::cmp::Ordering::Greater => Some(Side::Left),
            std::cmp::Ordering::Less => Some(Side::Right),
            std::cmp::Ordering::Equal => None,
        }
    }

    // === Moves ===

    /// Toggle a token in `side`'s pool.
    ///
    /// Tokens that are not live in that pool are ignored, as are picks
    /// from the side opposite the tokens already held.
    pub fn select(&mut self, side: Side, token: TokenId) -> SelectOutcome {
        if self.is_complete() {
            tracing::trace!(%token, "select ignored: game complete");
            return SelectOutcome::Ignored;
        }

        let Some(found) = self.pools[side].iter().find(|t| t.id == token).copied() else {
            tracing::trace!(%token, %side, "select ignored: token not in pool");
            return SelectOutcome::Ignored;
        };

        let outcome = self.selection.toggle(found, side);
        if outcome == SelectOutcome::Ignored {
            tracing::trace!(%token, %side, "select ignored");
        } else {
            self.mark_playing();
            self.record(Action::Select { side, token });
        }
        outcome
    }

    /// Set the pending operator. Returns false if the game is complete.
    pub fn choose_operator(&mut self, operator: Operator) -> bool {
        if self.is_complete() {
            return false;
        }

        self.selection.set_operator(operator);
        self.mark_playing();
        self.record(Action::ChooseOperator(operator));
        true
    }

    /// Commit the pending selection to `side`.
    ///
    /// Returns `Ok(None)` without touching the game when the selection is
    /// incomplete, belongs to the other side, or the game is complete.
    /// An arithmetic error leaves the game, including the selection,
    /// unchanged.
    pub fn commit(&mut self, side: Side) -> Result<Option<OperationId>, BalanceError> {
        if self.is_complete() {
            return Ok(None);
        }
        let Some(pending) = self.selection.pending() else {
            tracing::trace!(%side, "commit ignored: selection incomplete");
            return Ok(None);
        };
        if pending.side != side {
            tracing::trace!(%side, held = %pending.side, "commit ignored: wrong side");
            return Ok(None);
        }

        let (a, b) = (pending.first, pending.second);
        let result = pending
            .operator
            .apply(Value::integer(a.value), Value::integer(b.value))
            .inspect_err(|err| tracing::debug!(%err, "commit rejected"))?;
        let total = self.totals[side]
            .checked_add(result)
            .ok_or(BalanceError::TotalOverflow { side })
            .inspect_err(|err| tracing::debug!(%err, "commit rejected"))?;

        let operation = Operation {
            id: self.ids.operation(),
            num1: a.value,
            num2: b.value,
            operator: pending.operator,
            result,
        };
        self.operations[side].push_back(operation);
        self.totals[side] = total;
        self.pools[side].retain(|t| t.id != a.id && t.id != b.id);
        self.selection.clear();

        tracing::debug!(%side, %operation, total = %self.total(side), "committed operation");
        self.mark_playing();
        self.record(Action::Commit(side));
        Ok(Some(operation.id))
    }

    /// Remove a committed operation and return two fresh tokens carrying
    /// its operand values to the pool.
    ///
    /// Returns the new token ids, or `Ok(None)` if the operation is not on
    /// that side or the game is complete. If the remaining results no
    /// longer sum exactly, the undo is rejected and the game is unchanged.
    pub fn undo(
        &mut self,
        side: Side,
        operation: OperationId,
    ) -> Result<Option<RestoredTokens>, BalanceError> {
        if self.is_complete() {
            return Ok(None);
        }

        let Some(index) = self.operations[side].iter().position(|op| op.id == operation) else {
            tracing::trace!(%side, %operation, "undo ignored: unknown operation");
            return Ok(None);
        };
        let remaining = self.operations[side]
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, op)| op.result);
        let total = Value::checked_sum(remaining)
            .ok_or(BalanceError::TotalOverflow { side })
            .inspect_err(|err| tracing::debug!(%err, "undo rejected"))?;

        let removed = self.operations[side].remove(index);
        self.totals[side] = total;

        let restored: RestoredTokens = [removed.num1, removed.num2]
            .into_iter()
            .map(|value| {
                let token = Token::new(self.ids.token(), value);
                self.pools[side].push_back(token);
                token.id
            })
            .collect();

        tracing::debug!(%side, operation = %removed, "undid operation");
        self.mark_playing();
        self.record(Action::Undo { side, operation });
        Ok(Some(restored))
    }

    /// Compare the totals exactly.
    ///
    /// Equal totals complete the game; unequal totals show a result the
    /// player can dismiss. A complete game is reported but not changed.
    pub fn check_balance(&mut self) -> BalanceCheck {
        let (left, right) = (self.total(Side::Left), self.total(Side::Right));
        let verdict = if left == right {
            Verdict::Balanced
        } else {
            Verdict::Unbalanced
        };
        let check = BalanceCheck { verdict, left, right };

        if self.is_complete() {
            return check;
        }

        self.result_shown = true;
        self.phase = match verdict {
            Verdict::Balanced => {
                tracing::info!(%left, %right, "balanced");
                GamePhase::Complete(Completion::Balanced)
            }
            Verdict::Unbalanced => {
                tracing::debug!(%left, %right, "not balanced");
                GamePhase::Unbalanced
            }
        };
        self.record(Action::CheckBalance);
        check
    }

    /// Hide the balance result. Returns false if none was showing.
    pub fn dismiss_result(&mut self) -> bool {
        if !self.result_shown {
            return false;
        }

        self.result_shown = false;
        if self.phase == GamePhase::Unbalanced {
            self.phase = GamePhase::Playing;
        }
        self.record(Action::DismissResult);
        true
    }

    /// End the game without requiring equal totals.
    ///
    /// Returns false, changing nothing, if the game is already complete.
    pub fn give_up(&mut self) -> bool {
        if self.is_complete() {
            tracing::trace!("give up ignored: game complete");
            return false;
        }

        tracing::info!(left = %self.total(Side::Left), right = %self.total(Side::Right), "gave up");
        self.result_shown = false;
        self.phase = GamePhase::Complete(Completion::GaveUp);
        self.record(Action::GiveUp);
        true
    }

    /// Deal a new game. Always available.
    pub fn reset(&mut self) {
        self.operations = SideMap::with_default();
        self.totals = SideMap::with_default();
        self.selection.clear();
        self.phase = GamePhase::Idle;
        self.result_shown = false;
        self.history = Vector::new();
        self.deal();
    }

    /// Route an action to the matching method.
    ///
    /// Returns whether the action changed the game.
    pub fn apply_action(&mut self, action: &Action) -> Result<bool, BalanceError> {
        let accepted = match *action {
            Action::Select { side, token } => self.select(side, token) != SelectOutcome::Ignored,
            Action::ChooseOperator(op) => self.choose_operator(op),
            Action::Commit(side) => self.commit(side)?.is_some(),
            Action::Undo { side, operation } => self.undo(side, operation)?.is_some(),
            Action::CheckBalance => {
                let was_complete = self.is_complete();
                self.check_balance();
                !was_complete
            }
            Action::DismissResult => self.dismiss_result(),
            Action::GiveUp => self.give_up(),
            Action::Reset => {
                self.reset();
                true
            }
        };
        Ok(accepted)
    }

    fn mark_playing(&mut self) {
        if matches!(self.phase, GamePhase::Idle | GamePhase::Unbalanced) {
            self.phase = GamePhase::Playing;
            self.result_shown = false;
        }
    }

    fn record(&mut self, action: Action) {
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history.push_back(ActionRecord::new(action, sequence));
    }
}
