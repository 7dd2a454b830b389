//! Plain-text rendering of a session.
//!
//! The screen remembers which lines each tour region occupies, which makes
//! it the `UiLocator` the tour resolves its steps against.

use rustc_hash::FxHashMap;

use number_balance::game::{Completion, GamePhase};
use number_balance::tour::regions;
use number_balance::{
    BalanceGame, KeyValueStore, Operator, Placement, Rect, Session, Side, TourSequencer,
    UiLocator, Viewport,
};

const RULE: &str = "----------------------------------------------------------------";

pub const HOW_TO_PLAY: &str = "\
How to Play

  Goal: reach the highest total you can that is equal on both sides of the beam.

  1. Each side starts with six numbers.
  2. Build an expression on one side:
       pick two numbers       pick l 1, pick l 4
       choose an operator     + - * /
       play it                play l
  3. Every played expression adds its result to that side's total.
  4. You don't need every number. Undo an expression to get its numbers back.
  5. When the totals match, check the balance to win.

  close: got it   tour: start the tour   hide-intro: don't show this again";

pub const HELP: &str = "\
Commands
  pick <l|r> <n>   toggle number n on a side      + - * /      choose operator
  play <l|r>       play the expression            undo <l|r> <n>  remove expression n
  check            check balance / play again     dismiss      hide the result
  giveup           end this game                  new          deal a new game
  tour, next, skip guided tour                    intro        how to play
  share            share your totals              quit         leave";

/// A rendered frame plus the regions it contains.
#[derive(Debug, Default)]
pub struct Screen {
    lines: Vec<String>,
    regions: FxHashMap<&'static str, Rect>,
}

impl Screen {
    /// Render the game board. Overlays are added by `compose`.
    pub fn board<S: KeyValueStore>(session: &Session<TourSequencer, S>) -> Self {
        let game = session.game();
        let mut screen = Screen::default();

        screen.push(format!("Number Balance{:>50}", format!("seed {}", game.seed())));
        screen.push(RULE.to_string());
        for side in Side::ALL {
            screen.side(game, side);
            screen.push(String::new());
        }

        let totals = game.totals();
        let beam = match game.heavier_side() {
            None => "=========^=========",
            Some(Side::Left) => "\\________^         ",
            Some(Side::Right) => "         ^________/",
        };
        screen.push(format!(
            "  {:>8}  {beam}  {:<8}",
            totals[Side::Left].to_string(),
            totals[Side::Right].to_string()
        ));

        let button = if game.is_complete() {
            "[ Play Again ]  (check)"
        } else {
            "[ Check Balance ]  (check)"
        };
        let line = screen.push(format!("  {button}"));
        screen.mark(regions::CHECK_BALANCE, line, line);
        screen.push(RULE.to_string());

        screen
    }

    fn side(&mut self, game: &BalanceGame, side: Side) {
        let total = game.total(side);
        let line = self.push(format!("{side} side{:>48}", format!("total {total}")));
        self.mark(regions::TOTAL, line, line);

        let selection = game.selection();
        let current = selection.active_side() == side;
        let slot = |t: Option<number_balance::Token>| {
            t.filter(|_| current)
                .map_or_else(|| "_".to_string(), |t| t.value.to_string())
        };
        let operator = selection
            .operator()
            .filter(|_| current)
            .map_or_else(|| "?".to_string(), |op| op.to_string());
        let line = self.push(format!(
            "  expression: {} {operator} {}    (play {})",
            slot(selection.first()),
            slot(selection.second()),
            side_key(side)
        ));
        self.mark(regions::CURRENT_OPERATION, line, line);

        let numbers: Vec<String> = game
            .pool(side)
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if current && selection.holds(token.id) {
                    format!("{}:[{}]", i + 1, token.value)
                } else {
                    format!("{}: {} ", i + 1, token.value)
                }
            })
            .collect();
        let line = self.push(format!("  numbers:   {}", numbers.join(" ")));
        self.mark(regions::NUMBERS, line, line);

        let operators: Vec<String> = Operator::ALL
            .iter()
            .map(|&op| {
                if current && selection.operator() == Some(op) {
                    format!("[{op}]")
                } else {
                    format!(" {op} ")
                }
            })
            .collect();
        let line = self.push(format!("  operators: {}", operators.join(" ")));
        self.mark(regions::OPERATORS, line, line);

        let first = self.push("  played:".to_string());
        let mut last = first;
        for (i, op) in game.operations(side).iter().enumerate() {
            last = self.push(format!("    {}) {op}", i + 1));
        }
        self.mark(regions::OPERATIONS_LIST, first, last);
    }

    /// Add dialogs and the tour tooltip on top of the board.
    pub fn compose<S: KeyValueStore>(mut self, session: &Session<TourSequencer, S>) -> String {
        let game = session.game();

        if game.result_shown() {
            let (left, right) = (game.total(Side::Left), game.total(Side::Right));
            if left == right {
                self.push(format!("  Balanced! Both sides total {left}."));
                if session.can_share() {
                    self.push("  share: tell your friends".to_string());
                }
            } else {
                self.push(format!("  Not balanced yet: left {left}, right {right}."));
                self.push("  dismiss: keep trying   giveup: end this game".to_string());
            }
        } else if game.phase() == GamePhase::Complete(Completion::GaveUp) {
            self.push("  Game over. check: play again".to_string());
        }

        if session.how_to_play_open() {
            self.push(RULE.to_string());
            for line in HOW_TO_PLAY.lines() {
                self.push(line.to_string());
            }
        }

        let viewport = self.viewport();
        if let Some(focus) = session.tour().focus(&self, viewport) {
            let buttons = if focus.is_last {
                "finish"
            } else {
                "next | skip"
            };
            let tooltip = [
                format!(
                    "  >> Tour {}/{} ({} {})",
                    focus.index + 1,
                    session.tour().step_count(),
                    focus.placement,
                    focus.step.target
                ),
                format!("  >> {}", focus.step.message),
                format!("  >> {buttons}"),
            ];
            let at = match (focus.target, focus.placement) {
                (Some(rect), Placement::Top) => rect.top() as usize,
                (Some(rect), _) => rect.bottom() as usize,
                (None, _) => self.lines.len(),
            };
            let at = at.min(self.lines.len());
            for (offset, line) in tooltip.into_iter().enumerate() {
                self.lines.insert(at + offset, line);
            }
        }

        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    fn viewport(&self) -> Viewport {
        let width = self.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Viewport::new(width as f32, self.lines.len() as f32)
    }

    fn push(&mut self, line: String) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    /// Record that `selector` spans lines `first..=last`. The first region
    /// registered for a selector wins, like a document query.
    fn mark(&mut self, selector: &'static str, first: usize, last: usize) {
        let width = self.lines[first..=last]
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        self.regions.entry(selector).or_insert(Rect::new(
            0.0,
            first as f32,
            width as f32,
            (last - first + 1) as f32,
        ));
    }
}

impl UiLocator for Screen {
    fn locate(&self, selector: &str) -> Option<Rect> {
        self.regions.get(selector).copied()
    }
}

fn side_key(side: Side) -> char {
    match side {
        Side::Left => 'l',
        Side::Right => 'r',
    }
}
