//! Terminal front-end: parse a line, apply it to the session, redraw.

pub mod command;
pub mod render;

use std::io::Write;

use number_balance::{
    BalanceGame, CheckOutcome, KeyValueStore, OperationId, SelectOutcome, Session, ShareError,
    SharePayload, ShareTarget, Side, TokenId, TourSequencer, Verdict,
};

pub use command::{parse, Command};
pub use render::Screen;

/// Whether the loop should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one command. Returns a status line to print under the board.
pub fn dispatch<S: KeyValueStore>(
    session: &mut Session<TourSequencer, S>,
    command: Command,
) -> (Flow, Option<String>) {
    let message = match command {
        Command::Pick { side, index } => {
            let Some(token) = token_at(session.game(), side, index) else {
                return (Flow::Continue, Some(format!("{side} side has no number {index}")));
            };
            match session.game_mut().select(side, token) {
                SelectOutcome::Ignored => Some("that pick was ignored".to_string()),
                _ => None,
            }
        }
        Command::Operator(op) => {
            if session.game_mut().choose_operator(op) {
                None
            } else {
                Some("the game is over, `check` to play again".to_string())
            }
        }
        Command::Play(side) => match session.game_mut().commit(side) {
            Ok(Some(_)) => None,
            Ok(None) => Some(format!(
                "pick two {} numbers and an operator first",
                side.name()
            )),
            Err(err) => Some(format!("can't play that: {err}")),
        },
        Command::Undo { side, index } => {
            let Some(operation) = operation_at(session.game(), side, index) else {
                return (Flow::Continue, Some(format!("{side} side has no expression {index}")));
            };
            match session.game_mut().undo(side, operation) {
                Ok(Some(_)) => None,
                Ok(None) => Some("nothing to undo".to_string()),
                Err(err) => Some(format!("can't undo that: {err}")),
            }
        }
        Command::Check => match session.check_or_play_again() {
            CheckOutcome::NewGame => Some("new numbers dealt".to_string()),
            CheckOutcome::Checked(check) => match check.verdict {
                Verdict::Balanced => Some("the beam is level".to_string()),
                Verdict::Unbalanced => None,
            },
        },
        Command::Dismiss => {
            session.game_mut().dismiss_result();
            None
        }
        Command::GiveUp => {
            if session.game_mut().give_up() {
                None
            } else {
                Some("the game is already over".to_string())
            }
        }
        Command::NewGame => {
            session.new_game();
            Some("new numbers dealt".to_string())
        }
        Command::Tour => {
            session.start_tour_from_how_to_play();
            None
        }
        Command::Next => {
            session.tour_mut().next();
            None
        }
        Command::Skip => {
            session.tour_mut().end();
            None
        }
        Command::HowToPlay => {
            session.show_how_to_play();
            None
        }
        Command::Close => {
            session.close_how_to_play();
            None
        }
        Command::DontShowAgain => {
            session.dont_show_how_to_play_again();
            None
        }
        Command::Share => {
            if !session.can_share() {
                Some("sharing is not available".to_string())
            } else if session.share() {
                None
            } else {
                Some("could not share".to_string())
            }
        }
        Command::Help => Some(render::HELP.to_string()),
        Command::Quit => return (Flow::Quit, None),
    };

    (Flow::Continue, message)
}

fn token_at(game: &BalanceGame, side: Side, index: usize) -> Option<TokenId> {
    game.pool(side).get(index.checked_sub(1)?).map(|t| t.id)
}

fn operation_at(game: &BalanceGame, side: Side, index: usize) -> Option<OperationId> {
    game.operations(side).get(index.checked_sub(1)?).map(|op| op.id)
}

/// Shares by printing the payload to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutShare;

impl ShareTarget for StdoutShare {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", payload.title)?;
        writeln!(out, "{}", payload.text)?;
        if let Some(url) = &payload.url {
            writeln!(out, "{url}")?;
        }
        Ok(())
    }
}
