//! Typed commands for the terminal front-end.

use thiserror::Error;

use number_balance::{Operator, Side};

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Toggle the token at a 1-based position in a side's pool.
    Pick { side: Side, index: usize },
    Operator(Operator),
    /// Commit the pending expression to a side.
    Play(Side),
    /// Remove the operation at a 1-based position in a side's list.
    Undo { side: Side, index: usize },
    Check,
    Dismiss,
    GiveUp,
    NewGame,
    Tour,
    Next,
    Skip,
    HowToPlay,
    Close,
    DontShowAgain,
    Share,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unknown command `{0}`, type `help` for a list")]
    UnknownCommand(String),

    #[error("`{command}` needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{0}` is not a side, use `l` or `r`")]
    InvalidSide(String),

    #[error("`{0}` is not a position, use a number from 1")]
    InvalidIndex(String),

    #[error("`{0}` is not an operator, use one of + - * /")]
    InvalidOperator(String),
}

/// Parse a line such as `pick l 3`, `+`, `play r` or `undo l 1`.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseError::Empty);
    };
    let head_lower = head.to_ascii_lowercase();

    if let Some(op) = single_operator(head) {
        return Ok(Command::Operator(op));
    }

    let command = match head_lower.as_str() {
        "pick" | "p" => {
            let side = side_arg(words.next(), "pick")?;
            let index = index_arg(words.next(), "pick")?;
            Command::Pick { side, index }
        }
        "op" | "o" => {
            let word = words.next().ok_or(ParseError::MissingArgument {
                command: "op",
                argument: "operator",
            })?;
            Command::Operator(
                single_operator(word).ok_or_else(|| ParseError::InvalidOperator(word.to_string()))?,
            )
        }
        "play" => Command::Play(side_arg(words.next(), "play")?),
        "undo" | "u" => {
            let side = side_arg(words.next(), "undo")?;
            let index = index_arg(words.next(), "undo")?;
            Command::Undo { side, index }
        }
        "check" | "c" => Command::Check,
        "dismiss" | "d" => Command::Dismiss,
        "giveup" | "give-up" => Command::GiveUp,
        "new" => Command::NewGame,
        "tour" => Command::Tour,
        "next" | "n" => Command::Next,
        "skip" | "finish" => Command::Skip,
        "intro" | "how" => Command::HowToPlay,
        "close" | "ok" => Command::Close,
        "hide-intro" => Command::DontShowAgain,
        "share" => Command::Share,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(ParseError::UnknownCommand(head.to_string())),
    };

    Ok(command)
}

fn single_operator(word: &str) -> Option<Operator> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Operator::from_symbol(c),
        _ => None,
    }
}

fn side_arg(word: Option<&str>, command: &'static str) -> Result<Side, ParseError> {
    let word = word.ok_or(ParseError::MissingArgument {
        command,
        argument: "side",
    })?;
    match word.to_ascii_lowercase().as_str() {
        "l" | "left" => Ok(Side::Left),
        "r" | "right" => Ok(Side::Right),
        _ => Err(ParseError::InvalidSide(word.to_string())),
    }
}

fn index_arg(word: Option<&str>, command: &'static str) -> Result<usize, ParseError> {
    let word = word.ok_or(ParseError::MissingArgument {
        command,
        argument: "position",
    })?;
    match word.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ParseError::InvalidIndex(word.to_string())),
    }
}
