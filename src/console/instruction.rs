//! Instruction grammar for the console.
//!
//! A line holds exactly one instruction:
//!
//! - `h`: help (redisplay instructions)
//! - `q`: quit
//! - `r`: start a new game, or abandon the current one
//! - `<row> <col>`: mark a square, each digit `0`-`2`, one space between
//!
//! Nothing else may appear before the line terminator.

use crate::games::tictactoe::Position;
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// A syntactically valid instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Mark the square at this position.
    Move(Position),
    /// Redisplay the instructions.
    Help,
    /// Start a game from the menu, or abandon the game in progress.
    Reset,
    /// Leave the program.
    Quit,
}

/// Commands accepted while no game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    /// Redisplay the instructions.
    Help,
    /// Start a new game.
    Start,
    /// Leave the program.
    Quit,
}

impl Instruction {
    /// Narrows the instruction to a menu command; moves have no meaning there.
    pub fn menu_command(self) -> Option<MenuCommand> {
        match self {
            Instruction::Help => Some(MenuCommand::Help),
            Instruction::Reset => Some(MenuCommand::Start),
            Instruction::Quit => Some(MenuCommand::Quit),
            Instruction::Move(_) => None,
        }
    }
}

/// Why a line is not an instruction.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InstructionError {
    /// The line was blank.
    #[display("empty line")]
    Empty,
    /// A coordinate slot held something other than `0`, `1` or `2`.
    #[display("coordinate {:?} is not 0, 1 or 2", _0)]
    InvalidCoordinate(#[error(not(source))] char),
    /// Anything else.
    #[display("unrecognized instruction {:?}", _0)]
    Unrecognized(#[error(not(source))] String),
}

/// True if `byte` is one of the coordinate digits `0`, `1`, `2`.
pub fn is_coordinate_digit(byte: u8) -> bool {
    matches!(byte, b'0'..=b'2')
}

fn coordinate(byte: u8) -> Result<u8, InstructionError> {
    if is_coordinate_digit(byte) {
        Ok(byte - b'0')
    } else {
        Err(InstructionError::InvalidCoordinate(char::from(byte)))
    }
}

/// Classifies one input line.
///
/// `line` may still carry its `\n` terminator (optionally preceded by a
/// single `\r`); both are stripped before matching.
#[instrument(skip(line), fields(len = line.len()))]
pub fn parse_line(line: &[u8]) -> Result<Instruction, InstructionError> {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    match line {
        [] => Err(InstructionError::Empty),
        [b'h'] => Ok(Instruction::Help),
        [b'q'] => Ok(Instruction::Quit),
        [b'r'] => Ok(Instruction::Reset),
        [row, b' ', col] => {
            let row = coordinate(*row)?;
            let col = coordinate(*col)?;
            Position::from_coords(row, col)
                .map(Instruction::Move)
                .ok_or_else(|| unrecognized(line))
        }
        _ => Err(unrecognized(line)),
    }
}

fn unrecognized(line: &[u8]) -> InstructionError {
    InstructionError::Unrecognized(String::from_utf8_lossy(line).into_owned())
}

impl FromStr for Instruction {
    type Err = InstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_commands() {
        assert_eq!(parse_line(b"h\n"), Ok(Instruction::Help));
        assert_eq!(parse_line(b"q\n"), Ok(Instruction::Quit));
        assert_eq!(parse_line(b"r\n"), Ok(Instruction::Reset));
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(
            parse_line(b"0 0\n"),
            Ok(Instruction::Move(Position::TopLeft))
        );
        assert_eq!(
            parse_line(b"2 1\n"),
            Ok(Instruction::Move(Position::BottomCenter))
        );
        assert_eq!("1 2".parse::<Instruction>(), Ok(Instruction::Move(Position::MiddleRight)));
    }

    #[test]
    fn test_digit_out_of_range() {
        assert_eq!(
            parse_line(b"3 1\n"),
            Err(InstructionError::InvalidCoordinate('3'))
        );
        assert_eq!(
            parse_line(b"1 9\n"),
            Err(InstructionError::InvalidCoordinate('9'))
        );
    }

    #[test]
    fn test_separator_must_be_single_space() {
        assert!(parse_line(b"11\n").is_err());
        assert!(parse_line(b"1  1\n").is_err());
        assert!(parse_line(b"1,1\n").is_err());
        assert!(parse_line(b"1\t1\n").is_err());
    }

    #[test]
    fn test_trailing_or_leading_characters_rejected() {
        assert!(parse_line(b"hh\n").is_err());
        assert!(parse_line(b"q \n").is_err());
        assert!(parse_line(b" r\n").is_err());
        assert!(parse_line(b"1 1 \n").is_err());
        assert!(parse_line(b"1 1x\n").is_err());
        assert!(parse_line(b"1 \n").is_err());
    }

    #[test]
    fn test_uppercase_commands_rejected() {
        assert!(parse_line(b"H\n").is_err());
        assert!(parse_line(b"Q\n").is_err());
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(parse_line(b"\n"), Err(InstructionError::Empty));
    }

    #[test]
    fn test_crlf_terminator_tolerated() {
        assert_eq!(parse_line(b"q\r\n"), Ok(Instruction::Quit));
        assert!(parse_line(b"q\r\r\n").is_err());
    }

    #[test]
    fn test_coordinate_predicate_checks_argument() {
        assert!(is_coordinate_digit(b'0'));
        assert!(is_coordinate_digit(b'2'));
        assert!(!is_coordinate_digit(b'3'));
        assert!(!is_coordinate_digit(b'c'));
        assert!(!is_coordinate_digit(b'/'));
    }

    #[test]
    fn test_menu_command_rejects_moves() {
        assert_eq!(Instruction::Reset.menu_command(), Some(MenuCommand::Start));
        assert_eq!(Instruction::Move(Position::Center).menu_command(), None);
    }
}
