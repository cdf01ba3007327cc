//! Console Tic-Tac-Toe library - two players, one keyboard.
//!
//! # Architecture
//!
//! - **Games**: board storage, win/draw rules, and the turn-keeping engine
//! - **Console**: instruction parsing, rendering, and the menu/game loop
//! - **Config**: presentation and logging settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use console_tictactoe::{ExitReason, GameConfig, Session};
//! use std::io::Cursor;
//!
//! let input = Cursor::new("r\n1 1\nq\n");
//! let mut session = Session::new(input, Vec::new(), GameConfig::default());
//! assert_eq!(session.run().unwrap(), ExitReason::Quit);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

pub mod logging;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console front end
pub use console::{
    ConsoleError, ConsoleErrorKind, ExitReason, Instruction, InstructionError,
    InstructionReader, MenuCommand, Session, is_coordinate_digit, parse_line, render,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, Move, MoveError, Player, Position, Square, rules,
};
