//! Line-oriented console front end.

mod error;
mod instruction;
mod reader;
pub mod render;
mod session;

pub use error::{ConsoleError, ConsoleErrorKind};
pub use instruction::{
    Instruction, InstructionError, MenuCommand, is_coordinate_digit, parse_line,
};
pub use reader::InstructionReader;
pub use session::{ExitReason, Session};
