//! Console I/O error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while talking to the console.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConsoleErrorKind {
    /// The input stream ended before a complete line arrived.
    #[display("end of input")]
    EndOfInput,
    /// Reading or writing the console failed.
    #[display("I/O error: {}", _0)]
    Io(String),
}

/// Console error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", kind, file, line)]
pub struct ConsoleError {
    /// Error kind.
    pub kind: ConsoleErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConsoleErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// True when the input stream has been exhausted.
    pub fn is_end_of_input(&self) -> bool {
        self.kind == ConsoleErrorKind::EndOfInput
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ConsoleErrorKind::Io(err.to_string()))
    }
}
