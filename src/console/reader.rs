//! Line-at-a-time instruction reader.

use super::error::{ConsoleError, ConsoleErrorKind};
use super::instruction::{Instruction, InstructionError, parse_line};
use std::io::{BufRead, ErrorKind};
use tracing::{debug, instrument};

/// Longest line that can hold an instruction: `d d\r\n`.
const MAX_LINE: usize = 5;

/// Reads whole lines from the console and classifies them.
///
/// Every read consumes a complete line, terminator included, whether or
/// not it parses, so a malformed line never leaks into the next prompt.
/// Only the first `MAX_LINE` bytes of a line are kept; the rest is skipped.
#[derive(Debug)]
pub struct InstructionReader<R> {
    input: R,
    line: Vec<u8>,
}

impl<R: BufRead> InstructionReader<R> {
    /// Wraps a buffered input stream.
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: Vec::with_capacity(MAX_LINE),
        }
    }

    /// Reads and classifies the next line.
    ///
    /// The outer `Result` is the stream: it fails with
    /// `ConsoleErrorKind::EndOfInput` when the input is exhausted, including
    /// a final line that never got its terminator. The inner `Result` is the
    /// line itself.
    #[instrument(skip(self))]
    pub fn read(&mut self) -> Result<Result<Instruction, InstructionError>, ConsoleError> {
        self.line.clear();
        let mut skipped = 0usize;

        loop {
            let available = match self.input.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            if available.is_empty() {
                debug!(kept = self.line.len(), skipped, "Input exhausted");
                return Err(ConsoleError::new(ConsoleErrorKind::EndOfInput));
            }

            let (chunk, terminated) = match available.iter().position(|&b| b == b'\n') {
                Some(end) => (&available[..=end], true),
                None => (available, false),
            };
            let keep = chunk.len().min(MAX_LINE - self.line.len());
            self.line.extend_from_slice(&chunk[..keep]);
            skipped += chunk.len() - keep;

            let used = chunk.len();
            self.input.consume(used);
            if terminated {
                break;
            }
        }

        let parsed = if skipped > 0 {
            Err(InstructionError::Unrecognized(
                String::from_utf8_lossy(&self.line).into_owned(),
            ))
        } else {
            parse_line(&self.line)
        };
        debug!(?parsed, skipped, "Line classified");
        Ok(parsed)
    }

    /// Returns the wrapped input stream.
    pub fn into_inner(self) -> R {
        self.input
    }
}
