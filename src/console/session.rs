//! The interactive game loop.
//!
//! A session alternates between two modes:
//!
//! - **Main menu**: `h` shows help, `r` starts a game, `q` quits. Moves are
//!   rejected because no game is running.
//! - **In game**: players take turns entering coordinates. `h` shows help
//!   without using up the turn, `r` abandons the game, `q` quits at once.
//!
//! Quitting and running out of input are the only ways a session ends.

use super::error::ConsoleError;
use super::instruction::{Instruction, MenuCommand};
use super::reader::InstructionReader;
use super::render;
use crate::config::GameConfig;
use crate::games::tictactoe::{Game, GameStatus};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitReason {
    /// A player entered `q`.
    Quit,
    /// The input stream ran out.
    EndOfInput,
}

/// How a single game left the in-game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameEnd {
    Finished,
    Abandoned,
    Quit,
}

/// Console session: owns the game, the input reader, and the output.
#[derive(Debug)]
pub struct Session<R, W> {
    reader: InstructionReader<R>,
    output: W,
    game: Game,
    config: GameConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading instructions from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self {
            reader: InstructionReader::new(input),
            output,
            game: Game::new(),
            config,
        }
    }

    /// Returns the current (or most recent) game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Splits the session into its input and output streams.
    pub fn into_parts(self) -> (R, W) {
        (self.reader.into_inner(), self.output)
    }

    /// Runs the session until a player quits or the input ends.
    ///
    /// Both endings print a farewell line and return normally. Only a failing
    /// console stream is reported as an error.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<ExitReason, ConsoleError> {
        if *self.config.show_welcome() {
            writeln!(self.output, "Welcome to 2-Player Tic-Tac-Toe!")?;
        }
        if *self.config.show_instructions() {
            write!(self.output, "{}", render::instructions())?;
        }

        let reason = match self.main_menu() {
            Ok(reason) => reason,
            Err(err) if err.is_end_of_input() => ExitReason::EndOfInput,
            Err(err) => return Err(err),
        };

        match reason {
            ExitReason::Quit => writeln!(self.output, "Thank you for playing!")?,
            ExitReason::EndOfInput => writeln!(self.output, "End-of-file detected. Exiting.")?,
        }
        self.output.flush()?;

        info!(?reason, "Session finished");
        Ok(reason)
    }

    fn main_menu(&mut self) -> Result<ExitReason, ConsoleError> {
        loop {
            writeln!(self.output, "Press r to start game or q to quit.")?;
            match self.next_menu_command()? {
                MenuCommand::Help => write!(self.output, "{}", render::instructions())?,
                MenuCommand::Quit => return Ok(ExitReason::Quit),
                MenuCommand::Start => {
                    if self.play()? == GameEnd::Quit {
                        return Ok(ExitReason::Quit);
                    }
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn play(&mut self) -> Result<GameEnd, ConsoleError> {
        self.game.reset();
        info!("Game started");
        write!(self.output, "{}", render::board(self.game.board()))?;

        loop {
            let player = self.game.to_move();
            write!(self.output, "Player {}, enter a command: ", player.number())?;

            match self.next_instruction()? {
                Instruction::Quit => return Ok(GameEnd::Quit),
                Instruction::Help => write!(self.output, "{}", render::instructions())?,
                Instruction::Reset => {
                    writeln!(self.output, "Ending game and returning to menu.")?;
                    info!(moves = self.game.history().len(), "Game abandoned");
                    return Ok(GameEnd::Abandoned);
                }
                Instruction::Move(pos) => match self.game.place(pos) {
                    Err(err) => {
                        debug!(%err, %pos, "Move rejected");
                        writeln!(self.output, "{}. Try again.", err)?;
                    }
                    Ok(status) => {
                        writeln!(self.output)?;
                        write!(self.output, "{}", render::board(self.game.board()))?;
                        if let Some(end) = self.announce(status)? {
                            return Ok(end);
                        }
                    }
                },
            }
        }
    }

    /// Prints the outcome of a finished game; `None` while play continues.
    fn announce(&mut self, status: GameStatus) -> Result<Option<GameEnd>, ConsoleError> {
        match status {
            GameStatus::InProgress => return Ok(None),
            GameStatus::Won(winner) => writeln!(self.output, "Player {} wins!", winner.number())?,
            GameStatus::Draw => writeln!(self.output, "Draw.")?,
        }
        writeln!(self.output, "Current game has ended. Returning to main menu.\n")?;
        info!(?status, history = ?self.game.history(), "Game finished");
        Ok(Some(GameEnd::Finished))
    }

    /// Reads until a syntactically valid instruction arrives.
    fn next_instruction(&mut self) -> Result<Instruction, ConsoleError> {
        loop {
            self.output.flush()?;
            match self.reader.read()? {
                Ok(instruction) => return Ok(instruction),
                Err(err) => {
                    debug!(%err, "Invalid instruction");
                    writeln!(self.output, "Invalid instruction. Try again: ")?;
                }
            }
        }
    }

    /// Reads until a valid instruction that makes sense without a game.
    fn next_menu_command(&mut self) -> Result<MenuCommand, ConsoleError> {
        loop {
            match self.next_instruction()?.menu_command() {
                Some(command) => return Ok(command),
                None => writeln!(
                    self.output,
                    "Invalid instruction; the game has not started. Try again: "
                )?,
            }
        }
    }
}
