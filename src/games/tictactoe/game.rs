//! Game engine for tic-tac-toe: board, turn, and history.

use super::action::{Move, MoveError};
use super::types::{Board, GameStatus, Player};
use super::Position;
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board and the player to move. The turn only passes to the
/// opponent after a placement that leaves the game in progress; rejected
/// moves change nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with player X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board and hands the first move back to player X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status as of the last placement.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark at `pos` and evaluates the board.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the game already has an outcome.
    /// - `MoveError::SquareOccupied` if the square is taken.
    ///
    /// Neither the board nor the turn changes on error.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_finished() {
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        self.board.place(pos, player)?;
        let mv = Move::new(player, pos);
        self.history.push(mv);

        self.status = self.board.evaluate();
        if !self.status.is_finished() {
            self.to_move = player.opponent();
        }

        debug!(%mv, status = ?self.status, moves = self.history.len(), "Move applied");
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
