//! Text rendering for the console.

use crate::games::tictactoe::Board;

/// Separator drawn above, between and below the board rows.
const RULE: &str = "-------------";

/// The help block shown at startup and on `h`.
pub const INSTRUCTIONS: &str = "\
INSTRUCTIONS
------------------------------------------------------------------------------
h: help (redisplay instructions)
r: exit current game to main menu / start new game
q: quit

To make a move during a game, enter two numbers separated by a single space.
The numbers must be between 0 and 2, and they represent the coordinates
of the square the current player wishes to mark.
(0 0) represents the top left corner, (0 2) represents the top right,
(2 0) represents the bottom left, and (2 2) represents the bottom right.
Parentheses are NOT required for the above instructions.
All instructions must be entered by pressing ENTER.

------------------------------------------------------------------------------
";

/// Renders the board as a framed grid, padded with a blank line on each side.
pub fn board(board: &Board) -> String {
    let mut out = format!("\n{RULE}\n");
    for row in board.rows() {
        for square in row {
            out.push_str(&format!("| {} ", square.symbol()));
        }
        out.push_str(&format!("|\n{RULE}\n"));
    }
    out.push('\n');
    out
}

/// Renders the instructions block, padded with a blank line on each side.
pub fn instructions() -> String {
    format!("\n{INSTRUCTIONS}\n")
}
