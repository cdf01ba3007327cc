//! End-to-end tests driving a console session with scripted input.

use console_tictactoe::{
    Board, ExitReason, Game, GameConfig, GameStatus, Player, Position, Session, Square,
};
use std::io::Cursor;

fn quiet() -> GameConfig {
    GameConfig::default()
        .with_welcome(false)
        .with_instructions(false)
}

fn play(input: &str) -> (ExitReason, Game, String) {
    let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), quiet());
    let reason = session.run().expect("in-memory console never fails");
    let game = session.game().clone();
    let (_, output) = session.into_parts();
    (reason, game, String::from_utf8(output).expect("output is UTF-8"))
}

#[test]
fn test_moves_alternate_between_players() {
    let (reason, game, out) = play("r\n1 1\n0 0\n1 0\n2 1\n1 2\n");

    assert_eq!(reason, ExitReason::EndOfInput);
    let board = game.board();
    for pos in [Position::Center, Position::MiddleLeft, Position::MiddleRight] {
        assert_eq!(board.get(pos), Square::Occupied(Player::X));
    }
    for pos in [Position::TopLeft, Position::BottomCenter] {
        assert_eq!(board.get(pos), Square::Occupied(Player::O));
    }
    // Middle row X X X completes on the fifth move.
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert!(out.contains("Player 1 wins!"));
}

#[test]
fn test_prompts_follow_turn_order() {
    let (_, _, out) = play("r\n0 0\n1 1\n2 2\n");
    let prompts: Vec<&str> = out
        .match_indices("Player ")
        .map(|(i, _)| &out[i..i + 8])
        .collect();
    assert_eq!(prompts, ["Player 1", "Player 2", "Player 1", "Player 2"]);
}

#[test]
fn test_top_row_wins_for_x() {
    let (reason, game, out) = play("r\n0 0\n1 1\n0 1\n1 0\n0 2\nq\n");

    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert!(out.contains(
        "| X | X | X |\n-------------\n\
         | O | O |   |\n-------------\n\
         |   |   |   |\n-------------\n\n\
         Player 1 wins!\n\
         Current game has ended. Returning to main menu.\n\n\
         Press r to start game or q to quit.\n"
    ));
}

#[test]
fn test_o_can_win() {
    let (_, game, out) = play("r\n0 0\n1 1\n0 1\n2 2\n2 1\n0 2\n1 0\n2 0\nq\n");
    // O holds the anti-diagonal (0 2) (1 1) (2 0).
    assert_eq!(game.status(), GameStatus::Won(Player::O));
    assert!(out.contains("Player 2 wins!"));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let (_, game, out) = play("r\n0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 1\n2 0\n2 2\nq\n");
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(out.contains("Draw.\nCurrent game has ended. Returning to main menu.\n"));
}

#[test]
fn test_last_square_completing_line_is_win_not_draw() {
    // X O X / X O O / X X O, with X closing column 0 on the ninth move.
    let (_, game, out) = play("r\n0 0\n0 1\n0 2\n1 1\n2 1\n1 2\n1 0\n2 2\n2 0\nq\n");
    assert!(game.board().squares().iter().all(|s| *s != Square::Empty));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert!(out.contains("Player 1 wins!"));
    assert!(!out.contains("Draw."));
}

#[test]
fn test_out_of_range_digit_rejected() {
    let (_, game, out) = play("r\n3 1\nq\n");
    assert!(out.contains("Player 1, enter a command: Invalid instruction. Try again: \n"));
    assert_eq!(*game.board(), Board::new());
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_taken_square_reprompts_same_player() {
    let (_, game, out) = play("r\n1 1\n1 1\n0 0\nq\n");
    assert!(out.contains(
        "Player 2, enter a command: That square is taken. Try again.\n\
         Player 2, enter a command: "
    ));
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_invalid_lines_do_not_advance_turn() {
    let (_, game, _) = play("r\n0 0\nxyz\n1 1 1\n\nh\nq\n");
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_same_malformed_line_rejected_each_time() {
    let (_, _, out) = play("r\n1 1 junk\n1 1 junk\n2 2\nq\n");
    assert_eq!(out.matches("Invalid instruction. Try again: ").count(), 2);
    assert!(out.contains("|   |   | X |"));
}

#[test]
fn test_move_before_game_rejected() {
    let (reason, _, out) = play("1 1\nq\n");
    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(
        out,
        "Press r to start game or q to quit.\n\
         Invalid instruction; the game has not started. Try again: \n\
         Thank you for playing!\n"
    );
}

#[test]
fn test_malformed_line_in_menu_uses_generic_message() {
    let (_, _, out) = play("5 5\nq\n");
    assert!(out.contains("Invalid instruction. Try again: \n"));
    assert!(!out.contains("has not started"));
}

#[test]
fn test_quit_mid_game() {
    let (reason, game, out) = play("r\n0 0\nq\n");
    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(game.history().len(), 1);
    assert!(out.ends_with("Player 2, enter a command: Thank you for playing!\n"));
}

#[test]
fn test_end_of_input_at_menu() {
    let (reason, _, out) = play("");
    assert_eq!(reason, ExitReason::EndOfInput);
    assert_eq!(
        out,
        "Press r to start game or q to quit.\nEnd-of-file detected. Exiting.\n"
    );
}

#[test]
fn test_second_game_after_win() {
    let (_, game, out) = play("r\n0 0\n1 1\n0 1\n1 0\n0 2\nr\n2 2\nq\n");
    assert_eq!(out.matches("Player 1 wins!").count(), 1);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.board().get(Position::BottomRight), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::TopLeft), Square::Empty);
}
