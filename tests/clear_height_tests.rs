//! Row clearing and height measurement on hand-built boards

use tetromino_drop::core::{clear_full_rows, stack_height, Board};

#[test]
fn test_clear_single_full_row() {
    let mut board = Board::from_rows(&[
        "##........",
        "##########", // cleared
        ".##.......",
        "..........",
    ]);

    assert_eq!(clear_full_rows(&mut board), 1);
    assert_eq!(
        board,
        Board::from_rows(&["##........", ".##.......", ".........."])
    );
}

#[test]
fn test_clear_two_full_rows() {
    let mut board = Board::from_rows(&[
        "##........",
        "##########",
        "##########",
        "..........",
    ]);

    assert_eq!(clear_full_rows(&mut board), 2);
    assert_eq!(board, Board::from_rows(&["##........", ".........."]));
}

#[test]
fn test_clear_four_stacked_rows() {
    let mut board = Board::from_rows(&[
        "#.........",
        "##########",
        "##########",
        "##########",
        "##########",
    ]);

    assert_eq!(clear_full_rows(&mut board), 4);
    assert_eq!(board, Board::from_rows(&["#........."]));
    assert_eq!(stack_height(&board), 1);
}

#[test]
fn test_clear_is_idempotent() {
    let mut board = Board::from_rows(&["##########", "#.#.#.#.#.", "##########"]);

    clear_full_rows(&mut board);
    let once = board.clone();
    assert_eq!(clear_full_rows(&mut board), 0);
    assert_eq!(board, once);
}

#[test]
fn test_height_single_square() {
    let board = Board::from_rows(&["##........", "##........"]);
    assert_eq!(stack_height(&board), 2);
}

#[test]
fn test_height_two_squares() {
    let board = Board::from_rows(&[".##.##....", ".##.##...."]);
    assert_eq!(stack_height(&board), 2);
}

#[test]
fn test_height_hook_on_squares() {
    let board = Board::from_rows(&[
        "#.........",
        "#.........",
        "##........",
        ".##.##.##.",
        ".##.##.##.",
    ]);
    assert_eq!(stack_height(&board), 5);
}

#[test]
fn test_height_ignores_cells_above_a_gap() {
    let board = Board::from_rows(&[
        "....#.....",
        "..........",
        "..........",
        "###.......",
    ]);
    assert_eq!(stack_height(&board), 1);
}

#[test]
fn test_height_of_empty_board() {
    assert_eq!(stack_height(&Board::new()), 0);
}
