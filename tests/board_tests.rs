//! Board tests - occupancy, bounds, and row primitives

use tetromino_drop::core::Board;
use tetromino_drop::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH as usize);
    assert_eq!(board.height(), BOARD_HEIGHT as usize);

    // All cells should be empty
    for row in 0..board.height() {
        for col in 0..board.width() {
            assert!(!board.is_occupied(row, col), "Cell ({}, {}) should be empty", row, col);
            assert_eq!(board.get(row, col), Some(false));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(0, BOARD_WIDTH as usize), None);
    assert_eq!(board.get(BOARD_HEIGHT as usize, 0), None);
    assert!(!board.is_occupied(BOARD_HEIGHT as usize, 0));
}

#[test]
fn test_board_occupy_and_get() {
    let mut board = Board::new();

    assert!(board.occupy(50, 5));
    assert_eq!(board.get(50, 5), Some(true));
    assert!(board.is_occupied(50, 5));

    // Occupying twice is harmless
    assert!(board.occupy(50, 5));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_board_occupy_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.occupy(0, BOARD_WIDTH as usize));
    assert!(!board.occupy(BOARD_HEIGHT as usize, 0));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_is_blocked() {
    let mut board = Board::new();

    // Empty in-bounds cell is free
    assert!(!board.is_blocked(10, 3));

    // Filled cell blocks
    board.occupy(10, 3);
    assert!(board.is_blocked(10, 3));

    // Floor and right wall block
    assert!(board.is_blocked(BOARD_HEIGHT as usize, 0));
    assert!(board.is_blocked(0, BOARD_WIDTH as usize));
}

#[test]
fn test_board_reset() {
    let mut board = Board::from_rows(&["##########", "#.#.#.#.#."]);
    assert_eq!(board.occupied_count(), 15);

    board.reset();
    assert_eq!(board, Board::new());
}

#[test]
fn test_board_row_predicates() {
    let board = Board::from_rows(&["##########", "#........."]);

    assert!(board.is_row_full(98));
    assert!(!board.is_row_full(99));
    assert!(!board.is_row_empty(99));
    assert!(board.is_row_empty(97));

    // Out-of-range rows are never full
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_board_clear_row_top() {
    let mut board = Board::new();
    for col in 0..10 {
        board.occupy(0, col);
    }

    board.clear_row(0);
    assert!(board.is_row_empty(0));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_from_rows_is_bottom_aligned() {
    let board = Board::from_rows(&["#", ".#"]);
    assert!(board.is_occupied(98, 0));
    assert!(board.is_occupied(99, 1));
    assert_eq!(board.occupied_count(), 2);
}
