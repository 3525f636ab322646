//! Stack height measurement

use crate::board::Board;

/// Height of the contiguous stack resting on the floor, in rows.
///
/// Scans upward from the bottom row and stops at the first empty row once a
/// filled row has been seen, so cells separated from the stack by a fully
/// empty row do not count. An empty board has height 0.
pub fn stack_height(board: &Board) -> usize {
    let mut top_filled = None;

    for row in (0..board.height()).rev() {
        if !board.is_row_empty(row) {
            top_filled = Some(row);
        } else if top_filled.is_some() {
            break;
        }
    }

    top_filled.map_or(0, |row| board.height() - row)
}
