//! Row clearing - removes full rows and compacts the stack above them

use tracing::debug;

use crate::board::Board;

/// Clear every full row, returning how many were removed.
///
/// Rows are scanned top to bottom. When row `i` is full, everything above it
/// moves down one row and row `i` is examined again, since it now holds what
/// used to sit directly above. A board with no full rows is left untouched.
pub fn clear_full_rows(board: &mut Board) -> usize {
    let mut cleared = 0;
    let mut row = 0;

    while row < board.height() {
        if board.is_row_full(row) {
            debug!(row, level = board.height() - row, "clearing full row");
            board.clear_row(row);
            cleared += 1;
            // re-examine the same index
            continue;
        }
        row += 1;
    }

    cleared
}
