//! Board module - manages the drop grid
//!
//! The board is a 10x100 grid where each cell is either empty or occupied.
//! No piece identity is kept once a piece has been placed.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..99 (top to bottom), col ranges 0..9 (left to right)

use std::fmt;

use crate::types::{BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The drop board - 10 columns x 100 rows using flat array storage
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= HEIGHT || col >= WIDTH {
            return None;
        }
        Some(row * WIDTH + col)
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(true))
    }

    /// Check if a piece cell may not enter (row, col): out of bounds or filled
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        !matches!(self.get(row, col), Some(false))
    }

    /// Mark (row, col) occupied
    /// Returns false if out of bounds
    pub fn occupy(&mut self, row: usize, col: usize) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = true;
                true
            }
            None => false,
        }
    }

    fn row(&self, row: usize) -> &[bool] {
        let start = row * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < HEIGHT && self.row(row).iter().all(|&cell| cell)
    }

    /// Check if a row has no occupied cell (out-of-range rows count as empty)
    pub fn is_row_empty(&self, row: usize) -> bool {
        row >= HEIGHT || self.row(row).iter().all(|&cell| !cell)
    }

    /// Remove a row by shifting every row above it down one, leaving row 0 empty
    pub fn clear_row(&mut self, row: usize) {
        if row >= HEIGHT {
            return;
        }

        self.cells.copy_within(0..row * WIDTH, WIDTH);
        self.cells[..WIDTH].fill(false);
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Build a board from a picture whose last line is the bottom row.
    ///
    /// `#` marks an occupied cell, anything else is empty. Lines shorter than
    /// the board are padded with empty cells; extra characters are ignored.
    ///
    /// ```
    /// use tetromino_drop_core::Board;
    ///
    /// let board = Board::from_rows(&["#.........", "##########"]);
    /// assert!(board.is_occupied(98, 0));
    /// assert!(board.is_row_full(99));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let first = HEIGHT.saturating_sub(rows.len());
        for (offset, line) in rows.iter().rev().take(HEIGHT).rev().enumerate() {
            for (col, ch) in line.chars().take(WIDTH).enumerate() {
                if ch == '#' {
                    board.occupy(first + offset, col);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Dumps the non-empty rows only, then a separator line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..HEIGHT {
            if self.is_row_empty(row) {
                continue;
            }
            for &cell in self.row(row) {
                f.write_str(if cell { "# " } else { ". " })?;
            }
            writeln!(f)?;
        }
        f.write_str("---------------------------")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("occupied", &self.occupied_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(99, 9), Some(999));
        assert_eq!(Board::index(0, 10), None);
        assert_eq!(Board::index(100, 0), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.occupy(0, 0);
        board.occupy(10, 5);

        assert!(board.cells[0]);
        assert!(board.cells[10 * 10 + 5]);
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut board = Board::new();
        board.occupy(97, 1);
        for col in 0..10 {
            board.occupy(98, col);
        }
        board.occupy(99, 4);

        board.clear_row(98);

        assert!(board.is_occupied(98, 1));
        assert!(!board.is_occupied(97, 1));
        assert!(board.is_occupied(99, 4));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_display_skips_empty_rows() {
        let board = Board::from_rows(&["##........"]);
        let dump = board.to_string();
        let mut lines = dump.lines();
        assert_eq!(lines.next(), Some("# # . . . . . . . . "));
        assert_eq!(lines.next(), Some("---------------------------"));
        assert_eq!(lines.next(), None);
    }
}
