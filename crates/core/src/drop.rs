//! Drop engine - gravity, collision, and placement of a single piece
//!
//! A piece enters with its top row at row 0 and falls one row at a time while
//! every occupied cell has a free cell directly below it. It locks where the
//! first obstruction (the floor or a filled cell) stops it, and the row clearer
//! runs immediately afterwards.

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::board::Board;
use crate::clear::clear_full_rows;
use crate::shapes::{self, Shape, ShapeError};
use crate::types::{PieceSpec, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropError {
    #[error(transparent)]
    UnknownPiece(#[from] ShapeError),
    #[error("piece of width {width} at column {column} does not fit the board")]
    OutOfBounds { column: usize, width: usize },
}

impl DropError {
    pub fn code(&self) -> &'static str {
        match self {
            DropError::UnknownPiece(e) => e.code(),
            DropError::OutOfBounds { .. } => "out_of_bounds",
        }
    }
}

/// Where a piece came to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    /// Board row of the shape's top edge
    pub row: usize,
    /// Full rows removed after the piece locked
    pub cleared: usize,
}

/// A shape positioned at a column, ready to drop
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    shape: &'static Shape,
    column: usize,
}

impl Piece {
    /// Position a shape so its leftmost column is `column`.
    /// Fails if any part of the shape would hang past the right edge.
    pub fn new(shape: &'static Shape, column: usize) -> Result<Self, DropError> {
        if column + shape.width() > BOARD_WIDTH as usize {
            return Err(DropError::OutOfBounds {
                column,
                width: shape.width(),
            });
        }
        Ok(Self { shape, column })
    }

    /// Resolve a parsed spec through the shape catalog
    pub fn from_spec(spec: &PieceSpec<'_>) -> Result<Self, DropError> {
        let shape = shapes::lookup(spec.tag)?;
        Self::new(shape, spec.column)
    }

    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Whether the piece, top edge at `row`, could fall one more row
    pub fn can_move_down(&self, board: &Board, row: usize) -> bool {
        self.shape
            .cells()
            .iter()
            .all(|&(r, c)| !board.is_blocked(row + r + 1, self.column + c))
    }

    /// Row at which the piece locks when released from the top.
    ///
    /// A stack already reaching the top row stops the piece at row 0, where
    /// it fills whatever cells are still free.
    pub fn resting_row(&self, board: &Board) -> usize {
        let mut row = 0;
        while self.can_move_down(board, row) {
            row += 1;
        }
        row
    }

    /// Write the piece into the board with its top edge at `row`.
    /// Cells falling outside the board are skipped.
    pub fn place(&self, board: &mut Board, row: usize) {
        for (r, c) in self.shape.cells() {
            board.occupy(row + r, self.column + c);
        }
    }
}

/// Centered 4x4 preview used in debug output
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let off_row = 4usize.saturating_sub(self.shape.height()) / 2;
        let off_col = 4usize.saturating_sub(self.shape.width()) / 2;

        writeln!(
            f,
            "Piece {}: column={}",
            self.shape.kind().as_char(),
            self.column
        )?;
        for r in 0..4 {
            for c in 0..4 {
                let filled = r >= off_row
                    && c >= off_col
                    && self.shape.is_filled(r - off_row, c - off_col);
                f.write_str(if filled { "# " } else { ". " })?;
            }
            if r < 3 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Drop a piece from the top, lock it, and clear any rows it completed
pub fn drop_piece(board: &mut Board, piece: &Piece) -> Landing {
    let row = piece.resting_row(board);
    piece.place(board, row);
    let cleared = clear_full_rows(board);

    debug!(
        piece = %piece.shape().kind().as_char(),
        column = piece.column(),
        row,
        cleared,
        "piece locked"
    );
    trace!("board after placement:\n{}", board);

    Landing { row, cleared }
}
