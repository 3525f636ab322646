//! Shapes module - the static tetromino catalog
//!
//! Each piece kind maps to one fixed pattern. There is no rotation: a piece
//! always falls in the orientation listed here. Patterns are written top row
//! first, with `1` marking an occupied cell.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::PieceKind;

/// Offset of a single occupied cell relative to the pattern's top-left corner, as (row, col)
pub type CellOffset = (usize, usize);

/// Occupied cells of a shape (every tetromino has exactly four)
pub type ShapeCells = ArrayVec<CellOffset, 4>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("unknown piece type: {0:?}")]
    UnknownPiece(String),
}

impl ShapeError {
    pub fn code(&self) -> &'static str {
        match self {
            ShapeError::UnknownPiece(_) => "unknown_piece",
        }
    }
}

/// An immutable rectangular occupancy pattern
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    kind: PieceKind,
    rows: &'static [&'static [u8]],
}

impl Shape {
    const fn new(kind: PieceKind, rows: &'static [&'static [u8]]) -> Self {
        Self { kind, rows }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Number of columns in the bounding box
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Number of rows in the bounding box
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the pattern occupies (row, col); false outside the bounding box
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&v| v != 0)
    }

    /// Occupied cells in row-major order
    pub fn cells(&self) -> ShapeCells {
        let mut cells = ShapeCells::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v != 0 {
                    cells.push((r, c));
                }
            }
        }
        cells
    }
}

static CATALOG: [Shape; 7] = [
    Shape::new(PieceKind::Q, &[&[1, 1], &[1, 1]]),
    Shape::new(PieceKind::Z, &[&[1, 1, 0], &[0, 1, 1]]),
    Shape::new(PieceKind::S, &[&[0, 1, 1], &[1, 1, 0]]),
    Shape::new(PieceKind::T, &[&[1, 1, 1], &[0, 1, 0]]),
    Shape::new(PieceKind::I, &[&[1, 1, 1, 1]]),
    Shape::new(PieceKind::L, &[&[1, 0], &[1, 0], &[1, 1]]),
    Shape::new(PieceKind::J, &[&[0, 1], &[0, 1], &[1, 1]]),
];

/// Get the shape for a piece kind
pub fn get_shape(kind: PieceKind) -> &'static Shape {
    &CATALOG[kind.index()]
}

/// Resolve a raw input tag to its shape
pub fn lookup(tag: &str) -> Result<&'static Shape, ShapeError> {
    PieceKind::from_str(tag)
        .map(get_shape)
        .ok_or_else(|| ShapeError::UnknownPiece(tag.to_string()))
}
