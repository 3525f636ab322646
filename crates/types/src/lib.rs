//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable from the engine, the text parser, and the command-line runner alike.
//!
//! # Board Dimensions
//!
//! The drop board is a tall, narrow well:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 100 rows (indexed 0-99, top to bottom)
//!
//! Pieces always enter at row 0 and fall toward row 99.
//!
//! # Piece Tags
//!
//! | Tag | Piece | Footprint |
//! |-----|-------|-----------|
//! | `Q` | square | 2x2 |
//! | `Z` | zigzag | 3 wide, 2 tall |
//! | `S` | zigzag (mirror of Z) | 3 wide, 2 tall |
//! | `T` | tee, stem pointing down | 3 wide, 2 tall |
//! | `I` | bar | 4 wide, 1 tall |
//! | `L` | hook, foot to the right | 2 wide, 3 tall |
//! | `J` | hook, foot to the left | 2 wide, 3 tall |
//!
//! # Examples
//!
//! ```
//! use tetromino_drop_types::{PieceKind, PieceSpec, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("Q"), Some(PieceKind::Q));
//! assert_eq!(PieceKind::from_str("q"), None);
//!
//! let spec = PieceSpec::new("T", 3);
//! assert_eq!(spec.kind(), Some(PieceKind::T));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 100);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (100 rows)
pub const BOARD_HEIGHT: u8 = 100;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

/// The seven piece kinds accepted by the drop engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Q,
    Z,
    S,
    T,
    I,
    L,
    J,
}

impl PieceKind {
    /// Every piece kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Q,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Parse piece kind from its tag (case-sensitive, single letter)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_drop_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("I"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("LL"), None);
    /// assert_eq!(PieceKind::from_str(""), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Parse piece kind from a single tag character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'Q' => Some(PieceKind::Q),
            'Z' => Some(PieceKind::Z),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            'I' => Some(PieceKind::I),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            _ => None,
        }
    }

    /// Tag character used in input lines
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::Q => 'Q',
            PieceKind::Z => 'Z',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::I => 'I',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
        }
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// One parsed piece request: the raw tag as written plus the target column.
///
/// The tag is kept verbatim so an unrecognized tag can travel to the engine
/// and be reported by the shape catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSpec<'a> {
    pub tag: &'a str,
    pub column: usize,
}

impl<'a> PieceSpec<'a> {
    pub fn new(tag: &'a str, column: usize) -> Self {
        Self { tag, column }
    }

    /// Resolve the tag to a known kind, if it is one
    pub fn kind(&self) -> Option<PieceKind> {
        PieceKind::from_str(self.tag)
    }
}
