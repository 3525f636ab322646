//! Drop engine - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: the shape catalog, the board,
//! gravity and placement, row clearing, and height measurement.
//! It has **zero dependencies** on I/O, so it can be driven from the CLI,
//! from tests, or from benches alike.
//!
//! # Module Structure
//!
//! - [`shapes`]: static tetromino catalog keyed by piece tag
//! - [`board`]: 10x100 occupancy grid with collision queries
//! - [`drop`]: gravity simulation and placement of a single piece
//! - [`clear`]: full-row removal with compaction of the rows above
//! - [`height`]: contiguous stack height from the floor
//! - [`sim`]: one test case from empty board to final height
//!
//! # Rules
//!
//! - Pieces never rotate; each tag has one fixed orientation
//! - A piece enters at the top and falls straight down until any of its cells
//!   would hit the floor or a filled cell
//! - Full rows are removed right after each placement
//! - Height counts rows from the floor up to the top of the contiguous stack
//!
//! # Example
//!
//! ```
//! use tetromino_drop_core::Simulation;
//! use tetromino_drop_types::PieceSpec;
//!
//! let mut sim = Simulation::new();
//! let report = sim.run_case([PieceSpec::new("Q", 0), PieceSpec::new("Q", 1)]);
//! assert_eq!(report.height, 4);
//! ```

pub mod board;
pub mod clear;
pub mod drop;
pub mod height;
pub mod shapes;
pub mod sim;

pub use tetromino_drop_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clear::clear_full_rows;
pub use drop::{drop_piece, DropError, Landing, Piece};
pub use height::stack_height;
pub use shapes::{get_shape, lookup, Shape, ShapeError};
pub use sim::{CaseReport, Simulation};
