//! Case simulation - runs one input line's pieces against a reusable board

use tracing::{info, warn};

use crate::board::Board;
use crate::drop::{drop_piece, Piece};
use crate::height::stack_height;
use crate::types::PieceSpec;

/// Outcome of one test case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseReport {
    /// Contiguous stack height after the last piece
    pub height: usize,
    /// Pieces that locked onto the board
    pub placed: usize,
    /// Pieces rejected by the catalog or the column check
    pub skipped: usize,
    /// Total rows cleared over the case
    pub rows_cleared: usize,
}

/// Owns the board and reuses it across cases; every case starts empty.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    board: Board,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board state left by the most recent case
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Reset the board, drop every piece in order, and measure the stack.
    ///
    /// A piece that cannot be resolved or positioned is logged and skipped; the
    /// rest of the case still runs.
    pub fn run_case<'a, I>(&mut self, specs: I) -> CaseReport
    where
        I: IntoIterator<Item = PieceSpec<'a>>,
    {
        self.board.reset();
        let mut report = CaseReport::default();

        for spec in specs {
            let landed = Piece::from_spec(&spec).map(|p| drop_piece(&mut self.board, &p));
            match landed {
                Ok(landing) => {
                    report.placed += 1;
                    report.rows_cleared += landing.cleared;
                }
                Err(err) => {
                    warn!(
                        tag = spec.tag,
                        column = spec.column,
                        code = err.code(),
                        "skipping piece: {}",
                        err
                    );
                    report.skipped += 1;
                }
            }
        }

        report.height = stack_height(&self.board);
        info!(
            height = report.height,
            placed = report.placed,
            skipped = report.skipped,
            rows_cleared = report.rows_cleared,
            "case finished"
        );
        report
    }
}
