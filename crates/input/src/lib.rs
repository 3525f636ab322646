//! Text input module (engine-facing).
//!
//! Turns raw input text into [`crate::types::PieceSpec`]s for the drop engine.
//! Malformed tokens are reported as [`ParseError`]s rather than dropped silently,
//! and never stop the rest of a line from being read.

pub mod parse;

pub use tetromino_drop_types as types;

pub use parse::{case_lines, parse_line, parse_token, CaseLine, ParseError, ParsedLine};
