//! Text input parsing: lines of comma-separated `<tag><column>` tokens.
//!
//! A token's column is its final character, which must be a decimal digit.
//! Everything before it is the piece tag, kept verbatim so the shape catalog
//! can decide whether it names a real piece.

use thiserror::Error;

use crate::types::{PieceSpec, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty piece token")]
    Empty,
    #[error("piece token {token:?} has no column")]
    MissingColumn { token: String },
    #[error("piece token {token:?} does not end in a column digit")]
    InvalidColumn { token: String },
    #[error("column {column} in piece token {token:?} is outside the board")]
    ColumnOutOfRange { token: String, column: usize },
}

impl ParseError {
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Empty => "empty_token",
            ParseError::MissingColumn { .. } => "missing_column",
            ParseError::InvalidColumn { .. } => "invalid_column",
            ParseError::ColumnOutOfRange { .. } => "column_out_of_range",
        }
    }
}

/// Parse a single token such as `Q4` or ` L0 `.
pub fn parse_token(token: &str) -> Result<PieceSpec<'_>, ParseError> {
    let token = token.trim();
    let Some(last) = token.chars().next_back() else {
        return Err(ParseError::Empty);
    };
    if token.chars().count() < 2 {
        return Err(ParseError::MissingColumn {
            token: token.to_string(),
        });
    }

    let Some(column) = last.to_digit(10).map(|d| d as usize) else {
        return Err(ParseError::InvalidColumn {
            token: token.to_string(),
        });
    };
    if column >= BOARD_WIDTH as usize {
        return Err(ParseError::ColumnOutOfRange {
            token: token.to_string(),
            column,
        });
    }

    let tag = token[..token.len() - last.len_utf8()].trim();
    Ok(PieceSpec::new(tag, column))
}

/// Pieces accepted from one line, plus the tokens that were rejected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub pieces: Vec<PieceSpec<'a>>,
    pub errors: Vec<ParseError>,
}

/// Split a line on commas and parse every token, keeping input order.
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    let mut parsed = ParsedLine::default();
    for token in line.split(',') {
        match parse_token(token) {
            Ok(spec) => parsed.pieces.push(spec),
            Err(err) => parsed.errors.push(err),
        }
    }
    parsed
}

/// One non-blank input line and its 1-based position in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseLine<'a> {
    pub line_no: usize,
    pub text: &'a str,
}

/// Iterate the test cases of an input text, skipping blank lines.
///
/// Line numbers count blank lines too, so they always match the source.
pub fn case_lines(input: &str) -> impl Iterator<Item = CaseLine<'_>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(i, text)| CaseLine {
            line_no: i + 1,
            text: text.trim_end(),
        })
}
