//! Per-case result rendering.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::CaseReport;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `Case <line> Resulting Height:<h>` followed by a blank line
    #[default]
    Text,
    /// Just the height, one per line
    Plain,
    /// One JSON object per line
    Json,
}

/// The reportable outcome of one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    /// 1-based ordinal among non-blank lines
    pub case: usize,
    /// 1-based line number in the input
    pub line: usize,
    pub height: usize,
    pub placed: usize,
    pub skipped: usize,
}

impl CaseResult {
    pub fn new(case: usize, line: usize, report: &CaseReport) -> Self {
        Self {
            case,
            line,
            height: report.height,
            placed: report.placed,
            skipped: report.skipped,
        }
    }
}

/// Render one result, including its trailing newline(s).
pub fn render(result: &CaseResult, format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            writeln!(out, "Case {} Resulting Height:{}", result.line, result.height)?;
            writeln!(out)?;
        }
        OutputFormat::Plain => writeln!(out, "{}", result.height)?,
        OutputFormat::Json => {
            let json = serde_json::to_string(result).context("serialize case result")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(out)
}
