//! Tetromino drop runner (default binary).
//!
//! Reads one test case per input line, drops every piece of the case onto a
//! fresh board, and prints the resulting stack height.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::prelude::*;

use tetromino_drop::core::{Piece, Simulation};
use tetromino_drop::input::{case_lines, parse_line};
use tetromino_drop::output::{render, CaseResult, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "tetromino-drop", about)]
struct Args {
    /// Input file with one comma-separated case per line; `-` reads stdin
    #[arg(short = 'i', long = "input", default_value = "input.txt")]
    input: PathBuf,

    /// Debug mode: preview parsed pieces and dump boards
    #[arg(short = 'd', long)]
    debug: bool,

    /// Increase verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Result format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Args {
    fn log_level(&self) -> Level {
        let floor = if self.debug { 2 } else { 0 };
        match self.verbose.max(floor) {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("couldn't read input from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("couldn't read input file {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = args.log_level();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
    info!("Logging initialized at level: {}", level);

    let text = read_input(&args.input)?;
    run(&text, &args)
}

fn run(text: &str, args: &Args) -> Result<()> {
    let mut sim = Simulation::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (case, line) in case_lines(text).enumerate() {
        let parsed = parse_line(line.text);
        for err in &parsed.errors {
            warn!(line = line.line_no, code = err.code(), "rejected token: {}", err);
        }

        if args.debug {
            debug!("Case {} input: {}", line.line_no, line.text);
            for spec in &parsed.pieces {
                if let Ok(piece) = Piece::from_spec(spec) {
                    debug!("\n{}", piece);
                }
            }
        }

        let report = sim.run_case(parsed.pieces.iter().copied());
        debug!("board at height calculation:\n{}", sim.board());

        let result = CaseResult::new(case + 1, line.line_no, &report);
        out.write_all(render(&result, args.format)?.as_bytes())
            .context("couldn't write result")?;
    }

    out.flush().context("couldn't flush output")?;
    Ok(())
}
