//! Tetromino drop simulator (workspace facade crate).
//!
//! Exposes `tetromino_drop::{core,input,types}` while the implementation lives
//! in dedicated crates under `crates/`, plus the result formatting used by the
//! command-line runner.

pub mod output;

pub use tetromino_drop_core as core;
pub use tetromino_drop_input as input;
pub use tetromino_drop_types as types;
