//! Benchmark harness around the adder.
//!
//! - [`config`] - validated run settings
//! - [`input`] - random operand generation
//! - [`runner`] - the timed loop and its report
//! - [`trace`] - per-addition diagnostic output

pub mod config;
pub mod input;
pub mod runner;
pub mod trace;

pub use config::{BenchConfig, ConfigError};
pub use input::{OperandBatch, OperandBatches};
pub use runner::{run, time_additions, BenchReport};

use thiserror::Error;

/// Errors that can end a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
