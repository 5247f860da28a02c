//! CLI error type and exit-code mapping.
//!
//! Library errors bubble up unchanged; the process exit code is non-zero
//! whenever `main` returns an error.

use thiserror::Error;
use xva_core::types::GridError;
use xva_engine::adjustments::AdjustmentError;
use xva_engine::error::EngineError;
use xva_models::instruments::InstrumentError;
use xva_models::simulation::SimulationError;

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the user by the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file missing on disk.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration file failed to parse.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem error during export.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV export error.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON serialisation error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Time grid construction error.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Path simulation error.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Instrument construction error.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Exposure engine error.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Adjustment parameter error.
    #[error(transparent)]
    Adjustment(#[from] AdjustmentError),
}
