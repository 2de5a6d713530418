//! Core domain errors.

use thiserror::Error;

/// Core domain errors for Primegrid.
///
/// All variants are configuration errors: they are detected before any work
/// is dispatched and terminate the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Range bounds are inverted.
    #[error("Invalid range: start {start} is bigger than end {end}")]
    InvertedRange { start: u64, end: u64 },

    /// A distributed strategy was selected but no worker ranks exist.
    #[error("No workers for computation: the cluster needs at least 2 nodes")]
    NoWorkers,

    /// Unknown scenario name.
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),
}
