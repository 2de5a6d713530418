//! Protocol-level errors.

use thiserror::Error;

use primegrid_cluster::{ClusterError, Rank};
use primegrid_core::CoreError;

/// Errors raised while driving a distribution protocol.
///
/// All of these are terminal for the whole run; there is no per-candidate
/// or per-worker recovery.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// Configuration error detected before any work was dispatched.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Transport failure.
    #[error("Cluster transport error: {0}")]
    Cluster(#[from] ClusterError),

    /// A peer sent a message the protocol state machine cannot accept.
    #[error("Unexpected {kind} message from rank {from}")]
    UnexpectedMessage { from: Rank, kind: &'static str },

    /// Unknown strategy name on the command line.
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
}
