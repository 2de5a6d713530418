//! Cluster transport errors.

use thiserror::Error;

use crate::message::Rank;

/// Transport-level errors.
///
/// There is no retry or recovery: any of these aborts the run. A peer that
/// merely computes slowly is not an error; the transport blocks on it
/// indefinitely.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClusterError {
    /// The destination or source rank does not exist in this cluster.
    #[error("Rank {0} does not exist in this cluster")]
    UnknownPeer(Rank),

    /// The peer's endpoint was dropped mid-run.
    #[error("Rank {0} disconnected")]
    Disconnected(Rank),
}
