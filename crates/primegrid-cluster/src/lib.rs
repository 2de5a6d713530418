//! Primegrid Cluster Runtime
//!
//! Typed point-to-point messaging between a fixed set of ranks. Rank 0 is
//! the coordinator; ranks `1..=N` are workers. The transport exposes only
//! blocking-style `send`/`recv` rendezvous, matching the cluster model the
//! protocols are written against: a process suspends only on receives, and
//! sends are fire-and-forget.

pub mod error;
pub mod local;
pub mod message;
pub mod transport;

// Re-export commonly used types
pub use error::ClusterError;
pub use local::{LocalCluster, LocalEndpoint};
pub use message::{Message, Rank, COORDINATOR, SENTINEL};
pub use transport::Transport;
