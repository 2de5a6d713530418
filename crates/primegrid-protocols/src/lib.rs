//! Primegrid Distribution Protocols
//!
//! The coordinator/worker halves of the two work-distribution strategies,
//! the single-node baseline, and the glue that boots a local cluster and
//! runs one of them to completion:
//!
//! - [`dynamic::DynamicDispatch`] hands out one candidate at a time,
//!   round-robin, and collects verdicts behind a per-round barrier.
//! - [`static_partition::StaticPartition`] splits the range into one
//!   contiguous segment per worker up front and gathers results once.
//! - [`sequential`] runs the same kernel with no messaging at all, as the
//!   correctness and speedup baseline.

pub mod dynamic;
pub mod error;
pub mod report;
pub mod runner;
pub mod sequential;
pub mod static_partition;
pub mod strategy;
pub mod topology;

// Re-export commonly used types
pub use error::ProtocolError;
pub use report::{RunReport, Source};
pub use runner::{run, RunConfig};
pub use strategy::{DistributionStrategy, StrategyKind};
