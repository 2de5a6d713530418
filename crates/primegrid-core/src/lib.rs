//! Primegrid Core Domain Types
//!
//! This crate contains the pure computational domain with no dependencies on:
//! - The cluster runtime
//! - Async/tokio specifics
//! - Console reporting
//!
//! Everything here is deterministic and synchronous: the primality kernel,
//! candidate enumeration, range partitioning, and the named run scenarios.

pub mod error;
pub mod kernel;
pub mod partition;
pub mod range;
pub mod scenario;
pub mod sequencer;

// Re-export commonly used types
pub use error::CoreError;
pub use kernel::is_prime;
pub use partition::partition;
pub use range::{Range, Segment};
pub use scenario::Scenario;
pub use sequencer::CandidateSequencer;
