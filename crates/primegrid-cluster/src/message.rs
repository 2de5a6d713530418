//! Wire messages exchanged between the coordinator and workers.

use serde::{Deserialize, Serialize};

use primegrid_core::Segment;

/// Position of a node in the cluster. Rank 0 is the coordinator, ranks
/// `1..=N` are workers.
pub type Rank = u32;

/// The coordinator's rank.
pub const COORDINATOR: Rank = 0;

/// Reserved candidate value signaling a dynamic worker to exit its loop.
pub const SENTINEL: u64 = 0;

/// Every payload that crosses the cluster.
///
/// Ownership of a candidate or segment transfers with the message; the
/// sender never reads it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Worker startup report: host identity, sent to the coordinator once.
    Hello { hostname: String },

    /// One candidate to test (dynamic strategy). The value
    /// [`SENTINEL`] tells the worker to exit instead.
    Candidate(u64),

    /// A worker's primality verdict for one candidate (dynamic strategy).
    Verdict { candidate: u64, is_prime: bool },

    /// A worker's sub-range assignment (static strategy).
    Assignment(Segment),

    /// Number of primes a worker found in its segment (static strategy).
    PrimeCount(u64),

    /// One discovered prime, sent after [`Message::PrimeCount`] in
    /// discovery order (static strategy).
    Prime(u64),
}

impl Message {
    /// Short payload label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Hello { .. } => "hello",
            Message::Candidate(_) => "candidate",
            Message::Verdict { .. } => "verdict",
            Message::Assignment(_) => "assignment",
            Message::PrimeCount(_) => "prime-count",
            Message::Prime(_) => "prime",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_reserved_zero() {
        assert_eq!(SENTINEL, 0);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(Message::Candidate(17).kind(), "candidate");
        assert_eq!(
            Message::Verdict { candidate: 17, is_prime: true }.kind(),
            "verdict"
        );
    }
}
