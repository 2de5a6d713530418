//! The single-node baseline.
//!
//! Composes the candidate sequencer directly with the primality kernel,
//! with no cluster involved. Used to validate the distributed strategies
//! and as the lower bound for speedup measurement.

use tracing::debug;

use primegrid_core::{is_prime, Range};

use crate::report::{RunReport, Source};

/// Scan the full range on the calling thread, reporting each prime as it
/// is discovered.
pub fn scan(range: &Range, report: &mut RunReport) {
    for candidate in range.candidates() {
        let verdict = is_prime(candidate);
        debug!(candidate, verdict, "tested candidate");
        if verdict {
            report.record(Source::SingleNode, candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primes_below_100() {
        let range = Range::new(0, 100).unwrap();
        let mut report = RunReport::start("single node");
        scan(&range, &mut report);
        assert_eq!(report.found(), 25);
        assert_eq!(
            report.prime_values()[..5],
            [2, 3, 5, 7, 11]
        );
    }

    #[test]
    fn test_empty_candidate_range() {
        let range = Range::new(0, 1).unwrap();
        let mut report = RunReport::start("single node");
        scan(&range, &mut report);
        assert_eq!(report.found(), 0);
    }

    #[test]
    fn test_domain_ceiling_terminates() {
        let range = Range::new(u64::MAX - 1, u64::MAX).unwrap();
        let mut report = RunReport::start("single node");
        scan(&range, &mut report);
        assert_eq!(report.found(), 0);
    }
}
