//! Inclusive ranges of 64-bit candidates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;
use crate::sequencer::CandidateSequencer;

/// A validated inclusive range `[start, end]` over the u64 domain.
///
/// `start <= end` is an invariant: construction fails otherwise, so every
/// `Range` held by a coordinator is known to be well-formed before any
/// work is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    start: u64,
    end: u64,
}

impl Range {
    /// Create a new Range, rejecting inverted bounds.
    pub fn new(start: u64, end: u64) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Inclusive upper bound.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of integers covered, saturating at `u64::MAX` for the full
    /// domain (which covers `2^64` values, one more than u64 can hold).
    pub fn len(&self) -> u64 {
        (self.end - self.start).saturating_add(1)
    }

    /// An inclusive range is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Enumerate the candidates to test in this range.
    pub fn candidates(&self) -> CandidateSequencer {
        CandidateSequencer::new(self.start, self.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}; {}]", self.start, self.end)
    }
}

/// Raw sub-range bounds assigned to one worker.
///
/// Unlike [`Range`], a `Segment` carries no invariant: an inverted pair is a
/// valid empty assignment (the sequencer over it emits nothing). The static
/// partitioner hands these out and the receiving worker scans them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Inclusive lower bound.
    pub start: u64,
    /// Inclusive upper bound; may be below `start` for an empty assignment.
    pub end: u64,
}

impl Segment {
    /// Create a new Segment.
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Enumerate the candidates to test in this segment.
    pub fn candidates(&self) -> CandidateSequencer {
        CandidateSequencer::new(self.start, self.end)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}; {}>", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = Range::new(15, 13).unwrap_err();
        assert_eq!(err, CoreError::InvertedRange { start: 15, end: 13 });
    }

    #[test]
    fn test_range_accepts_single_value() {
        let range = Range::new(7, 7).unwrap();
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn test_full_domain_len_saturates() {
        let range = Range::new(0, u64::MAX).unwrap();
        assert_eq!(range.len(), u64::MAX);
    }

    #[test]
    fn test_segment_allows_inverted_bounds() {
        let segment = Segment::new(10, 9);
        assert_eq!(segment.candidates().count(), 0);
    }
}
