//! Static contiguous partitioning of a range across workers.

use crate::range::{Range, Segment};

/// Split `range` into `nodes` contiguous segments of near-equal size.
///
/// `segment_size = (end - start) / nodes` with integer division; segment
/// `i` starts at `start + segment_size * i` and the final segment absorbs
/// the remainder by ending at `range.end()`. When the range spans fewer
/// values than `nodes`, `segment_size` is 0 and every non-final segment is
/// empty; the saturating subtraction keeps the end bound from wrapping at
/// `start == 0` (the final segment still covers the whole range).
pub fn partition(range: &Range, nodes: u32) -> Vec<Segment> {
    assert!(nodes >= 1, "partitioning requires at least one worker");

    let segment_size = (range.end() - range.start()) / u64::from(nodes);

    (0..u64::from(nodes))
        .map(|i| {
            let start = range.start() + segment_size * i;
            let end = if i == u64::from(nodes) - 1 {
                range.end()
            } else {
                (range.start() + segment_size * (i + 1)).saturating_sub(1)
            };
            Segment::new(start, end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_worker_gets_whole_range() {
        let range = Range::new(0, 1000).unwrap();
        let segments = partition(&range, 1);
        assert_eq!(segments, vec![Segment::new(0, 1000)]);
    }

    #[test]
    fn test_even_split() {
        let range = Range::new(0, 99).unwrap();
        let segments = partition(&range, 4);
        assert_eq!(
            segments,
            vec![
                Segment::new(0, 23),
                Segment::new(24, 47),
                Segment::new(48, 71),
                Segment::new(72, 99),
            ]
        );
    }

    #[test]
    fn test_last_segment_absorbs_remainder() {
        let range = Range::new(10, 20).unwrap();
        let segments = partition(&range, 3);
        assert_eq!(
            segments,
            vec![
                Segment::new(10, 12),
                Segment::new(13, 15),
                Segment::new(16, 20),
            ]
        );
    }

    #[test]
    fn test_contiguous_disjoint_exhaustive() {
        let range = Range::new(12345, 999_999).unwrap();
        let segments = partition(&range, 7);
        assert_eq!(segments.len(), 7);
        assert_eq!(segments[0].start, range.start());
        assert_eq!(segments.last().unwrap().end, range.end());
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end + 1, pair[1].start);
        }
    }

    #[test]
    fn test_span_smaller_than_nodes() {
        // segment_size is 0: leading segments are empty, the last one
        // covers everything, and nothing wraps below start = 0.
        let range = Range::new(0, 2).unwrap();
        let segments = partition(&range, 5);
        assert_eq!(segments.len(), 5);
        for segment in &segments[..4] {
            assert_eq!(segment.candidates().count(), 0);
        }
        assert_eq!(segments[4], Segment::new(0, 2));
    }

    #[test]
    fn test_top_of_domain() {
        let range = Range::new(u64::MAX - 99, u64::MAX).unwrap();
        let segments = partition(&range, 4);
        assert_eq!(segments.last().unwrap().end, u64::MAX);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end + 1, pair[1].start);
        }
    }
}
