//! Strategy B: static contiguous range partitioning.
//!
//! The coordinator splits the range into one segment per worker, sends
//! each assignment exactly once, then drains results one worker at a time
//! in ascending rank order: first that worker's found-count, then exactly
//! that many primes. Workers exit after completing their single
//! assignment, so no termination signal exists in this protocol.

use async_trait::async_trait;
use tracing::debug;

use primegrid_cluster::{Message, Rank, Transport, COORDINATOR};
use primegrid_core::{is_prime, partition, CoreError, Range};

use crate::error::ProtocolError;
use crate::report::{RunReport, Source};
use crate::strategy::DistributionStrategy;

/// One-shot range assignment and ordered result gathering.
pub struct StaticPartition;

#[async_trait]
impl DistributionStrategy for StaticPartition {
    fn name(&self) -> &'static str {
        "static partition"
    }

    async fn dispatch_and_collect(
        &self,
        transport: &mut dyn Transport,
        range: &Range,
        report: &mut RunReport,
    ) -> Result<(), ProtocolError> {
        let workers = transport.workers();
        if workers == 0 {
            return Err(CoreError::NoWorkers.into());
        }

        // One segment per worker, sent exactly once.
        for (i, segment) in partition(range, workers).into_iter().enumerate() {
            let dest = i as Rank + 1;
            debug!(%segment, dest, "sending segment assignment");
            transport.send(dest, Message::Assignment(segment)).await?;
        }

        // Drain each worker fully before moving to the next; total
        // transfer latency is the sum over workers, not the max.
        for rank in 1..=workers {
            let count = match transport.recv(rank).await? {
                Message::PrimeCount(count) => count,
                other => {
                    return Err(ProtocolError::UnexpectedMessage {
                        from: rank,
                        kind: other.kind(),
                    })
                }
            };
            debug!(rank, count, "worker reported prime count");

            for _ in 0..count {
                match transport.recv(rank).await? {
                    Message::Prime(value) => report.record(Source::Worker(rank), value),
                    other => {
                        return Err(ProtocolError::UnexpectedMessage {
                            from: rank,
                            kind: other.kind(),
                        })
                    }
                }
            }
        }
        Ok(())
    }

    async fn serve(&self, transport: &mut dyn Transport) -> Result<(), ProtocolError> {
        let segment = match transport.recv(COORDINATOR).await? {
            Message::Assignment(segment) => segment,
            other => {
                return Err(ProtocolError::UnexpectedMessage {
                    from: COORDINATOR,
                    kind: other.kind(),
                })
            }
        };
        debug!(rank = transport.rank(), %segment, "received segment assignment");

        // Scan the whole segment before reporting anything; discovery
        // order is ascending because the sequencer is monotonic.
        let mut primes = Vec::new();
        for candidate in segment.candidates() {
            if is_prime(candidate) {
                primes.push(candidate);
            }
        }
        debug!(rank = transport.rank(), found = primes.len(), "segment scan complete");

        transport
            .send(COORDINATOR, Message::PrimeCount(primes.len() as u64))
            .await?;
        for value in primes {
            transport.send(COORDINATOR, Message::Prime(value)).await?;
        }
        Ok(())
    }
}
