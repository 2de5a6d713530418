//! Strategy A: dynamic per-candidate dispatch.
//!
//! The coordinator walks the candidate sequence and hands out one value at
//! a time, round-robin over the worker ranks. After each full round (or a
//! final partial one) it collects exactly one verdict from every worker it
//! dispatched to, in ascending rank order. That round barrier means a slow
//! candidate on a low rank delays reporting of faster results from higher
//! ranks in the same round: head-of-line blocking is part of the
//! protocol's observable contract.

use async_trait::async_trait;
use tracing::debug;

use primegrid_cluster::{Message, Transport, COORDINATOR, SENTINEL};
use primegrid_core::{is_prime, CoreError, Range};

use crate::error::ProtocolError;
use crate::report::{RunReport, Source};
use crate::strategy::DistributionStrategy;

/// Round-robin single-candidate dispatch with round-barrier collection.
pub struct DynamicDispatch;

#[async_trait]
impl DistributionStrategy for DynamicDispatch {
    fn name(&self) -> &'static str {
        "dynamic dispatch"
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

        let mut candidates = range.candidates();

        loop {
            // Dispatching: fill one round. Each round restarts at rank 1,
            // so the ranks holding work are always 1..=dispatched.
            let mut dispatched = 0;
            while dispatched < workers {
                let Some(candidate) = candidates.next() else {
                    break;
                };
                let dest = dispatched + 1;
                debug!(candidate, dest, "dispatching candidate");
                transport.send(dest, Message::Candidate(candidate)).await?;
                dispatched += 1;
            }
            if dispatched == 0 {
                break;
            }

            // Collecting: one verdict per dispatched rank, ascending,
            // regardless of which worker finished first.
            for rank in 1..=dispatched {
                match transport.recv(rank).await? {
                    Message::Verdict { candidate, is_prime } => {
                        debug!(rank, candidate, is_prime, "collected verdict");
                        if is_prime {
                            report.record(Source::Worker(rank), candidate);
                        }
                    }
                    other => {
                        return Err(ProtocolError::UnexpectedMessage {
                            from: rank,
                            kind: other.kind(),
                        })
                    }
                }
            }
        }

        // Terminating: release every worker from its serve loop.
        debug!("search exhausted, sending exit sentinel to all workers");
        for rank in 1..=workers {
            transport.send(rank, Message::Candidate(SENTINEL)).await?;
        }
        Ok(())
    }

    async fn serve(&self, transport: &mut dyn Transport) -> Result<(), ProtocolError> {
        loop {
            match transport.recv(COORDINATOR).await? {
                Message::Candidate(SENTINEL) => {
                    debug!(rank = transport.rank(), "received exit sentinel");
                    break;
                }
                Message::Candidate(candidate) => {
                    let verdict = is_prime(candidate);
                    debug!(rank = transport.rank(), candidate, verdict, "tested candidate");
                    transport
                        .send(
                            COORDINATOR,
                            Message::Verdict {
                                candidate,
                                is_prime: verdict,
                            },
                        )
                        .await?;
                }
                other => {
                    return Err(ProtocolError::UnexpectedMessage {
                        from: COORDINATOR,
                        kind: other.kind(),
                    })
                }
            }
        }
        Ok(())
    }
}
