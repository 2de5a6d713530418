//! In-process cluster runtime over per-pair channels.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::trace;

use crate::error::ClusterError;
use crate::message::{Message, Rank};
use crate::transport::Transport;

/// An in-process cluster of `size` ranks connected by unbounded mpsc
/// channels, one per ordered rank pair.
///
/// Unbounded because the cluster model has no flow control: a send never
/// suspends the sender, it only enqueues. Per-pair channels keep
/// `recv(src)` selective without any demultiplexing state.
pub struct LocalCluster;

impl LocalCluster {
    /// Wire up a cluster of `size` ranks and hand back one endpoint per
    /// rank, in rank order. Endpoint `i` is moved into the task that
    /// plays rank `i`.
    pub fn new(size: u32) -> Vec<LocalEndpoint> {
        assert!(size >= 1, "a cluster has at least the coordinator");

        let mut senders: Vec<HashMap<Rank, mpsc::UnboundedSender<Message>>> =
            (0..size).map(|_| HashMap::new()).collect();
        let mut receivers: Vec<HashMap<Rank, mpsc::UnboundedReceiver<Message>>> =
            (0..size).map(|_| HashMap::new()).collect();

        for from in 0..size {
            for to in 0..size {
                if from == to {
                    continue;
                }
                let (tx, rx) = mpsc::unbounded_channel();
                senders[from as usize].insert(to, tx);
                receivers[to as usize].insert(from, rx);
            }
        }

        senders
            .into_iter()
            .zip(receivers)
            .enumerate()
            .map(|(rank, (outbound, inbound))| LocalEndpoint {
                rank: rank as Rank,
                size,
                outbound,
                inbound,
            })
            .collect()
    }
}

/// One rank's view of the local cluster.
pub struct LocalEndpoint {
    rank: Rank,
    size: u32,
    outbound: HashMap<Rank, mpsc::UnboundedSender<Message>>,
    inbound: HashMap<Rank, mpsc::UnboundedReceiver<Message>>,
}

#[async_trait]
impl Transport for LocalEndpoint {
    fn rank(&self) -> Rank {
        self.rank
    }

    fn size(&self) -> u32 {
        self.size
    }

    async fn send(&mut self, dest: Rank, message: Message) -> Result<(), ClusterError> {
        trace!(from = self.rank, to = dest, kind = message.kind(), "send");
        let tx = self
            .outbound
            .get(&dest)
            .ok_or(ClusterError::UnknownPeer(dest))?;
        tx.send(message).map_err(|_| ClusterError::Disconnected(dest))
    }

    async fn recv(&mut self, src: Rank) -> Result<Message, ClusterError> {
        let rx = self
            .inbound
            .get_mut(&src)
            .ok_or(ClusterError::UnknownPeer(src))?;
        let message = rx.recv().await.ok_or(ClusterError::Disconnected(src))?;
        trace!(at = self.rank, from = src, kind = message.kind(), "recv");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_point_to_point_delivery() {
        let mut endpoints = LocalCluster::new(2);
        let mut worker = endpoints.pop().unwrap();
        let mut coordinator = endpoints.pop().unwrap();

        coordinator.send(1, Message::Candidate(17)).await.unwrap();
        assert_eq!(worker.recv(0).await.unwrap(), Message::Candidate(17));

        worker
            .send(0, Message::Verdict { candidate: 17, is_prime: true })
            .await
            .unwrap();
        assert_eq!(
            coordinator.recv(1).await.unwrap(),
            Message::Verdict { candidate: 17, is_prime: true }
        );
    }

    #[tokio::test]
    async fn test_per_sender_fifo_order() {
        let mut endpoints = LocalCluster::new(2);
        let mut worker = endpoints.pop().unwrap();
        let mut coordinator = endpoints.pop().unwrap();

        for n in [3u64, 5, 7] {
            coordinator.send(1, Message::Candidate(n)).await.unwrap();
        }
        for n in [3u64, 5, 7] {
            assert_eq!(worker.recv(0).await.unwrap(), Message::Candidate(n));
        }
    }

    #[tokio::test]
    async fn test_recv_is_selective_by_source() {
        let mut endpoints = LocalCluster::new(3);
        let mut worker2 = endpoints.pop().unwrap();
        let mut worker1 = endpoints.pop().unwrap();
        let mut coordinator = endpoints.pop().unwrap();

        // Worker 2's result arrives first, but a selective receive from
        // worker 1 must not see it.
        worker2
            .send(0, Message::Verdict { candidate: 9, is_prime: false })
            .await
            .unwrap();
        worker1
            .send(0, Message::Verdict { candidate: 7, is_prime: true })
            .await
            .unwrap();

        assert_eq!(
            coordinator.recv(1).await.unwrap(),
            Message::Verdict { candidate: 7, is_prime: true }
        );
        assert_eq!(
            coordinator.recv(2).await.unwrap(),
            Message::Verdict { candidate: 9, is_prime: false }
        );
    }

    #[tokio::test]
    async fn test_unknown_peer_rejected() {
        let mut endpoints = LocalCluster::new(2);
        let mut coordinator = endpoints.remove(0);
        let err = coordinator.send(5, Message::Candidate(3)).await.unwrap_err();
        assert_eq!(err, ClusterError::UnknownPeer(5));
    }

    #[tokio::test]
    async fn test_dropped_peer_surfaces_disconnect() {
        let mut endpoints = LocalCluster::new(2);
        let worker = endpoints.pop().unwrap();
        let mut coordinator = endpoints.pop().unwrap();

        drop(worker);
        let err = coordinator.recv(1).await.unwrap_err();
        assert_eq!(err, ClusterError::Disconnected(1));
    }
}
