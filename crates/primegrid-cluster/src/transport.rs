//! The point-to-point transport abstraction the protocols are written against.

use async_trait::async_trait;

use crate::error::ClusterError;
use crate::message::{Message, Rank};

/// Synchronous, ordered, point-to-point message exchange between ranks.
///
/// Semantics the protocols rely on:
/// - `recv(src)` suspends until a message from exactly `src` arrives;
///   messages from one sender are delivered in send order.
/// - `send` completes immediately from the caller's perspective; the
///   runtime buffers in-flight messages transparently and guarantees
///   eventual delivery absent failure.
///
/// There is no timeout, no cancellation, and no flow control. A peer that
/// never sends leaves the receiver suspended forever.
#[async_trait]
pub trait Transport: Send {
    /// This node's rank.
    fn rank(&self) -> Rank;

    /// Total number of ranks in the cluster, coordinator included.
    fn size(&self) -> u32;

    /// Number of worker ranks.
    fn workers(&self) -> u32 {
        self.size().saturating_sub(1)
    }

    /// Send `message` to `dest`.
    async fn send(&mut self, dest: Rank, message: Message) -> Result<(), ClusterError>;

    /// Receive the next message from `src`, suspending until one arrives.
    async fn recv(&mut self, src: Rank) -> Result<Message, ClusterError>;
}
