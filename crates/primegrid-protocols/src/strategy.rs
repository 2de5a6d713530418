//! The distribution-strategy interface and the run-variant selector.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;

use primegrid_cluster::Transport;
use primegrid_core::Range;

use crate::dynamic::DynamicDispatch;
use crate::error::ProtocolError;
use crate::report::RunReport;
use crate::static_partition::StaticPartition;

/// One coordinator/worker work-distribution protocol.
///
/// Both halves run against the same [`Transport`]; the coordinator half
/// runs at rank 0, the worker half at every other rank. The single-node
/// baseline bypasses this interface entirely (it has no transport).
#[async_trait]
pub trait DistributionStrategy: Send + Sync {
    /// Human-readable variant name for the banner and report.
    fn name(&self) -> &'static str;

    /// Coordinator half: distribute `range` across the cluster's workers
    /// and collect every verdict into `report`.
    ///
    /// Precondition: at least one worker rank exists; otherwise this
    /// fails with a configuration error before sending anything.
    async fn dispatch_and_collect(
        &self,
        transport: &mut dyn Transport,
        range: &Range,
        report: &mut RunReport,
    ) -> Result<(), ProtocolError>;

    /// Worker half: serve the coordinator until the protocol's own
    /// termination condition (sentinel or completed assignment).
    async fn serve(&self, transport: &mut dyn Transport) -> Result<(), ProtocolError>;
}

/// Which run variant to execute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrategyKind {
    /// Per-candidate round-robin dispatch with round-barrier collection.
    #[default]
    Dynamic,
    /// One-shot contiguous range partitioning.
    Static,
    /// Single-process baseline, no messaging.
    Sequential,
}

impl StrategyKind {
    /// Every selectable variant.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Dynamic,
        StrategyKind::Static,
        StrategyKind::Sequential,
    ];

    /// The name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Dynamic => "dynamic",
            StrategyKind::Static => "static",
            StrategyKind::Sequential => "sequential",
        }
    }

    /// Instantiate the distributed strategy, or `None` for the baseline.
    pub fn strategy(&self) -> Option<Arc<dyn DistributionStrategy>> {
        match self {
            StrategyKind::Dynamic => Some(Arc::new(DynamicDispatch)),
            StrategyKind::Static => Some(Arc::new(StaticPartition)),
            StrategyKind::Sequential => None,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .iter()
            .find(|kind| kind.name() == s)
            .copied()
            .ok_or_else(|| ProtocolError::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.name().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let err = "adaptive".parse::<StrategyKind>().unwrap_err();
        assert_eq!(err, ProtocolError::UnknownStrategy("adaptive".to_string()));
    }

    #[test]
    fn test_sequential_has_no_distributed_strategy() {
        assert!(StrategyKind::Sequential.strategy().is_none());
        assert!(StrategyKind::Dynamic.strategy().is_some());
        assert!(StrategyKind::Static.strategy().is_some());
    }
}
