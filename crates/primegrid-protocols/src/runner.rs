//! Boots a cluster and drives one run to completion.

use tracing::{info, warn};

use primegrid_cluster::{LocalCluster, LocalEndpoint, Transport};
use primegrid_core::Range;

use crate::error::ProtocolError;
use crate::report::{self, RunReport};
use crate::sequential;
use crate::strategy::{DistributionStrategy, StrategyKind};
use crate::topology;

/// Resolved run parameters, constructed once at process start and passed
/// by value into the runner. No ambient configuration state exists
/// anywhere below this point.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// The inclusive candidate range (already validated).
    pub range: Range,
    /// Which run variant to execute.
    pub strategy: StrategyKind,
    /// Number of worker ranks for the distributed variants.
    pub workers: u32,
}

/// Execute the configured run and return its report.
///
/// For the distributed variants this wires up a local cluster of
/// `workers + 1` ranks, spawns one task per worker rank, and plays the
/// coordinator on the calling task. Configuration errors (no workers)
/// surface before any work is dispatched.
pub async fn run(config: RunConfig) -> Result<RunReport, ProtocolError> {
    match config.strategy.strategy() {
        None => run_sequential(config.range),
        Some(strategy) => run_distributed(config.range, strategy, config.workers).await,
    }
}

fn run_sequential(range: Range) -> Result<RunReport, ProtocolError> {
    report::print_sequential_banner(&range);
    let mut report = RunReport::start("single node");
    sequential::scan(&range, &mut report);
    report.finish();
    report.print_summary();
    Ok(report)
}

async fn run_distributed(
    range: Range,
    strategy: std::sync::Arc<dyn DistributionStrategy>,
    workers: u32,
) -> Result<RunReport, ProtocolError> {
    let size = workers + 1;
    let mut endpoints = LocalCluster::new(size);
    let mut coordinator = endpoints.remove(0);

    info!(variant = strategy.name(), workers, "starting distributed run");

    let mut handles = Vec::with_capacity(endpoints.len());
    for mut endpoint in endpoints {
        let strategy = strategy.clone();
        handles.push(tokio::spawn(async move {
            topology::announce(&mut endpoint).await?;
            strategy.serve(&mut endpoint).await
        }));
    }

    let outcome = coordinate(&mut coordinator, strategy.as_ref(), &range).await;

    // Sever the coordinator's channels before joining: if the coordinator
    // failed mid-protocol, workers blocked on a receive would otherwise
    // never wake.
    drop(coordinator);

    for (i, handle) in handles.into_iter().enumerate() {
        let rank = i as u32 + 1;
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(rank, error = %e, "worker exited with error"),
            Err(e) => warn!(rank, error = %e, "worker task panicked"),
        }
    }

    let report = outcome?;
    report.print_summary();
    Ok(report)
}

async fn coordinate(
    transport: &mut LocalEndpoint,
    strategy: &dyn DistributionStrategy,
    range: &Range,
) -> Result<RunReport, ProtocolError> {
    report::print_banner(strategy.name(), transport.size(), transport.workers(), range);
    topology::gather_and_print(transport).await?;

    // The wall clock covers dispatch and collection only.
    let mut report = RunReport::start(strategy.name());
    strategy
        .dispatch_and_collect(transport, range, &mut report)
        .await?;
    report.finish();

    info!(
        variant = strategy.name(),
        found = report.found(),
        elapsed_ms = report.elapsed().as_millis() as u64,
        "run complete"
    );
    Ok(report)
}
