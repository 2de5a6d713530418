//! Startup topology exchange.
//!
//! Before any work is dispatched, every worker reports its host identity
//! to the coordinator once, and the coordinator prints the cluster
//! listing in ascending rank order. Purely informational; no part of the
//! distribution protocols depends on it.

use tracing::debug;

use primegrid_cluster::{Message, Rank, Transport, COORDINATOR};

use crate::error::ProtocolError;

/// Resolve this node's host identity.
pub fn local_hostname() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string())
}

/// Worker side: report the local hostname to the coordinator.
pub async fn announce(transport: &mut dyn Transport) -> Result<(), ProtocolError> {
    let hostname = local_hostname();
    debug!(rank = transport.rank(), hostname = %hostname, "announcing host");
    transport
        .send(COORDINATOR, Message::Hello { hostname })
        .await?;
    Ok(())
}

/// Coordinator side: collect one hello per worker in ascending rank order,
/// print the cluster listing, and return the gathered host names.
pub async fn gather_and_print(
    transport: &mut dyn Transport,
) -> Result<Vec<(Rank, String)>, ProtocolError> {
    println!("   Available nodes:");
    println!(
        "      - Coordinator node   - rank 00 - runs on: {}",
        local_hostname()
    );

    let mut hosts = Vec::with_capacity(transport.workers() as usize);
    for rank in 1..=transport.workers() {
        match transport.recv(rank).await? {
            Message::Hello { hostname } => {
                println!(
                    "      - Computational node - rank {:02} - runs on: {}",
                    rank, hostname
                );
                hosts.push((rank, hostname));
            }
            other => {
                return Err(ProtocolError::UnexpectedMessage {
                    from: rank,
                    kind: other.kind(),
                })
            }
        }
    }
    println!("---------------------------------");
    Ok(hosts)
}
