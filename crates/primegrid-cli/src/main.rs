//! Primegrid CLI - distributed primality search over a local cluster.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use primegrid_core::{Range, Scenario};
use primegrid_protocols::{run, RunConfig, StrategyKind};

/// Primegrid - primality search with pluggable work distribution
#[derive(Parser)]
#[command(name = "primegrid")]
#[command(about = "Find primes in a 64-bit range across a cluster of worker ranks", long_about = None)]
struct Cli {
    /// Named scenario (below-1k, below-10k, gap-1024, window-3334,
    /// last-100, gap-1502)
    #[arg(short, long, default_value = "gap-1024")]
    scenario: Scenario,

    /// Override the range start (requires --end)
    #[arg(long, requires = "end")]
    start: Option<u64>,

    /// Override the range end (requires --start)
    #[arg(long, requires = "start")]
    end: Option<u64>,

    /// Distribution strategy (dynamic, static, sequential)
    #[arg(short = 't', long, default_value = "dynamic")]
    strategy: StrategyKind,

    /// Number of worker ranks for the distributed strategies
    #[arg(short, long, default_value_t = 4)]
    workers: u32,
}

impl Cli {
    /// Resolve the candidate range, validating an explicit override.
    fn range(&self) -> Result<Range, primegrid_core::CoreError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Range::new(start, end),
            _ => Ok(self.scenario.range()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG=debug enables the per-step protocol log.
    let subscriber = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let range = match cli.range() {
        Ok(range) => range,
        Err(e) => {
            eprintln!("   Error: {}", e);
            std::process::exit(2);
        }
    };

    info!(
        scenario = %cli.scenario,
        strategy = %cli.strategy,
        workers = cli.workers,
        %range,
        "starting primegrid"
    );

    let config = RunConfig {
        range,
        strategy: cli.strategy,
        workers: cli.workers,
    };

    if let Err(e) = run(config).await {
        eprintln!("   Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
