//! Console report contract and run bookkeeping.
//!
//! The coordinator owns all user-facing output: the banner, one line per
//! discovered prime, and the trailing summary. The report also keeps the
//! accumulated result set so tests can assert on what a run produced.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use primegrid_core::Range;

const RULE: &str = "---------------------------------";

/// Who reported a prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A worker rank in a distributed run.
    Worker(u32),
    /// The single-node baseline.
    SingleNode,
}

/// One discovered prime, in discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundPrime {
    pub source: Source,
    pub value: u64,
}

/// Accumulated results and timing for one run.
///
/// Timing starts at construction, after the banner and topology exchange,
/// so it covers dispatch and collection only.
#[derive(Debug)]
pub struct RunReport {
    variant: &'static str,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    started: Instant,
    elapsed: Option<Duration>,
    primes: Vec<FoundPrime>,
}

impl RunReport {
    /// Begin a run report; starts the wall clock.
    pub fn start(variant: &'static str) -> Self {
        Self {
            variant,
            started_at: Utc::now(),
            finished_at: None,
            started: Instant::now(),
            elapsed: None,
            primes: Vec::new(),
        }
    }

    /// Record one discovered prime and print its report line.
    pub fn record(&mut self, source: Source, value: u64) {
        match source {
            Source::Worker(rank) => {
                println!("   Computational node #{:02} found prime:\t{}", rank, value);
            }
            Source::SingleNode => {
                println!("   Single node found prime:\t{}", value);
            }
        }
        self.primes.push(FoundPrime { source, value });
    }

    /// Stop the wall clock.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
        self.elapsed = Some(self.started.elapsed());
    }

    /// The run variant name.
    pub fn variant(&self) -> &'static str {
        self.variant
    }

    /// Number of primes found so far.
    pub fn found(&self) -> u64 {
        self.primes.len() as u64
    }

    /// The discovered primes in discovery order.
    pub fn primes(&self) -> &[FoundPrime] {
        &self.primes
    }

    /// The discovered prime values, in discovery order.
    pub fn prime_values(&self) -> Vec<u64> {
        self.primes.iter().map(|p| p.value).collect()
    }

    /// When the timed section began.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the timed section ended, if [`finish`](Self::finish) ran.
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Elapsed wall-clock time; falls back to "so far" before `finish`.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.started.elapsed())
    }

    /// Print the trailing summary block.
    pub fn print_summary(&self) {
        println!("{}", RULE);
        println!(
            "   Found {} prime(s)! It took {:.3} seconds!",
            self.found(),
            self.elapsed().as_secs_f64()
        );
        println!("{}", RULE);
    }
}

/// Print the distributed-run banner: variant, node counts, range.
pub fn print_banner(variant: &str, size: u32, workers: u32, range: &Range) {
    println!("{}", RULE);
    println!("   Primegrid primality run ({})", variant);
    println!("{}", RULE);
    println!("   Running on {} node(s) ({} computational).", size, workers);
    println!(
        "   Checking {} number(s) starting from {} to {} for primality!",
        range.len(),
        range.start(),
        range.end()
    );
    println!("{}", RULE);
}

/// Print the single-node banner.
pub fn print_sequential_banner(range: &Range) {
    println!("{}", RULE);
    println!("   Primegrid primality run (single node)");
    println!("{}", RULE);
    println!("   Running on a SINGLE node.");
    println!(
        "   Checking {} number(s) starting from {} to {} for primality!",
        range.len(),
        range.start(),
        range.end()
    );
    println!("{}", RULE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates_in_order() {
        let mut report = RunReport::start("test");
        report.record(Source::Worker(1), 2);
        report.record(Source::Worker(2), 3);
        report.record(Source::Worker(1), 5);

        assert_eq!(report.found(), 3);
        assert_eq!(report.prime_values(), vec![2, 3, 5]);
        assert_eq!(report.primes()[1].source, Source::Worker(2));
    }

    #[test]
    fn test_finish_freezes_elapsed() {
        let mut report = RunReport::start("test");
        report.finish();
        let frozen = report.elapsed();
        assert_eq!(report.elapsed(), frozen);
        assert!(report.finished_at().is_some());
    }
}
