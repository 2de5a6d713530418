//! The named run scenarios.
//!
//! The catalogue of ranges the system is exercised against. Each entry
//! pins a known prime count, so a run doubles as a correctness check.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::range::Range;

/// A named range selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Primes below 1000: 168 primes, well under a second.
    Below1k,
    /// Primes below 10000: 1229 primes.
    Below10k,
    /// The 1024-wide prime gap starting at 22790428875364879: 2 primes.
    #[default]
    Gap1024,
    /// 3334 candidates from 22790428875364444: 56 primes.
    Window3334,
    /// The last 100 representable u64 values: 3 primes.
    Last100,
    /// The 1502-wide prime gap starting at 9586724781371233277: 2 primes.
    Gap1502,
}

impl Scenario {
    /// Every scenario, in catalogue order.
    pub const ALL: [Scenario; 6] = [
        Scenario::Below1k,
        Scenario::Below10k,
        Scenario::Gap1024,
        Scenario::Window3334,
        Scenario::Last100,
        Scenario::Gap1502,
    ];

    /// The canonical name used on the command line and in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Below1k => "below-1k",
            Scenario::Below10k => "below-10k",
            Scenario::Gap1024 => "gap-1024",
            Scenario::Window3334 => "window-3334",
            Scenario::Last100 => "last-100",
            Scenario::Gap1502 => "gap-1502",
        }
    }

    /// Resolve the inclusive candidate range.
    pub fn range(&self) -> Range {
        let (start, end) = match self {
            Scenario::Below1k => (0, 1_000),
            Scenario::Below10k => (0, 10_000),
            Scenario::Gap1024 => (22_790_428_875_364_879, 22_790_428_875_365_903),
            Scenario::Window3334 => (22_790_428_875_364_444, 22_790_428_875_367_777),
            Scenario::Last100 => (18_446_744_073_709_551_516, u64::MAX),
            Scenario::Gap1502 => (9_586_724_781_371_233_277, 9_586_724_781_371_234_779),
        };
        // Every catalogue entry is well-formed.
        Range::new(start, end).expect("scenario bounds are ordered")
    }

    /// The prime count this scenario is known to produce.
    pub fn expected_primes(&self) -> u64 {
        match self {
            Scenario::Below1k => 168,
            Scenario::Below10k => 1_229,
            Scenario::Gap1024 => 2,
            Scenario::Window3334 => 56,
            Scenario::Last100 => 3,
            Scenario::Gap1502 => 2,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .iter()
            .find(|scenario| scenario.name() == s)
            .copied()
            .ok_or_else(|| CoreError::UnknownScenario(s.to_string()))
    }
}
