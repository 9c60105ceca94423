//! Advisory checks run before an analysis starts.
//!
//! None of these stop a run. They exist so that a developer starting the
//! default configuration knows the largest size takes minutes, and so a
//! coarse clock is reported before its samples are trusted.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::measurement::measure_resolution_ns;

/// Comparisons per trial above which a quadratic sort is flagged.
pub const QUADRATIC_COMPARISON_THRESHOLD: u64 = 1_000_000_000;

/// Clock resolution above which samples of small inputs are unreliable.
pub const COARSE_RESOLUTION_NS: u64 = 1_000;

/// Warning from a preflight check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreflightWarning {
    /// The quadratic sorts will be slow at this size.
    QuadraticCost {
        /// Array size.
        size: usize,
        /// Comparisons bubble and selection sort perform per trial.
        comparisons: u64,
    },

    /// The monotonic clock ticks too coarsely for sub-microsecond samples.
    CoarseTimer {
        /// Smallest observed clock increment.
        resolution_ns: u64,
    },
}

impl PreflightWarning {
    /// Get a human-readable description of the warning.
    pub fn description(&self) -> String {
        match self {
            PreflightWarning::QuadraticCost { size, comparisons } => format!(
                "Array size {} costs bubble and selection sort ~{:.1e} comparisons \
                 per trial. Expect this size to take minutes.",
                size, *comparisons as f64
            ),
            PreflightWarning::CoarseTimer { resolution_ns } => format!(
                "Timer resolution is ~{} ns. Searches on small arrays may report 0 ns.",
                resolution_ns
            ),
        }
    }
}

/// Comparisons made by bubble or selection sort on `n` elements: n(n-1)/2.
pub fn quadratic_comparisons(n: usize) -> u64 {
    let n = n as u64;
    n.saturating_mul(n.saturating_sub(1)) / 2
}

/// Flag every configured size at which the quadratic sorts are expensive.
pub fn quadratic_cost_check(config: &Config) -> Vec<PreflightWarning> {
    config
        .array_sizes
        .iter()
        .filter_map(|&size| {
            let comparisons = quadratic_comparisons(size);
            (comparisons > QUADRATIC_COMPARISON_THRESHOLD)
                .then_some(PreflightWarning::QuadraticCost { size, comparisons })
        })
        .collect()
}

/// Flag a clock whose resolution exceeds [`COARSE_RESOLUTION_NS`].
pub fn resolution_check(resolution_ns: Option<u64>) -> Option<PreflightWarning> {
    match resolution_ns {
        Some(resolution_ns) if resolution_ns <= COARSE_RESOLUTION_NS => None,
        Some(resolution_ns) => Some(PreflightWarning::CoarseTimer { resolution_ns }),
        // A clock that never advanced is as coarse as it gets.
        None => Some(PreflightWarning::CoarseTimer {
            resolution_ns: u64::MAX,
        }),
    }
}

/// Run all preflight checks for `config`.
pub fn preflight_check(config: &Config) -> Vec<PreflightWarning> {
    let mut warnings = quadratic_cost_check(config);
    warnings.extend(resolution_check(measure_resolution_ns()));
    warnings
}
