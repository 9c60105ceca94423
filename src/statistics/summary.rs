//! Sample sets and their min/max/mean summaries.

use serde::{Deserialize, Serialize};

/// Ordered nanosecond timings for one algorithm at one array size.
///
/// Samples keep measurement order; [`summary`](Self::summary) sorts a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSet {
    samples: Vec<u64>,
}

impl SampleSet {
    /// Create an empty set with room for `runs` samples.
    pub fn with_capacity(runs: usize) -> Self {
        Self {
            samples: Vec::with_capacity(runs),
        }
    }

    /// Record one measurement.
    pub fn push(&mut self, elapsed_ns: u64) {
        self.samples.push(elapsed_ns);
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in measurement order.
    pub fn as_slice(&self) -> &[u64] {
        &self.samples
    }

    /// Summarize the set.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty.
    pub fn summary(&self) -> Summary {
        Summary::from_samples(&self.samples)
    }
}

impl From<Vec<u64>> for SampleSet {
    fn from(samples: Vec<u64>) -> Self {
        Self { samples }
    }
}

/// Fastest, slowest and truncated mean of a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Smallest sample.
    pub fastest_ns: u64,
    /// Largest sample.
    pub slowest_ns: u64,
    /// Sum of samples divided by their count, rounded toward zero.
    pub average_ns: u64,
}

impl Summary {
    /// Compute the summary of a non-empty slice of samples.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty.
    pub fn from_samples(samples: &[u64]) -> Self {
        assert!(!samples.is_empty(), "Cannot summarize an empty sample set");

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        // u128 so the sum of many long runs cannot overflow.
        let sum: u128 = sorted.iter().map(|&s| u128::from(s)).sum();
        let average = sum / sorted.len() as u128;

        Self {
            fastest_ns: sorted[0],
            slowest_ns: sorted[sorted.len() - 1],
            average_ns: average as u64,
        }
    }
}
