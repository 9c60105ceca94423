//! Configuration for algorithm analysis runs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Array sizes measured by default, in ascending order.
pub const DEFAULT_ARRAY_SIZES: [usize; 5] = [100, 500, 1_000, 10_000, 100_000];

/// Timed trials per (algorithm, size) pair by default.
pub const DEFAULT_RUNS: usize = 10;

/// Exclusive upper bound of generated values by default.
pub const DEFAULT_VALUE_BOUND: i32 = 1_000_000;

/// Configuration options for [`Analyzer`](crate::Analyzer).
///
/// The configuration is immutable for the duration of a run; the analyzer
/// takes its own copy at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Array sizes to measure, visited in the given order (default: 100 to 100,000).
    pub array_sizes: Vec<usize>,

    /// Timed trials per algorithm per size (default: 10).
    pub runs: usize,

    /// Generated values are drawn uniformly from `[0, value_bound)` (default: 1,000,000).
    pub value_bound: i32,

    /// How sort inputs are prepared between trials (default: `Reused`).
    pub trial_input: TrialInput,

    /// Optional deterministic seed for array generation.
    ///
    /// `None` draws from the OS-seeded thread RNG, so array contents differ
    /// between runs.
    pub seed: Option<u64>,
}

/// How each sort algorithm's working array is prepared across trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialInput {
    /// One working copy per algorithm, sorted in place by every trial.
    ///
    /// Trial 1 sorts random data; trials 2 onward sort the already-sorted
    /// result of the previous trial.
    #[default]
    Reused,

    /// Regenerate the base array before every trial and hand each algorithm
    /// a fresh copy of it.
    Fresh,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            array_sizes: DEFAULT_ARRAY_SIZES.to_vec(),
            runs: DEFAULT_RUNS,
            value_bound: DEFAULT_VALUE_BOUND,
            trial_input: TrialInput::Reused,
            seed: None,
        }
    }
}

impl Config {
    /// Check the preconditions the analyzer relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroRuns`] if `runs == 0` (the mean would be
    /// undefined) and [`ConfigError::EmptyValueRange`] if `value_bound <= 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runs == 0 {
            return Err(ConfigError::ZeroRuns);
        }
        if self.value_bound <= 0 {
            return Err(ConfigError::EmptyValueRange {
                value_bound: self.value_bound,
            });
        }
        Ok(())
    }
}

/// Invalid configuration detected before any measurement starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `runs` was zero.
    ZeroRuns,
    /// `value_bound` leaves no values to draw from.
    EmptyValueRange {
        /// The rejected bound.
        value_bound: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroRuns => write!(f, "runs must be at least 1"),
            ConfigError::EmptyValueRange { value_bound } => {
                write!(f, "value bound must be positive, got {}", value_bound)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_run() {
        let config = Config::default();
        assert_eq!(config.array_sizes, vec![100, 500, 1000, 10000, 100000]);
        assert_eq!(config.runs, 10);
        assert_eq!(config.value_bound, 1_000_000);
        assert_eq!(config.trial_input, TrialInput::Reused);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trial_input_defaults_to_reused() {
        assert_eq!(TrialInput::default(), TrialInput::Reused);
    }

    #[test]
    fn test_zero_runs_rejected() {
        let config = Config {
            runs: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRuns));
    }

    #[test]
    fn test_non_positive_bound_rejected() {
        let config = Config {
            value_bound: 0,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::EmptyValueRange { value_bound: 0 });
        assert_eq!(err.to_string(), "value bound must be positive, got 0");
    }

    #[test]
    fn test_empty_size_list_is_valid() {
        let config = Config {
            array_sizes: Vec::new(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
