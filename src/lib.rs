//! # algorithm-analysis
//!
//! Measure how long classic sorting and searching algorithms take on
//! random integer arrays of increasing size.
//!
//! For every configured size the analyzer:
//! - times bubble, insertion, selection and merge sort, each on its own
//!   copy of one random array, for a fixed number of trials
//! - sorts a second random array once and times linear and binary search
//!   for its middle element, for the same number of trials
//! - reduces each algorithm's samples to fastest, slowest and mean
//!
//! ## Reused Inputs
//!
//! By default every sort algorithm keeps sorting the same working array, so
//! only the first trial sees random data and the rest measure already-sorted
//! input. Use [`TrialInput::Fresh`] to regenerate inputs before each trial.
//!
//! ## Quick Start
//!
//! ```
//! use algorithm_analysis::{Analyzer, output};
//!
//! let report = Analyzer::new()
//!     .array_sizes([100, 500])
//!     .seed(42)
//!     .run()
//!     .unwrap();
//!
//! for size in &report.sizes {
//!     print!("{}", output::format_size_report(size));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod analyzer;
mod config;
mod generator;
mod result;

// Functional modules
pub mod measurement;
pub mod output;
pub mod preflight;
pub mod searching;
pub mod sorting;
pub mod statistics;

// Re-exports for public API
pub use analyzer::Analyzer;
pub use config::{
    Config, ConfigError, TrialInput, DEFAULT_ARRAY_SIZES, DEFAULT_RUNS, DEFAULT_VALUE_BOUND,
};
pub use generator::ArrayGenerator;
pub use measurement::Timer;
pub use result::{Algorithm, AlgorithmResult, Report, SizeReport};
pub use searching::{SearchAlgorithm, NOT_FOUND};
pub use sorting::SortAlgorithm;
pub use statistics::{SampleSet, Summary};

/// Run the default analysis (sizes 100 to 100,000, 10 runs, unseeded).
///
/// The largest size takes minutes because of the quadratic sorts; use
/// [`Analyzer`] to pick smaller sizes.
///
/// # Errors
///
/// Cannot fail with the default configuration; the `Result` mirrors
/// [`Analyzer::run`].
pub fn analyze() -> Result<Report, ConfigError> {
    Analyzer::new().run()
}
