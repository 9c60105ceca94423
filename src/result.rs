//! Analysis result types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::searching::SearchAlgorithm;
use crate::sorting::SortAlgorithm;
use crate::statistics::{SampleSet, Summary};

/// Any algorithm that appears in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// A sorting algorithm.
    Sort(SortAlgorithm),
    /// A searching algorithm.
    Search(SearchAlgorithm),
}

impl Algorithm {
    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sort(sort) => sort.name(),
            Algorithm::Search(search) => search.name(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<SortAlgorithm> for Algorithm {
    fn from(sort: SortAlgorithm) -> Self {
        Algorithm::Sort(sort)
    }
}

impl From<SearchAlgorithm> for Algorithm {
    fn from(search: SearchAlgorithm) -> Self {
        Algorithm::Search(search)
    }
}

/// Timings of one algorithm at one array size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// The algorithm measured.
    pub algorithm: Algorithm,
    /// Raw samples in measurement order, one per trial.
    pub samples: SampleSet,
    /// Summary derived from `samples`.
    pub summary: Summary,
}

impl AlgorithmResult {
    /// Build a result, summarizing the samples.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty.
    pub fn new(algorithm: impl Into<Algorithm>, samples: SampleSet) -> Self {
        let summary = samples.summary();
        Self {
            algorithm: algorithm.into(),
            samples,
            summary,
        }
    }
}

/// All results for one array size: four sorts, then two searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeReport {
    /// Number of elements in every input array.
    pub size: usize,
    /// Results in report order.
    pub results: Vec<AlgorithmResult>,
}

impl SizeReport {
    /// Look up the result for one algorithm.
    pub fn get(&self, algorithm: impl Into<Algorithm>) -> Option<&AlgorithmResult> {
        let algorithm = algorithm.into();
        self.results.iter().find(|r| r.algorithm == algorithm)
    }
}

/// Complete result of an analysis run, one entry per configured size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Per-size reports, in configuration order.
    pub sizes: Vec<SizeReport>,
}
