//! Main `Analyzer` entry point and builder.

use rand::Rng;

use crate::config::{Config, ConfigError, TrialInput};
use crate::generator::ArrayGenerator;
use crate::measurement::{black_box, Timer};
use crate::result::{AlgorithmResult, Report, SizeReport};
use crate::searching::SearchAlgorithm;
use crate::sorting::SortAlgorithm;
use crate::statistics::SampleSet;

/// Drives an analysis run: generates inputs, times every algorithm at every
/// configured size and collects the results.
///
/// Everything runs sequentially on the calling thread.
///
/// # Example
///
/// ```
/// use algorithm_analysis::Analyzer;
///
/// let report = Analyzer::new()
///     .array_sizes([10, 20])
///     .runs(3)
///     .seed(1)
///     .run()
///     .unwrap();
///
/// assert_eq!(report.sizes.len(), 2);
/// assert_eq!(report.sizes[0].results.len(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Create with a small configuration for smoke tests.
    ///
    /// Settings:
    /// - sizes 100, 500 and 1,000 (the quadratic sorts stay sub-second)
    /// - 10 runs, same as default
    pub fn quick() -> Self {
        Self {
            config: Config {
                array_sizes: vec![100, 500, 1_000],
                ..Config::default()
            },
        }
    }

    /// Set the array sizes to measure.
    pub fn array_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.config.array_sizes = sizes.into_iter().collect();
        self
    }

    /// Set timed trials per algorithm per size.
    pub fn runs(mut self, n: usize) -> Self {
        self.config.runs = n;
        self
    }

    /// Set the exclusive upper bound of generated values.
    pub fn value_bound(mut self, bound: i32) -> Self {
        self.config.value_bound = bound;
        self
    }

    /// Set how sort inputs are prepared between trials.
    pub fn trial_input(mut self, mode: TrialInput) -> Self {
        self.config.trial_input = mode;
        self
    }

    /// Set a deterministic seed for array generation.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the analysis and return the complete report.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid. Nothing is
    /// measured in that case.
    pub fn run(&self) -> Result<Report, ConfigError> {
        self.run_streaming(|_| {})
    }

    /// Run the analysis, handing each size's results to `on_size` as soon as
    /// that size has finished.
    ///
    /// The generator is seeded from [`Config::seed`] when set, and from the
    /// OS-seeded thread RNG otherwise.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn run_streaming<F>(&self, on_size: F) -> Result<Report, ConfigError>
    where
        F: FnMut(&SizeReport),
    {
        self.config.validate()?;

        match self.config.seed {
            Some(seed) => {
                let mut generator =
                    ArrayGenerator::seeded(seed).with_bound(self.config.value_bound);
                self.run_with_generator(&mut generator, on_size)
            }
            None => {
                let mut generator = ArrayGenerator::new().with_bound(self.config.value_bound);
                self.run_with_generator(&mut generator, on_size)
            }
        }
    }

    /// Run the analysis drawing every array from `generator`.
    ///
    /// The generator's own bound is used; [`Config::value_bound`] only applies
    /// to generators the analyzer builds itself.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn run_with_generator<R, F>(
        &self,
        generator: &mut ArrayGenerator<R>,
        mut on_size: F,
    ) -> Result<Report, ConfigError>
    where
        R: Rng,
        F: FnMut(&SizeReport),
    {
        self.config.validate()?;

        let mut report = Report::default();
        for &size in &self.config.array_sizes {
            let mut results = self.analyze_sorts(size, generator);
            results.extend(self.analyze_searches(size, generator));

            let size_report = SizeReport { size, results };
            on_size(&size_report);
            report.sizes.push(size_report);
        }

        Ok(report)
    }

    /// Time every sort algorithm at one array size.
    ///
    /// One base array is generated and copied once per algorithm. With
    /// [`TrialInput::Reused`] each algorithm keeps sorting its own copy, so
    /// only the first trial sees unsorted data. With [`TrialInput::Fresh`] a
    /// new base array is generated and copied before every trial. Within a
    /// trial the algorithms run in [`SortAlgorithm::ALL`] order.
    ///
    /// Results are returned in [`SortAlgorithm::ALL`] order.
    pub fn analyze_sorts<R: Rng>(
        &self,
        size: usize,
        generator: &mut ArrayGenerator<R>,
    ) -> Vec<AlgorithmResult> {
        let runs = self.config.runs;
        let timer = Timer::new();

        let base = generator.generate(size);
        let mut working: Vec<Vec<i32>> = SortAlgorithm::ALL
            .iter()
            .map(|_| base.clone())
            .collect();
        let mut samples: Vec<SampleSet> = SortAlgorithm::ALL
            .iter()
            .map(|_| SampleSet::with_capacity(runs))
            .collect();

        for trial in 0..runs {
            if trial > 0 && self.config.trial_input == TrialInput::Fresh {
                let base = generator.generate(size);
                for copy in &mut working {
                    copy.copy_from_slice(&base);
                }
            }

            let arms = SortAlgorithm::ALL
                .iter()
                .zip(working.iter_mut())
                .zip(samples.iter_mut());
            for ((algorithm, data), set) in arms {
                set.push(timer.measure_ns(|| algorithm.sort(data)));
            }
        }

        SortAlgorithm::ALL
            .iter()
            .zip(samples)
            .map(|(&algorithm, set)| AlgorithmResult::new(algorithm, set))
            .collect()
    }

    /// Time every search algorithm at one array size.
    ///
    /// A single array is generated and sorted once with the standard library
    /// sort. The target is the element at index `len / 2`; an empty array
    /// has no middle element, so the search runs for an absent value. All
    /// trials share the same array and target.
    ///
    /// Results are returned in [`SearchAlgorithm::ALL`] order.
    pub fn analyze_searches<R: Rng>(
        &self,
        size: usize,
        generator: &mut ArrayGenerator<R>,
    ) -> Vec<AlgorithmResult> {
        let runs = self.config.runs;
        let timer = Timer::new();

        let mut sorted = generator.generate(size);
        sorted.sort_unstable();
        let data = sorted.as_slice();
        let target = middle_target(data);

        let mut samples: Vec<SampleSet> = SearchAlgorithm::ALL
            .iter()
            .map(|_| SampleSet::with_capacity(runs))
            .collect();

        for _ in 0..runs {
            for (algorithm, set) in SearchAlgorithm::ALL.iter().zip(samples.iter_mut()) {
                set.push(timer.measure_ns(|| algorithm.search(black_box(data), target)));
            }
        }

        SearchAlgorithm::ALL
            .iter()
            .zip(samples)
            .map(|(&algorithm, set)| AlgorithmResult::new(algorithm, set))
            .collect()
    }
}

/// The search target for a sorted array: its element at index `len / 2`.
///
/// An empty array has no middle element; `0` is returned, which it cannot
/// contain.
fn middle_target(sorted: &[i32]) -> i32 {
    sorted.get(sorted.len() / 2).copied().unwrap_or(0)
}
