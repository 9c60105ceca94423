//! End-to-end integration tests.

use algorithm_analysis::output::{format_size_report, to_json};
use algorithm_analysis::{
    Algorithm, Analyzer, ArrayGenerator, Config, ConfigError, SearchAlgorithm, SortAlgorithm,
    TrialInput,
};

/// Basic smoke test that the API works.
#[test]
fn smoke_test() {
    let report = Analyzer::new()
        .array_sizes([100, 500])
        .runs(3)
        .run()
        .unwrap();

    assert_eq!(report.sizes.len(), 2);
    for size in &report.sizes {
        assert_eq!(size.results.len(), 6);
        for result in &size.results {
            assert_eq!(result.samples.len(), 3);
        }
    }
}

/// Every block printed for a size has the header, six lines and a blank line.
#[test]
fn printed_block_layout() {
    let report = Analyzer::quick().runs(2).seed(1).run().unwrap();
    assert_eq!(
        report.sizes.iter().map(|s| s.size).collect::<Vec<_>>(),
        vec![100, 500, 1000]
    );

    for size in &report.sizes {
        let block = format_size_report(size);
        let lines: Vec<&str> = block.split('\n').collect();
        // Header, six algorithms, blank line, and the empty tail after the final '\n'.
        assert_eq!(lines.len(), 9, "{:?}", lines);
        assert_eq!(lines[0], format!("Array size: {}", size.size));

        let names = [
            "Bubble Sort",
            "Insertion Sort",
            "Selection Sort",
            "Merge Sort",
            "Linear Search",
            "Binary Search",
        ];
        for (line, name) in lines[1..7].iter().zip(names) {
            assert!(line.starts_with(&format!("{}: Fastest: ", name)), "{}", line);
            assert!(line.contains(" ns, Slowest: "));
            assert!(line.contains(" ns, Average: "));
            assert!(line.ends_with(" ns"));
        }
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "");
    }
}

/// Summaries agree with the raw samples they were computed from.
#[test]
fn summaries_match_samples() {
    let report = Analyzer::new()
        .array_sizes([200])
        .runs(10)
        .seed(3)
        .run()
        .unwrap();

    for result in &report.sizes[0].results {
        let samples = result.samples.as_slice();
        assert_eq!(samples.len(), 10);
        assert_eq!(result.summary.fastest_ns, *samples.iter().min().unwrap());
        assert_eq!(result.summary.slowest_ns, *samples.iter().max().unwrap());
        let sum: u64 = samples.iter().sum();
        assert_eq!(result.summary.average_ns, sum / 10);
    }
}

/// Test configuration validation through the analyzer.
#[test]
fn invalid_configs_are_rejected() {
    let zero_runs = Config {
        runs: 0,
        ..Config::default()
    };
    assert_eq!(
        Analyzer::with_config(zero_runs).run().unwrap_err(),
        ConfigError::ZeroRuns
    );

    let err = Analyzer::new().value_bound(-1).run().unwrap_err();
    assert_eq!(err, ConfigError::EmptyValueRange { value_bound: -1 });
}

/// An injected generator is the only source of input data.
#[test]
fn injected_generator() {
    let analyzer = Analyzer::new().array_sizes([50]).runs(2);
    let mut generator = ArrayGenerator::seeded(8).with_bound(3);
    let report = analyzer.run_with_generator(&mut generator, |_| {}).unwrap();
    assert_eq!(report.sizes[0].size, 50);

    // A narrow bound still produces a complete report.
    assert!(report.sizes[0].get(SearchAlgorithm::Binary).is_some());
}

/// Fresh-input mode produces the same report shape as the default mode.
#[test]
fn fresh_trial_input() {
    let report = Analyzer::new()
        .array_sizes([64, 128])
        .runs(4)
        .trial_input(TrialInput::Fresh)
        .seed(21)
        .run()
        .unwrap();

    for size in &report.sizes {
        for algorithm in SortAlgorithm::ALL {
            let result = size.get(algorithm).unwrap();
            assert_eq!(result.algorithm, Algorithm::Sort(algorithm));
            assert_eq!(result.samples.len(), 4);
        }
    }
}

/// Test result serialization.
#[test]
fn report_serializes() {
    let report = Analyzer::new()
        .array_sizes([10])
        .runs(1)
        .seed(0)
        .run()
        .unwrap();

    let json = to_json(&report).unwrap();
    assert!(json.contains("\"size\":10"));
    assert!(json.contains("\"Bubble\""));
    assert!(json.contains("\"Binary\""));
}
