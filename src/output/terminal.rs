//! Plain-text report formatting and highlighted diagnostics.
//!
//! Report text is never colored: it is the program's output format and is
//! compared literally. Only diagnostics, which go to stderr, use ANSI colors.

use colored::Colorize;

use crate::result::{AlgorithmResult, SizeReport};

/// Prefix for every diagnostic line written to stderr.
pub const LOG_PREFIX: &str = "[algorithm-analysis]";

/// Format one algorithm's summary line (without trailing newline).
///
/// `<Name>: Fastest: <ns> ns, Slowest: <ns> ns, Average: <ns> ns`
pub fn format_result_line(result: &AlgorithmResult) -> String {
    let summary = &result.summary;
    format!(
        "{}: Fastest: {} ns, Slowest: {} ns, Average: {} ns",
        result.algorithm.name(),
        summary.fastest_ns,
        summary.slowest_ns,
        summary.average_ns
    )
}

/// Format the block for one array size: header, one line per algorithm,
/// then a blank line.
pub fn format_size_report(report: &SizeReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Array size: {}\n", report.size));
    for result in &report.results {
        output.push_str(&format_result_line(result));
        output.push('\n');
    }
    output.push('\n');

    output
}

/// Format a diagnostic for stderr, highlighted in yellow.
pub fn format_warning(message: &str) -> String {
    format!(
        "{} {} {}",
        LOG_PREFIX,
        "\u{26A0}".yellow().bold(),
        message.yellow()
    )
}

/// Format a fatal diagnostic for stderr, highlighted in red.
pub fn format_error(message: &str) -> String {
    format!("{} {}", LOG_PREFIX, message.red().bold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searching::SearchAlgorithm;
    use crate::sorting::SortAlgorithm;
    use crate::statistics::SampleSet;

    fn make_size_report() -> SizeReport {
        SizeReport {
            size: 100,
            results: vec![
                AlgorithmResult::new(SortAlgorithm::Bubble, SampleSet::from(vec![300, 100, 200])),
                AlgorithmResult::new(SortAlgorithm::Insertion, SampleSet::from(vec![5, 6])),
                AlgorithmResult::new(SortAlgorithm::Selection, SampleSet::from(vec![9])),
                AlgorithmResult::new(SortAlgorithm::Merge, SampleSet::from(vec![10, 11])),
                AlgorithmResult::new(SearchAlgorithm::Linear, SampleSet::from(vec![0, 0])),
                AlgorithmResult::new(SearchAlgorithm::Binary, SampleSet::from(vec![41])),
            ],
        }
    }

    #[test]
    fn test_format_result_line() {
        let report = make_size_report();
        assert_eq!(
            format_result_line(&report.results[0]),
            "Bubble Sort: Fastest: 100 ns, Slowest: 300 ns, Average: 200 ns"
        );
    }

    #[test]
    fn test_format_size_report_literal() {
        let output = format_size_report(&make_size_report());
        let expected = "Array size: 100\n\
            Bubble Sort: Fastest: 100 ns, Slowest: 300 ns, Average: 200 ns\n\
            Insertion Sort: Fastest: 5 ns, Slowest: 6 ns, Average: 5 ns\n\
            Selection Sort: Fastest: 9 ns, Slowest: 9 ns, Average: 9 ns\n\
            Merge Sort: Fastest: 10 ns, Slowest: 11 ns, Average: 10 ns\n\
            Linear Search: Fastest: 0 ns, Slowest: 0 ns, Average: 0 ns\n\
            Binary Search: Fastest: 41 ns, Slowest: 41 ns, Average: 41 ns\n\
            \n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_warning_keeps_message() {
        let line = format_warning("slow size ahead");
        assert!(line.starts_with(LOG_PREFIX));
        assert!(line.contains("slow size ahead"));
    }
}
