//! Runs the default analysis and prints one block per array size.

use std::process::ExitCode;

use algorithm_analysis::output::{format_error, format_size_report, format_warning};
use algorithm_analysis::preflight::preflight_check;
use algorithm_analysis::Analyzer;

fn main() -> ExitCode {
    let analyzer = Analyzer::new();

    for warning in preflight_check(analyzer.config()) {
        eprintln!("{}", format_warning(&warning.description()));
    }

    // Each size is printed as soon as it finishes; the last one takes minutes.
    let outcome = analyzer.run_streaming(|size_report| {
        print!("{}", format_size_report(size_report));
    });

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format_error(&err.to_string()));
            ExitCode::FAILURE
        }
    }
}
