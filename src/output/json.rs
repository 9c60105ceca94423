//! JSON serialization for analysis reports.

use crate::result::Report;

/// Serialize a Report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for Report).
pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a Report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for Report).
pub fn to_json_pretty(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{AlgorithmResult, SizeReport};
    use crate::sorting::SortAlgorithm;
    use crate::statistics::SampleSet;

    fn make_report() -> Report {
        Report {
            sizes: vec![SizeReport {
                size: 100,
                results: vec![AlgorithmResult::new(
                    SortAlgorithm::Merge,
                    SampleSet::from(vec![12, 10, 14]),
                )],
            }],
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_report()).unwrap();
        assert!(json.contains("\"size\":100"));
        assert!(json.contains("\"algorithm\":{\"Sort\":\"Merge\"}"));
        assert!(json.contains("\"samples\":[12,10,14]"));
        assert!(json.contains("\"average_ns\":12"));
    }

    #[test]
    fn test_to_json_pretty_reads_back() {
        let report = make_report();
        let json = to_json_pretty(&report).unwrap();
        assert!(json.contains('\n')); // Pretty print has newlines
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
