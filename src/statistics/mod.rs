//! Statistics over timing samples.
//!
//! Deliberately limited to fastest, slowest and truncated mean. Each
//! summary is computed from exactly one sample set and discarded after it
//! has been reported.

mod summary;

pub use summary::{SampleSet, Summary};
