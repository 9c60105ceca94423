//! Measurement infrastructure for timing analysis.
//!
//! Every sample is one wall-clock measurement of one algorithm run on one
//! input instance, taken on the calling thread with nothing else scheduled
//! by this crate in between.

mod timer;

pub use timer::{black_box, measure_resolution_ns, Timer};
