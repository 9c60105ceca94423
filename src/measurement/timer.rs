//! Wall-clock timing of a single synchronous operation.
//!
//! Uses `std::time::Instant`, which is monotonic on every supported
//! platform. Readings are taken immediately before and after the operation
//! on the calling thread.

use std::hint::black_box as std_black_box;
use std::time::{Duration, Instant};

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Use this to wrap values produced inside a timed region so the compiler
/// cannot optimize away the computation or move it outside the timer reads.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// Empirically measure timer resolution by finding the minimum non-zero
/// difference between consecutive clock reads.
///
/// Returns `None` if no two reads out of the probe loop ever differed.
pub fn measure_resolution_ns() -> Option<u64> {
    let mut min_diff = u64::MAX;

    for _ in 0..1000 {
        let t1 = Instant::now();
        let mut t2 = Instant::now();
        // Spin until the clock ticks, bounded so a stalled clock cannot hang.
        for _ in 0..10_000 {
            if t2 > t1 {
                break;
            }
            t2 = Instant::now();
        }
        let diff = t2.saturating_duration_since(t1).as_nanos() as u64;
        if diff > 0 && diff < min_diff {
            min_diff = diff;
        }
    }

    (min_diff != u64::MAX).then_some(min_diff)
}

/// Timer for measuring a zero-argument operation.
///
/// The operation runs exactly once per call. Panics raised by the
/// operation are not caught and propagate to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer;

impl Timer {
    /// Create a new timer.
    pub fn new() -> Self {
        Self
    }

    /// Measure the execution time of `f`.
    #[inline]
    pub fn measure<F, T>(&self, f: F) -> Duration
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        black_box(f());
        start.elapsed()
    }

    /// Measure the execution time of `f` in nanoseconds.
    ///
    /// Saturates at `u64::MAX` (about 584 years).
    #[inline]
    pub fn measure_ns<F, T>(&self, f: F) -> u64
    where
        F: FnOnce() -> T,
    {
        let elapsed = self.measure(f);
        u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
    }
}
