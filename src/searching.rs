//! Searching algorithms under measurement.
//!
//! Both searches are read-only and deterministic. A miss is reported as
//! `None`; [`NOT_FOUND`] is the equivalent index-style sentinel used by
//! [`SearchAlgorithm::search_index`].

use serde::{Deserialize, Serialize};

/// Index-style sentinel for an absent target.
pub const NOT_FOUND: isize = -1;

/// The searching algorithms included in an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    /// Front-to-back scan.
    Linear,
    /// Closed-interval bisection; input must be sorted ascending.
    Binary,
}

impl SearchAlgorithm {
    /// Every search algorithm, in report order.
    pub const ALL: [SearchAlgorithm; 2] = [SearchAlgorithm::Linear, SearchAlgorithm::Binary];

    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Linear Search",
            SearchAlgorithm::Binary => "Binary Search",
        }
    }

    /// Find an index holding `target`.
    pub fn search(&self, data: &[i32], target: i32) -> Option<usize> {
        match self {
            SearchAlgorithm::Linear => linear_search(data, target),
            SearchAlgorithm::Binary => binary_search(data, target),
        }
    }

    /// Like [`search`](Self::search), but returns [`NOT_FOUND`] on a miss.
    pub fn search_index(&self, data: &[i32], target: i32) -> isize {
        self.search(data, target).map_or(NOT_FOUND, |idx| idx as isize)
    }
}

/// Return the first index whose value equals `target`.
pub fn linear_search(data: &[i32], target: i32) -> Option<usize> {
    for (i, &value) in data.iter().enumerate() {
        if value == target {
            return Some(i);
        }
    }
    None
}

/// Binary search over a slice sorted ascending.
///
/// The result on unsorted input is unspecified (but never panics).
pub fn binary_search(data: &[i32], target: i32) -> Option<usize> {
    bisect(data, target, || {})
}

/// Binary search that also reports how many elements were probed.
///
/// Every probe is one three-way comparison against `target`. For a slice of
/// length `n > 0` the count never exceeds `floor(log2(n)) + 1`.
pub fn binary_search_counted(data: &[i32], target: i32) -> (Option<usize>, usize) {
    let mut probes = 0;
    let found = bisect(data, target, || probes += 1);
    (found, probes)
}

#[inline(always)]
fn bisect<P: FnMut()>(data: &[i32], target: i32, mut on_probe: P) -> Option<usize> {
    if data.is_empty() {
        return None;
    }

    // Closed interval [lo, hi].
    let mut lo = 0usize;
    let mut hi = data.len() - 1;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        on_probe();
        match data[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                hi = mid - 1;
            }
        }
    }
    None
}
