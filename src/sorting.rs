//! Textbook sorting algorithms under measurement.
//!
//! All four sort ascending with the natural `i32` ordering. None of them is
//! tuned: bubble sort has no early exit on a pass without swaps, and merge
//! sort allocates fresh halves at every level of recursion. Those costs are
//! what the analysis measures.

use serde::{Deserialize, Serialize};

/// The sorting algorithms included in an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortAlgorithm {
    /// Adjacent-swap double loop, always O(n²).
    Bubble,
    /// Shift the sorted prefix right until the key fits. O(n) on sorted input.
    Insertion,
    /// Swap the minimum of the unsorted suffix into place, always O(n²).
    Selection,
    /// Recursive top-down merge sort with allocated halves.
    Merge,
}

impl SortAlgorithm {
    /// Every sort algorithm, in report order.
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
    ];

    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Merge => "Merge Sort",
        }
    }

    /// Sort `data` ascending.
    pub fn sort(&self, data: &mut [i32]) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(data),
            SortAlgorithm::Insertion => insertion_sort(data),
            SortAlgorithm::Selection => selection_sort(data),
            SortAlgorithm::Merge => merge_sort(data),
        }
    }
}

/// Classic bubble sort without the sorted-pass early exit.
pub fn bubble_sort(data: &mut [i32]) {
    let n = data.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

/// Insertion sort.
pub fn insertion_sort(data: &mut [i32]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

/// Selection sort.
pub fn selection_sort(data: &mut [i32]) {
    let n = data.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        let mut min_idx = i;
        for j in i + 1..n {
            if data[j] < data[min_idx] {
                min_idx = j;
            }
        }
        data.swap(i, min_idx);
    }
}

/// Top-down merge sort.
///
/// Each call copies its halves into newly allocated vectors, which are
/// dropped as soon as they have been merged back into `data`.
pub fn merge_sort(data: &mut [i32]) {
    if data.len() < 2 {
        return;
    }

    let mid = data.len() / 2;
    let mut lo = data[..mid].to_vec();
    let mut hi = data[mid..].to_vec();

    merge_sort(&mut lo);
    merge_sort(&mut hi);

    merge(data, &lo, &hi);
}

/// Merge two sorted runs into `out`, taking from `lo` on ties.
fn merge(out: &mut [i32], lo: &[i32], hi: &[i32]) {
    debug_assert_eq!(out.len(), lo.len() + hi.len());

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < lo.len() && j < hi.len() {
        if lo[i] <= hi[j] {
            out[k] = lo[i];
            i += 1;
        } else {
            out[k] = hi[j];
            j += 1;
        }
        k += 1;
    }

    out[k..k + lo.len() - i].copy_from_slice(&lo[i..]);
    k += lo.len() - i;
    out[k..].copy_from_slice(&hi[j..]);
}
