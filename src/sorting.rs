//! Sorting exercises: merge sort (sequential and parallel) and quick sort.

use tracing::instrument;

/// Below this length the parallel sort falls back to the sequential path;
/// task spawn overhead dominates for small slices.
const PAR_CUTOFF: usize = 1 << 12;

/// Stable top-down merge sort. Returns a new sorted vector.
#[instrument(level = "debug", skip(values))]
pub fn merge_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let mid = values.len() / 2;
    let left = merge_sort(&values[..mid]);
    let right = merge_sort(&values[mid..]);
    merge(left, right)
}

/// Merge sort with `rayon::join` splits above [`PAR_CUTOFF`].
#[instrument(level = "debug", skip(values))]
pub fn par_merge_sort<T: Ord + Clone + Send + Sync>(values: &[T]) -> Vec<T> {
    if values.len() < PAR_CUTOFF {
        return merge_sort(values);
    }

    let mid = values.len() / 2;
    let (left, right) = rayon::join(
        || par_merge_sort(&values[..mid]),
        || par_merge_sort(&values[mid..]),
    );
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => {
                // `<=` keeps equal elements in left-first order (stability).
                if l <= r {
                    merged.push(left.next().expect("peeked"));
                } else {
                    merged.push(right.next().expect("peeked"));
                }
            }
            (Some(_), None) => {
                merged.extend(left);
                return merged;
            }
            (None, _) => {
                merged.extend(right);
                return merged;
            }
        }
    }
}

/// In-place quick sort, Lomuto partition with the last element as pivot.
///
/// Recurses on the smaller side first to bound stack depth at O(log N).
#[instrument(level = "debug", skip(values))]
pub fn quick_sort<T: Ord>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }

    let pivot = partition(values);
    let (left, right) = values.split_at_mut(pivot);
    let right = &mut right[1..];

    if left.len() < right.len() {
        quick_sort(left);
        quick_sort(right);
    } else {
        quick_sort(right);
        quick_sort(left);
    }
}

fn partition<T: Ord>(values: &mut [T]) -> usize {
    let pivot = values.len() - 1;
    let mut store = 0;

    for i in 0..pivot {
        if values[i] <= values[pivot] {
            values.swap(i, store);
            store += 1;
        }
    }

    values.swap(store, pivot);
    store
}
