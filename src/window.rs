//! Sliding-window maximum via a monotonic deque.

use std::collections::VecDeque;

use tracing::instrument;

/// Maximum of every window of `k` consecutive elements, O(N) total.
///
/// The deque holds indices whose values are strictly decreasing front to
/// back, so the front is always the current window's maximum. Each index
/// enters and leaves the deque at most once.
///
/// Returns an empty vector when `k == 0` or no full window fits.
#[instrument(level = "debug", skip(values))]
pub fn sliding_window_maximum(values: &[i32], k: usize) -> Vec<i32> {
    if k == 0 || values.len() < k {
        return Vec::new();
    }

    let mut maxima = Vec::with_capacity(values.len() - k + 1);
    let mut deque: VecDeque<usize> = VecDeque::new();

    for (i, &value) in values.iter().enumerate() {
        // Drop indices that slid out of the window.
        if let Some(&front) = deque.front() {
            if front + k <= i {
                deque.pop_front();
            }
        }

        // Smaller values at the back can never be a window maximum again.
        while let Some(&back) = deque.back() {
            if values[back] <= value {
                deque.pop_back();
            } else {
                break;
            }
        }

        deque.push_back(i);

        if i + 1 >= k {
            maxima.push(values[*deque.front().expect("deque holds current index")]);
        }
    }

    maxima
}
