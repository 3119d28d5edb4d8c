//! Array partitioning exercises.

use tracing::instrument;

/// Dutch National Flag: three-way partition of 0/1/2 values in one pass.
///
/// Maintains three regions: `[0..low)` all zeros, `[low..mid)` all ones,
/// `(high..]` all twos. `mid` scans the unclassified middle.
#[instrument(level = "trace", skip(values))]
pub fn sort_colors(values: &mut [u8]) {
    debug_assert!(values.iter().all(|&v| v <= 2), "values must be 0, 1 or 2");

    if values.is_empty() {
        return;
    }

    let mut low = 0;
    let mut mid = 0;
    let mut high = values.len() - 1;

    while mid <= high {
        match values[mid] {
            0 => {
                values.swap(low, mid);
                low += 1;
                mid += 1;
            }
            1 => mid += 1,
            _ => {
                values.swap(mid, high);
                if high == 0 {
                    break;
                }
                // mid stays: the swapped-in value is unclassified
                high -= 1;
            }
        }
    }
}

/// Increment a big integer stored as big-endian decimal digits.
///
/// Carry propagates right to left; an all-nines input grows by one digit
/// (`[9, 9, 9]` becomes `[1, 0, 0, 0]`).
pub fn plus_one(mut digits: Vec<u8>) -> Vec<u8> {
    debug_assert!(digits.iter().all(|&d| d <= 9), "digits must be 0..=9");

    for digit in digits.iter_mut().rev() {
        if *digit < 9 {
            *digit += 1;
            return digits;
        }
        *digit = 0;
    }

    // Carry survived past the most significant digit.
    digits.insert(0, 1);
    digits
}
