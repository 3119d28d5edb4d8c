//! Monotonic-stack problems: next greater/smaller element and bracket
//! matching.
//!
//! The stack stores indices whose values form a monotonic sequence; a new
//! element pops every index it resolves, giving amortized O(1) work per
//! element.

use tracing::instrument;

/// Next strictly greater element to the right of each position.
#[instrument(level = "debug", skip(values))]
pub fn next_greater_elements(values: &[i32]) -> Vec<Option<i32>> {
    let mut result = vec![None; values.len()];
    let mut stack: Vec<usize> = Vec::new();

    for (i, &value) in values.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if values[top] < value {
                result[top] = Some(value);
                stack.pop();
            } else {
                break;
            }
        }
        stack.push(i);
    }

    result
}

/// Next strictly smaller element to the right of each position.
#[instrument(level = "debug", skip(values))]
pub fn next_smaller_elements(values: &[i32]) -> Vec<Option<i32>> {
    let mut result = vec![None; values.len()];
    let mut stack: Vec<usize> = Vec::new();

    for (i, &value) in values.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if values[top] > value {
                result[top] = Some(value);
                stack.pop();
            } else {
                break;
            }
        }
        stack.push(i);
    }

    result
}

/// Next greater element in a circular array.
///
/// Simulates a doubled array by scanning `2n` positions with `i % n`
/// indexing, so the last elements can wrap around to find their answer.
#[instrument(level = "debug", skip(values))]
pub fn next_greater_circular(values: &[i32]) -> Vec<Option<i32>> {
    let n = values.len();
    let mut result = vec![None; n];
    let mut stack: Vec<usize> = Vec::new();

    for i in 0..2 * n {
        let idx = i % n;
        let value = values[idx];

        while let Some(&top) = stack.last() {
            if values[top] < value {
                result[top] = Some(value);
                stack.pop();
            } else {
                break;
            }
        }

        // Indices only need to enter once; the second pass just resolves.
        if i < n {
            stack.push(idx);
        }
    }

    result
}

/// Balanced-brackets check over `()`, `[]` and `{}`.
///
/// Non-bracket characters are ignored.
pub fn is_balanced(input: &str) -> bool {
    let mut stack = Vec::new();

    for c in input.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            '}' => {
                if stack.pop() != Some('{') {
                    return false;
                }
            }
            _ => {}
        }
    }

    stack.is_empty()
}
