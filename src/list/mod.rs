//! Singly-linked list exercises.
//!
//! [`LinkedList`] is the owned `Option<Box<Node>>` form; problems that
//! need shared tails or cycles (Floyd's detection, Y-intersection,
//! multilevel flatten) live in [`arena`] on indexed storage instead.

pub mod arena;

use std::collections::HashSet;
use std::hash::Hash;

use tracing::instrument;

use crate::errors::{ListError, ListResult};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Owned singly-linked list.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Node count by full walk, as the classic exercise does it.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
    }

    /// Append at the tail, walking the chain to its end.
    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            node.value
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Remove and return the value at `index` (0-based).
    pub fn remove_at(&mut self, index: usize) -> ListResult<T> {
        let len = self.len();
        if index >= len {
            return Err(ListError::IndexOutOfBounds { index, len });
        }

        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut().expect("index checked").next;
        }
        let node = cursor.take().expect("index checked");
        *cursor = node.next;
        Ok(node.value)
    }

    /// Iterative in-place reversal: walk once, flipping each link.
    #[instrument(level = "debug", skip(self))]
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Middle element via the slow/fast two-pointer walk.
    ///
    /// For even lengths this is the second of the two middle nodes,
    /// matching the classic formulation.
    pub fn middle(&self) -> Option<&T> {
        let mut slow = self.head.as_deref()?;
        let mut fast = self.head.as_deref();

        while let Some(node) = fast {
            match node.next.as_deref() {
                Some(ahead) => {
                    slow = slow.next.as_deref().expect("slow trails fast");
                    fast = ahead.next.as_deref();
                }
                None => break,
            }
        }

        Some(&slow.value)
    }

    /// Split into `(self, tail)` at `at`; `self` keeps the first `at`
    /// elements.
    pub fn split_off(&mut self, at: usize) -> ListResult<LinkedList<T>> {
        let len = self.len();
        if at > len {
            return Err(ListError::IndexOutOfBounds { index: at, len });
        }

        let mut cursor = &mut self.head;
        for _ in 0..at {
            cursor = &mut cursor.as_mut().expect("index checked").next;
        }
        Ok(LinkedList {
            head: cursor.take(),
        })
    }

    /// Append all elements of `other`, leaving it empty.
    pub fn append(&mut self, other: &mut LinkedList<T>) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = other.head.take();
    }

    /// Stable reorder by 1-based position parity: odd positions first,
    /// then even positions, relative order preserved within each group.
    #[instrument(level = "debug", skip(self))]
    pub fn odd_even_reorder(&mut self) {
        let mut odd = LinkedList::new();
        let mut even = LinkedList::new();
        let mut odd_tail = &mut odd.head;
        let mut even_tail = &mut even.head;

        let mut position = 0usize;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            if position % 2 == 0 {
                *odd_tail = Some(node);
                odd_tail = &mut odd_tail.as_mut().expect("just set").next;
            } else {
                *even_tail = Some(node);
                even_tail = &mut even_tail.as_mut().expect("just set").next;
            }
            position += 1;
        }

        odd.append(&mut even);
        self.head = odd.head.take();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Index of the first occurrence of `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Collapse runs of equal adjacent values; on a sorted list this
    /// removes all duplicates.
    #[instrument(level = "debug", skip(self))]
    pub fn dedup_sorted(&mut self) {
        let mut cursor = self.head.as_mut();
        while let Some(node) = cursor {
            while node.next.as_ref().is_some_and(|next| next.value == node.value) {
                let next = node.next.take().expect("checked above");
                node.next = next.next;
            }
            cursor = node.next.as_mut();
        }
    }

    /// Palindrome check in O(1) extra space: reverse the second half,
    /// compare against the first, then restore the list.
    #[instrument(level = "debug", skip(self))]
    pub fn is_palindrome(&mut self) -> bool {
        let len = self.len();
        let half = len / 2;

        let mut tail = self.split_off(len - half).expect("within bounds");
        tail.reverse();

        let matches = self.iter().take(half).zip(tail.iter()).all(|(a, b)| a == b);

        tail.reverse();
        self.append(&mut tail);
        matches
    }
}

impl<T: Eq + Hash + Clone> LinkedList<T> {
    /// Remove duplicates from an unsorted list, keeping first occurrences.
    #[instrument(level = "debug", skip(self))]
    pub fn dedup(&mut self) {
        let mut seen = HashSet::new();
        let mut cursor = &mut self.head;

        while cursor.is_some() {
            let keep = {
                let node = cursor.as_ref().expect("loop condition");
                seen.insert(node.value.clone())
            };
            if keep {
                cursor = &mut cursor.as_mut().expect("loop condition").next;
            } else {
                let node = cursor.take().expect("loop condition");
                *cursor = node.next;
            }
        }
    }
}

impl<T: Ord> LinkedList<T> {
    /// Merge two sorted lists into one sorted list, consuming both.
    /// Stable: ties take from `left` first.
    #[instrument(level = "debug", skip(left, right))]
    pub fn merge_sorted(mut left: LinkedList<T>, mut right: LinkedList<T>) -> LinkedList<T> {
        let mut merged = LinkedList::new();
        let mut tail = &mut merged.head;

        loop {
            let take_left = match (left.front(), right.front()) {
                (Some(l), Some(r)) => l <= r,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let source = if take_left { &mut left } else { &mut right };
            let mut node = source.head.take().expect("front checked");
            source.head = node.next.take();
            *tail = Some(node);
            tail = &mut tail.as_mut().expect("just set").next;
        }

        merged
    }
}

/// Sum of two numbers stored as little-endian decimal digit lists.
///
/// `2 -> 4 -> 3` (342) plus `5 -> 6 -> 4` (465) is `7 -> 0 -> 8` (807).
pub fn add_digits(left: &LinkedList<u8>, right: &LinkedList<u8>) -> LinkedList<u8> {
    let mut sum = LinkedList::new();
    let mut tail = &mut sum.head;

    let mut l = left.iter();
    let mut r = right.iter();
    let mut carry = 0u8;

    loop {
        let (a, b) = (l.next(), r.next());
        if a.is_none() && b.is_none() && carry == 0 {
            break;
        }
        let total = a.copied().unwrap_or(0) + b.copied().unwrap_or(0) + carry;
        carry = total / 10;
        *tail = Some(Box::new(Node {
            value: total % 10,
            next: None,
        }));
        tail = &mut tail.as_mut().expect("just set").next;
    }

    sum
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        let mut tail = &mut list.head;
        for value in iter {
            *tail = Some(Box::new(Node { value, next: None }));
            tail = &mut tail.as_mut().expect("just set").next;
        }
        list
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Long chains would recurse on the default drop.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}
