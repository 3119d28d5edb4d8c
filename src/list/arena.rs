//! Arena-backed list problems: cycles, shared tails, multilevel lists.
//!
//! A `Box`-owned list cannot express a cycle or a Y-shaped shared tail,
//! so these exercises store nodes in a generational arena and link them
//! by `Index`. Dangling indices simply resolve to `None`.

use generational_arena::{Arena, Index};
use tracing::instrument;

/// List node with a horizontal `next` link and, for the multilevel
/// flatten exercise, a vertical `down` link.
#[derive(Debug)]
pub struct ListNode<T> {
    pub value: T,
    pub next: Option<Index>,
    pub down: Option<Index>,
}

/// Arena storage for linked-list nodes addressed by `Index`.
#[derive(Debug)]
pub struct ListArena<T> {
    arena: Arena<ListNode<T>>,
}

impl<T> Default for ListArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListArena<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    #[instrument(level = "trace", skip(self, value))]
    pub fn insert(&mut self, value: T) -> Index {
        self.arena.insert(ListNode {
            value,
            next: None,
            down: None,
        })
    }

    pub fn node(&self, idx: Index) -> Option<&ListNode<T>> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn link(&mut self, from: Index, to: Option<Index>) {
        if let Some(node) = self.arena.get_mut(from) {
            node.next = to;
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn link_down(&mut self, from: Index, to: Option<Index>) {
        if let Some(node) = self.arena.get_mut(from) {
            node.down = to;
        }
    }

    /// Build a `next`-linked chain from `values`, returning its head.
    pub fn chain(&mut self, values: impl IntoIterator<Item = T>) -> Option<Index> {
        let mut head = None;
        let mut tail: Option<Index> = None;
        for value in values {
            let idx = self.insert(value);
            match tail {
                Some(prev) => self.link(prev, Some(idx)),
                None => head = Some(idx),
            }
            tail = Some(idx);
        }
        head
    }

    /// Build a `down`-linked chain from `values`, returning its head.
    pub fn chain_down(&mut self, values: impl IntoIterator<Item = T>) -> Option<Index> {
        let mut head = None;
        let mut tail: Option<Index> = None;
        for value in values {
            let idx = self.insert(value);
            match tail {
                Some(prev) => self.link_down(prev, Some(idx)),
                None => head = Some(idx),
            }
            tail = Some(idx);
        }
        head
    }

    fn next_of(&self, idx: Index) -> Option<Index> {
        self.arena.get(idx).and_then(|node| node.next)
    }

    fn down_of(&self, idx: Index) -> Option<Index> {
        self.arena.get(idx).and_then(|node| node.down)
    }

    /// Floyd's cycle detection: slow/fast pointers, O(1) space.
    #[instrument(level = "debug", skip(self))]
    pub fn has_cycle(&self, head: Option<Index>) -> bool {
        self.meeting_point(head).is_some()
    }

    /// First node of the cycle, if any.
    ///
    /// Floyd phase two: after slow and fast meet, restarting one pointer
    /// from the head and stepping both singly converges on the entry node.
    #[instrument(level = "debug", skip(self))]
    pub fn cycle_start(&self, head: Option<Index>) -> Option<Index> {
        let meeting = self.meeting_point(head)?;

        let mut a = head.expect("meeting point implies non-empty list");
        let mut b = meeting;
        while a != b {
            a = self.next_of(a).expect("cycle implies successors exist");
            b = self.next_of(b).expect("cycle implies successors exist");
        }
        Some(a)
    }

    /// Sever the link that closes the loop. Returns `true` when a cycle
    /// was found and removed.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_cycle(&mut self, head: Option<Index>) -> bool {
        let Some(start) = self.cycle_start(head) else {
            return false;
        };

        // Walk the cycle until the node pointing back at its entry.
        let mut current = start;
        while self.next_of(current) != Some(start) {
            current = self.next_of(current).expect("walking inside the cycle");
        }
        self.link(current, None);
        true
    }

    fn meeting_point(&self, head: Option<Index>) -> Option<Index> {
        let mut slow = head?;
        let mut fast = head?;

        loop {
            slow = self.next_of(slow)?;
            fast = self.next_of(self.next_of(fast)?)?;
            if slow == fast {
                return Some(slow);
            }
        }
    }

    /// First common node of two acyclic lists that may share a tail.
    ///
    /// Aligns the longer list by the length difference, then walks both
    /// in lockstep until the indices coincide.
    #[instrument(level = "debug", skip(self))]
    pub fn intersection(&self, left: Option<Index>, right: Option<Index>) -> Option<Index> {
        let left_len = self.length(left);
        let right_len = self.length(right);

        let mut a = left;
        let mut b = right;
        for _ in 0..left_len.saturating_sub(right_len) {
            a = a.and_then(|idx| self.next_of(idx));
        }
        for _ in 0..right_len.saturating_sub(left_len) {
            b = b.and_then(|idx| self.next_of(idx));
        }

        while let (Some(x), Some(y)) = (a, b) {
            if x == y {
                return Some(x);
            }
            a = self.next_of(x);
            b = self.next_of(y);
        }
        None
    }

    /// Index of the `n`-th node (0-based) along the `next` chain.
    pub fn nth(&self, head: Option<Index>, n: usize) -> Option<Index> {
        let mut current = head;
        for _ in 0..n {
            current = current.and_then(|idx| self.next_of(idx));
        }
        current
    }

    fn length(&self, head: Option<Index>) -> usize {
        let mut count = 0;
        let mut current = head;
        while let Some(idx) = current {
            count += 1;
            current = self.next_of(idx);
        }
        count
    }

    /// Values along the `next` chain. The chain must be acyclic.
    pub fn values(&self, head: Option<Index>) -> Vec<&T> {
        let mut out = Vec::new();
        let mut current = head;
        while let Some(idx) = current {
            let node = &self.arena[idx];
            out.push(&node.value);
            current = node.next;
        }
        out
    }

    /// Values along the `down` chain.
    pub fn down_values(&self, head: Option<Index>) -> Vec<&T> {
        let mut out = Vec::new();
        let mut current = head;
        while let Some(idx) = current {
            let node = &self.arena[idx];
            out.push(&node.value);
            current = node.down;
        }
        out
    }
}

impl<T: Ord> ListArena<T> {
    /// Flatten a multilevel list into one sorted `down` chain.
    ///
    /// The input is a `next` chain whose every node heads a sorted `down`
    /// chain. Sublists are merged pairwise right to left, as the classic
    /// recursive formulation does; all `next` links are cleared.
    #[instrument(level = "debug", skip(self))]
    pub fn flatten(&mut self, head: Option<Index>) -> Option<Index> {
        let mut heads = Vec::new();
        let mut current = head;
        while let Some(idx) = current {
            current = self.next_of(idx);
            self.link(idx, None);
            heads.push(idx);
        }

        let mut merged: Option<Index> = None;
        for idx in heads.into_iter().rev() {
            merged = self.merge_down(Some(idx), merged);
        }
        merged
    }

    /// Two-pointer merge of sorted `down` chains. Stable: ties take from
    /// `left` first.
    fn merge_down(&mut self, left: Option<Index>, right: Option<Index>) -> Option<Index> {
        let mut a = left;
        let mut b = right;
        let mut head = None;
        let mut tail: Option<Index> = None;

        loop {
            let pick = match (a, b) {
                (Some(x), Some(y)) => {
                    if self.arena[x].value <= self.arena[y].value {
                        a = self.down_of(x);
                        x
                    } else {
                        b = self.down_of(y);
                        y
                    }
                }
                (Some(x), None) => {
                    a = self.down_of(x);
                    x
                }
                (None, Some(y)) => {
                    b = self.down_of(y);
                    y
                }
                (None, None) => break,
            };

            match tail {
                Some(prev) => self.link_down(prev, Some(pick)),
                None => head = Some(pick),
            }
            tail = Some(pick);
        }

        if let Some(last) = tail {
            self.link_down(last, None);
        }
        head
    }
}
