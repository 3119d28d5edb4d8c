//! Stack implementations: fixed-capacity array-backed and linked.

use crate::errors::{ContainerError, ContainerResult};

/// Fixed-capacity stack over a preallocated buffer.
///
/// `push` refuses to grow past the construction-time capacity; `pop` and
/// `peek` return `None` on an empty stack.
#[derive(Debug)]
pub struct ArrayStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> ArrayStack<T> {
    pub fn new(capacity: usize) -> ContainerResult<Self> {
        if capacity == 0 {
            return Err(ContainerError::ZeroCapacity);
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
        })
    }

    pub fn push(&mut self, value: T) -> ContainerResult<()> {
        if self.items.len() == self.capacity {
            return Err(ContainerError::CapacityExceeded(self.capacity));
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

struct StackNode<T> {
    value: T,
    next: Option<Box<StackNode<T>>>,
}

/// Unbounded stack over a singly-linked chain of boxed nodes.
pub struct LinkedStack<T> {
    top: Option<Box<StackNode<T>>>,
    len: usize,
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn push(&mut self, value: T) {
        let node = Box::new(StackNode {
            value,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.top.take().map(|node| {
            self.top = node.next;
            self.len -= 1;
            node.value
        })
    }

    pub fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }
}

// Default Drop recursion would overflow on long chains; pop iteratively.
impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        while self.pop().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_full_array_stack_when_pushing_then_capacity_error() {
        let mut stack = ArrayStack::new(2).unwrap();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert!(stack.is_full());
        assert_eq!(stack.push(3), Err(ContainerError::CapacityExceeded(2)));
    }

    #[test]
    fn given_zero_capacity_when_constructing_then_rejected() {
        assert!(matches!(
            ArrayStack::<i32>::new(0),
            Err(ContainerError::ZeroCapacity)
        ));
    }

    #[test]
    fn given_pushes_when_popping_then_lifo_order() {
        let mut stack = ArrayStack::new(4).unwrap();
        for v in [10, 20, 30] {
            stack.push(v).unwrap();
        }
        assert_eq!(stack.peek(), Some(&30));
        assert_eq!(stack.pop(), Some(30));
        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn given_linked_stack_when_pushing_and_popping_then_lifo_order() {
        let mut stack = LinkedStack::new();
        assert!(stack.is_empty());
        stack.push("a");
        stack.push("b");
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(&"b"));
        assert_eq!(stack.pop(), Some("b"));
        assert_eq!(stack.pop(), Some("a"));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn given_deep_linked_stack_when_dropping_then_no_stack_overflow() {
        let mut stack = LinkedStack::new();
        for i in 0..200_000 {
            stack.push(i);
        }
        drop(stack);
    }
}
