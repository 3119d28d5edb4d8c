//! Queue implementations: circular array buffer and linked chain.

use crate::errors::{ContainerError, ContainerResult};

/// Fixed-capacity FIFO queue over a ring buffer.
///
/// Head and length track the live region; indices wrap with modular
/// arithmetic so enqueue and dequeue are both O(1).
#[derive(Debug)]
pub struct CircularQueue<T> {
    buffer: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    pub fn new(capacity: usize) -> ContainerResult<Self> {
        if capacity == 0 {
            return Err(ContainerError::ZeroCapacity);
        }
        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, || None);
        Ok(Self {
            buffer,
            head: 0,
            len: 0,
        })
    }

    pub fn enqueue(&mut self, value: T) -> ContainerResult<()> {
        if self.is_full() {
            return Err(ContainerError::CapacityExceeded(self.buffer.len()));
        }
        let tail = (self.head + self.len) % self.buffer.len();
        self.buffer[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buffer[self.head].take();
        self.head = (self.head + 1) % self.buffer.len();
        self.len -= 1;
        value
    }

    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            self.buffer[self.head].as_ref()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }
}

struct QueueNode<T> {
    value: T,
    next: Option<Box<QueueNode<T>>>,
}

/// Unbounded FIFO queue over a singly-linked chain.
///
/// A raw tail pointer gives O(1) enqueue; ownership stays with the head
/// chain, the tail pointer is only ever written through while it is the
/// unique live alias of the last node.
pub struct LinkedQueue<T> {
    head: Option<Box<QueueNode<T>>>,
    tail: *mut QueueNode<T>,
    len: usize,
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: std::ptr::null_mut(),
            len: 0,
        }
    }

    pub fn enqueue(&mut self, value: T) {
        let mut node = Box::new(QueueNode { value, next: None });
        let node_ptr: *mut QueueNode<T> = &mut *node;

        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            // Safety: tail points at the last node owned by the head chain.
            unsafe {
                (*self.tail).next = Some(node);
            }
        }
        self.tail = node_ptr;
        self.len += 1;
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            if self.head.is_none() {
                self.tail = std::ptr::null_mut();
            }
            self.len -= 1;
            node.value
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        while self.dequeue().is_some() {}
    }
}
