//! FIFO queue over the node chain.

use std::fmt;

use crate::types::{GraphError, GraphResult};

use super::chain::{Chain, Iter};

/// FIFO queue. Enqueue appends at the tail and dequeue removes the head,
/// both O(1).
pub struct Queue<T> {
    chain: Chain<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Enqueue at the tail.
    pub fn enqueue(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Dequeue from the head.
    pub fn pop(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    /// Next element to be dequeued.
    pub fn peek(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Element `index` positions behind the head.
    pub fn get(&self, index: usize) -> GraphResult<&T> {
        self.chain.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Remove the element `index` positions behind the head.
    pub fn remove(&mut self, index: usize) -> GraphResult<T> {
        let len = self.len();
        self.chain
            .remove(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T: PartialEq> Queue<T> {
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty queue");
        }
        for item in self.iter() {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
