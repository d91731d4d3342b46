//! LIFO stack over the node chain.

use std::fmt;

use crate::types::{GraphError, GraphResult};

use super::chain::{Chain, Iter};

/// LIFO stack; `push`, `pop` and `peek` work on the head in O(1).
/// Indexes count from the top.
pub struct Stack<T> {
    chain: Chain<T>,
}

impl<T> Stack<T> {
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

    pub fn push(&mut self, value: T) {
        self.chain.push_front(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.chain.front()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.chain.front_mut()
    }

    /// Element `index` positions below the top.
    pub fn get(&self, index: usize) -> GraphResult<&T> {
        self.chain.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Remove the element `index` positions below the top.
    pub fn remove(&mut self, index: usize) -> GraphResult<T> {
        let len = self.len();
        self.chain
            .remove(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Distance from the top of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty stack");
        }
        for item in self.iter() {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
