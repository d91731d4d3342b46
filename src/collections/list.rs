//! Index-addressable singly-linked list.

use std::fmt;

use crate::types::{GraphError, GraphResult};

use super::chain::{Chain, IntoIter, Iter, IterMut};

/// Ordered sequence with O(1) head and tail insertion and O(n) indexed access.
///
/// Iteration is forward-only; every call to [`List::iter`] starts again at
/// index 0. The borrow checker rules out mutation during iteration.
pub struct List<T> {
    chain: Chain<T>,
}

impl<T> List<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// True when the list holds no element.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Insert at the head.
    pub fn push_front(&mut self, value: T) {
        self.chain.push_front(value);
    }

    /// Append at the tail.
    pub fn push_back(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Insert so that `value` ends up at `index`.
    ///
    /// `index == 0` and `index == len` are O(1); any other valid index walks
    /// from the head.
    pub fn insert(&mut self, index: usize, value: T) -> GraphResult<()> {
        let len = self.len();
        self.chain
            .insert(index, value)
            .map_err(|_| GraphError::IndexOutOfRange { index, len })
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> GraphResult<&T> {
        self.chain.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Mutable element at `index`.
    pub fn get_mut(&mut self, index: usize) -> GraphResult<&mut T> {
        let len = self.len();
        self.chain
            .get_mut(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    /// First element.
    pub fn first(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Last element, O(1).
    pub fn last(&self) -> Option<&T> {
        self.chain.back()
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> GraphResult<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Remove and return the element at `index`.
    pub fn remove(&mut self, index: usize) -> GraphResult<T> {
        let len = self.len();
        self.chain
            .remove(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    /// Remove the head.
    pub fn pop_front(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    /// Remove the tail. Walks to the predecessor, so O(n).
    pub fn pop_back(&mut self) -> Option<T> {
        match self.len() {
            0 => None,
            len => self.chain.remove(len - 1),
        }
    }

    /// Position of the first element matching `predicate`.
    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Borrowing iterator from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    /// Mutable iterator from the head.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.chain.iter_mut()
    }
}

impl<T: PartialEq> List<T> {
    /// Index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.position(|item| item == value)
    }

    /// True when some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// First stored element equal to `value`.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.iter().find(|item| *item == value)
    }

    /// Remove the first element equal to `value`.
    pub fn remove_item(&mut self, value: &T) -> Option<T> {
        let index = self.index_of(value)?;
        self.chain.remove(index)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

/// Concatenates the elements' display forms; an empty list renders as `empty list`.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty list");
        }
        for item in self.iter() {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { chain: self.chain }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
