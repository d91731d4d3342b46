//! Singly-linked node chain shared by `List`, `Stack` and `Queue`.
//!
//! Every node is heap-allocated and owned by the chain; `head` and `tail`
//! point into the same allocation set. All raw pointer handling in the
//! crate lives in this file.

use std::marker::PhantomData;
use std::ptr::NonNull;

/// Link to the next node, or `None` at the end of the chain.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// One value plus the link to its successor.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

/// Head/tail addressed chain of nodes.
pub(crate) struct Chain<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

// SAFETY: the chain uniquely owns its nodes, like `Box<Node<T>>` would.
unsafe impl<T: Send> Send for Chain<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for Chain<T> {}

impl<T> Chain<T> {
    pub(crate) fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }

    /// O(1) insert before the head.
    pub(crate) fn push_front(&mut self, value: T) {
        let node = Self::alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// O(1) insert after the tail.
    pub(crate) fn push_back(&mut self, value: T) {
        let node = Self::alloc(value, None);
        match self.tail {
            // SAFETY: `tail` is a live node owned by this chain.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// O(1) removal of the head.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: `head` was produced by `alloc` and is unlinked here,
            // so ownership returns to a `Box` exactly once.
            let boxed = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = boxed.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            boxed.value
        })
    }

    /// Node at `index`, walking from the head (tail is a fast path).
    fn node_at(&self, index: usize) -> Link<T> {
        if index >= self.len {
            return None;
        }
        if index == self.len - 1 {
            return self.tail;
        }
        let mut current = self.head;
        for _ in 0..index {
            // SAFETY: `index < len`, so every step lands on a live node.
            current = current.and_then(|n| unsafe { (*n.as_ptr()).next });
        }
        current
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        // SAFETY: the node is live for as long as `self` is borrowed.
        self.node_at(index).map(|n| unsafe { &(*n.as_ptr()).value })
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        // SAFETY: `&mut self` guarantees exclusive access to the node.
        self.node_at(index)
            .map(|n| unsafe { &mut (*n.as_ptr()).value })
    }

    pub(crate) fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub(crate) fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    pub(crate) fn back(&self) -> Option<&T> {
        // SAFETY: see `get`.
        self.tail.map(|n| unsafe { &(*n.as_ptr()).value })
    }

    /// Insert so the new value ends up at `index`. Returns the value back
    /// when `index > len`.
    pub(crate) fn insert(&mut self, index: usize, value: T) -> Result<(), T> {
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }
        let Some(prev) = self.node_at(index - 1) else {
            return Err(value);
        };
        // SAFETY: `prev` is a live interior node; the new node takes over its
        // successor and becomes its successor.
        unsafe {
            let node = Self::alloc(value, (*prev.as_ptr()).next);
            (*prev.as_ptr()).next = Some(node);
        }
        self.len += 1;
        Ok(())
    }

    /// Unlink and return the value at `index`.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.pop_front();
        }
        let prev = self.node_at(index - 1)?;
        // SAFETY: `prev` is live and, since `index < len`, has a successor.
        // The successor is unlinked before being reboxed.
        unsafe {
            let target = (*prev.as_ptr()).next?;
            let boxed = Box::from_raw(target.as_ptr());
            (*prev.as_ptr()).next = boxed.next;
            if self.tail == Some(target) {
                self.tail = Some(prev);
            }
            self.len -= 1;
            Some(boxed.value)
        }
    }

    pub(crate) fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        // Iterative so long chains cannot overflow the stack.
        self.clear();
    }
}

/// Forward borrowing iterator; a fresh one always starts at the head.
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|n| {
            // SAFETY: the chain is borrowed for `'a`, so the node outlives it.
            let node = unsafe { &*n.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

/// Forward mutable iterator.
pub struct IterMut<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|n| {
            // SAFETY: the chain is mutably borrowed for `'a` and each node is
            // yielded once.
            let node = unsafe { &mut *n.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator, drains from the head.
pub struct IntoIter<T> {
    pub(crate) chain: Chain<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len(), Some(self.chain.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
