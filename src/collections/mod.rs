//! Singly-linked sequence primitives the graph is built on.

mod chain;
pub mod list;
pub mod queue;
pub mod stack;

pub use chain::{IntoIter, Iter, IterMut};
pub use list::List;
pub use queue::Queue;
pub use stack::Stack;
