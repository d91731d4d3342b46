//! Phase 1 tests: sequence primitives (List, Stack, Queue).

use adjgraph::collections::{List, Queue, Stack};
use adjgraph::types::GraphError;

// ==================== List Tests ====================

#[test]
fn test_list_push_both_ends() {
    let mut list = List::new();
    list.push_back(2);
    list.push_back(3);
    list.push_front(1);
    assert_eq!(list.len(), 3);
    assert_eq!(list.first(), Some(&1));
    assert_eq!(list.last(), Some(&3));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_list_insert_at_every_position() {
    let mut list: List<char> = List::new();
    list.insert(0, 'b').unwrap(); // empty: head == tail
    list.insert(1, 'd').unwrap(); // index == len: tail
    list.insert(0, 'a').unwrap(); // head
    list.insert(2, 'c').unwrap(); // interior
    assert_eq!(list.to_string(), "abcd");
    assert_eq!(list.last(), Some(&'d'));
}

#[test]
fn test_list_get_out_of_range_is_explicit() {
    let list: List<u32> = (0..3).collect();
    assert_eq!(*list.get(2).unwrap(), 2);
    match list.get(3) {
        Err(GraphError::IndexOutOfRange { index: 3, len: 3 }) => {}
        other => panic!("Expected IndexOutOfRange, got {:?}", other),
    }

    let empty: List<u32> = List::new();
    assert!(empty.get(0).is_err());
    assert!(empty.first().is_none());
}

#[test]
fn test_list_remove_by_index_and_value() {
    let mut list: List<&str> = ["a", "b", "c", "b"].into_iter().collect();
    assert_eq!(list.remove(0).unwrap(), "a");
    assert_eq!(list.remove_item(&"b"), Some("b"));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["c", "b"]);
    assert_eq!(list.remove_item(&"z"), None);
    assert!(list.remove(5).is_err());
    assert_eq!(list.len(), 2);
}

#[test]
fn test_list_pop_front_and_back() {
    let mut list: List<u8> = (1..=3).collect();
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());

    // Tail must be usable again after draining.
    list.push_back(9);
    assert_eq!(list.first(), Some(&9));
    assert_eq!(list.last(), Some(&9));
}

#[test]
fn test_list_index_of_first_match() {
    let list: List<&str> = ["x", "y", "x"].into_iter().collect();
    assert_eq!(list.index_of(&"x"), Some(0));
    assert_eq!(list.index_of(&"y"), Some(1));
    assert_eq!(list.index_of(&"q"), None);
    assert!(list.contains(&"y"));
    assert!(!list.contains(&"q"));
}

#[test]
fn test_list_find_returns_stored_element() {
    #[derive(Debug)]
    struct Tagged(&'static str, u32);
    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    let list: List<Tagged> = vec![Tagged("a", 1), Tagged("b", 2)].into_iter().collect();
    let found = list.find(&Tagged("b", 0)).unwrap();
    assert_eq!(found.1, 2);
}

#[test]
fn test_list_set_and_clear() {
    let mut list: List<String> = ["one", "two"].iter().map(|s| s.to_string()).collect();
    let old = list.set(1, "deux".to_string()).unwrap();
    assert_eq!(old, "two");
    assert_eq!(list.get(1).unwrap(), "deux");
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.to_string(), "empty list");
}

#[test]
fn test_list_iteration_restarts() {
    let list: List<u32> = (0..4).collect();
    let first: u32 = list.iter().sum();
    let second: u32 = list.iter().sum();
    assert_eq!(first, 6);
    assert_eq!(first, second);
    assert_eq!(list.iter().len(), 4);
}

#[test]
fn test_list_iter_mut_and_into_iter() {
    let mut list: List<u32> = (1..=3).collect();
    for value in &mut list {
        *value *= 10;
    }
    let collected: Vec<u32> = list.into_iter().collect();
    assert_eq!(collected, vec![10, 20, 30]);
}

#[test]
fn test_list_clone_is_independent() {
    let mut original: List<u32> = (0..3).collect();
    let copy = original.clone();
    original.push_back(3);
    assert_eq!(copy.len(), 3);
    assert_eq!(original.len(), 4);
    assert_ne!(original, copy);
}

// ==================== Stack Tests ====================

#[test]
fn test_stack_push_pop_peek() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    stack.push("a");
    stack.push("b");
    assert_eq!(stack.peek(), Some(&"b"));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pop(), Some("b"));
    assert_eq!(stack.pop(), Some("a"));
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
}

#[test]
fn test_stack_remove_walks_from_top() {
    let mut stack = Stack::new();
    for i in 0..5 {
        stack.push(i);
    }
    assert_eq!(stack.remove(4).unwrap(), 0); // bottom
    assert_eq!(stack.remove(0).unwrap(), 4); // top
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(stack.index_of(&1), Some(2));
    assert!(stack.remove(3).is_err());
}

// ==================== Queue Tests ====================

#[test]
fn test_queue_fifo() {
    let mut queue = Queue::new();
    for i in 0..4 {
        queue.enqueue(i);
    }
    assert_eq!(queue.peek(), Some(&0));
    assert_eq!(queue.pop(), Some(0));
    assert_eq!(queue.pop(), Some(1));
    queue.enqueue(4);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn test_queue_get_and_remove() {
    let mut queue = Queue::new();
    queue.enqueue('x');
    queue.enqueue('y');
    queue.enqueue('z');
    assert_eq!(queue.get(1).unwrap(), &'y');
    assert!(queue.get(3).is_err());
    assert_eq!(queue.remove(1).unwrap(), 'y');
    assert_eq!(queue.to_string(), "xz");
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.to_string(), "empty queue");
}

#[test]
fn test_queue_large_volume() {
    let mut queue = Queue::new();
    for i in 0..10_000u32 {
        queue.enqueue(i);
    }
    let mut expected = 0;
    while let Some(value) = queue.pop() {
        assert_eq!(value, expected);
        expected += 1;
    }
    assert_eq!(expected, 10_000);
}
