//! A priority queue implemented with a 4-ary heap.
//!
//! Insertion and popping the minimal element have `O(log n)` time complexity.
//! Checking the minimal element is `O(1)`. Keys of elements in the heap can
//! also be decreased.
//!
//! # Examples
//!
//! ```
//! use route_finder::datastr::index_heap::{Indexing, IndexdMinHeap};
//!
//! #[derive(Copy, Clone, Eq, PartialEq, Debug, Ord, PartialOrd)]
//! pub struct State {
//!     pub distance: usize,
//!     pub node: usize,
//! }
//!
//! // The `Indexing` traits needs to be implemented as well, so we can find elements to decrease their key.
//! impl Indexing for State {
//!     fn as_index(&self) -> usize {
//!         self.node
//!     }
//! }
//!
//! let mut heap = IndexdMinHeap::new(3);
//! heap.push(State { node: 0, distance: 42 });
//! heap.push(State { node: 1, distance: 23 });
//! heap.push(State { node: 2, distance: 50000 });
//! assert_eq!(heap.peek().cloned(), Some(State { node: 1, distance: 23 }));
//! heap.decrease_key(State { node: 0, distance: 1 });
//! assert_eq!(heap.pop(), Some(State { node: 0, distance: 1 }));
//! ```

use std::ops::Range;

/// A trait to map elements in a heap to a unique index.
/// The element type of the `IndexdMinHeap` has to implement this trait.
pub trait Indexing {
    /// This method has to map a heap element to a unique `usize` index.
    fn as_index(&self) -> usize;
}

/// A priority queue where the elements are IDs from 0 to id_count-1 where id_count is a number that is set in the constructor.
/// The elements are sorted ascending by the ordering defined by the `Ord` trait.
/// Only the methods necessary for dijkstras algorithm are implemented.
#[derive(Debug)]
pub struct IndexdMinHeap<T> {
    positions: Vec<usize>,
    data: Vec<T>,
}

const TREE_ARITY: usize = 4;
const INVALID_POSITION: usize = std::usize::MAX;

impl<T: Ord + Indexing> IndexdMinHeap<T> {
    /// Creates an empty `IndexdMinHeap`.
    /// The indices (as defined by the `Indexing` trait) of all inserted elements
    /// will have to be in `[0, max_id)`
    pub fn new(max_id: usize) -> IndexdMinHeap<T> {
        IndexdMinHeap {
            positions: vec![INVALID_POSITION; max_id],
            data: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the heap already contains an element mapped to the given index
    pub fn contains_index(&self, id: usize) -> bool {
        self.positions[id] != INVALID_POSITION
    }

    /// Returns a reference to the smallest item in the heap, or None if it is empty.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes the smallest item from the heap and returns it, or None if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let last = self.len() - 1;
        self.swap_elements(0, last);
        let item = self.data.pop()?;
        self.positions[item.as_index()] = INVALID_POSITION;
        if !self.is_empty() {
            self.move_down_in_tree(0);
        }
        Some(item)
    }

    /// Pushes an item onto the heap.
    /// Panics if an element with the same index already exists.
    pub fn push(&mut self, element: T) {
        assert!(!self.contains_index(element.as_index()));
        let insert_position = self.len();
        self.positions[element.as_index()] = insert_position;
        self.data.push(element);
        self.move_up_in_tree(insert_position);
    }

    /// Replaces the element with the same index by `element` which must not be larger.
    /// Undefined if the element is not part of the queue.
    pub fn decrease_key(&mut self, element: T) {
        let position = self.positions[element.as_index()];
        debug_assert!(element <= self.data[position]);
        self.data[position] = element;
        self.move_up_in_tree(position);
    }

    fn swap_elements(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.positions[self.data[a].as_index()] = a;
        self.positions[self.data[b].as_index()] = b;
    }

    fn move_up_in_tree(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / TREE_ARITY;
            if self.data[parent] <= self.data[position] {
                break;
            }
            self.swap_elements(parent, position);
            position = parent;
        }
    }

    fn move_down_in_tree(&mut self, mut position: usize) {
        while let Some(smallest_child) = Self::children_index_range(position, self.len()).min_by(|&a, &b| self.data[a].cmp(&self.data[b])) {
            if self.data[smallest_child] >= self.data[position] {
                return; // no child is smaller
            }
            self.swap_elements(position, smallest_child);
            position = smallest_child;
        }
    }

    fn children_index_range(parent_index: usize, heap_size: usize) -> Range<usize> {
        let first_child = TREE_ARITY * parent_index + 1;
        let last_child = std::cmp::min(TREE_ARITY * parent_index + TREE_ARITY + 1, heap_size);
        first_child..last_child
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Eq, PartialEq, Debug, Ord, PartialOrd)]
    struct Entry {
        key: u32,
        id: usize,
    }

    impl Indexing for Entry {
        fn as_index(&self) -> usize {
            self.id
        }
    }

    #[test]
    fn pops_in_ascending_order() {
        let keys = [17, 3, 99, 3, 42, 0, 8, 23, 5, 61, 7];
        let mut heap = IndexdMinHeap::new(keys.len());
        for (id, &key) in keys.iter().enumerate() {
            heap.push(Entry { key, id });
        }

        let mut popped = Vec::new();
        while let Some(entry) = heap.pop() {
            assert!(!heap.contains_index(entry.id));
            popped.push((entry.key, entry.id));
        }

        let mut expected: Vec<_> = keys.iter().enumerate().map(|(id, &key)| (key, id)).collect();
        expected.sort();
        assert_eq!(popped, expected);
        assert!(heap.is_empty());
    }

    #[test]
    fn equal_keys_pop_lowest_index_first() {
        let mut heap = IndexdMinHeap::new(4);
        heap.push(Entry { key: 5, id: 3 });
        heap.push(Entry { key: 5, id: 1 });
        heap.push(Entry { key: 5, id: 2 });
        assert_eq!(heap.pop().map(|e| e.id), Some(1));
        assert_eq!(heap.pop().map(|e| e.id), Some(2));
        assert_eq!(heap.pop().map(|e| e.id), Some(3));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn decrease_key_moves_element_up() {
        let mut heap = IndexdMinHeap::new(6);
        for id in 0..6 {
            heap.push(Entry { key: 10 + id as u32, id });
        }
        heap.decrease_key(Entry { key: 1, id: 5 });
        assert_eq!(heap.len(), 6);
        assert_eq!(heap.peek(), Some(&Entry { key: 1, id: 5 }));
        assert_eq!(heap.pop().map(|e| e.id), Some(5));
        assert_eq!(heap.pop().map(|e| e.id), Some(0));
    }
}
