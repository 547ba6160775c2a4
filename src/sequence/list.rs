//! The `Sequence` container: construction, queries, insertion and removal.
//!
//! The structural algorithms (reverse, split, merge, merge sort) live in
//! `algorithms.rs`; conversions and comparison live in `convert.rs`.

use crate::error::{SequenceError, SequenceResult};
use super::node::{self, Link, Node};

/// A singly-linked, ordered sequence of text elements.
///
/// The sequence owns its whole chain. `count` is kept equal to the number of
/// nodes reachable from `head` after every public method returns.
///
/// # Example
///
/// ```rust
/// use textchain::Sequence;
///
/// let mut seq = Sequence::from_array(&["c", "a", "b"]);
/// assert_eq!(seq.render(), "( c a b )");
///
/// seq.merge_sort();
/// assert_eq!(seq.render(), "( a b c )");
/// ```
pub struct Sequence {
    pub(crate) head: Link,
    pub(crate) count: usize,
}

impl Sequence {
    // =========================================================================
    // CONSTRUCTION & QUERIES
    // =========================================================================

    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            head: None,
            count: 0,
        }
    }

    /// Returns true if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of elements. O(1).
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if any element equals `element`. Linear scan from the front.
    pub fn contains(&self, element: &str) -> bool {
        self.iter().any(|e| e == element)
    }

    /// Returns the element at `index`, walking `index` links from the front.
    pub fn get(&self, index: usize) -> SequenceResult<&str> {
        let out_of_range =
            || SequenceError::out_of_range(i64::try_from(index).unwrap_or(i64::MAX), self.count);
        if index >= self.count {
            return Err(out_of_range());
        }
        self.iter().nth(index).ok_or_else(out_of_range)
    }

    /// Returns the first element, or `EmptyCollection` if there is none.
    pub fn front(&self) -> SequenceResult<&str> {
        self.head
            .as_deref()
            .map(|node| node.element.as_str())
            .ok_or_else(SequenceError::empty_collection)
    }

    // =========================================================================
    // INSERTION & REMOVAL
    // =========================================================================

    /// Inserts `element` ahead of the current first element. O(1).
    pub fn add_to_front(&mut self, element: impl Into<String>) {
        self.push_node_front(Node::terminal(element.into()));
    }

    /// Appends `element` after the current last element.
    ///
    /// Scans to the terminal node, so each call is O(n). Build long
    /// sequences with [`Sequence::from_array`] or `collect()` instead.
    pub fn add_to_back(&mut self, element: impl Into<String>) {
        *node::tail_slot(&mut self.head) = Some(Node::terminal(element.into()));
        self.count += 1;
    }

    /// Detaches and returns the first element.
    ///
    /// Fails with `EmptyCollection` on an empty sequence.
    pub fn remove_front(&mut self) -> SequenceResult<String> {
        self.pop_node_front()
            .map(|node| node.element)
            .ok_or_else(SequenceError::empty_collection)
    }

    /// Copies every element of `other`, in order, onto the end of this sequence.
    ///
    /// `other` is left untouched. The end of this chain is found once and the
    /// cursor then advances with each copied node, so the cost is
    /// O(len(self) + len(other)).
    pub fn append_all_copy(&mut self, other: &Sequence) {
        let mut slot = node::tail_slot(&mut self.head);
        for element in other.iter() {
            slot = &mut slot.insert(Node::terminal(element.to_owned())).next;
        }
        self.count += other.count;
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        node::release(self.head.take());
        self.count = 0;
    }

    // =========================================================================
    // INTERNAL NODE MOVES
    // =========================================================================

    /// Links an already-detached node in as the new head.
    pub(crate) fn push_node_front(&mut self, mut node: Box<Node>) {
        node.next = self.head.take();
        self.head = Some(node);
        self.count += 1;
    }

    /// Detaches the head node, leaving its `next` empty.
    pub(crate) fn pop_node_front(&mut self) -> Option<Box<Node>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.count -= 1;
        Some(node)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Sequence {
    fn drop(&mut self) {
        node::release(self.head.take());
    }
}

// =============================================================================
// TESTS
// =============================================================================
