//! Structural algorithms: reverse, split, merge and merge sort.
//!
//! All of them relink existing nodes. None allocates a node, and none leaves
//! a node reachable from two sequences once it returns.

use std::mem;

use super::list::Sequence;
use super::node::Link;

impl Sequence {
    /// Reverses the element order in place.
    ///
    /// Walks the chain once, moving each node onto the front of the
    /// already-reversed prefix.
    pub fn reverse(&mut self) {
        let mut remaining = self.head.take();
        while let Some(mut node) = remaining {
            remaining = mem::replace(&mut node.next, self.head.take());
            self.head = Some(node);
        }
    }

    /// Splits off the back half of the sequence and returns it.
    ///
    /// This sequence keeps the first `ceil(n / 2)` elements; the returned one
    /// owns the remaining `floor(n / 2)` nodes. With one element or none,
    /// nothing moves and an empty sequence is returned.
    pub fn split(&mut self) -> Sequence {
        let mut back = Sequence::new();
        if self.count <= 1 {
            return back;
        }

        let keep = self.count - self.count / 2;
        let mut cursor = self.head.as_deref_mut();
        for _ in 1..keep {
            cursor = cursor.and_then(|node| node.next.as_deref_mut());
        }

        back.head = cursor.and_then(|node| node.next.take());
        back.count = self.count - keep;
        self.count = keep;
        log::trace!("split: kept {}, moved {}", self.count, back.count);
        back
    }

    /// Merges the sorted sequence `other` into this sorted sequence.
    ///
    /// Both must already be ascending. Afterwards this sequence holds every
    /// node of both, ascending, and `other` is empty. On ties the element
    /// from this sequence comes first.
    pub fn merge(&mut self, other: &mut Sequence) {
        let total = self.count + other.count;
        log::trace!("merge: {} + {}", self.count, other.count);

        // Both chains are detached before any relinking starts.
        let mut left = self.head.take();
        let mut right = other.head.take();
        self.count = 0;
        other.count = 0;

        let mut tail = &mut self.head;
        while let Some(from_left) = left_goes_first(&left, &right) {
            let source = if from_left { &mut left } else { &mut right };
            if let Some(mut node) = source.take() {
                *source = node.next.take();
                tail = &mut tail.insert(node).next;
            }
        }
        *tail = left.or(right);
        self.count = total;
    }

    /// Sorts the sequence ascending in place.
    ///
    /// Splits, sorts both halves, then merges them back, for O(n log n)
    /// comparisons and O(log n) recursion depth. The sort is stable.
    pub fn merge_sort(&mut self) {
        match self.count {
            0 | 1 => {}
            2 => {
                if self.first_pair_descending() {
                    self.reverse();
                }
            }
            n => {
                log::trace!("merge_sort: {} elements", n);
                let mut back = self.split();
                self.merge_sort();
                back.merge_sort();
                self.merge(&mut back);
            }
        }
    }

    /// Returns true if the first element sorts strictly after the second.
    fn first_pair_descending(&self) -> bool {
        match self.head.as_deref() {
            Some(first) => match first.next.as_deref() {
                Some(second) => first.element > second.element,
                None => false,
            },
            None => false,
        }
    }
}

/// Decides which chain supplies the next merged node.
///
/// `None` once either chain is exhausted.
fn left_goes_first(left: &Link, right: &Link) -> Option<bool> {
    match (left, right) {
        (Some(l), Some(r)) => Some(l.element <= r.element),
        _ => None,
    }
}

// =============================================================================
// TESTS
// =============================================================================
