//! Conversions, rendering and comparison for `Sequence`.

use std::fmt;

use super::list::Sequence;
use super::node::{self, Node};

impl Sequence {
    /// Builds a sequence holding `items` in the same order.
    ///
    /// Walks `items` back to front and inserts each at the front, so every
    /// insertion is O(1).
    pub fn from_array<S: AsRef<str>>(items: &[S]) -> Self {
        let mut seq = Sequence::new();
        for item in items.iter().rev() {
            seq.add_to_front(item.as_ref());
        }
        seq
    }

    /// Copies the elements, front to back, into a vector.
    pub fn to_array(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.count);
        out.extend(self.iter().map(str::to_owned));
        out
    }

    /// Renders the sequence as `( e1 e2 ... en )`.
    ///
    /// Diagnostic text only; the empty sequence renders as `( )`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("( ")?;
        for element in self.iter() {
            write!(f, "{} ", element)?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Equal when both hold the same elements in the same order.
impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Eq for Sequence {}

impl Clone for Sequence {
    fn clone(&self) -> Self {
        let mut copy = Sequence::new();
        copy.append_all_copy(self);
        copy
    }
}

impl<S: Into<String>> FromIterator<S> for Sequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let items: Vec<String> = iter.into_iter().map(Into::into).collect();
        let mut seq = Sequence::new();
        for item in items.into_iter().rev() {
            seq.add_to_front(item);
        }
        seq
    }
}

/// Appends in order, finding the end of the chain only once per call.
impl<S: Into<String>> Extend<S> for Sequence {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        let mut added = 0;
        let mut slot = node::tail_slot(&mut self.head);
        for item in iter {
            slot = &mut slot.insert(Node::terminal(item.into())).next;
            added += 1;
        }
        self.count += added;
    }
}

impl<S: AsRef<str>> From<&[S]> for Sequence {
    fn from(items: &[S]) -> Self {
        Sequence::from_array(items)
    }
}

impl From<Sequence> for Vec<String> {
    fn from(seq: Sequence) -> Self {
        seq.into_iter().collect()
    }
}
