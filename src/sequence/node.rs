//! Chain links owned by a [`Sequence`](super::Sequence).
//!
//! A node owns its successor exclusively, so the chain is a straight line of
//! boxes from the head to the terminal node. Nothing outside the `sequence`
//! module can see or hold a node.

/// Owning link to the rest of a chain; `None` terminates it.
pub(crate) type Link = Option<Box<Node>>;

/// One element of the chain together with its forward link.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) element: String,
    pub(crate) next: Link,
}

impl Node {
    /// Creates a boxed node ahead of `next`.
    pub(crate) fn boxed(element: String, next: Link) -> Box<Self> {
        Box::new(Self { element, next })
    }

    /// Creates a boxed terminal node.
    pub(crate) fn terminal(element: String) -> Box<Self> {
        Self::boxed(element, None)
    }
}

/// Returns the empty link at the end of the chain starting at `link`.
///
/// Walks every node once; the returned slot can be assigned to append.
pub(crate) fn tail_slot(mut link: &mut Link) -> &mut Link {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// Releases a chain front to back without recursing through `Box` drops.
pub(crate) fn release(mut link: Link) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(elements: &[&str]) -> Link {
        let mut head = None;
        for element in elements.iter().rev() {
            head = Some(Node::boxed(element.to_string(), head));
        }
        head
    }

    #[test]
    fn test_tail_slot_of_empty_chain_is_the_head() {
        let mut head: Link = None;
        *tail_slot(&mut head) = Some(Node::terminal("a".into()));
        assert_eq!(head.map(|n| n.element), Some("a".to_string()));
    }

    #[test]
    fn test_tail_slot_appends_after_terminal() {
        let mut head = chain(&["a", "b"]);
        *tail_slot(&mut head) = Some(Node::terminal("c".into()));

        let mut seen = Vec::new();
        let mut cursor = head.as_deref();
        while let Some(node) = cursor {
            seen.push(node.element.as_str());
            cursor = node.next.as_deref();
        }
        assert_eq!(seen, ["a", "b", "c"]);
    }

    #[test]
    fn test_release_long_chain() {
        let mut head = None;
        for i in 0..200_000 {
            head = Some(Node::boxed(i.to_string(), head));
        }
        release(head);
    }
}
