use super::handle::Handle;

/// A single tree node: one key, the handle of its value slot, and the three
/// structural links.
///
/// Links are non-owning; the arenas in [`RawTree`](super::raw_tree::RawTree)
/// own every node and value. Parent links exist so iteration can walk the
/// in-order sequence in both directions without an auxiliary stack.
///
/// Invariant: if `parent` is `Some(p)`, exactly one of `p`'s child links
/// refers back to this node; the root is the only node with `parent == None`.
pub(crate) struct Node<K> {
    key: K,
    value: Handle,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
}

impl<K> Node<K> {
    /// Creates a detached node (all links absent).
    pub(crate) const fn new(key: K, value: Handle) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    /// Handle of this node's value in the value arena.
    pub(crate) const fn value(&self) -> Handle {
        self.value
    }

    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    pub(crate) const fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    pub(crate) const fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) const fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    /// Consumes the node, returning the key and the value-slot handle.
    pub(crate) fn into_parts(self) -> (K, Handle) {
        (self.key, self.value)
    }
}
