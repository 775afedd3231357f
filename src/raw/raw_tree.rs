use core::borrow::Borrow;
use core::cmp::Ordering;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// The parent-linked binary search tree backing `TreeMap`.
///
/// Nodes and values live in two separate arenas so that structural walks
/// (which read only nodes) never alias the `&mut V` borrows handed out by
/// mutable iterators. The tree is plainly unbalanced: depth is O(log n) for
/// random insertion order and degrades to O(n) for sorted input.
pub(crate) struct RawTree<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K>>,
    /// Arena storing all values.
    values: Arena<V>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Total number of key-value pairs in the tree.
    len: usize,
}

/// Result of an insertion attempt.
pub(crate) enum InsertResult<K, V> {
    /// A new node was created at this handle.
    New(Handle),
    /// Uniqueness was requested and an equal key already occupies `handle`;
    /// the rejected pair is handed back so the caller can reuse or drop it.
    Rejected {
        /// The node holding the equal key.
        handle: Handle,
        /// The key that was not inserted.
        key: K,
        /// The value that was not inserted.
        value: V,
    },
}

/// Worklist for the iterative deep copy: (source node, copied parent, side).
type CopyStack = SmallVec<[(Handle, Option<Handle>, bool); 32]>;

impl<K, V> RawTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            values: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            values: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the tree.
    pub(crate) fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Clears all elements from the tree.
    ///
    /// The arenas own every node and value, so teardown is two flat buffer
    /// drops; no per-node walk, no recursion, even for degenerate shapes.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.values.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns a reference to a node by handle.
    pub(crate) fn node(&self, handle: Handle) -> &Node<K> {
        self.nodes.get(handle)
    }

    /// Returns a reference to a node by handle from a raw pointer.
    ///
    /// # Safety
    /// - `ptr` must point to a valid, allocated `RawTree<K, V>`.
    pub(crate) unsafe fn node_ptr<'a>(ptr: *const Self, handle: Handle) -> &'a Node<K> {
        // SAFETY: We only access the `nodes` field through addr_of, avoiding aliasing with
        // the `values` field.
        unsafe { Arena::get_ptr(core::ptr::addr_of!((*ptr).nodes), handle) }
    }

    /// Returns a reference to a value by handle.
    pub(crate) fn value(&self, handle: Handle) -> &V {
        self.values.get(handle)
    }

    /// Returns a mutable reference to a value by handle.
    pub(crate) fn value_mut(&mut self, handle: Handle) -> &mut V {
        self.values.get_mut(handle)
    }

    /// Returns a mutable reference to a value by handle from a raw pointer.
    ///
    /// # Safety
    /// - `ptr` must point to a valid, allocated `RawTree<K, V>`.
    /// - The caller must have logical exclusive access to the value at `handle`.
    pub(crate) unsafe fn value_mut_ptr<'a>(ptr: *mut Self, handle: Handle) -> &'a mut V {
        // SAFETY: We only access the `values` field, avoiding aliasing with the `nodes` field.
        unsafe { (*core::ptr::addr_of_mut!((*ptr).values)).get_mut(handle) }
    }

    /// Returns the key and a mutable reference to the value of one node.
    pub(crate) fn key_value_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        let node = self.nodes.get(handle);
        (node.key(), self.values.get_mut(node.value()))
    }

    /// Handle of the smallest node, or `None` if the tree is empty.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.leftmost(root))
    }

    /// Handle of the largest node, or `None` if the tree is empty.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.rightmost(root))
    }

    /// Smallest node of the subtree rooted at `handle`.
    pub(crate) fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes.get(handle).left() {
            handle = left;
        }
        handle
    }

    /// Largest node of the subtree rooted at `handle`.
    pub(crate) fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes.get(handle).right() {
            handle = right;
        }
        handle
    }

    /// In-order successor of `handle`, or `None` past the last node.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        // SAFETY: `self` is a valid reference.
        unsafe { Self::successor_ptr(&raw const *self, handle) }
    }

    /// In-order predecessor of `handle`, or `None` before the first node.
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        // SAFETY: `self` is a valid reference.
        unsafe { Self::predecessor_ptr(&raw const *self, handle) }
    }

    /// Successor step through a raw pointer; reads only the node arena, so it
    /// may run while mutable value borrows are outstanding.
    ///
    /// With a right child, the successor is the leftmost node of that right
    /// subtree. Otherwise ascend parent links until arriving from a left
    /// child; that ancestor is the successor, and running out of ancestors
    /// means `handle` was the last node.
    ///
    /// # Safety
    /// - `ptr` must point to a valid, allocated `RawTree<K, V>`.
    pub(crate) unsafe fn successor_ptr(ptr: *const Self, handle: Handle) -> Option<Handle> {
        // SAFETY: Caller guarantees ptr is valid; only the `nodes` field is touched.
        unsafe {
            let nodes = core::ptr::addr_of!((*ptr).nodes);
            let node = Arena::get_ptr(nodes, handle);

            if let Some(right) = node.right() {
                let mut current = right;
                while let Some(left) = Arena::get_ptr(nodes, current).left() {
                    current = left;
                }
                return Some(current);
            }

            let mut current = handle;
            let mut parent = node.parent();
            while let Some(above) = parent {
                let above_node = Arena::get_ptr(nodes, above);
                if above_node.left() == Some(current) {
                    return Some(above);
                }
                current = above;
                parent = above_node.parent();
            }
            None
        }
    }

    /// Predecessor step through a raw pointer; mirror image of
    /// [`Self::successor_ptr`].
    ///
    /// # Safety
    /// - `ptr` must point to a valid, allocated `RawTree<K, V>`.
    pub(crate) unsafe fn predecessor_ptr(ptr: *const Self, handle: Handle) -> Option<Handle> {
        // SAFETY: Caller guarantees ptr is valid; only the `nodes` field is touched.
        unsafe {
            let nodes = core::ptr::addr_of!((*ptr).nodes);
            let node = Arena::get_ptr(nodes, handle);

            if let Some(left) = node.left() {
                let mut current = left;
                while let Some(right) = Arena::get_ptr(nodes, current).right() {
                    current = right;
                }
                return Some(current);
            }

            let mut current = handle;
            let mut parent = node.parent();
            while let Some(above) = parent {
                let above_node = Arena::get_ptr(nodes, above);
                if above_node.right() == Some(current) {
                    return Some(above);
                }
                current = above;
                parent = above_node.parent();
            }
            None
        }
    }

    /// Drains all key-value pairs in order.
    ///
    /// Handles are collected along the successor chain first, since taking
    /// payloads dismantles the links the walk depends on. O(n), no recursion.
    pub(crate) fn drain_to_vec(&mut self) -> alloc::vec::Vec<(K, V)> {
        let mut handles = alloc::vec::Vec::with_capacity(self.len);
        let mut current = self.first();
        while let Some(handle) = current {
            handles.push(handle);
            current = self.successor(handle);
        }

        let mut result = alloc::vec::Vec::with_capacity(self.len);
        for handle in handles {
            let (key, value) = self.nodes.take(handle).into_parts();
            result.push((key, self.values.take(value)));
        }

        self.clear();
        result
    }

    /// Sets `parent`'s left child link, and the back-link when present. O(1).
    fn attach_left(&mut self, parent: Handle, child: Option<Handle>) {
        self.nodes.get_mut(parent).set_left(child);
        if let Some(child) = child {
            self.nodes.get_mut(child).set_parent(Some(parent));
        }
    }

    /// Sets `parent`'s right child link, and the back-link when present. O(1).
    fn attach_right(&mut self, parent: Handle, child: Option<Handle>) {
        self.nodes.get_mut(parent).set_right(child);
        if let Some(child) = child {
            self.nodes.get_mut(child).set_parent(Some(parent));
        }
    }

    /// Repoints the link leading to `child` (its parent's matching side, or
    /// `root`) at `new`, fixing `new`'s parent back-link.
    fn replace_child(&mut self, parent: Option<Handle>, child: Handle, new: Option<Handle>) {
        match parent {
            Some(parent) => {
                if self.nodes.get(parent).left() == Some(child) {
                    self.attach_left(parent, new);
                } else {
                    self.attach_right(parent, new);
                }
            }
            None => {
                self.root = new;
                if let Some(new) = new {
                    self.nodes.get_mut(new).set_parent(None);
                }
            }
        }
    }
}

impl<K: Ord, V> RawTree<K, V> {
    /// Searches for a key.
    ///
    /// Strict-`Ord` descent: `Less` goes left, `Greater` goes right, `Equal`
    /// is the node. `None` when the descent falls off the tree. O(depth).
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// First node whose key is greater than or equal to `key`. O(depth).
    pub(crate) fn lower_bound<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        let mut candidate = None;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => {
                    candidate = Some(handle);
                    node.left()
                }
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        candidate
    }

    /// Inserts a key-value pair.
    ///
    /// Descends as in [`Self::search`], tracking the prospective parent and
    /// side. With `keep_unique`, meeting an equal key stops the descent and
    /// rejects the pair without touching the tree; without it, equal keys
    /// descend right, so duplicates land after their equals in the in-order
    /// sequence. O(depth) descent, O(1) attach.
    pub(crate) fn insert(&mut self, key: K, value: V, keep_unique: bool) -> InsertResult<K, V> {
        let Some(root) = self.root else {
            let value = self.values.alloc(value);
            let handle = self.nodes.alloc(Node::new(key, value));
            self.root = Some(handle);
            self.len = 1;
            return InsertResult::New(handle);
        };

        let mut current = root;
        let (parent, went_left) = loop {
            let node = self.nodes.get(current);
            match key.cmp(node.key()) {
                Ordering::Less => match node.left() {
                    Some(left) => current = left,
                    None => break (current, true),
                },
                Ordering::Equal if keep_unique => {
                    return InsertResult::Rejected {
                        handle: current,
                        key,
                        value,
                    };
                }
                Ordering::Greater | Ordering::Equal => match node.right() {
                    Some(right) => current = right,
                    None => break (current, false),
                },
            }
        };

        let value = self.values.alloc(value);
        let handle = self.nodes.alloc(Node::new(key, value));
        if went_left {
            self.attach_left(parent, Some(handle));
        } else {
            self.attach_right(parent, Some(handle));
        }
        self.len += 1;
        InsertResult::New(handle)
    }

    /// Removes the node at `handle`, returning its key, its value, and the
    /// continuation position for traversal:
    ///
    /// - **leaf**: detach from the parent; continuation is the parent
    ///   (`None` once the tree is empty).
    /// - **one child**: the child is promoted into the node's position;
    ///   continuation is the leftmost node of the promoted subtree.
    /// - **two children**: the in-order successor is spliced out of the
    ///   right subtree and transplanted into the node's position, taking
    ///   over all three links; continuation is the successor.
    ///
    /// Every path is pure link rewiring; no other node changes handle, so
    /// positions derived before the call (other than `handle`) stay valid.
    pub(crate) fn erase(&mut self, handle: Handle) -> (K, V, Option<Handle>) {
        let node = self.nodes.get(handle);
        let (left, right, parent) = (node.left(), node.right(), node.parent());

        let next = match (left, right) {
            (None, None) => {
                self.replace_child(parent, handle, None);
                parent
            }
            (Some(child), None) | (None, Some(child)) => {
                self.replace_child(parent, handle, Some(child));
                Some(self.leftmost(child))
            }
            (Some(left), Some(right)) => {
                let successor = self.leftmost(right);
                if successor != right {
                    // The successor is its parent's left child; its own right
                    // subtree (if any) takes its place before the transplant.
                    let successor_node = self.nodes.get(successor);
                    let successor_right = successor_node.right();
                    let successor_parent =
                        successor_node.parent().expect("leftmost node below the right child has a parent");
                    self.attach_left(successor_parent, successor_right);
                    self.attach_right(successor, Some(right));
                }
                self.attach_left(successor, Some(left));
                self.replace_child(parent, handle, Some(successor));
                Some(successor)
            }
        };

        self.len -= 1;
        let (key, value) = self.nodes.take(handle).into_parts();
        (key, self.values.take(value), next)
    }
}

impl<K: Clone, V: Clone> Clone for RawTree<K, V> {
    /// Deep copy into fresh, compact arenas.
    ///
    /// Driven by an explicit worklist instead of call-stack recursion, so a
    /// degenerate (list-shaped) tree of any size copies without overflowing
    /// the stack.
    fn clone(&self) -> Self {
        let mut new_nodes: Arena<Node<K>> = Arena::with_capacity(self.len);
        let mut new_values: Arena<V> = Arena::with_capacity(self.len);
        let mut new_root = None;

        let mut stack: CopyStack = SmallVec::new();
        if let Some(root) = self.root {
            stack.push((root, None, false));
        }

        while let Some((source, copied_parent, went_left)) = stack.pop() {
            let source_node = self.nodes.get(source);
            let value = new_values.alloc(self.values.get(source_node.value()).clone());
            let copied = new_nodes.alloc(Node::new(source_node.key().clone(), value));

            match copied_parent {
                Some(parent) => {
                    new_nodes.get_mut(copied).set_parent(Some(parent));
                    let parent_node = new_nodes.get_mut(parent);
                    if went_left {
                        parent_node.set_left(Some(copied));
                    } else {
                        parent_node.set_right(Some(copied));
                    }
                }
                None => new_root = Some(copied),
            }

            if let Some(left) = source_node.left() {
                stack.push((left, Some(copied), true));
            }
            if let Some(right) = source_node.right() {
                stack.push((right, Some(copied), false));
            }
        }

        Self {
            nodes: new_nodes,
            values: new_values,
            root: new_root,
            len: self.len,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    impl<K: Ord, V> RawTree<K, V> {
        /// Validates every structural invariant, panicking with a description
        /// of each violation. Intended for tests only.
        pub(crate) fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();

            if let Some(root) = self.root
                && self.nodes.get(root).parent().is_some()
            {
                errors.push(alloc::format!("root {root:?} has a parent link"));
            }

            // Iterative walk carrying the key interval each subtree must
            // stay inside: left subtrees are strictly below their ancestor,
            // right subtrees are greater or equal (duplicates go right).
            let mut reachable = 0usize;
            let mut stack: Vec<(Handle, Option<&K>, Option<&K>)> = Vec::new();
            if let Some(root) = self.root {
                stack.push((root, None, None));
            }

            while let Some((handle, low, high)) = stack.pop() {
                reachable += 1;
                let node = self.nodes.get(handle);

                if let Some(low) = low
                    && node.key() < low
                {
                    errors.push(alloc::format!("node {handle:?} violates its lower bound"));
                }
                if let Some(high) = high
                    && node.key() >= high
                {
                    errors.push(alloc::format!("node {handle:?} violates its upper bound"));
                }

                if let Some(left) = node.left() {
                    if self.nodes.get(left).parent() != Some(handle) {
                        errors.push(alloc::format!("left child of {handle:?} has a stale parent link"));
                    }
                    stack.push((left, low, Some(node.key())));
                }
                if let Some(right) = node.right() {
                    if self.nodes.get(right).parent() != Some(handle) {
                        errors.push(alloc::format!("right child of {handle:?} has a stale parent link"));
                    }
                    stack.push((right, Some(node.key()), high));
                }
            }

            if reachable != self.len {
                errors.push(alloc::format!("len is {} but {} nodes are reachable", self.len, reachable));
            }
            if self.nodes.len() != self.len {
                errors.push(alloc::format!(
                    "node arena holds {} live slots for {} entries",
                    self.nodes.len(),
                    self.len
                ));
            }
            if self.values.len() != self.len {
                errors.push(alloc::format!(
                    "value arena holds {} live slots for {} entries",
                    self.values.len(),
                    self.len
                ));
            }

            assert!(errors.is_empty(), "tree invariant violations:\n{}", errors.join("\n"));
        }

        fn in_order(&self) -> Vec<&K> {
            let mut keys = Vec::with_capacity(self.len);
            let mut current = self.first();
            while let Some(handle) = current {
                keys.push(self.nodes.get(handle).key());
                current = self.successor(handle);
            }
            keys
        }
    }

    fn tree_of(keys: &[u32]) -> RawTree<u32, u32> {
        let mut tree = RawTree::new();
        for &key in keys {
            tree.insert(key, key * 10, true);
        }
        tree.validate_invariants();
        tree
    }

    #[test]
    fn empty_tree() {
        let tree: RawTree<u32, u32> = RawTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(tree.first().is_none());
        assert!(tree.last().is_none());
        assert!(tree.search(&5).is_none());
        tree.validate_invariants();
    }

    #[test]
    fn clear_on_empty_is_a_no_op() {
        let mut tree: RawTree<u32, u32> = RawTree::new();
        tree.clear();
        assert_eq!(tree.len(), 0);
        tree.validate_invariants();
    }

    #[test]
    fn insert_then_search_round_trips() {
        let tree = tree_of(&[5, 3, 8, 1, 4]);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.in_order(), [&1, &3, &4, &5, &8]);
        for key in [5, 3, 8, 1, 4] {
            let handle = tree.search(&key).unwrap();
            assert_eq!(*tree.node(handle).key(), key);
            assert_eq!(*tree.value(tree.node(handle).value()), key * 10);
        }
        assert!(tree.search(&2).is_none());
        assert!(tree.search(&9).is_none());
    }

    #[test]
    fn unique_insert_rejects_and_returns_the_pair() {
        let mut tree = tree_of(&[5, 3, 8]);
        let existing = tree.search(&3).unwrap();
        match tree.insert(3, 999, true) {
            InsertResult::Rejected { handle, key, value } => {
                assert_eq!(handle, existing);
                assert_eq!(key, 3);
                assert_eq!(value, 999);
            }
            InsertResult::New(_) => panic!("duplicate insert must be rejected"),
        }
        // Nothing changed, including the stored value.
        assert_eq!(tree.len(), 3);
        assert_eq!(*tree.value(tree.node(existing).value()), 30);
        tree.validate_invariants();
    }

    #[test]
    fn duplicate_keys_descend_right() {
        let mut tree: RawTree<u32, u32> = RawTree::new();
        for (order, key) in [3, 5, 3, 3, 5].into_iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let result = tree.insert(key, order as u32, false);
            assert!(matches!(result, InsertResult::New(_)));
        }
        tree.validate_invariants();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.in_order(), [&3, &3, &3, &5, &5]);

        // In-order position of equal keys follows insertion order.
        let mut values = Vec::new();
        let mut current = tree.first();
        while let Some(handle) = current {
            values.push(*tree.value(tree.node(handle).value()));
            current = tree.successor(handle);
        }
        assert_eq!(values, [0, 2, 3, 1, 4]);
    }

    #[test]
    fn successor_and_predecessor_walk_the_sorted_sequence() {
        let tree = tree_of(&[50, 20, 70, 10, 30, 60, 80, 25, 35]);
        let sorted = [10, 20, 25, 30, 35, 50, 60, 70, 80];

        let mut forward = Vec::new();
        let mut current = tree.first();
        while let Some(handle) = current {
            forward.push(*tree.node(handle).key());
            current = tree.successor(handle);
        }
        assert_eq!(forward, sorted);

        let mut backward = Vec::new();
        let mut current = tree.last();
        while let Some(handle) = current {
            backward.push(*tree.node(handle).key());
            current = tree.predecessor(handle);
        }
        backward.reverse();
        assert_eq!(backward, sorted);
    }

    #[test]
    fn lower_bound_positions() {
        let tree = tree_of(&[10, 20, 30, 40]);
        assert_eq!(*tree.node(tree.lower_bound(&5).unwrap()).key(), 10);
        assert_eq!(*tree.node(tree.lower_bound(&20).unwrap()).key(), 20);
        assert_eq!(*tree.node(tree.lower_bound(&21).unwrap()).key(), 30);
        assert!(tree.lower_bound(&41).is_none());
    }

    // ─── erase: the three structural cases ───

    #[test]
    fn erase_leaf_continues_at_the_parent() {
        // 8 is a right-side leaf, 1 a left-side leaf; both continue at the
        // parent they hung from.
        let mut tree = tree_of(&[5, 3, 8, 1]);
        let parent_of_eight = tree.search(&5).unwrap();
        let (key, value, next) = tree.erase(tree.search(&8).unwrap());
        assert_eq!((key, value), (8, 80));
        assert_eq!(next, Some(parent_of_eight));
        tree.validate_invariants();

        let parent_of_one = tree.search(&3).unwrap();
        let (key, _, next) = tree.erase(tree.search(&1).unwrap());
        assert_eq!(key, 1);
        assert_eq!(next, Some(parent_of_one));
        tree.validate_invariants();
        assert_eq!(tree.in_order(), [&3, &5]);
    }

    #[test]
    fn erase_last_node_continues_at_end() {
        let mut tree = tree_of(&[7]);
        let (key, value, next) = tree.erase(tree.search(&7).unwrap());
        assert_eq!((key, value, next), (7, 70, None));
        assert!(tree.is_empty());
        assert!(tree.root.is_none());
        tree.validate_invariants();
    }

    #[test]
    fn erase_one_child_promotes_and_continues_at_subtree_minimum() {
        // 3 has a single left child subtree {1, 2}; erasing 3 promotes it and
        // continues at its smallest key.
        let mut tree = tree_of(&[5, 3, 8, 1, 2]);
        let one = tree.search(&1).unwrap();
        let (key, _, next) = tree.erase(tree.search(&3).unwrap());
        assert_eq!(key, 3);
        assert_eq!(next, Some(one));
        tree.validate_invariants();
        assert_eq!(tree.in_order(), [&1, &2, &5, &8]);
    }

    #[test]
    fn erase_root_with_only_right_child_promotes_it_to_root() {
        let mut tree = tree_of(&[5, 8]);
        let eight = tree.search(&8).unwrap();
        let (key, _, next) = tree.erase(tree.search(&5).unwrap());
        assert_eq!(key, 5);
        assert_eq!(next, Some(eight));
        assert_eq!(tree.root, Some(eight));
        assert!(tree.node(eight).parent().is_none());
        tree.validate_invariants();
    }

    #[test]
    fn erase_two_children_transplants_the_successor() {
        // Erasing 3 (children 1 and 4) splices in its successor 4; the
        // continuation is the successor in the erased node's position.
        let mut tree = tree_of(&[5, 3, 8, 1, 4]);
        let four = tree.search(&4).unwrap();
        let (key, value, next) = tree.erase(tree.search(&3).unwrap());
        assert_eq!((key, value), (3, 30));
        assert_eq!(next, Some(four));
        tree.validate_invariants();
        assert_eq!(tree.in_order(), [&1, &4, &5, &8]);
        assert!(tree.search(&3).is_none());
    }

    #[test]
    fn erase_two_children_with_distant_successor() {
        // The successor (60) sits deeper in the right subtree and has a right
        // child of its own (65), which must be reattached during the splice.
        let mut tree = tree_of(&[50, 20, 90, 10, 30, 70, 100, 60, 80, 65]);
        let sixty = tree.search(&60).unwrap();
        let (key, _, next) = tree.erase(tree.search(&50).unwrap());
        assert_eq!(key, 50);
        assert_eq!(next, Some(sixty));
        assert_eq!(tree.root, Some(sixty));
        tree.validate_invariants();
        assert_eq!(tree.in_order(), [&10, &20, &30, &60, &65, &70, &80, &90, &100]);
    }

    #[test]
    fn erase_everything_in_insertion_order() {
        let keys = [5, 3, 8, 1, 4, 7, 9, 2, 6];
        let mut tree = tree_of(&keys);
        for (erased, key) in keys.into_iter().enumerate() {
            let handle = tree.search(&key).unwrap();
            tree.erase(handle);
            tree.validate_invariants();
            assert_eq!(tree.len(), keys.len() - erased - 1);
            assert!(tree.search(&key).is_none());
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn drain_yields_sorted_pairs_and_empties_the_tree() {
        let mut tree = tree_of(&[5, 3, 8, 1, 4]);
        let drained = tree.drain_to_vec();
        assert_eq!(drained, [(1, 10), (3, 30), (4, 40), (5, 50), (8, 80)]);
        assert!(tree.is_empty());
        tree.validate_invariants();
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut tree = tree_of(&[5, 3, 8, 1, 4]);
        let copy = tree.clone();
        copy.validate_invariants();
        assert_eq!(copy.in_order(), [&1, &3, &4, &5, &8]);

        // Mutating the original leaves the copy untouched.
        tree.erase(tree.search(&3).unwrap());
        *tree.value_mut(tree.node(tree.search(&5).unwrap()).value()) = 999;
        assert_eq!(copy.in_order(), [&1, &3, &4, &5, &8]);
        let five = copy.search(&5).unwrap();
        assert_eq!(*copy.value(copy.node(five).value()), 50);
    }

    #[test]
    fn clone_survives_a_degenerate_tree() {
        // Ascending inserts build a right-leaning list; the worklist-driven
        // copy must not recurse per node.
        let mut tree: RawTree<u32, u32> = RawTree::new();
        for key in 0..4096 {
            tree.insert(key, key, true);
        }
        let copy = tree.clone();
        copy.validate_invariants();
        assert_eq!(copy.len(), 4096);
        assert_eq!(*copy.node(copy.first().unwrap()).key(), 0);
        assert_eq!(*copy.node(copy.last().unwrap()).key(), 4095);
    }

    // ─── model-based checks against a reference map ───

    #[derive(Clone, Debug)]
    enum Operation {
        Insert(u8, u32),
        Remove(u8),
        Search(u8),
        Clear,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            8 => (any::<u8>(), any::<u32>()).prop_map(|(key, value)| Operation::Insert(key, value)),
            4 => any::<u8>().prop_map(Operation::Remove),
            3 => any::<u8>().prop_map(Operation::Search),
            1 => Just(Operation::Clear),
        ]
    }

    proptest! {
        #[test]
        fn tree_behaves_like_a_reference_map(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut tree: RawTree<u8, u32> = RawTree::new();
            let mut model: BTreeMap<u8, u32> = BTreeMap::new();

            for operation in operations {
                match operation {
                    Operation::Insert(key, value) => {
                        match tree.insert(key, value, true) {
                            InsertResult::New(_) => {
                                prop_assert!(model.insert(key, value).is_none());
                            }
                            InsertResult::Rejected { handle, key, value } => {
                                prop_assert!(model.contains_key(&key));
                                let slot = tree.node(handle).value();
                                *tree.value_mut(slot) = value;
                                model.insert(key, value);
                            }
                        }
                    }
                    Operation::Remove(key) => {
                        match tree.search(&key) {
                            Some(handle) => {
                                let (erased, value, _) = tree.erase(handle);
                                prop_assert_eq!(erased, key);
                                prop_assert_eq!(model.remove(&key), Some(value));
                            }
                            None => prop_assert!(!model.contains_key(&key)),
                        }
                    }
                    Operation::Search(key) => {
                        let found = tree.search(&key).map(|handle| *tree.value(tree.node(handle).value()));
                        prop_assert_eq!(found, model.get(&key).copied());
                    }
                    Operation::Clear => {
                        tree.clear();
                        model.clear();
                    }
                }

                tree.validate_invariants();
                prop_assert_eq!(tree.len(), model.len());
            }

            let keys: Vec<u8> = tree.in_order().into_iter().copied().collect();
            let expected: Vec<u8> = model.keys().copied().collect();
            prop_assert_eq!(keys, expected);
        }
    }
}
