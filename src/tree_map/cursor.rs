use core::fmt;
use core::ptr;

use crate::raw::{Handle, RawTree};

/// A cursor over an entry of a `TreeMap`, movable in both directions.
///
/// A cursor either points at an entry or sits past the end of the map. It is
/// created by the [`cursor_front`], [`cursor_back`], and [`find_cursor`]
/// methods on [`TreeMap`], and borrows the map immutably for its whole
/// lifetime, so the map cannot change underneath it.
///
/// Stepping costs O(depth) in the worst case (climbing out of a deep
/// subtree), but a sweep across the whole map touches every link at most
/// twice, so a full pass is O(n).
///
/// # Examples
///
/// ```
/// use sabi_tree::TreeMap;
///
/// let map = TreeMap::from([(1, "a"), (2, "b"), (3, "c")]);
///
/// let mut cursor = map.find_cursor(&2);
/// assert_eq!(cursor.key_value(), Some((&2, &"b")));
/// cursor.move_prev();
/// assert_eq!(cursor.key_value(), Some((&1, &"a")));
/// ```
///
/// [`cursor_front`]: crate::TreeMap::cursor_front
/// [`cursor_back`]: crate::TreeMap::cursor_back
/// [`find_cursor`]: crate::TreeMap::find_cursor
/// [`TreeMap`]: crate::TreeMap
pub struct Cursor<'a, K, V> {
    pub(crate) tree: &'a RawTree<K, V>,
    pub(crate) node: Option<Handle>,
}

impl<'a, K, V> Cursor<'a, K, V> {
    /// Returns a reference to the key of the current entry, or `None` if the
    /// cursor is past the end.
    ///
    /// The returned reference borrows the map, not the cursor, so it stays
    /// usable after the cursor moves on.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn key(&self) -> Option<&'a K> {
        Some(self.tree.node(self.node?).key())
    }

    /// Returns a reference to the value of the current entry, or `None` if
    /// the cursor is past the end.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn value(&self) -> Option<&'a V> {
        let node = self.tree.node(self.node?);
        Some(self.tree.value(node.value()))
    }

    /// Returns references to the key and value of the current entry, or
    /// `None` if the cursor is past the end.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn key_value(&self) -> Option<(&'a K, &'a V)> {
        let node = self.tree.node(self.node?);
        Some((node.key(), self.tree.value(node.value())))
    }

    /// Moves the cursor to the next entry in key order.
    ///
    /// Stepping off the largest entry leaves the cursor past the end; a
    /// cursor past the end stays there.
    ///
    /// # Complexity
    ///
    /// O(depth) worst case; O(1) amortized over a full sweep.
    pub fn move_next(&mut self) {
        if let Some(handle) = self.node {
            self.node = self.tree.successor(handle);
        }
    }

    /// Moves the cursor to the previous entry in key order.
    ///
    /// Stepping off the smallest entry leaves the cursor past the end; a
    /// cursor past the end stays there.
    ///
    /// # Complexity
    ///
    /// O(depth) worst case; O(1) amortized over a full sweep.
    pub fn move_prev(&mut self) {
        if let Some(handle) = self.node {
            self.node = self.tree.predecessor(handle);
        }
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        Cursor {
            tree: self.tree,
            node: self.node,
        }
    }
}

impl<K, V> PartialEq for Cursor<'_, K, V> {
    /// Two cursors are equal when they point at the same position of the
    /// same map. All past-the-end cursors of one map compare equal.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<K, V> Eq for Cursor<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Cursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.key_value()).finish()
    }
}

/// A cursor over an entry of a `TreeMap` with editing powers.
///
/// Like [`Cursor`], a mutable cursor either points at an entry or sits past
/// the end of the map. It is created by the [`cursor_front_mut`],
/// [`cursor_back_mut`], and [`find_cursor_mut`] methods on [`TreeMap`] and
/// borrows the map mutably, so it is the only handle into the map while it
/// lives.
///
/// On top of movement and read access, a mutable cursor can change the
/// current value in place and remove the current entry; removal leaves the
/// cursor on a still-valid neighboring position instead of invalidating it.
///
/// # Examples
///
/// ```
/// use sabi_tree::TreeMap;
///
/// let mut map = TreeMap::from([(1, "a"), (2, "b"), (3, "c")]);
///
/// let mut cursor = map.cursor_front_mut();
/// cursor.move_next();
/// assert_eq!(cursor.remove_current(), Some((2, "b")));
/// assert_eq!(cursor.key(), Some(&3));
/// assert_eq!(map.len(), 2);
/// ```
///
/// [`cursor_front_mut`]: crate::TreeMap::cursor_front_mut
/// [`cursor_back_mut`]: crate::TreeMap::cursor_back_mut
/// [`find_cursor_mut`]: crate::TreeMap::find_cursor_mut
/// [`TreeMap`]: crate::TreeMap
pub struct CursorMut<'a, K, V> {
    pub(crate) tree: &'a mut RawTree<K, V>,
    pub(crate) node: Option<Handle>,
}

impl<K, V> CursorMut<'_, K, V> {
    /// Returns a reference to the key of the current entry, or `None` if the
    /// cursor is past the end.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn key(&self) -> Option<&K> {
        Some(self.tree.node(self.node?).key())
    }

    /// Returns a reference to the value of the current entry, or `None` if
    /// the cursor is past the end.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn value(&self) -> Option<&V> {
        let node = self.tree.node(self.node?);
        Some(self.tree.value(node.value()))
    }

    /// Returns a mutable reference to the value of the current entry, or
    /// `None` if the cursor is past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeMap;
    ///
    /// let mut map = TreeMap::from([(1, 10), (2, 20)]);
    /// let mut cursor = map.cursor_front_mut();
    /// if let Some(value) = cursor.value_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(map[&1], 11);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn value_mut(&mut self) -> Option<&mut V> {
        let slot = self.tree.node(self.node?).value();
        Some(self.tree.value_mut(slot))
    }

    /// Returns references to the key and value of the current entry, or
    /// `None` if the cursor is past the end.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn key_value(&self) -> Option<(&K, &V)> {
        let node = self.tree.node(self.node?);
        Some((node.key(), self.tree.value(node.value())))
    }

    /// Moves the cursor to the next entry in key order.
    ///
    /// Stepping off the largest entry leaves the cursor past the end; a
    /// cursor past the end stays there.
    ///
    /// # Complexity
    ///
    /// O(depth) worst case; O(1) amortized over a full sweep.
    pub fn move_next(&mut self) {
        if let Some(handle) = self.node {
            self.node = self.tree.successor(handle);
        }
    }

    /// Moves the cursor to the previous entry in key order.
    ///
    /// Stepping off the smallest entry leaves the cursor past the end; a
    /// cursor past the end stays there.
    ///
    /// # Complexity
    ///
    /// O(depth) worst case; O(1) amortized over a full sweep.
    pub fn move_prev(&mut self) {
        if let Some(handle) = self.node {
            self.node = self.tree.predecessor(handle);
        }
    }

    /// Removes the current entry, returning its key and value, and leaves
    /// the cursor on the position where the tree closed the gap:
    ///
    /// - removing a leaf lands on its parent (or past the end when the map
    ///   became empty);
    /// - removing an entry with one child lands on the smallest key of the
    ///   promoted subtree;
    /// - removing an entry with two children lands on the in-order
    ///   successor, which took over the removed entry's place.
    ///
    /// The continuation follows the tree surgery, not key order: the new
    /// position can hold a key *smaller* than the removed one (removing a
    /// right-hanging leaf lands on its parent). Bulk removals that must
    /// visit every key exactly once are better served by
    /// [`TreeMap::retain`] or [`TreeMap::remove_range`].
    ///
    /// Returns `None`, without moving, if the cursor is past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeMap;
    ///
    /// let mut map = TreeMap::from([(1, "a"), (2, "b"), (3, "c")]);
    ///
    /// let mut cursor = map.find_cursor_mut(&2);
    /// assert_eq!(cursor.remove_current(), Some((2, "b")));
    /// assert_eq!(cursor.key(), Some(&3));
    ///
    /// // Past the end there is nothing to remove.
    /// let mut end = map.find_cursor_mut(&99);
    /// assert_eq!(end.remove_current(), None);
    /// ```
    ///
    /// [`TreeMap::retain`]: crate::TreeMap::retain
    /// [`TreeMap::remove_range`]: crate::TreeMap::remove_range
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn remove_current(&mut self) -> Option<(K, V)>
    where
        K: Ord,
    {
        let handle = self.node?;
        let (key, value, next) = self.tree.erase(handle);
        self.node = next;
        Some((key, value))
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CursorMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.key_value()).finish()
    }
}
