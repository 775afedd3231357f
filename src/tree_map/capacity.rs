use super::TreeMap;
use crate::raw::RawTree;

impl<K, V> TreeMap<K, V> {
    /// Creates an empty map with both backing arenas (nodes and values)
    /// preallocated for `capacity` entries, so the first `capacity`
    /// insertions grow neither buffer.
    ///
    /// `BTreeMap` exposes no capacity surface; the arena-backed layout is
    /// what makes preallocation meaningful here.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeMap;
    ///
    /// let mut map = TreeMap::with_capacity(4);
    /// assert_eq!(map.capacity(), 4);
    ///
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    /// assert_eq!(map.capacity(), 4);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TreeMap {
            raw: RawTree::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold before its node arena
    /// grows.
    ///
    /// Slots freed by removal are recycled before the arena allocates, so
    /// capacity never shrinks while entries come and go.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeMap;
    ///
    /// let mut map = TreeMap::with_capacity(4);
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    /// map.remove(&1);
    ///
    /// // The freed slot serves the next insertion.
    /// map.insert(3, "three");
    /// assert_eq!(map.capacity(), 4);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
