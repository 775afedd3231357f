use super::TreeSet;
use crate::TreeMap;

impl<T> TreeSet<T> {
    /// Creates an empty set whose underlying map is preallocated for
    /// `capacity` elements, so the first `capacity` insertions never grow
    /// the storage.
    ///
    /// `BTreeSet` exposes no capacity surface; the arena-backed layout is
    /// what makes preallocation meaningful here.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set = TreeSet::with_capacity(3);
    /// assert_eq!(set.capacity(), 3);
    ///
    /// set.extend([10, 20, 30]);
    /// assert_eq!(set.capacity(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TreeSet {
            map: TreeMap::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the set can hold before its storage
    /// grows.
    ///
    /// Slots freed by removal are recycled before the storage allocates, so
    /// capacity never shrinks while elements come and go.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set = TreeSet::with_capacity(2);
    /// set.insert('a');
    /// set.insert('b');
    /// set.remove(&'a');
    ///
    /// // The freed slot serves the next insertion.
    /// set.insert('c');
    /// assert_eq!(set.capacity(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }
}
