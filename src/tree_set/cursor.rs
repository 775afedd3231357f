use core::fmt;

use crate::tree_map;

/// A cursor over an element of a `TreeSet`, movable in both directions.
///
/// A cursor either points at an element or sits past the end of the set. It
/// is created by the [`cursor_front`], [`cursor_back`], and [`find_cursor`]
/// methods on [`TreeSet`], and borrows the set immutably for its whole
/// lifetime, so the set cannot change underneath it.
///
/// Stepping costs O(depth) in the worst case (climbing out of a deep
/// subtree), but a sweep across the whole set touches every link at most
/// twice, so a full pass is O(n).
///
/// # Examples
///
/// ```
/// use sabi_tree::TreeSet;
///
/// let set = TreeSet::from([1, 2, 3]);
///
/// let mut cursor = set.find_cursor(&2);
/// assert_eq!(cursor.item(), Some(&2));
/// cursor.move_prev();
/// assert_eq!(cursor.item(), Some(&1));
/// ```
///
/// [`cursor_front`]: crate::TreeSet::cursor_front
/// [`cursor_back`]: crate::TreeSet::cursor_back
/// [`find_cursor`]: crate::TreeSet::find_cursor
/// [`TreeSet`]: crate::TreeSet
pub struct Cursor<'a, T> {
    pub(crate) inner: tree_map::Cursor<'a, T, ()>,
}

impl<'a, T> Cursor<'a, T> {
    /// Returns a reference to the current element, or `None` if the cursor
    /// is past the end.
    ///
    /// The returned reference borrows the set, not the cursor, so it stays
    /// usable after the cursor moves on.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn item(&self) -> Option<&'a T> {
        self.inner.key()
    }

    /// Moves the cursor to the next element in ascending order.
    ///
    /// Stepping off the largest element leaves the cursor past the end; a
    /// cursor past the end stays there.
    ///
    /// # Complexity
    ///
    /// O(depth) worst case; O(1) amortized over a full sweep.
    pub fn move_next(&mut self) {
        self.inner.move_next();
    }

    /// Moves the cursor to the previous element in ascending order.
    ///
    /// Stepping off the smallest element leaves the cursor past the end; a
    /// cursor past the end stays there.
    ///
    /// # Complexity
    ///
    /// O(depth) worst case; O(1) amortized over a full sweep.
    pub fn move_prev(&mut self) {
        self.inner.move_prev();
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    /// Two cursors are equal when they point at the same position of the
    /// same set. All past-the-end cursors of one set compare equal.
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.item()).finish()
    }
}

/// A cursor over an element of a `TreeSet` with editing powers.
///
/// Like [`Cursor`], a mutable cursor either points at an element or sits
/// past the end of the set. It is created by the [`cursor_front_mut`],
/// [`cursor_back_mut`], and [`find_cursor_mut`] methods on [`TreeSet`] and
/// borrows the set mutably, so it is the only handle into the set while it
/// lives.
///
/// On top of movement and read access, a mutable cursor can remove the
/// current element; removal leaves the cursor on a still-valid neighboring
/// position instead of invalidating it. Elements are never handed out by
/// mutable reference, since editing one in place could break the set's
/// ordering.
///
/// # Examples
///
/// ```
/// use sabi_tree::TreeSet;
///
/// let mut set = TreeSet::from([1, 2, 3]);
///
/// let mut cursor = set.cursor_front_mut();
/// cursor.move_next();
/// assert_eq!(cursor.remove_current(), Some(2));
/// assert_eq!(cursor.item(), Some(&3));
/// assert_eq!(set.len(), 2);
/// ```
///
/// [`cursor_front_mut`]: crate::TreeSet::cursor_front_mut
/// [`cursor_back_mut`]: crate::TreeSet::cursor_back_mut
/// [`find_cursor_mut`]: crate::TreeSet::find_cursor_mut
/// [`TreeSet`]: crate::TreeSet
pub struct CursorMut<'a, T> {
    pub(crate) inner: tree_map::CursorMut<'a, T, ()>,
}

impl<T> CursorMut<'_, T> {
    /// Returns a reference to the current element, or `None` if the cursor
    /// is past the end.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn item(&self) -> Option<&T> {
        self.inner.key()
    }

    /// Moves the cursor to the next element in ascending order.
    ///
    /// Stepping off the largest element leaves the cursor past the end; a
    /// cursor past the end stays there.
    ///
    /// # Complexity
    ///
    /// O(depth) worst case; O(1) amortized over a full sweep.
    pub fn move_next(&mut self) {
        self.inner.move_next();
    }

    /// Moves the cursor to the previous element in ascending order.
    ///
    /// Stepping off the smallest element leaves the cursor past the end; a
    /// cursor past the end stays there.
    ///
    /// # Complexity
    ///
    /// O(depth) worst case; O(1) amortized over a full sweep.
    pub fn move_prev(&mut self) {
        self.inner.move_prev();
    }

    /// Removes the current element and returns it, leaving the cursor on
    /// the position where the tree closed the gap. See
    /// [`tree_map::CursorMut::remove_current`] for how that position is
    /// chosen; the same caveat applies here, so the new position can hold an
    /// element *smaller* than the removed one.
    ///
    /// Returns `None`, without moving, if the cursor is past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set = TreeSet::from([1, 2, 3]);
    ///
    /// let mut cursor = set.find_cursor_mut(&2);
    /// assert_eq!(cursor.remove_current(), Some(2));
    /// assert_eq!(cursor.item(), Some(&3));
    ///
    /// // Past the end there is nothing to remove.
    /// let mut end = set.find_cursor_mut(&99);
    /// assert_eq!(end.remove_current(), None);
    /// ```
    ///
    /// [`tree_map::CursorMut::remove_current`]: crate::tree_map::CursorMut::remove_current
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn remove_current(&mut self) -> Option<T>
    where
        T: Ord,
    {
        self.inner.remove_current().map(|(item, ())| item)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.item()).finish()
    }
}
