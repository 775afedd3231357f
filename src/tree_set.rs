//! An ordered set backed by an unbalanced binary search tree.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::RangeBounds;

use crate::TreeMap;
use crate::tree_map::{IntoKeys, Keys};

mod capacity;
mod cursor;

pub use cursor::{Cursor, CursorMut};

/// An ordered set based on an unbalanced binary search tree.
///
/// See [`TreeMap`]'s documentation for a detailed discussion of this
/// collection's performance benefits and drawbacks.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the [`Ord`] trait, changes while it is in the set. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `TreeSet` that observed the logic error and not result in undefined behavior. This could
/// include panics, incorrect results, aborts, memory leaks, and non-termination.
///
/// Iterators returned by [`TreeSet::iter`] and [`TreeSet::into_iter`] produce their items in
/// order, and take amortized constant time per item returned; a single step can cost O(depth).
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use sabi_tree::TreeSet;
///
/// // Type inference lets us omit an explicit type signature (which
/// // would be `TreeSet<&str>` in this example).
/// let mut books = TreeSet::new();
///
/// // Add some books.
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// // Check for a specific one.
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.",
///              books.len());
/// }
///
/// // Remove a book.
/// books.remove("The Odyssey");
///
/// // Iterate over everything.
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// A `TreeSet` with a known list of items can be initialized from an array:
///
/// ```
/// use sabi_tree::TreeSet;
///
/// let set = TreeSet::from([1, 2, 3]);
/// ```
pub struct TreeSet<T> {
    map: TreeMap<T, ()>,
}

/// An iterator over the items of a `TreeSet`.
///
/// This `struct` is created by the [`iter`] method on [`TreeSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use sabi_tree::TreeSet;
///
/// let set = TreeSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// ```
///
/// [`iter`]: TreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: Keys<'a, T, ()>,
}

/// An owning iterator over the items of a `TreeSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`TreeSet`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// # Examples
///
/// ```
/// use sabi_tree::TreeSet;
///
/// let set = TreeSet::from([1, 2, 3]);
/// let mut iter = set.into_iter();
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next_back(), Some(3));
/// assert_eq!(iter.next(), Some(2));
/// ```
///
/// [`into_iter`]: TreeSet#method.into_iter
pub struct IntoIter<T> {
    inner: IntoKeys<T, ()>,
}

impl<T> TreeSet<T> {
    /// Makes a new, empty `TreeSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    ///
    /// // entries can now be inserted into the empty set
    /// set.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> TreeSet<T> {
        TreeSet {
            map: TreeMap::new(),
        }
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut v = TreeSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let set = TreeSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(value)
    }

    /// Returns a reference to the element in the set, if any, that is equal to the value.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let set = TreeSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.map.get_key_value(value).map(|(k, ())| k)
    }

    /// Returns the first element in the set, if any.
    /// This is the minimum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// set.insert(2);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.map.first_key_value().map(|(k, ())| k)
    }

    /// Returns the last element in the set, if any.
    /// This is the maximum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// assert_eq!(set.last(), None);
    /// set.insert(1);
    /// assert_eq!(set.last(), Some(&1));
    /// set.insert(2);
    /// assert_eq!(set.last(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.map.last_key_value().map(|(k, ())| k)
    }

    /// Removes and returns the first element in the set.
    /// The first element is the minimum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// while let Some(n) = set.pop_first() {
    ///     assert!(set.iter().all(|&k| k > n));
    /// }
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn pop_first(&mut self) -> Option<T>
    where
        T: Ord,
    {
        self.map.pop_first().map(|(k, ())| k)
    }

    /// Removes and returns the last element in the set.
    /// The last element is the maximum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// while let Some(n) = set.pop_last() {
    ///     assert!(set.iter().all(|&k| k < n));
    /// }
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn pop_last(&mut self) -> Option<T>
    where
        T: Ord,
    {
        self.map.pop_last().map(|(k, ())| k)
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is
    ///   returned.
    /// - If the set already contained an equal value, `false` is returned, and
    ///   the entry is not updated.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        self.map.insert(value, ()).is_none()
    }

    /// If the set contains an element equal to the value, removes it from the
    /// set and drops it. Returns whether such an element was present.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.map.remove(value).is_some()
    }

    /// Removes and returns the element in the set, if any, that is equal to the value.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// set.insert(2);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.map.remove_entry(value).map(|(k, ())| k)
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` for which `f(&e)` returns `false`.
    /// The elements are visited in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set: TreeSet<i32> = (0..8).collect();
    /// // Keep only the elements with even-numbered values.
    /// set.retain(|&k| k % 2 == 0);
    /// assert!(set.into_iter().eq(vec![0, 2, 4, 6]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) to visit every element, plus O(depth) per removal.
    pub fn retain<F>(&mut self, mut f: F)
    where
        T: Ord,
        F: FnMut(&T) -> bool,
    {
        self.map.retain(|k, ()| f(k));
    }

    /// Removes every element that lies within `range`, returning the number of
    /// elements removed.
    ///
    /// The simplest way is to use the range syntax `min..max`, thus
    /// `remove_range(min..max)` will remove elements from min (inclusive) to
    /// max (exclusive). The range may also be entered as `(Bound<T>, Bound<T>)`,
    /// so for example `remove_range((Excluded(4), Included(10)))` will remove a
    /// left-exclusive, right-inclusive range from 4 to 10.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Panics if range `start == end` and both bounds are `Excluded`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut set = TreeSet::from([1, 2, 3, 4]);
    /// assert_eq!(set.remove_range(2..4), 2);
    /// assert!(set.into_iter().eq([1, 4]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth) to find the start of the range, plus O(depth) per element removed.
    pub fn remove_range<Q, R>(&mut self, range: R) -> usize
    where
        Q: ?Sized + Ord,
        T: Borrow<Q> + Ord,
        R: RangeBounds<Q>,
    {
        self.map.remove_range(range)
    }

    /// Returns a [`Cursor`] over the smallest element, or over the gap past
    /// the end if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let set = TreeSet::from([1, 2]);
    /// let mut cursor = set.cursor_front();
    /// assert_eq!(cursor.item(), Some(&1));
    /// cursor.move_next();
    /// assert_eq!(cursor.item(), Some(&2));
    /// cursor.move_next();
    /// assert_eq!(cursor.item(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor {
            inner: self.map.cursor_front(),
        }
    }

    /// Returns a [`Cursor`] over the largest element, or over the gap past
    /// the end if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let set = TreeSet::from([1, 2]);
    /// let mut cursor = set.cursor_back();
    /// assert_eq!(cursor.item(), Some(&2));
    /// cursor.move_prev();
    /// assert_eq!(cursor.item(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor {
            inner: self.map.cursor_back(),
        }
    }

    /// Returns a [`CursorMut`] over the smallest element, or over the gap
    /// past the end if the set is empty.
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            inner: self.map.cursor_front_mut(),
        }
    }

    /// Returns a [`CursorMut`] over the largest element, or over the gap
    /// past the end if the set is empty.
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            inner: self.map.cursor_back_mut(),
        }
    }

    /// Returns a [`Cursor`] over the element equal to the value, or over the
    /// gap past the end if no such element exists.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let set = TreeSet::from([1, 3]);
    ///
    /// let cursor = set.find_cursor(&3);
    /// assert_eq!(cursor.item(), Some(&3));
    ///
    /// let missing = set.find_cursor(&2);
    /// assert_eq!(missing.item(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn find_cursor<Q>(&self, value: &Q) -> Cursor<'_, T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        Cursor {
            inner: self.map.find_cursor(value),
        }
    }

    /// Returns a [`CursorMut`] over the element equal to the value, or over
    /// the gap past the end if no such element exists.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
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
    /// // The cursor lands on the element that followed the removed one.
    /// assert_eq!(cursor.item(), Some(&3));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth): O(log n) on average, O(n) worst case.
    pub fn find_cursor_mut<Q>(&mut self, value: &Q) -> CursorMut<'_, T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        CursorMut {
            inner: self.map.find_cursor_mut(value),
        }
    }

    /// Gets an iterator that visits the elements in the `TreeSet` in ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let set = TreeSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth) to position the iterator; a full traversal costs O(n).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.map.keys(),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut a = TreeSet::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1);
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let mut a = TreeSet::new();
    /// assert!(a.is_empty());
    /// a.insert(1);
    /// assert!(!a.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<T: Hash> Hash for TreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.map.hash(state);
    }
}

impl<T: PartialEq> PartialEq for TreeSet<T> {
    fn eq(&self, other: &TreeSet<T>) -> bool {
        self.map == other.map
    }
}

impl<T: Eq> Eq for TreeSet<T> {}

impl<T: PartialOrd> PartialOrd for TreeSet<T> {
    fn partial_cmp(&self, other: &TreeSet<T>) -> Option<Ordering> {
        self.map.partial_cmp(&other.map)
    }
}

impl<T: Ord> Ord for TreeSet<T> {
    fn cmp(&self, other: &TreeSet<T>) -> Ordering {
        self.map.cmp(&other.map)
    }
}

impl<T: Clone> Clone for TreeSet<T> {
    fn clone(&self) -> Self {
        TreeSet {
            map: self.map.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for TreeSet<T> {
    fn default() -> Self {
        TreeSet::new()
    }
}

impl<T: Ord> FromIterator<T> for TreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = TreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for TreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for TreeSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for TreeSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for TreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `TreeSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabi_tree::TreeSet;
    ///
    /// let set = TreeSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.map.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a TreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("inner", &self.inner).finish()
    }
}

impl<T> Default for Iter<'_, T> {
    /// Creates an empty `tree_set::Iter`.
    ///
    /// ```
    /// # use sabi_tree::tree_set;
    /// let iter: tree_set::Iter<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter {
            inner: Keys::default(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("inner", &self.inner).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `tree_set::IntoIter`.
    ///
    /// ```
    /// # use sabi_tree::tree_set;
    /// let iter: tree_set::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: IntoKeys::default(),
        }
    }
}
