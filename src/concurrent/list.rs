//! [`ConcurrentList`] is a lock-guarded growable ordered sequence.

use crate::comparer::{DefaultEqualityComparer, EqualityComparer};
use crate::error::Error;
use crate::list::List;
use parking_lot::RwLock;
#[cfg(feature = "serde")]
use parking_lot::RwLockReadGuard;
use std::fmt::{self, Debug, Display};

/// [`ConcurrentList`] is a lock-guarded growable ordered sequence.
///
/// [`ConcurrentList`] offers the exact operation contracts of [`List`]; every operation
/// acquires the internal reader-writer lock exactly once, exclusively for mutation and
/// shared for pure reads. Reads return clones of elements, never references into the
/// guarded storage.
///
/// # Examples
///
/// ```
/// use lsq::ConcurrentList;
/// use std::sync::Arc;
/// use std::thread;
///
/// let list = Arc::new(ConcurrentList::new());
/// let writers: Vec<_> = (0..4)
///     .map(|_| {
///         let list = list.clone();
///         thread::spawn(move || {
///             for i in 0..16 {
///                 list.push(i);
///             }
///         })
///     })
///     .collect();
///
/// for writer in writers {
///     writer.join().unwrap();
/// }
///
/// assert_eq!(list.len(), 64);
/// ```
pub struct ConcurrentList<T, E = DefaultEqualityComparer>
where
    E: EqualityComparer<T>,
{
    inner: RwLock<List<T, E>>,
}

impl<T: PartialEq> ConcurrentList<T> {
    /// Creates an empty [`ConcurrentList`] using the [`DefaultEqualityComparer`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list: ConcurrentList<usize> = ConcurrentList::new();
    ///
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> ConcurrentList<T> {
        ConcurrentList {
            inner: RwLock::new(List::new()),
        }
    }
}

impl<T, E> ConcurrentList<T, E>
where
    E: EqualityComparer<T>,
{
    /// Creates an empty [`ConcurrentList`] using the given [`EqualityComparer`] for value
    /// lookups.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list = ConcurrentList::with_comparer(|lhs: &String, rhs: &String| {
    ///     lhs.eq_ignore_ascii_case(rhs)
    /// });
    ///
    /// list.push("Cat".to_string());
    ///
    /// assert!(list.contains(&"cAT".to_string()));
    /// ```
    #[inline]
    pub fn with_comparer(comparer: E) -> ConcurrentList<T, E> {
        ConcurrentList {
            inner: RwLock::new(List::with_comparer(comparer)),
        }
    }

    /// Appends an element to the end of the [`ConcurrentList`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list: ConcurrentList<usize> = ConcurrentList::new();
    ///
    /// list.push(11);
    ///
    /// assert_eq!(list.get(0), Ok(11));
    /// ```
    #[inline]
    pub fn push(&self, item: T) {
        self.inner.write().push(item);
    }

    /// Appends all items in the iterator to the end of the [`ConcurrentList`], in order,
    /// under a single exclusive lock acquisition.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list: ConcurrentList<usize> = ConcurrentList::new();
    ///
    /// list.extend([1, 2, 3]);
    ///
    /// assert_eq!(list.to_string(), "[1 2 3]");
    /// ```
    #[inline]
    pub fn extend<I: IntoIterator<Item = T>>(&self, iter: I) {
        self.inner.write().extend(iter);
    }

    /// Inserts an element at the given index, shifting subsequent elements one position
    /// right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > len`; the sequence is left unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::{ConcurrentList, Error};
    ///
    /// let list: ConcurrentList<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.insert(1, 4), Ok(()));
    /// assert_eq!(list.to_string(), "[1 4 2 3]");
    /// assert_eq!(list.insert(5, 7), Err(Error::IndexOutOfRange));
    /// ```
    #[inline]
    pub fn insert(&self, index: usize, item: T) -> Result<(), Error> {
        self.inner.write().insert(index, item)
    }

    /// Removes the first element the [`EqualityComparer`] reports equal to `item`.
    ///
    /// Returns `true` if an element was removed, and `false` if no element matched; a failure
    /// of the underlying removal is also reported as `false`, never as an error kind. The
    /// scan and the removal run under a single exclusive lock acquisition.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list: ConcurrentList<usize> = [1, 2, 1].into_iter().collect();
    ///
    /// assert!(list.remove(&1));
    /// assert_eq!(list.to_string(), "[2 1]");
    /// assert!(!list.remove(&7));
    /// ```
    #[inline]
    pub fn remove(&self, item: &T) -> bool {
        self.inner.write().remove(item)
    }

    /// Removes and returns the element at the given index, shifting subsequent elements one
    /// position left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`; the sequence is left unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::{ConcurrentList, Error};
    ///
    /// let list: ConcurrentList<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.remove_at(1), Ok(2));
    /// assert_eq!(list.remove_at(2), Err(Error::IndexOutOfRange));
    /// ```
    #[inline]
    pub fn remove_at(&self, index: usize) -> Result<T, Error> {
        self.inner.write().remove_at(index)
    }

    /// Removes all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list: ConcurrentList<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Returns `true` if the [`EqualityComparer`] reports any element equal to `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list: ConcurrentList<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&7));
    /// ```
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.inner.read().contains(item)
    }

    /// Returns the index of the first element the [`EqualityComparer`] reports equal to
    /// `item`, or `None` if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list: ConcurrentList<usize> = [1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(list.index_of(&1), Some(0));
    /// assert_eq!(list.index_of(&7), None);
    /// ```
    #[inline]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.inner.read().index_of(item)
    }

    /// Returns the index of the last element the [`EqualityComparer`] reports equal to
    /// `item`, or `None` if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list: ConcurrentList<usize> = [1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(list.last_index_of(&1), Some(2));
    /// ```
    #[inline]
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.inner.read().last_index_of(item)
    }

    /// Replaces the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`; the sequence is left unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::{ConcurrentList, Error};
    ///
    /// let list: ConcurrentList<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.set(1, 4), Ok(()));
    /// assert_eq!(list.to_string(), "[1 4 3]");
    /// assert_eq!(list.set(3, 7), Err(Error::IndexOutOfRange));
    /// ```
    #[inline]
    pub fn set(&self, index: usize, item: T) -> Result<(), Error> {
        self.inner.write().set(index, item)
    }

    /// Returns the number of elements in the [`ConcurrentList`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list: ConcurrentList<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the [`ConcurrentList`] contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list: ConcurrentList<usize> = ConcurrentList::new();
    ///
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns the wrapped [`List`], consuming the [`ConcurrentList`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list: ConcurrentList<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.into_inner().to_string(), "[1 2 3]");
    /// ```
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> List<T, E> {
        self.inner.into_inner()
    }

    #[cfg(feature = "serde")]
    pub(crate) fn lock_shared(&self) -> RwLockReadGuard<'_, List<T, E>> {
        self.inner.read()
    }
}

impl<T, E> ConcurrentList<T, E>
where
    T: Clone,
    E: EqualityComparer<T>,
{
    /// Returns a clone of the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::{ConcurrentList, Error};
    ///
    /// let list: ConcurrentList<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.get(2), Ok(3));
    /// assert_eq!(list.get(3), Err(Error::IndexOutOfRange));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, Error> {
        self.inner.read().get(index).cloned()
    }

    /// Clones all elements into `dst` starting at `offset`, without resizing `dst`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] under the same bounds as [`List::copy_to`];
    /// `dst` is left unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentList;
    ///
    /// let list: ConcurrentList<usize> = [1, 2, 3].into_iter().collect();
    /// let mut dst = [0; 4];
    ///
    /// assert_eq!(list.copy_to(&mut dst, 0), Ok(()));
    /// assert_eq!(dst, [1, 2, 3, 0]);
    /// ```
    #[inline]
    pub fn copy_to(&self, dst: &mut [T], offset: usize) -> Result<(), Error> {
        self.inner.read().copy_to(dst, offset)
    }
}

impl<T, E> Clone for ConcurrentList<T, E>
where
    T: Clone,
    E: EqualityComparer<T> + Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        ConcurrentList {
            inner: RwLock::new(self.inner.read().clone()),
        }
    }
}

impl<T: Debug, E> Debug for ConcurrentList<T, E>
where
    E: EqualityComparer<T>,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.inner.read(), f)
    }
}

impl<T, E> Default for ConcurrentList<T, E>
where
    E: EqualityComparer<T> + Default,
{
    #[inline]
    fn default() -> Self {
        ConcurrentList {
            inner: RwLock::new(List::default()),
        }
    }
}

/// Renders a snapshot of the sequence as `[e1 e2 e3]` in index order.
impl<T: Display, E> Display for ConcurrentList<T, E>
where
    E: EqualityComparer<T>,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.inner.read(), f)
    }
}

impl<T, E> From<List<T, E>> for ConcurrentList<T, E>
where
    E: EqualityComparer<T>,
{
    /// Wraps an existing [`List`] without copying its elements.
    #[inline]
    fn from(list: List<T, E>) -> Self {
        ConcurrentList {
            inner: RwLock::new(list),
        }
    }
}

impl<T: PartialEq> FromIterator<T> for ConcurrentList<T> {
    /// Creates a [`ConcurrentList`] holding the iterated items in given order, using the
    /// [`DefaultEqualityComparer`].
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ConcurrentList {
            inner: RwLock::new(List::from_iter(iter)),
        }
    }
}

/// Compares element snapshots with native equality; the comparers are not consulted.
impl<T: PartialEq, E> PartialEq for ConcurrentList<T, E>
where
    E: EqualityComparer<T>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        let lhs = self.inner.read();
        let rhs = other.inner.read();
        *lhs == *rhs
    }
}

impl<T: Eq, E> Eq for ConcurrentList<T, E> where E: EqualityComparer<T> {}
