//! [`List`] is a growable ordered sequence with index-based and value-based access.

use super::comparer::{DefaultEqualityComparer, EqualityComparer};
use super::error::Error;
use std::fmt::{self, Debug, Display};

/// [`List`] is a growable ordered sequence with index-based and value-based access.
///
/// Elements keep their insertion/index order; [`remove`](Self::remove),
/// [`remove_at`](Self::remove_at), and [`insert`](Self::insert) shift subsequent elements.
/// Value-based lookups go through the [`EqualityComparer`] fixed at construction, which
/// defaults to native [`PartialEq`] equality.
///
/// [`List`] is not thread-safe; use [`ConcurrentList`](crate::ConcurrentList) when the
/// sequence is shared between threads without external synchronization.
#[derive(Clone)]
pub struct List<T, E = DefaultEqualityComparer>
where
    E: EqualityComparer<T>,
{
    items: Vec<T>,
    comparer: E,
}

impl<T: PartialEq> List<T> {
    /// Creates an empty [`List`] using the [`DefaultEqualityComparer`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::List;
    ///
    /// let list: List<usize> = List::new();
    ///
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> List<T> {
        List {
            items: Vec::new(),
            comparer: DefaultEqualityComparer,
        }
    }

    /// Creates an empty [`List`] with the specified capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::List;
    ///
    /// let list: List<usize> = List::with_capacity(64);
    ///
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> List<T> {
        List {
            items: Vec::with_capacity(capacity),
            comparer: DefaultEqualityComparer,
        }
    }
}

impl<T, E> List<T, E>
where
    E: EqualityComparer<T>,
{
    /// Creates an empty [`List`] using the given [`EqualityComparer`] for value lookups.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::List;
    ///
    /// let mut list = List::with_comparer(|lhs: &String, rhs: &String| {
    ///     lhs.eq_ignore_ascii_case(rhs)
    /// });
    ///
    /// list.push("Cat".to_string());
    ///
    /// assert!(list.contains(&"cAT".to_string()));
    /// ```
    #[inline]
    pub fn with_comparer(comparer: E) -> List<T, E> {
        List {
            items: Vec::new(),
            comparer,
        }
    }

    /// Appends an element to the end of the [`List`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::List;
    ///
    /// let mut list: List<usize> = List::new();
    ///
    /// list.push(11);
    ///
    /// assert_eq!(list.get(0), Ok(&11));
    /// ```
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Inserts an element at the given index, shifting subsequent elements one position right.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > len`; the sequence is left unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::{Error, List};
    ///
    /// let mut list: List<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.insert(1, 4), Ok(()));
    /// assert_eq!(list.to_string(), "[1 4 2 3]");
    /// assert_eq!(list.insert(5, 7), Err(Error::IndexOutOfRange));
    /// ```
    #[inline]
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), Error> {
        if index > self.items.len() {
            return Err(Error::IndexOutOfRange);
        }
        self.items.insert(index, item);
        Ok(())
    }

    /// Removes the first element the [`EqualityComparer`] reports equal to `item`.
    ///
    /// Returns `true` if an element was removed, and `false` if no element matched; a failure
    /// of the underlying removal is also reported as `false`, never as an error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::List;
    ///
    /// let mut list: List<usize> = [1, 2, 1].into_iter().collect();
    ///
    /// assert!(list.remove(&1));
    /// assert_eq!(list.to_string(), "[2 1]");
    /// assert!(!list.remove(&7));
    /// ```
    #[inline]
    pub fn remove(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
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
    /// use lsq::{Error, List};
    ///
    /// let mut list: List<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.remove_at(1), Ok(2));
    /// assert_eq!(list.to_string(), "[1 3]");
    /// assert_eq!(list.remove_at(2), Err(Error::IndexOutOfRange));
    /// ```
    #[inline]
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfRange);
        }
        Ok(self.items.remove(index))
    }

    /// Removes all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::List;
    ///
    /// let mut list: List<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns `true` if the [`EqualityComparer`] reports any element equal to `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::List;
    ///
    /// let list: List<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&7));
    /// ```
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Returns the index of the first element the [`EqualityComparer`] reports equal to
    /// `item`, or `None` if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::List;
    ///
    /// let list: List<usize> = [1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(list.index_of(&1), Some(0));
    /// assert_eq!(list.index_of(&7), None);
    /// ```
    #[inline]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|v| self.comparer.equivalent(v, item))
    }

    /// Returns the index of the last element the [`EqualityComparer`] reports equal to
    /// `item`, or `None` if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::List;
    ///
    /// let list: List<usize> = [1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(list.last_index_of(&1), Some(2));
    /// assert_eq!(list.last_index_of(&7), None);
    /// ```
    #[inline]
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().rposition(|v| self.comparer.equivalent(v, item))
    }

    /// Returns a reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::{Error, List};
    ///
    /// let list: List<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.get(2), Ok(&3));
    /// assert_eq!(list.get(3), Err(Error::IndexOutOfRange));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.items.get(index).ok_or(Error::IndexOutOfRange)
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
    /// use lsq::{Error, List};
    ///
    /// let mut list: List<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.set(1, 4), Ok(()));
    /// assert_eq!(list.to_string(), "[1 4 3]");
    /// assert_eq!(list.set(3, 7), Err(Error::IndexOutOfRange));
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize, item: T) -> Result<(), Error> {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange),
        }
    }

    /// Returns the number of elements in the [`List`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::List;
    ///
    /// let list: List<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the [`List`] contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::List;
    ///
    /// let list: List<usize> = List::new();
    ///
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(feature = "serde")]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T, E> List<T, E>
where
    T: Clone,
    E: EqualityComparer<T>,
{
    /// Clones all elements into `dst` starting at `offset`, without resizing `dst`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `offset >= dst.len()`, even when the [`List`] is
    /// empty, or if the remaining capacity `dst.len() - offset` cannot hold all elements;
    /// `dst` is left unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::{Error, List};
    ///
    /// let list: List<usize> = [1, 2, 3].into_iter().collect();
    /// let mut dst = [0; 5];
    ///
    /// assert_eq!(list.copy_to(&mut dst, 1), Ok(()));
    /// assert_eq!(dst, [0, 1, 2, 3, 0]);
    /// assert_eq!(list.copy_to(&mut dst, 3), Err(Error::IndexOutOfRange));
    /// ```
    #[inline]
    pub fn copy_to(&self, dst: &mut [T], offset: usize) -> Result<(), Error> {
        if offset >= dst.len() {
            return Err(Error::IndexOutOfRange);
        }
        if offset + self.items.len() > dst.len() {
            return Err(Error::IndexOutOfRange);
        }
        dst[offset..offset + self.items.len()].clone_from_slice(&self.items);
        Ok(())
    }
}

impl<T: Debug, E> Debug for List<T, E>
where
    E: EqualityComparer<T>,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T, E> Default for List<T, E>
where
    E: EqualityComparer<T> + Default,
{
    #[inline]
    fn default() -> Self {
        List {
            items: Vec::new(),
            comparer: E::default(),
        }
    }
}

/// Renders the sequence as `[e1 e2 e3]` in index order.
impl<T: Display, E> Display for List<T, E>
where
    E: EqualityComparer<T>,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt::write_sequence(f, &self.items)
    }
}

impl<T, E> Extend<T> for List<T, E>
where
    E: EqualityComparer<T>,
{
    /// Appends all items in the iterator to the end of the [`List`], in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::List;
    ///
    /// let mut list: List<usize> = List::new();
    ///
    /// list.extend([1, 2, 3]);
    ///
    /// assert_eq!(list.to_string(), "[1 2 3]");
    /// ```
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: PartialEq> FromIterator<T> for List<T> {
    /// Creates a [`List`] holding the iterated items in given order, using the
    /// [`DefaultEqualityComparer`].
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List {
            items: iter.into_iter().collect(),
            comparer: DefaultEqualityComparer,
        }
    }
}

/// Compares element sequences with native equality; the comparers are not consulted.
impl<T: PartialEq, E> PartialEq for List<T, E>
where
    E: EqualityComparer<T>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, E> Eq for List<T, E> where E: EqualityComparer<T> {}
