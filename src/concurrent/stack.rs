//! [`ConcurrentStack`] is a lock-guarded last-in-first-out container.

use crate::error::Error;
use crate::stack::Stack;
use parking_lot::RwLock;
#[cfg(feature = "serde")]
use parking_lot::RwLockReadGuard;
use std::fmt::{self, Debug, Display};

/// [`ConcurrentStack`] is a lock-guarded last-in-first-out container.
///
/// [`ConcurrentStack`] offers the exact operation contracts of [`Stack`]; every operation
/// acquires the internal reader-writer lock exactly once, exclusively for
/// [`push`](Self::push) and [`pop`](Self::pop) and shared for the pure reads. Reads return
/// clones of elements, never references into the guarded storage.
///
/// # Examples
///
/// ```
/// use lsq::ConcurrentStack;
/// use std::sync::Arc;
/// use std::thread;
///
/// let stack = Arc::new(ConcurrentStack::new());
/// let writers: Vec<_> = (0..4)
///     .map(|_| {
///         let stack = stack.clone();
///         thread::spawn(move || {
///             for i in 0..16 {
///                 stack.push(i);
///             }
///         })
///     })
///     .collect();
///
/// for writer in writers {
///     writer.join().unwrap();
/// }
///
/// assert_eq!(stack.len(), 64);
/// ```
pub struct ConcurrentStack<T> {
    inner: RwLock<Stack<T>>,
}

impl<T> ConcurrentStack<T> {
    /// Creates an empty [`ConcurrentStack`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentStack;
    ///
    /// let stack: ConcurrentStack<usize> = ConcurrentStack::new();
    ///
    /// assert!(stack.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> ConcurrentStack<T> {
        ConcurrentStack {
            inner: RwLock::new(Stack::new()),
        }
    }

    /// Pushes an element onto the top of the [`ConcurrentStack`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentStack;
    ///
    /// let stack: ConcurrentStack<usize> = ConcurrentStack::new();
    ///
    /// stack.push(11);
    ///
    /// assert_eq!(stack.len(), 1);
    /// ```
    #[inline]
    pub fn push(&self, item: T) {
        self.inner.write().push(item);
    }

    /// Removes and returns the element at the top of the [`ConcurrentStack`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if the [`ConcurrentStack`] has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::{ConcurrentStack, Error};
    ///
    /// let stack: ConcurrentStack<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(stack.pop(), Ok(3));
    /// assert_eq!(stack.pop(), Ok(2));
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert_eq!(stack.pop(), Err(Error::EmptyStack));
    /// ```
    #[inline]
    pub fn pop(&self) -> Result<T, Error> {
        self.inner.write().pop()
    }

    /// Returns `true` if the [`ConcurrentStack`] contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentStack;
    ///
    /// let stack: ConcurrentStack<usize> = ConcurrentStack::new();
    ///
    /// assert!(stack.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns the number of elements in the [`ConcurrentStack`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentStack;
    ///
    /// let stack: ConcurrentStack<usize> = [1, 2].into_iter().collect();
    ///
    /// assert_eq!(stack.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns the wrapped [`Stack`], consuming the [`ConcurrentStack`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentStack;
    ///
    /// let stack: ConcurrentStack<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(stack.into_inner().pop(), Ok(3));
    /// ```
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Stack<T> {
        self.inner.into_inner()
    }

    #[cfg(feature = "serde")]
    pub(crate) fn lock_shared(&self) -> RwLockReadGuard<'_, Stack<T>> {
        self.inner.read()
    }
}

impl<T: Clone> ConcurrentStack<T> {
    /// Returns a clone of the element at the top of the [`ConcurrentStack`] without removing
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if the [`ConcurrentStack`] has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::{ConcurrentStack, Error};
    ///
    /// let stack: ConcurrentStack<usize> = ConcurrentStack::new();
    ///
    /// assert_eq!(stack.peek(), Err(Error::EmptyStack));
    ///
    /// stack.push(11);
    ///
    /// assert_eq!(stack.peek(), Ok(11));
    /// assert_eq!(stack.len(), 1);
    /// ```
    #[inline]
    pub fn peek(&self) -> Result<T, Error> {
        self.inner.read().peek().cloned()
    }
}

impl<T: Clone> Clone for ConcurrentStack<T> {
    #[inline]
    fn clone(&self) -> Self {
        ConcurrentStack {
            inner: RwLock::new(self.inner.read().clone()),
        }
    }
}

impl<T: Debug> Debug for ConcurrentStack<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.inner.read(), f)
    }
}

impl<T> Default for ConcurrentStack<T> {
    #[inline]
    fn default() -> Self {
        ConcurrentStack {
            inner: RwLock::new(Stack::default()),
        }
    }
}

/// Renders a snapshot of the sequence as `[e1 e2 e3]` in storage order, bottom to top.
impl<T: Display> Display for ConcurrentStack<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.inner.read(), f)
    }
}

impl<T> From<Stack<T>> for ConcurrentStack<T> {
    /// Wraps an existing [`Stack`] without copying its elements.
    #[inline]
    fn from(stack: Stack<T>) -> Self {
        ConcurrentStack {
            inner: RwLock::new(stack),
        }
    }
}

impl<T> FromIterator<T> for ConcurrentStack<T> {
    /// Creates a [`ConcurrentStack`] holding the iterated items in given order; the last
    /// item becomes the top.
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ConcurrentStack {
            inner: RwLock::new(Stack::from_iter(iter)),
        }
    }
}

/// Compares element snapshots with native equality.
impl<T: PartialEq> PartialEq for ConcurrentStack<T> {
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

impl<T: Eq> Eq for ConcurrentStack<T> {}
