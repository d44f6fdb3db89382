//! [`ConcurrentQueue`] is a lock-guarded first-in-first-out container.

use crate::error::Error;
use crate::queue::Queue;
use parking_lot::RwLock;
#[cfg(feature = "serde")]
use parking_lot::RwLockReadGuard;
use std::fmt::{self, Debug, Display};

/// [`ConcurrentQueue`] is a lock-guarded first-in-first-out container.
///
/// [`ConcurrentQueue`] offers the exact operation contracts of [`Queue`]; every operation
/// acquires the internal reader-writer lock exactly once, exclusively for
/// [`enqueue`](Self::enqueue), [`dequeue`](Self::dequeue), and [`clear`](Self::clear) and
/// shared for the pure reads. Reads return clones of elements, never references into the
/// guarded storage.
///
/// # Examples
///
/// ```
/// use lsq::ConcurrentQueue;
/// use std::sync::Arc;
/// use std::thread;
///
/// let queue = Arc::new(ConcurrentQueue::new());
/// let writers: Vec<_> = (0..4)
///     .map(|_| {
///         let queue = queue.clone();
///         thread::spawn(move || {
///             for i in 0..16 {
///                 queue.enqueue(i);
///             }
///         })
///     })
///     .collect();
///
/// for writer in writers {
///     writer.join().unwrap();
/// }
///
/// assert_eq!(queue.len(), 64);
/// ```
pub struct ConcurrentQueue<T> {
    inner: RwLock<Queue<T>>,
}

impl<T> ConcurrentQueue<T> {
    /// Creates an empty [`ConcurrentQueue`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentQueue;
    ///
    /// let queue: ConcurrentQueue<usize> = ConcurrentQueue::new();
    ///
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> ConcurrentQueue<T> {
        ConcurrentQueue {
            inner: RwLock::new(Queue::new()),
        }
    }

    /// Appends an element to the back of the [`ConcurrentQueue`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentQueue;
    ///
    /// let queue: ConcurrentQueue<usize> = ConcurrentQueue::new();
    ///
    /// queue.enqueue(11);
    ///
    /// assert_eq!(queue.len(), 1);
    /// ```
    #[inline]
    pub fn enqueue(&self, item: T) {
        self.inner.write().enqueue(item);
    }

    /// Removes and returns the element at the front of the [`ConcurrentQueue`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the [`ConcurrentQueue`] has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::{ConcurrentQueue, Error};
    ///
    /// let queue: ConcurrentQueue<&str> = ["a", "b", "c"].into_iter().collect();
    ///
    /// assert_eq!(queue.dequeue(), Ok("a"));
    /// assert_eq!(queue.dequeue(), Ok("b"));
    /// assert_eq!(queue.dequeue(), Ok("c"));
    /// assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
    /// ```
    #[inline]
    pub fn dequeue(&self) -> Result<T, Error> {
        self.inner.write().dequeue()
    }

    /// Removes all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentQueue;
    ///
    /// let queue: ConcurrentQueue<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// queue.clear();
    ///
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Returns `true` if the [`ConcurrentQueue`] contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentQueue;
    ///
    /// let queue: ConcurrentQueue<usize> = ConcurrentQueue::new();
    ///
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns the number of elements in the [`ConcurrentQueue`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentQueue;
    ///
    /// let queue: ConcurrentQueue<usize> = [1, 2].into_iter().collect();
    ///
    /// assert_eq!(queue.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns the wrapped [`Queue`], consuming the [`ConcurrentQueue`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentQueue;
    ///
    /// let queue: ConcurrentQueue<usize> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(queue.into_inner().dequeue(), Ok(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Queue<T> {
        self.inner.into_inner()
    }

    #[cfg(feature = "serde")]
    pub(crate) fn lock_shared(&self) -> RwLockReadGuard<'_, Queue<T>> {
        self.inner.read()
    }
}

impl<T: Clone> ConcurrentQueue<T> {
    /// Returns a clone of the element at the front of the [`ConcurrentQueue`] without
    /// removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the [`ConcurrentQueue`] has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::{ConcurrentQueue, Error};
    ///
    /// let queue: ConcurrentQueue<usize> = ConcurrentQueue::new();
    ///
    /// assert_eq!(queue.peek(), Err(Error::EmptyQueue));
    ///
    /// queue.enqueue(11);
    ///
    /// assert_eq!(queue.peek(), Ok(11));
    /// assert_eq!(queue.len(), 1);
    /// ```
    #[inline]
    pub fn peek(&self) -> Result<T, Error> {
        self.inner.read().peek().cloned()
    }

    /// Clones all elements into `dst` starting at `offset`, front first, without resizing
    /// `dst`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] under the same bounds as [`Queue::copy_to`];
    /// `dst` is left unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsq::ConcurrentQueue;
    ///
    /// let queue: ConcurrentQueue<usize> = [1, 2, 3].into_iter().collect();
    /// let mut dst = [0; 4];
    ///
    /// assert_eq!(queue.copy_to(&mut dst, 0), Ok(()));
    /// assert_eq!(dst, [1, 2, 3, 0]);
    /// ```
    #[inline]
    pub fn copy_to(&self, dst: &mut [T], offset: usize) -> Result<(), Error> {
        self.inner.read().copy_to(dst, offset)
    }
}

impl<T: Clone> Clone for ConcurrentQueue<T> {
    #[inline]
    fn clone(&self) -> Self {
        ConcurrentQueue {
            inner: RwLock::new(self.inner.read().clone()),
        }
    }
}

impl<T: Debug> Debug for ConcurrentQueue<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.inner.read(), f)
    }
}

impl<T> Default for ConcurrentQueue<T> {
    #[inline]
    fn default() -> Self {
        ConcurrentQueue {
            inner: RwLock::new(Queue::default()),
        }
    }
}

/// Renders a snapshot of the sequence as `[e1 e2 e3]` in storage order, front to back.
impl<T: Display> Display for ConcurrentQueue<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.inner.read(), f)
    }
}

impl<T> From<Queue<T>> for ConcurrentQueue<T> {
    /// Wraps an existing [`Queue`] without copying its elements.
    #[inline]
    fn from(queue: Queue<T>) -> Self {
        ConcurrentQueue {
            inner: RwLock::new(queue),
        }
    }
}

impl<T> FromIterator<T> for ConcurrentQueue<T> {
    /// Creates a [`ConcurrentQueue`] holding the iterated items in given order; the first
    /// item becomes the front.
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ConcurrentQueue {
            inner: RwLock::new(Queue::from_iter(iter)),
        }
    }
}

/// Compares element snapshots with native equality.
impl<T: PartialEq> PartialEq for ConcurrentQueue<T> {
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

impl<T: Eq> Eq for ConcurrentQueue<T> {}
