//! [`Error`] enumerates the failure conditions reported by the containers.

use thiserror::Error;

/// Failure conditions reported by the containers.
///
/// Every kind signals a precondition violation rather than a transient fault; none are
/// retryable by the library itself. Callers are expected to distinguish the kinds by matching
/// on the variant, never by message text.
///
/// # Examples
///
/// ```
/// use lsq::{Error, Stack};
///
/// let mut stack: Stack<usize> = Stack::new();
///
/// assert_eq!(stack.pop(), Err(Error::EmptyStack));
/// ```
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// An index or destination-buffer argument violates the documented bound for the operation.
    #[error("index out of range")]
    IndexOutOfRange,

    /// Pop or peek was attempted on a stack with zero elements.
    #[error("stack is empty")]
    EmptyStack,

    /// Dequeue or peek was attempted on a queue with zero elements.
    #[error("queue is empty")]
    EmptyQueue,
}
