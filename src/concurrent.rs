//! Lock-guarded variants of the plain containers.
//!
//! Every operation of a concurrent container acquires its reader-writer lock, exclusively
//! for mutation and shared for pure reads, and delegates to the wrapped plain container, so
//! the operation contracts are identical to the single-threaded variants. Reads return
//! clones of elements, never references into the guarded storage.

mod list;
mod queue;
mod stack;

pub use list::ConcurrentList;
pub use queue::ConcurrentQueue;
pub use stack::ConcurrentStack;
