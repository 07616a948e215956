//! The terminal error an iterator can carry.
//!
//! Running out of elements is not an error: a drained slice, a finished
//! generator and a disconnected channel source all end cleanly. An error is
//! reserved for a source that fails while elements should still be
//! available, and it is sticky: once set it never changes, and the iterator
//! never yields again.

use thiserror::Error;

/// Terminal failure attached to an iterator or returned by a consumer.
///
/// `Clone + PartialEq` so a sticky error can be handed back by value after a
/// consumer drains the iterator, and asserted on in tests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IterError {
    /// The underlying source failed mid-sequence, e.g. a backing resource
    /// that went away before the data did.
    #[error("upstream source failed: {0}")]
    Source(String),

    /// Every receiver of the sink channel was dropped before the sequence
    /// was fully delivered.
    #[error("channel disconnected before the sequence was drained")]
    Disconnected,
}
