//! The iteration contract and everything that drives it.
//!
//! `Iterable` is deliberately tiny: pull the next element, or ask for the
//! terminal error. Every source, generator and adapter in this crate
//! implements it, so any of them can sit at any position of a pipeline.
//! The provided methods split into two groups:
//!
//! - **adapters** (`filter`, `map`) wrap the iterator in another `Iterable`
//!   and stay lazy — nothing is pulled until something downstream pulls;
//! - **consumers** (`for_each`, `fold`, `to_vec`, `to_channel`) take the
//!   iterator by value, drive it to exhaustion on the calling thread and
//!   surface its terminal error as a `Result`.

use crossbeam::channel::Sender;

use crate::adapters::{Filter, Map};
use crate::error::IterError;

/// A pull-based iterator: one element per call, `None` forever after the
/// end.
///
/// Contract invariants every implementation upholds:
///
/// - exhaustion is sticky: after `next` returns `None` once, it returns
///   `None` on every later call;
/// - `error` may be called at any time, and once it returns `Some` it keeps
///   returning the same error;
/// - a set error implies `next` returns `None`. The converse does not hold:
///   a cleanly finished iterator reports no error.
///
/// Instances are single-consumer. Sharing one across threads is not
/// supported; hand the data over through a channel instead.
pub trait Iterable {
    /// The element type this iterator produces.
    type Item;

    /// Pulls the next element, or `None` once the sequence has ended.
    fn next(&mut self) -> Option<Self::Item>;

    /// The terminal error, or `None` while the sequence is open or after a
    /// clean end.
    fn error(&self) -> Option<&IterError>;

    /// Keeps only the elements for which `predicate` holds.
    ///
    /// A single pull on the result may pull many upstream elements while
    /// the predicate keeps rejecting; this is the one adapter whose `next`
    /// is not a constant number of upstream pulls.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transforms every element with `transform`; the output element type
    /// may differ from the input's. Exactly one upstream pull per pull.
    fn map<B, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, transform)
    }

    /// Drives the iterator to exhaustion, invoking `f` on each element in
    /// pull order.
    fn for_each<F>(mut self, mut f: F) -> Result<(), IterError>
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while let Some(value) = self.next() {
            f(value);
        }
        finish(&self, ())
    }

    /// Left-folds the whole sequence into an accumulator.
    ///
    /// There is no short-circuit: an infinite iterator will not return.
    fn fold<A, F>(mut self, init: A, mut f: F) -> Result<A, IterError>
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        let mut acc = init;
        while let Some(value) = self.next() {
            acc = f(acc, value);
        }
        finish(&self, acc)
    }

    /// Materializes the remaining sequence into a `Vec`, in pull order.
    fn to_vec(mut self) -> Result<Vec<Self::Item>, IterError>
    where
        Self: Sized,
    {
        let mut values = Vec::new();
        while let Some(value) = self.next() {
            values.push(value);
        }
        finish(&self, values)
    }

    /// Sends every element onto `tx`, blocking whenever the channel is full.
    ///
    /// The sender is only borrowed: this call never disconnects the
    /// channel, so the caller decides when it closes and may feed the same
    /// channel from several iterators. If every receiver is gone the drive
    /// stops with [`IterError::Disconnected`]; an error on the iterator
    /// itself takes precedence over the failed send.
    fn to_channel(mut self, tx: &Sender<Self::Item>) -> Result<(), IterError>
    where
        Self: Sized,
    {
        while let Some(value) = self.next() {
            if tx.send(value).is_err() {
                return Err(self
                    .error()
                    .cloned()
                    .unwrap_or(IterError::Disconnected));
            }
        }
        finish(&self, ())
    }
}

/// Turns a drained iterator's terminal state into the consumer result.
fn finish<I: Iterable, T>(it: &I, value: T) -> Result<T, IterError> {
    match it.error() {
        Some(err) => Err(err.clone()),
        None => Ok(value),
    }
}
