//! Adapters that wrap one upstream iterator and reshape its stream.
//!
//! Both adapters own their upstream, buffer nothing beyond the single
//! element in flight, and forward the upstream's terminal error untouched.
//! They are normally built through [`Iterable::filter`] and
//! [`Iterable::map`] rather than named directly.

use crate::error::IterError;
use crate::iterable::Iterable;

/// Yields only the upstream elements for which the predicate holds.
pub struct Filter<I, P> {
    upstream: I,
    predicate: P,
}

impl<I, P> Filter<I, P>
where
    I: Iterable,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(upstream: I, predicate: P) -> Self {
        Filter {
            upstream,
            predicate,
        }
    }
}

impl<I, P> Iterable for Filter<I, P>
where
    I: Iterable,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    // Keeps pulling upstream until an element passes or upstream ends, so a
    // long run of rejected elements makes this single pull that long.
    fn next(&mut self) -> Option<I::Item> {
        while let Some(value) = self.upstream.next() {
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
        None
    }

    fn error(&self) -> Option<&IterError> {
        self.upstream.error()
    }
}

/// Applies a transform to every upstream element; the output element type
/// may differ from the upstream's.
pub struct Map<I, F> {
    upstream: I,
    transform: F,
}

impl<I, B, F> Map<I, F>
where
    I: Iterable,
    F: FnMut(I::Item) -> B,
{
    pub fn new(upstream: I, transform: F) -> Self {
        Map {
            upstream,
            transform,
        }
    }
}

impl<I, B, F> Iterable for Map<I, F>
where
    I: Iterable,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    // Exactly one upstream pull per pull; no lookahead.
    fn next(&mut self) -> Option<B> {
        self.upstream.next().map(&mut self.transform)
    }

    fn error(&self) -> Option<&IterError> {
        self.upstream.error()
    }
}
