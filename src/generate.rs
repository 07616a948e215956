//! Generators: iterators that make their elements up as they go.
//!
//! A [`Generator`] carries no backing collection, only the previously
//! produced value and a counter. Arithmetic sequences are the bundled
//! special case; anything else is a [`generate`] call away.

use crate::error::IterError;
use crate::iterable::Iterable;

/// Closure-driven iterator bounded by a fixed element count.
///
/// Each pull hands the closure the previously produced value (the seed on
/// the first pull), the 1-based number of the element being produced, and
/// the total bound, then stores the result as the new previous value.
pub struct Generator<T, F> {
    last: T,
    produced: u64,
    repeat: u64,
    generate: F,
}

/// Creates a generator that produces `repeat` elements from `generate`,
/// starting from `seed`.
///
/// The seed itself is never yielded; it is only the first "previous value"
/// the closure sees.
pub fn generate<T, F>(seed: T, repeat: u64, generate: F) -> Generator<T, F>
where
    T: Clone,
    F: FnMut(&T, u64, u64) -> T,
{
    Generator {
        last: seed,
        produced: 0,
        repeat,
        generate,
    }
}

/// The integers from `start` to `end` inclusive, ascending by one.
///
/// Empty when `end` is below `start`.
pub fn sequence(start: i64, end: i64) -> Generator<i64, impl FnMut(&i64, u64, u64) -> i64> {
    step_sequence(start, end, 1)
}

/// The integers from `start` toward `end` inclusive, advancing by `step`.
///
/// A negative step walks a descending range. The last element is the
/// furthest point reachable without passing `end`. Degenerate inputs — a
/// zero step, or a step pointing away from `end` — produce zero elements.
pub fn step_sequence(
    start: i64,
    end: i64,
    step: i64,
) -> Generator<i64, impl FnMut(&i64, u64, u64) -> i64> {
    let span = end - start;
    let count = if step == 0 {
        0
    } else if span == 0 {
        1
    } else if (span > 0) == (step > 0) {
        (span / step) as u64 + 1
    } else {
        0
    };
    generate(start - step, count, move |prev, _, _| prev + step)
}

impl<T, F> Iterable for Generator<T, F>
where
    T: Clone,
    F: FnMut(&T, u64, u64) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.produced >= self.repeat {
            return None;
        }
        self.produced += 1;
        let value = (self.generate)(&self.last, self.produced, self.repeat);
        self.last = value.clone();
        Some(value)
    }

    // Generators compute values locally; there is nothing that can fail.
    fn error(&self) -> Option<&IterError> {
        None
    }
}
