//! # pull-iter
//!
//! Lazy, pull-based iterators behind one small contract: [`Iterable`].
//! A sequence can come from an in-memory slice, the receiving end of a
//! channel, or a closure that invents it on the fly; downstream code never
//! has to care which.
//!
//! ## Building Blocks
//!
//! 1. **Contract** — [`Iterable`]: pull the next element, or read the
//!    terminal error once the sequence has ended abnormally.
//!
//! 2. **Sources** — [`from_slice`] / [`from_reverse_slice`] over an owned
//!    snapshot, [`from_channel`] over a crossbeam receiver.
//!
//! 3. **Generators** — [`sequence`] and [`step_sequence`] for inclusive
//!    arithmetic ranges, [`generate`] for anything a closure can produce
//!    from (previous value, 1-based count, total bound).
//!
//! 4. **Adapters** — [`Iterable::filter`] and [`Iterable::map`], each
//!    wrapping exactly one upstream iterator and buffering at most the one
//!    element in flight.
//!
//! 5. **Consumers** — [`Iterable::for_each`], [`Iterable::fold`],
//!    [`Iterable::to_vec`] and [`Iterable::to_channel`] drive a pipeline to
//!    exhaustion and hand back the terminal error as a `Result`.
//!
//! ## A Pipeline
//!
//! ```
//! use pull_iter::{sequence, Iterable};
//!
//! let odd_doubled = sequence(1, 10)
//!     .filter(|v| v % 2 != 0)
//!     .map(|v| v * 2)
//!     .to_vec()
//!     .unwrap();
//! assert_eq!(odd_doubled, vec![2, 6, 10, 14, 18]);
//! ```
//!
//! Everything is pulled on demand by the consumer at the end of the chain;
//! no adapter runs ahead of it. The only blocking points are a channel
//! source waiting for a value and a channel sink waiting for capacity.
//! Iterator instances are single-consumer and single-thread; the channel is
//! the intended way to move elements between threads.
//!
//! ## Running the Demos
//!
//! ```bash
//! cargo run --example d1_sources
//! cargo run --example d2_pipeline
//! cargo run --example d3_channels
//! cargo run --example d4_comparison
//! ```

pub mod adapters;
pub mod channel;
pub mod error;
pub mod generate;
pub mod iterable;
pub mod slice;

pub use adapters::{Filter, Map};
pub use channel::{from_channel, ChannelIterator};
pub use error::IterError;
pub use generate::{generate, sequence, step_sequence, Generator};
pub use iterable::Iterable;
pub use slice::{from_reverse_slice, from_slice, SliceIterator};
