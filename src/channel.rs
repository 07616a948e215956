//! Iterator over the receiving end of a crossbeam channel.

use crossbeam::channel::Receiver;

use crate::error::IterError;
use crate::iterable::Iterable;

/// Iterator that pulls values from a channel as they arrive.
///
/// `next` blocks the calling thread until a value is available or every
/// sender has been dropped with the queue empty. Disconnection is the
/// channel's normal end-of-stream signal, not a failure, so it exhausts the
/// iterator cleanly. The `done` latch keeps exhaustion sticky without
/// touching the receiver again.
pub struct ChannelIterator<T> {
    receiver: Receiver<T>,
    done: bool,
}

/// Creates an iterator over `receiver`.
///
/// The channel itself is the only cross-thread handoff point in this crate;
/// its synchronization is the channel's concern, the iterator just pulls.
pub fn from_channel<T>(receiver: Receiver<T>) -> ChannelIterator<T> {
    ChannelIterator {
        receiver,
        done: false,
    }
}

impl<T> Iterable for ChannelIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        match self.receiver.recv() {
            Ok(value) => Some(value),
            Err(_) => {
                self.done = true;
                None
            }
        }
    }

    // Disconnection is a clean end, never an error.
    fn error(&self) -> Option<&IterError> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_receives_values_until_senders_are_gone() {
        let (tx, rx) = crossbeam::channel::unbounded();
        let producer = thread::spawn(move || {
            for i in 1..=5 {
                tx.send(i).unwrap();
            }
            // Dropping tx here disconnects the channel.
        });

        let values = from_channel(rx).to_vec().unwrap();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        producer.join().unwrap();
    }

    #[test]
    fn test_disconnected_empty_channel_is_exhausted() {
        let (tx, rx) = crossbeam::channel::unbounded::<i32>();
        drop(tx);

        let mut it = from_channel(rx);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert!(it.done);
    }

    #[test]
    fn test_drains_buffered_values_after_disconnect() {
        let (tx, rx) = crossbeam::channel::unbounded();
        tx.send(7).unwrap();
        tx.send(8).unwrap();
        drop(tx);

        let mut it = from_channel(rx);
        assert_eq!(it.next(), Some(7));
        assert_eq!(it.next(), Some(8));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_channel_iterator_never_errors() {
        let (tx, rx) = crossbeam::channel::unbounded::<i32>();
        drop(tx);

        let mut it = from_channel(rx);
        assert!(it.error().is_none());
        assert_eq!(it.next(), None);
        assert!(it.error().is_none());
    }
}
