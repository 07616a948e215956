//! Threaded round-trips through the channel source and the channel sink.

use std::thread;

use pull_iter::{from_channel, sequence, step_sequence, Iterable};

#[test]
fn test_producer_thread_into_channel_source() {
    let (tx, rx) = crossbeam::channel::unbounded();

    let producer = thread::spawn(move || {
        for i in 1..=10 {
            tx.send(i).unwrap();
        }
        // tx drops here; the iterator sees a clean end.
    });

    let values = from_channel(rx).to_vec().unwrap();
    assert_eq!(values, (1..=10).collect::<Vec<i32>>());
    producer.join().unwrap();
}

#[test]
fn test_channel_source_feeds_adapters() {
    let (tx, rx) = crossbeam::channel::unbounded();

    let producer = thread::spawn(move || {
        for i in 1..=10 {
            tx.send(i).unwrap();
        }
    });

    let odd_squares = from_channel(rx)
        .filter(|v| v % 2 != 0)
        .map(|v| v * v)
        .to_vec()
        .unwrap();

    assert_eq!(odd_squares, vec![1, 9, 25, 49, 81]);
    producer.join().unwrap();
}

#[test]
fn test_sink_thread_terminates_once_the_source_is_drained() {
    let (tx, rx) = crossbeam::channel::unbounded();

    let sink = thread::spawn(move || {
        let result = step_sequence(1, 10, 2).to_channel(&tx);
        // tx drops when this thread ends, closing the channel.
        result
    });

    let received: Vec<i64> = rx.iter().collect();
    assert_eq!(received, vec![1, 3, 5, 7, 9]);

    // The driving thread finished; the sink reported a clean run.
    sink.join().unwrap().unwrap();
}

#[test]
fn test_sink_blocks_on_a_bounded_channel_until_drained() {
    // Capacity 1 forces the sink to wait for the consumer on every element.
    let (tx, rx) = crossbeam::channel::bounded(1);

    let sink = thread::spawn(move || sequence(1, 100).to_channel(&tx));

    let received: Vec<i64> = rx.iter().collect();
    assert_eq!(received, (1..=100).collect::<Vec<i64>>());
    sink.join().unwrap().unwrap();
}

#[test]
fn test_round_trip_source_to_sink_to_source() {
    let (first_tx, first_rx) = crossbeam::channel::unbounded();
    let (second_tx, second_rx) = crossbeam::channel::unbounded();

    let producer = thread::spawn(move || {
        sequence(1, 5).to_channel(&first_tx).unwrap();
    });

    let relay = thread::spawn(move || {
        from_channel(first_rx)
            .map(|v| v * 10)
            .to_channel(&second_tx)
            .unwrap();
    });

    let values = from_channel(second_rx).to_vec().unwrap();
    assert_eq!(values, vec![10, 20, 30, 40, 50]);

    producer.join().unwrap();
    relay.join().unwrap();
}
