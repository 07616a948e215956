//! Channel Source and Channel Sink
//! Moving a sequence between threads through crossbeam channels
//!
//! Run with: cargo run --example d3_channels

use std::thread;

use pull_iter::{from_channel, sequence, step_sequence, Iterable};

fn channel_as_source() {
    let (tx, rx) = crossbeam::channel::unbounded();

    // A producer thread feeds the channel, then drops the sender. The
    // iterator treats the disconnect as a clean end of the sequence.
    let producer = thread::spawn(move || {
        for i in 1..=10 {
            tx.send(i).unwrap();
        }
    });

    let values = from_channel(rx).to_vec().unwrap();
    println!("received from producer: {:?}", values);
    producer.join().unwrap();
}

fn channel_as_sink() {
    // Capacity 2: the sink blocks whenever it runs ahead of the consumer.
    let (tx, rx) = crossbeam::channel::bounded(2);

    let sink = thread::spawn(move || {
        step_sequence(1, 10, 2).to_channel(&tx).unwrap();
        // The sender drops when this thread ends; that closes the channel.
    });

    for value in rx.iter() {
        println!("drained: {}", value);
    }
    sink.join().unwrap();
}

fn pipeline_between_threads() {
    let (tx, rx) = crossbeam::channel::unbounded();

    let producer = thread::spawn(move || {
        sequence(1, 20).to_channel(&tx).unwrap();
    });

    let odd_squares = from_channel(rx)
        .filter(|v| v % 2 != 0)
        .map(|v| v * v)
        .to_vec()
        .unwrap();
    println!("odd squares from the wire: {:?}", odd_squares);
    producer.join().unwrap();
}

fn main() {
    println!("=== Channel as a Source ===");
    channel_as_source();

    println!("\n=== Channel as a Sink ===");
    channel_as_sink();

    println!("\n=== Pipeline Across Threads ===");
    pipeline_between_threads();

    println!("\n=== Key Points ===");
    println!("1. recv() blocks until a value arrives or every sender is gone");
    println!("2. Disconnection is a clean end, not an error");
    println!("3. to_channel borrows the sender; closing is the caller's job");
    println!("4. A bounded channel gives the sink backpressure for free");
}
