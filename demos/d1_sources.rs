//! Sources and Generators
//! Slices, reverse slices, arithmetic sequences and closure generators
//!
//! Run with: cargo run --example d1_sources

use pull_iter::{from_reverse_slice, from_slice, generate, sequence, step_sequence, Iterable};

fn main() {
    println!("=== Slice Source ===");
    let values = from_slice(vec![1, 2, 3, 4, 5]).to_vec().unwrap();
    println!("forward:  {:?}", values);

    let values = from_reverse_slice(vec![1, 2, 3, 4, 5]).to_vec().unwrap();
    println!("reverse:  {:?}", values);

    println!("\n=== Arithmetic Sequences ===");
    // The same ten values as the slice above, but computed on demand.
    let values = sequence(1, 10).to_vec().unwrap();
    println!("sequence(1, 10):         {:?}", values);

    let values = step_sequence(1, 10, 2).to_vec().unwrap();
    println!("step_sequence(1, 10, 2): {:?}", values);

    let values = step_sequence(10, 1, -3).to_vec().unwrap();
    println!("step_sequence(10, 1, -3): {:?}", values);

    println!("\n=== Closure Generator ===");
    // The closure sees (previous value, 1-based count, total bound).
    let counter = generate(0, 3, |prev, _, _| prev + 1).to_vec().unwrap();
    println!("counter from seed 0:  {:?}", counter);

    let labels = generate(String::new(), 4, |_, count, repeat| {
        format!("item {}/{}", count, repeat)
    })
    .to_vec()
    .unwrap();
    println!("labelled:             {:?}", labels);

    let powers = generate(1u64, 8, |prev, _, _| prev * 2).to_vec().unwrap();
    println!("powers of two:        {:?}", powers);

    println!("\n=== Key Points ===");
    println!("1. Every source satisfies the same Iterable contract");
    println!("2. One slice state machine serves both directions");
    println!("3. Generators carry no backing collection, only the last value");
    println!("4. Degenerate steps (zero, or pointing away from the end) yield nothing");
}
