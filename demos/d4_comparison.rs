//! Pipeline vs. std Combinators vs. Hand-Rolled Loop
//! The same filter/map/join job done three ways, with rough timings
//!
//! Run with: cargo run --example d4_comparison --release

use std::time::Instant;

use itertools::Itertools;
use pull_iter::{from_slice, Iterable};

const ROUNDS: u32 = 1000;

fn with_pull_iter(input: &[i64]) -> String {
    from_slice(input.to_vec())
        .filter(|v| v % 2 != 0)
        .map(|v| v.to_string())
        .fold(String::new(), |mut acc, v| {
            if !acc.is_empty() {
                acc.push_str(", ");
            }
            acc.push_str(&v);
            acc
        })
        .unwrap()
}

fn with_std_combinators(input: &[i64]) -> String {
    input.iter().filter(|v| *v % 2 != 0).join(", ")
}

fn with_plain_loop(input: &[i64]) -> String {
    let mut out = String::new();
    for v in input {
        if v % 2 != 0 {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(&v.to_string());
        }
    }
    out
}

fn time<F: Fn() -> String>(label: &str, f: F) -> String {
    let start = Instant::now();
    let mut result = String::new();
    for _ in 0..ROUNDS {
        result = f();
    }
    println!("{:<20} {:?} for {} rounds", label, start.elapsed(), ROUNDS);
    result
}

fn main() {
    let input: Vec<i64> = (0..1000).collect();

    println!("=== Odd Numbers, Joined with Commas ===\n");
    let a = time("pull-iter pipeline:", || with_pull_iter(&input));
    let b = time("std combinators:", || with_std_combinators(&input));
    let c = time("hand-rolled loop:", || with_plain_loop(&input));

    assert_eq!(a, b);
    assert_eq!(b, c);
    println!("\nall three produced the same {} characters", a.len());

    println!("\n=== Key Points ===");
    println!("1. All three evaluate lazily element by element");
    println!("2. The pipeline pays for dynamic composition, not for buffering");
    println!("3. Timings here are indicative; build with --release");
}
