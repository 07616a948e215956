//! Filter / Map / Fold Pipelines
//! Chaining adapters and driving them with each consumer
//!
//! Run with: cargo run --example d2_pipeline

use pull_iter::{sequence, Iterable};

fn main() {
    println!("=== Filter and Map ===");
    let odd = |v: &i64| v % 2 != 0;

    let odds = sequence(1, 10).filter(odd).to_vec().unwrap();
    println!("odd numbers in 1..=10:   {:?}", odds);

    let doubled = sequence(1, 10).map(|v| v * 2).to_vec().unwrap();
    println!("doubled 1..=10:          {:?}", doubled);

    // Map may change the element type mid-pipeline.
    let labels = sequence(1, 5)
        .filter(odd)
        .map(|v| format!("#{}", v))
        .to_vec()
        .unwrap();
    println!("odd, labelled:           {:?}", labels);

    println!("\n=== For-Each ===");
    let mut count = 0;
    let mut sum = 0;
    sequence(1, 10)
        .for_each(|v| {
            count += 1;
            sum += v;
        })
        .unwrap();
    println!("visited {} elements, sum {}", count, sum);

    println!("\n=== Fold ===");
    let sum = sequence(1, 10).fold(0, |acc, v| acc + v).unwrap();
    println!("sum via fold:     {}", sum);

    // Running average over 1..=11, mapped to floats first.
    let (_, average) = sequence(1, 11)
        .map(|v| v as f64)
        .fold((0.0_f64, 0.0_f64), |(count, average), v| {
            ((count + 1.0), (average * count + v) / (count + 1.0))
        })
        .unwrap();
    println!("average of 1..=11: {}", average);

    println!("\n=== Key Points ===");
    println!("1. Adapters are lazy; the consumer at the end drives everything");
    println!("2. filter may pull many upstream elements for one result");
    println!("3. map pulls exactly one upstream element per result");
    println!("4. Consumers return the iterator's terminal error as a Result");
}
