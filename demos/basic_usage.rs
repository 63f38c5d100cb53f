//! Basic usage example for VelocityX Collections
//!
//! Demonstrates the deque as a stack, a queue and a sliding window, sharing a deque
//! between producer and consumer threads, and counting values with a counter.
//!
//! Run with `RUST_LOG=trace cargo run --example basic_usage` to see eviction logs.

use std::sync::Arc;
use std::thread;
use std::time::Duration;
use velocityx_collections::metrics::MetricsCollector;
use velocityx_collections::{Counter, Deque, Error};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("VelocityX Collections Usage Example");
    println!("===================================");

    println!("\n1. Stack and Queue:");
    let deque = Deque::unbounded();
    deque.extend([1, 2, 3]);
    println!("   Contents: {}", deque);
    println!("   pop (LIFO): {}", deque.pop()?);
    println!("   pop_left (FIFO): {}", deque.pop_left()?);

    println!("\n2. Sliding Window:");
    let window = Deque::new(3);
    for reading in [10, 20, 30, 40, 50] {
        window.append(reading);
        println!("   after {:>2}: {}", reading, window);
    }

    println!("\n3. Producers and Consumers:");
    let shared: Arc<Deque<u32>> = Arc::new(Deque::unbounded());
    let producers: Vec<_> = (0..4)
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for j in 0..25 {
                    shared.append(i * 25 + j);
                }
            })
        })
        .collect();

    let consumer = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            let mut consumed = 0;
            let mut sum = 0;
            while consumed < 100 {
                match shared.pop_left() {
                    Ok(value) => {
                        consumed += 1;
                        sum += value;
                    }
                    Err(Error::EmptyQueue) => thread::sleep(Duration::from_micros(50)),
                    Err(e) => return Err(e),
                }
            }
            Ok((consumed, sum))
        })
    };

    for handle in producers {
        handle.join().map_err(|_| "producer panicked")?;
    }
    let (consumed, sum) = consumer.join().map_err(|_| "consumer panicked")??;
    println!("   Consumed {} items, sum {}", consumed, sum);

    let metrics = shared.metrics();
    println!(
        "   Operations: {} ({:.1}% failed), peak length {}",
        metrics.total_operations,
        metrics.failure_rate(),
        metrics.peak_len
    );

    println!("\n4. Error Handling:");
    let empty: Deque<&str> = Deque::unbounded();
    match empty.pop() {
        Err(Error::EmptyQueue) => println!("   pop on empty deque: {}", Error::EmptyQueue),
        other => println!("   unexpected result: {:?}", other),
    }
    empty.append("present");
    match empty.remove(&"absent") {
        Err(Error::NotFound) => println!("   remove of missing value: {}", Error::NotFound),
        other => println!("   unexpected result: {:?}", other),
    }

    println!("\n5. Counter:");
    let mut counter = Counter::new();
    counter.add_items("the quick brown fox jumps over the lazy dog the end".split(' '));
    println!("   Distinct words: {}", counter.len());
    println!("   Most common: {:?}", counter.most_common(2));

    Ok(())
}
