//! Integration tests for VelocityX Collections
//!
//! These tests exercise the public API from outside the crate: deques shared
//! across threads, counters fed from deque contents, and error handling.

#![cfg(not(loom))]

use std::sync::{Arc, Barrier};
use std::thread;
use velocityx_collections::metrics::MetricsCollector;
use velocityx_collections::{Counter, Deque, Error};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_shared_deque_many_threads() {
    init_logging();

    let deque = Arc::new(Deque::new(0));
    let num_threads = 8;
    let operations_per_thread = 2_000;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let deque = Arc::clone(&deque);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..operations_per_thread {
                    let value = thread_id * operations_per_thread + i;
                    if i % 2 == 0 {
                        deque.append(value);
                    } else {
                        deque.append_left(value);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(deque.len(), num_threads * operations_per_thread);

    let counter: Counter<usize> = deque.items().into_iter().collect();
    assert_eq!(counter.len(), num_threads * operations_per_thread);
    assert!(counter.iter().all(|(_, count)| count == 1));
}

#[test]
fn test_sliding_window_across_threads() {
    init_logging();

    let window = Arc::new(Deque::bounded(32));
    let num_threads = 4;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let window = Arc::clone(&window);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                window.extend((0..1_000).map(|i| (thread_id, i)));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(window.len(), 32);

    // Each extend runs under one lock, so the survivors come from the last batch
    let items = window.items();
    let last_thread = items[0].0;
    let expected: Vec<_> = (968..1_000).rev().map(|i| (last_thread, i)).collect();
    assert_eq!(items, expected);

    if cfg!(feature = "metrics") {
        let metrics = window.metrics();
        assert_eq!(metrics.evictions, (num_threads * 1_000 - 32) as u64);
        assert_eq!(metrics.peak_len, 32);
    }
}

#[test]
fn test_mixed_stack_and_queue_usage() {
    let deque = Deque::unbounded();

    // FIFO through one end pair
    deque.extend(["job-1", "job-2", "job-3"]);
    assert_eq!(deque.pop_left(), Ok("job-1"));

    // LIFO through the other
    deque.append("urgent");
    assert_eq!(deque.pop(), Ok("urgent"));

    assert_eq!(deque.items(), vec!["job-3", "job-2"]);
    assert_eq!(deque.to_string(), r#"["job-3", "job-2"]"#);
}

#[test]
fn test_error_handling() {
    let deque: Deque<i32> = Deque::bounded(1);

    assert_eq!(deque.pop(), Err(Error::EmptyQueue));
    assert_eq!(deque.pop_left(), Err(Error::EmptyQueue));
    assert_eq!(deque.remove(&1), Err(Error::EmptyQueue));

    deque.append(1);
    assert_eq!(deque.remove(&2), Err(Error::NotFound));
    assert_eq!(deque.remove(&1), Ok(1));

    let err: Box<dyn std::error::Error> = Box::new(deque.pop().unwrap_err());
    assert_eq!(err.to_string(), "Queue is empty");
}

#[test]
fn test_panicking_caller_does_not_wedge_deque() {
    // A panic in one user thread must not wedge the deque for others
    let deque = Arc::new(Deque::unbounded());
    deque.append(1);

    let panicking = {
        let deque = Arc::clone(&deque);
        thread::spawn(move || {
            let value = deque.pop().unwrap();
            panic!("worker failed after taking {}", value);
        })
    };
    assert!(panicking.join().is_err());

    deque.append(2);
    assert_eq!(deque.pop(), Ok(2));
}
