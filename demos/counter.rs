/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Counter Example
//!
//! Demonstrates shared counters with explicit and preset orderings.

use prism3_atomic_ops::facade::{
    decrement_acq_rel,
    increment_relaxed,
    load_acquire,
};
use prism3_atomic_ops::{
    active_backend,
    AtomicI32,
    AtomicU64,
    MemoryOrder,
};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Atomic Counter Example ===");
    println!("Backend: {}\n", active_backend());

    // Example 1: Basic counter operations
    println!("1. Basic Counter Operations:");
    let counter = AtomicI32::new(0);
    println!("   Initial value: {}", counter);

    counter.fetch_add(1, MemoryOrder::Relaxed);
    println!("   After increment: {}", counter);

    counter.fetch_add(5, MemoryOrder::Relaxed);
    println!("   After adding 5: {}", counter);

    counter.fetch_sub(1, MemoryOrder::Relaxed);
    println!("   After decrement: {}", counter);

    // Example 2: Multi-threaded statistics counter
    println!("\n2. Multi-threaded Counter:");
    let hits = Arc::new(AtomicU64::new(0));
    let num_threads = 10;
    let increments_per_thread = 1000;

    let mut handles = vec![];
    for _ in 0..num_threads {
        let hits = hits.clone();
        let handle = thread::spawn(move || {
            for _ in 0..increments_per_thread {
                increment_relaxed(&hits);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!("   Expected: {}", num_threads * increments_per_thread);
    println!("   Actual: {}", load_acquire(&hits));

    // Example 3: Reference count, the last owner cleans up
    println!("\n3. Reference Count:");
    let refs = Arc::new(AtomicU64::new(3));
    let mut handles = vec![];
    for id in 0..3 {
        let refs = refs.clone();
        let handle = thread::spawn(move || {
            if decrement_acq_rel(&refs) == 1 {
                println!("   Owner {} released the last reference", id);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
    println!("   Remaining references: {}", load_acquire(&refs));
}
