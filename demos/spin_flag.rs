/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Spin Flag Example
//!
//! A one-shot initialization flag and a test-and-set spin lock built from
//! compare-and-swap, exchange and fences.

use prism3_atomic_ops::facade::{
    cas_acq_rel,
    fence_acquire,
    load_relaxed,
    store_release,
    swap_acquire,
};
use prism3_atomic_ops::{
    spin_hint,
    AtomicU64,
    AtomicU8,
    MemoryOrder,
};
use std::sync::Arc;
use std::thread;

const UNINIT: u8 = 0;
const RUNNING: u8 = 1;
const DONE: u8 = 2;

fn main() {
    println!("=== Spin Flag Example ===\n");

    // Example 1: Exactly one thread runs the initializer
    println!("1. One-shot Initialization:");
    let state = Arc::new(AtomicU8::new(UNINIT));
    let mut handles = vec![];
    for id in 0..4 {
        let state = state.clone();
        let handle = thread::spawn(move || {
            let mut expected = UNINIT;
            if cas_acq_rel(&state, &mut expected, RUNNING) {
                println!("   Thread {} runs the initializer", id);
                store_release(&state, DONE);
            } else {
                while load_relaxed(&state) != DONE {
                    spin_hint();
                }
                fence_acquire();
            }
        });
        handles.push(handle);
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // Example 2: Test-and-set spin lock guarding a plain counter
    println!("\n2. Spin Lock:");
    let lock = Arc::new(AtomicU8::new(0));
    let total = Arc::new(AtomicU64::new(0));
    let mut handles = vec![];
    for _ in 0..4 {
        let lock = lock.clone();
        let total = total.clone();
        let handle = thread::spawn(move || {
            for _ in 0..1000 {
                while swap_acquire(&lock, 1) == 1 {
                    spin_hint();
                }
                let value = total.load(MemoryOrder::Relaxed);
                total.store(value + 1, MemoryOrder::Relaxed);
                store_release(&lock, 0);
            }
        });
        handles.push(handle);
    }
    for handle in handles {
        handle.join().unwrap();
    }
    println!("   Total: {}", total.load(MemoryOrder::Acquire));
}
