/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Publication Example
//!
//! A producer fills a buffer and publishes it with a release store; the
//! consumer reads it after an acquire load of the published pointer.

use prism3_atomic_ops::{
    facade,
    AtomicPtr,
};
use std::ptr;
use std::sync::Arc;
use std::thread;

struct Config {
    name: String,
    workers: usize,
}

fn main() {
    println!("=== Publication Example ===\n");

    let slot: Arc<AtomicPtr<Config>> = Arc::new(AtomicPtr::null());

    let reader = {
        let slot = slot.clone();
        thread::spawn(move || loop {
            let current = facade::load_acquire(&slot);
            if !current.is_null() {
                // Everything written before the release store is visible.
                let config = unsafe { &*current };
                break format!("{} with {} workers", config.name, config.workers);
            }
            prism3_atomic_ops::spin_hint();
        })
    };

    let config = Box::new(Config {
        name: String::from("ingest"),
        workers: 4,
    });
    facade::store_release(&slot, Box::into_raw(config));

    println!("   Reader observed: {}", reader.join().unwrap());

    let retired = facade::swap_acq_rel(&slot, ptr::null_mut());
    if !retired.is_null() {
        drop(unsafe { Box::from_raw(retired) });
        println!("   Retired the published configuration");
    }
}
