/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-ops
//!
//! Ordering-parameterized atomic primitives that behave the same whichever
//! native atomic facility backs the build.
//!
//! Every operation takes an explicit [`MemoryOrder`] and is dispatched at
//! compile time to the one primitive provider bound for this build (see
//! [`provider`]). Providers honor the requested ordering or a stronger one,
//! never a weaker one.
//!
//! ## Operation Set
//!
//! - Load, store, exchange and strong compare-and-swap on every
//!   [`AtomicValue`]: 8, 16, 32 and 64-bit integers, pointer-sized integers
//!   and raw pointers.
//! - Wrapping fetch-add and fetch-sub, and bitwise fetch-and, fetch-or and
//!   fetch-xor, on every [`AtomicInteger`].
//! - Thread fences and compiler-only signal fences.
//!
//! The same vocabulary is available as methods on [`Atomic<T>`], as free
//! functions in [`ops`], and with the ordering fixed by name in [`facade`].
//!
//! ## Backend Selection
//!
//! | Feature | Provider |
//! |---|---|
//! | none | standard atomic types |
//! | `force-builtin` | type-generic builtins |
//! | `force-interlocked` | per-width interlocked routines |
//! | `force-legacy-sync` | legacy synchronize primitives with emulation |
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_ops::{AtomicU64, MemoryOrder};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let counter = Arc::new(AtomicU64::new(0));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     let handle = thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.fetch_add(1, MemoryOrder::Relaxed);
//!         }
//!     });
//!     handles.push(handle);
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.load(MemoryOrder::Acquire), 1000);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

mod error;
mod location;
mod order;
mod value;

#[cfg(any(test, feature = "force-legacy-sync"))]
mod emulation;

pub mod facade;
pub mod ops;
pub mod provider;

pub use error::OrderError;
pub use location::{
    Atomic,
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicI8,
    AtomicIsize,
    AtomicPtr,
    AtomicU16,
    AtomicU32,
    AtomicU64,
    AtomicU8,
    AtomicUsize,
};
pub use ops::{
    compare_and_swap,
    exchange,
    fetch_add,
    fetch_and,
    fetch_or,
    fetch_sub,
    fetch_xor,
    load,
    signal_fence,
    spin_hint,
    store,
    thread_fence,
};
pub use order::{
    BarrierPolicy,
    MemoryOrder,
};
pub use provider::{
    active_backend,
    log_active_backend,
    Active,
    Backend,
    Provider,
};
pub use value::{
    AtomicInteger,
    AtomicValue,
    Width,
};
