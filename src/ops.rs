/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Primitive Operations
//!
//! The primitive operation set as free functions. Each takes the location,
//! the operands and an explicit [`MemoryOrder`], and forwards to the
//! provider bound for this build.
//!
//! # Example
//!
//! ```rust
//! use prism3_atomic_ops::{ops, AtomicU64, MemoryOrder};
//!
//! static HITS: AtomicU64 = AtomicU64::new(0);
//!
//! ops::fetch_add(&HITS, 1, MemoryOrder::Relaxed);
//! assert_eq!(ops::load(&HITS, MemoryOrder::Acquire), 1);
//! ```
//!
//! # Author
//!
//! Haixing Hu

use crate::order::MemoryOrder;
use crate::provider::{
    Active,
    Provider,
};
use crate::value::{
    AtomicInteger,
    AtomicValue,
};
use crate::Atomic;

/// Atomically reads the value of `location`.
///
/// # Parameters
///
/// * `location` - The location to read.
/// * `order` - The memory ordering of the load.
///
/// # Returns
///
/// The current value.
#[inline]
pub fn load<T: AtomicValue>(location: &Atomic<T>, order: MemoryOrder) -> T {
    Active::load(location, order)
}

/// Atomically writes `value` into `location`.
///
/// # Parameters
///
/// * `location` - The location to write.
/// * `value` - The value to store.
/// * `order` - The memory ordering of the store.
#[inline]
pub fn store<T: AtomicValue>(location: &Atomic<T>, value: T, order: MemoryOrder) {
    Active::store(location, value, order);
}

/// Atomically replaces the value of `location`.
///
/// # Returns
///
/// The value held before the exchange.
#[inline]
pub fn exchange<T: AtomicValue>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
    Active::exchange(location, value, order)
}

/// Strong compare-and-swap.
///
/// # Parameters
///
/// * `location` - The location to update.
/// * `expected` - The value the location must hold; receives the observed
///   value when the comparison fails.
/// * `desired` - The value to store on success.
/// * `success` - Ordering of the read-modify-write on success.
/// * `failure` - Ordering of the load on failure.
///
/// # Returns
///
/// `true` if `desired` was stored.
#[inline]
pub fn compare_and_swap<T: AtomicValue>(
    location: &Atomic<T>,
    expected: &mut T,
    desired: T,
    success: MemoryOrder,
    failure: MemoryOrder,
) -> bool {
    Active::compare_and_swap(location, expected, desired, success, failure)
}

/// Wrapping addition, returning the previous value.
#[inline]
pub fn fetch_add<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
    Active::fetch_add(location, value, order)
}

/// Wrapping subtraction, returning the previous value.
#[inline]
pub fn fetch_sub<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
    Active::fetch_sub(location, value, order)
}

/// Bitwise AND, returning the previous value.
#[inline]
pub fn fetch_and<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
    Active::fetch_and(location, value, order)
}

/// Bitwise OR, returning the previous value.
#[inline]
pub fn fetch_or<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
    Active::fetch_or(location, value, order)
}

/// Bitwise XOR, returning the previous value.
#[inline]
pub fn fetch_xor<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
    Active::fetch_xor(location, value, order)
}

/// Inter-thread memory fence. A `Relaxed` fence has no effect.
#[inline]
pub fn thread_fence(order: MemoryOrder) {
    Active::thread_fence(order);
}

/// Compiler-only fence, ordering accesses against code interrupting the
/// current thread such as a signal handler.
#[inline]
pub fn signal_fence(order: MemoryOrder) {
    Active::signal_fence(order);
}

/// Hints the processor that the caller is spinning on a location.
#[inline]
pub fn spin_hint() {
    std::hint::spin_loop();
}
