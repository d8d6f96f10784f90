/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Legacy Synchronize Provider
//!
//! Provider for toolchains that only offer the legacy synchronize
//! primitives: a full barrier, a value-returning compare-and-swap and
//! full-barrier fetch operations. Ordered loads, ordered stores and exchange
//! come from the [`emulation`](crate::emulation) module.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::{
    compiler_fence,
    fence,
    Ordering,
};

use super::{
    Backend,
    Provider,
};
use crate::emulation::{
    self,
    SyncPrimitives,
};
use crate::order::MemoryOrder;
use crate::value::{
    AtomicInteger,
    AtomicValue,
};
use crate::Atomic;

/// Full hardware and compiler barrier.
#[inline]
pub fn sync_synchronize() {
    fence(Ordering::SeqCst);
}

/// Compiler-only barrier.
#[inline]
pub fn schedule_barrier() {
    compiler_fence(Ordering::SeqCst);
}

/// Stores `desired` if `location` holds `expected` and returns the value
/// held before the call. Full barrier.
#[inline]
pub fn sync_val_compare_and_swap<T: AtomicValue>(location: &Atomic<T>, expected: T, desired: T) -> T {
    match T::native_compare_exchange(
        location.native(),
        expected,
        desired,
        Ordering::SeqCst,
        Ordering::SeqCst,
    ) {
        Ok(previous) | Err(previous) => previous,
    }
}

/// Defines a full-barrier fetch operation.
macro_rules! sync_fetch_op {
    ($name:ident, $native_op:ident, $doc:expr) => {
        #[doc = concat!("Full-barrier ", $doc, ", returning the previous value.")]
        #[inline]
        pub fn $name<T: AtomicInteger>(location: &Atomic<T>, value: T) -> T {
            T::$native_op(location.native(), value, Ordering::SeqCst)
        }
    };
}

sync_fetch_op!(sync_fetch_and_add, native_fetch_add, "wrapping addition");
sync_fetch_op!(sync_fetch_and_sub, native_fetch_sub, "wrapping subtraction");
sync_fetch_op!(sync_fetch_and_and, native_fetch_and, "bitwise AND");
sync_fetch_op!(sync_fetch_and_or, native_fetch_or, "bitwise OR");
sync_fetch_op!(sync_fetch_and_xor, native_fetch_xor, "bitwise XOR");

/// Provider backed by the legacy synchronize primitives.
///
/// Fetch operations and compare-and-swap are always full barriers. Exchange
/// is a compare-and-swap retry loop.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacySync;

impl SyncPrimitives for LegacySync {
    #[inline]
    fn full_barrier() {
        sync_synchronize();
    }

    #[inline]
    fn plain_read<T: AtomicValue>(location: &Atomic<T>) -> T {
        T::native_load(location.native(), Ordering::Relaxed)
    }

    #[inline]
    fn plain_write<T: AtomicValue>(location: &Atomic<T>, value: T) {
        T::native_store(location.native(), value, Ordering::Relaxed);
    }

    #[inline]
    fn val_compare_and_swap<T: AtomicValue>(location: &Atomic<T>, expected: T, desired: T) -> T {
        sync_val_compare_and_swap(location, expected, desired)
    }
}

impl Provider for LegacySync {
    const BACKEND: Backend = Backend::LegacySync;

    #[inline]
    fn load<T: AtomicValue>(location: &Atomic<T>, order: MemoryOrder) -> T {
        emulation::load::<Self, T>(location, order)
    }

    #[inline]
    fn store<T: AtomicValue>(location: &Atomic<T>, value: T, order: MemoryOrder) {
        emulation::store::<Self, T>(location, value, order);
    }

    #[inline]
    fn exchange<T: AtomicValue>(location: &Atomic<T>, value: T, _order: MemoryOrder) -> T {
        let exchanged = emulation::exchange::<Self, T>(location, value);
        debug_assert!(exchanged.attempts >= 1);
        exchanged.previous
    }

    #[inline]
    fn compare_and_swap<T: AtomicValue>(
        location: &Atomic<T>,
        expected: &mut T,
        desired: T,
        _success: MemoryOrder,
        _failure: MemoryOrder,
    ) -> bool {
        emulation::compare_and_swap::<Self, T>(location, expected, desired)
    }

    #[inline]
    fn fetch_add<T: AtomicInteger>(location: &Atomic<T>, value: T, _order: MemoryOrder) -> T {
        sync_fetch_and_add(location, value)
    }

    #[inline]
    fn fetch_sub<T: AtomicInteger>(location: &Atomic<T>, value: T, _order: MemoryOrder) -> T {
        sync_fetch_and_sub(location, value)
    }

    #[inline]
    fn fetch_and<T: AtomicInteger>(location: &Atomic<T>, value: T, _order: MemoryOrder) -> T {
        sync_fetch_and_and(location, value)
    }

    #[inline]
    fn fetch_or<T: AtomicInteger>(location: &Atomic<T>, value: T, _order: MemoryOrder) -> T {
        sync_fetch_and_or(location, value)
    }

    #[inline]
    fn fetch_xor<T: AtomicInteger>(location: &Atomic<T>, value: T, _order: MemoryOrder) -> T {
        sync_fetch_and_xor(location, value)
    }

    #[inline]
    fn thread_fence(order: MemoryOrder) {
        if order != MemoryOrder::Relaxed {
            sync_synchronize();
        }
    }

    #[inline]
    fn signal_fence(_order: MemoryOrder) {
        schedule_barrier();
    }
}
