/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Native Provider
//!
//! Standards-based provider: each operation forwards to the value's native
//! atomic cell with the ordering translated one-to-one.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::{
    compiler_fence,
    fence,
};

use super::{
    Backend,
    Provider,
};
use crate::order::MemoryOrder;
use crate::value::{
    AtomicInteger,
    AtomicValue,
};
use crate::Atomic;

/// Provider backed by the standard atomic types.
///
/// Orderings that are illegal for a pure read or write (for example a
/// `Release` load) are reduced to their meaningful component instead of
/// reaching the standard types, which would reject them.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, Default)]
pub struct Native;

impl Provider for Native {
    const BACKEND: Backend = Backend::Native;

    #[inline]
    fn load<T: AtomicValue>(location: &Atomic<T>, order: MemoryOrder) -> T {
        T::native_load(location.native(), order.to_std_load())
    }

    #[inline]
    fn store<T: AtomicValue>(location: &Atomic<T>, value: T, order: MemoryOrder) {
        T::native_store(location.native(), value, order.to_std_store());
    }

    #[inline]
    fn exchange<T: AtomicValue>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
        T::native_swap(location.native(), value, order.to_std())
    }

    #[inline]
    fn compare_and_swap<T: AtomicValue>(
        location: &Atomic<T>,
        expected: &mut T,
        desired: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool {
        match T::native_compare_exchange(
            location.native(),
            *expected,
            desired,
            success.to_std(),
            failure.to_std_load(),
        ) {
            Ok(_) => true,
            Err(actual) => {
                *expected = actual;
                false
            }
        }
    }

    #[inline]
    fn fetch_add<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
        T::native_fetch_add(location.native(), value, order.to_std())
    }

    #[inline]
    fn fetch_sub<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
        T::native_fetch_sub(location.native(), value, order.to_std())
    }

    #[inline]
    fn fetch_and<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
        T::native_fetch_and(location.native(), value, order.to_std())
    }

    #[inline]
    fn fetch_or<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
        T::native_fetch_or(location.native(), value, order.to_std())
    }

    #[inline]
    fn fetch_xor<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
        T::native_fetch_xor(location.native(), value, order.to_std())
    }

    #[inline]
    fn thread_fence(order: MemoryOrder) {
        // A relaxed fence orders nothing, and the standard fence rejects it.
        if order != MemoryOrder::Relaxed {
            fence(order.to_std());
        }
    }

    #[inline]
    fn signal_fence(order: MemoryOrder) {
        if order != MemoryOrder::Relaxed {
            compiler_fence(order.to_std());
        }
    }
}
