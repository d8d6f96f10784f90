/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Builtin Provider
//!
//! Provider for toolchains that expose type-generic atomic builtins: one
//! entry point per operation accepting a raw pointer of any supported width
//! and an integer memory model. No width selection is needed; the pointer
//! and value are passed through unchanged.
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

/// Memory model: no ordering.
pub const ATOMIC_RELAXED: i32 = 0;
/// Memory model: dependency ordering.
pub const ATOMIC_CONSUME: i32 = 1;
/// Memory model: acquire.
pub const ATOMIC_ACQUIRE: i32 = 2;
/// Memory model: release.
pub const ATOMIC_RELEASE: i32 = 3;
/// Memory model: acquire and release.
pub const ATOMIC_ACQ_REL: i32 = 4;
/// Memory model: sequentially consistent.
pub const ATOMIC_SEQ_CST: i32 = 5;

/// Translates a canonical ordering into a builtin memory model.
#[inline]
const fn memory_model(order: MemoryOrder) -> i32 {
    order as i32
}

/// Decodes a builtin memory model. Unknown models are treated as
/// sequentially consistent.
#[inline]
fn decode(model: i32) -> MemoryOrder {
    match model {
        ATOMIC_RELAXED => MemoryOrder::Relaxed,
        ATOMIC_CONSUME => MemoryOrder::Consume,
        ATOMIC_ACQUIRE => MemoryOrder::Acquire,
        ATOMIC_RELEASE => MemoryOrder::Release,
        ATOMIC_ACQ_REL => MemoryOrder::AcqRel,
        ATOMIC_SEQ_CST => MemoryOrder::SeqCst,
        _ => MemoryOrder::SeqCst,
    }
}

/// Reinterprets a value pointer as the value's native cell.
///
/// # Safety
///
/// `ptr` must point into a live native cell of `T`, as returned by
/// `Atomic::as_ptr`, for the whole lifetime `'a`.
#[inline]
unsafe fn native_cell<'a, T: AtomicValue>(ptr: *mut T) -> &'a T::Native {
    // SAFETY: the native cell is a transparent wrapper around `T` and the
    // caller guarantees `ptr` addresses one.
    unsafe { &*ptr.cast::<T::Native>() }
}

/// Generic atomic load.
///
/// # Safety
///
/// `ptr` must address a live atomic location of `T`.
#[inline]
pub unsafe fn atomic_load_n<T: AtomicValue>(ptr: *mut T, model: i32) -> T {
    let cell = unsafe { native_cell(ptr) };
    T::native_load(cell, decode(model).to_std_load())
}

/// Generic atomic store.
///
/// # Safety
///
/// `ptr` must address a live atomic location of `T`.
#[inline]
pub unsafe fn atomic_store_n<T: AtomicValue>(ptr: *mut T, value: T, model: i32) {
    let cell = unsafe { native_cell(ptr) };
    T::native_store(cell, value, decode(model).to_std_store());
}

/// Generic atomic exchange, returning the previous value.
///
/// # Safety
///
/// `ptr` must address a live atomic location of `T`.
#[inline]
pub unsafe fn atomic_exchange_n<T: AtomicValue>(ptr: *mut T, value: T, model: i32) -> T {
    let cell = unsafe { native_cell(ptr) };
    T::native_swap(cell, value, decode(model).to_std())
}

/// Generic compare-and-exchange.
///
/// Compares the location with `*expected`; on a match stores `desired` and
/// returns `true`, otherwise writes the current value into `*expected` and
/// returns `false`. With `weak` set the comparison may fail spuriously.
///
/// # Safety
///
/// `ptr` must address a live atomic location of `T`, and `expected` must be
/// valid for reads and writes.
#[inline]
pub unsafe fn atomic_compare_exchange_n<T: AtomicValue>(
    ptr: *mut T,
    expected: *mut T,
    desired: T,
    weak: bool,
    success_model: i32,
    failure_model: i32,
) -> bool {
    let cell = unsafe { native_cell(ptr) };
    let current = unsafe { *expected };
    let success = decode(success_model).to_std();
    let failure = decode(failure_model).to_std_load();
    let outcome = if weak {
        T::native_compare_exchange_weak(cell, current, desired, success, failure)
    } else {
        T::native_compare_exchange(cell, current, desired, success, failure)
    };
    match outcome {
        Ok(_) => true,
        Err(actual) => {
            unsafe { *expected = actual };
            false
        }
    }
}

/// Defines a generic fetch-op builtin forwarding to the native cell.
macro_rules! builtin_fetch_op {
    ($name:ident, $native_op:ident, $doc:expr) => {
        #[doc = concat!("Generic atomic ", $doc, ", returning the previous value.")]
        ///
        /// # Safety
        ///
        /// `ptr` must address a live atomic location of `T`.
        #[inline]
        pub unsafe fn $name<T: AtomicInteger>(ptr: *mut T, value: T, model: i32) -> T {
            let cell = unsafe { native_cell(ptr) };
            T::$native_op(cell, value, decode(model).to_std())
        }
    };
}

builtin_fetch_op!(atomic_fetch_add, native_fetch_add, "wrapping addition");
builtin_fetch_op!(atomic_fetch_sub, native_fetch_sub, "wrapping subtraction");
builtin_fetch_op!(atomic_fetch_and, native_fetch_and, "bitwise AND");
builtin_fetch_op!(atomic_fetch_or, native_fetch_or, "bitwise OR");
builtin_fetch_op!(atomic_fetch_xor, native_fetch_xor, "bitwise XOR");

/// Inter-thread fence for a builtin memory model.
#[inline]
pub fn atomic_thread_fence(model: i32) {
    let order = decode(model);
    if order != MemoryOrder::Relaxed {
        fence(order.to_std());
    }
}

/// Compiler-only fence for a builtin memory model.
#[inline]
pub fn atomic_signal_fence(model: i32) {
    let order = decode(model);
    if order != MemoryOrder::Relaxed {
        compiler_fence(order.to_std());
    }
}

/// Provider backed by the type-generic builtins.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, Default)]
pub struct Builtin;

impl Provider for Builtin {
    const BACKEND: Backend = Backend::Builtin;

    #[inline]
    fn load<T: AtomicValue>(location: &Atomic<T>, order: MemoryOrder) -> T {
        // SAFETY: `as_ptr` addresses the live native cell of `location`.
        unsafe { atomic_load_n(location.as_ptr(), memory_model(order)) }
    }

    #[inline]
    fn store<T: AtomicValue>(location: &Atomic<T>, value: T, order: MemoryOrder) {
        // SAFETY: as above.
        unsafe { atomic_store_n(location.as_ptr(), value, memory_model(order)) }
    }

    #[inline]
    fn exchange<T: AtomicValue>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
        // SAFETY: as above.
        unsafe { atomic_exchange_n(location.as_ptr(), value, memory_model(order)) }
    }

    #[inline]
    fn compare_and_swap<T: AtomicValue>(
        location: &Atomic<T>,
        expected: &mut T,
        desired: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool {
        // SAFETY: as above; `expected` is an exclusive reference.
        unsafe {
            atomic_compare_exchange_n(
                location.as_ptr(),
                expected as *mut T,
                desired,
                false,
                memory_model(success),
                memory_model(failure),
            )
        }
    }

    #[inline]
    fn fetch_add<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
        // SAFETY: as above.
        unsafe { atomic_fetch_add(location.as_ptr(), value, memory_model(order)) }
    }

    #[inline]
    fn fetch_sub<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
        // SAFETY: as above.
        unsafe { atomic_fetch_sub(location.as_ptr(), value, memory_model(order)) }
    }

    #[inline]
    fn fetch_and<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
        // SAFETY: as above.
        unsafe { atomic_fetch_and(location.as_ptr(), value, memory_model(order)) }
    }

    #[inline]
    fn fetch_or<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
        // SAFETY: as above.
        unsafe { atomic_fetch_or(location.as_ptr(), value, memory_model(order)) }
    }

    #[inline]
    fn fetch_xor<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T {
        // SAFETY: as above.
        unsafe { atomic_fetch_xor(location.as_ptr(), value, memory_model(order)) }
    }

    #[inline]
    fn thread_fence(order: MemoryOrder) {
        atomic_thread_fence(memory_model(order));
    }

    #[inline]
    fn signal_fence(order: MemoryOrder) {
        atomic_signal_fence(memory_model(order));
    }
}
