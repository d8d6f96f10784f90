/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Interlocked Provider
//!
//! Provider for toolchains whose atomic facility is a table of separately
//! named routines, one set per width, operating on fixed-width signed
//! storage. Every read-modify-write routine is a full barrier and takes no
//! ordering argument. There are no ordered loads or stores: they are built
//! from plain accesses and barriers.
//!
//! A generic operation resolves its routine from the value type's width,
//! which is a compile-time constant, so the dispatch `match` folds away.
//! Signed and unsigned values of one width reach the same routine through
//! their bit pattern; pointer-sized values use the 32 or 64-bit routines.
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
use crate::order::MemoryOrder;
use crate::value::{
    AtomicInteger,
    AtomicValue,
    Width,
};
use crate::Atomic;

/// Generates the routine set for one width.
///
/// Every routine requires `ptr` to address a live location of that width,
/// aligned for atomic access and only accessed atomically.
macro_rules! interlocked_routines {
    ($module:ident, $word:ty, $cell:ty) => {
        pub(super) mod $module {
            use std::sync::atomic::Ordering;

            #[inline]
            unsafe fn cell<'a>(ptr: *mut $word) -> &'a $cell {
                // SAFETY: forwarded from the routine's caller.
                unsafe { <$cell>::from_ptr(ptr) }
            }

            /// Plain single-copy-atomic read.
            #[inline]
            pub(crate) unsafe fn read(ptr: *mut $word) -> $word {
                unsafe { cell(ptr) }.load(Ordering::Relaxed)
            }

            /// Plain single-copy-atomic write.
            #[inline]
            pub(crate) unsafe fn write(ptr: *mut $word, value: $word) {
                unsafe { cell(ptr) }.store(value, Ordering::Relaxed);
            }

            #[inline]
            pub(crate) unsafe fn exchange(ptr: *mut $word, value: $word) -> $word {
                unsafe { cell(ptr) }.swap(value, Ordering::SeqCst)
            }

            /// Stores `exchange` if the location holds `comparand`; returns
            /// the value held before the call either way.
            #[inline]
            pub(crate) unsafe fn compare_exchange(
                ptr: *mut $word,
                exchange: $word,
                comparand: $word,
            ) -> $word {
                match unsafe { cell(ptr) }.compare_exchange(
                    comparand,
                    exchange,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                ) {
                    Ok(previous) | Err(previous) => previous,
                }
            }

            #[inline]
            pub(crate) unsafe fn exchange_add(ptr: *mut $word, value: $word) -> $word {
                unsafe { cell(ptr) }.fetch_add(value, Ordering::SeqCst)
            }

            #[inline]
            pub(crate) unsafe fn and(ptr: *mut $word, value: $word) -> $word {
                unsafe { cell(ptr) }.fetch_and(value, Ordering::SeqCst)
            }

            #[inline]
            pub(crate) unsafe fn or(ptr: *mut $word, value: $word) -> $word {
                unsafe { cell(ptr) }.fetch_or(value, Ordering::SeqCst)
            }

            #[inline]
            pub(crate) unsafe fn xor(ptr: *mut $word, value: $word) -> $word {
                unsafe { cell(ptr) }.fetch_xor(value, Ordering::SeqCst)
            }
        }
    };
}

#[cfg(target_has_atomic = "8")]
interlocked_routines!(w8, i8, std::sync::atomic::AtomicI8);
#[cfg(target_has_atomic = "16")]
interlocked_routines!(w16, i16, std::sync::atomic::AtomicI16);
#[cfg(target_has_atomic = "32")]
interlocked_routines!(w32, i32, std::sync::atomic::AtomicI32);
#[cfg(target_has_atomic = "64")]
interlocked_routines!(w64, i64, std::sync::atomic::AtomicI64);

/// Calls the routine matching the width of `$value`, reinterpreting the
/// location as fixed-width storage and each `u64` bit-pattern argument as a
/// word of that width. Evaluates to the routine's result as a bit pattern.
///
/// Must be expanded inside an `unsafe` context whose pointer satisfies the
/// routine contract.
macro_rules! by_width {
    (@unit $value:ty, $ptr:expr, $routine:ident($($arg:expr),*)) => {{
        let ptr: *mut $value = $ptr;
        match <$value as AtomicValue>::WIDTH {
            #[cfg(target_has_atomic = "8")]
            Width::W8 => w8::$routine(ptr.cast::<i8>() $(, $arg as i8)*),
            #[cfg(target_has_atomic = "16")]
            Width::W16 => w16::$routine(ptr.cast::<i16>() $(, $arg as i16)*),
            #[cfg(target_has_atomic = "32")]
            Width::W32 => w32::$routine(ptr.cast::<i32>() $(, $arg as i32)*),
            #[cfg(target_has_atomic = "64")]
            Width::W64 => w64::$routine(ptr.cast::<i64>() $(, $arg as i64)*),
            #[allow(unreachable_patterns)]
            width => unreachable!("no interlocked routine for {} values", width),
        }
    }};
    ($value:ty, $ptr:expr, $routine:ident($($arg:expr),*)) => {{
        let ptr: *mut $value = $ptr;
        match <$value as AtomicValue>::WIDTH {
            #[cfg(target_has_atomic = "8")]
            Width::W8 => w8::$routine(ptr.cast::<i8>() $(, $arg as i8)*) as u64,
            #[cfg(target_has_atomic = "16")]
            Width::W16 => w16::$routine(ptr.cast::<i16>() $(, $arg as i16)*) as u64,
            #[cfg(target_has_atomic = "32")]
            Width::W32 => w32::$routine(ptr.cast::<i32>() $(, $arg as i32)*) as u64,
            #[cfg(target_has_atomic = "64")]
            Width::W64 => w64::$routine(ptr.cast::<i64>() $(, $arg as i64)*) as u64,
            #[allow(unreachable_patterns)]
            width => unreachable!("no interlocked routine for {} values", width),
        }
    }};
}

/// Full hardware barrier.
#[inline]
fn memory_barrier() {
    fence(Ordering::SeqCst);
}

/// Acquire or release barrier. On strongly ordered targets this only
/// restrains the compiler.
#[inline]
fn read_write_barrier(ordering: Ordering) {
    fence(ordering);
}

#[inline]
fn barrier_after_read(order: MemoryOrder) {
    match order {
        MemoryOrder::Relaxed => {}
        MemoryOrder::SeqCst => memory_barrier(),
        _ => read_write_barrier(Ordering::Acquire),
    }
}

#[inline]
fn barrier_before_write(order: MemoryOrder) {
    match order {
        MemoryOrder::Relaxed => {}
        MemoryOrder::SeqCst => memory_barrier(),
        _ => read_write_barrier(Ordering::Release),
    }
}

/// Provider backed by the per-width interlocked routines.
///
/// Exchange, compare-and-swap and the fetch operations are always full
/// barriers, whatever ordering is requested.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, Default)]
pub struct Interlocked;

impl Provider for Interlocked {
    const BACKEND: Backend = Backend::Interlocked;

    #[inline]
    fn load<T: AtomicValue>(location: &Atomic<T>, order: MemoryOrder) -> T {
        // SAFETY: `as_ptr` addresses the live native cell of `location`,
        // whose alignment matches the routine width.
        let bits = unsafe { by_width!(T, location.as_ptr(), read()) };
        barrier_after_read(order);
        T::from_bits(bits)
    }

    #[inline]
    fn store<T: AtomicValue>(location: &Atomic<T>, value: T, order: MemoryOrder) {
        barrier_before_write(order);
        let bits = value.into_bits();
        // SAFETY: as above.
        unsafe { by_width!(@unit T, location.as_ptr(), write(bits)) };
        if order == MemoryOrder::SeqCst {
            memory_barrier();
        }
    }

    #[inline]
    fn exchange<T: AtomicValue>(location: &Atomic<T>, value: T, _order: MemoryOrder) -> T {
        let bits = value.into_bits();
        // SAFETY: as above.
        T::from_bits(unsafe { by_width!(T, location.as_ptr(), exchange(bits)) })
    }

    #[inline]
    fn compare_and_swap<T: AtomicValue>(
        location: &Atomic<T>,
        expected: &mut T,
        desired: T,
        _success: MemoryOrder,
        _failure: MemoryOrder,
    ) -> bool {
        let comparand = *expected;
        let exchange_bits = desired.into_bits();
        let comparand_bits = comparand.into_bits();
        // SAFETY: as above.
        let previous = T::from_bits(unsafe {
            by_width!(
                T,
                location.as_ptr(),
                compare_exchange(exchange_bits, comparand_bits)
            )
        });
        if previous == comparand {
            true
        } else {
            *expected = previous;
            false
        }
    }

    #[inline]
    fn fetch_add<T: AtomicInteger>(location: &Atomic<T>, value: T, _order: MemoryOrder) -> T {
        let bits = value.into_bits();
        // SAFETY: as above.
        T::from_bits(unsafe { by_width!(T, location.as_ptr(), exchange_add(bits)) })
    }

    #[inline]
    fn fetch_sub<T: AtomicInteger>(location: &Atomic<T>, value: T, _order: MemoryOrder) -> T {
        // There is no subtract routine; add the two's-complement negation.
        let bits = value.wrapping_neg().into_bits();
        // SAFETY: as above.
        T::from_bits(unsafe { by_width!(T, location.as_ptr(), exchange_add(bits)) })
    }

    #[inline]
    fn fetch_and<T: AtomicInteger>(location: &Atomic<T>, value: T, _order: MemoryOrder) -> T {
        let bits = value.into_bits();
        // SAFETY: as above.
        T::from_bits(unsafe { by_width!(T, location.as_ptr(), and(bits)) })
    }

    #[inline]
    fn fetch_or<T: AtomicInteger>(location: &Atomic<T>, value: T, _order: MemoryOrder) -> T {
        let bits = value.into_bits();
        // SAFETY: as above.
        T::from_bits(unsafe { by_width!(T, location.as_ptr(), or(bits)) })
    }

    #[inline]
    fn fetch_xor<T: AtomicInteger>(location: &Atomic<T>, value: T, _order: MemoryOrder) -> T {
        let bits = value.into_bits();
        // SAFETY: as above.
        T::from_bits(unsafe { by_width!(T, location.as_ptr(), xor(bits)) })
    }

    #[inline]
    fn thread_fence(order: MemoryOrder) {
        match order {
            MemoryOrder::Relaxed => {}
            MemoryOrder::SeqCst => memory_barrier(),
            _ => read_write_barrier(order.to_std()),
        }
    }

    #[inline]
    fn signal_fence(_order: MemoryOrder) {
        compiler_fence(Ordering::SeqCst);
    }
}
