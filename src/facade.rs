/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Ordering Presets
//!
//! Named shortcuts that fix the memory ordering of a primitive operation,
//! so call sites read as `load_acquire(&flag)` instead of passing the
//! ordering each time. Every function forwards to [`ops`](crate::ops).
//!
//! Compare-and-swap presets fix both orderings:
//!
//! | Preset | Success | Failure |
//! |---|---|---|
//! | `cas_acq_rel` | `AcqRel` | `Acquire` |
//! | `cas_acquire` | `Acquire` | `Acquire` |
//! | `cas_release` | `Release` | `Relaxed` |
//! | `cas_relaxed` | `Relaxed` | `Relaxed` |
//! | `cas_seq_cst` | `SeqCst` | `SeqCst` |
//!
//! # Example
//!
//! ```rust
//! use prism3_atomic_ops::facade::{increment_relaxed, load_acquire, store_release};
//! use prism3_atomic_ops::AtomicU32;
//!
//! let ready = AtomicU32::new(0);
//! let hits = AtomicU32::new(0);
//! increment_relaxed(&hits);
//! store_release(&ready, 1);
//! assert_eq!(load_acquire(&ready), 1);
//! ```
//!
//! # Author
//!
//! Haixing Hu

use crate::ops;
use crate::order::MemoryOrder;
use crate::value::{
    AtomicInteger,
    AtomicValue,
};
use crate::Atomic;

macro_rules! load_preset {
    ($name:ident, $order:ident) => {
        #[doc = concat!("Loads with `", stringify!($order), "` ordering.")]
        #[inline]
        pub fn $name<T: AtomicValue>(location: &Atomic<T>) -> T {
            ops::load(location, MemoryOrder::$order)
        }
    };
}

macro_rules! store_preset {
    ($name:ident, $order:ident) => {
        #[doc = concat!("Stores with `", stringify!($order), "` ordering.")]
        #[inline]
        pub fn $name<T: AtomicValue>(location: &Atomic<T>, value: T) {
            ops::store(location, value, MemoryOrder::$order);
        }
    };
}

macro_rules! swap_preset {
    ($name:ident, $order:ident) => {
        #[doc = concat!(
            "Exchanges with `", stringify!($order), "` ordering, returning the previous value."
        )]
        #[inline]
        pub fn $name<T: AtomicValue>(location: &Atomic<T>, value: T) -> T {
            ops::exchange(location, value, MemoryOrder::$order)
        }
    };
}

macro_rules! cas_preset {
    ($name:ident, $success:ident, $failure:ident) => {
        #[doc = concat!(
            "Strong compare-and-swap with `", stringify!($success),
            "` ordering on success and `", stringify!($failure), "` on failure."
        )]
        ///
        /// On failure the observed value is written into `expected`.
        #[inline]
        pub fn $name<T: AtomicValue>(location: &Atomic<T>, expected: &mut T, desired: T) -> bool {
            ops::compare_and_swap(
                location,
                expected,
                desired,
                MemoryOrder::$success,
                MemoryOrder::$failure,
            )
        }
    };
}

macro_rules! fetch_presets {
    ($op:ident, $doc:expr, $($name:ident => $order:ident),+ $(,)?) => {
        $(
            #[doc = concat!(
                $doc, " with `", stringify!($order), "` ordering, returning the previous value."
            )]
            #[inline]
            pub fn $name<T: AtomicInteger>(location: &Atomic<T>, value: T) -> T {
                ops::$op(location, value, MemoryOrder::$order)
            }
        )+
    };
}

macro_rules! fence_preset {
    ($name:ident, $order:ident) => {
        #[doc = concat!("Thread fence with `", stringify!($order), "` ordering.")]
        #[inline]
        pub fn $name() {
            ops::thread_fence(MemoryOrder::$order);
        }
    };
}

load_preset!(load_relaxed, Relaxed);
load_preset!(load_consume, Consume);
load_preset!(load_acquire, Acquire);
load_preset!(load_seq_cst, SeqCst);

store_preset!(store_relaxed, Relaxed);
store_preset!(store_release, Release);
store_preset!(store_seq_cst, SeqCst);

swap_preset!(swap_relaxed, Relaxed);
swap_preset!(swap_acquire, Acquire);
swap_preset!(swap_release, Release);
swap_preset!(swap_acq_rel, AcqRel);

cas_preset!(cas_relaxed, Relaxed, Relaxed);
cas_preset!(cas_acquire, Acquire, Acquire);
cas_preset!(cas_release, Release, Relaxed);
cas_preset!(cas_acq_rel, AcqRel, Acquire);
cas_preset!(cas_seq_cst, SeqCst, SeqCst);

fetch_presets!(
    fetch_add,
    "Wrapping addition",
    fetch_add_relaxed => Relaxed,
    fetch_add_acquire => Acquire,
    fetch_add_release => Release,
    fetch_add_acq_rel => AcqRel,
);

fetch_presets!(
    fetch_sub,
    "Wrapping subtraction",
    fetch_sub_relaxed => Relaxed,
    fetch_sub_acquire => Acquire,
    fetch_sub_release => Release,
    fetch_sub_acq_rel => AcqRel,
);

fetch_presets!(
    fetch_and,
    "Bitwise AND",
    fetch_and_relaxed => Relaxed,
    fetch_and_acquire => Acquire,
    fetch_and_release => Release,
    fetch_and_acq_rel => AcqRel,
);

fetch_presets!(
    fetch_or,
    "Bitwise OR",
    fetch_or_relaxed => Relaxed,
    fetch_or_acquire => Acquire,
    fetch_or_release => Release,
    fetch_or_acq_rel => AcqRel,
);

fetch_presets!(
    fetch_xor,
    "Bitwise XOR",
    fetch_xor_relaxed => Relaxed,
    fetch_xor_acquire => Acquire,
    fetch_xor_release => Release,
    fetch_xor_acq_rel => AcqRel,
);

/// Adds one with `Relaxed` ordering, returning the previous value.
///
/// Suited to statistics counters that publish nothing.
#[inline]
pub fn increment_relaxed<T: AtomicInteger>(location: &Atomic<T>) -> T {
    ops::fetch_add(location, T::ONE, MemoryOrder::Relaxed)
}

/// Adds one with `AcqRel` ordering, returning the previous value.
#[inline]
pub fn increment_acq_rel<T: AtomicInteger>(location: &Atomic<T>) -> T {
    ops::fetch_add(location, T::ONE, MemoryOrder::AcqRel)
}

/// Subtracts one with `Relaxed` ordering, returning the previous value.
#[inline]
pub fn decrement_relaxed<T: AtomicInteger>(location: &Atomic<T>) -> T {
    ops::fetch_sub(location, T::ONE, MemoryOrder::Relaxed)
}

/// Subtracts one with `AcqRel` ordering, returning the previous value.
///
/// The usual choice for dropping a reference count: the thread that sees
/// the previous value `1` also sees every write made before the other
/// decrements.
#[inline]
pub fn decrement_acq_rel<T: AtomicInteger>(location: &Atomic<T>) -> T {
    ops::fetch_sub(location, T::ONE, MemoryOrder::AcqRel)
}

fence_preset!(fence_acquire, Acquire);
fence_preset!(fence_release, Release);
fence_preset!(fence_acq_rel, AcqRel);
fence_preset!(fence_seq_cst, SeqCst);

/// Prevents the compiler from moving memory accesses across this point.
/// Emits no hardware barrier.
#[inline]
pub fn compiler_barrier() {
    ops::signal_fence(MemoryOrder::AcqRel);
}
