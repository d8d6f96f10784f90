/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Barrier and CAS Emulation
//!
//! Builds ordered loads, ordered stores, exchange and strong
//! compare-and-swap out of the four primitives a legacy synchronize facility
//! offers: a full barrier, a plain read, a plain write and a value-returning
//! compare-and-swap.
//!
//! Ordered accesses bracket the plain access with full barriers according to
//! [`BarrierPolicy`], so the result is always at least as strong as the
//! request. Exchange is a retry loop and therefore lock-free but not
//! wait-free.
//!
//! # Author
//!
//! Haixing Hu

use crate::order::{
    BarrierPolicy,
    MemoryOrder,
};
use crate::value::AtomicValue;
use crate::Atomic;

/// Number of failed exchange attempts between two contention reports.
pub(crate) const CONTENTION_REPORT_INTERVAL: u64 = 1024;

/// The primitives the emulation is built from.
pub(crate) trait SyncPrimitives {
    /// Full hardware and compiler barrier.
    fn full_barrier();

    /// Single-copy-atomic read with no ordering of its own.
    fn plain_read<T: AtomicValue>(location: &Atomic<T>) -> T;

    /// Single-copy-atomic write with no ordering of its own.
    fn plain_write<T: AtomicValue>(location: &Atomic<T>, value: T);

    /// Stores `desired` if `location` holds `expected`, returning the value
    /// held before the call. Full barrier.
    fn val_compare_and_swap<T: AtomicValue>(location: &Atomic<T>, expected: T, desired: T) -> T;
}

/// Outcome of an emulated exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Exchanged<T> {
    /// Value replaced by the exchange.
    pub previous: T,
    /// Number of compare-and-swap attempts, including the successful one.
    pub attempts: u64,
}

/// Ordered load built from a plain read and full barriers.
#[inline]
pub(crate) fn load<S: SyncPrimitives, T: AtomicValue>(location: &Atomic<T>, order: MemoryOrder) -> T {
    let policy = BarrierPolicy::for_load(order);
    if policy.leading {
        S::full_barrier();
    }
    let value = S::plain_read(location);
    if policy.trailing {
        S::full_barrier();
    }
    value
}

/// Ordered store built from a plain write and full barriers.
#[inline]
pub(crate) fn store<S: SyncPrimitives, T: AtomicValue>(
    location: &Atomic<T>,
    value: T,
    order: MemoryOrder,
) {
    let policy = BarrierPolicy::for_store(order);
    if policy.leading {
        S::full_barrier();
    }
    S::plain_write(location, value);
    if policy.trailing {
        S::full_barrier();
    }
}

/// Exchange built from a compare-and-swap retry loop.
///
/// Each attempt re-reads the location and tries to replace exactly the value
/// it read. The loop ends once the compare-and-swap observes that value. The
/// compare-and-swap is a full barrier, so any requested ordering is met.
pub(crate) fn exchange<S: SyncPrimitives, T: AtomicValue>(
    location: &Atomic<T>,
    value: T,
) -> Exchanged<T> {
    let mut attempts: u64 = 1;
    loop {
        let current = S::plain_read(location);
        let observed = S::val_compare_and_swap(location, current, value);
        if observed == current {
            return Exchanged {
                previous: current,
                attempts,
            };
        }
        if attempts % CONTENTION_REPORT_INTERVAL == 0 {
            log::debug!(
                "emulated exchange on {} location still contended after {} attempts",
                T::WIDTH,
                attempts,
            );
        }
        attempts += 1;
    }
}

/// Strong compare-and-swap built from one value-returning compare-and-swap.
///
/// On mismatch the observed value is written into `expected`.
#[inline]
pub(crate) fn compare_and_swap<S: SyncPrimitives, T: AtomicValue>(
    location: &Atomic<T>,
    expected: &mut T,
    desired: T,
) -> bool {
    let previous = S::val_compare_and_swap(location, *expected, desired);
    if previous == *expected {
        true
    } else {
        *expected = previous;
        false
    }
}
