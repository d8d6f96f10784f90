/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Memory Order Model
//!
//! Defines the six canonical memory orderings and their mapping onto the
//! vocabularies used by the primitive providers: the native
//! [`Ordering`](std::sync::atomic::Ordering) enumeration, and a synthesized
//! [`BarrierPolicy`] for providers that have no ordering concept at the
//! instruction level.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::Ordering;

use crate::error::OrderError;

/// Canonical memory ordering passed to every primitive operation.
///
/// The orderings form a partial strength order: `Relaxed` is the weakest and
/// `SeqCst` the strongest. `Acquire` and `Release` are incomparable, and
/// `AcqRel` combines both. `Consume` is treated as `Acquire` by every
/// backend.
///
/// The discriminants (0 to 5) are stable and match the integer memory model
/// constants of the generic-builtin family.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::{AtomicU32, MemoryOrder};
///
/// let flag = AtomicU32::new(0);
/// flag.store(1, MemoryOrder::Release);
/// assert_eq!(flag.load(MemoryOrder::Acquire), 1);
/// ```
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MemoryOrder {
    /// Atomicity only, no ordering constraints.
    Relaxed = 0,
    /// Dependency ordering; implemented as `Acquire`.
    Consume = 1,
    /// Later accesses cannot move before this read.
    Acquire = 2,
    /// Earlier accesses cannot move after this write.
    Release = 3,
    /// `Acquire` and `Release` combined, for read-modify-write operations.
    AcqRel = 4,
    /// `AcqRel` plus a single total order observed by all threads.
    SeqCst = 5,
}

impl MemoryOrder {
    /// All orderings, weakest first.
    pub const ALL: [MemoryOrder; 6] = [
        MemoryOrder::Relaxed,
        MemoryOrder::Consume,
        MemoryOrder::Acquire,
        MemoryOrder::Release,
        MemoryOrder::AcqRel,
        MemoryOrder::SeqCst,
    ];

    /// Maps this ordering onto the native atomic ordering.
    ///
    /// `Consume` has no native counterpart and becomes `Acquire`.
    #[inline]
    pub const fn to_std(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Consume | MemoryOrder::Acquire => Ordering::Acquire,
            MemoryOrder::Release => Ordering::Release,
            MemoryOrder::AcqRel => Ordering::AcqRel,
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// Maps this ordering onto a native ordering that is legal for a pure
    /// read: a load, or the failure path of a compare-and-swap.
    ///
    /// A read has no release side, so the release component of `Release`
    /// and `AcqRel` is dropped while any acquire component is kept. The
    /// native facility rejects release orderings on reads, and callers are
    /// not required to avoid them.
    #[inline]
    pub const fn to_std_load(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed | MemoryOrder::Release => Ordering::Relaxed,
            MemoryOrder::Consume | MemoryOrder::Acquire | MemoryOrder::AcqRel => {
                Ordering::Acquire
            }
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// Maps this ordering onto a native ordering that is legal for a pure
    /// write.
    ///
    /// The acquire component of `Consume`, `Acquire` and `AcqRel` has no
    /// meaning on a write and is dropped; any release component is kept.
    #[inline]
    pub const fn to_std_store(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed | MemoryOrder::Consume | MemoryOrder::Acquire => {
                Ordering::Relaxed
            }
            MemoryOrder::Release | MemoryOrder::AcqRel => Ordering::Release,
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// Returns the strongest ordering that is legal as a failure ordering
    /// for a compare-and-swap using `self` on success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_ops::MemoryOrder;
    ///
    /// assert_eq!(MemoryOrder::AcqRel.failure_order(), MemoryOrder::Acquire);
    /// assert_eq!(MemoryOrder::Release.failure_order(), MemoryOrder::Relaxed);
    /// ```
    #[inline]
    pub const fn failure_order(self) -> MemoryOrder {
        match self {
            MemoryOrder::Relaxed | MemoryOrder::Release => MemoryOrder::Relaxed,
            MemoryOrder::Consume => MemoryOrder::Consume,
            MemoryOrder::Acquire | MemoryOrder::AcqRel => MemoryOrder::Acquire,
            MemoryOrder::SeqCst => MemoryOrder::SeqCst,
        }
    }

    /// Rank of this ordering in the strength order.
    ///
    /// `Relaxed` is 0, `Consume`, `Acquire` and `Release` are 1,
    /// `AcqRel` is 2 and `SeqCst` is 3. Equal ranks are not necessarily
    /// comparable; use [`is_at_least`](Self::is_at_least) for that.
    #[inline]
    pub const fn strength(self) -> u8 {
        match self {
            MemoryOrder::Relaxed => 0,
            MemoryOrder::Consume | MemoryOrder::Acquire | MemoryOrder::Release => 1,
            MemoryOrder::AcqRel => 2,
            MemoryOrder::SeqCst => 3,
        }
    }

    /// Returns `true` if this ordering reads with acquire semantics.
    #[inline]
    pub const fn has_acquire(self) -> bool {
        matches!(
            self,
            MemoryOrder::Consume
                | MemoryOrder::Acquire
                | MemoryOrder::AcqRel
                | MemoryOrder::SeqCst
        )
    }

    /// Returns `true` if this ordering writes with release semantics.
    #[inline]
    pub const fn has_release(self) -> bool {
        matches!(
            self,
            MemoryOrder::Release | MemoryOrder::AcqRel | MemoryOrder::SeqCst
        )
    }

    /// Returns `true` if this ordering provides every guarantee `other`
    /// provides.
    ///
    /// # Parameters
    ///
    /// * `other` - The ordering to compare against.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_ops::MemoryOrder;
    ///
    /// assert!(MemoryOrder::SeqCst.is_at_least(MemoryOrder::Release));
    /// assert!(!MemoryOrder::Acquire.is_at_least(MemoryOrder::Release));
    /// ```
    #[inline]
    pub const fn is_at_least(self, other: MemoryOrder) -> bool {
        if matches!(self, MemoryOrder::SeqCst) {
            return true;
        }
        if matches!(other, MemoryOrder::SeqCst) {
            return false;
        }
        (self.has_acquire() || !other.has_acquire())
            && (self.has_release() || !other.has_release())
    }

    /// Canonical lowercase name of this ordering.
    pub const fn name(self) -> &'static str {
        match self {
            MemoryOrder::Relaxed => "relaxed",
            MemoryOrder::Consume => "consume",
            MemoryOrder::Acquire => "acquire",
            MemoryOrder::Release => "release",
            MemoryOrder::AcqRel => "acq_rel",
            MemoryOrder::SeqCst => "seq_cst",
        }
    }
}

impl Default for MemoryOrder {
    #[inline]
    fn default() -> Self {
        MemoryOrder::SeqCst
    }
}

impl From<MemoryOrder> for Ordering {
    #[inline]
    fn from(order: MemoryOrder) -> Self {
        order.to_std()
    }
}

impl TryFrom<u8> for MemoryOrder {
    type Error = OrderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MemoryOrder::ALL
            .get(value as usize)
            .copied()
            .ok_or(OrderError::InvalidDiscriminant(value))
    }
}

impl FromStr for MemoryOrder {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        MemoryOrder::ALL
            .iter()
            .copied()
            .find(|order| order.name() == normalized)
            .ok_or_else(|| OrderError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for MemoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full barriers to issue around a plain access so that it behaves as an
/// ordered access.
///
/// Used by providers whose only ordering tool is a full hardware barrier.
/// The policy never yields a weaker access than requested; it is allowed to
/// be stronger.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarrierPolicy {
    /// Issue a full barrier before the access.
    pub leading: bool,
    /// Issue a full barrier after the access.
    pub trailing: bool,
}

impl BarrierPolicy {
    /// No barriers: a relaxed access.
    pub const NONE: BarrierPolicy = BarrierPolicy {
        leading: false,
        trailing: false,
    };

    /// Barrier policy for an ordered load.
    ///
    /// Any non-relaxed load is preceded by a full barrier; loads with an
    /// acquire component are also followed by one, so later accesses cannot
    /// move above the read.
    ///
    /// # Parameters
    ///
    /// * `order` - The requested load ordering.
    #[inline]
    pub const fn for_load(order: MemoryOrder) -> BarrierPolicy {
        BarrierPolicy {
            leading: !matches!(order, MemoryOrder::Relaxed),
            trailing: order.has_acquire(),
        }
    }

    /// Barrier policy for an ordered store.
    ///
    /// Any non-relaxed store is preceded by a full barrier; only `SeqCst`
    /// stores are followed by one.
    ///
    /// # Parameters
    ///
    /// * `order` - The requested store ordering.
    #[inline]
    pub const fn for_store(order: MemoryOrder) -> BarrierPolicy {
        BarrierPolicy {
            leading: !matches!(order, MemoryOrder::Relaxed),
            trailing: matches!(order, MemoryOrder::SeqCst),
        }
    }
}
