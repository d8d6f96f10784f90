/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Primitive Providers
//!
//! A provider implements the complete primitive operation set on top of one
//! family of native facilities. Four families exist:
//!
//! | Provider | Facility | Width dispatch | Missing primitives |
//! |---|---|---|---|
//! | `Native` | standard atomic types | generic | none |
//! | `Builtin` | type-generic builtins on raw pointers | generic | none |
//! | `Interlocked` | one named routine per width | explicit table | ordered load/store |
//! | `LegacySync` | full barrier + value-returning CAS | generic | ordered load/store, exchange |
//!
//! Exactly one provider is bound to [`Active`] per build. The choice is made
//! by conditional compilation and never changes at runtime:
//!
//! 1. If one of the `force-builtin`, `force-interlocked` or
//!    `force-legacy-sync` features is enabled, the toolchain is treated as
//!    lacking the standard atomic facility and that family is bound.
//! 2. Otherwise, when the target has pointer-width atomics, `Native` is
//!    bound.
//! 3. Otherwise the build fails.
//!
//! Only the bound provider is compiled into a regular build.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::order::MemoryOrder;
use crate::value::{
    AtomicInteger,
    AtomicValue,
};
use crate::Atomic;

#[cfg(any(
    all(feature = "force-builtin", feature = "force-interlocked"),
    all(feature = "force-builtin", feature = "force-legacy-sync"),
    all(feature = "force-interlocked", feature = "force-legacy-sync"),
))]
compile_error!(
    "prism3-rust-atomic-ops: at most one of the `force-builtin`, `force-interlocked` and \
     `force-legacy-sync` features may be enabled"
);

#[cfg(all(
    not(any(
        feature = "force-builtin",
        feature = "force-interlocked",
        feature = "force-legacy-sync"
    )),
    not(target_has_atomic = "ptr")
))]
compile_error!(
    "prism3-rust-atomic-ops: no atomic provider is available for this target; the target \
     lacks pointer-width atomics and no fallback family was selected"
);

#[cfg(any(
    test,
    all(
        not(any(
            feature = "force-builtin",
            feature = "force-interlocked",
            feature = "force-legacy-sync"
        )),
        target_has_atomic = "ptr"
    )
))]
mod native;

#[cfg(any(test, feature = "force-builtin"))]
mod builtin;

#[cfg(any(test, feature = "force-interlocked"))]
mod interlocked;

#[cfg(any(test, feature = "force-legacy-sync"))]
mod legacy;


#[cfg(all(
    not(any(
        feature = "force-builtin",
        feature = "force-interlocked",
        feature = "force-legacy-sync"
    )),
    target_has_atomic = "ptr"
))]
pub use native::Native;

#[cfg(feature = "force-builtin")]
pub use builtin::Builtin;

#[cfg(feature = "force-interlocked")]
pub use interlocked::Interlocked;

#[cfg(feature = "force-legacy-sync")]
pub use legacy::LegacySync;

/// The provider bound for this build.
#[cfg(all(
    not(any(
        feature = "force-builtin",
        feature = "force-interlocked",
        feature = "force-legacy-sync"
    )),
    target_has_atomic = "ptr"
))]
pub type Active = Native;

/// The provider bound for this build.
#[cfg(feature = "force-builtin")]
pub type Active = Builtin;

/// The provider bound for this build.
#[cfg(feature = "force-interlocked")]
pub type Active = Interlocked;

/// The provider bound for this build.
#[cfg(feature = "force-legacy-sync")]
pub type Active = LegacySync;

/// Identifies a primitive provider family.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Standard atomic types with a native ordering vocabulary.
    Native,
    /// Type-generic builtins taking an integer memory model.
    Builtin,
    /// Named per-width routines, each read-modify-write a full barrier.
    Interlocked,
    /// Full barrier and value-returning compare-and-swap only.
    LegacySync,
}

impl Backend {
    /// Short lowercase name of this backend.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Native => "native",
            Backend::Builtin => "builtin",
            Backend::Interlocked => "interlocked",
            Backend::LegacySync => "legacy-sync",
        }
    }

    /// Returns `true` if the facility provides ordered loads and stores
    /// directly; otherwise they are built from plain accesses and
    /// barriers.
    pub const fn has_ordered_access(self) -> bool {
        matches!(self, Backend::Native | Backend::Builtin)
    }

    /// Returns `true` if exchange is emulated with a compare-and-swap retry
    /// loop, making it lock-free but not wait-free.
    pub const fn emulates_exchange(self) -> bool {
        matches!(self, Backend::LegacySync)
    }

    /// Returns `true` if the facility selects a named routine per width
    /// instead of accepting every width through one generic entry point.
    pub const fn uses_width_table(self) -> bool {
        matches!(self, Backend::Interlocked)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The primitive operation set every backend implements.
///
/// All methods are associated functions: a provider is a type, not a value,
/// and calls through [`Active`] are resolved statically.
///
/// Every implementation honors the requested ordering or a stronger one,
/// never a weaker one.
///
/// # Author
///
/// Haixing Hu
pub trait Provider {
    /// The family this provider belongs to.
    const BACKEND: Backend;

    /// Atomically reads the value of `location`.
    fn load<T: AtomicValue>(location: &Atomic<T>, order: MemoryOrder) -> T;

    /// Atomically writes `value` into `location`.
    fn store<T: AtomicValue>(location: &Atomic<T>, value: T, order: MemoryOrder);

    /// Atomically replaces the value of `location`, returning the previous
    /// value.
    fn exchange<T: AtomicValue>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T;

    /// Strong compare-and-swap.
    ///
    /// Stores `desired` and returns `true` if `location` holds `*expected`;
    /// otherwise writes the observed value into `expected` and returns
    /// `false`. Never fails spuriously.
    fn compare_and_swap<T: AtomicValue>(
        location: &Atomic<T>,
        expected: &mut T,
        desired: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool;

    /// Wrapping addition, returning the previous value.
    fn fetch_add<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T;

    /// Wrapping subtraction, returning the previous value.
    fn fetch_sub<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T;

    /// Bitwise AND, returning the previous value.
    fn fetch_and<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T;

    /// Bitwise OR, returning the previous value.
    fn fetch_or<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T;

    /// Bitwise XOR, returning the previous value.
    fn fetch_xor<T: AtomicInteger>(location: &Atomic<T>, value: T, order: MemoryOrder) -> T;

    /// Inter-thread fence, not tied to any location.
    fn thread_fence(order: MemoryOrder);

    /// Compiler-only fence, for code interrupted on the same thread such as
    /// signal handlers.
    fn signal_fence(order: MemoryOrder);
}

/// Returns the backend bound for this build.
#[inline]
pub const fn active_backend() -> Backend {
    <Active as Provider>::BACKEND
}

/// Emits a `debug` log record naming the backend bound for this build.
pub fn log_active_backend() {
    let backend = active_backend();
    log::debug!(
        "atomic primitives bound to the {} provider (ordered access: {}, emulated exchange: {})",
        backend,
        backend.has_ordered_access(),
        backend.emulates_exchange(),
    );
}
