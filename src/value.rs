/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Value Types
//!
//! Defines the closed set of value types an atomic location may hold and the
//! width each of them occupies. Two dispatch strategies are built on top of
//! these traits:
//!
//! - **Generic dispatch**: every value type names its native atomic cell
//!   through [`AtomicValue::Native`] and forwards each primitive to it, so a
//!   provider never has to select a width explicitly.
//! - **Table dispatch**: every value type exposes its [`Width`] as an
//!   associated constant together with a lossless conversion to and from its
//!   raw bit pattern, so a provider with one named routine per width can pick
//!   the routine at compile time.
//!
//! Both traits are sealed. A type with no matching width cannot implement
//! them, which turns an unsupported width into a compile error.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::mem;
use std::sync::atomic::{
    AtomicPtr,
    Ordering,
};

mod private {
    pub trait Sealed {}
}

/// Bit-width of an atomic location.
///
/// Pointer-sized and size-sized values report [`Width::W32`] or
/// [`Width::W64`] according to the target pointer width.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 8-bit location.
    W8,
    /// 16-bit location.
    W16,
    /// 32-bit location.
    W32,
    /// 64-bit location.
    W64,
}

impl Width {
    /// Resolves the width of `T` from its size.
    ///
    /// Evaluated in constant context by [`AtomicValue::WIDTH`]; a size with
    /// no matching width aborts compilation.
    ///
    /// # Returns
    ///
    /// The width whose byte count equals `size_of::<T>()`.
    pub const fn of<T>() -> Width {
        match mem::size_of::<T>() {
            1 => Width::W8,
            2 => Width::W16,
            4 => Width::W32,
            8 => Width::W64,
            _ => panic!("no atomic width matches the size of this type"),
        }
    }

    /// Number of bits in this width.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Number of bytes in this width.
    #[inline]
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// A value type that can be held by an [`Atomic`](crate::Atomic) location.
///
/// Implemented for the 8, 16, 32 and 64-bit integers (signed and unsigned),
/// `isize`, `usize` and raw mutable pointers, subject to the target's
/// `target_has_atomic` support. The trait is sealed.
///
/// The `native_*` methods are the generic-dispatch entry points: they forward
/// to the native atomic cell with an already-translated ordering and are
/// meant for primitive providers, not for application code.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicValue: Copy + PartialEq + fmt::Debug + private::Sealed {
    /// The native atomic cell that stores this value.
    type Native: Send + Sync;

    /// The width of this value type, resolved at compile time.
    const WIDTH: Width;

    /// Wraps `value` in a new native cell.
    fn new_native(value: Self) -> Self::Native;

    /// Unwraps a native cell.
    fn native_into_inner(native: Self::Native) -> Self;

    /// Borrows the value of an exclusively owned native cell.
    fn native_get_mut(native: &mut Self::Native) -> &mut Self;

    /// Returns the address of the value inside a native cell.
    fn native_as_ptr(native: &Self::Native) -> *mut Self;

    /// Converts this value into its raw bit pattern, zero- or sign-extended
    /// to 64 bits. Only the low [`Self::WIDTH`] bits are significant.
    fn into_bits(self) -> u64;

    /// Rebuilds a value from the low [`Self::WIDTH`] bits of `bits`.
    fn from_bits(bits: u64) -> Self;

    /// Atomically loads the value of a native cell.
    fn native_load(native: &Self::Native, order: Ordering) -> Self;

    /// Atomically stores into a native cell.
    fn native_store(native: &Self::Native, value: Self, order: Ordering);

    /// Atomically swaps the value of a native cell, returning the old value.
    fn native_swap(native: &Self::Native, value: Self, order: Ordering) -> Self;

    /// Strong compare-and-exchange on a native cell.
    ///
    /// Returns `Ok(previous)` if the cell held `current` and now holds `new`,
    /// or `Err(actual)` otherwise.
    fn native_compare_exchange(
        native: &Self::Native,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;

    /// Weak compare-and-exchange on a native cell; may fail spuriously.
    fn native_compare_exchange_weak(
        native: &Self::Native,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;
}

/// An integer value type supporting atomic arithmetic and bitwise
/// read-modify-write operations.
///
/// All arithmetic wraps around at the boundary of the type's width.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicInteger: AtomicValue + Eq + fmt::Display {
    /// The value zero.
    const ZERO: Self;

    /// The value one.
    const ONE: Self;

    /// Two's-complement negation, wrapping at the type's width.
    fn wrapping_neg(self) -> Self;

    /// Atomically adds to a native cell, returning the previous value.
    fn native_fetch_add(native: &Self::Native, value: Self, order: Ordering) -> Self;

    /// Atomically subtracts from a native cell, returning the previous
    /// value.
    fn native_fetch_sub(native: &Self::Native, value: Self, order: Ordering) -> Self;

    /// Atomic bitwise AND on a native cell, returning the previous value.
    fn native_fetch_and(native: &Self::Native, value: Self, order: Ordering) -> Self;

    /// Atomic bitwise OR on a native cell, returning the previous value.
    fn native_fetch_or(native: &Self::Native, value: Self, order: Ordering) -> Self;

    /// Atomic bitwise XOR on a native cell, returning the previous value.
    fn native_fetch_xor(native: &Self::Native, value: Self, order: Ordering) -> Self;
}

/// Implements [`AtomicValue`] and [`AtomicInteger`] for an integer type
/// backed by the given native atomic cell.
macro_rules! impl_atomic_integer_value {
    ($value_type:ty, $native_type:ty) => {
        impl private::Sealed for $value_type {}

        impl AtomicValue for $value_type {
            type Native = $native_type;

            const WIDTH: Width = Width::of::<$value_type>();

            #[inline]
            fn new_native(value: Self) -> Self::Native {
                <$native_type>::new(value)
            }

            #[inline]
            fn native_into_inner(native: Self::Native) -> Self {
                native.into_inner()
            }

            #[inline]
            fn native_get_mut(native: &mut Self::Native) -> &mut Self {
                native.get_mut()
            }

            #[inline]
            fn native_as_ptr(native: &Self::Native) -> *mut Self {
                native.as_ptr()
            }

            #[inline]
            fn into_bits(self) -> u64 {
                self as u64
            }

            #[inline]
            fn from_bits(bits: u64) -> Self {
                bits as $value_type
            }

            #[inline]
            fn native_load(native: &Self::Native, order: Ordering) -> Self {
                native.load(order)
            }

            #[inline]
            fn native_store(native: &Self::Native, value: Self, order: Ordering) {
                native.store(value, order);
            }

            #[inline]
            fn native_swap(native: &Self::Native, value: Self, order: Ordering) -> Self {
                native.swap(value, order)
            }

            #[inline]
            fn native_compare_exchange(
                native: &Self::Native,
                current: Self,
                new: Self,
                success: Ordering,
                failure: Ordering,
            ) -> Result<Self, Self> {
                native.compare_exchange(current, new, success, failure)
            }

            #[inline]
            fn native_compare_exchange_weak(
                native: &Self::Native,
                current: Self,
                new: Self,
                success: Ordering,
                failure: Ordering,
            ) -> Result<Self, Self> {
                native.compare_exchange_weak(current, new, success, failure)
            }
        }

        impl AtomicInteger for $value_type {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn wrapping_neg(self) -> Self {
                <$value_type>::wrapping_neg(self)
            }

            #[inline]
            fn native_fetch_add(native: &Self::Native, value: Self, order: Ordering) -> Self {
                native.fetch_add(value, order)
            }

            #[inline]
            fn native_fetch_sub(native: &Self::Native, value: Self, order: Ordering) -> Self {
                native.fetch_sub(value, order)
            }

            #[inline]
            fn native_fetch_and(native: &Self::Native, value: Self, order: Ordering) -> Self {
                native.fetch_and(value, order)
            }

            #[inline]
            fn native_fetch_or(native: &Self::Native, value: Self, order: Ordering) -> Self {
                native.fetch_or(value, order)
            }

            #[inline]
            fn native_fetch_xor(native: &Self::Native, value: Self, order: Ordering) -> Self {
                native.fetch_xor(value, order)
            }
        }
    };
}

#[cfg(target_has_atomic = "8")]
mod impl8 {
    use super::*;
    use std::sync::atomic::{
        AtomicI8,
        AtomicU8,
    };

    impl_atomic_integer_value!(i8, AtomicI8);
    impl_atomic_integer_value!(u8, AtomicU8);
}

#[cfg(target_has_atomic = "16")]
mod impl16 {
    use super::*;
    use std::sync::atomic::{
        AtomicI16,
        AtomicU16,
    };

    impl_atomic_integer_value!(i16, AtomicI16);
    impl_atomic_integer_value!(u16, AtomicU16);
}

#[cfg(target_has_atomic = "32")]
mod impl32 {
    use super::*;
    use std::sync::atomic::{
        AtomicI32,
        AtomicU32,
    };

    impl_atomic_integer_value!(i32, AtomicI32);
    impl_atomic_integer_value!(u32, AtomicU32);
}

#[cfg(target_has_atomic = "64")]
mod impl64 {
    use super::*;
    use std::sync::atomic::{
        AtomicI64,
        AtomicU64,
    };

    impl_atomic_integer_value!(i64, AtomicI64);
    impl_atomic_integer_value!(u64, AtomicU64);
}

#[cfg(target_has_atomic = "ptr")]
mod implptr {
    use super::*;
    use std::sync::atomic::{
        AtomicIsize,
        AtomicUsize,
    };

    impl_atomic_integer_value!(isize, AtomicIsize);
    impl_atomic_integer_value!(usize, AtomicUsize);
}

#[cfg(target_has_atomic = "ptr")]
impl<U> private::Sealed for *mut U {}

#[cfg(target_has_atomic = "ptr")]
impl<U> AtomicValue for *mut U {
    type Native = AtomicPtr<U>;

    const WIDTH: Width = Width::of::<*mut U>();

    #[inline]
    fn new_native(value: Self) -> Self::Native {
        AtomicPtr::new(value)
    }

    #[inline]
    fn native_into_inner(native: Self::Native) -> Self {
        native.into_inner()
    }

    #[inline]
    fn native_get_mut(native: &mut Self::Native) -> &mut Self {
        native.get_mut()
    }

    #[inline]
    fn native_as_ptr(native: &Self::Native) -> *mut Self {
        native.as_ptr()
    }

    // The address round-trips through the integer routines of the
    // interlocked table. Both casts expose the pointer's provenance on
    // purpose, so the pointer rebuilt by `from_bits` may be dereferenced.
    #[inline]
    fn into_bits(self) -> u64 {
        self as usize as u64
    }

    #[inline]
    fn from_bits(bits: u64) -> Self {
        bits as usize as *mut U
    }

    #[inline]
    fn native_load(native: &Self::Native, order: Ordering) -> Self {
        native.load(order)
    }

    #[inline]
    fn native_store(native: &Self::Native, value: Self, order: Ordering) {
        native.store(value, order);
    }

    #[inline]
    fn native_swap(native: &Self::Native, value: Self, order: Ordering) -> Self {
        native.swap(value, order)
    }

    #[inline]
    fn native_compare_exchange(
        native: &Self::Native,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self> {
        native.compare_exchange(current, new, success, failure)
    }

    #[inline]
    fn native_compare_exchange_weak(
        native: &Self::Native,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self> {
        native.compare_exchange_weak(current, new, success, failure)
    }
}
