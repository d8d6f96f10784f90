/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Location
//!
//! Provides [`Atomic<T>`], the memory cell that every primitive operation
//! acts on, and the fixed-width aliases callers declare their shared state
//! as.
//!
//! The caller owns the storage. An `Atomic<T>` is a plain value that can
//! live in a `static`, inside an `Arc`, or in any struct; memory that already
//! exists can be viewed as a location with [`Atomic::from_ptr`]. Nothing in
//! this crate allocates or retains a location.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::order::MemoryOrder;
use crate::provider::{
    Active,
    Provider,
};
use crate::value::{
    AtomicInteger,
    AtomicValue,
};

/// An atomic memory location holding a value of type `T`.
///
/// The location has the same size as `T` and the alignment required by the
/// hardware for atomic access at that width. Every access goes through the
/// provider bound for this build; each operation takes an explicit
/// [`MemoryOrder`]. Named ordering presets live in [`facade`](crate::facade).
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::{AtomicI32, MemoryOrder};
/// use std::sync::Arc;
/// use std::thread;
///
/// let counter = Arc::new(AtomicI32::new(0));
/// let mut handles = vec![];
///
/// for _ in 0..10 {
///     let counter = counter.clone();
///     let handle = thread::spawn(move || {
///         for _ in 0..100 {
///             counter.fetch_add(1, MemoryOrder::Relaxed);
///         }
///     });
///     handles.push(handle);
/// }
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(counter.load(MemoryOrder::Acquire), 1000);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct Atomic<T: AtomicValue> {
    native: T::Native,
}

/// Atomic 8-bit signed integer location.
pub type AtomicI8 = Atomic<i8>;
/// Atomic 8-bit unsigned integer location.
pub type AtomicU8 = Atomic<u8>;
/// Atomic 16-bit signed integer location.
pub type AtomicI16 = Atomic<i16>;
/// Atomic 16-bit unsigned integer location.
pub type AtomicU16 = Atomic<u16>;
/// Atomic 32-bit signed integer location.
pub type AtomicI32 = Atomic<i32>;
/// Atomic 32-bit unsigned integer location.
pub type AtomicU32 = Atomic<u32>;
/// Atomic 64-bit signed integer location.
pub type AtomicI64 = Atomic<i64>;
/// Atomic 64-bit unsigned integer location.
pub type AtomicU64 = Atomic<u64>;
/// Atomic pointer-sized signed integer location.
pub type AtomicIsize = Atomic<isize>;
/// Atomic pointer-sized unsigned integer location.
pub type AtomicUsize = Atomic<usize>;
/// Atomic raw pointer location.
pub type AtomicPtr<U> = Atomic<*mut U>;

impl<T: AtomicValue> Atomic<T> {
    /// Views caller-owned memory as an atomic location.
    ///
    /// # Parameters
    ///
    /// * `ptr` - Address of the value to operate on.
    ///
    /// # Safety
    ///
    /// - `ptr` must be non-null and aligned to `align_of::<Atomic<T>>()`,
    ///   which can be stricter than `align_of::<T>()`.
    /// - `ptr` must be valid for reads and writes for the whole lifetime
    ///   `'a`.
    /// - For the duration of `'a`, the value must not be accessed except
    ///   through this crate's operations (no plain reads or writes racing
    ///   with them).
    #[inline]
    pub unsafe fn from_ptr<'a>(ptr: *mut T) -> &'a Atomic<T> {
        // SAFETY: `Atomic<T>` is `repr(transparent)` over the native cell,
        // which has the size of `T`; alignment and validity are guaranteed
        // by the caller.
        unsafe { &*ptr.cast::<Atomic<T>>() }
    }

    /// Returns the address of the value held by this location.
    ///
    /// The pointer is only valid while `self` is alive, and any access
    /// through it must itself be atomic.
    #[inline]
    pub fn as_ptr(&self) -> *mut T {
        T::native_as_ptr(&self.native)
    }

    /// Returns the native atomic cell backing this location.
    #[cfg(any(
        test,
        not(any(feature = "force-builtin", feature = "force-interlocked"))
    ))]
    #[inline]
    pub(crate) fn native(&self) -> &T::Native {
        &self.native
    }

    /// Returns a mutable reference to the value.
    ///
    /// Exclusive access guarantees no other thread can observe the
    /// location, so no atomic operation is needed.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        T::native_get_mut(&mut self.native)
    }

    /// Consumes the location and returns the value.
    #[inline]
    pub fn into_inner(self) -> T {
        T::native_into_inner(self.native)
    }

    /// Loads the current value.
    ///
    /// # Parameters
    ///
    /// * `order` - The memory ordering of the load.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn load(&self, order: MemoryOrder) -> T {
        Active::load(self, order)
    }

    /// Stores a new value.
    ///
    /// # Parameters
    ///
    /// * `value` - The value to store.
    /// * `order` - The memory ordering of the store.
    #[inline]
    pub fn store(&self, value: T, order: MemoryOrder) {
        Active::store(self, value, order);
    }

    /// Replaces the value, returning the previous one.
    ///
    /// # Parameters
    ///
    /// * `value` - The value to store.
    /// * `order` - The memory ordering of the exchange.
    ///
    /// # Returns
    ///
    /// The value held before the exchange.
    #[inline]
    pub fn exchange(&self, value: T, order: MemoryOrder) -> T {
        Active::exchange(self, value, order)
    }

    /// Strong compare-and-swap.
    ///
    /// If the location holds `*expected`, stores `desired` and returns
    /// `true`. Otherwise writes the value actually observed into `expected`
    /// and returns `false`. Never fails spuriously.
    ///
    /// # Parameters
    ///
    /// * `expected` - The value the location is expected to hold; updated
    ///   with the observed value on failure.
    /// * `desired` - The value to store on success.
    /// * `success` - The memory ordering of the successful read-modify-write.
    /// * `failure` - The memory ordering of the read on failure.
    ///
    /// # Returns
    ///
    /// `true` if `desired` was stored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_ops::{AtomicU8, MemoryOrder};
    ///
    /// let atomic = AtomicU8::new(5);
    /// let mut expected = 4;
    /// assert!(!atomic.compare_and_swap(
    ///     &mut expected,
    ///     9,
    ///     MemoryOrder::AcqRel,
    ///     MemoryOrder::Acquire,
    /// ));
    /// assert_eq!(expected, 5);
    /// assert!(atomic.compare_and_swap(
    ///     &mut expected,
    ///     9,
    ///     MemoryOrder::AcqRel,
    ///     MemoryOrder::Acquire,
    /// ));
    /// assert_eq!(atomic.load(MemoryOrder::Relaxed), 9);
    /// ```
    #[inline]
    pub fn compare_and_swap(
        &self,
        expected: &mut T,
        desired: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool {
        Active::compare_and_swap(self, expected, desired, success, failure)
    }

    /// Compare-and-swap reporting the outcome as a `Result`.
    ///
    /// # Parameters
    ///
    /// * `current` - The value the location is expected to hold.
    /// * `new` - The value to store on success.
    /// * `success` - The memory ordering of the successful read-modify-write.
    /// * `failure` - The memory ordering of the read on failure.
    ///
    /// # Returns
    ///
    /// `Ok(current)` if `new` was stored, or `Err(actual)` with the value
    /// observed instead.
    #[inline]
    pub fn compare_exchange(
        &self,
        current: T,
        new: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> Result<T, T> {
        let mut expected = current;
        if self.compare_and_swap(&mut expected, new, success, failure) {
            Ok(current)
        } else {
            Err(expected)
        }
    }
}

impl<T: AtomicInteger> Atomic<T> {
    /// Adds to the value, returning the previous value.
    ///
    /// Wraps around on overflow.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    /// * `order` - The memory ordering of the operation.
    ///
    /// # Returns
    ///
    /// The value before the addition.
    #[inline]
    pub fn fetch_add(&self, delta: T, order: MemoryOrder) -> T {
        Active::fetch_add(self, delta, order)
    }

    /// Subtracts from the value, returning the previous value.
    ///
    /// Wraps around on overflow.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to subtract.
    /// * `order` - The memory ordering of the operation.
    ///
    /// # Returns
    ///
    /// The value before the subtraction.
    #[inline]
    pub fn fetch_sub(&self, delta: T, order: MemoryOrder) -> T {
        Active::fetch_sub(self, delta, order)
    }

    /// Bitwise AND with the value, returning the previous value.
    ///
    /// # Parameters
    ///
    /// * `operand` - The right-hand operand.
    /// * `order` - The memory ordering of the operation.
    ///
    /// # Returns
    ///
    /// The value before the operation.
    #[inline]
    pub fn fetch_and(&self, operand: T, order: MemoryOrder) -> T {
        Active::fetch_and(self, operand, order)
    }

    /// Bitwise OR with the value, returning the previous value.
    ///
    /// # Parameters
    ///
    /// * `operand` - The right-hand operand.
    /// * `order` - The memory ordering of the operation.
    ///
    /// # Returns
    ///
    /// The value before the operation.
    #[inline]
    pub fn fetch_or(&self, operand: T, order: MemoryOrder) -> T {
        Active::fetch_or(self, operand, order)
    }

    /// Bitwise XOR with the value, returning the previous value.
    ///
    /// # Parameters
    ///
    /// * `operand` - The right-hand operand.
    /// * `order` - The memory ordering of the operation.
    ///
    /// # Returns
    ///
    /// The value before the operation.
    #[inline]
    pub fn fetch_xor(&self, operand: T, order: MemoryOrder) -> T {
        Active::fetch_xor(self, operand, order)
    }
}

/// Generates the `const` constructors of the integer locations.
macro_rules! impl_const_new {
    ($($value_type:ty => $native_type:ty),+ $(,)?) => {
        $(
            impl Atomic<$value_type> {
                /// Creates a new location holding `value`.
                ///
                /// # Parameters
                ///
                /// * `value` - The initial value.
                #[inline]
                pub const fn new(value: $value_type) -> Self {
                    Self {
                        native: <$native_type>::new(value),
                    }
                }
            }
        )+
    };
}

#[cfg(target_has_atomic = "8")]
impl_const_new!(
    i8 => std::sync::atomic::AtomicI8,
    u8 => std::sync::atomic::AtomicU8,
);

#[cfg(target_has_atomic = "16")]
impl_const_new!(
    i16 => std::sync::atomic::AtomicI16,
    u16 => std::sync::atomic::AtomicU16,
);

#[cfg(target_has_atomic = "32")]
impl_const_new!(
    i32 => std::sync::atomic::AtomicI32,
    u32 => std::sync::atomic::AtomicU32,
);

#[cfg(target_has_atomic = "64")]
impl_const_new!(
    i64 => std::sync::atomic::AtomicI64,
    u64 => std::sync::atomic::AtomicU64,
);

#[cfg(target_has_atomic = "ptr")]
impl_const_new!(
    isize => std::sync::atomic::AtomicIsize,
    usize => std::sync::atomic::AtomicUsize,
);

#[cfg(target_has_atomic = "ptr")]
impl<U> Atomic<*mut U> {
    /// Creates a new location holding `ptr`.
    ///
    /// # Parameters
    ///
    /// * `ptr` - The initial pointer.
    #[inline]
    pub const fn new(ptr: *mut U) -> Self {
        Self {
            native: std::sync::atomic::AtomicPtr::new(ptr),
        }
    }

    /// Creates a new location holding a null pointer.
    #[inline]
    pub const fn null() -> Self {
        Self::new(std::ptr::null_mut())
    }
}

impl<T: AtomicInteger> Default for Atomic<T> {
    #[inline]
    fn default() -> Self {
        Self::from(T::ZERO)
    }
}

impl<T: AtomicValue> From<T> for Atomic<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self {
            native: T::new_native(value),
        }
    }
}

impl<T: AtomicValue> fmt::Debug for Atomic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Atomic")
            .field("value", &self.load(MemoryOrder::Relaxed))
            .finish()
    }
}

impl<T: AtomicInteger> fmt::Display for Atomic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load(MemoryOrder::Relaxed))
    }
}
