/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Errors
//!
//! The primitive operations never fail at runtime: a failed compare-and-swap
//! is reported through its `false` result, and a missing backend is a build
//! error. The only runtime error channel is decoding a [`MemoryOrder`] from an
//! external representation.
//!
//! [`MemoryOrder`]: crate::MemoryOrder
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

/// Error returned when a memory ordering cannot be decoded.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The numeric tag is outside the `0..=5` range of the canonical
    /// orderings.
    #[error("invalid memory order discriminant: {0}")]
    InvalidDiscriminant(u8),

    /// The name does not match any canonical ordering.
    #[error("unknown memory order name: {0:?}")]
    UnknownName(String),
}
