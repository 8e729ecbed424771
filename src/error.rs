// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the n-th prime sieve.

use thiserror::Error;

/// Errors reported by [`crate::nth_prime`] and friends.
///
/// Only the first three variants are caller errors (invalid arguments).
/// [`SieveError::BoundExhausted`] means the bound estimate was too small,
/// which is a bug in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SieveError {
    /// The requested index was negative.
    #[error("Invalid argument: index must be non-negative, got {0}")]
    NegativeIndex(i64),

    /// The segment width for this index would need an impractically large allocation.
    #[error(
        "Invalid argument: index {index} needs a segment of width {width} \
         (bound {bound}), the limit is {limit}"
    )]
    SegmentTooWide {
        index: u64,
        bound: u64,
        width: u64,
        limit: u64,
    },

    /// Doubling the bound estimate overflowed 64-bit arithmetic.
    #[error("Invalid argument: index {index} is too large to estimate a search bound")]
    BoundOverflow { index: u64 },

    /// Every window up to the bound was sieved without reaching the index.
    #[error(
        "Internal error: bound {bound} held only {found} primes while looking for index {index} \
         (last prime {last_prime:?})"
    )]
    BoundExhausted {
        index: u64,
        bound: u64,
        found: u64,
        last_prime: Option<u64>,
    },
}

impl SieveError {
    /// True for errors caused by the caller's argument rather than by a bug.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, SieveError::BoundExhausted { .. })
    }
}

/// A convenience `Result` type alias using the crate's `SieveError` type.
pub type Result<T> = std::result::Result<T, SieveError>;
