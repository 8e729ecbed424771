// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search bound estimation.
//!
//! The sieve needs an upper limit X on the value of the n-th prime before it
//! starts, because X fixes the segment width. Any over-estimate works; an
//! under-estimate would leave the sieve short of primes.
//!
//! # Method
//!
//! The prime-counting function π(x) is approximately x / ln(x). Rather than
//! solving x / ln(x) = n, which has no closed form, we start at x = n and
//! double until x / ln(x) ≥ 2n. Above the threshold the gap between the
//! approximation and π(x) is less than x, so aiming for 2n is enough to
//! guarantee π(X) > n.
//!
//! Below the threshold the approximation is not reliable, and a fixed bound
//! covers every small index.

use log::debug;

use crate::error::{Result, SieveError};

/// Indices below this use [`SMALL_INDEX_BOUND`].
pub const SMALL_INDEX_THRESHOLD: u64 = 229;

/// Fixed bound for small indices. π(2000) = 303, comfortably above the threshold.
pub const SMALL_INDEX_BOUND: u64 = 2000;

/// Estimate an upper bound X such that more than `n` primes lie below X.
///
/// Fails with [`SieveError::BoundOverflow`] when doubling the guess leaves
/// the 64-bit range.
///
/// # Example
///
/// ```
/// use nth_prime_sieve::estimate::estimate;
///
/// assert_eq!(estimate(0).unwrap(), 2000);
/// assert!(estimate(1_000_000).unwrap() > 15_485_867);
/// ```
pub fn estimate(n: u64) -> Result<u64> {
    if n < SMALL_INDEX_THRESHOLD {
        return Ok(SMALL_INDEX_BOUND);
    }

    let target = 2.0 * n as f64;
    let mut guess = n;
    let mut doublings = 0u32;
    while (guess as f64) / (guess as f64).ln() < target {
        guess = guess
            .checked_mul(2)
            .ok_or(SieveError::BoundOverflow { index: n })?;
        doublings += 1;
    }

    debug!(
        "Estimated bound {} for index {} after {} doublings",
        guess, n, doublings
    );
    Ok(guess)
}

/// Smallest integer `r` with `r * r >= x`.
///
/// Seeded from floating point and corrected in integers, so the result stays
/// exact where `f64` rounds.
pub fn ceil_sqrt(x: u64) -> u64 {
    let mut root = (x as f64).sqrt().ceil() as u64;
    while root > 0 && (root - 1).checked_mul(root - 1).map_or(true, |sq| sq >= x) {
        root -= 1;
    }
    while root.checked_mul(root).map_or(false, |sq| sq < x) {
        root += 1;
    }
    root
}

/// An estimated bound together with the segment width it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBound {
    /// Zero-based index of the prime being searched for.
    pub index: u64,

    /// Upper limit X on the value of the prime at `index`.
    pub value: u64,

    /// Segment width, ⌈√X⌉.
    pub width: u64,
}

impl SearchBound {
    /// Estimate the bound for `index` and check its segment width against `max_width`.
    ///
    /// Fails with [`SieveError::SegmentTooWide`] before anything is allocated
    /// when the width reaches `max_width`.
    pub fn for_index(index: u64, max_width: u64) -> Result<Self> {
        let value = estimate(index)?;
        let width = ceil_sqrt(value);
        if width >= max_width {
            return Err(SieveError::SegmentTooWide {
                index,
                bound: value,
                width,
                limit: max_width,
            });
        }
        debug!("Index {}: bound {}, segment width {}", index, value, width);
        Ok(Self {
            index,
            value,
            width,
        })
    }

    /// Last window start the sieve will visit (`width * width`).
    pub fn last_start(&self) -> u64 {
        self.width * self.width
    }
}
