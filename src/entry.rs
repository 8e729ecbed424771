// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Entry points: validate the index, estimate the bound, run the sieve.

use log::info;

use crate::context::{SieveContext, SieveOptions};
use crate::engine::SegmentedSieve;
use crate::error::{Result, SieveError};
use crate::estimate::SearchBound;
use crate::state::{Counters, KnownPrimes, Statistics};

/// Anything that can answer "what is the n-th prime?".
pub trait NthPrime {
    /// The prime at zero-based index `n`: 0 → 2, 1 → 3, ...
    fn nth_prime(&self, n: i64) -> Result<u64>;
}

/// [`NthPrime`] backed by the segmented sieve.
#[derive(Debug, Clone, Copy, Default)]
pub struct SieveImplementation {
    options: SieveOptions,
}

impl SieveImplementation {
    pub fn new(options: SieveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SieveOptions {
        &self.options
    }
}

impl NthPrime for SieveImplementation {
    fn nth_prime(&self, n: i64) -> Result<u64> {
        nth_prime_with(n, &self.options).map(|report| report.prime)
    }
}

/// Everything a sieve run produced, not just the prime.
#[derive(Debug, Clone)]
pub struct SieveReport {
    /// The prime at the requested index.
    pub prime: u64,

    /// The bound and segment width the run used.
    pub bound: SearchBound,

    /// Primes retained for sieving, per the retention policy.
    pub known: KnownPrimes,

    pub statistics: Statistics,
}

/// The prime at zero-based index `n`, with default options.
///
/// # Errors
///
/// - [`SieveError::NegativeIndex`] if `n < 0`
/// - [`SieveError::SegmentTooWide`] or [`SieveError::BoundOverflow`] if `n`
///   is too large to sieve in memory
///
/// # Example
///
/// ```
/// use nth_prime_sieve::nth_prime;
///
/// assert_eq!(nth_prime(0).unwrap(), 2);
/// assert_eq!(nth_prime(99).unwrap(), 541);
/// assert!(nth_prime(-1).unwrap_err().is_invalid_argument());
/// ```
pub fn nth_prime(n: i64) -> Result<u64> {
    nth_prime_with(n, &SieveOptions::default()).map(|report| report.prime)
}

/// The prime at zero-based index `n`, with explicit options, plus a report of the run.
pub fn nth_prime_with(n: i64, options: &SieveOptions) -> Result<SieveReport> {
    let index = u64::try_from(n).map_err(|_| SieveError::NegativeIndex(n))?;
    let bound = SearchBound::for_index(index, options.width_limit())?;

    let mut ctx = SieveContext::new(options.retention, bound.width);
    let prime = SegmentedSieve::new(bound).run(&mut ctx)?;
    info!(
        "Prime at index {} is {} ({} windows of width {})",
        index,
        prime,
        ctx.statistics.get(Counters::SegmentsSieved),
        bound.width
    );

    Ok(SieveReport {
        prime,
        bound,
        known: ctx.known,
        statistics: ctx.statistics,
    })
}
