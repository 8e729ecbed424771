// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The list of primes discovered so far.
//!
//! Later windows are sieved with the primes found in earlier ones, so every
//! prime up to the segment width (which is at least √X) must be kept. Primes
//! above that never strike anything, and the default policy drops them.

use std::ops::Deref;

/// Which discovered primes to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RetentionPolicy {
    /// Keep only primes no larger than the segment width.
    #[default]
    UpToWidth,

    /// Keep every prime found. Memory grows with the index.
    All,
}

/// Ordered, duplicate-free list of known primes.
///
/// Grows monotonically and never shrinks. Derefs to a slice for iteration.
#[derive(Debug, Clone)]
pub struct KnownPrimes {
    primes: Vec<u64>,
    policy: RetentionPolicy,
    /// Primes up to and including this value are always retained.
    retain_limit: u64,
}

impl KnownPrimes {
    /// Create an empty list for a sieve whose segments are `width` wide.
    pub fn new(policy: RetentionPolicy, width: u64) -> Self {
        Self {
            primes: Vec::new(),
            policy,
            retain_limit: width,
        }
    }

    /// Offer a newly found prime. Returns true if it was retained.
    ///
    /// # Panics
    ///
    /// Panics if `prime` is not larger than the last prime offered, which
    /// would mean the sieve emitted primes out of order.
    pub fn offer(&mut self, prime: u64) -> bool {
        if let Some(&last) = self.primes.last() {
            assert!(
                prime > last,
                "Primes offered out of order: {} after {}",
                prime,
                last
            );
        }
        let keep = match self.policy {
            RetentionPolicy::All => true,
            RetentionPolicy::UpToWidth => prime <= self.retain_limit,
        };
        if keep {
            self.primes.push(prime);
        }
        keep
    }

    /// True if every prime up to `limit` that has been offered is held.
    pub fn retains_up_to(&self, limit: u64) -> bool {
        self.policy == RetentionPolicy::All || limit <= self.retain_limit
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }
}

impl Deref for KnownPrimes {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.primes
    }
}
