// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-call sieve context.
//!
//! A [`SieveContext`] owns everything one `nth_prime` call mutates: the
//! known-primes list, the running prime count and the statistics. Nothing is
//! shared between calls, so independent calls may run on different threads
//! without coordination.

use crate::engine::MAX_SEGMENT_WIDTH;
use crate::state::{Counters, KnownPrimes, RetentionPolicy, Statistics};

/// Runtime configuration for a sieve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SieveOptions {
    /// Which discovered primes to keep for sieving later windows.
    pub retention: RetentionPolicy,

    /// Segment widths at or above this are rejected. Values above
    /// [`MAX_SEGMENT_WIDTH`] are clamped to it.
    pub max_segment_width: u64,
}

impl SieveOptions {
    /// The effective width ceiling.
    pub fn width_limit(&self) -> u64 {
        self.max_segment_width.min(MAX_SEGMENT_WIDTH)
    }
}

impl Default for SieveOptions {
    fn default() -> Self {
        Self {
            retention: RetentionPolicy::default(),
            max_segment_width: MAX_SEGMENT_WIDTH,
        }
    }
}

/// State for one sieve run.
#[derive(Debug)]
pub struct SieveContext {
    /// Primes discovered so far.
    pub known: KnownPrimes,

    /// Number of primes discovered so far, retained or not.
    pub prime_count: u64,

    /// The most recent prime discovered.
    pub last_prime: Option<u64>,

    pub statistics: Statistics,
}

impl SieveContext {
    /// Create an empty context for segments of the given width.
    pub fn new(retention: RetentionPolicy, width: u64) -> Self {
        Self {
            known: KnownPrimes::new(retention, width),
            prime_count: 0,
            last_prime: None,
            statistics: Statistics::new(),
        }
    }

    /// Record a newly extracted prime.
    pub(crate) fn record_prime(&mut self, prime: u64) {
        self.prime_count += 1;
        self.last_prime = Some(prime);
        self.statistics.increment_counter(Counters::PrimesFound);
        if self.known.offer(prime) {
            self.statistics.increment_counter(Counters::PrimesRetained);
        }
    }
}
