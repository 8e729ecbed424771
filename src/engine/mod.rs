// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Segmented Sieve of Eratosthenes.
//!
//! The engine walks the integer line in windows of `width = ⌈√X⌉` values,
//! starting at 2. Each window is sieved with the primes found in earlier
//! windows, then scanned left to right. Every surviving candidate is prime.
//!
//! # Windows
//!
//! ```text
//! [2, 2+w)  [2+w, 2+2w)  [2+2w, 2+3w)  ...  while start <= w*w
//! ```
//!
//! The first window contains every prime up to `w + 1 >= √X`, which is all
//! that is needed to sieve the remaining windows. Primes found in the first
//! window must also sieve the first window itself, so a prime `p` with
//! `p * p` inside the current window strikes its multiples there as soon as
//! it is found.
//!
//! # Example
//!
//! ```
//! use nth_prime_sieve::context::SieveContext;
//! use nth_prime_sieve::engine::SegmentedSieve;
//! use nth_prime_sieve::estimate::SearchBound;
//! use nth_prime_sieve::state::RetentionPolicy;
//!
//! let bound = SearchBound::for_index(19, 1 << 31).unwrap();
//! let mut ctx = SieveContext::new(RetentionPolicy::UpToWidth, bound.width);
//! let prime = SegmentedSieve::new(bound).run(&mut ctx).unwrap();
//! assert_eq!(prime, 71);
//! assert_eq!(ctx.prime_count, 20);
//! ```

pub mod segment;

pub use segment::Segment;

use log::{error, trace};

use crate::context::SieveContext;
use crate::error::{Result, SieveError};
use crate::estimate::SearchBound;
use crate::state::Counters;

/// The first integer considered: 2.
pub const FIRST_CANDIDATE: u64 = 2;

/// Segment widths at or above 2^31 are refused rather than allocated.
pub const MAX_SEGMENT_WIDTH: u64 = 1 << 31;

/// Drives the sieve across windows until the target index is reached.
#[derive(Debug, Clone, Copy)]
pub struct SegmentedSieve {
    bound: SearchBound,
}

impl SegmentedSieve {
    /// # Panics
    ///
    /// Panics if the bound's width is zero.
    pub fn new(bound: SearchBound) -> Self {
        assert!(bound.width > 0, "Segment width must be positive");
        Self { bound }
    }

    pub fn bound(&self) -> &SearchBound {
        &self.bound
    }

    /// Number of primes to extract: the prime at `index` is the `index + 1`-th.
    fn target_count(&self) -> u64 {
        self.bound.index.saturating_add(1)
    }

    /// Start of every window, in order.
    pub fn window_starts(&self) -> impl Iterator<Item = u64> {
        (FIRST_CANDIDATE..=self.bound.last_start()).step_by(self.bound.width as usize)
    }

    /// Run every window in turn until the target prime is found.
    ///
    /// Fails with [`SieveError::BoundExhausted`] if the windows run out first,
    /// which only happens when the bound was under-estimated.
    pub fn run(&self, ctx: &mut SieveContext) -> Result<u64> {
        for start in self.window_starts() {
            if let Some(prime) = self.sieve_segment(ctx, start) {
                return Ok(prime);
            }
        }

        error!(
            "Bound {} (width {}) exhausted after {} primes looking for index {}",
            self.bound.value, self.bound.width, ctx.prime_count, self.bound.index
        );
        Err(SieveError::BoundExhausted {
            index: self.bound.index,
            bound: self.bound.value,
            found: ctx.prime_count,
            last_prime: ctx.last_prime,
        })
    }

    /// Sieve the window beginning at `start` and extract its primes.
    ///
    /// Returns the target prime if it lies in this window; otherwise every
    /// prime in the window has been recorded in `ctx` and `None` is returned.
    pub fn sieve_segment(&self, ctx: &mut SieveContext, start: u64) -> Option<u64> {
        let mut segment = Segment::new(start, self.bound.width);
        let end = segment.end();

        let mut strikes = 0;
        for &prime in ctx.known.iter() {
            if prime.saturating_mul(prime) >= end {
                break;
            }
            strikes += segment.strike_multiples(prime);
        }
        ctx.statistics.add(Counters::CompositeStrikes, strikes);
        ctx.statistics.increment_counter(Counters::SegmentsSieved);
        trace!(
            "Window [{}, {}): {} strikes from {} known primes",
            start,
            end,
            strikes,
            ctx.known.len()
        );

        let target = self.target_count();
        for offset in 0..segment.len() {
            if !segment.is_candidate(offset) {
                continue;
            }
            let prime = start + offset as u64;
            ctx.record_prime(prime);
            if ctx.prime_count == target {
                return Some(prime);
            }
            if prime.saturating_mul(prime) < end {
                let struck = segment.strike_multiples(prime);
                ctx.statistics.add(Counters::InWindowStrikes, struck);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RetentionPolicy;

    fn bound(index: u64, value: u64, width: u64) -> SearchBound {
        SearchBound {
            index,
            value,
            width,
        }
    }

    fn run(index: u64, value: u64, width: u64) -> (Result<u64>, SieveContext) {
        let mut ctx = SieveContext::new(RetentionPolicy::UpToWidth, width);
        let result = SegmentedSieve::new(bound(index, value, width)).run(&mut ctx);
        (result, ctx)
    }

    #[test]
    fn test_window_starts() {
        let sieve = SegmentedSieve::new(bound(0, 2000, 45));
        let starts: Vec<u64> = sieve.window_starts().collect();
        assert_eq!(starts[..3], [2, 47, 92]);
        assert_eq!(*starts.last().unwrap(), 2 + 44 * 45);
        assert!(starts.iter().all(|&s| s <= 45 * 45));
    }

    #[test]
    fn test_first_prime() {
        let (result, ctx) = run(0, 2000, 45);
        assert_eq!(result, Ok(2));
        assert_eq!(ctx.prime_count, 1);
        assert_eq!(ctx.statistics.get(Counters::SegmentsSieved), 1);
    }

    #[test]
    fn test_prime_on_window_start() {
        // 47 opens the second window of width 45.
        let (result, ctx) = run(14, 2000, 45);
        assert_eq!(result, Ok(47));
        assert_eq!(ctx.statistics.get(Counters::SegmentsSieved), 2);
    }

    #[test]
    fn test_first_window_sieves_itself() {
        // Every prime below 47 comes out of the first window alone.
        let mut ctx = SieveContext::new(RetentionPolicy::UpToWidth, 45);
        let sieve = SegmentedSieve::new(bound(1000, 2000, 45));
        assert_eq!(sieve.sieve_segment(&mut ctx, 2), None);
        assert_eq!(
            &ctx.known[..],
            &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43]
        );
        assert!(ctx.statistics.get(Counters::InWindowStrikes) > 0);
        assert_eq!(ctx.statistics.get(Counters::CompositeStrikes), 0);
    }

    #[test]
    fn test_narrow_windows() {
        // Width 5 gives windows [2,7) [7,12) [12,17) [17,22) [22,27).
        let (result, ctx) = run(7, 25, 5);
        assert_eq!(result, Ok(19));
        assert_eq!(&ctx.known[..], &[2, 3, 5]);
        assert_eq!(ctx.statistics.get(Counters::SegmentsSieved), 4);
    }

    #[test]
    fn test_exhausted_bound_is_an_internal_error() {
        // Width 2 only reaches [4, 6): primes 2, 3, 5.
        let (result, ctx) = run(10, 4, 2);
        assert_eq!(
            result,
            Err(SieveError::BoundExhausted {
                index: 10,
                bound: 4,
                found: 3,
                last_prime: Some(5),
            })
        );
        assert_eq!(ctx.prime_count, 3);
        assert!(!result.unwrap_err().is_invalid_argument());
    }

    #[test]
    #[should_panic(expected = "Segment width must be positive")]
    fn test_zero_width_rejected() {
        SegmentedSieve::new(bound(0, 0, 0));
    }
}
