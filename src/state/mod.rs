// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable sieve state carried from one window to the next.
//!
//! - [`KnownPrimes`]: primes found so far, used to sieve later windows
//! - [`Statistics`]: counters describing the work done

pub mod known_primes;
pub mod statistics;

pub use known_primes::{KnownPrimes, RetentionPolicy};
pub use statistics::{Counters, Statistics};
