// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Find the n-th prime with a segmented Sieve of Eratosthenes.
//!
//! # Architecture
//!
//! A call runs three stages:
//!
//! 1. **Bound estimation** ([`estimate`]): pick X with more than n primes
//!    below it, using π(x) ≈ x / ln(x) and doubling until the estimate
//!    clears 2n.
//! 2. **Width check** ([`estimate::SearchBound`]): the segment width is
//!    ⌈√X⌉; widths of 2^31 or more are refused before anything is allocated.
//! 3. **Segmented sieve** ([`engine`]): windows of that width are sieved in
//!    turn with the primes found so far, stopping at the (n+1)-th prime.
//!
//! # Memory
//!
//! Each call owns a [`context::SieveContext`]: the known-primes list, the
//! prime counter and the statistics. Only one window of `⌈√X⌉` booleans is
//! alive at a time, and by default only primes up to the width are kept.
//! Nothing is shared between calls.
//!
//! # Example
//!
//! ```
//! use nth_prime_sieve::{nth_prime, NthPrime, SieveImplementation};
//!
//! assert_eq!(nth_prime(2000).unwrap(), 17393);
//!
//! let sieve = SieveImplementation::default();
//! assert_eq!(sieve.nth_prime(500).unwrap(), 3581);
//! ```

pub mod context;
pub mod engine;
pub mod entry;
pub mod error;
pub mod estimate;
pub mod state;

// Re-export commonly used types
pub use context::SieveOptions;
pub use entry::{nth_prime, nth_prime_with, NthPrime, SieveImplementation, SieveReport};
pub use error::{Result, SieveError};
pub use state::RetentionPolicy;
