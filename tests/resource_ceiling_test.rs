// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Indices too large to sieve in memory are refused up front.

use nth_prime_sieve::engine::MAX_SEGMENT_WIDTH;
use nth_prime_sieve::estimate::estimate;
use nth_prime_sieve::{nth_prime, nth_prime_with, SieveError, SieveOptions};

#[test]
fn test_width_past_two_to_the_31_is_refused() {
    // The bound for 10^17 is about 1.3e19, whose square root is past 2^31.
    let n = 100_000_000_000_000_000;
    match nth_prime(n) {
        Err(SieveError::SegmentTooWide {
            index,
            width,
            limit,
            ..
        }) => {
            assert_eq!(index, n as u64);
            assert!(width >= MAX_SEGMENT_WIDTH);
            assert_eq!(limit, MAX_SEGMENT_WIDTH);
        }
        other => panic!("expected SegmentTooWide, got {:?}", other),
    }
}

#[test]
fn test_largest_index_is_refused() {
    let err = nth_prime(i64::MAX).unwrap_err();
    assert!(err.is_invalid_argument(), "{}", err);
}

#[test]
fn test_estimate_alone_overflows_near_u64_max() {
    assert_eq!(
        estimate(u64::MAX / 3),
        Err(SieveError::BoundOverflow { index: u64::MAX / 3 })
    );
}

#[test]
fn test_configured_ceiling() {
    // Index 1000 needs width 179 (bound 32000).
    let tight = SieveOptions {
        max_segment_width: 179,
        ..SieveOptions::default()
    };
    assert!(matches!(
        nth_prime_with(1000, &tight),
        Err(SieveError::SegmentTooWide { width: 179, .. })
    ));

    let loose = SieveOptions {
        max_segment_width: 180,
        ..SieveOptions::default()
    };
    assert_eq!(nth_prime_with(1000, &loose).unwrap().prime, 7927);
}
