// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! One window of the integer line.

/// A contiguous window `[start, start + len)` of candidate integers.
///
/// `marks[i]` is true while `start + i` may still be prime.
#[derive(Debug, Clone)]
pub struct Segment {
    start: u64,
    marks: Vec<bool>,
}

impl Segment {
    /// Create a window of `width` candidates beginning at `start`, all unmarked.
    pub fn new(start: u64, width: u64) -> Self {
        Self {
            start,
            marks: vec![true; width as usize],
        }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    /// One past the last integer in the window.
    pub fn end(&self) -> u64 {
        self.start + self.marks.len() as u64
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Whether `start + offset` is still a candidate.
    pub fn is_candidate(&self, offset: usize) -> bool {
        self.marks[offset]
    }

    /// Mark every multiple of `prime` inside the window as composite.
    ///
    /// Striking begins at the first multiple not below `start`, or at
    /// `prime * prime` if that is later; smaller multiples have a smaller
    /// prime factor. `prime` itself is never struck. Returns the number of
    /// positions written.
    pub fn strike_multiples(&mut self, prime: u64) -> u64 {
        debug_assert!(prime >= 2);
        let end = self.end();
        let first_multiple = self.start.div_ceil(prime) * prime;
        let from = first_multiple.max(prime.saturating_mul(prime));
        if from >= end {
            return 0;
        }

        let mut struck = 0;
        let mut value = from;
        while value < end {
            self.marks[(value - self.start) as usize] = false;
            struck += 1;
            value += prime;
        }
        struck
    }

    /// Values still marked as candidates, in increasing order.
    pub fn candidates(&self) -> impl Iterator<Item = u64> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, candidate)| **candidate)
            .map(move |(offset, _)| self.start + offset as u64)
    }
}
