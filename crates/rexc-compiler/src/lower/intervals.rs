//! Closed-interval sets over code points.
//!
//! Class lowering normalizes the ranges a user wrote and, for negated
//! classes, complements them over the byte alphabet.

/// Highest value of the byte alphabet.
pub const ALPHABET_MAX: u32 = 0xFF;

/// Inclusive range `lo..=hi`. A range with `lo > hi` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    pub lo: u32,
    pub hi: u32,
}

impl Interval {
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    pub fn is_valid(&self) -> bool {
        self.lo <= self.hi
    }

    pub fn values(&self) -> std::ops::RangeInclusive<u32> {
        self.lo..=self.hi
    }
}

/// Sorted, pairwise disjoint, non-adjacent ranges covering the same values.
///
/// Reversed ranges are dropped. A range overlapping or touching its
/// predecessor (`next.lo <= prev.hi + 1`) is merged into it.
pub fn normalize(ranges: &[Interval]) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = ranges.iter().copied().filter(Interval::is_valid).collect();
    sorted.sort_unstable();

    let mut out: Vec<Interval> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match out.last_mut() {
            Some(prev) if range.lo <= prev.hi.saturating_add(1) => {
                prev.hi = prev.hi.max(range.hi);
            }
            _ => out.push(range),
        }
    }
    out
}

/// Values in `0..=ALPHABET_MAX` not covered by `ranges`.
///
/// Input is normalized first, so any range list is accepted. Values above
/// the alphabet are ignored.
pub fn complement(ranges: &[Interval]) -> Vec<Interval> {
    let mut out = Vec::new();
    let mut next = 0u32;

    for range in normalize(ranges) {
        if range.lo > ALPHABET_MAX {
            break;
        }
        if range.lo > next {
            out.push(Interval::new(next, range.lo - 1));
        }
        next = range.hi.saturating_add(1);
        if next > ALPHABET_MAX {
            return out;
        }
    }

    out.push(Interval::new(next, ALPHABET_MAX));
    out
}
