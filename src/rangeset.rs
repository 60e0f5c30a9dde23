// rangeset.rs - Normalized code point range sets.
//
// A RangeSet is an inversion list: inclusive ranges, sorted, never
// overlapping and never touching. Every constructor and every operation
// returns a set in that normal form. Small sets (literals, short classes)
// stay inline.

use std::cmp::{max, min};

use smallvec::SmallVec;

use crate::types::{CodePoint, MAX_CODE_POINT, MIN_CODE_POINT};

/// Inclusive code point range, `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodeRange {
    lo: CodePoint,
    hi: CodePoint,
}

impl CodeRange {
    /// Endpoints given in reverse order are swapped.
    pub fn new(from: CodePoint, to: CodePoint) -> CodeRange {
        if from > to {
            CodeRange { lo: to, hi: from }
        } else {
            CodeRange { lo: from, hi: to }
        }
    }

    pub fn single(code: CodePoint) -> CodeRange {
        CodeRange { lo: code, hi: code }
    }

    pub fn lo(&self) -> CodePoint {
        self.lo
    }

    pub fn hi(&self) -> CodePoint {
        self.hi
    }

    /// Number of code points covered.
    pub fn len(&self) -> u64 {
        u64::from(self.hi) - u64::from(self.lo) + 1
    }

    pub fn contains(&self, code: CodePoint) -> bool {
        self.lo <= code && code <= self.hi
    }
}

type RangeVec = SmallVec<[CodeRange; 4]>;

/// Ordered, merged set of code point ranges.
///
/// # Examples
///
/// ```
/// use ferroprop::rangeset::RangeSet;
///
/// let mut set = RangeSet::from_range(0x41, 0x5A);
/// set.add_range(0x5B, 0x60);
/// assert_eq!(set.range_count(), 1);
/// assert!(set.contains(0x60));
/// assert!(!set.complement().contains(0x41));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RangeSet {
    ranges: RangeVec,
}

/// Append `r` to a sorted list, merging with the last range when they
/// overlap or touch. `r.lo` must not precede the last range's `lo`.
fn push_merged(out: &mut RangeVec, r: CodeRange) {
    match out.last_mut() {
        Some(last) if r.lo <= last.hi.saturating_add(1) => {
            if r.hi > last.hi {
                last.hi = r.hi;
            }
        }
        _ => out.push(r),
    }
}

fn normalize(mut raw: RangeVec) -> RangeVec {
    raw.retain(|r| r.lo <= MAX_CODE_POINT);
    for r in raw.iter_mut() {
        r.hi = min(r.hi, MAX_CODE_POINT);
    }
    raw.sort_unstable();

    let mut out = RangeVec::with_capacity(raw.len());
    for r in raw {
        push_merged(&mut out, r);
    }
    out
}

impl RangeSet {
    /// The empty set.
    pub fn new() -> RangeSet {
        RangeSet {
            ranges: SmallVec::new(),
        }
    }

    /// Every code point in `[0, 0x10FFFF]`.
    pub fn full() -> RangeSet {
        RangeSet::from_range(MIN_CODE_POINT, MAX_CODE_POINT)
    }

    pub fn from_code_point(code: CodePoint) -> RangeSet {
        RangeSet::from_range(code, code)
    }

    pub fn from_range(from: CodePoint, to: CodePoint) -> RangeSet {
        let mut raw = RangeVec::new();
        raw.push(CodeRange::new(from, to));
        RangeSet::from_raw(raw)
    }

    /// Build from ranges in any order; overlapping and adjacent ranges merge,
    /// anything above 0x10FFFF is dropped.
    pub fn from_ranges<I>(ranges: I) -> RangeSet
    where
        I: IntoIterator<Item = CodeRange>,
    {
        RangeSet::from_raw(ranges.into_iter().collect())
    }

    /// Build from a static `(lo, hi)` table such as the generated property data.
    /// Inverted entries and entries starting above 0x10FFFF are dropped.
    pub fn from_table(table: &[(CodePoint, CodePoint)]) -> RangeSet {
        RangeSet::from_raw(
            table
                .iter()
                .filter(|&&(lo, hi)| lo <= hi && lo <= MAX_CODE_POINT)
                .map(|&(lo, hi)| CodeRange { lo, hi })
                .collect(),
        )
    }

    fn from_raw(raw: RangeVec) -> RangeSet {
        let set = RangeSet {
            ranges: normalize(raw),
        };
        debug_assert!(set.is_normalized());
        set
    }

    // === Queries ===

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ranges.len() == 1
            && self.ranges[0].lo == MIN_CODE_POINT
            && self.ranges[0].hi == MAX_CODE_POINT
    }

    /// Number of ranges (not code points).
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Number of code points in the set.
    pub fn code_point_count(&self) -> u32 {
        self.ranges.iter().map(|r| r.hi - r.lo + 1).sum()
    }

    pub fn ranges(&self) -> &[CodeRange] {
        &self.ranges
    }

    pub fn iter(&self) -> impl Iterator<Item = CodeRange> + '_ {
        self.ranges.iter().copied()
    }

    /// Membership test, binary search over the range ends.
    pub fn contains(&self, code: CodePoint) -> bool {
        let idx = self.ranges.partition_point(|r| r.hi < code);
        idx < self.ranges.len() && self.ranges[idx].lo <= code
    }

    pub fn contains_char(&self, c: char) -> bool {
        self.contains(c as CodePoint)
    }

    /// Check the normal form: sorted, in domain, no two ranges touching.
    pub fn is_normalized(&self) -> bool {
        self.ranges
            .iter()
            .all(|r| r.lo <= r.hi && r.hi <= MAX_CODE_POINT)
            && self
                .ranges
                .windows(2)
                .all(|w| w[0].hi.saturating_add(1) < w[1].lo)
    }

    // === In-place insertion ===

    /// Insert a range, merging it with every range it overlaps or touches.
    pub fn add_range(&mut self, from: CodePoint, to: CodePoint) {
        let r = CodeRange::new(from, to);
        if r.lo > MAX_CODE_POINT {
            return;
        }
        let mut lo = r.lo;
        let mut hi = min(r.hi, MAX_CODE_POINT);

        // [low, high) are the existing ranges absorbed by the new one
        let low = self.ranges.partition_point(|x| x.hi.saturating_add(1) < lo);
        let high = self.ranges.partition_point(|x| x.lo <= hi + 1);

        if low < high {
            lo = min(lo, self.ranges[low].lo);
            hi = max(hi, self.ranges[high - 1].hi);
            self.ranges.drain(low..high);
        }
        self.ranges.insert(low, CodeRange { lo, hi });
        debug_assert!(self.is_normalized());
    }

    pub fn add_code_point(&mut self, code: CodePoint) {
        self.add_range(code, code);
    }

    // === Set algebra ===

    /// Linear merge of two sorted lists.
    pub fn union(&self, other: &RangeSet) -> RangeSet {
        let a = &self.ranges;
        let b = &other.ranges;
        let mut out = RangeVec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);
        while i < a.len() || j < b.len() {
            let next = if j >= b.len() || (i < a.len() && a[i].lo <= b[j].lo) {
                i += 1;
                a[i - 1]
            } else {
                j += 1;
                b[j - 1]
            };
            push_merged(&mut out, next);
        }
        let set = RangeSet { ranges: out };
        debug_assert!(set.is_normalized());
        set
    }

    pub fn union_with(&mut self, other: &RangeSet) {
        if other.is_empty() {
            return;
        }
        *self = self.union(other);
    }

    /// Everything in `[0, 0x10FFFF]` not in `self`.
    pub fn complement(&self) -> RangeSet {
        let mut out = RangeVec::with_capacity(self.ranges.len() + 1);
        let mut next = MIN_CODE_POINT;
        for r in &self.ranges {
            if r.lo > next {
                out.push(CodeRange {
                    lo: next,
                    hi: r.lo - 1,
                });
            }
            next = r.hi + 1;
        }
        if next <= MAX_CODE_POINT {
            out.push(CodeRange {
                lo: next,
                hi: MAX_CODE_POINT,
            });
        }
        let set = RangeSet { ranges: out };
        debug_assert!(set.is_normalized());
        set
    }

    pub fn intersection(&self, other: &RangeSet) -> RangeSet {
        let a = &self.ranges;
        let b = &other.ranges;
        let mut out = RangeVec::new();
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            let lo = max(a[i].lo, b[j].lo);
            let hi = min(a[i].hi, b[j].hi);
            if lo <= hi {
                out.push(CodeRange { lo, hi });
            }
            if a[i].hi < b[j].hi {
                i += 1;
            } else {
                j += 1;
            }
        }
        let set = RangeSet { ranges: out };
        debug_assert!(set.is_normalized());
        set
    }

    /// Code points in `self` but not in `other`.
    pub fn difference(&self, other: &RangeSet) -> RangeSet {
        if other.is_empty() {
            return self.clone();
        }
        self.intersection(&other.complement())
    }
}

impl From<CodeRange> for RangeSet {
    fn from(r: CodeRange) -> RangeSet {
        RangeSet::from_range(r.lo, r.hi)
    }
}

impl FromIterator<CodeRange> for RangeSet {
    fn from_iter<I: IntoIterator<Item = CodeRange>>(iter: I) -> RangeSet {
        RangeSet::from_ranges(iter)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(set: &RangeSet) -> Vec<(u32, u32)> {
        set.iter().map(|r| (r.lo(), r.hi())).collect()
    }

    #[test]
    fn code_range_new_swaps_reversed_bounds() {
        let r = CodeRange::new(0x5A, 0x41);
        assert_eq!((r.lo(), r.hi()), (0x41, 0x5A));
        assert_eq!(r.len(), 26);
    }

    #[test]
    fn from_table_merges_overlapping_and_adjacent() {
        let set = RangeSet::from_table(&[(0x30, 0x39), (0x10, 0x20), (0x21, 0x25), (0x35, 0x40)]);
        assert_eq!(pairs(&set), vec![(0x10, 0x25), (0x30, 0x40)]);
        assert!(set.is_normalized());
    }

    #[test]
    fn from_table_clips_to_domain() {
        let set = RangeSet::from_table(&[(0x10FFF0, 0x20_0000), (0x11_0000, 0x11_0005)]);
        assert_eq!(pairs(&set), vec![(0x10FFF0, MAX_CODE_POINT)]);
    }

    #[test]
    fn from_table_drops_inverted_entries() {
        let set = RangeSet::from_table(&[(0x41, 0x5A), (0x11_0000, MAX_CODE_POINT), (0x7A, 0x61)]);
        assert_eq!(pairs(&set), vec![(0x41, 0x5A)]);
        assert!(!set.contains(MAX_CODE_POINT));
    }

    #[test]
    fn code_range_len_spans_full_u32() {
        assert_eq!(CodeRange::new(0, u32::MAX).len(), 1 << 32);
        assert_eq!(CodeRange::new(MIN_CODE_POINT, MAX_CODE_POINT).len(), 0x11_0000);
    }

    #[test]
    fn empty_set_contains_nothing() {
        let set = RangeSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(0));
        assert!(!set.contains(MAX_CODE_POINT));
        assert_eq!(set.code_point_count(), 0);
    }

    #[test]
    fn contains_boundaries() {
        let set = RangeSet::from_table(&[(0x41, 0x5A), (0x61, 0x7A)]);
        assert!(set.contains(0x41));
        assert!(set.contains(0x5A));
        assert!(!set.contains(0x5B));
        assert!(!set.contains(0x40));
        assert!(set.contains(0x7A));
        assert!(!set.contains(0x7B));
    }

    #[test]
    fn add_range_joins_neighbours() {
        let mut set = RangeSet::from_table(&[(0x10, 0x1F), (0x30, 0x3F), (0x50, 0x5F)]);
        set.add_range(0x20, 0x2F);
        assert_eq!(pairs(&set), vec![(0x10, 0x3F), (0x50, 0x5F)]);
        set.add_range(0x45, 0x40);
        assert_eq!(pairs(&set), vec![(0x10, 0x45), (0x50, 0x5F)]);
        set.add_range(0x48, 0x4A);
        assert_eq!(pairs(&set), vec![(0x10, 0x45), (0x48, 0x4A), (0x50, 0x5F)]);
        set.add_range(0x00, 0x100);
        assert_eq!(pairs(&set), vec![(0x00, 0x100)]);
    }

    #[test]
    fn add_code_point_at_domain_end() {
        let mut set = RangeSet::from_code_point(MAX_CODE_POINT - 1);
        set.add_code_point(MAX_CODE_POINT);
        assert_eq!(pairs(&set), vec![(MAX_CODE_POINT - 1, MAX_CODE_POINT)]);
        set.add_code_point(MAX_CODE_POINT + 1);
        assert_eq!(set.range_count(), 1);
    }

    #[test]
    fn union_merges_touching_ranges() {
        let a = RangeSet::from_table(&[(0x00, 0x0F), (0x40, 0x4F)]);
        let b = RangeSet::from_table(&[(0x10, 0x1F), (0x48, 0x60)]);
        assert_eq!(pairs(&a.union(&b)), vec![(0x00, 0x1F), (0x40, 0x60)]);
        assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn complement_of_empty_and_full() {
        assert!(RangeSet::new().complement().is_full());
        assert!(RangeSet::full().complement().is_empty());
    }

    #[test]
    fn complement_edges() {
        let set = RangeSet::from_table(&[(0x00, 0x40), (0x10FF00, MAX_CODE_POINT)]);
        assert_eq!(pairs(&set.complement()), vec![(0x41, 0x10FEFF)]);
        let set = RangeSet::from_table(&[(0x41, 0x5A)]);
        assert_eq!(
            pairs(&set.complement()),
            vec![(0x00, 0x40), (0x5B, MAX_CODE_POINT)]
        );
        assert_eq!(set.complement().complement(), set);
    }

    #[test]
    fn intersection_and_difference() {
        let a = RangeSet::from_table(&[(0x00, 0x7F)]);
        let b = RangeSet::from_table(&[(0x30, 0x39), (0x41, 0x5A), (0x100, 0x200)]);
        assert_eq!(pairs(&a.intersection(&b)), vec![(0x30, 0x39), (0x41, 0x5A)]);
        assert_eq!(
            pairs(&a.difference(&b)),
            vec![(0x00, 0x2F), (0x3A, 0x40), (0x5B, 0x7F)]
        );
        assert!(a.intersection(&RangeSet::new()).is_empty());
        assert_eq!(a.difference(&RangeSet::new()), a);
    }

    #[test]
    fn code_point_count_sums_ranges() {
        let set = RangeSet::from_table(&[(0x30, 0x39), (0x41, 0x46)]);
        assert_eq!(set.code_point_count(), 16);
        assert_eq!(RangeSet::full().code_point_count(), MAX_CODE_POINT + 1);
    }

    #[test]
    fn collect_from_iterator() {
        let set: RangeSet = vec![CodeRange::single(5), CodeRange::new(1, 4)]
            .into_iter()
            .collect();
        assert_eq!(pairs(&set), vec![(1, 5)]);
    }
}
