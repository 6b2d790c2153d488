//! Half-open time intervals and sorted, merged sets of them (spec §4.A).

/// Sentinel absolute time used as the empty/terminal marker.
pub const NONE: usize = usize::MAX;

/// A half-open interval `[start, end)` over non-negative integers.
///
/// `start >= end` is canonicalised to `(NONE, NONE)` by every constructor
/// and operation in this module, so an `Interval` is never observed in any
/// other "empty" shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    /// The canonical empty interval.
    pub const EMPTY: Interval = Interval { start: NONE, end: NONE };

    /// Builds an interval, canonicalising `start >= end` to [`Interval::EMPTY`].
    pub fn new(start: usize, end: usize) -> Self {
        if start >= end {
            Self::EMPTY
        } else {
            Interval { start, end }
        }
    }

    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    pub fn size(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start
        }
    }

    pub fn contains(self, t: usize) -> bool {
        self.start <= t && t < self.end
    }

    /// `(max(a.start, b.start), min(a.end, b.end))`, canonicalised.
    pub fn intersection(self, other: Interval) -> Interval {
        Interval::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// Clamps both ends to `window`, canonicalising to empty if nothing remains.
    pub fn filter_to_window(self, window: Interval) -> Interval {
        let start = self.start.max(window.start);
        let end = self.end.min(window.end);
        Interval::new(start, end)
    }
}

/// An ordered sequence of disjoint, non-adjacent, non-empty intervals.
///
/// The invariant `I[k].end <= I[k+1].start` (with no two intervals that
/// could be merged) holds for every `IntervalSet` a caller can observe —
/// it is established by [`IntervalSet::from_raw`] and [`IntervalSet::union`]
/// and never broken afterwards, since an `IntervalSet` exposes no mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Builds a set from arbitrarily ordered, possibly overlapping intervals.
    pub fn from_raw(mut intervals: Vec<Interval>) -> Self {
        intervals.retain(|i| !i.is_empty());
        IntervalSet { intervals: merge(intervals) }
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The union of two interval sets, as a set of points.
    pub fn union(&self, other: &IntervalSet) -> IntervalSet {
        let mut all = self.intervals.clone();
        all.extend(other.intervals.iter().copied());
        IntervalSet { intervals: merge(all) }
    }

    pub fn contains(&self, t: usize) -> bool {
        // intervals are sorted and disjoint; binary search by start.
        match self.intervals.binary_search_by_key(&t, |i| i.start) {
            Ok(_) => true,
            Err(insertion) => insertion > 0 && self.intervals[insertion - 1].contains(t),
        }
    }

    /// The intersection of two interval sets, as a set of points. A
    /// standard two-pointer sweep over both sorted, disjoint sequences.
    pub fn intersect(&self, other: &IntervalSet) -> IntervalSet {
        let (a, b) = (self.as_slice(), other.as_slice());
        let mut result = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            let overlap = a[i].intersection(b[j]);
            if !overlap.is_empty() {
                result.push(overlap);
            }
            if a[i].end <= b[j].end {
                i += 1;
            } else {
                j += 1;
            }
        }
        IntervalSet { intervals: result }
    }

    /// Whether every point of `self` also lies in `other`.
    pub fn is_subset_of(&self, other: &IntervalSet) -> bool {
        self.intervals.iter().all(|interval| {
            other
                .intervals
                .iter()
                .any(|o| o.start <= interval.start && interval.end <= o.end)
        })
    }
}

/// Sorts by `start`, then linearly coalesces overlapping/adjacent intervals.
/// Empty intervals are dropped.
pub fn merge(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.retain(|i| !i.is_empty());
    intervals.sort_by_key(|i| i.start);
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.start <= last.end => {
                last.end = last.end.max(interval.end);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Concatenates two interval sequences and merges the result.
pub fn union(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    let mut all = Vec::with_capacity(a.len() + b.len());
    all.extend_from_slice(a);
    all.extend_from_slice(b);
    merge(all)
}
