//! Slice-compressed, strictly increasing timeline of topology-change
//! instants (spec §4.D).
//!
//! Absolute times are split into a slice index (`t / SLICE_SIZE`) and a
//! relative offset within the slice (`t % SLICE_SIZE`, an 8-bit
//! [`RelativeMoment`]). When instants are locally dense this is roughly an
//! 8x compression over storing 64-bit absolute times directly, without
//! losing random access via [`KeyMomentsTable::nth`].

use crate::error::BuildError;

pub type RelativeMoment = u8;

/// Number of absolute times a single slice can represent.
pub const SLICE_SIZE: usize = RelativeMoment::MAX as usize + 1;

/// Builds a [`KeyMomentsTable`] from a strictly increasing stream of
/// absolute times, pushed one at a time.
#[derive(Debug, Default)]
pub struct KeyMomentsTableBuilder {
    slices: Vec<Vec<RelativeMoment>>,
    last_pushed: Option<usize>,
}

impl KeyMomentsTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `t` at the current write cursor. `t` must be strictly
    /// greater than every previously pushed time.
    pub fn push_in_order(&mut self, t: usize) -> Result<(), BuildError> {
        if let Some(previous) = self.last_pushed {
            if t <= previous {
                return Err(BuildError::MomentsNotIncreasing { previous, next: t });
            }
        }
        let slice = t / SLICE_SIZE;
        let relative = (t % SLICE_SIZE) as RelativeMoment;
        while self.slices.len() <= slice {
            self.slices.push(Vec::new());
        }
        self.slices[slice].push(relative);
        self.last_pushed = Some(t);
        Ok(())
    }

    pub fn build(self) -> KeyMomentsTable {
        let mut prefix = Vec::with_capacity(self.slices.len() + 1);
        let mut total = 0usize;
        prefix.push(0);
        for slice in &self.slices {
            total += slice.len();
            prefix.push(total);
        }
        let first = self.slices.iter().enumerate().find_map(|(s, m)| {
            m.first().map(|&rel| s * SLICE_SIZE + rel as usize)
        });
        let last = self.slices.iter().enumerate().rev().find_map(|(s, m)| {
            m.last().map(|&rel| s * SLICE_SIZE + rel as usize)
        });
        KeyMomentsTable { slices: self.slices, prefix, first, last }
    }
}

/// Immutable, slice-compressed timeline. See the module docs for the
/// compression scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMomentsTable {
    slices: Vec<Vec<RelativeMoment>>,
    /// `prefix[i]` = number of moments in slices `0..i`. `prefix.len() ==
    /// slices.len() + 1`.
    prefix: Vec<usize>,
    first: Option<usize>,
    last: Option<usize>,
}

impl KeyMomentsTable {
    pub fn len(&self) -> usize {
        *self.prefix.last().unwrap_or(&0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 0-based absolute time of the nth moment across all slices.
    pub fn nth(&self, n: usize) -> usize {
        assert!(n < self.len(), "moment index {n} out of range for length {}", self.len());
        let slice = self.prefix.partition_point(|&p| p <= n) - 1;
        let offset = n - self.prefix[slice];
        slice * SLICE_SIZE + self.slices[slice][offset] as usize
    }

    pub fn first(&self) -> Option<usize> {
        self.first
    }

    pub fn last(&self) -> Option<usize> {
        self.last
    }

    /// Returns the index `i` such that `nth(i) <= t < nth(i + 1)` (or the
    /// terminal index `len() - 1` once `t` reaches or exceeds the last
    /// moment). Answers in `O(log M)`.
    pub fn find_time_index(&self, t: usize) -> usize {
        let total = self.len();
        assert!(total > 0, "find_time_index on an empty key-moments table");
        let mut lo = 0usize;
        let mut hi = total;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.nth(mid) <= t {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo.saturating_sub(1)
    }
}
