//! Counts overlapping intervals over a discretized axis.
//!
//! Each interval only records `+1` at its start and `-1` at its end; the
//! level at every slot is recovered by one prefix sum. Building the level
//! function costs O(intervals + len) instead of O(intervals * len).

use std::ops::Range;

#[derive(Debug, Clone)]
pub struct DifferenceArray {
    deltas: Vec<i64>,
}

impl DifferenceArray {
    pub fn new (len: usize) -> Self {
        DifferenceArray { deltas: vec![0; len] }
    }

    pub fn len (&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty (&self) -> bool {
        self.deltas.is_empty()
    }

    /// Records presence over the half-open `interval`. Empty intervals are
    /// ignored; an interval running past the last slot stays open.
    ///
    /// Panics if `interval.start` is out of range.
    pub fn add (&mut self, interval: Range<usize>) {
        if interval.is_empty() {
            return;
        }
        self.deltas[interval.start] += 1;
        if let Some(end) = self.deltas.get_mut(interval.end) {
            *end -= 1;
        }
    }

    /// Number of recorded intervals covering each slot
    pub fn levels (&self) -> Vec<usize> {
        let mut level: i64 = 0;
        self.deltas.iter()
            .map(|delta| {
                level += delta;
                debug_assert!(level >= 0);
                level as usize
            })
            .collect()
    }
}

impl Extend<Range<usize>> for DifferenceArray {
    fn extend<I: IntoIterator<Item = Range<usize>>> (&mut self, intervals: I) {
        for interval in intervals {
            self.add(interval);
        }
    }
}

/// Level function of `intervals` over `len` slots.
pub fn occupancy<I> (intervals: I, len: usize) -> Vec<usize> where I: IntoIterator<Item = Range<usize>> {
    let mut counter = DifferenceArray::new(len);
    counter.extend(intervals);
    counter.levels()
}
