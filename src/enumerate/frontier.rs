//! Sorted candidate frontier for hyperbolic-cross growth.
//!
//! The frontier holds multi-indices adjacent to already-ranked indices but not
//! yet themselves ranked, ordered by ascending weighted q-norm. Ties (norms
//! within a fixed relative tolerance) are served first-seen-first-served: a
//! newcomer is placed after every entry at or below its tie window, so arrival
//! order is simply deque position and the enumeration is deterministic without
//! relying on pointer identity or map-iteration order. Popping the lowest-norm
//! candidate is O(1).

use std::collections::VecDeque;

use crate::lattice::MultiIndex;

/// Relative tolerance within which two norms count as tied, both for
/// ordering and for duplicate detection.
pub(crate) const NORM_TIE_TOLERANCE: f64 = 1e-10;

#[inline]
fn tie_window(norm: f64) -> f64 {
    NORM_TIE_TOLERANCE * norm.abs().max(1.0)
}

/// A not-yet-ranked multi-index together with its weighted q-norm.
#[derive(Clone, Debug)]
pub(crate) struct Candidate {
    pub index: MultiIndex,
    pub norm: f64,
}

/// Candidates kept sorted by ascending norm, FIFO among (near-)equal norms.
#[derive(Clone, Debug, Default)]
pub(crate) struct Frontier {
    entries: VecDeque<Candidate>,
}

impl Frontier {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove and return the lowest-norm candidate (oldest among ties).
    pub fn pop_front(&mut self) -> Option<Candidate> {
        self.entries.pop_front()
    }

    /// Insert a candidate, keeping the sequence sorted.
    ///
    /// Returns `false` without inserting when an entry with a norm inside the
    /// tie window already carries the identical multi-index.
    pub fn insert(&mut self, index: MultiIndex, norm: f64) -> bool {
        let window = tie_window(norm);
        // everything at or below `norm + window` stays ahead of the newcomer,
        // which puts it last among its ties (FIFO)
        let upper = self.entries.partition_point(|c| c.norm <= norm + window);
        let lower = self.entries.partition_point(|c| c.norm < norm - window);
        if self.entries.range(lower..upper).any(|c| c.index == index) {
            return false;
        }
        self.entries.insert(upper, Candidate { index, norm });
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }
}
