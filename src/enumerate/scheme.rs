//! Core trait for multi-index enumeration schemes.
//!
//! This module defines the [`EnumerateScheme`] trait, the bijection between a
//! linear rank (0, 1, 2, ...) and a multi-index of per-dimension degrees.
//! Basis-construction code drives a scheme by asking for `at(k)` for
//! k = 0, 1, 2, ... and turns each returned tuple into a product of marginal
//! univariate polynomials; the scheme supplies only the exponent tuple, never
//! the function itself.

use crate::enum_error::EnumError;
use crate::lattice::MultiIndex;

/// A total ordering of ℕᵈ exposed as a rank ↔ multi-index bijection.
///
/// # Contract
/// - `at(0)` is always the all-zero multi-index.
/// - `rank_of(at(r)) == r` for every rank `r`.
/// - `at` is deterministic over the lifetime of a scheme instance.
/// - There is no "rank too large" error: schemes are total over all ranks and
///   simply keep growing internal state, so an enormous rank costs time, not
///   an error.
///
/// # Strata
/// Ranks are partitioned into *strata*, groups of multi-indices equally
/// distant from the origin under a scheme-specific notion: total degree for
/// the graded scheme, frontier-generation number for the anisotropic one.
/// `cumulated_cardinal(s)` counts every rank up to and including stratum `s`.
///
/// # Logical constness
/// Queries take `&self` but may grow memoized caches internally; see the
/// scheme types for how that mutation is synchronized.
pub trait EnumerateScheme {
    /// Fixed dimension of the enumerated multi-indices; never zero.
    fn dimension(&self) -> usize;

    /// The multi-index of rank `rank` under this scheme's ordering.
    fn at(&self, rank: usize) -> MultiIndex;

    /// The rank `r` such that `at(r) == *index`.
    ///
    /// Fails with [`EnumError::DimensionMismatch`] when the supplied
    /// multi-index length differs from [`dimension`](Self::dimension).
    fn rank_of(&self, index: &MultiIndex) -> Result<usize, EnumError>;

    /// Number of multi-indices whose rank lies in strata `0..=stratum`.
    fn cumulated_cardinal(&self, stratum: usize) -> usize;

    /// Number of multi-indices in stratum `stratum` alone.
    fn stratum_cardinal(&self, stratum: usize) -> usize {
        let upper = self.cumulated_cardinal(stratum);
        match stratum {
            0 => upper,
            s => upper - self.cumulated_cardinal(s - 1),
        }
    }

    /// Index of the stratum containing the highest-ranked multi-index of
    /// total degree at most `max_degree`.
    fn max_degree_stratum_index(&self, max_degree: usize) -> usize;

    /// Number of multi-indices of total degree at most `max_degree`.
    ///
    /// Equals C(max_degree + d, d) for every scheme; the anisotropic scheme
    /// obtains it by growing its cache until all such indices are ranked.
    fn max_degree_cardinal(&self, max_degree: usize) -> usize;

    /// Unbounded iterator yielding `at(0), at(1), at(2), ...`.
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = MultiIndex> + 'a> {
        let mut rank = 0usize;
        Box::new(std::iter::from_fn(move || {
            let index = self.at(rank);
            rank += 1;
            Some(index)
        }))
    }
}
