//! Graded-lexicographic (total-degree) enumeration.
//!
//! Multi-indices are ordered first by increasing total degree, and within a
//! degree class by decreasing leading components (the canonical graded-lex
//! order: `[2,0]` before `[1,1]` before `[0,2]`). The ordering admits
//! closed-form counting (the number of degree-`s` multi-indices over `d`
//! dimensions is C(s + d - 1, d - 1)), so ranks and strata are computed
//! directly from binomial coefficients and the scheme carries no cache.

use serde::{Deserialize, Serialize};

use crate::enum_error::EnumError;
use crate::enumerate::cache::InvalidateCache;
use crate::enumerate::combinatorics::{
    compositions, compositions_below, cumulated_compositions,
};
use crate::enumerate::scheme::EnumerateScheme;
use crate::lattice::MultiIndex;

/// Linear ("total-degree") enumeration of ℕᵈ.
///
/// Stratum `s` is exactly the degree-`s` class, so
/// `stratum_cardinal(s) == C(s + d - 1, d - 1)` and
/// `cumulated_cardinal(s) == C(s + d, d)`.
///
/// # Example
/// ```
/// use index_sieve::prelude::*;
///
/// let scheme = GradedLexEnumerator::new(2).unwrap();
/// assert_eq!(scheme.at(0), MultiIndex::from([0, 0]));
/// assert_eq!(scheme.at(3), MultiIndex::from([2, 0]));
/// assert_eq!(scheme.rank_of(&MultiIndex::from([1, 1])).unwrap(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedLexEnumerator {
    dimension: usize,
}

impl GradedLexEnumerator {
    /// Creates a scheme over `dimension` dimensions.
    ///
    /// Fails with [`EnumError::ZeroDimension`] for `dimension == 0`.
    pub fn new(dimension: usize) -> Result<Self, EnumError> {
        if dimension == 0 {
            return Err(EnumError::ZeroDimension);
        }
        Ok(GradedLexEnumerator { dimension })
    }

    /// Replace the dimension.
    ///
    /// The scheme is stateless beyond `dimension`, so nothing else needs
    /// invalidating; previously obtained ranks are meaningless afterwards.
    pub fn set_dimension(&mut self, dimension: usize) -> Result<(), EnumError> {
        if dimension == 0 {
            return Err(EnumError::ZeroDimension);
        }
        self.dimension = dimension;
        Ok(())
    }

    /// Size of the complete basis of total degree at most `total_degree`:
    /// C(total_degree + d, d).
    pub fn basis_size_from_total_degree(&self, total_degree: usize) -> usize {
        cumulated_compositions(total_degree, self.dimension)
    }

    /// Smallest total degree `D` whose degree class contains `rank`.
    fn degree_of_rank(&self, rank: usize) -> usize {
        let mut degree = 0;
        while cumulated_compositions(degree, self.dimension) <= rank {
            degree += 1;
        }
        degree
    }
}

impl EnumerateScheme for GradedLexEnumerator {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn at(&self, rank: usize) -> MultiIndex {
        let d = self.dimension;
        let degree = self.degree_of_rank(rank);
        // rank within the degree class
        let mut remainder = rank - compositions_below(degree, d);
        let mut degrees = vec![0usize; d];
        let mut remaining = degree;
        // peel the leading components, most significant dimension first
        for i in 0..d - 1 {
            if remaining == 0 {
                break;
            }
            let sub = d - i - 1;
            let mut head = remaining;
            loop {
                // multi-indices whose component i equals `head`
                let block = compositions(remaining - head, sub);
                if remainder < block {
                    degrees[i] = head;
                    remaining -= head;
                    break;
                }
                remainder -= block;
                head -= 1;
            }
        }
        degrees[d - 1] = remaining;
        MultiIndex::new(degrees)
    }

    fn rank_of(&self, index: &MultiIndex) -> Result<usize, EnumError> {
        let d = self.dimension;
        if index.dimension() != d {
            return Err(EnumError::DimensionMismatch {
                expected: d,
                got: index.dimension(),
            });
        }
        let degree = index.total_degree();
        if degree == 0 {
            return Ok(0);
        }
        let mut rank = compositions_below(degree, d);
        let mut remaining = degree;
        for i in 0..d - 1 {
            if remaining == 0 {
                break;
            }
            let sub = d - i - 1;
            // classes with a larger component i precede this index
            for head in index[i] + 1..=remaining {
                rank += compositions(remaining - head, sub);
            }
            remaining -= index[i];
        }
        Ok(rank)
    }

    fn cumulated_cardinal(&self, stratum: usize) -> usize {
        cumulated_compositions(stratum, self.dimension)
    }

    fn stratum_cardinal(&self, stratum: usize) -> usize {
        compositions(stratum, self.dimension)
    }

    fn max_degree_stratum_index(&self, max_degree: usize) -> usize {
        max_degree
    }

    fn max_degree_cardinal(&self, max_degree: usize) -> usize {
        cumulated_compositions(max_degree, self.dimension)
    }
}

impl InvalidateCache for GradedLexEnumerator {
    // closed-form scheme: nothing to invalidate
    fn invalidate_cache(&mut self) {}
}
