//! `MultiIndex`: per-dimension polynomial degrees as a value type
//!
//! A multi-index is an ordered tuple of non-negative integers, one per basis
//! dimension; component `i` is the degree of the marginal polynomial along
//! dimension `i`. The all-zero multi-index denotes the constant function.
//!
//! This module provides:
//! - A `MultiIndex` newtype around `Vec<usize>` with equality, hashing,
//!   ordering, and serde support so it can live in maps, caches, and
//!   persisted scheme parameters.
//! - Small degree helpers (`total_degree`, `bumped`) used by the enumeration
//!   schemes when walking the lattice.

use std::fmt;
use std::ops::Index;

/// An ordered tuple of per-dimension degrees.
///
/// Two multi-indices are equal iff all components match; the derived `Ord` is
/// plain lexicographic on components and exists only so `MultiIndex` can key
/// ordered collections. The enumeration orderings themselves live in the
/// schemes.
#[derive(
    Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct MultiIndex(Vec<usize>);

impl MultiIndex {
    /// Wraps an explicit degree tuple.
    #[inline]
    pub fn new(degrees: Vec<usize>) -> Self {
        MultiIndex(degrees)
    }

    /// The all-zero multi-index of the given dimension.
    #[inline]
    pub fn zeros(dimension: usize) -> Self {
        MultiIndex(vec![0; dimension])
    }

    /// Number of components (the owning scheme's dimension).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Degree along dimension `i`.
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.0[i]
    }

    /// Sum of all components.
    #[inline]
    pub fn total_degree(&self) -> usize {
        self.0.iter().sum()
    }

    /// Iterator over components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// A copy with dimension `i` incremented by one.
    ///
    /// This is the single-step lattice move used by frontier expansion.
    #[inline]
    pub fn bumped(&self, i: usize) -> Self {
        let mut next = self.0.clone();
        next[i] += 1;
        MultiIndex(next)
    }
}

impl From<Vec<usize>> for MultiIndex {
    fn from(degrees: Vec<usize>) -> Self {
        MultiIndex(degrees)
    }
}

impl From<&[usize]> for MultiIndex {
    fn from(degrees: &[usize]) -> Self {
        MultiIndex(degrees.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for MultiIndex {
    fn from(degrees: [usize; N]) -> Self {
        MultiIndex(degrees.to_vec())
    }
}

impl Index<usize> for MultiIndex {
    type Output = usize;
    #[inline]
    fn index(&self, i: usize) -> &usize {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a MultiIndex {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Prints as `[a0, a1, ...]`, matching the tuple notation used in basis
/// construction logs.
impl fmt::Debug for MultiIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl fmt::Display for MultiIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}


#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        let m = MultiIndex::from([3, 0, 1]);
        let s = serde_json::to_string(&m).unwrap();
        let m2: MultiIndex = serde_json::from_str(&s).unwrap();
        assert_eq!(m2, m);
    }

    #[test]
    fn bincode_roundtrip() {
        let m = MultiIndex::from([0, 7]);
        let bytes = bincode::serialize(&m).unwrap();
        let m2: MultiIndex = bincode::deserialize(&bytes).unwrap();
        assert_eq!(m2, m);
    }
}
