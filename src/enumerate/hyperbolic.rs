//! Anisotropic hyperbolic-cross enumeration.
//!
//! Multi-indices are streamed in increasing weighted q-norm order, where
//! `norm(a) = (Σ_i (a_i · w_i)^q)^(1/q)` with per-dimension weights `w ≥ 0`
//! and a truncation exponent `q ∈ (0, 1]`. For q < 1 the level sets are
//! concave ("hyperbolic"), so indices that are large in one dimension and
//! near-zero elsewhere precede evenly spread indices of the same total
//! degree; this is the sparsity-promoting ordering used for high-dimensional
//! bases.
//!
//! No closed-form counting exists for a hyperbolic cross, so the scheme grows
//! a memoized rank cache by frontier expansion: repeatedly pop the
//! lowest-norm candidate, append it to the cache, and push its d single-step
//! neighbors. The frontier only ever holds immediate neighbors of accepted
//! points, so its size stays O(d · rank) instead of enumerating the whole
//! lattice.
//!
//! # Strata
//! A stratum closes when the frontier is disjoint from the most recently
//! closed stratum, where `candidate` neighbors `member` iff
//! `Σ_i max(candidate_i - member_i, 0) < 2`. Before the first closure the
//! test is vacuously true, so the zero index always forms stratum 0 alone.
//! For q = 1 and unit weights this reproduces total-degree strata exactly.
//!
//! # Degenerate weights
//! A weight of 0 makes that dimension free: it never contributes to the norm
//! and the enumeration explores the norm-0 shell breadth-first without ever
//! leaving it. `at` stays total, but `rank_of` of an index outside the shell
//! and strata queries past the shell keep growing the cache forever. There is
//! no artificial ceiling; callers opting into zero weights accept this.

use hashbrown::HashMap;
use itertools::Itertools;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::debug_invariants::DebugInvariants;
use crate::enum_error::EnumError;
use crate::enumerate::cache::InvalidateCache;
use crate::enumerate::combinatorics::cumulated_compositions;
use crate::enumerate::frontier::{Frontier, NORM_TIE_TOLERANCE};
use crate::enumerate::scheme::EnumerateScheme;
use crate::lattice::MultiIndex;

/// Memoized growth state; append-only between invalidations.
#[derive(Debug, Default)]
struct GrowthState {
    /// rank -> multi-index, strictly ordered by non-decreasing norm.
    cache: Vec<MultiIndex>,
    /// Reverse lookup, kept in sync with `cache`.
    ranks: HashMap<MultiIndex, usize>,
    /// Candidates not yet assigned a rank.
    frontier: Frontier,
    /// `strata_cumulated[s]` = number of ranks in strata 0..=s.
    strata_cumulated: Vec<usize>,
    /// Members of the most recently closed stratum.
    closed_stratum: Vec<MultiIndex>,
    /// Rank where the currently accumulating stratum starts.
    open_since: usize,
}

/// Weighted hyperbolic-cross enumeration of ℕᵈ.
///
/// Construction fails with [`EnumError::ZeroDimension`] /
/// [`EnumError::EmptyWeight`] for a degenerate dimension, with
/// [`EnumError::InvalidQ`] for `q` outside (0, 1], and with
/// [`EnumError::NegativeWeight`] for a negative weight component.
///
/// The growth state lives behind a mutex, so the query surface takes `&self`
/// and a shared instance is safe across threads; queries serialize on cache
/// growth.
///
/// # Example
/// ```
/// use index_sieve::prelude::*;
///
/// let scheme = AnisotropicHyperbolicEnumerator::with_q(2, 0.5).unwrap();
/// assert_eq!(scheme.at(0), MultiIndex::from([0, 0]));
/// // extremes precede the evenly spread index of the same total degree
/// let corner = scheme.rank_of(&MultiIndex::from([2, 0])).unwrap();
/// let mixed = scheme.rank_of(&MultiIndex::from([1, 1])).unwrap();
/// assert!(corner < mixed);
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct AnisotropicHyperbolicEnumerator {
    weight: Vec<f64>,
    q: f64,
    #[serde(skip)]
    state: Mutex<GrowthState>,
}

impl AnisotropicHyperbolicEnumerator {
    /// Unit weights over `dimension` dimensions, q from
    /// [`config::default_q`].
    pub fn new(dimension: usize) -> Result<Self, EnumError> {
        Self::with_q(dimension, config::default_q())
    }

    /// Unit weights over `dimension` dimensions with an explicit `q`.
    pub fn with_q(dimension: usize, q: f64) -> Result<Self, EnumError> {
        if dimension == 0 {
            return Err(EnumError::ZeroDimension);
        }
        Self::with_weight_and_q(vec![1.0; dimension], q)
    }

    /// Explicit weight vector (dimension inferred from its length), q from
    /// [`config::default_q`].
    pub fn with_weight(weight: Vec<f64>) -> Result<Self, EnumError> {
        Self::with_weight_and_q(weight, config::default_q())
    }

    /// Explicit weight vector and truncation exponent.
    pub fn with_weight_and_q(weight: Vec<f64>, q: f64) -> Result<Self, EnumError> {
        validate_weight(&weight)?;
        validate_q(q)?;
        Ok(AnisotropicHyperbolicEnumerator {
            weight,
            q,
            state: Mutex::new(GrowthState::default()),
        })
    }

    /// Per-dimension importance weights.
    pub fn weight(&self) -> &[f64] {
        &self.weight
    }

    /// Truncation exponent.
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Replace the truncation exponent, discarding all cached state.
    pub fn set_q(&mut self, q: f64) -> Result<(), EnumError> {
        validate_q(q)?;
        self.q = q;
        self.invalidate_cache();
        Ok(())
    }

    /// Replace the weight vector (and with it the dimension), discarding all
    /// cached state.
    pub fn set_weight(&mut self, weight: Vec<f64>) -> Result<(), EnumError> {
        validate_weight(&weight)?;
        self.weight = weight;
        self.invalidate_cache();
        Ok(())
    }

    /// Resize to `dimension` dimensions, truncating the weight vector or
    /// padding it with unit weights, and discard all cached state.
    pub fn set_dimension(&mut self, dimension: usize) -> Result<(), EnumError> {
        if dimension == 0 {
            return Err(EnumError::ZeroDimension);
        }
        self.weight.resize(dimension, 1.0);
        self.invalidate_cache();
        Ok(())
    }

    /// Weighted q-norm of a multi-index of this scheme's dimension.
    pub fn q_norm(&self, index: &MultiIndex) -> f64 {
        index
            .iter()
            .zip(&self.weight)
            .map(|(&x, &w)| (x as f64 * w).powf(self.q))
            .sum::<f64>()
            .powf(1.0 / self.q)
    }

    /// One growth step: pop the lowest-norm candidate into the cache, expand
    /// its neighbors, and close the accumulating stratum if the frontier has
    /// moved clear of the last closed one.
    fn step(&self, state: &mut GrowthState) {
        if state.frontier.is_empty() && state.cache.is_empty() {
            state.frontier.insert(MultiIndex::zeros(self.dimension()), 0.0);
        }
        // non-empty: seeded above, and expansion below always re-fills
        let popped = state
            .frontier
            .pop_front()
            .expect("frontier is non-empty while growth is in progress");
        let rank = state.cache.len();
        state.ranks.insert(popped.index.clone(), rank);
        state.cache.push(popped.index);

        let accepted = &state.cache[rank];
        for i in 0..self.dimension() {
            let neighbor = accepted.bumped(i);
            // equal-norm candidates can be accepted before a parent; never
            // re-admit a ranked index
            if state.ranks.contains_key(&neighbor) {
                continue;
            }
            let norm = self.q_norm(&neighbor);
            state.frontier.insert(neighbor, norm);
        }

        let disjoint = state.frontier.iter().all(|candidate| {
            state
                .closed_stratum
                .iter()
                .all(|member| !is_neighbor(&candidate.index, member))
        });
        if disjoint {
            state.strata_cumulated.push(state.cache.len());
            state.closed_stratum = state.cache[state.open_since..].to_vec();
            state.open_since = state.cache.len();
            log::trace!(
                "stratum {} closed at cardinal {}",
                state.strata_cumulated.len() - 1,
                state.cache.len()
            );
        }
    }

    fn grow_until(&self, state: &mut GrowthState, len: usize) {
        while state.cache.len() < len {
            self.step(state);
        }
    }

    /// Grow until every multi-index of total degree <= `max_degree` is
    /// ranked; returns the highest such rank.
    fn grow_degree_complete(&self, state: &mut GrowthState, max_degree: usize) -> usize {
        let expected = cumulated_compositions(max_degree, self.dimension());
        let mut seen = 0;
        let mut last = None;
        for (rank, index) in state.cache.iter().enumerate() {
            if index.total_degree() <= max_degree {
                seen += 1;
                last = Some(rank);
            }
        }
        while seen < expected {
            self.step(state);
            let rank = state.cache.len() - 1;
            if state.cache[rank].total_degree() <= max_degree {
                seen += 1;
                last = Some(rank);
            }
        }
        last.expect("the zero index has total degree 0 <= max_degree")
    }
}

fn validate_q(q: f64) -> Result<(), EnumError> {
    if q > 0.0 && q <= 1.0 {
        Ok(())
    } else {
        Err(EnumError::InvalidQ(q))
    }
}

fn validate_weight(weight: &[f64]) -> Result<(), EnumError> {
    if weight.is_empty() {
        return Err(EnumError::EmptyWeight);
    }
    for (dim, &value) in weight.iter().enumerate() {
        if !(value >= 0.0) {
            return Err(EnumError::NegativeWeight { dim, value });
        }
    }
    Ok(())
}

/// `candidate` is reachable from `member` by incrementing at most one
/// dimension by one: the sum of positive per-dimension differences is < 2.
fn is_neighbor(candidate: &MultiIndex, member: &MultiIndex) -> bool {
    candidate
        .iter()
        .zip(member)
        .map(|(&c, &m)| c.saturating_sub(m))
        .sum::<usize>()
        < 2
}

impl EnumerateScheme for AnisotropicHyperbolicEnumerator {
    fn dimension(&self) -> usize {
        self.weight.len()
    }

    fn at(&self, rank: usize) -> MultiIndex {
        let mut state = self.state.lock();
        self.grow_until(&mut state, rank + 1);
        state.cache[rank].clone()
    }

    fn rank_of(&self, index: &MultiIndex) -> Result<usize, EnumError> {
        if index.dimension() != self.dimension() {
            return Err(EnumError::DimensionMismatch {
                expected: self.dimension(),
                got: index.dimension(),
            });
        }
        let mut state = self.state.lock();
        loop {
            if let Some(&rank) = state.ranks.get(index) {
                return Ok(rank);
            }
            self.step(&mut state);
        }
    }

    fn cumulated_cardinal(&self, stratum: usize) -> usize {
        let mut state = self.state.lock();
        while state.strata_cumulated.len() <= stratum {
            self.step(&mut state);
        }
        state.strata_cumulated[stratum]
    }

    fn max_degree_stratum_index(&self, max_degree: usize) -> usize {
        let mut state = self.state.lock();
        let last_rank = self.grow_degree_complete(&mut state, max_degree);
        while state
            .strata_cumulated
            .last()
            .is_none_or(|&cumulated| cumulated <= last_rank)
        {
            self.step(&mut state);
        }
        state
            .strata_cumulated
            .partition_point(|&cumulated| cumulated <= last_rank)
    }

    fn max_degree_cardinal(&self, max_degree: usize) -> usize {
        let mut state = self.state.lock();
        self.grow_degree_complete(&mut state, max_degree);
        cumulated_compositions(max_degree, self.dimension())
    }
}

impl InvalidateCache for AnisotropicHyperbolicEnumerator {
    fn invalidate_cache(&mut self) {
        let state = self.state.get_mut();
        state.cache.clear();
        state.ranks.clear();
        state.frontier.clear();
        state.strata_cumulated.clear();
        state.closed_stratum.clear();
        state.open_since = 0;
    }
}

impl Clone for AnisotropicHyperbolicEnumerator {
    /// Clones parameters only; the cache is rebuilt lazily by the clone.
    fn clone(&self) -> Self {
        AnisotropicHyperbolicEnumerator {
            weight: self.weight.clone(),
            q: self.q,
            state: Mutex::new(GrowthState::default()),
        }
    }
}

impl PartialEq for AnisotropicHyperbolicEnumerator {
    /// Parameter equality; cache contents are derived state.
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.q == other.q
    }
}

impl DebugInvariants for AnisotropicHyperbolicEnumerator {
    fn validate_invariants(&self) -> Result<(), EnumError> {
        let state = self.state.lock();
        if state.ranks.len() != state.cache.len() {
            return Err(EnumError::InvariantViolation(format!(
                "rank lookup has {} entries for {} cached ranks",
                state.ranks.len(),
                state.cache.len()
            )));
        }
        for (a, b) in state.cache.iter().tuple_windows() {
            let (na, nb) = (self.q_norm(a), self.q_norm(b));
            if na > nb + NORM_TIE_TOLERANCE * nb.abs().max(1.0) {
                return Err(EnumError::InvariantViolation(format!(
                    "cache norms decrease: {a} ({na}) precedes {b} ({nb})"
                )));
            }
        }
        for (prev, next) in state.strata_cumulated.iter().tuple_windows() {
            if next <= prev {
                return Err(EnumError::InvariantViolation(format!(
                    "strata cumulated counts not increasing: {prev} then {next}"
                )));
            }
        }
        if let Some(&last) = state.strata_cumulated.last() {
            if last > state.cache.len() {
                return Err(EnumError::InvariantViolation(format!(
                    "strata cumulated count {last} exceeds cache size {}",
                    state.cache.len()
                )));
            }
        }
        for candidate in state.frontier.iter() {
            if state.ranks.contains_key(&candidate.index) {
                return Err(EnumError::InvariantViolation(format!(
                    "frontier candidate {} already ranked",
                    candidate.index
                )));
            }
        }
        Ok(())
    }
}
