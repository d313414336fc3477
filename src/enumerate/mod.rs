//! Enumeration schemes: orderings of ℕᵈ exposed as rank ↔ multi-index
//! bijections.

pub mod cache;
pub mod combinatorics;
pub(crate) mod frontier;
pub mod graded;
pub mod hyperbolic;
pub mod scheme;

pub use cache::InvalidateCache;
pub use graded::GradedLexEnumerator;
pub use hyperbolic::AnisotropicHyperbolicEnumerator;
pub use scheme::EnumerateScheme;
