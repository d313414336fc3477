//! Lattice value types shared by all enumeration schemes.

pub mod multi_index;

pub use multi_index::MultiIndex;
