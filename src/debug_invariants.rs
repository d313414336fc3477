//! Internal consistency checks for memoized enumeration state.

use crate::enum_error::EnumError;

/// Whether invariant checks run in this build.
#[inline]
pub const fn invariants_enabled() -> bool {
    cfg!(any(
        debug_assertions,
        feature = "strict-invariants",
        feature = "check-invariants"
    ))
}

/// Validation hooks for types that carry derived enumeration state (rank
/// caches, frontiers, strata bookkeeping).
pub trait DebugInvariants {
    /// Panic on the first violated invariant; a no-op unless
    /// [`invariants_enabled`] holds.
    fn debug_assert_invariants(&self) {
        if invariants_enabled() {
            if let Err(e) = self.validate_invariants() {
                panic!("[invariants] {e}");
            }
        }
    }

    /// Check every invariant, returning the first violation as
    /// [`EnumError::InvariantViolation`].
    fn validate_invariants(&self) -> Result<(), EnumError>;
}
