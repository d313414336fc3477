//! Process-wide tunables for enumeration schemes.
//!
//! The anisotropic hyperbolic scheme takes its truncation exponent `q` from a
//! named configuration value when the caller does not supply one, mirroring a
//! resource-map entry such as `"DefaultQ"` in the systems this crate serves.
//! The value is shared across the process and may be overridden at runtime;
//! schemes read it once at construction, so changing it never retroactively
//! affects an existing instance.

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::enum_error::EnumError;

/// Initial value of the `default_q` tunable.
pub const INITIAL_DEFAULT_Q: f64 = 0.4;

struct Tunables {
    default_q: f64,
}

static TUNABLES: Lazy<RwLock<Tunables>> = Lazy::new(|| {
    RwLock::new(Tunables {
        default_q: INITIAL_DEFAULT_Q,
    })
});

/// Current process-wide default truncation exponent.
pub fn default_q() -> f64 {
    TUNABLES.read().default_q
}

/// Override the process-wide default truncation exponent.
///
/// Fails with [`EnumError::InvalidQ`] unless `q` lies in (0, 1].
pub fn set_default_q(q: f64) -> Result<(), EnumError> {
    if !(q > 0.0 && q <= 1.0) {
        return Err(EnumError::InvalidQ(q));
    }
    TUNABLES.write().default_q = q;
    Ok(())
}
