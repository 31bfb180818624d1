//! Cyclic group parameters shared by every derivation.

use crate::errors::{Error, Result};
use crate::utils::mod_pow;
use num_bigint::BigUint;
use num_traits::Zero;

/// Group used for verifier computations: a modulus `N` and a generator `g`.
///
/// For real security `N` must be a safe prime of cryptographic size
/// (≥ 2048 bits) and `g` a generator of the full group; the constants in
/// [`constants`](crate::constants) satisfy both. Generator validity is not
/// checked here, only the modulus constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrpGroup {
    n: BigUint,
    g: BigUint,
}

impl SrpGroup {
    /// Create a group from a modulus and generator.
    ///
    /// Returns [`Error::InvalidModulus`] if `n` is smaller than 1, so the
    /// constraint is rejected once at construction rather than on every
    /// exponentiation.
    pub fn new(n: BigUint, g: BigUint) -> Result<Self> {
        if n.is_zero() {
            return Err(Error::InvalidModulus);
        }
        Ok(Self { n, g })
    }

    /// The group modulus `N`
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// The group generator `g`
    pub fn generator(&self) -> &BigUint {
        &self.g
    }

    /// `g ^ x mod N`
    pub(crate) fn modpow(&self, x: &BigUint) -> BigUint {
        mod_pow(&self.g, x, &self.n)
    }
}
