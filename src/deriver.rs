//! Derivation of password verifiers for account registration.
//!
//! The password itself never leaves the caller's stack frame: it is hashed
//! together with the salt, the digest is interpreted as a big integer `x` and
//! only `g^x mod N` is handed back, as a decimal string ready for transport.

use crate::errors::{Error, Result};
use crate::group::SrpGroup;
use crate::utils::random_salt;
use core::marker::PhantomData;
use digest::Digest;
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};

/// Derives password verifiers over a fixed group.
///
/// Generic over the digest `D` used for `x = H(salt ":" password)` and the
/// CSPRNG used for salt generation. Every derivation is deterministic in its
/// inputs; only [`generate_salt`](Self::generate_salt) consumes entropy.
pub struct VerifierDeriver<D, CSPRNG>
where
    D: Digest,
    CSPRNG: RngCore + CryptoRng,
{
    group: SrpGroup,
    rng: CSPRNG,
    d: PhantomData<D>,
}

impl<D, CSPRNG> VerifierDeriver<D, CSPRNG>
where
    D: Digest,
    CSPRNG: RngCore + CryptoRng,
{
    /// Create a new deriver over `group`, drawing salts from `rng`
    pub fn new(group: SrpGroup, rng: CSPRNG) -> Self {
        Self {
            group,
            rng,
            d: PhantomData,
        }
    }

    /// The group this deriver computes in
    pub fn group(&self) -> &SrpGroup {
        &self.group
    }

    /// Generate a fresh per-account salt as a decimal string.
    ///
    /// Call once at registration; the salt is stored server-side and reused
    /// on every authentication attempt for that account.
    pub fn generate_salt(&mut self) -> String {
        random_salt(&mut self.rng)
    }

    /// Derive the verifier for `(password, salt)` as a decimal string.
    ///
    /// Computes `x = H(salt ":" password)` and returns `g^x mod N`. Empty
    /// passwords and salts are accepted; the result is still well defined.
    ///
    /// # Return:
    /// either
    /// - Ok(`verifier`): the decimal representation of `g^x mod N`
    /// - Err([`Error::HashUnavailable`]): the digest produced no output
    ///
    pub fn compute_verifier(&self, password: &str, salt: &str) -> Result<String> {
        let mut hasher = D::new();
        hasher.update(salt.as_bytes());
        hasher.update(b":");
        hasher.update(password.as_bytes());
        let digest = hasher.finalize();
        if digest.is_empty() {
            return Err(Error::HashUnavailable);
        }

        // big-endian digest bytes are exactly the hex digest read base 16
        let x = BigUint::from_bytes_be(&digest);
        Ok(self.group.modpow(&x).to_str_radix(10))
    }

    /// One-shot registration: a fresh salt and the verifier derived from it.
    ///
    /// This is also the password-change path; calling it again produces a new
    /// salt, never reusing the old one.
    pub fn register(&mut self, password: &str) -> Result<Registration> {
        let salt = self.generate_salt();
        let verifier = self.compute_verifier(password, &salt)?;
        Ok(Registration { salt, verifier })
    }
}

/// The `(salt, verifier)` pair sent to the account-registration collaborator.
///
/// Both fields are decimal strings. Persisting them is the server side's job;
/// nothing here retains the password they were derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registration {
    /// Per-account random salt
    pub salt: String,
    /// Password verifier `g^x mod N`
    pub verifier: String,
}
