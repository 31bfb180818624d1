use digest::Digest;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::{CryptoRng, RngCore};

/// Number of random bytes drawn for a fresh salt
pub(crate) const SALT_BYTES: usize = 32;

/// Compute `base ^ exponent mod modulus` by iterative square-and-multiply.
///
/// Scans the exponent's bits from least to most significant, multiplying the
/// running result by the current base power whenever the bit is set. Runs in
/// `O(log exponent)` multiplications on values bounded by `modulus²`.
///
/// `modulus` must be at least 1; `mod_pow(_, _, 1) == 0`.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    debug_assert!(!modulus.is_zero(), "modulus must be at least 1");

    let mut result = BigUint::one() % modulus;
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.bit(0) {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exponent >>= 1u32;
    }

    result
}

/// Compute the digest of `message` and hex-encode it.
///
/// Deterministic: identical inputs always produce identical output.
pub fn hash_hex<D: Digest>(message: &[u8]) -> String {
    hex::encode(D::digest(message))
}

/// Draw [`SALT_BYTES`] bytes from `rng` and render them as a decimal string
pub(crate) fn random_salt<CSPRNG>(rng: &mut CSPRNG) -> String
where
    CSPRNG: RngCore + CryptoRng,
{
    let mut bytes = [0u8; SALT_BYTES];
    rng.fill_bytes(&mut bytes);
    BigUint::from_bytes_be(&bytes).to_str_radix(10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::OsRng;
    use sha2::Sha256;

    fn big(n: u32) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn mod_pow_worked_example() {
        // 5^3 = 125 = 5 * 23 + 10
        assert_eq!(mod_pow(&big(5), &big(3), &big(23)), big(10));
    }

    #[test]
    fn mod_pow_zero_exponent_is_one() {
        for m in 2u32..50 {
            for b in 0u32..10 {
                assert_eq!(mod_pow(&big(b), &big(0), &big(m)), big(1));
            }
        }
    }

    #[test]
    fn mod_pow_modulus_one_is_zero() {
        assert_eq!(mod_pow(&big(7), &big(0), &big(1)), big(0));
        assert_eq!(mod_pow(&big(7), &big(100), &big(1)), big(0));
    }

    #[test]
    fn mod_pow_exponents_are_additive() {
        let m = big(1009);
        let b = big(17);
        for e1 in [0u32, 1, 2, 19, 500] {
            for e2 in [0u32, 3, 41, 997] {
                let combined = mod_pow(&b, &(big(e1) + big(e2)), &m);
                let split = (mod_pow(&b, &big(e1), &m) * mod_pow(&b, &big(e2), &m)) % &m;
                assert_eq!(combined, split);
            }
        }
    }

    #[test]
    fn mod_pow_matches_large_known_value() {
        // 2^255 mod (2^255 - 19) == 19
        let m = (BigUint::one() << 255u32) - big(19);
        assert_eq!(mod_pow(&big(2), &big(255), &m), big(19));
    }

    #[test]
    fn hash_hex_is_deterministic() {
        let a = hash_hex::<Sha256>(b"salt123:password");
        let b = hash_hex::<Sha256>(b"salt123:password");
        assert_eq!(a, b);
        // SHA-256 output is 32 bytes, so 64 hex characters
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn hash_hex_differs_on_different_input() {
        assert_ne!(hash_hex::<Sha256>(b"a"), hash_hex::<Sha256>(b"b"));
    }

    #[test]
    fn random_salt_is_decimal() {
        let salt = random_salt(&mut OsRng);
        assert!(!salt.is_empty());
        assert!(salt.chars().all(|c| c.is_ascii_digit()));
    }
}
