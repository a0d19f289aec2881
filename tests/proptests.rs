//! Property-based tests.

use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use mini_rsa::{
    algorithms::{
        euclid::{gcd, is_coprime, mod_inverse},
        modular::{mod_mul, mod_pow},
    },
    traits::{PrivateKeyParts, PublicKeyParts},
    Error, RsaPrivateKey, RsaPublicKey,
};

prop_compose! {
    // WARNING: do *NOT* copy and paste this code. It's insecure and optimized for test speed.
    fn key_pair()(seed in any::<[u8; 32]>()) -> RsaPrivateKey<u64> {
        let mut rng = ChaCha8Rng::from_seed(seed);
        RsaPrivateKey::new(&mut rng).unwrap()
    }
}

proptest! {
    #[test]
    fn encrypt_decrypt_roundtrip(key in key_pair(), m in any::<u64>()) {
        let [p, q] = key.primes();
        // Colliding primes are a permitted, documented degeneracy; the round
        // trip only holds for distinct ones.
        prop_assume!(p != q);

        let m = m % key.n();
        let c = RsaPublicKey::from(&key).encrypt(m).unwrap();
        prop_assert_eq!(key.decrypt(c).unwrap(), m);
    }

    #[test]
    fn public_exponent_coprime_to_totient(key in key_pair()) {
        let [p, q] = key.primes();
        prop_assert!(is_coprime(key.e(), (p - 1) * (q - 1)));
    }

    #[test]
    fn private_exponent_inverts_public(key in key_pair()) {
        let [p, q] = key.primes();
        let totient = (p - 1) * (q - 1);
        prop_assume!(totient > 1);
        prop_assert_eq!(mod_mul(key.e(), key.d(), totient).unwrap(), 1);
    }

    #[test]
    fn gcd_commutative(a in -(1i64 << 31)..(1i64 << 31), b in -(1i64 << 31)..(1i64 << 31)) {
        prop_assert_eq!(gcd(a, b), gcd(b, a));
    }

    #[test]
    fn gcd_of_zero_is_magnitude(a in -(1i64 << 31)..(1i64 << 31)) {
        prop_assert_eq!(gcd(a, 0), a.abs());
    }

    #[test]
    fn gcd_divides_both(a in -(1i64 << 31)..(1i64 << 31), b in -(1i64 << 31)..(1i64 << 31)) {
        let g = gcd(a, b);
        prop_assume!(g != 0);
        prop_assert_eq!(a % g, 0);
        prop_assert_eq!(b % g, 0);
    }

    #[test]
    fn mod_pow_zero_exponent_is_one(a in any::<u64>(), m in 1u64..) {
        prop_assert_eq!(mod_pow(a, 0, m).unwrap(), 1);
    }

    #[test]
    fn mod_pow_unit_exponent_reduces(a in any::<u64>(), m in 1u64..) {
        prop_assert_eq!(mod_pow(a, 1, m).unwrap(), a % m);
    }

    #[test]
    fn mod_inverse_multiplies_to_one(x in 1u64..10_000, m in 2u64..10_000) {
        match mod_inverse(x, m) {
            Ok(inverse) => {
                prop_assert!(inverse < m);
                prop_assert_eq!(mod_mul(x, inverse, m).unwrap(), 1);
            }
            Err(err) => {
                prop_assert_eq!(err, Error::NoInverse);
                prop_assert_ne!(gcd(x, m), 1);
            }
        }
    }
}
