//! RSA key types over a fixed-width working integer.

use rand_core::RngCore;

use crate::algorithms::generate::{generate_key_components, RsaKeyComponents};
use crate::algorithms::integer::RsaInt;
use crate::algorithms::rsa::{rsa_decrypt, rsa_encrypt};
use crate::errors::Result;
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Represents the public part of an RSA key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPublicKey<T> {
    n: T,
    e: T,
}

/// Represents a whole RSA key, public and private parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPrivateKey<T> {
    /// Modulus
    n: T,
    /// Public exponent
    e: T,
    /// Private exponent
    d: T,
    /// Prime factors of the modulus
    primes: [T; 2],
}

impl<T: RsaInt> RsaPublicKey<T> {
    /// Constructs a public key from its components. No validation is
    /// performed.
    pub fn new(n: T, e: T) -> Self {
        RsaPublicKey { n, e }
    }

    /// Encrypts the message `m` with this key, reducing it modulo `n` first.
    pub fn encrypt(&self, m: T) -> Result<T> {
        rsa_encrypt(self, m)
    }
}

impl<T: RsaInt> RsaPrivateKey<T> {
    /// Generates a fresh key pair from the small-prime pool using the given
    /// random source.
    ///
    /// The primes are drawn with replacement, so the pair can collide; a
    /// colliding pair still yields a key, but one whose encrypt/decrypt
    /// round trip is not faithful. Fails when the working type is too narrow
    /// for the drawn components or when no public exponent can be found.
    pub fn new<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self> {
        let RsaKeyComponents { n, e, d, primes } = generate_key_components(rng)?;
        Ok(RsaPrivateKey { n, e, d, primes })
    }

    /// Constructs a key from previously computed components. No validation
    /// is performed.
    pub fn from_components(n: T, e: T, d: T, primes: [T; 2]) -> Self {
        RsaPrivateKey { n, e, d, primes }
    }

    /// Decrypts the ciphertext `c` with this key.
    pub fn decrypt(&self, c: T) -> Result<T> {
        rsa_decrypt(self, c)
    }
}

impl<T: Copy> PublicKeyParts<T> for RsaPublicKey<T> {
    fn n(&self) -> T {
        self.n
    }

    fn e(&self) -> T {
        self.e
    }
}

impl<T: Copy> PublicKeyParts<T> for RsaPrivateKey<T> {
    fn n(&self) -> T {
        self.n
    }

    fn e(&self) -> T {
        self.e
    }
}

impl<T: Copy> PrivateKeyParts<T> for RsaPrivateKey<T> {
    fn d(&self) -> T {
        self.d
    }

    fn primes(&self) -> [T; 2] {
        self.primes
    }
}

impl<T: Copy> From<RsaPrivateKey<T>> for RsaPublicKey<T> {
    fn from(private_key: RsaPrivateKey<T>) -> Self {
        RsaPublicKey {
            n: private_key.n,
            e: private_key.e,
        }
    }
}

impl<T: Copy> From<&RsaPrivateKey<T>> for RsaPublicKey<T> {
    fn from(private_key: &RsaPrivateKey<T>) -> Self {
        RsaPublicKey {
            n: private_key.n,
            e: private_key.e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_into() {
        let private_key = RsaPrivateKey::from_components(41707u64, 17231, 27295, [179, 233]);
        let public_key: RsaPublicKey<u64> = private_key.into();

        assert_eq!(public_key.n(), 41707);
        assert_eq!(public_key.e(), 17231);
    }

    #[test]
    fn test_textbook_key_roundtrip() {
        // p = 179, q = 233: n = 41707, phi = 41296, and 17231 * 27295 ≡ 1
        // (mod 41296).
        let key = RsaPrivateKey::from_components(41707u64, 17231, 27295, [179, 233]);
        assert_eq!((key.e() * key.d()) % 41296, 1);

        let c = RsaPublicKey::from(&key).encrypt(12345).unwrap();
        assert_ne!(c, 12345);
        assert_eq!(key.decrypt(c).unwrap(), 12345);
    }

    #[test]
    fn test_generated_key_roundtrip() {
        use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let mut tested = 0;

        while tested < 10 {
            let key = RsaPrivateKey::<u64>::new(&mut rng).unwrap();
            let [p, q] = key.primes();
            if p == q {
                // Colliding primes are permitted but break the round trip.
                continue;
            }

            let public_key = RsaPublicKey::from(&key);
            for m in [0, 1, 2, p, key.n() - 1, 12345 % key.n()] {
                let c = public_key.encrypt(m).unwrap();
                assert_eq!(key.decrypt(c).unwrap(), m, "m = {} failed for {:?}", m, key);
            }
            tested += 1;
        }
    }
}
