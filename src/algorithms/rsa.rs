//! Raw RSA operations over the key-part traits.

use crate::algorithms::integer::RsaInt;
use crate::algorithms::modular::mod_pow;
use crate::errors::Result;
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Raw RSA encryption of `m` with the public key. No padding is performed;
/// `m` is reduced modulo `n` first.
#[inline]
pub fn rsa_encrypt<T: RsaInt, K: PublicKeyParts<T>>(key: &K, m: T) -> Result<T> {
    mod_pow(m, key.e(), key.n())
}

/// Raw RSA decryption of `c` with the private key. No padding or error
/// checking is performed; `c` is reduced modulo `n` first.
#[inline]
pub fn rsa_decrypt<T: RsaInt, K: PrivateKeyParts<T>>(key: &K, c: T) -> Result<T> {
    mod_pow(c, key.d(), key.n())
}
