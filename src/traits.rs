//! Traits related to the key components.

/// Components of an RSA public key over the working integer type `T`.
pub trait PublicKeyParts<T> {
    /// Returns the modulus of the key.
    fn n(&self) -> T;

    /// Returns the public exponent of the key.
    fn e(&self) -> T;
}

/// Components of an RSA private key over the working integer type `T`.
pub trait PrivateKeyParts<T>: PublicKeyParts<T> {
    /// Returns the private exponent of the key.
    fn d(&self) -> T;

    /// Returns the two prime factors of the modulus.
    fn primes(&self) -> [T; 2];
}
