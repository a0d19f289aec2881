//! Modular-arithmetic building blocks behind key generation and the raw RSA
//! operations.

pub mod euclid;
pub mod integer;
pub mod modular;
pub mod rsa;

pub(crate) mod generate;

pub use generate::SMALL_PRIMES;
