//! Key generation from the fixed pool of small primes.

use rand_core::RngCore;

use crate::algorithms::euclid::{is_coprime, mod_inverse};
use crate::algorithms::integer::RsaInt;
use crate::errors::{Error, Result};

/// The fixed, ordered pool of small primes the key generator samples from.
///
/// Keys built from these are toy-sized by construction; the pool exists so
/// that no primality testing is ever needed.
pub const SMALL_PRIMES: [u8; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Upper bound on the linear probe for a public exponent.
///
/// The totient never exceeds 250 * 250, and the largest gap between odd
/// numbers coprime to any value in that range is tiny, so the bound is never
/// hit in practice; it exists to keep the loop provably finite.
const EXPONENT_PROBE_LIMIT: usize = 1_000;

/// Components of a freshly generated RSA key.
pub(crate) struct RsaKeyComponents<T> {
    pub n: T,
    pub e: T,
    pub d: T,
    pub primes: [T; 2],
}

/// Generates the components of an RSA key pair over the working type `T`
/// using the given random source.
///
/// The two primes are drawn from [`SMALL_PRIMES`] independently, with
/// replacement: drawing the same prime twice is permitted even though the
/// resulting key is degenerate. The modulus and totient are formed with
/// checked multiplication so a working type too narrow for the drawn primes
/// reports [`Error::ArithmeticOverflow`] instead of wrapping.
pub(crate) fn generate_key_components<T, R>(rng: &mut R) -> Result<RsaKeyComponents<T>>
where
    T: RsaInt,
    R: RngCore + ?Sized,
{
    let p: T = draw_prime(rng)?;
    let q = draw_prime(rng)?;

    let n = p.checked_mul(&q).ok_or(Error::ArithmeticOverflow)?;
    let totient = (p - T::one())
        .checked_mul(&(q - T::one()))
        .ok_or(Error::ArithmeticOverflow)?;

    let e = find_public_exponent(rng, totient)?;
    let d = mod_inverse(e, totient)?;

    Ok(RsaKeyComponents {
        n,
        e,
        d,
        primes: [p, q],
    })
}

fn draw_prime<T, R>(rng: &mut R) -> Result<T>
where
    T: RsaInt,
    R: RngCore + ?Sized,
{
    let idx = uniform_below(rng, SMALL_PRIMES.len() as u64) as usize;
    T::from(SMALL_PRIMES[idx]).ok_or(Error::ArithmeticOverflow)
}

/// Draws an odd candidate below the totient, then probes upward by 2 until a
/// value coprime to the totient is found.
fn find_public_exponent<T, R>(rng: &mut R, totient: T) -> Result<T>
where
    T: RsaInt,
    R: RngCore + ?Sized,
{
    let bound = totient.to_u64().ok_or(Error::ArithmeticOverflow)?;
    let candidate = uniform_below(rng, bound) | 1;
    let mut e = T::from(candidate).ok_or(Error::ArithmeticOverflow)?;
    let two = T::one() + T::one();

    for _ in 0..EXPONENT_PROBE_LIMIT {
        if is_coprime(e, totient) {
            return Ok(e);
        }
        e = e.checked_add(&two).ok_or(Error::ArithmeticOverflow)?;
    }

    Err(Error::NoValidExponent)
}

/// Returns a uniformly distributed value in `[0, bound)`.
///
/// Rejection sampling keeps the draw unbiased: draws below
/// `2^64 mod bound` are discarded.
fn uniform_below<R: RngCore + ?Sized>(rng: &mut R, bound: u64) -> u64 {
    debug_assert!(bound > 0);
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let v = rng.next_u64();
        if v >= threshold {
            return v % bound;
        }
    }
}
