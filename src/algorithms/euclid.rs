//! Euclidean gcd and the extended-Euclidean modular inverse.

use core::mem;

use crate::algorithms::integer::RsaInt;
use crate::errors::{Error, Result};

/// Computes the greatest common divisor of `|a|` and `|b|` by repeated
/// remainder reduction.
///
/// Returns 0 only when both inputs are 0.
pub fn gcd<T: RsaInt>(a: T, b: T) -> T {
    let mut ta = a.abs_value();
    let mut tb = b.abs_value();
    if ta < tb {
        mem::swap(&mut ta, &mut tb);
    }
    while !tb.is_zero() {
        ta = ta % tb;
        mem::swap(&mut ta, &mut tb);
    }
    ta
}

/// Returns true iff `a` and `b` share no factor other than 1.
#[inline]
pub fn is_coprime<T: RsaInt>(a: T, b: T) -> bool {
    gcd(a, b) == T::one()
}

/// Computes `d` such that `b * d ≡ 1 (mod |modulus|)`, with `d` normalized
/// into `[0, |modulus|)`.
///
/// The extended Euclidean algorithm runs on `(|modulus|, |b|)` with the
/// Bézout coefficients tracked in a widened accumulator; overflow of an
/// intermediate is reported as [`Error::ArithmeticOverflow`]. When `b` and
/// the modulus are not coprime no inverse exists and [`Error::NoInverse`] is
/// returned, as it is for a zero modulus.
pub fn mod_inverse<T: RsaInt>(b: T, modulus: T) -> Result<T> {
    let m = modulus
        .abs_value()
        .to_i128()
        .ok_or(Error::ArithmeticOverflow)?;
    if m == 0 {
        return Err(Error::NoInverse);
    }

    let mut a = m;
    let mut r = b.abs_value().to_i128().ok_or(Error::ArithmeticOverflow)?;
    let mut y = 0i128;
    let mut y1 = 1i128;

    while r != 0 {
        let q = a / r;
        let t = a % r;
        a = r;
        r = t;
        let t = y
            .checked_sub(y1.checked_mul(q).ok_or(Error::ArithmeticOverflow)?)
            .ok_or(Error::ArithmeticOverflow)?;
        y = y1;
        y1 = t;
    }

    if a != 1 {
        return Err(Error::NoInverse);
    }

    let mut d = y.rem_euclid(m);
    if b < T::zero() {
        // The inverse of -b is the negation of the inverse of b, folded back
        // into [0, m).
        d = (m - d) % m;
    }

    T::from(d).ok_or(Error::ArithmeticOverflow)
}
