//! Modular multiplication and exponentiation on fixed-width integers.

use crate::algorithms::euclid::mod_inverse;
use crate::algorithms::integer::{is_even, RsaInt};
use crate::errors::{Error, Result};

/// Computes `(a * b) mod modulus`.
///
/// The intermediate product is formed in the working type itself, so the
/// caller should keep `a` and `b` in `[0, modulus)` and pick a type wide
/// enough that `modulus^2` fits; otherwise the checked multiplication reports
/// [`Error::ArithmeticOverflow`] instead of wrapping.
///
/// # Panics
///
/// Panics if `modulus` is zero.
#[inline]
pub fn mod_mul<T: RsaInt>(a: T, b: T, modulus: T) -> Result<T> {
    let product = a.checked_mul(&b).ok_or(Error::ArithmeticOverflow)?;
    Ok(product % modulus)
}

/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// A zero exponent returns 1 before anything is reduced, so
/// `mod_pow(0, 0, 0) == 1`. A negative exponent replaces the reduced base
/// with its modular inverse and exponentiates by `|exponent|`; if no inverse
/// exists the error propagates. Costs O(log exponent) modular
/// multiplications.
///
/// # Panics
///
/// Panics if `modulus` is zero and `exponent` is not.
pub fn mod_pow<T: RsaInt>(base: T, exponent: T, modulus: T) -> Result<T> {
    if exponent.is_zero() {
        return Ok(T::one());
    }

    let mut power = base % modulus;
    if exponent < T::zero() {
        power = mod_inverse(power, modulus)?;
    }

    let mut exp = exponent.abs_value();
    let mut acc = T::one();
    loop {
        if !is_even(exp) {
            acc = mod_mul(acc, power, modulus)?;
        }
        exp = exp >> 1;
        if exp.is_zero() {
            break;
        }
        power = mod_mul(power, power, modulus)?;
    }

    Ok(acc)
}
