//! Helpers over the primitive integer types.

use num_traits::{CheckedAdd, CheckedMul, PrimInt};

/// Absolute value over any primitive integer.
///
/// Unsigned types short-circuit to the identity at the type level, so no
/// negation is ever attempted on them.
pub trait AbsValue: PrimInt {
    /// Returns the absolute value of `self`.
    ///
    /// For signed types the minimum representable value must not be passed;
    /// its negation does not fit the type.
    fn abs_value(self) -> Self;
}

macro_rules! unsigned_abs_value_impl {
    ($($t:ty)*) => {$(
        impl AbsValue for $t {
            #[inline]
            fn abs_value(self) -> Self {
                self
            }
        }
    )*};
}

macro_rules! signed_abs_value_impl {
    ($($t:ty)*) => {$(
        impl AbsValue for $t {
            #[inline]
            fn abs_value(self) -> Self {
                if self < 0 {
                    -self
                } else {
                    self
                }
            }
        }
    )*};
}

unsigned_abs_value_impl!(u8 u16 u32 u64 u128 usize);
signed_abs_value_impl!(i8 i16 i32 i64 i128 isize);

/// Integer types the RSA arithmetic can use as its working word.
///
/// Blanket-implemented for every primitive integer. The checked-arithmetic
/// bounds let the callers surface overflow instead of wrapping.
pub trait RsaInt: PrimInt + AbsValue + CheckedAdd + CheckedMul {}

impl<T: PrimInt + AbsValue + CheckedAdd + CheckedMul> RsaInt for T {}

/// Returns true iff the least-significant bit of `x` is 0.
///
/// Equivalent to `x mod 2 == 0` for all values, negative ones included, under
/// two's complement.
#[inline]
pub fn is_even<T: PrimInt>(x: T) -> bool {
    (x & T::one()).is_zero()
}
