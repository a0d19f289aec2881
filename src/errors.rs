//! Error types.

/// Alias for [`core::result::Result`] with the `mini-rsa` [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// No modular multiplicative inverse exists for the given pair, i.e.
    /// the value and the modulus are not coprime.
    NoInverse,

    /// An intermediate product or sum exceeded the range of the working
    /// integer type.
    ArithmeticOverflow,

    /// The public-exponent search exhausted its probe budget without finding
    /// a candidate coprime to the totient.
    NoValidExponent,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::NoInverse => write!(f, "no modular multiplicative inverse exists"),
            Error::ArithmeticOverflow => write!(f, "arithmetic overflow"),
            Error::NoValidExponent => write!(f, "no valid public exponent found"),
        }
    }
}

impl core::error::Error for Error {}
