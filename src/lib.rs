#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub use rand_core;

pub mod algorithms;
pub mod errors;
pub mod traits;

mod key;

pub use crate::{
    algorithms::SMALL_PRIMES,
    errors::{Error, Result},
    key::{RsaPrivateKey, RsaPublicKey},
};
