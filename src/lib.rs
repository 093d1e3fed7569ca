#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(missing_docs)]

pub use crypt::*;

/// Digest primitives underlying the hash schemes.
pub use checksums;
