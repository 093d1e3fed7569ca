//! crates/crypt/src/error.rs
//!
//! Failure conditions surfaced by the crypt entry points.

use thiserror::Error;

/// Scheme name reported for legacy two-character DES salts.
pub const DES_SCHEME: &str = "DES";

/// Errors returned when a salt or stored hash cannot be used.
///
/// Both conditions are detected before any digest work starts. Out-of-range
/// rounds are not errors; they are clamped into the supported range.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CryptError {
    /// The salt does not match `$<id>$[rounds=<n>$]<salt>` for the selected scheme.
    ///
    /// The empty string always lands here: a hash produced from an empty salt
    /// could never be verified again.
    #[error("invalid salt value: '{salt}'")]
    InvalidSalt {
        /// Salt string exactly as supplied by the caller.
        salt: String,
    },
    /// The salt names a scheme this crate does not implement.
    #[error("unsupported crypt scheme '{scheme}'")]
    UnsupportedScheme {
        /// Scheme identifier found in the salt (`2b`, `y`, ...) or [`DES_SCHEME`].
        scheme: String,
    },
}

impl CryptError {
    pub(crate) fn invalid_salt(salt: &str) -> Self {
        Self::InvalidSalt {
            salt: salt.to_owned(),
        }
    }

    pub(crate) fn unsupported_scheme(scheme: &str) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.to_owned(),
        }
    }

    /// Reports whether the error is [`CryptError::InvalidSalt`].
    #[must_use]
    pub const fn is_invalid_salt(&self) -> bool {
        matches!(self, Self::InvalidSalt { .. })
    }

    /// Reports whether the error is [`CryptError::UnsupportedScheme`].
    #[must_use]
    pub const fn is_unsupported_scheme(&self) -> bool {
        matches!(self, Self::UnsupportedScheme { .. })
    }
}
