//! crates/crypt/src/algorithm.rs
//!
//! Hash scheme definitions and their fixed layout parameters.

use std::fmt;

use crate::salt::{ROUNDS_CLAUSE_MAX_LEN, ROUNDS_DEFAULT};

/// Number of stretching rounds used by the MD5 scheme. Not configurable.
pub const MD5_ROUNDS: u32 = 1000;

/// `crypt()` schemes supported by this crate.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Poul-Henning Kamp's MD5 scheme, identified by `$1$`.
    Md5,
    /// Ulrich Drepper's SHA-256 scheme, identified by `$5$`.
    Sha256,
    /// Ulrich Drepper's SHA-512 scheme, identified by `$6$`. Used when no salt is given.
    #[default]
    Sha512,
}

impl Algorithm {
    /// Every supported scheme, strongest last.
    pub const ALL: [Self; 3] = [Self::Md5, Self::Sha256, Self::Sha512];

    /// Returns the scheme identifier that appears between the first two `$`.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Md5 => b'1',
            Self::Sha256 => b'5',
            Self::Sha512 => b'6',
        }
    }

    /// Looks up the scheme for an identifier byte.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            b'1' => Some(Self::Md5),
            b'5' => Some(Self::Sha256),
            b'6' => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Identifies the scheme of a salt or stored hash by its `$<id>$` prefix.
    ///
    /// ```
    /// use crypt::Algorithm;
    ///
    /// assert_eq!(Algorithm::from_hash("$5$rounds=9000$abc"), Some(Algorithm::Sha256));
    /// assert_eq!(Algorithm::from_hash("$2b$10$abc"), None);
    /// ```
    #[must_use]
    pub fn from_hash(hash: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| hash.starts_with(algorithm.prefix()))
    }

    /// Returns the `$<id>$` prefix that starts every salt and hash of this scheme.
    #[inline]
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Md5 => "$1$",
            Self::Sha256 => "$5$",
            Self::Sha512 => "$6$",
        }
    }

    /// Width of the underlying digest in bytes.
    #[inline]
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Number of base64 characters the encoded digest occupies.
    #[inline]
    #[must_use]
    pub const fn encoded_len(self) -> usize {
        match self {
            Self::Md5 => 22,
            Self::Sha256 => 43,
            Self::Sha512 => 86,
        }
    }

    /// Longest salt the scheme reads; extra characters are ignored.
    #[inline]
    #[must_use]
    pub const fn max_salt_len(self) -> usize {
        match self {
            Self::Md5 => 8,
            Self::Sha256 | Self::Sha512 => 16,
        }
    }

    /// Whether the scheme accepts a `rounds=<n>$` clause.
    #[inline]
    #[must_use]
    pub const fn supports_rounds(self) -> bool {
        !matches!(self, Self::Md5)
    }

    /// Returns `true` for the SHA-2 family (`$5$` and `$6$`).
    #[inline]
    #[must_use]
    pub const fn is_sha2(self) -> bool {
        self.supports_rounds()
    }

    /// Rounds applied when the salt carries no explicit clause.
    #[inline]
    #[must_use]
    pub const fn default_rounds(self) -> u32 {
        match self {
            Self::Md5 => MD5_ROUNDS,
            Self::Sha256 | Self::Sha512 => ROUNDS_DEFAULT,
        }
    }

    /// Upper bound on the length of a formatted hash of this scheme.
    ///
    /// Covers the prefix, the longest possible rounds clause, the longest salt,
    /// the `$` separator and the encoded digest.
    #[must_use]
    pub const fn max_hash_len(self) -> usize {
        let rounds_clause = if self.supports_rounds() {
            ROUNDS_CLAUSE_MAX_LEN
        } else {
            0
        };
        self.prefix().len() + rounds_clause + self.max_salt_len() + 1 + self.encoded_len()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Md5 => "MD5",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        })
    }
}
