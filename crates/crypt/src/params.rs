//! crates/crypt/src/params.rs
//! Hashing policy for minting new password hashes.

use crate::algorithm::Algorithm;
use crate::crypt_with_spec;
use crate::salt::{GENERATED_SALT_LEN, SaltSpec};

/// Describes how new hashes are produced: scheme, cost and salt length.
///
/// Stored hashes carry their own parameters, so this type is only consulted
/// when hashing a fresh password. Applications typically keep one instance in
/// their configuration.
///
/// ```
/// use crypt::{Algorithm, CryptParams, verify};
///
/// let params = CryptParams::new(Algorithm::Sha256).with_rounds(10_000).with_salt_len(16);
/// let hash = params.hash("hunter2");
/// assert!(hash.starts_with("$5$rounds=10000$"));
/// assert!(verify("hunter2", &hash)?);
/// # Ok::<(), crypt::CryptError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CryptParams {
    /// Scheme used for new hashes.
    pub algorithm: Algorithm,
    /// Explicit SHA-2 rounds; `None` keeps the scheme default and omits the clause.
    pub rounds: Option<u32>,
    /// Length of generated salts, clamped to the scheme maximum.
    pub salt_len: usize,
}

impl Default for CryptParams {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

impl CryptParams {
    /// Default policy for `algorithm`: default rounds and an 8 character salt.
    #[must_use]
    pub const fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            rounds: None,
            salt_len: GENERATED_SALT_LEN,
        }
    }

    /// Requests an explicit rounds clause. Ignored for MD5.
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = Some(rounds);
        self
    }

    /// Sets the generated salt length.
    #[must_use]
    pub const fn with_salt_len(mut self, salt_len: usize) -> Self {
        self.salt_len = salt_len;
        self
    }

    /// Rounds that hashes minted with these parameters will use.
    #[must_use]
    pub fn effective_rounds(&self) -> u32 {
        self.salt_spec().rounds()
    }

    /// Builds a salt specification with a fresh random salt.
    #[must_use]
    pub fn salt_spec(&self) -> SaltSpec {
        let spec = SaltSpec::random_with_len(self.algorithm, self.salt_len);
        match self.rounds {
            Some(rounds) => spec.with_rounds(rounds),
            None => spec,
        }
    }

    /// Hashes `key` under a fresh random salt.
    #[must_use]
    pub fn hash<K: AsRef<[u8]>>(&self, key: K) -> String {
        crypt_with_spec(key.as_ref(), &self.salt_spec())
    }
}
