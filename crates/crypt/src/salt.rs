//! crates/crypt/src/salt.rs
//!
//! Salt specification parsing and generation.
//!
//! A salt specification is either a bare salt (`$6$rounds=9000$saltstring`) or
//! a complete hash produced earlier; only the prefix, the optional rounds
//! clause and the salt characters are read. The accepted language is
//!
//! ```text
//! ^\$<id>\$(rounds=[0-9]+\$)?[./0-9A-Za-z]{1,N}.*
//! ```
//!
//! with `N` = 8 for MD5 and 16 for SHA-2. The scanner below reproduces the
//! greedy/backtracking behaviour of that pattern exactly: when a rounds clause
//! is followed by no salt character, the clause itself is re-read as salt
//! (`$6$rounds=5000$` has the salt `rounds`).

use std::fmt;

use rand::Rng;

use crate::algorithm::Algorithm;
use crate::encoding::ALPHABET;
use crate::error::CryptError;

/// Literal that introduces an explicit rounds clause.
pub const ROUNDS_PREFIX: &str = "rounds=";

/// SHA-2 rounds used when the salt carries no rounds clause.
pub const ROUNDS_DEFAULT: u32 = 5000;

/// Smallest SHA-2 round count; lower requests are raised to it.
pub const ROUNDS_MIN: u32 = 1000;

/// Largest SHA-2 round count; higher requests are lowered to it.
pub const ROUNDS_MAX: u32 = 999_999_999;

/// Length of the salt generated when the caller supplies none.
pub const GENERATED_SALT_LEN: usize = 8;

/// Longest rendered rounds clause: `rounds=999999999$`.
pub(crate) const ROUNDS_CLAUSE_MAX_LEN: usize = ROUNDS_PREFIX.len() + 9 + 1;

/// Parsed salt specification: scheme, effective rounds and salt characters.
///
/// Values are always valid: the salt is non-empty, drawn from the crypt
/// alphabet and no longer than the scheme allows, and SHA-2 rounds lie in
/// [`ROUNDS_MIN`]`..=`[`ROUNDS_MAX`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SaltSpec {
    algorithm: Algorithm,
    rounds: u32,
    rounds_explicit: bool,
    salt: String,
}

impl SaltSpec {
    /// Parses a salt specification or stored hash of any supported scheme.
    ///
    /// # Errors
    ///
    /// Returns [`CryptError::InvalidSalt`] when the input does not match the
    /// salt grammar of `$1$`, `$5$` or `$6$`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crypt::{Algorithm, SaltSpec};
    ///
    /// let spec = SaltSpec::parse("$6$rounds=10$roundstoolow$ignored")?;
    /// assert_eq!(spec.algorithm(), Algorithm::Sha512);
    /// assert_eq!(spec.rounds(), 1000);
    /// assert!(spec.rounds_explicit());
    /// assert_eq!(spec.salt(), "roundstoolow");
    /// # Ok::<(), crypt::CryptError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, CryptError> {
        Self::parse_matching(input, |_| true)
    }

    /// Parses `input`, accepting only schemes for which `accepts` holds.
    pub(crate) fn parse_matching(
        input: &str,
        accepts: impl Fn(Algorithm) -> bool,
    ) -> Result<Self, CryptError> {
        let invalid = || CryptError::invalid_salt(input);

        let body = input.strip_prefix('$').ok_or_else(invalid)?;
        let algorithm = body
            .bytes()
            .next()
            .and_then(Algorithm::from_id)
            .filter(|algorithm| accepts(*algorithm))
            .ok_or_else(invalid)?;
        // The id is a single ASCII byte, so slicing past it stays on a char boundary.
        let body = body[1..].strip_prefix('$').ok_or_else(invalid)?;
        let max_len = algorithm.max_salt_len();

        if algorithm.supports_rounds() {
            if let Some((requested, rest)) = split_rounds_clause(body) {
                let salt = take_salt(rest, max_len);
                if !salt.is_empty() {
                    return Ok(Self {
                        algorithm,
                        rounds: clamp_rounds(requested),
                        rounds_explicit: true,
                        salt: salt.to_owned(),
                    });
                }
            }
        }

        let salt = take_salt(body, max_len);
        if salt.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            algorithm,
            rounds: algorithm.default_rounds(),
            rounds_explicit: false,
            salt: salt.to_owned(),
        })
    }

    /// Creates a specification with a fresh random salt and default rounds.
    ///
    /// The salt is [`GENERATED_SALT_LEN`] characters drawn uniformly from the
    /// crypt alphabet.
    #[must_use]
    pub fn random(algorithm: Algorithm) -> Self {
        Self::random_with_len(algorithm, GENERATED_SALT_LEN)
    }

    /// Creates a specification with a random salt of `len` characters.
    ///
    /// `len` is clamped to `1..=algorithm.max_salt_len()`.
    #[must_use]
    pub fn random_with_len(algorithm: Algorithm, len: usize) -> Self {
        let len = len.clamp(1, algorithm.max_salt_len());
        let mut rng = rand::thread_rng();
        let salt = (0..len)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect();

        Self {
            algorithm,
            rounds: algorithm.default_rounds(),
            rounds_explicit: false,
            salt,
        }
    }

    /// Returns a copy carrying an explicit rounds clause.
    ///
    /// `rounds` is clamped exactly like a parsed clause. MD5 has a fixed cost
    /// and ignores the request.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        if self.algorithm.supports_rounds() {
            self.rounds = clamp_rounds(u64::from(rounds));
            self.rounds_explicit = true;
        }
        self
    }

    /// Scheme selected by the prefix.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Effective number of stretching rounds.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Whether the rounds clause is echoed into the formatted hash.
    #[must_use]
    pub const fn rounds_explicit(&self) -> bool {
        self.rounds_explicit
    }

    /// Salt characters, without prefix or separators.
    #[must_use]
    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub(crate) fn salt_bytes(&self) -> &[u8] {
        self.salt.as_bytes()
    }
}

/// Renders the canonical prefix of a hash: `$<id>$[rounds=<n>$]<salt>`.
///
/// The output is itself a valid salt specification and parses back to an
/// equal value.
impl fmt::Display for SaltSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm.prefix())?;
        if self.rounds_explicit {
            write!(f, "{ROUNDS_PREFIX}{}$", self.rounds)?;
        }
        f.write_str(&self.salt)
    }
}

/// Returns `true` for bytes of the crypt alphabet `./0-9A-Za-z`.
#[inline]
pub(crate) const fn is_salt_byte(byte: u8) -> bool {
    matches!(byte, b'.' | b'/' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
}

/// Longest prefix of `text` made of salt characters, capped at `max_len`.
fn take_salt(text: &str, max_len: usize) -> &str {
    let len = text
        .bytes()
        .take(max_len)
        .take_while(|byte| is_salt_byte(*byte))
        .count();
    // Every counted byte is ASCII.
    &text[..len]
}

/// Splits `rounds=<digits>$` off the front of `text`.
///
/// Digit strings too long for `u64` saturate; they are clamped afterwards anyway.
fn split_rounds_clause(text: &str) -> Option<(u64, &str)> {
    let clause = text.strip_prefix(ROUNDS_PREFIX)?;
    let digits = clause.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = clause[digits..].strip_prefix('$')?;
    let requested = clause.as_bytes()[..digits]
        .iter()
        .fold(0_u64, |value, digit| {
            value
                .saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        });
    Some((requested, rest))
}

fn clamp_rounds(requested: u64) -> u32 {
    let effective = u32::try_from(requested.clamp(u64::from(ROUNDS_MIN), u64::from(ROUNDS_MAX)))
        .unwrap_or(ROUNDS_MAX);

    #[cfg(feature = "tracing")]
    {
        if u64::from(effective) != requested {
            tracing::debug!(requested, effective, "rounds clamped into supported range");
        }
    }

    effective
}
