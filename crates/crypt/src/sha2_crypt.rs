//! crates/crypt/src/sha2_crypt.rs
//!
//! Ulrich Drepper's SHA-256 (`$5$`) and SHA-512 (`$6$`) `crypt()` schemes.
//!
//! Both schemes share one algorithm parameterised over the digest; they differ
//! only in digest width and output permutation. Keys of any length are
//! accepted and the cost is set by the rounds clause.

#[cfg(feature = "tracing")]
use tracing::instrument;

use checksums::strong::StrongDigest;
use zeroize::{Zeroize, Zeroizing};

use crate::algorithm::Algorithm;
use crate::encoding::format_hash;
use crate::error::CryptError;
use crate::crypt_with_spec;
use crate::salt::SaltSpec;
use crate::stretch::stretch;

/// Hashes `key` with whichever SHA-2 scheme `salt` names.
///
/// With `None` the SHA-512 scheme is used with a random 8 character salt and
/// the default rounds.
///
/// # Errors
///
/// Returns [`CryptError::InvalidSalt`] unless `salt` is a `$5$` or `$6$`
/// salt specification.
pub fn sha2_crypt<K: AsRef<[u8]>>(key: K, salt: Option<&str>) -> Result<String, CryptError> {
    crypt_matching(key.as_ref(), salt, Algorithm::Sha512, Algorithm::is_sha2)
}

/// Hashes `key` with the SHA-256 scheme.
///
/// # Errors
///
/// Returns [`CryptError::InvalidSalt`] unless `salt` is a `$5$` salt specification.
///
/// # Examples
///
/// ```
/// use crypt::sha256_crypt;
///
/// let hash = sha256_crypt("Hello world!", Some("$5$saltstring"))?;
/// assert_eq!(hash, "$5$saltstring$5B8vYYiY.CVt1RlTTf8KbXBH3hsxY/GNooZaBBGWEc5");
/// # Ok::<(), crypt::CryptError>(())
/// ```
pub fn sha256_crypt<K: AsRef<[u8]>>(key: K, salt: Option<&str>) -> Result<String, CryptError> {
    crypt_matching(key.as_ref(), salt, Algorithm::Sha256, |algorithm| {
        algorithm == Algorithm::Sha256
    })
}

/// Hashes `key` with the SHA-512 scheme.
///
/// # Errors
///
/// Returns [`CryptError::InvalidSalt`] unless `salt` is a `$6$` salt specification.
pub fn sha512_crypt<K: AsRef<[u8]>>(key: K, salt: Option<&str>) -> Result<String, CryptError> {
    crypt_matching(key.as_ref(), salt, Algorithm::Sha512, |algorithm| {
        algorithm == Algorithm::Sha512
    })
}

fn crypt_matching(
    key: &[u8],
    salt: Option<&str>,
    fallback: Algorithm,
    accepts: impl Fn(Algorithm) -> bool,
) -> Result<String, CryptError> {
    let spec = match salt {
        Some(salt) => SaltSpec::parse_matching(salt, accepts)?,
        None => SaltSpec::random(fallback),
    };
    Ok(crypt_with_spec(key, &spec))
}

/// Computes the SHA-2 crypt hash of `key` for a validated `$5$` or `$6$` specification.
#[cfg_attr(
    feature = "tracing",
    instrument(
        skip_all,
        fields(algorithm = %spec.algorithm(), rounds = spec.rounds(), salt_len = spec.salt().len()),
        name = "sha2_crypt"
    )
)]
pub(crate) fn hash_sha2<D>(key: &[u8], spec: &SaltSpec) -> String
where
    D: StrongDigest,
    D::Digest: Zeroize,
{
    let salt = spec.salt_bytes();

    let alternate = Zeroizing::new(digest_of::<D>(&[key, salt, key]));
    let alternate_bytes: &[u8] = (*alternate).as_ref();

    let mut ctx = D::new();
    ctx.update(key);
    ctx.update(salt);

    let mut remaining = key.len();
    while remaining > D::DIGEST_LEN {
        ctx.update(alternate_bytes);
        remaining -= D::DIGEST_LEN;
    }
    ctx.update(&alternate_bytes[..remaining]);

    let mut bits = key.len();
    while bits > 0 {
        ctx.update(if bits & 1 == 1 { alternate_bytes } else { key });
        bits >>= 1;
    }

    let intermediate = Zeroizing::new(ctx.finalize());
    let first_byte = (*intermediate).as_ref()[0];

    let mut ctx = D::new();
    for _ in 0..key.len() {
        ctx.update(key);
    }
    let p_digest = Zeroizing::new(ctx.finalize());
    let p_bytes = tile((*p_digest).as_ref(), key.len());

    let mut ctx = D::new();
    for _ in 0..16 + usize::from(first_byte) {
        ctx.update(salt);
    }
    let s_digest = Zeroizing::new(ctx.finalize());
    let s_bytes = tile((*s_digest).as_ref(), salt.len());

    let digest = stretch::<D>(intermediate, &p_bytes, &s_bytes, spec.rounds());
    format_hash(spec, (*digest).as_ref())
}

fn digest_of<D: StrongDigest>(parts: &[&[u8]]) -> D::Digest {
    let mut ctx = D::new();
    for part in parts {
        ctx.update(part);
    }
    ctx.finalize()
}

/// Repeats `digest` until exactly `len` bytes are produced.
fn tile(digest: &[u8], len: usize) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(digest.iter().copied().cycle().take(len).collect())
}
