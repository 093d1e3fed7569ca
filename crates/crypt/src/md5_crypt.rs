//! crates/crypt/src/md5_crypt.rs
//!
//! Poul-Henning Kamp's MD5-based `crypt()` (`$1$`).
//!
//! The output matches glibc bit for bit, including the historical quirk in the
//! key-length bit walk: set bits feed the first byte of an alternate digest
//! that has already been wiped, so they always contribute a zero byte.

#[cfg(feature = "tracing")]
use tracing::instrument;

use checksums::strong::{Md5, StrongDigest};
use zeroize::{Zeroize, Zeroizing};

use crate::algorithm::{Algorithm, MD5_ROUNDS};
use crate::encoding::format_hash;
use crate::error::CryptError;
use crate::salt::SaltSpec;
use crate::stretch::stretch;

/// Hashes `key` with the MD5 scheme.
///
/// `salt` must be an MD5 salt specification (`$1$<salt>`, optionally followed
/// by anything, such as a complete stored hash). With `None` a random 8
/// character salt is generated.
///
/// # Errors
///
/// Returns [`CryptError::InvalidSalt`] when `salt` is not an MD5 salt.
///
/// # Examples
///
/// ```
/// use crypt::md5_crypt;
///
/// let hash = md5_crypt("secret", Some("$1$1234"))?;
/// assert_eq!(hash, "$1$1234$ImZYBLmYC.rbBKg9ERxX70");
/// # Ok::<(), crypt::CryptError>(())
/// ```
pub fn md5_crypt<K: AsRef<[u8]>>(key: K, salt: Option<&str>) -> Result<String, CryptError> {
    let spec = match salt {
        Some(salt) => SaltSpec::parse_matching(salt, |algorithm| algorithm == Algorithm::Md5)?,
        None => SaltSpec::random(Algorithm::Md5),
    };
    Ok(hash_md5(key.as_ref(), &spec))
}

/// Computes the MD5 crypt hash of `key` for an already validated specification.
#[cfg_attr(
    feature = "tracing",
    instrument(skip_all, fields(salt_len = spec.salt().len()), name = "md5_crypt")
)]
pub(crate) fn hash_md5(key: &[u8], spec: &SaltSpec) -> String {
    debug_assert_eq!(spec.algorithm(), Algorithm::Md5);
    let salt = spec.salt_bytes();

    let mut alternate = Zeroizing::new(md5_of(&[key, salt, key]));

    let mut ctx = Md5::new();
    ctx.update(key);
    ctx.update(Algorithm::Md5.prefix().as_bytes());
    ctx.update(salt);

    let mut remaining = key.len();
    while remaining > 0 {
        let take = remaining.min(Md5::DIGEST_LEN);
        ctx.update(&alternate[..take]);
        remaining -= take;
    }

    alternate.zeroize();

    let mut bits = key.len();
    while bits > 0 {
        if bits & 1 == 1 {
            ctx.update(&alternate[..1]);
        } else {
            ctx.update(&key[..1]);
        }
        bits >>= 1;
    }

    let seed = Zeroizing::new(ctx.finalize());
    let digest = stretch::<Md5>(seed, key, salt, MD5_ROUNDS);

    format_hash(spec, &*digest)
}

fn md5_of(parts: &[&[u8]]) -> [u8; 16] {
    let mut ctx = Md5::new();
    for part in parts {
        ctx.update(part);
    }
    ctx.finalize()
}
