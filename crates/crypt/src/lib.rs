#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

#[cfg(feature = "tracing")]
use tracing::instrument;

use checksums::strong::{Sha256, Sha512};
use subtle::ConstantTimeEq;

mod algorithm;
mod encoding;
mod error;
mod md5_crypt;
mod params;
mod salt;
mod sensitive;
mod sha2_crypt;
mod stretch;

pub use crate::algorithm::{Algorithm, MD5_ROUNDS};
pub use crate::encoding::ALPHABET;
pub use crate::error::{CryptError, DES_SCHEME};
pub use crate::md5_crypt::md5_crypt;
pub use crate::params::CryptParams;
pub use crate::salt::{
    GENERATED_SALT_LEN, ROUNDS_DEFAULT, ROUNDS_MAX, ROUNDS_MIN, ROUNDS_PREFIX, SaltSpec,
};
pub use crate::sensitive::SensitiveBytes;
pub use crate::sha2_crypt::{sha2_crypt, sha256_crypt, sha512_crypt};

use crate::salt::is_salt_byte;

/// Hashes `key` the way the C library's `crypt()` does.
///
/// `salt` selects the scheme by its prefix and may be a bare salt
/// specification (`$6$rounds=9000$saltstring`) or a complete hash produced
/// earlier, in which case the result reproduces that hash for the right key.
/// With `None` the SHA-512 scheme is used with a random 8 character salt.
///
/// # Errors
///
/// - [`CryptError::UnsupportedScheme`] when the salt names another scheme
///   (`$2b$...`, `$y$...`) or is a legacy two-character DES salt.
/// - [`CryptError::InvalidSalt`] when the salt is empty or malformed.
///
/// # Examples
///
/// ```
/// use crypt::crypt;
///
/// assert_eq!(
///     crypt("secret", Some("$5$1234"))?,
///     "$5$1234$21PxqspGtPQRhVWlPHlbvBGon3Sw3hkPOn8EFKEV7E5"
/// );
/// assert!(crypt("secret", None)?.starts_with("$6$"));
/// assert!(crypt("secret", Some("ab")).unwrap_err().is_unsupported_scheme());
/// # Ok::<(), crypt::CryptError>(())
/// ```
#[cfg_attr(
    feature = "tracing",
    instrument(skip_all, fields(salt_given = salt.is_some()), name = "crypt")
)]
pub fn crypt<K: AsRef<[u8]>>(key: K, salt: Option<&str>) -> Result<String, CryptError> {
    let spec = match salt {
        Some(salt) => {
            let scheme = identify_scheme(salt)?;
            SaltSpec::parse_matching(salt, |algorithm| algorithm == scheme)?
        }
        None => SaltSpec::random(Algorithm::default()),
    };
    Ok(crypt_with_spec(key, &spec))
}

/// Hashes `key` under an already parsed salt specification.
///
/// Infallible: a [`SaltSpec`] is valid by construction.
///
/// ```
/// use crypt::{Algorithm, SaltSpec, crypt_with_spec};
///
/// let spec = SaltSpec::random(Algorithm::Md5);
/// let hash = crypt_with_spec("pw", &spec);
/// assert!(hash.starts_with(&format!("$1${}$", spec.salt())));
/// ```
#[must_use]
pub fn crypt_with_spec<K: AsRef<[u8]>>(key: K, spec: &SaltSpec) -> String {
    let key = key.as_ref();
    match spec.algorithm() {
        Algorithm::Md5 => md5_crypt::hash_md5(key, spec),
        Algorithm::Sha256 => sha2_crypt::hash_sha2::<Sha256>(key, spec),
        Algorithm::Sha512 => sha2_crypt::hash_sha2::<Sha512>(key, spec),
    }
}

/// Checks `key` against a stored hash.
///
/// The key is re-hashed with `hash` as its salt specification and the result
/// compared in constant time.
///
/// # Errors
///
/// Returns the same errors as [`crypt`] when `hash` cannot serve as a salt.
///
/// ```
/// use crypt::verify;
///
/// let stored = "$1$1234$ImZYBLmYC.rbBKg9ERxX70";
/// assert!(verify("secret", stored)?);
/// assert!(!verify("Secret", stored)?);
/// # Ok::<(), crypt::CryptError>(())
/// ```
pub fn verify<K: AsRef<[u8]>>(key: K, hash: &str) -> Result<bool, CryptError> {
    let candidate = crypt(key, Some(hash))?;
    Ok(candidate.as_bytes().ct_eq(hash.as_bytes()).into())
}

/// Classifies `salt` by its scheme prefix without parsing the remainder.
fn identify_scheme(salt: &str) -> Result<Algorithm, CryptError> {
    if let Some(algorithm) = Algorithm::from_hash(salt) {
        return Ok(algorithm);
    }

    let error = match salt.strip_prefix('$').map(|rest| rest.split_once('$')) {
        Some(Some((id, _))) if !id.is_empty() => CryptError::unsupported_scheme(id),
        Some(_) => CryptError::invalid_salt(salt),
        None => match salt.as_bytes() {
            [first, second, ..] if is_salt_byte(*first) && is_salt_byte(*second) => {
                CryptError::unsupported_scheme(DES_SCHEME)
            }
            _ => CryptError::invalid_salt(salt),
        },
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(%error, "salt rejected");

    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identify_scheme_accepts_supported_prefixes() {
        assert_eq!(identify_scheme("$1$abc"), Ok(Algorithm::Md5));
        assert_eq!(identify_scheme("$5$"), Ok(Algorithm::Sha256));
        assert_eq!(identify_scheme("$6$rounds=5000$x"), Ok(Algorithm::Sha512));
    }

    #[test]
    fn identify_scheme_names_foreign_ids() {
        for (salt, id) in [
            ("$2b$10$abcdefghijklmnopqrstuv", "2b"),
            ("$y$j9T$salt", "y"),
            ("$7$abc", "7"),
            ("$15$abc", "15"),
            ("$md5$abc", "md5"),
        ] {
            assert_eq!(
                identify_scheme(salt),
                Err(CryptError::unsupported_scheme(id)),
                "{salt}"
            );
        }
    }

    #[test]
    fn identify_scheme_reports_des_salts() {
        for salt in ["ab", "./", "Zz9hash", "12"] {
            assert_eq!(
                identify_scheme(salt),
                Err(CryptError::unsupported_scheme(DES_SCHEME)),
                "{salt}"
            );
        }
    }

    #[test]
    fn identify_scheme_rejects_malformed_salts() {
        for salt in ["", "$", "$1", "$$abc", "$6", "a", "a-", "-a", "_abc", "é1"] {
            assert_eq!(
                identify_scheme(salt),
                Err(CryptError::invalid_salt(salt)),
                "{salt:?}"
            );
        }
    }

    #[test]
    fn crypt_with_spec_matches_crypt() {
        let spec = SaltSpec::parse("$6$saltstring").expect("valid salt");
        assert_eq!(
            crypt_with_spec("Hello world!", &spec),
            crypt("Hello world!", Some("$6$saltstring")).expect("valid salt")
        );
    }

    #[test]
    fn verify_rejects_wrong_key_and_truncated_hash() {
        let stored = crypt("pw", Some("$5$abc")).expect("valid salt");
        assert_eq!(verify("pw", &stored), Ok(true));
        assert_eq!(verify("pW", &stored), Ok(false));
        assert_eq!(verify("pw", &stored[..stored.len() - 1]), Ok(false));
        assert_eq!(verify("pw", "$5$abc"), Ok(false));
    }

    #[test]
    fn verify_propagates_salt_errors() {
        assert!(verify("pw", "").unwrap_err().is_invalid_salt());
        assert!(verify("pw", "$2b$10$x").unwrap_err().is_unsupported_scheme());
    }
}
