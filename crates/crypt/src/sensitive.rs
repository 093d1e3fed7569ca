//! crates/crypt/src/sensitive.rs
//!
//! Owned key material that is wiped when dropped.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Wrapper for a password or passphrase that is securely cleared on drop.
///
/// Every hashing entry point accepts `impl AsRef<[u8]>`, so a `SensitiveBytes`
/// can be passed by value or by reference. Keys are never logged; the
/// [`Debug`](fmt::Debug) output only reports the length.
///
/// ```
/// use crypt::{SensitiveBytes, crypt};
///
/// let key = SensitiveBytes::from("Hello world!");
/// let hash = crypt(&key, Some("$6$saltstring"))?;
/// assert!(hash.starts_with("$6$saltstring$"));
/// # Ok::<(), crypt::CryptError>(())
/// ```
#[derive(Clone, Default, Eq, PartialEq)]
pub struct SensitiveBytes(Vec<u8>);

impl SensitiveBytes {
    /// Takes ownership of `bytes`.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrows the wrapped bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of wrapped bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Reports whether no bytes are wrapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SensitiveBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for SensitiveBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<String> for SensitiveBytes {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl From<&[u8]> for SensitiveBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for SensitiveBytes {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl fmt::Debug for SensitiveBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensitiveBytes")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

impl Drop for SensitiveBytes {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl ZeroizeOnDrop for SensitiveBytes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_keep_bytes() {
        assert_eq!(SensitiveBytes::from("pw").as_slice(), b"pw");
        assert_eq!(SensitiveBytes::from(String::from("pw")).as_slice(), b"pw");
        assert_eq!(SensitiveBytes::from(&b"pw"[..]).as_slice(), b"pw");
        assert_eq!(SensitiveBytes::new(vec![1, 2, 3]).as_ref(), &[1, 2, 3]);
    }

    #[test]
    fn debug_never_prints_contents() {
        let key = SensitiveBytes::from("topsecret");
        let rendered = format!("{key:?}");
        assert_eq!(rendered, "SensitiveBytes { len: 9, .. }");
        assert!(!rendered.contains("topsecret"));
    }

    #[test]
    fn length_accessors() {
        assert!(SensitiveBytes::default().is_empty());
        assert_eq!(SensitiveBytes::from("abc").len(), 3);
    }
}
