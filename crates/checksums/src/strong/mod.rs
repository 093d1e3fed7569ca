//! crates/checksums/src/strong/mod.rs
//!
//! Cryptographic digests exposed through a common streaming interface.
//!
//! The `crypt()` engines only ever need two capabilities from a digest:
//! feed bytes incrementally and finalise into a fixed-width output. The
//! [`StrongDigest`] trait captures exactly that, which lets the shared
//! stretching loop run unchanged over MD5, SHA-256 and SHA-512.

mod md5;
mod sha2;

pub use self::md5::Md5;
pub use self::sha2::{Sha256, Sha512};

/// Streaming digest with a fixed output width.
///
/// Implementors start from an empty state, absorb any number of
/// [`update`](Self::update) calls and produce their digest by consuming the
/// hasher in [`finalize`](Self::finalize). A finalised hasher cannot be reused;
/// callers build a fresh instance for every digest, which mirrors the
/// "finalize resets the context" contract of the C implementations.
pub trait StrongDigest: Sized {
    /// Fixed-size output produced by [`finalize`](Self::finalize).
    type Digest: AsRef<[u8]> + Copy + Eq + Send + Sync;

    /// Width of [`Self::Digest`] in bytes.
    const DIGEST_LEN: usize;

    /// Creates a hasher with an empty state.
    fn new() -> Self;

    /// Feeds additional bytes into the digest state.
    fn update(&mut self, data: &[u8]);

    /// Finalises the digest and returns its output.
    fn finalize(self) -> Self::Digest;

    /// Computes the digest of `data` in one shot.
    #[must_use]
    fn digest(data: &[u8]) -> Self::Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}
