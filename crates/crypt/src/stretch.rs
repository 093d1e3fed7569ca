//! crates/crypt/src/stretch.rs
//!
//! Key-stretching loop shared by every scheme.
//!
//! Each round hashes a fresh context fed in this order:
//!
//! | step | odd round | even round |
//! |------|-----------|------------|
//! | 1    | key       | previous digest |
//! | 2    | salt, unless the round is a multiple of 3 | |
//! | 3    | key, unless the round is a multiple of 7 | |
//! | 4    | previous digest | key |
//!
//! MD5 passes the raw key and salt; the SHA-2 schemes pass their derived
//! `P` and `S` byte sequences.

use checksums::strong::StrongDigest;
use zeroize::{Zeroize, Zeroizing};

/// Runs `rounds` stretching rounds starting from `seed` and returns the final digest.
///
/// Every intermediate digest is wiped when the next one replaces it.
pub(crate) fn stretch<D>(
    seed: Zeroizing<D::Digest>,
    key: &[u8],
    salt: &[u8],
    rounds: u32,
) -> Zeroizing<D::Digest>
where
    D: StrongDigest,
    D::Digest: Zeroize,
{
    let mut current = seed;

    for round in 0..rounds {
        let odd = round % 2 == 1;
        let previous: &[u8] = (*current).as_ref();
        let mut hasher = D::new();

        hasher.update(if odd { key } else { previous });
        if round % 3 != 0 {
            hasher.update(salt);
        }
        if round % 7 != 0 {
            hasher.update(key);
        }
        hasher.update(if odd { previous } else { key });

        current = Zeroizing::new(hasher.finalize());
    }

    current
}
