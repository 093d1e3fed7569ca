//! crates/crypt/src/encoding.rs
//!
//! The crypt flavour of base64.
//!
//! Unlike RFC 4648 the alphabet starts with `./`, each three-byte group is
//! emitted least-significant six bits first, and the bytes of the digest are
//! visited in a scheme-specific permuted order. The final group is padded with
//! literal zero bytes and emits only as many characters as needed to cover the
//! remaining bits.

use crate::algorithm::Algorithm;
use crate::salt::SaltSpec;

/// The 64-character crypt alphabet; index 0 is `.`.
pub const ALPHABET: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// One `(b2, b1, b0)` source triplet. `None` stands for a literal zero byte.
#[derive(Clone, Copy, Debug)]
struct Group {
    bytes: [Option<usize>; 3],
    chars: usize,
}

impl Group {
    const fn full(b2: usize, b1: usize, b0: usize) -> Self {
        Self {
            bytes: [Some(b2), Some(b1), Some(b0)],
            chars: 4,
        }
    }

    const fn tail(bytes: [Option<usize>; 3], chars: usize) -> Self {
        Self { bytes, chars }
    }
}

const MD5_GROUPS: [Group; 6] = [
    Group::full(0, 6, 12),
    Group::full(1, 7, 13),
    Group::full(2, 8, 14),
    Group::full(3, 9, 15),
    Group::full(4, 10, 5),
    Group::tail([None, None, Some(11)], 2),
];

const SHA256_GROUPS: [Group; 11] = [
    Group::full(0, 10, 20),
    Group::full(21, 1, 11),
    Group::full(12, 22, 2),
    Group::full(3, 13, 23),
    Group::full(24, 4, 14),
    Group::full(15, 25, 5),
    Group::full(6, 16, 26),
    Group::full(27, 7, 17),
    Group::full(18, 28, 8),
    Group::full(9, 19, 29),
    Group::tail([None, Some(31), Some(30)], 3),
];

const SHA512_GROUPS: [Group; 22] = [
    Group::full(0, 21, 42),
    Group::full(22, 43, 1),
    Group::full(44, 2, 23),
    Group::full(3, 24, 45),
    Group::full(25, 46, 4),
    Group::full(47, 5, 26),
    Group::full(6, 27, 48),
    Group::full(28, 49, 7),
    Group::full(50, 8, 29),
    Group::full(9, 30, 51),
    Group::full(31, 52, 10),
    Group::full(53, 11, 32),
    Group::full(12, 33, 54),
    Group::full(34, 55, 13),
    Group::full(56, 14, 35),
    Group::full(15, 36, 57),
    Group::full(37, 58, 16),
    Group::full(59, 17, 38),
    Group::full(18, 39, 60),
    Group::full(40, 61, 19),
    Group::full(62, 20, 41),
    Group::tail([None, None, Some(63)], 2),
];

const fn groups(algorithm: Algorithm) -> &'static [Group] {
    match algorithm {
        Algorithm::Md5 => &MD5_GROUPS,
        Algorithm::Sha256 => &SHA256_GROUPS,
        Algorithm::Sha512 => &SHA512_GROUPS,
    }
}

/// Appends the permuted base64 encoding of `digest` to `out`.
///
/// At most `budget` characters are written; under well-formed inputs the
/// budget always exceeds [`Algorithm::encoded_len`].
fn encode_into(out: &mut String, digest: &[u8], groups: &[Group], mut budget: usize) {
    debug_assert!(
        groups
            .iter()
            .flat_map(|group| group.bytes.iter().flatten())
            .all(|&index| index < digest.len()),
        "digest shorter than its permutation table"
    );

    for group in groups {
        let [b2, b1, b0] = group
            .bytes
            .map(|index| index.map_or(0, |index| u32::from(digest[index])));
        let mut word = (b2 << 16) | (b1 << 8) | b0;

        for _ in 0..group.chars {
            if budget == 0 {
                return;
            }
            out.push(char::from(ALPHABET[(word & 0x3f) as usize]));
            word >>= 6;
            budget -= 1;
        }
    }
}

/// Formats a finished hash: the canonical salt prefix, `$`, and the encoded digest.
pub(crate) fn format_hash(spec: &SaltSpec, digest: &[u8]) -> String {
    let algorithm = spec.algorithm();
    let max_len = algorithm.max_hash_len();

    let mut out = String::with_capacity(max_len);
    out.push_str(&spec.to_string());
    out.push('$');

    let budget = max_len.saturating_sub(out.len());
    encode_into(&mut out, digest, groups(algorithm), budget);
    out
}
