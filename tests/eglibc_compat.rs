//! Compatibility with the glibc/eglibc `crypt()` test suites.
//!
//! The SHA-512 vectors come from the eglibc `sha512c-test` suite and the SHA-256
//! vectors from its `sha256c-test` counterpart. Every stored hash must also
//! reproduce itself when fed back as the salt.

use oc_crypt::{crypt, verify};

const LONG_TEXT: &str =
    "a very much longer text to encrypt.  This one even stretches over morethan one line.";

fn check(salt: &str, key: &str, expected: &str) {
    assert_eq!(crypt(key, Some(salt)).as_deref(), Ok(expected), "salt {salt}");
    assert_eq!(crypt(key, Some(expected)).as_deref(), Ok(expected), "rehash {expected}");
    assert_eq!(verify(key, expected), Ok(true), "verify {expected}");
}

// ============================================================================
// SHA-512
// ============================================================================

mod sha512 {
    use super::*;

    #[test]
    fn default_rounds() {
        check(
            "$6$saltstring",
            "Hello world!",
            "$6$saltstring$svn8UoSVapNtMuq1ukKS4tPQd8iKwSMHWjl/O817G3uBnIFNjnQJuesI68u4OTLiBFdcbYEdFCoEOfaS35inz1",
        );
    }

    #[test]
    fn explicit_rounds_and_truncated_salt() {
        check(
            "$6$rounds=10000$saltstringsaltstring",
            "Hello world!",
            "$6$rounds=10000$saltstringsaltst$OW1/O6BYHV6BcXZu8QVeXbDWra3Oeqh0sbHbbMCVNSnCM/UrjmM0Dp8vOuZeHBy/YTBmSK6H9qs/y3RnOaw5v.",
        );
    }

    #[test]
    fn explicit_default_rounds_are_echoed() {
        check(
            "$6$rounds=5000$toolongsaltstring",
            "This is just a test",
            "$6$rounds=5000$toolongsaltstrin$lQ8jolhgVRVhY4b5pZKaysCLi0QBxGoNeKQzQ3glMhwllF7oGDZxUhx1yxdYcz/e1JSbq3y6JMxxl8audkUEm0",
        );
    }

    #[test]
    fn long_key() {
        check(
            "$6$rounds=1400$anotherlongsaltstring",
            LONG_TEXT,
            "$6$rounds=1400$anotherlongsalts$POfYwTEok97VWcjxIiSOjiykti.o/pQs.wPvMxQ6Fm7I6IoYN3CmLs66x9t0oSwbtEW7o7UmJEiDwGqd8p4ur1",
        );
    }

    #[test]
    fn short_salt() {
        check(
            "$6$rounds=77777$short",
            "we have a short salt string but not a short password",
            "$6$rounds=77777$short$WuQyW2YR.hBNpjjRhpYD/ifIw05xdfeEyQoMxIXbkvr0gge1a1x3yRULJ5CCaUeOxFmtlcGZelFl5CxtgfiAc0",
        );
    }

    #[test]
    fn sixteen_character_salt() {
        check(
            "$6$rounds=123456$asaltof16chars..",
            "a short string",
            "$6$rounds=123456$asaltof16chars..$BtCwjqMJGx5hrJhZywWvt0RLE8uZ4oPwcelCjmw2kSYu.Ec6ycULevoBK25fs2xXgMNrCzIMVcgEJAstJeonj1",
        );
    }

    #[test]
    fn rounds_below_minimum_are_raised() {
        check(
            "$6$rounds=10$roundstoolow",
            "the minimum number is still observed",
            "$6$rounds=1000$roundstoolow$kUMsbe306n21p9R.FRkW3IGn.S9NPN0x50YhH1xhLsPuWGsUSklZt58jaTfF4ZEQpyUNGc0dqbpBYYBaHHrsX.",
        );
    }
}

// ============================================================================
// SHA-256
// ============================================================================

mod sha256 {
    use super::*;

    #[test]
    fn default_rounds() {
        check(
            "$5$saltstring",
            "Hello world!",
            "$5$saltstring$5B8vYYiY.CVt1RlTTf8KbXBH3hsxY/GNooZaBBGWEc5",
        );
    }

    #[test]
    fn explicit_rounds_and_truncated_salt() {
        check(
            "$5$rounds=10000$saltstringsaltstring",
            "Hello world!",
            "$5$rounds=10000$saltstringsaltst$3xv.VbSHBb41AL9AvLeujZkZRBAwqFMz2.opqey6IcA",
        );
    }

    #[test]
    fn explicit_default_rounds_are_echoed() {
        check(
            "$5$rounds=5000$toolongsaltstring",
            "This is just a test",
            "$5$rounds=5000$toolongsaltstrin$Un/5jzAHMgOGZ5.mWJpuVolil07guHPvOW8mGRcvxa5",
        );
    }

    #[test]
    fn long_key() {
        check(
            "$5$rounds=1400$anotherlongsaltstring",
            LONG_TEXT,
            "$5$rounds=1400$anotherlongsalts$Rx.j8H.h8HjEDGomFU8bDkXm3XIUnzyxf12oP84Bnq1",
        );
    }

    #[test]
    fn short_salt() {
        check(
            "$5$rounds=77777$short",
            "we have a short salt string but not a short password",
            "$5$rounds=77777$short$JiO1O3ZpDAxGJeaDIuqCoEFysAe1mZNJRs3pw0KQRd/",
        );
    }

    #[test]
    fn sixteen_character_salt() {
        check(
            "$5$rounds=123456$asaltof16chars..",
            "a short string",
            "$5$rounds=123456$asaltof16chars..$gP3VQ/6X7UUEW3HkBn2w1/Ptq2jxPyzV/cZKmF/wJvD",
        );
    }

    #[test]
    fn rounds_below_minimum_are_raised() {
        check(
            "$5$rounds=10$roundstoolow",
            "the minimum number is still observed",
            "$5$rounds=1000$roundstoolow$yfvwcWrQ8l/K0DAWyuPMDNHpIVlTQebY9l/gL972bIC",
        );
    }
}
