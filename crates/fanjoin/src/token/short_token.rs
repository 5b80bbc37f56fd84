use crate::{RandSource, ThreadRandom};

/// Crockford base32 alphabet: digits and uppercase letters, minus the
/// ambiguous I, L, O and U.
const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
const BITS_PER_CHAR: usize = 5;

/// Length of a generated token: ceil(64 / 5) characters.
pub const SHORT_TOKEN_LEN: usize = 13;

/// Generates short, URL-safe identifier tokens.
///
/// Each token is a random `u64` spelled out as 13 Crockford base32
/// characters. This is the canonical per-record computation payload for
/// enrichment pipelines that attach a generated identifier to every
/// record.
///
/// Tokens are random, not sequential: two calls are overwhelmingly
/// unlikely to collide, but uniqueness is probabilistic, not enforced.
///
/// # Example
///
/// ```
/// use fanjoin::{SHORT_TOKEN_LEN, ShortTokenGenerator};
///
/// let tokens = ShortTokenGenerator::new();
/// let token = tokens.generate();
/// assert_eq!(token.len(), SHORT_TOKEN_LEN);
/// ```
#[derive(Default, Clone, Debug)]
pub struct ShortTokenGenerator<R = ThreadRandom> {
    rand: R,
}

impl ShortTokenGenerator<ThreadRandom> {
    /// Creates a generator over the thread-local RNG.
    pub fn new() -> Self {
        Self { rand: ThreadRandom }
    }
}

impl<R> ShortTokenGenerator<R>
where
    R: RandSource<u64>,
{
    /// Creates a generator over a caller-provided random source.
    pub fn with_rand_source(rand: R) -> Self {
        Self { rand }
    }

    /// Generates one token.
    ///
    /// Thirteen five-bit groups hold 65 bits, one more than the input,
    /// so the leading character carries only four bits and is always in
    /// `0..=F`.
    pub fn generate(&self) -> String {
        let raw = self.rand.rand();
        let mut buf = [0_u8; SHORT_TOKEN_LEN];
        for (i, slot) in buf.iter_mut().enumerate() {
            // Shift is at most 60, and the index is masked to 0..=31.
            let shift = (SHORT_TOKEN_LEN - 1 - i) * BITS_PER_CHAR;
            *slot = ALPHABET[((raw >> shift) & 0x1F) as usize];
        }
        buf.iter().map(|&b| char::from(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRand(u64);

    impl RandSource<u64> for FixedRand {
        fn rand(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn zero_encodes_to_all_zeros() {
        let tokens = ShortTokenGenerator::with_rand_source(FixedRand(0));
        assert_eq!(tokens.generate(), "0000000000000");
    }

    #[test]
    fn one_encodes_to_trailing_one() {
        let tokens = ShortTokenGenerator::with_rand_source(FixedRand(1));
        assert_eq!(tokens.generate(), "0000000000001");
    }

    #[test]
    fn max_fills_every_group() {
        let tokens = ShortTokenGenerator::with_rand_source(FixedRand(u64::MAX));
        assert_eq!(tokens.generate(), "FZZZZZZZZZZZZ");
    }

    #[test]
    fn tokens_stay_within_the_alphabet() {
        let tokens = ShortTokenGenerator::new();
        for _ in 0..64 {
            let token = tokens.generate();
            assert_eq!(token.len(), SHORT_TOKEN_LEN);
            assert!(token.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn thread_random_tokens_differ() {
        let tokens = ShortTokenGenerator::new();
        assert_ne!(tokens.generate(), tokens.generate());
    }
}
