//! Deterministic random number generation for the scripted players.
//!
//! Each scripted player draws from its own stream so that a game replayed
//! with the same seed makes the same choices. Context streams are derived
//! with a fixed mix, so the derivation does not depend on the toolchain.
//!
//! ```
//! use santorini::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut white = rng.for_context("white");
//! let mut again = GameRng::new(42).for_context("white");
//! let cells = [1, 2, 3, 4, 5];
//! assert_eq!(white.choose(&cells), again.choose(&cells));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment, as used for forked streams.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

const FNV_OFFSET: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

/// FNV-1a over the context bytes, folded into the seed.
fn context_seed(seed: u64, context: &str) -> u64 {
    let tag = context
        .bytes()
        .fold(FNV_OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
    seed ^ tag.wrapping_mul(GOLDEN_GAMMA)
}
