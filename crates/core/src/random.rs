use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::shuffle::shuffled;

/// Source of randomness for shuffling, so sessions can be replayed in tests.
#[derive(Debug, Clone, Default)]
pub enum RandomSource {
    /// The thread-local generator seeded by the OS.
    #[default]
    Thread,
    /// A deterministic generator; successive draws continue the same stream.
    Seeded(StdRng),
}

impl RandomSource {
    /// Returns a source backed by the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::Thread
    }

    /// Returns a deterministic source for the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(StdRng::seed_from_u64(seed))
    }

    /// Returns true if this source is deterministic.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        matches!(self, RandomSource::Seeded(_))
    }

    /// Shuffle a copy of `items` with this source.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        match self {
            RandomSource::Thread => shuffled(items, &mut rand::rng()),
            RandomSource::Seeded(rng) => shuffled(items, rng),
        }
    }
}

/// Seed used by tests and doc examples.
pub const FIXED_TEST_SEED: u64 = 0x5eed;

/// Returns a `RandomSource` seeded with `FIXED_TEST_SEED`.
#[must_use]
pub fn fixed_seed_source() -> RandomSource {
    RandomSource::seeded(FIXED_TEST_SEED)
}
