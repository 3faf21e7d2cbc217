use rand::distributions::{Distribution, Uniform};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

use crate::error::RandomError;

use super::{ALPHABET, RandomSource};

/// ChaCha-backed [`RandomSource`].
#[derive(Debug)]
pub struct SecureRandom {
    rng: StdRng,
    alphabet: Uniform<usize>,
}

impl SecureRandom {
    /// Seeds a new source from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::Seed`] when the OS source is unavailable.
    pub fn from_os() -> Result<Self, RandomError> {
        StdRng::from_rng(OsRng)
            .map(Self::with_rng)
            .map_err(|source| RandomError::Seed { source })
    }

    /// Deterministic source for tests and reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            alphabet: Uniform::from(0..ALPHABET.len()),
        }
    }
}

impl RandomSource for SecureRandom {
    fn random_string(&mut self, len: usize) -> String {
        let mut out = String::with_capacity(len);
        for _ in 0..len {
            let index = self.alphabet.sample(&mut self.rng);
            if let Some(byte) = ALPHABET.get(index) {
                out.push(char::from(*byte));
            }
        }
        out
    }

    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        self.rng.gen_range(low..=high)
    }

    fn random_index(&mut self, len: usize) -> Result<usize, RandomError> {
        if len == 0 {
            return Err(RandomError::EmptyChoice);
        }
        Ok(self.rng.gen_range(0..len))
    }

    fn fork(&mut self) -> Result<Self, RandomError> {
        StdRng::from_rng(&mut self.rng)
            .map(Self::with_rng)
            .map_err(|source| RandomError::Seed { source })
    }
}
