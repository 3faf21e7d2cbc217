//! Randomization engine for per-request variance.
//!
//! Workers own their source exclusively; nothing here is shared across
//! tasks. The production source is ChaCha seeded from the operating system,
//! and a seeding failure is surfaced instead of falling back to a weaker
//! generator.
mod percent;
mod source;


pub use percent::Percent;
pub use source::SecureRandom;

use crate::error::RandomError;

/// Characters used by [`RandomSource::random_string`].
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Capability set the request builder and worker loop draw randomness from.
pub trait RandomSource: Send {
    /// Returns `len` characters drawn uniformly from [`ALPHABET`].
    fn random_string(&mut self, len: usize) -> String;

    /// Returns an integer uniformly in `[min, max]`. Reversed bounds are
    /// treated as the same closed interval.
    fn random_int(&mut self, min: u32, max: u32) -> u32;

    /// Returns an index uniformly in `[0, len)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EmptyChoice`] when `len` is zero.
    fn random_index(&mut self, len: usize) -> Result<usize, RandomError>;

    /// Derives an independent source, used to hand each worker its own
    /// stream.
    ///
    /// # Errors
    ///
    /// Returns an error when the parent source cannot produce a seed.
    fn fork(&mut self) -> Result<Self, RandomError>
    where
        Self: Sized;

    /// Picks one element of `set` uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EmptyChoice`] when `set` is empty.
    fn random_choice<'set, T>(&mut self, set: &'set [T]) -> Result<&'set T, RandomError>
    where
        Self: Sized,
    {
        let index = self.random_index(set.len())?;
        set.get(index).ok_or(RandomError::EmptyChoice)
    }

    /// Rolls `random_int(1, 100) <= percent`.
    fn chance(&mut self, percent: Percent) -> bool
    where
        Self: Sized,
    {
        if percent.is_zero() {
            return false;
        }
        self.random_int(1, 100) <= u32::from(percent.get())
    }
}
