//! Nondeterministic choice sources.
//!
//! The engine never hard-wires its randomness: every decision goes through
//! the [`NonDet`] trait, so production runs draw from a real generator while
//! tests substitute a seeded or scripted sequence. Same seed, same walk.

use std::collections::VecDeque;

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of nondeterministic choices. Pure contract, stateless beyond the
/// underlying stream.
pub trait NonDet {
    /// Uniform index into a nonempty candidate set.
    ///
    /// Panics if `len == 0`; nonemptiness is the caller's contract.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Uniform integer in the half-open range `[min, max)`.
    ///
    /// Panics unless `min < max`.
    fn int_in_range(&mut self, min: i64, max: i64) -> i64;

    /// Uniform pick from a nonempty slice.
    fn one_of<'a, T>(&mut self, values: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        &values[self.choose_index(values.len())]
    }
}

/// [`NonDet`] backed by any [`rand::Rng`].
pub struct RngNonDet<R: Rng> {
    rng: R,
}

impl<R: Rng> RngNonDet<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngNonDet<ChaCha8Rng> {
    /// Deterministic source for reproducible walks.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RngNonDet<ThreadRng> {
    /// The production default, backed by the process-wide generator.
    pub fn from_thread_rng() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> NonDet for RngNonDet<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "at least one candidate is required");
        self.rng.gen_range(0..len)
    }

    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");
        self.rng.gen_range(min..max)
    }
}

/// Replays a programmed sequence of choices. Test double; panics when the
/// script runs dry or an entry is out of range.
pub struct ScriptedNonDet {
    indices: VecDeque<usize>,
    ints: VecDeque<i64>,
}

impl ScriptedNonDet {
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            ints: VecDeque::new(),
        }
    }

    pub fn with_ints(mut self, ints: impl IntoIterator<Item = i64>) -> Self {
        self.ints = ints.into_iter().collect();
        self
    }
}

impl NonDet for ScriptedNonDet {
    fn choose_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "at least one candidate is required");
        let index = self
            .indices
            .pop_front()
            .expect("scripted choice sequence exhausted");
        assert!(index < len, "scripted index {index} out of range {len}");
        index
    }

    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");
        let value = self
            .ints
            .pop_front()
            .expect("scripted integer sequence exhausted");
        assert!(
            (min..max).contains(&value),
            "scripted integer {value} outside [{min}, {max})"
        );
        value
    }
}

/// Uniform pick using the process-wide generator. For user-supplied
/// initializers and effects that sample their own values.
pub fn one_of<T>(values: &[T]) -> &T {
    RngNonDet::from_thread_rng().one_of(values)
}

/// Uniform integer in `[min, max)` using the process-wide generator.
pub fn int_in_range(min: i64, max: i64) -> i64 {
    RngNonDet::from_thread_rng().int_in_range(min, max)
}
