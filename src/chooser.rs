//! Sources of phrase choices
//!
//! Every random decision in the bulletin goes through [`PhraseChooser`], so
//! a run can be driven by real randomness, a seed, or a fixed script.

use rand::rngs::{StdRng, ThreadRng};
use rand::{RngExt, SeedableRng};
use std::collections::VecDeque;

/// Picks which entry of a phrase pool to use
pub trait PhraseChooser {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Pick one phrase from a non-empty pool
    fn choose<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        debug_assert!(!pool.is_empty(), "phrase pools are never empty");
        pool[self.choose_index(pool.len()) % pool.len()]
    }
}

/// Uniform choice backed by a `rand` generator
pub struct RandomChooser<R = ThreadRng> {
    rng: R,
}

impl RandomChooser<ThreadRng> {
    /// Chooser over the thread-local generator
    #[must_use]
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomChooser<StdRng> {
    /// Reproducible chooser: the same seed yields the same bulletin
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngExt> PhraseChooser for RandomChooser<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Build the chooser for a run: seeded when a seed is configured
#[must_use]
pub fn chooser_for(seed: Option<u64>) -> Box<dyn PhraseChooser> {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "Using seeded phrase chooser");
            Box::new(RandomChooser::seeded(seed))
        }
        None => Box::new(RandomChooser::thread()),
    }
}

/// Always picks the same position (wrapped to the pool size)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChooser(pub usize);

impl PhraseChooser for FixedChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Replays a list of picks in order, then falls back to the first entry.
///
/// Records the size of every pool it was asked about.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChooser {
    picks: VecDeque<usize>,
    pool_sizes: Vec<usize>,
}

impl ScriptedChooser {
    pub fn new<I: IntoIterator<Item = usize>>(picks: I) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            pool_sizes: Vec::new(),
        }
    }

    /// Sizes of the pools drawn from, in draw order
    #[must_use]
    pub fn pool_sizes(&self) -> &[usize] {
        &self.pool_sizes
    }
}

impl PhraseChooser for ScriptedChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.pool_sizes.push(len);
        self.picks.pop_front().unwrap_or(0) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: &[&str] = &["uno", "due", "tre"];

    #[test]
    fn test_fixed_chooser_wraps() {
        assert_eq!(FixedChooser(0).choose(POOL), "uno");
        assert_eq!(FixedChooser(2).choose(POOL), "tre");
        assert_eq!(FixedChooser(4).choose(POOL), "due");
    }

    #[test]
    fn test_scripted_chooser_replays_then_defaults() {
        let mut chooser = ScriptedChooser::new([2, 1]);
        assert_eq!(chooser.choose(POOL), "tre");
        assert_eq!(chooser.choose(POOL), "due");
        assert_eq!(chooser.choose(POOL), "uno");
        assert_eq!(chooser.pool_sizes(), &[3, 3, 3]);
    }

    #[test]
    fn test_random_chooser_stays_in_range() {
        let mut chooser = RandomChooser::thread();
        for len in 1..10 {
            for _ in 0..50 {
                assert!(chooser.choose_index(len) < len);
            }
        }
    }

    #[test]
    fn test_seeded_chooser_is_reproducible() {
        let mut first = RandomChooser::seeded(42);
        let mut second = RandomChooser::seeded(42);
        let a: Vec<usize> = (0..20).map(|_| first.choose_index(4)).collect();
        let b: Vec<usize> = (0..20).map(|_| second.choose_index(4)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_chooser_reaches_every_entry() {
        let mut chooser = RandomChooser::seeded(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[chooser.choose_index(3)] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
