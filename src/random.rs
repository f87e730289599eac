//! Injectable random source for the two genuinely random choices (prelude sampling and the
//! unknown-command template) plus pause jitter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` is never zero.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

#[derive(Debug, Clone)]
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os(),
        }
    }
}

impl RandomSource for RngSource {
    fn next_below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Picks `count` distinct items in random order (partial Fisher-Yates).
pub fn sample_without_replacement<'a, T>(
    items: &'a [T],
    count: usize,
    random: &mut dyn RandomSource,
) -> Vec<&'a T> {
    let mut pool: Vec<&T> = items.iter().collect();
    let count = count.min(pool.len());
    for index in 0..count {
        let pick = index + random.next_below(pool.len() - index);
        pool.swap(index, pick);
    }
    pool.truncate(count);
    pool
}
