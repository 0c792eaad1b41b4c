//! Seeded random number generation.
//!
//! All stochastic operations take an explicit `&mut R: Rng`; this module only
//! decides how those generators are created so that a run is reproducible
//! from a single `u64` seed, sequential or parallel.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws `count` child seeds from `rng`, one per independent stream.
///
/// Children seeded this way do not share state, so they may be consumed on
/// different threads without changing the outcome.
pub fn split_seeds<R: Rng>(rng: &mut R, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.random::<u64>()).collect()
}

/// Returns a uniformly shuffled permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rng_deterministic() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..10 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_split_seeds_count() {
        let mut rng = create_rng(42);
        let seeds = split_seeds(&mut rng, 16);
        assert_eq!(seeds.len(), 16);
        let mut dedup = seeds.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), 16, "child seeds should be distinct");
    }

    #[test]
    fn test_random_permutation() {
        let mut rng = create_rng(42);
        let mut perm = random_permutation(20, &mut rng);
        perm.sort_unstable();
        assert_eq!(perm, (0..20).collect::<Vec<_>>());
    }
}
