//! Random selection helpers for the entity generator.
//!
//! Pure functions over an injected RNG: production call sites pass the
//! thread-local generator, tests pass a seeded one and assert size bounds
//! and membership rather than exact values.

use rand::prelude::*;

/// Select a random, duplicate-free subset of `items`.
///
/// The subset length is drawn uniformly from `[min, max]` (inclusive, `min`
/// must be <= `max`), then a shuffled copy of the source is truncated to
/// that length. Selection is without replacement; a source shorter than the
/// drawn length silently yields the whole source in shuffled order.
pub fn random_subset<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
    min: usize,
    max: usize,
) -> Vec<T> {
    let size = rng.random_range(min..=max);
    let mut copy: Vec<T> = items.to_vec();
    copy.shuffle(rng);
    copy.truncate(size);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn source() -> Vec<u32> {
        (0..20).collect()
    }

    #[test]
    fn test_subset_size_within_bounds() {
        let items = source();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..100 {
            let subset = random_subset(&mut rng, &items, 5, 7);
            assert!((5..=7).contains(&subset.len()));
        }
    }

    #[test]
    fn test_subset_elements_distinct_and_from_source() {
        let items = source();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..100 {
            let subset = random_subset(&mut rng, &items, 3, 8);
            let unique: HashSet<u32> = subset.iter().copied().collect();
            assert_eq!(unique.len(), subset.len());
            assert!(subset.iter().all(|x| items.contains(x)));
        }
    }

    #[test]
    fn test_exact_size_when_bounds_equal() {
        let items = source();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let subset = random_subset(&mut rng, &items, 4, 4);
        assert_eq!(subset.len(), 4);
    }

    #[test]
    fn test_short_source_yields_shorter_subset() {
        let items = vec![1u32, 2, 3];
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let subset = random_subset(&mut rng, &items, 5, 7);
        assert_eq!(subset.len(), 3);
        let unique: HashSet<u32> = subset.iter().copied().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_full_range_can_cover_source() {
        let items = source();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        // With min == max == len the subset is a permutation of the source
        let subset = random_subset(&mut rng, &items, items.len(), items.len());
        let unique: HashSet<u32> = subset.iter().copied().collect();
        assert_eq!(unique.len(), items.len());
    }
}
