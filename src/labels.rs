//! Random label-subset sampling for the benchmark's image filters.

use rand::seq::SliceRandom;
use rand::Rng;

/// The label identifiers known to the target project.
pub const LABELS: [&str; 6] = ["empty", "unknown", "1", "bird", "2", "rodent"];

/// Pick a random, duplicate-free subset of the known labels.
///
/// The subset always has between 1 and `LABELS.len() - 1` elements, so
/// each request filters on at least one label but never on all of them.
pub fn random_labels<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(1..LABELS.len());
    LABELS
        .choose_multiple(rng, count)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_subset_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let labels = random_labels(&mut rng);
            assert!(!labels.is_empty());
            assert!(labels.len() < LABELS.len());
        }
    }

    #[test]
    fn test_subset_distinct_and_known() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let labels = random_labels(&mut rng);
            let unique: HashSet<&str> = labels.iter().map(String::as_str).collect();
            assert_eq!(unique.len(), labels.len());
            for label in &labels {
                assert!(LABELS.contains(&label.as_str()), "unknown label: {}", label);
            }
        }
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);
        for _ in 0..50 {
            assert_eq!(random_labels(&mut a), random_labels(&mut b));
        }
    }

    proptest! {
        #[test]
        fn prop_subset_valid_for_any_seed(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let labels = random_labels(&mut rng);

            prop_assert!((1..LABELS.len()).contains(&labels.len()));

            let unique: HashSet<&str> = labels.iter().map(String::as_str).collect();
            prop_assert_eq!(unique.len(), labels.len());

            for label in &labels {
                prop_assert!(LABELS.contains(&label.as_str()));
            }
        }
    }
}
