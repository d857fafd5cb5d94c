use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::set::traits::Collecting;
use crate::set::IntegerSet;

/// generates `set_count` sets, each collecting `set_size` draws from a
/// uniform distribution over [0, max_element]
///
/// duplicate draws collapse into a single element, so the realized set
/// sizes can be smaller than `set_size`
///
/// the same seed always produces the same collection
pub fn generate_integer_sets(
    seed: u64,
    set_count: usize,
    set_size: usize,
    max_element: i64,
) -> Result<Vec<IntegerSet<i64>>, String> {
    if max_element < 0 {
        return Err(format!(
            "invalid max_element {}: the sampling range [0, max_element] must be non-empty",
            max_element
        ));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new_inclusive(0, max_element);
    let mut test_data = Vec::with_capacity(set_count);
    for _ in 0..set_count {
        let mut set = IntegerSet::new();
        for _ in 0..set_size {
            set.collect(dist.sample(&mut rng));
        }
        test_data.push(set);
    }
    Ok(test_data)
}

#[cfg(test)]
mod tests {
    use crate::set::traits::Finite;

    use super::generate_integer_sets;

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let first = generate_integer_sets(42, 10, 10, 100).unwrap();
        let second = generate_integer_sets(42, 10, 10, 100).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_set_count_and_element_range() {
        let sets = generate_integer_sets(0, 7, 15, 20).unwrap();
        assert_eq!(sets.len(), 7);
        for set in sets.iter() {
            assert!(set.size() <= 15);
            for &element in set.elements() {
                assert!(0 <= element && element <= 20);
            }
            for pair in set.elements().windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn test_degenerate_parameters() {
        assert_eq!(generate_integer_sets(0, 0, 10, 100).unwrap().len(), 0);

        let singletons = generate_integer_sets(0, 3, 5, 0).unwrap();
        for set in singletons.iter() {
            assert_eq!(set.elements(), &[0]);
        }

        assert!(generate_integer_sets(0, 3, 5, -1).is_err());
    }
}
