//! union cardinality of a collection of integer sets, computed by two
//! interchangeable strategies
//!
//! the direct strategy folds pairwise unions in near-linear time; the
//! inclusion-exclusion strategy sums signed intersection sizes over every
//! non-empty subset of the collection and blows up exponentially in the
//! number of sets, which is the behavior the benchmarks exist to surface

use num::integer::Integer;

use crate::combinations::MultiIndex;
use crate::set::traits::Finite;
use crate::set::IntegerSet;

/// folds union over the collection, starting from the empty set, and
/// returns the size of the result
pub fn direct_union_size<E: Integer + Copy>(sets: &[IntegerSet<E>]) -> usize {
    let mut working_set = IntegerSet::new();
    for set in sets {
        working_set = working_set.union(set);
    }
    working_set.size()
}

/// intersects the sets selected by the multi-index through a fold over the
/// selected references, seeded with the set at the first position
fn intersect_selected<E: Integer + Copy>(
    sets: &[IntegerSet<E>],
    multi_index: &MultiIndex,
) -> IntegerSet<E> {
    let selected: Vec<&IntegerSet<E>> = multi_index.indices().iter().map(|&i| &sets[i]).collect();
    let (first, rest) = selected
        .split_first()
        .expect("a multi-index selecting at least one set");
    rest.iter()
        .fold((*first).clone(), |acc, set| acc.intersection(set))
}

/// computes |A1 ∪ ... ∪ An| as the alternating sum of intersection sizes
/// over every non-empty subset of the collection:
/// Σ_{k=1}^{n} (-1)^{k+1} Σ_{|S|=k} |∩_{i∈S} Ai|
///
/// agrees with `direct_union_size` on every input
pub fn inclusion_exclusion_union_size<E: Integer + Copy>(sets: &[IntegerSet<E>]) -> i64 {
    let num_sets = sets.len();
    let mut accumulator = 0i64;
    for k in 1..=num_sets {
        let mut multi_index = Some(MultiIndex::first(num_sets, k));
        while let Some(current) = multi_index {
            let term = intersect_selected(sets, &current).size() as i64;
            if k % 2 == 1 {
                accumulator += term;
            } else {
                accumulator -= term;
            }
            multi_index = current.advance();
        }
    }
    accumulator
}
