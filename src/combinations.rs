//! lexicographic enumeration of the k-element index combinations of an
//! n-element collection

/// a strictly increasing tuple of k positions in [0, num_items - 1],
/// selecting a k-subset of a collection by index
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MultiIndex {
    indices: Vec<usize>,
    num_items: usize,
}

impl MultiIndex {
    /// the lexicographically smallest k-tuple (0, 1, ..., k - 1)
    pub fn first(num_items: usize, k: usize) -> MultiIndex {
        assert!(
            k <= num_items,
            "cannot choose {} indices out of {} items",
            k,
            num_items
        );
        MultiIndex {
            indices: (0..k).collect(),
            num_items,
        }
    }

    pub fn from_indices(indices: Vec<usize>, num_items: usize) -> MultiIndex {
        for pair in indices.windows(2) {
            assert!(
                pair[0] < pair[1],
                "multi-index positions must be strictly increasing, received {:?}",
                indices
            );
        }
        if let Some(&last) = indices.last() {
            assert!(
                last < num_items,
                "position {} is out of range for {} items",
                last,
                num_items
            );
        }
        MultiIndex {
            indices,
            num_items,
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// produces the lexicographically next strictly increasing tuple of the
    /// same length, or None once every combination has been visited
    ///
    /// the rightmost position that can still be incremented while leaving
    /// room for the positions to its right is bumped, and every position
    /// after it takes the next integer after its predecessor
    pub fn advance(mut self) -> Option<MultiIndex> {
        let k = self.indices.len();
        let n = self.num_items;
        let p = (0..k)
            .rev()
            .find(|&p| self.indices[p] + 1 < n - (k - 1 - p))?;
        self.indices[p] += 1;
        for i in p + 1..k {
            self.indices[i] = self.indices[p] + (i - p);
        }
        Some(self)
    }
}

/// iterates over all C(num_items, k) multi-indices in lexicographic order,
/// each exactly once
pub struct Combinations {
    next: Option<MultiIndex>,
}

impl Combinations {
    pub fn new(num_items: usize, k: usize) -> Combinations {
        Combinations {
            next: Some(MultiIndex::first(num_items, k)),
        }
    }
}

impl Iterator for Combinations {
    type Item = MultiIndex;
    fn next(&mut self) -> Option<MultiIndex> {
        let current = self.next.take()?;
        self.next = current.clone().advance();
        Some(current)
    }
}
