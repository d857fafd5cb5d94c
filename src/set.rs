use num::integer::Integer;

use crate::set::traits::{Collecting, Finite, Set};

pub mod traits;

/// an ordered duplicate-free collection of integers, stored as a sorted
/// element vector
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IntegerSet<E: Integer + Copy> {
    elements: Vec<E>,
}

impl<E: Integer + Copy> IntegerSet<E> {
    pub fn new() -> IntegerSet<E> {
        IntegerSet {
            elements: Vec::new(),
        }
    }

    pub fn from_slice(slice: &[E]) -> IntegerSet<E> {
        let mut elements = slice.to_vec();
        elements.sort_unstable();
        elements.dedup();
        IntegerSet {
            elements,
        }
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<E> {
        self.elements
    }

    /// merges the elements of the two sets into a new sorted duplicate-free
    /// set containing every element present in either input
    pub fn union(&self, other: &IntegerSet<E>) -> IntegerSet<E> {
        let mut merged = Vec::with_capacity(self.elements.len() + other.elements.len());
        let mut i = 0;
        let mut j = 0;
        while i < self.elements.len() && j < other.elements.len() {
            let a = self.elements[i];
            let b = other.elements[j];
            if a < b {
                merged.push(a);
                i += 1;
            } else if b < a {
                merged.push(b);
                j += 1;
            } else {
                merged.push(a);
                i += 1;
                j += 1;
            }
        }
        merged.extend_from_slice(&self.elements[i..]);
        merged.extend_from_slice(&other.elements[j..]);
        IntegerSet {
            elements: merged,
        }
    }

    /// keeps only the elements present in both sets
    pub fn intersection(&self, other: &IntegerSet<E>) -> IntegerSet<E> {
        let mut common = Vec::new();
        let mut i = 0;
        let mut j = 0;
        while i < self.elements.len() && j < other.elements.len() {
            let a = self.elements[i];
            let b = other.elements[j];
            if a < b {
                i += 1;
            } else if b < a {
                j += 1;
            } else {
                common.push(a);
                i += 1;
                j += 1;
            }
        }
        IntegerSet {
            elements: common,
        }
    }
}

impl<E: Integer + Copy> Set for IntegerSet<E> {
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<E: Integer + Copy> Finite for IntegerSet<E> {
    fn size(&self) -> usize {
        self.elements.len()
    }
}

impl<E: Integer + Copy> Collecting<E> for IntegerSet<E> {
    fn collect(&mut self, item: E) {
        match self.elements.binary_search(&item) {
            Ok(_) => {}
            Err(pos) => self.elements.insert(pos, item),
        }
    }
}
