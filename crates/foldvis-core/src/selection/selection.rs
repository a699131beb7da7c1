//! Combine Selections

use std::ops::{BitAnd, BitOr, Sub};

/// Selection
///
/// Selection are indices that can be use used to
/// identify specific sets of residues within a [`ResidueCollection`](crate::ResidueCollection).
/// Indices are kept sorted and unique.
///
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Selection {
    pub(crate) indices: Vec<usize>,
}

impl Selection {
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Selection { indices }
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

    pub fn contains(&self, idx: usize) -> bool {
        self.indices.binary_search(&idx).is_ok()
    }

    pub fn and(&self, other: &Selection) -> Selection {
        let indices = self
            .indices
            .iter()
            .filter(|&&idx| other.contains(idx))
            .copied()
            .collect();
        Selection { indices }
    }

    pub fn or(&self, other: &Selection) -> Selection {
        let mut indices = self.indices.clone();
        indices.extend(other.indices.iter().filter(|&&idx| !self.contains(idx)));
        Selection::new(indices)
    }

    // difference
    pub fn not(&self, other: &Selection) -> Selection {
        let indices = self
            .indices
            .iter()
            .filter(|&&idx| !other.contains(idx))
            .copied()
            .collect();
        Selection { indices }
    }
}

impl BitAnd for &Selection {
    type Output = Selection;

    fn bitand(self, other: Self) -> Selection {
        self.and(other)
    }
}

impl BitOr for &Selection {
    type Output = Selection;

    fn bitor(self, other: Self) -> Selection {
        self.or(other)
    }
}

impl Sub for &Selection {
    type Output = Selection;

    fn sub(self, other: Self) -> Selection {
        self.not(other)
    }
}
