use serde::{Deserialize, Serialize};

use crate::core::motif::Motif;

/// One located occurrence of a motif in a concatenated sequence.
///
/// `motif_index` refers to the motif's position in the declared motif list.
/// The hit covers positions `[start, start + len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hit {
    pub motif_index: usize,
    pub start: usize,
    pub len: usize,
}

impl Hit {
    #[must_use]
    pub fn new(motif_index: usize, start: usize, len: usize) -> Self {
        Self {
            motif_index,
            start,
            len,
        }
    }

    /// Exclusive end position
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Positions covered by this hit
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end()
    }

    #[must_use]
    pub fn overlaps(&self, other: &Hit) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// All start offsets of one motif in one sequence, ascending and duplicate-free
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifOccurrences {
    pub motif: Motif,
    pub offsets: Vec<usize>,
}

impl MotifOccurrences {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// A hit together with the stacking row it was assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedHit {
    pub hit: Hit,
    pub row: usize,
}

/// Row assignment for every hit of one sequence, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAssignment {
    placed: Vec<PlacedHit>,
}

impl RowAssignment {
    #[must_use]
    pub fn new(placed: Vec<PlacedHit>) -> Self {
        Self { placed }
    }

    /// Row of a given hit, if it was part of the assignment
    #[must_use]
    pub fn row_of(&self, hit: &Hit) -> Option<usize> {
        self.placed.iter().find(|p| p.hit == *hit).map(|p| p.row)
    }

    /// Number of rows in use (highest row + 1), zero when there are no hits
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.placed.iter().map(|p| p.row + 1).max().unwrap_or(0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedHit> {
        self.placed.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

impl<'a> IntoIterator for &'a RowAssignment {
    type Item = &'a PlacedHit;
    type IntoIter = std::slice::Iter<'a, PlacedHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.placed.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps() {
        let a = Hit::new(0, 0, 4);
        assert!(a.overlaps(&Hit::new(1, 3, 2)));
        assert!(!a.overlaps(&Hit::new(1, 4, 2)));
        assert!(Hit::new(1, 4, 2).overlaps(&Hit::new(0, 5, 1)));
    }

    #[test]
    fn test_row_count() {
        assert_eq!(RowAssignment::default().row_count(), 0);

        let assignment = RowAssignment::new(vec![
            PlacedHit {
                hit: Hit::new(0, 0, 2),
                row: 0,
            },
            PlacedHit {
                hit: Hit::new(0, 1, 2),
                row: 1,
            },
        ]);
        assert_eq!(assignment.row_count(), 2);
        assert_eq!(assignment.row_of(&Hit::new(0, 1, 2)), Some(1));
        assert_eq!(assignment.row_of(&Hit::new(0, 5, 2)), None);
    }
}
