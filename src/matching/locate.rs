use std::collections::BTreeSet;

use tracing::debug;

use crate::core::hit::{Hit, MotifOccurrences};
use crate::core::motif::{Alphabet, MotifSet};

/// Find every start offset of every motif in a sequence.
///
/// The sequence is uppercased before matching, so callers may pass it with
/// its original case. Each variant is checked at every offset (step 1), so
/// overlapping occurrences are all reported; offsets found by more than one
/// variant are reported once. The result has one entry per motif, in motif
/// order, including motifs with no occurrences.
///
/// ```
/// use motif_mark::core::motif::{Alphabet, Motif};
/// use motif_mark::matching::{expand::expand, locate::locate};
///
/// let motifs = expand(&[Motif::new("AA")]).unwrap();
/// let found = locate("aaa", &motifs, Alphabet::Dna);
/// assert_eq!(found[0].offsets, vec![0, 1]);
/// ```
#[must_use]
pub fn locate(sequence: &str, motifs: &MotifSet, alphabet: Alphabet) -> Vec<MotifOccurrences> {
    let haystack = sequence.to_ascii_uppercase();
    let haystack = haystack.as_bytes();

    motifs
        .iter()
        .map(|expanded| {
            let mut offsets = BTreeSet::new();
            for variant in expanded.variants(alphabet).iter() {
                offsets.extend(find_all(haystack, variant.as_bytes()));
            }

            debug!(
                motif = %expanded.motif,
                hits = offsets.len(),
                "Located motif"
            );

            MotifOccurrences {
                motif: expanded.motif.clone(),
                offsets: offsets.into_iter().collect(),
            }
        })
        .collect()
}

/// Every offset where `needle` occurs in `haystack`, overlaps included
fn find_all<'a>(haystack: &'a [u8], needle: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
    let last_start = (haystack.len() + 1).saturating_sub(needle.len());
    (0..last_start).filter(move |&i| !needle.is_empty() && &haystack[i..i + needle.len()] == needle)
}

/// Flatten located occurrences into hits in row-assignment order.
///
/// Motifs are taken in declared order and, within a motif, offsets ascend.
#[must_use]
pub fn hits_in_order(occurrences: &[MotifOccurrences]) -> Vec<Hit> {
    occurrences
        .iter()
        .enumerate()
        .flat_map(|(motif_index, found)| {
            let len = found.motif.len();
            found
                .offsets
                .iter()
                .map(move |&start| Hit::new(motif_index, start, len))
        })
        .collect()
}
