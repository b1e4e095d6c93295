use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::core::iupac::bases_for;
use crate::core::motif::{ExpandedMotif, Motif, MotifSet, VariantSet};
use crate::utils::validation::MAX_VARIANTS_PER_MOTIF;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("Unrecognized symbol '{symbol}' in motif '{motif}'")]
    UnrecognizedSymbol { motif: String, symbol: char },

    #[error("Motif '{motif}' expands to more than {MAX_VARIANTS_PER_MOTIF} variants")]
    TooManyVariants { motif: String },

    #[error("Empty motif")]
    EmptyMotif,
}

/// Expand every motif into its DNA and RNA variant sets.
///
/// Motifs keep their declared order; a repeated motif is expanded once, at its
/// first position. Any motif that fails to expand aborts the whole set.
///
/// # Errors
///
/// Returns `ExpandError::UnrecognizedSymbol` for a character outside the
/// ambiguity table, `ExpandError::TooManyVariants` if a motif is too
/// degenerate, or `ExpandError::EmptyMotif` for an empty pattern.
pub fn expand(motifs: &[Motif]) -> Result<MotifSet, ExpandError> {
    let mut seen = HashSet::new();
    let mut expanded = Vec::with_capacity(motifs.len());

    for motif in motifs {
        if !seen.insert(motif.as_str()) {
            debug!(motif = %motif, "Skipping repeated motif");
            continue;
        }
        expanded.push(expand_motif(motif)?);
    }

    Ok(MotifSet::new(expanded))
}

/// Expand a single motif.
///
/// Takes the Cartesian product of each position's base set, left to right,
/// with the rightmost position varying fastest.
///
/// ```
/// use motif_mark::core::motif::Motif;
/// use motif_mark::matching::expand::expand_motif;
///
/// let expanded = expand_motif(&Motif::new("YA")).unwrap();
/// assert_eq!(expanded.dna.iter().collect::<Vec<_>>(), vec!["CA", "TA"]);
/// assert_eq!(expanded.rna.iter().collect::<Vec<_>>(), vec!["CA", "UA"]);
/// ```
///
/// # Errors
///
/// See [`expand`].
pub fn expand_motif(motif: &Motif) -> Result<ExpandedMotif, ExpandError> {
    if motif.is_empty() {
        return Err(ExpandError::EmptyMotif);
    }

    let positions = motif
        .as_str()
        .chars()
        .map(|symbol| {
            bases_for(symbol).ok_or_else(|| ExpandError::UnrecognizedSymbol {
                motif: motif.to_string(),
                symbol,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Check the product size before materializing it
    let count = positions
        .iter()
        .try_fold(1usize, |acc, bases| acc.checked_mul(bases.len()))
        .filter(|&count| count <= MAX_VARIANTS_PER_MOTIF)
        .ok_or_else(|| ExpandError::TooManyVariants {
            motif: motif.to_string(),
        })?;

    let mut variants = vec![String::with_capacity(positions.len())];
    for bases in &positions {
        variants = variants
            .iter()
            .flat_map(|prefix| {
                bases.iter().map(move |base| {
                    let mut next = prefix.clone();
                    next.push(*base);
                    next
                })
            })
            .collect();
    }
    debug_assert_eq!(variants.len(), count);

    debug!(motif = %motif, variants = count, "Expanded motif");

    let dna = VariantSet::new(variants);
    let rna = dna.to_rna();

    Ok(ExpandedMotif {
        motif: motif.clone(),
        dna,
        rna,
    })
}
