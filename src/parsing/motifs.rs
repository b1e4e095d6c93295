//! Parser for motif list files.
//!
//! One motif per line. Lines are trimmed and uppercased, blank lines are
//! skipped, and a motif listed twice keeps its first position.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::core::motif::Motif;
use crate::parsing::ParseError;
use crate::utils::validation::check_motif_limit;

/// Parse a motif file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::InvalidFormat`
/// if it holds no motifs, or `ParseError::TooManyMotifs` if the limit is exceeded.
pub fn parse_motif_file(path: &Path) -> Result<Vec<Motif>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_motif_text(&content)
}

/// Parse motif file content.
///
/// ```
/// use motif_mark::parsing::motifs::parse_motif_text;
///
/// let motifs = parse_motif_text("ygcy\n\nGCAUG\nYGCY\n").unwrap();
/// let patterns: Vec<_> = motifs.iter().map(|m| m.as_str()).collect();
/// assert_eq!(patterns, vec!["YGCY", "GCAUG"]);
/// ```
///
/// # Errors
///
/// See [`parse_motif_file`].
pub fn parse_motif_text(content: &str) -> Result<Vec<Motif>, ParseError> {
    let mut seen = HashSet::new();
    let mut motifs = Vec::new();

    for line in content.lines() {
        let motif = Motif::new(line);
        if motif.is_empty() {
            continue;
        }

        if !seen.insert(motif.clone()) {
            debug!(motif = %motif, "Ignoring repeated motif");
            continue;
        }

        if check_motif_limit(motifs.len()).is_some() {
            return Err(ParseError::TooManyMotifs(motifs.len()));
        }

        motifs.push(motif);
    }

    if motifs.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No motifs found in motif file".to_string(),
        ));
    }

    debug!(motifs = motifs.len(), "Parsed motif list");
    Ok(motifs)
}
