//! Centralized validation and helper functions.

use std::path::{Path, PathBuf};

/// Maximum number of records allowed in a single FASTA file
pub const MAX_RECORDS: usize = 10_000;

/// Maximum number of motifs in a motif file
pub const MAX_MOTIFS: usize = 1_000;

/// Maximum number of literal variants a single motif may expand to (4^8)
pub const MAX_VARIANTS_PER_MOTIF: usize = 65_536;

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Same as [`check_record_limit`] for motif lists
#[must_use]
pub fn check_motif_limit(count: usize) -> Option<String> {
    if count >= MAX_MOTIFS {
        Some(format!(
            "Too many motifs: adding another would exceed maximum of {MAX_MOTIFS}"
        ))
    } else {
        None
    }
}

/// Strip compression and FASTA extensions from a file name.
///
/// # Examples
///
/// ```
/// use motif_mark::utils::validation::diagram_stem;
/// use std::path::Path;
///
/// assert_eq!(diagram_stem(Path::new("data/Figure_1.fasta")), "Figure_1");
/// assert_eq!(diagram_stem(Path::new("genes.fa.gz")), "genes");
/// assert_eq!(diagram_stem(Path::new("genes")), "genes");
/// ```
#[must_use]
pub fn diagram_stem(path: &Path) -> String {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    for suffix in [".gz", ".bgz"] {
        if has_suffix_ignore_case(&name, suffix) {
            name.truncate(name.len() - suffix.len());
            break;
        }
    }

    if let Some(dot) = name.rfind('.') {
        if dot > 0 {
            name.truncate(dot);
        }
    }

    name
}

fn has_suffix_ignore_case(name: &str, suffix: &str) -> bool {
    name.len() > suffix.len()
        && name.is_char_boundary(name.len() - suffix.len())
        && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Where the diagram for `input` is written.
///
/// Defaults to the input's directory; `output_dir` overrides it.
#[must_use]
pub fn svg_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let file_name = format!("{}.svg", diagram_stem(input));
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
