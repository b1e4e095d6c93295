//! Parser for FASTA files using noodles.
//!
//! Each record's sequence is split into upstream, feature and downstream
//! regions around its first run of uppercase letters.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::{debug, warn};

use crate::core::sequence::GeneRecord;
use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse a FASTA file into gene records, in file order.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if no records are found,
/// `ParseError::MissingFeature` if a record has no uppercase region, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<GeneRecord>, ParseError> {
    debug!(path = %path.display(), "Reading FASTA");

    if is_gzipped(path) {
        parse_fasta_gzipped(path)
    } else {
        parse_fasta_uncompressed(path)
    }
}

/// Parse an uncompressed FASTA file
fn parse_fasta_uncompressed(path: &Path) -> Result<Vec<GeneRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let mut fasta_reader = fasta::io::Reader::new(reader);

    parse_fasta_reader(&mut fasta_reader)
}

/// Parse a gzip-compressed FASTA file
fn parse_fasta_gzipped(path: &Path) -> Result<Vec<GeneRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    // bgzip files are a series of gzip members
    let decoder = MultiGzDecoder::new(file);
    let reader = BufReader::new(decoder);
    let mut fasta_reader = fasta::io::Reader::new(reader);

    parse_fasta_reader(&mut fasta_reader)
}

/// Parse FASTA text already held in memory
///
/// # Errors
///
/// See [`parse_fasta_file`].
pub fn parse_fasta_str(text: &str) -> Result<Vec<GeneRecord>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(text.as_bytes());
    parse_fasta_reader(&mut fasta_reader)
}

/// Parse from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<GeneRecord>, ParseError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        // Check record limit for DOS protection
        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let title = match record.description() {
            Some(description) => format!("{name} {}", String::from_utf8_lossy(description)),
            None => name,
        };
        let sequence = String::from_utf8_lossy(record.sequence().as_ref()).to_string();

        let gene = GeneRecord::from_sequence(&title, &sequence)
            .ok_or_else(|| ParseError::MissingFeature(title.clone()))?;

        if gene.has_additional_features() {
            warn!(
                record = %title,
                "Record has more than one uppercase region; only the first is drawn as the feature"
            );
        }

        records.push(gene);
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    debug!(records = records.len(), "Parsed FASTA records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fasta.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Figure_1.FA")));

        assert!(!is_fasta_file(Path::new("motifs.txt")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_parse_fasta_file() {
        let fasta_content = b">INSR chr19:7150261-7150808 (reverse complement)\naaatg\ncTGCAT\nGCAaaa\n>MBNL\nccATGcc\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let records = parse_fasta_file(temp.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].name,
            "INSR chr19:7150261-7150808 (reverse complement)"
        );
        assert_eq!(records[0].upstream, "aaatgc");
        assert_eq!(records[0].feature, "TGCATGCA");
        assert_eq!(records[0].downstream, "aaa");
        assert_eq!(records[1].name, "MBNL");
        assert_eq!(records[1].len(), 7);
    }

    #[test]
    fn test_parse_gzipped_fasta() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">g1\nttTGCTtt\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let records = parse_fasta_file(temp.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].feature, "TGCT");
    }

    #[test]
    fn test_parse_empty_fasta() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"").unwrap();
        temp.flush().unwrap();

        let result = parse_fasta_file(temp.path());
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_record_without_feature_is_rejected() {
        let result = parse_fasta_str(">g1\nacgt\n>g2\nacgt\n");
        match result {
            Err(ParseError::MissingFeature(name)) => assert_eq!(name, "g1"),
            other => panic!("Expected MissingFeature, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = parse_fasta_file(Path::new("/nonexistent/genes.fa"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
