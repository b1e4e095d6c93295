//! Readers for the tool's two inputs.
//!
//! - **FASTA files**: Each record becomes a [`GeneRecord`](crate::core::sequence::GeneRecord)
//!   split around its uppercase feature region
//! - **Motif files**: One ambiguity-coded motif per line
//!
//! ## Example
//!
//! ```rust,no_run
//! use motif_mark::parsing::{fasta::parse_fasta_file, motifs::parse_motif_file};
//! use std::path::Path;
//!
//! let records = parse_fasta_file(Path::new("Figure_1.fasta")).unwrap();
//! let motifs = parse_motif_file(Path::new("Fig_1_motifs.txt")).unwrap();
//! ```
//!
//! ## Record layout
//!
//! | Region | Source text |
//! |--------|-------------|
//! | upstream | everything before the first uppercase run |
//! | feature | the first uppercase run |
//! | downstream | everything after it |

use thiserror::Error;

pub mod fasta;
pub mod motifs;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Record '{0}' has no uppercase feature region")]
    MissingFeature(String),

    #[error("Too many records: {0} exceeds maximum allowed (10000)")]
    TooManyRecords(usize),

    #[error("Too many motifs: {0} exceeds maximum allowed (1000)")]
    TooManyMotifs(usize),
}
