//! # motif-mark
//!
//! A library for locating sequence motifs in gene records and drawing them to
//! scale as SVG diagrams.
//!
//! Motifs may use IUPAC ambiguity codes (`Y` for C or T, `N` for any base, and
//! so on). Each motif is expanded once into every literal sequence it stands
//! for, then each record is searched for all of them. Records are split into
//! an upstream intron, an exon (the first uppercase run) and a downstream
//! intron, and drawn one panel per record with a shared legend.
//!
//! ## Features
//!
//! - **Ambiguity codes**: All 16 IUPAC nucleotide symbols, case-insensitive
//! - **DNA and RNA**: Records containing `U` are searched with RNA variants
//! - **Overlapping hits**: Every start offset is reported, overlaps included
//! - **Stacked marks**: Overlapping hits are lifted into rows so none collide
//! - **Palettes**: Built-in qualitative palettes or a JSON color list
//!
//! ## Example
//!
//! ```rust
//! use motif_mark::{GeneRecord, Motif, MotifEngine};
//! use motif_mark::matching::expand::expand;
//!
//! let motifs = expand(&[Motif::new("ygcy")]).unwrap();
//! let record = GeneRecord::from_sequence("gene1", "aaaTGCTaaa").unwrap();
//!
//! let result = MotifEngine::new(&motifs).analyze(&record);
//! assert_eq!(result.occurrences[0].offsets, vec![3]);
//! assert_eq!(result.rows.row_count(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Motifs, gene records, hits and row assignments
//! - [`matching`]: Motif expansion, occurrence search and row assignment
//! - [`parsing`]: Readers for FASTA and motif files
//! - [`render`]: Diagram layout, palettes and SVG output
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod render;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::hit::{Hit, RowAssignment};
pub use core::motif::{Alphabet, Motif, MotifSet};
pub use core::sequence::GeneRecord;
pub use matching::engine::{MotifEngine, RecordHits};
