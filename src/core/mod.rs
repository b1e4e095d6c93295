//! Core data types for motif search and layout.
//!
//! - [`iupac`]: The fixed ambiguity-code table
//! - [`Motif`], [`VariantSet`], [`ExpandedMotif`], [`MotifSet`]: Patterns and their literal expansions
//! - [`GeneRecord`]: A sequence split into upstream, feature and downstream regions
//! - [`Hit`], [`MotifOccurrences`], [`RowAssignment`]: Search and layout results
//!
//! ## Ambiguity codes
//!
//! | Code | Bases | Code | Bases |
//! |------|-------|------|-------|
//! | R | A/G | K | G/T |
//! | Y | C/T | M | A/C |
//! | S | G/C | B | C/G/T |
//! | W | A/T | D | A/G/T |
//! | H | A/C/T | V | A/C/G |
//! | N | A/C/G/T | U | T |
//!
//! [`Motif`]: motif::Motif
//! [`VariantSet`]: motif::VariantSet
//! [`ExpandedMotif`]: motif::ExpandedMotif
//! [`MotifSet`]: motif::MotifSet
//! [`GeneRecord`]: sequence::GeneRecord
//! [`Hit`]: hit::Hit
//! [`MotifOccurrences`]: hit::MotifOccurrences
//! [`RowAssignment`]: hit::RowAssignment

pub mod hit;
pub mod iupac;
pub mod motif;
pub mod sequence;
