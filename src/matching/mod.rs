//! Motif expansion, occurrence search and row assignment.
//!
//! The pipeline for one run:
//!
//! 1. [`expand`](expand::expand): Turn each ambiguity-coded motif into its
//!    literal DNA and RNA variants (once per run)
//! 2. [`locate`](locate::locate): Scan one sequence for every variant of every
//!    motif, reporting sorted, duplicate-free start offsets per motif
//! 3. [`assign_rows`](rows::assign_rows): Stack overlapping hits into rows so
//!    they can be drawn without colliding
//!
//! Steps 2 and 3 run fresh for each sequence and never fail.
//! [`MotifEngine`](engine::MotifEngine) runs both for a whole record.
//!
//! ## Example
//!
//! ```rust
//! use motif_mark::core::motif::{Alphabet, Motif};
//! use motif_mark::matching::{expand::expand, locate::{hits_in_order, locate}, rows::assign_rows};
//!
//! let motifs = expand(&[Motif::new("YGCY"), Motif::new("GCT")]).unwrap();
//! let found = locate("aaaTGCTaaa", &motifs, Alphabet::Dna);
//! assert_eq!(found[0].offsets, vec![3]);
//!
//! let rows = assign_rows(&hits_in_order(&found));
//! assert_eq!(rows.row_count(), 2);
//! ```

pub mod engine;
pub mod expand;
pub mod locate;
pub mod rows;

pub use engine::{MotifEngine, RecordHits};
pub use expand::ExpandError;
