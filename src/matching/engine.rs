use serde::Serialize;
use tracing::debug;

use crate::core::hit::{MotifOccurrences, RowAssignment};
use crate::core::motif::{Alphabet, MotifSet};
use crate::core::sequence::GeneRecord;
use crate::matching::locate::{hits_in_order, locate};
use crate::matching::rows::assign_rows;

/// Search and layout result for one record
#[derive(Debug, Clone, Serialize)]
pub struct RecordHits {
    /// The analyzed record
    pub record: GeneRecord,

    /// Alphabet detected for the record (selects DNA or RNA variants)
    pub alphabet: Alphabet,

    /// Offsets per motif, in motif order
    pub occurrences: Vec<MotifOccurrences>,

    /// Stacking rows for every hit
    pub rows: RowAssignment,
}

impl RecordHits {
    /// Total number of hits across all motifs
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.rows.len()
    }
}

/// Runs the locate and row-assignment steps against a fixed motif set
pub struct MotifEngine<'a> {
    motifs: &'a MotifSet,
}

impl<'a> MotifEngine<'a> {
    #[must_use]
    pub fn new(motifs: &'a MotifSet) -> Self {
        Self { motifs }
    }

    /// Locate every motif in a record and stack its hits.
    ///
    /// Each call starts from empty row state.
    #[must_use]
    pub fn analyze(&self, record: &GeneRecord) -> RecordHits {
        let alphabet = record.alphabet();
        let occurrences = locate(&record.search_text(), self.motifs, alphabet);
        let rows = assign_rows(&hits_in_order(&occurrences));

        debug!(
            record = %record.name,
            %alphabet,
            hits = rows.len(),
            rows = rows.row_count(),
            "Analyzed record"
        );

        RecordHits {
            record: record.clone(),
            alphabet,
            occurrences,
            rows,
        }
    }

    /// Analyze records in order
    #[must_use]
    pub fn analyze_all(&self, records: &[GeneRecord]) -> Vec<RecordHits> {
        records.iter().map(|record| self.analyze(record)).collect()
    }
}
