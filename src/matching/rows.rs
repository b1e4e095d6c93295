//! Greedy stacking of overlapping hits into drawing rows.
//!
//! Hits are placed one at a time. A sparse coverage map records, for every
//! position touched so far, the stack height last written there. A new hit
//! goes one above the tallest stack anywhere under its span, then writes its
//! own height over every position it covers.
//!
//! This never reuses a free lower row that is only free under part of the
//! span, so it can use more rows than an optimal interval colouring. The
//! output is kept as is because diagrams depend on it.

use std::collections::HashMap;

use tracing::debug;

use crate::core::hit::{Hit, PlacedHit, RowAssignment};

/// Assign a stacking row to every hit of one sequence.
///
/// `hits` must already be in processing order: motifs in declared order, and
/// within a motif by ascending start (see
/// [`hits_in_order`](crate::matching::locate::hits_in_order)). Two hits whose
/// spans intersect never share a row. State is local to the call, so nothing
/// carries over between sequences.
///
/// ```
/// use motif_mark::core::hit::Hit;
/// use motif_mark::matching::rows::assign_rows;
///
/// let rows = assign_rows(&[Hit::new(0, 0, 4), Hit::new(1, 0, 4), Hit::new(0, 10, 2)]);
/// let rows: Vec<_> = rows.iter().map(|p| p.row).collect();
/// assert_eq!(rows, vec![0, 1, 0]);
/// ```
#[must_use]
pub fn assign_rows(hits: &[Hit]) -> RowAssignment {
    let mut coverage: HashMap<usize, usize> = HashMap::new();
    let mut placed = Vec::with_capacity(hits.len());

    for hit in hits {
        let height = 1 + hit
            .span()
            .map(|pos| coverage.get(&pos).copied().unwrap_or(0))
            .max()
            .unwrap_or(0);

        for pos in hit.span() {
            coverage.insert(pos, height);
        }

        placed.push(PlacedHit {
            hit: *hit,
            row: height - 1,
        });
    }

    let assignment = RowAssignment::new(placed);
    debug!(
        hits = assignment.len(),
        rows = assignment.row_count(),
        "Assigned rows"
    );
    assignment
}
