use serde::{Deserialize, Serialize};

use crate::core::motif::Alphabet;

/// A named sequence record split into upstream, feature and downstream regions.
///
/// The feature region (typically an exon) is the first run of uppercase
/// letters; the flanks are whatever surrounds it. Concatenation order is
/// always upstream, feature, downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneRecord {
    /// Record title (FASTA name plus description)
    pub name: String,

    /// Region before the feature
    pub upstream: String,

    /// The feature region itself
    pub feature: String,

    /// Everything after the feature
    pub downstream: String,
}

impl GeneRecord {
    pub fn new(
        name: impl Into<String>,
        upstream: impl Into<String>,
        feature: impl Into<String>,
        downstream: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            upstream: upstream.into(),
            feature: feature.into(),
            downstream: downstream.into(),
        }
    }

    /// Split a raw sequence at its first run of uppercase letters.
    ///
    /// Returns `None` when the sequence has no uppercase letters at all.
    ///
    /// ```
    /// use motif_mark::core::sequence::GeneRecord;
    ///
    /// let record = GeneRecord::from_sequence("gene1", "aaaTGCTaaa").unwrap();
    /// assert_eq!(record.upstream, "aaa");
    /// assert_eq!(record.feature, "TGCT");
    /// assert_eq!(record.downstream, "aaa");
    /// ```
    pub fn from_sequence(name: impl Into<String>, sequence: &str) -> Option<Self> {
        let start = sequence.find(|c: char| c.is_ascii_uppercase())?;
        let end = sequence[start..]
            .find(|c: char| !c.is_ascii_uppercase())
            .map_or(sequence.len(), |offset| start + offset);

        Some(Self::new(
            name,
            &sequence[..start],
            &sequence[start..end],
            &sequence[end..],
        ))
    }

    /// Total length in nucleotides
    #[must_use]
    pub fn len(&self) -> usize {
        self.upstream.len() + self.feature.len() + self.downstream.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The three regions joined in order, with their original case
    #[must_use]
    pub fn concatenated(&self) -> String {
        let mut joined = String::with_capacity(self.len());
        joined.push_str(&self.upstream);
        joined.push_str(&self.feature);
        joined.push_str(&self.downstream);
        joined
    }

    /// The concatenated sequence uppercased for case-insensitive search
    #[must_use]
    pub fn search_text(&self) -> String {
        self.concatenated().to_ascii_uppercase()
    }

    /// RNA if any region contains uracil, DNA otherwise
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        let has_uracil = [&self.upstream, &self.feature, &self.downstream]
            .iter()
            .any(|region| region.contains(['U', 'u']));

        if has_uracil {
            Alphabet::Rna
        } else {
            Alphabet::Dna
        }
    }

    /// Whether the downstream region carries further uppercase runs
    #[must_use]
    pub fn has_additional_features(&self) -> bool {
        self.downstream.chars().any(|c| c.is_ascii_uppercase())
    }
}
