use serde::{Deserialize, Serialize};

/// A motif pattern made of IUPAC ambiguity codes.
///
/// The pattern is normalized to ASCII uppercase on construction; its text is its
/// identity. Non-ASCII characters are kept as-is so expansion can reject them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Motif(String);

impl Motif {
    pub fn new(pattern: impl AsRef<str>) -> Self {
        Self(pattern.as_ref().trim().to_ascii_uppercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of sequence positions the motif spans
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Motif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Nucleotide alphabet a sequence is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// Thymine-containing sequence
    Dna,
    /// Uracil-containing sequence
    Rna,
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dna => write!(f, "DNA"),
            Self::Rna => write!(f, "RNA"),
        }
    }
}

/// All literal strings a motif can match in one alphabet.
///
/// Variants keep the order in which expansion produced them, but the set
/// semantics are what matter: there are no duplicates, and every variant has
/// the motif's length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSet {
    variants: Vec<String>,
}

impl VariantSet {
    #[must_use]
    pub fn new(variants: Vec<String>) -> Self {
        Self { variants }
    }

    /// Derive the RNA set by replacing every `T` with `U`
    #[must_use]
    pub fn to_rna(&self) -> Self {
        Self {
            variants: self.variants.iter().map(|v| v.replace('T', "U")).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    #[must_use]
    pub fn contains(&self, literal: &str) -> bool {
        self.variants.iter().any(|v| v == literal)
    }
}

/// A motif together with its DNA and RNA variant sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedMotif {
    pub motif: Motif,
    pub dna: VariantSet,
    pub rna: VariantSet,
}

impl ExpandedMotif {
    /// The variant set to search with for a sequence in `alphabet`
    #[must_use]
    pub fn variants(&self, alphabet: Alphabet) -> &VariantSet {
        match alphabet {
            Alphabet::Dna => &self.dna,
            Alphabet::Rna => &self.rna,
        }
    }
}

/// The expanded motif list, in declaration order.
///
/// Order matters: it fixes the row-assignment processing order, the legend
/// order and each motif's palette index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifSet {
    motifs: Vec<ExpandedMotif>,
}

impl MotifSet {
    #[must_use]
    pub fn new(motifs: Vec<ExpandedMotif>) -> Self {
        Self { motifs }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpandedMotif> {
        self.motifs.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ExpandedMotif> {
        self.motifs.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }
}

impl<'a> IntoIterator for &'a MotifSet {
    type Item = &'a ExpandedMotif;
    type IntoIter = std::slice::Iter<'a, ExpandedMotif>;

    fn into_iter(self) -> Self::IntoIter {
        self.motifs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motif_is_normalized() {
        let motif = Motif::new("  ygcy\n");
        assert_eq!(motif.as_str(), "YGCY");
        assert_eq!(motif.len(), 4);
        assert_eq!(motif, Motif::new("YGCY"));
    }

    #[test]
    fn test_to_rna_only_touches_thymine() {
        let dna = VariantSet::new(vec!["TTAG".to_string(), "CAGC".to_string()]);
        let rna = dna.to_rna();
        assert!(rna.contains("UUAG"));
        assert!(rna.contains("CAGC"));
        assert_eq!(rna.len(), 2);
    }
}
