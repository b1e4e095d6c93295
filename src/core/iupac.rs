//! The fixed IUPAC ambiguity table used to expand motifs.

/// Every symbol accepted in a motif, in table order.
pub const AMBIGUITY_CODES: [char; 16] = [
    'A', 'C', 'G', 'T', 'U', 'R', 'Y', 'S', 'W', 'K', 'M', 'B', 'D', 'H', 'V', 'N',
];

/// Concrete DNA bases an ambiguity code stands for.
///
/// The per-code ordering is fixed so that expansion order is reproducible.
/// `U` resolves to `T`; RNA variants are derived from the DNA ones afterwards.
/// Lookup is case-sensitive: callers uppercase first.
///
/// ```
/// use motif_mark::core::iupac::bases_for;
///
/// assert_eq!(bases_for('Y'), Some(&['C', 'T'][..]));
/// assert_eq!(bases_for('U'), Some(&['T'][..]));
/// assert_eq!(bases_for('X'), None);
/// ```
#[must_use]
pub fn bases_for(code: char) -> Option<&'static [char]> {
    let bases: &'static [char] = match code {
        'A' => &['A'],
        'C' => &['C'],
        'G' => &['G'],
        'T' | 'U' => &['T'],
        'R' => &['A', 'G'],
        'Y' => &['C', 'T'],
        'S' => &['G', 'C'],
        'W' => &['A', 'T'],
        'K' => &['G', 'T'],
        'M' => &['A', 'C'],
        'B' => &['C', 'G', 'T'],
        'D' => &['A', 'G', 'T'],
        'H' => &['A', 'C', 'T'],
        'V' => &['A', 'C', 'G'],
        'N' => &['A', 'C', 'G', 'T'],
        _ => return None,
    };
    Some(bases)
}

/// Check whether a character is a recognized ambiguity code (uppercase only)
#[must_use]
pub fn is_ambiguity_code(code: char) -> bool {
    bases_for(code).is_some()
}
