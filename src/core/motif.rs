use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotifError {
    #[error("motif must contain at least one symbol")]
    Empty,
}

/// The repeated unit of a tandem repeat locus.
///
/// Any printable symbol is accepted; in practice motifs are nucleotide
/// letters (A/C/G/T) with occasional ambiguity codes. Symbols are compared
/// by equality only, so no alphabet validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Motif {
    seq: String,
    symbols: Vec<char>,
}

impl Motif {
    /// Create a motif from its sequence string.
    ///
    /// # Errors
    ///
    /// Returns [`MotifError::Empty`] for a zero-length sequence.
    pub fn new(seq: impl Into<String>) -> Result<Self, MotifError> {
        let seq = seq.into();
        if seq.is_empty() {
            return Err(MotifError::Empty);
        }
        let symbols = seq.chars().collect();
        Ok(Self { seq, symbols })
    }

    /// The raw sequence string, used as the cache key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.seq
    }

    /// Number of symbols in the motif.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction rejects empty sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Derive a masked copy with the given positions replaced by the
    /// wildcard sentinel. The motif itself is never mutated.
    ///
    /// # Panics
    ///
    /// Panics if a position is out of range.
    #[must_use]
    pub fn mask(&self, positions: &[usize]) -> MaskedMotif {
        let mut symbols: Vec<MaskedSymbol> =
            self.symbols.iter().map(|&c| MaskedSymbol::Literal(c)).collect();
        for &pos in positions {
            symbols[pos] = MaskedSymbol::Wildcard;
        }
        MaskedMotif { symbols }
    }
}

impl std::fmt::Display for Motif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.seq)
    }
}

/// A single symbol in a masked motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskedSymbol {
    /// An ordinary sequence character, compared by equality.
    Literal(char),
    /// Masked position: matches any symbol, including another wildcard.
    Wildcard,
}

impl MaskedSymbol {
    /// Wildcard-aware equality used by the similarity scorer.
    #[must_use]
    pub fn matches(self, other: Self) -> bool {
        match (self, other) {
            (Self::Wildcard, _) | (_, Self::Wildcard) => true,
            (Self::Literal(a), Self::Literal(b)) => a == b,
        }
    }
}

/// A motif with a subset of its positions wildcarded, derived via
/// [`Motif::mask`]. Same length as its source motif.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedMotif {
    symbols: Vec<MaskedSymbol>,
}

impl MaskedMotif {
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn symbols(&self) -> &[MaskedSymbol] {
        &self.symbols
    }

    /// The motif concatenated with itself (length 2L). Length-L slices at
    /// offsets `1..L` are the non-identity cyclic rotations.
    #[must_use]
    pub fn doubled_window(&self) -> Vec<MaskedSymbol> {
        let mut window = self.symbols.clone();
        window.extend_from_slice(&self.symbols);
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_motif_rejected() {
        assert!(matches!(Motif::new(""), Err(MotifError::Empty)));
    }

    #[test]
    fn test_mask_is_a_fresh_derived_value() {
        let motif = Motif::new("ACGT").unwrap();
        let masked = motif.mask(&[1, 3]);

        assert_eq!(motif.as_str(), "ACGT");
        assert_eq!(
            masked.symbols(),
            &[
                MaskedSymbol::Literal('A'),
                MaskedSymbol::Wildcard,
                MaskedSymbol::Literal('G'),
                MaskedSymbol::Wildcard,
            ]
        );
    }

    #[test]
    fn test_literal_m_is_an_ordinary_symbol() {
        let motif = Motif::new("AMG").unwrap();
        let masked = motif.mask(&[]);

        // An input 'M' does not behave as a wildcard.
        assert_eq!(masked.symbols()[1], MaskedSymbol::Literal('M'));
        assert!(!MaskedSymbol::Literal('M').matches(MaskedSymbol::Literal('A')));
        assert!(MaskedSymbol::Wildcard.matches(MaskedSymbol::Literal('A')));
        assert!(MaskedSymbol::Wildcard.matches(MaskedSymbol::Wildcard));
    }

    #[test]
    fn test_doubled_window() {
        let motif = Motif::new("AT").unwrap();
        let window = motif.mask(&[0]).doubled_window();

        assert_eq!(window.len(), 4);
        assert_eq!(window[0], MaskedSymbol::Wildcard);
        assert_eq!(window[2], MaskedSymbol::Wildcard);
        assert_eq!(window[1], MaskedSymbol::Literal('T'));
    }
}
