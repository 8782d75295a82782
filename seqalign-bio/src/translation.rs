/// RNA/DNA to protein translation with the standard genetic code
use seqalign_core::{SeqAlignError, SeqAlignResult};
use serde::Serialize;
use tracing::debug;

/// Amino acids indexed by codon, with U=0, C=1, A=2, G=3 and the first base
/// most significant. `*` marks a stop codon.
const CODON_TABLE: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

const START_CODON: &[u8; 3] = b"AUG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub protein: String,
    /// Offset of the start codon in the input
    pub start: usize,
    /// Offset of the stop codon in the input
    pub stop: usize,
}

/// Translate from the first `AUG` up to the first in-frame stop codon.
///
/// Input is case-insensitive and `T` reads as `U`.
pub fn translate(sequence: &str) -> SeqAlignResult<Translation> {
    let rna = normalize(sequence)?;
    if rna.is_empty() {
        return Err(SeqAlignError::InvalidInput("empty sequence".to_string()));
    }

    let start = rna
        .windows(3)
        .position(|codon| codon == START_CODON)
        .ok_or_else(|| SeqAlignError::InvalidInput("no start codon".to_string()))?;

    let mut protein = String::new();
    for (i, codon) in rna[start..].chunks_exact(3).enumerate() {
        match amino_acid(codon) {
            b'*' => {
                let stop = start + 3 * i;
                debug!(start, stop, length = protein.len(), "translated");
                return Ok(Translation {
                    protein,
                    start,
                    stop,
                });
            }
            aa => protein.push(aa as char),
        }
    }

    Err(SeqAlignError::InvalidInput(
        "no in-frame stop codon".to_string(),
    ))
}

fn normalize(sequence: &str) -> SeqAlignResult<Vec<u8>> {
    sequence
        .chars()
        .enumerate()
        .map(|(position, c)| match c.to_ascii_uppercase() {
            'T' | 'U' => Ok(b'U'),
            base @ ('A' | 'C' | 'G') => Ok(base as u8),
            _ => Err(SeqAlignError::InvalidSymbol {
                symbol: c,
                position,
                context: "RNA sequence".to_string(),
            }),
        })
        .collect()
}

fn base_index(base: u8) -> usize {
    match base {
        b'U' => 0,
        b'C' => 1,
        b'A' => 2,
        _ => 3,
    }
}

/// Codons must already be normalized to ACGU
fn amino_acid(codon: &[u8]) -> u8 {
    let index = 16 * base_index(codon[0]) + 4 * base_index(codon[1]) + base_index(codon[2]);
    CODON_TABLE[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_translate_simple() {
        let translation = translate("AUGGCCUAA").unwrap();
        assert_eq!(translation.protein, "MA");
        assert_eq!(translation.start, 0);
        assert_eq!(translation.stop, 6);
    }

    #[test]
    fn test_leading_bases_and_dna_input() {
        let translation = translate("ccatgtttggatgA").unwrap();
        assert_eq!(translation.protein, "MFG");
        assert_eq!(translation.start, 2);
        assert_eq!(translation.stop, 11);
    }

    #[test]
    fn test_out_of_frame_stop_ignored() {
        // UAA at offset 4 is out of frame; UGA at offset 9 ends the protein
        let translation = translate("AUGCUAAGGUGA").unwrap();
        assert_eq!(translation.protein, "MLR");
        assert_eq!(translation.stop, 9);
    }

    #[rstest]
    #[case("UUU", 'F')]
    #[case("AUG", 'M')]
    #[case("UGG", 'W')]
    #[case("GGG", 'G')]
    #[case("CAU", 'H')]
    #[case("AGA", 'R')]
    #[case("UAG", '*')]
    #[case("UGA", '*')]
    fn test_codon_table(#[case] codon: &str, #[case] expected: char) {
        assert_eq!(amino_acid(codon.as_bytes()) as char, expected);
    }

    #[rstest]
    #[case("", "empty sequence")]
    #[case("GGCCUAA", "no start codon")]
    #[case("AUGGCC", "no in-frame stop codon")]
    #[case("AUGGCCUA", "no in-frame stop codon")]
    fn test_invalid_input(#[case] input: &str, #[case] expected: &str) {
        match translate(input) {
            Err(SeqAlignError::InvalidInput(msg)) => assert_eq!(msg, expected),
            other => panic!("Expected InvalidInput for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_invalid_symbol_position() {
        assert!(matches!(
            translate("AUGXUAA"),
            Err(SeqAlignError::InvalidSymbol { symbol: 'X', position: 3, .. })
        ));
    }
}
