use crate::alignment::GAP;
use seqalign_core::{SeqAlignError, SeqAlignResult};
use std::fmt;
use std::str::FromStr;

/// An immutable run of single-byte symbols.
///
/// Symbols must be printable ASCII, space included, so plain text can be
/// compared. The gap symbol `-` is reserved for aligned output and rejected
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    pub id: String,
    symbols: Vec<u8>,
}

impl Sequence {
    pub fn new(id: impl Into<String>, symbols: impl Into<Vec<u8>>) -> SeqAlignResult<Self> {
        let id = id.into();
        let symbols = symbols.into();

        if let Some(position) = symbols.iter().position(|&b| !is_valid_symbol(b)) {
            let symbol = String::from_utf8_lossy(&symbols[position..])
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(SeqAlignError::InvalidSymbol {
                symbol,
                position,
                context: id,
            });
        }

        Ok(Self { id, symbols })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

fn is_valid_symbol(b: u8) -> bool {
    (b.is_ascii_graphic() || b == b' ') && b != GAP
}

impl FromStr for Sequence {
    type Err = SeqAlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sequence::new("sequence", s.as_bytes())
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Validated as ASCII on construction
        for &b in &self.symbols {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
