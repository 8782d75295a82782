//! Core error types for seqalign

use thiserror::Error;

/// Main error type for seqalign operations
#[derive(Error, Debug)]
pub enum SeqAlignError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A sequence contains a symbol outside its alphabet.
    #[error("Invalid symbol {symbol:?} at position {position} in {context}")]
    InvalidSymbol {
        symbol: char,
        position: usize,
        context: String,
    },

    /// A scoring lookup received something other than exactly one symbol.
    #[error("Expected exactly one symbol, got {0:?}")]
    NotASymbol(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SeqAlignError {
    /// Whether the error stems from caller-supplied sequences or symbols
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidSymbol { .. } | Self::NotASymbol(_) | Self::InvalidInput(_)
        )
    }
}

/// Result type alias for seqalign operations
pub type SeqAlignResult<T> = Result<T, SeqAlignError>;

impl From<serde_json::Error> for SeqAlignError {
    fn from(err: serde_json::Error) -> Self {
        SeqAlignError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for SeqAlignError {
    fn from(err: anyhow::Error) -> Self {
        SeqAlignError::Internal(err.to_string())
    }
}
