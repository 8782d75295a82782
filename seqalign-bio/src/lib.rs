//! Pairwise sequence alignment for seqalign

pub mod alignment;
pub mod sequence;
pub mod translation;

// Re-export commonly used types
pub use alignment::{
    AlignmentEngine, AlignmentResult, AlignmentSummary, ScoreTable, ScoringMatrix, ScoringSystem,
};
pub use sequence::Sequence;
pub use translation::{translate, Translation};
