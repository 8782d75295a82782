use crate::alignment::grid::Cell;
use crate::alignment::matrix::{DpMatrix, MatrixBuilder, Objective};
use crate::alignment::scoring::{ScoringSystem, GAP};
use crate::alignment::traceback::{TraceMode, TracedAlignment, Traceback};
use crate::sequence::Sequence;
use seqalign_core::SeqAlignResult;
use serde::Serialize;
use tracing::{debug, instrument};

/// A reconstructed alignment and the score it was reported with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentResult {
    pub mode: TraceMode,
    pub score: i32,
    /// Matrix cell the traceback stopped at
    pub start: Cell,
    /// Matrix cell holding the score
    pub end: Cell,
    pub aligned_a: String,
    pub aligned_b: String,
    /// '|' for match, '.' for mismatch, ' ' for gap
    pub midline: String,
    pub stats: AlignmentStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlignmentStats {
    pub length: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
    /// Fraction of columns that are matches (0.0 to 1.0)
    pub identity: f64,
}

impl AlignmentResult {
    fn from_traced(mode: TraceMode, score: i32, traced: TracedAlignment) -> Self {
        let mut midline = String::with_capacity(traced.aligned_a.len());
        let mut stats = AlignmentStats {
            length: traced.aligned_a.len(),
            matches: 0,
            mismatches: 0,
            gaps: 0,
            identity: 0.0,
        };

        for (&x, &y) in traced.aligned_a.iter().zip(&traced.aligned_b) {
            if x == GAP || y == GAP {
                stats.gaps += 1;
                midline.push(' ');
            } else if x == y {
                stats.matches += 1;
                midline.push('|');
            } else {
                stats.mismatches += 1;
                midline.push('.');
            }
        }
        if stats.length > 0 {
            stats.identity = stats.matches as f64 / stats.length as f64;
        }

        Self {
            mode,
            score,
            start: traced.start,
            end: traced.end,
            aligned_a: to_text(&traced.aligned_a),
            aligned_b: to_text(&traced.aligned_b),
            midline,
            stats,
        }
    }

    pub fn len(&self) -> usize {
        self.stats.length
    }

    pub fn is_empty(&self) -> bool {
        self.stats.length == 0
    }

    pub fn identity(&self) -> f64 {
        self.stats.identity
    }
}

/// Aligned rows only ever hold ASCII symbols and the gap
fn to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Every engine operation on one pair of sequences
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentSummary {
    pub similarity: i32,
    pub edit_distance: i32,
    pub global: AlignmentResult,
    pub local: AlignmentResult,
}

/// Runs the four alignment operations over a pair of scoring systems: one
/// maximized for similarity, one minimized for edit cost
#[derive(Debug, Clone)]
pub struct AlignmentEngine {
    similarity: ScoringSystem,
    cost: ScoringSystem,
}

impl Default for AlignmentEngine {
    fn default() -> Self {
        Self::new(ScoringSystem::similarity(), ScoringSystem::edit_cost())
    }
}

impl AlignmentEngine {
    pub fn new(similarity: ScoringSystem, cost: ScoringSystem) -> Self {
        Self { similarity, cost }
    }

    pub fn similarity_scoring(&self) -> &ScoringSystem {
        &self.similarity
    }

    pub fn cost_scoring(&self) -> &ScoringSystem {
        &self.cost
    }

    /// Global similarity score
    #[instrument(level = "debug", skip_all, fields(len_a = a.len(), len_b = b.len()))]
    pub fn similarity(&self, a: &Sequence, b: &Sequence) -> SeqAlignResult<i32> {
        let score = self.global_matrix(a, b)?.score();
        debug!(score, "similarity");
        Ok(score)
    }

    /// Minimum total edit cost
    #[instrument(level = "debug", skip_all, fields(len_a = a.len(), len_b = b.len()))]
    pub fn edit_distance(&self, a: &Sequence, b: &Sequence) -> SeqAlignResult<i32> {
        let cost = self.edit_matrix(a, b)?.score();
        debug!(cost, "edit distance");
        Ok(cost)
    }

    #[instrument(level = "debug", skip_all, fields(len_a = a.len(), len_b = b.len()))]
    pub fn global_alignment(&self, a: &Sequence, b: &Sequence) -> SeqAlignResult<AlignmentResult> {
        let matrix = self.global_matrix(a, b)?;
        self.trace(&matrix, a, b)
    }

    #[instrument(level = "debug", skip_all, fields(len_a = a.len(), len_b = b.len()))]
    pub fn local_alignment(&self, a: &Sequence, b: &Sequence) -> SeqAlignResult<AlignmentResult> {
        let matrix = self.local_matrix(a, b)?;
        self.trace(&matrix, a, b)
    }

    pub fn summary(&self, a: &Sequence, b: &Sequence) -> SeqAlignResult<AlignmentSummary> {
        Ok(AlignmentSummary {
            similarity: self.similarity(a, b)?,
            edit_distance: self.edit_distance(a, b)?,
            global: self.global_alignment(a, b)?,
            local: self.local_alignment(a, b)?,
        })
    }

    /// Filled global matrix. Uses the gap-open recurrence when the similarity
    /// scoring carries a gap-open penalty.
    pub fn global_matrix(&self, a: &Sequence, b: &Sequence) -> SeqAlignResult<DpMatrix> {
        let builder = match self.similarity.gap_open_penalty() {
            Some(_) => MatrixBuilder::global_gap_open(Objective::Maximize),
            None => MatrixBuilder::global(Objective::Maximize),
        };
        builder.fill(&self.similarity, a.as_bytes(), b.as_bytes())
    }

    pub fn local_matrix(&self, a: &Sequence, b: &Sequence) -> SeqAlignResult<DpMatrix> {
        MatrixBuilder::local().fill(&self.similarity, a.as_bytes(), b.as_bytes())
    }

    pub fn edit_matrix(&self, a: &Sequence, b: &Sequence) -> SeqAlignResult<DpMatrix> {
        MatrixBuilder::global(Objective::Minimize).fill(&self.cost, a.as_bytes(), b.as_bytes())
    }

    fn trace(&self, matrix: &DpMatrix, a: &Sequence, b: &Sequence) -> SeqAlignResult<AlignmentResult> {
        let traceback = Traceback::for_matrix(matrix);
        let traced = traceback.run(a.as_bytes(), b.as_bytes())?;
        debug!(
            score = matrix.score(),
            length = traced.aligned_a.len(),
            "{:?} traceback from {:?} to {:?}",
            traceback.mode(),
            traced.end,
            traced.start
        );
        Ok(AlignmentResult::from_traced(
            traceback.mode(),
            matrix.score(),
            traced,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use seqalign_core::SeqAlignError;

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    #[test]
    fn test_identical_sequences() {
        let engine = AlignmentEngine::default();
        let result = engine.global_alignment(&seq("AC"), &seq("AC")).unwrap();

        assert_eq!(result.score, 2);
        assert_eq!(result.aligned_a, "AC");
        assert_eq!(result.aligned_b, "AC");
        assert_eq!(result.midline, "||");
        assert_eq!(result.identity(), 1.0);
        assert_eq!(result.mode, TraceMode::Global);
    }

    #[test]
    fn test_stats_and_midline() {
        let engine = AlignmentEngine::default();
        let result = engine.global_alignment(&seq("GATTACA"), &seq("GCATGCA")).unwrap();

        assert_eq!(result.aligned_a.len(), result.aligned_b.len());
        assert_eq!(result.midline.len(), result.len());
        let stats = result.stats;
        assert_eq!(stats.matches + stats.mismatches + stats.gaps, stats.length);
        assert_eq!(
            stats.matches,
            result.midline.chars().filter(|&c| c == '|').count()
        );
    }

    #[test]
    fn test_edit_distance() {
        let engine = AlignmentEngine::default();
        assert_eq!(engine.edit_distance(&seq("kitten"), &seq("sitting")).unwrap(), 3);
        assert_eq!(engine.edit_distance(&seq("flaw"), &seq("lawn")).unwrap(), 2);
        assert_eq!(engine.edit_distance(&seq("abc"), &seq("abc")).unwrap(), 0);
    }

    #[test]
    fn test_gap_open_switches_recurrence() {
        let linear = AlignmentEngine::new(ScoringSystem::new(1, -5, -2), ScoringSystem::edit_cost());
        let gap_open = AlignmentEngine::new(
            ScoringSystem::new(1, -5, -2).with_gap_open(-3),
            ScoringSystem::edit_cost(),
        );
        let a = seq("AXXX");
        let b = seq("A");

        assert_eq!(linear.similarity(&a, &b).unwrap(), -5);
        assert_eq!(gap_open.similarity(&a, &b).unwrap(), -4);

        let result = gap_open.global_alignment(&a, &b).unwrap();
        assert_eq!(result.score, -4);
        assert_eq!(result.aligned_a, "AXXX");
        assert_eq!(result.aligned_b, "A---");
    }

    #[test]
    fn test_overflowing_scores_fail_every_operation() {
        let engine = AlignmentEngine::new(
            ScoringSystem::new(2_000_000_000, -1, -1),
            ScoringSystem::new(0, i32::MAX, i32::MAX),
        );
        let (a, b) = (seq("AA"), seq("AA"));

        assert!(matches!(engine.similarity(&a, &b), Err(SeqAlignError::Configuration(_))));
        assert!(matches!(engine.global_alignment(&a, &b), Err(SeqAlignError::Configuration(_))));
        assert!(matches!(engine.local_alignment(&a, &b), Err(SeqAlignError::Configuration(_))));
        assert!(matches!(engine.edit_distance(&a, &seq("")), Err(SeqAlignError::Configuration(_))));
        assert!(engine.summary(&a, &b).is_err());
    }

    #[test]
    fn test_empty_alignment() {
        let engine = AlignmentEngine::default();
        let empty = seq("");
        let result = engine.local_alignment(&empty, &seq("ACGT")).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.score, 0);
        assert_eq!(result.identity(), 0.0);
    }

    #[test]
    fn test_summary_serializes() {
        let engine = AlignmentEngine::default();
        let summary = engine.summary(&seq("AC"), &seq("AG")).unwrap();
        assert_eq!(summary.similarity, 0);
        assert_eq!(summary.edit_distance, 1);
        assert_eq!(summary.local.score, 1);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["global"]["aligned_b"], "AG");
        assert_eq!(json["local"]["mode"], "local");
        assert_eq!(json["local"]["end"]["row"], 1);
    }
}
