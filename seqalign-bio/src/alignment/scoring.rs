/// Scoring systems for sequence alignment
use crate::alignment::table::ScoreTable;
use seqalign_core::{SeqAlignError, SeqAlignResult};
use std::sync::Arc;

/// Gap symbol used in aligned output and in scoring lookups
pub const GAP: u8 = b'-';

/// Pairwise symbol scores consumed by the matrix fill
pub trait ScoringMatrix {
    /// Score for aligning `a` against `b`; either side may be [`GAP`]
    fn score(&self, a: u8, b: u8) -> i32;

    /// Surcharge paid once when a gap run opens
    fn gap_open(&self) -> i32;
}

/// Match/mismatch/gap scoring with an optional pairwise table.
///
/// Table lookups take precedence: the symbol from sequence A selects the
/// column and the symbol from sequence B selects the row. A pair missing from
/// the table falls back to the match/mismatch/gap rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringSystem {
    match_score: i32,
    mismatch_score: i32,
    gap_score: i32,
    gap_open: Option<i32>,
    table: Option<Arc<ScoreTable>>,
}

impl ScoringSystem {
    pub fn new(match_score: i32, mismatch_score: i32, gap_score: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_score,
            gap_open: None,
            table: None,
        }
    }

    /// Similarity preset: match +1, mismatch -1, gap -1
    pub fn similarity() -> Self {
        Self::new(1, -1, -1)
    }

    /// Edit cost preset: match 0, mismatch 1, gap 1 (minimized)
    pub fn edit_cost() -> Self {
        Self::new(0, 1, 1)
    }

    pub fn with_match(mut self, match_score: i32) -> Self {
        self.match_score = match_score;
        self
    }

    pub fn with_mismatch(mut self, mismatch_score: i32) -> Self {
        self.mismatch_score = mismatch_score;
        self
    }

    pub fn with_gap(mut self, gap_score: i32) -> Self {
        self.gap_score = gap_score;
        self
    }

    pub fn with_gap_open(mut self, gap_open: i32) -> Self {
        self.gap_open = Some(gap_open);
        self
    }

    pub fn with_table(self, table: ScoreTable) -> Self {
        self.with_shared_table(Arc::new(table))
    }

    pub fn with_shared_table(mut self, table: Arc<ScoreTable>) -> Self {
        self.table = Some(table);
        self
    }

    pub fn match_score(&self) -> i32 {
        self.match_score
    }

    pub fn mismatch_score(&self) -> i32 {
        self.mismatch_score
    }

    pub fn gap_score(&self) -> i32 {
        self.gap_score
    }

    /// The configured gap-open surcharge, if any
    pub fn gap_open_penalty(&self) -> Option<i32> {
        self.gap_open
    }

    pub fn table(&self) -> Option<&ScoreTable> {
        self.table.as_deref()
    }

    /// Match/mismatch/gap rule, ignoring any table
    pub fn default_score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else if a == GAP || b == GAP {
            self.gap_score
        } else {
            self.mismatch_score
        }
    }

    pub fn score(&self, a: u8, b: u8) -> i32 {
        self.table
            .as_ref()
            .and_then(|table| table.get(b, a))
            .unwrap_or_else(|| self.default_score(a, b))
    }

    /// Checked variant of [`score`](Self::score) for callers holding text.
    ///
    /// Each argument must be exactly one ASCII symbol.
    pub fn score_symbols(&self, a: &str, b: &str) -> SeqAlignResult<i32> {
        Ok(self.score(single_symbol(a)?, single_symbol(b)?))
    }
}

impl Default for ScoringSystem {
    fn default() -> Self {
        Self::similarity()
    }
}

impl ScoringMatrix for ScoringSystem {
    fn score(&self, a: u8, b: u8) -> i32 {
        ScoringSystem::score(self, a, b)
    }

    fn gap_open(&self) -> i32 {
        self.gap_open.unwrap_or(0)
    }
}

pub(crate) fn single_symbol(s: &str) -> SeqAlignResult<u8> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(SeqAlignError::NotASymbol(s.to_string())),
    }
}
