pub mod engine;
pub mod grid;
pub mod matrix;
pub mod scoring;
pub mod table;
pub mod traceback;

pub use engine::{AlignmentEngine, AlignmentResult, AlignmentStats, AlignmentSummary};
pub use grid::{Cell, Grid};
pub use matrix::{Direction, DpMatrix, MatrixBuilder, Objective, Recurrence};
pub use scoring::{ScoringMatrix, ScoringSystem, GAP};
pub use table::ScoreTable;
pub use traceback::{TraceMode, TracedAlignment, Traceback};
