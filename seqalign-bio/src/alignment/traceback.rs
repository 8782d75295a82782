/// Traceback through a filled DP matrix
use crate::alignment::grid::Cell;
use crate::alignment::matrix::{Direction, DpMatrix};
use crate::alignment::scoring::GAP;
use seqalign_core::{SeqAlignError, SeqAlignResult};
use serde::Serialize;

/// Where a traceback stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    /// Walk to the origin, forcing boundary moves
    Global,
    /// Walk until a zero-scored cell
    Local,
}

/// Aligned rows produced by a traceback, with the cells it ran between
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedAlignment {
    pub aligned_a: Vec<u8>,
    pub aligned_b: Vec<u8>,
    /// Cell where the walk stopped
    pub start: Cell,
    /// Cell where the walk began
    pub end: Cell,
}

pub struct Traceback<'m> {
    matrix: &'m DpMatrix,
    mode: TraceMode,
}

impl<'m> Traceback<'m> {
    pub fn new(matrix: &'m DpMatrix, mode: TraceMode) -> Self {
        Self { matrix, mode }
    }

    /// Traceback with the mode that matches how the matrix was filled
    pub fn for_matrix(matrix: &'m DpMatrix) -> Self {
        let mode = if matrix.recurrence().is_local() {
            TraceMode::Local
        } else {
            TraceMode::Global
        };
        Self::new(matrix, mode)
    }

    pub fn mode(&self) -> TraceMode {
        self.mode
    }

    /// Walk from the matrix's end cell
    pub fn run(&self, a: &[u8], b: &[u8]) -> SeqAlignResult<TracedAlignment> {
        self.run_from(a, b, self.matrix.end())
    }

    pub fn run_from(&self, a: &[u8], b: &[u8], from: Cell) -> SeqAlignResult<TracedAlignment> {
        let scores = self.matrix.scores();
        let directions = self.matrix.directions();

        if scores.rows() != a.len() + 1 || scores.cols() != b.len() + 1 {
            return Err(SeqAlignError::Internal(format!(
                "matrix is {}x{} but sequences have lengths {} and {}",
                scores.rows(),
                scores.cols(),
                a.len(),
                b.len()
            )));
        }
        if !scores.contains(from) {
            return Err(SeqAlignError::Internal(format!(
                "traceback start {:?} is outside the matrix",
                from
            )));
        }

        let mut aligned_a = Vec::with_capacity(a.len() + b.len());
        let mut aligned_b = Vec::with_capacity(a.len() + b.len());
        let mut cell = from;

        loop {
            let done = match self.mode {
                TraceMode::Global => cell.is_origin(),
                TraceMode::Local => scores[cell] == 0,
            };
            if done {
                break;
            }

            let direction = match self.mode {
                TraceMode::Global if cell.row == 0 => Direction::Left,
                TraceMode::Global if cell.col == 0 => Direction::Up,
                _ => directions[cell],
            };

            match direction {
                Direction::Diagonal if cell.row > 0 && cell.col > 0 => {
                    aligned_a.push(a[cell.row - 1]);
                    aligned_b.push(b[cell.col - 1]);
                    cell = Cell::new(cell.row - 1, cell.col - 1);
                }
                Direction::Up if cell.row > 0 => {
                    aligned_a.push(a[cell.row - 1]);
                    aligned_b.push(GAP);
                    cell.row -= 1;
                }
                Direction::Left if cell.col > 0 => {
                    aligned_a.push(GAP);
                    aligned_b.push(b[cell.col - 1]);
                    cell.col -= 1;
                }
                other => {
                    return Err(SeqAlignError::Internal(format!(
                        "cannot move {:?} from {:?} (score {})",
                        other, cell, scores[cell]
                    )));
                }
            }
        }

        aligned_a.reverse();
        aligned_b.reverse();

        Ok(TracedAlignment {
            aligned_a,
            aligned_b,
            start: cell,
            end: from,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::matrix::{MatrixBuilder, Objective};
    use crate::alignment::scoring::ScoringSystem;
    use pretty_assertions::assert_eq;

    fn global(a: &str, b: &str) -> TracedAlignment {
        let matrix = MatrixBuilder::global(Objective::Maximize).fill(
            &ScoringSystem::similarity(),
            a.as_bytes(),
            b.as_bytes(),
        )
        .unwrap();
        Traceback::for_matrix(&matrix)
            .run(a.as_bytes(), b.as_bytes())
            .unwrap()
    }

    #[test]
    fn test_global_traceback() {
        let traced = global("AC", "AG");
        assert_eq!(traced.aligned_a, b"AC");
        assert_eq!(traced.aligned_b, b"AG");
        assert_eq!(traced.start, Cell::origin());
        assert_eq!(traced.end, Cell::new(2, 2));
    }

    #[test]
    fn test_global_boundary_override() {
        // Only gaps are possible against an empty side
        let traced = global("", "ACG");
        assert_eq!(traced.aligned_a, b"---");
        assert_eq!(traced.aligned_b, b"ACG");

        let traced = global("AC", "");
        assert_eq!(traced.aligned_a, b"AC");
        assert_eq!(traced.aligned_b, b"--");
    }

    #[test]
    fn test_local_traceback_stops_at_zero() {
        let a = b"AC";
        let b = b"AG";
        let matrix = MatrixBuilder::local().fill(&ScoringSystem::similarity(), a, b).unwrap();
        let traceback = Traceback::for_matrix(&matrix);
        assert_eq!(traceback.mode(), TraceMode::Local);

        let traced = traceback.run(a, b).unwrap();
        assert_eq!(traced.aligned_a, b"A");
        assert_eq!(traced.aligned_b, b"A");
        assert_eq!(traced.start, Cell::origin());
        assert_eq!(traced.end, Cell::new(1, 1));
    }

    #[test]
    fn test_mismatched_sequences_rejected() {
        let matrix = MatrixBuilder::global(Objective::Maximize).fill(
            &ScoringSystem::similarity(),
            b"AC",
            b"AG",
        )
        .unwrap();
        let traceback = Traceback::for_matrix(&matrix);

        assert!(matches!(
            traceback.run(b"ACG", b"AG"),
            Err(SeqAlignError::Internal(_))
        ));
        assert!(matches!(
            traceback.run_from(b"AC", b"AG", Cell::new(3, 0)),
            Err(SeqAlignError::Internal(_))
        ));
    }

    #[test]
    fn test_stop_direction_is_internal_error() {
        // Interior cells of an all-mismatch local matrix are Stop; a global
        // walk has no stopping rule for them
        let matrix = MatrixBuilder::local()
            .fill(&ScoringSystem::similarity(), b"AA", b"CC")
            .unwrap();
        let traceback = Traceback::new(&matrix, TraceMode::Global);

        match traceback.run_from(b"AA", b"CC", Cell::new(2, 2)) {
            Err(SeqAlignError::Internal(msg)) => assert!(msg.contains("Stop")),
            other => panic!("Expected Internal error, got {:?}", other),
        }
    }
}
