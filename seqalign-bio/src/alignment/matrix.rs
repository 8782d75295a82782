/// Dynamic-programming matrix fill for global and local alignment
use crate::alignment::grid::{Cell, Grid};
use crate::alignment::scoring::{ScoringMatrix, GAP};
use seqalign_core::{SeqAlignError, SeqAlignResult};
use serde::Serialize;

/// The move that produced a cell's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Diagonal,
    Up,
    Left,
    Stop,
}

impl Direction {
    /// Display glyph, for matrix printouts only
    pub fn arrow(self) -> char {
        match self {
            Direction::Diagonal => '↖',
            Direction::Up => '↑',
            Direction::Left => '←',
            Direction::Stop => '•',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    #[default]
    Maximize,
    Minimize,
}

impl Objective {
    /// Whether `candidate` strictly beats `incumbent`. Ties keep the incumbent.
    pub fn prefers(self, candidate: i32, incumbent: i32) -> bool {
        match self {
            Objective::Maximize => candidate > incumbent,
            Objective::Minimize => candidate < incumbent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    /// Needleman-Wunsch with a linear gap score
    Global,
    /// Needleman-Wunsch paying the gap cost once per gap run
    GlobalGapOpen,
    /// Smith-Waterman with a zero floor
    Local,
}

impl Recurrence {
    pub fn is_local(self) -> bool {
        matches!(self, Recurrence::Local)
    }
}

/// A filled score matrix H, direction matrix T and, in gap-open mode, the
/// gap-state matrix G
#[derive(Debug, Clone, PartialEq)]
pub struct DpMatrix {
    recurrence: Recurrence,
    objective: Objective,
    scores: Grid<i32>,
    directions: Grid<Direction>,
    gap_state: Option<Grid<bool>>,
    end: Cell,
}

impl DpMatrix {
    pub fn recurrence(&self) -> Recurrence {
        self.recurrence
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn scores(&self) -> &Grid<i32> {
        &self.scores
    }

    pub fn directions(&self) -> &Grid<Direction> {
        &self.directions
    }

    pub fn gap_state(&self) -> Option<&Grid<bool>> {
        self.gap_state.as_ref()
    }

    /// Cell holding the reported score; traceback starts here
    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn score(&self) -> i32 {
        self.scores[self.end]
    }

    pub fn rows(&self) -> usize {
        self.scores.rows()
    }

    pub fn cols(&self) -> usize {
        self.scores.cols()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixBuilder {
    recurrence: Recurrence,
    objective: Objective,
}

impl MatrixBuilder {
    pub fn new(recurrence: Recurrence, objective: Objective) -> SeqAlignResult<Self> {
        if recurrence.is_local() && objective == Objective::Minimize {
            return Err(SeqAlignError::Configuration(
                "local alignment only supports maximization".to_string(),
            ));
        }
        Ok(Self {
            recurrence,
            objective,
        })
    }

    pub fn global(objective: Objective) -> Self {
        Self {
            recurrence: Recurrence::Global,
            objective,
        }
    }

    pub fn global_gap_open(objective: Objective) -> Self {
        Self {
            recurrence: Recurrence::GlobalGapOpen,
            objective,
        }
    }

    pub fn local() -> Self {
        Self {
            recurrence: Recurrence::Local,
            objective: Objective::Maximize,
        }
    }

    pub fn recurrence(&self) -> Recurrence {
        self.recurrence
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Fill an (|a|+1) x (|b|+1) matrix; rows follow `a`, columns follow `b`.
    ///
    /// Fails with a `Configuration` error if a cell score leaves the `i32`
    /// range.
    pub fn fill<S: ScoringMatrix + ?Sized>(
        &self,
        scoring: &S,
        a: &[u8],
        b: &[u8],
    ) -> SeqAlignResult<DpMatrix> {
        let rows = a.len() + 1;
        let cols = b.len() + 1;

        let mut scores = Grid::new(rows, cols, 0i32);
        let mut directions = Grid::new(rows, cols, Direction::Stop);
        let mut gap_state = match self.recurrence {
            Recurrence::GlobalGapOpen => Some(Grid::new(rows, cols, false)),
            _ => None,
        };

        if !self.recurrence.is_local() {
            Self::initialize_boundary(scoring, &mut scores, &mut directions, a, b)?;
        }

        let gap_open = scoring.gap_open();
        for i in 1..rows {
            for j in 1..cols {
                let sym_a = a[i - 1];
                let sym_b = b[j - 1];

                let add = |score: i32, delta: i32| checked_add(score, delta, i, j);

                let diag = add(scores[(i - 1, j - 1)], scoring.score(sym_a, sym_b))?;
                let mut up = add(scores[(i - 1, j)], scoring.score(GAP, sym_b))?;
                let mut left = add(scores[(i, j - 1)], scoring.score(sym_a, GAP))?;

                if let Some(gaps) = &gap_state {
                    // A gap run is paid for when it opens; continuing it is free
                    up = if gaps[(i - 1, j)] {
                        scores[(i - 1, j)]
                    } else {
                        add(up, gap_open)?
                    };
                    left = if gaps[(i, j - 1)] {
                        scores[(i, j - 1)]
                    } else {
                        add(left, gap_open)?
                    };
                }

                let (mut best, mut direction) = (diag, Direction::Diagonal);
                if self.objective.prefers(up, best) {
                    best = up;
                    direction = Direction::Up;
                }
                if self.objective.prefers(left, best) {
                    best = left;
                    direction = Direction::Left;
                }
                if self.recurrence.is_local() && best < 0 {
                    best = 0;
                    direction = Direction::Stop;
                }

                scores[(i, j)] = best;
                directions[(i, j)] = direction;
                if let Some(gaps) = gap_state.as_mut() {
                    gaps[(i, j)] = matches!(direction, Direction::Up | Direction::Left);
                }
            }
        }

        let end = if self.recurrence.is_local() {
            Self::first_maximum(&scores)
        } else {
            Cell::new(rows - 1, cols - 1)
        };

        Ok(DpMatrix {
            recurrence: self.recurrence,
            objective: self.objective,
            scores,
            directions,
            gap_state,
            end,
        })
    }

    fn initialize_boundary<S: ScoringMatrix + ?Sized>(
        scoring: &S,
        scores: &mut Grid<i32>,
        directions: &mut Grid<Direction>,
        a: &[u8],
        b: &[u8],
    ) -> SeqAlignResult<()> {
        for j in 1..=b.len() {
            scores[(0, j)] = checked_add(scores[(0, j - 1)], scoring.score(GAP, b[j - 1]), 0, j)?;
            directions[(0, j)] = Direction::Left;
        }
        for i in 1..=a.len() {
            scores[(i, 0)] = checked_add(scores[(i - 1, 0)], scoring.score(a[i - 1], GAP), i, 0)?;
            directions[(i, 0)] = Direction::Up;
        }
        Ok(())
    }

    fn first_maximum(scores: &Grid<i32>) -> Cell {
        let mut best = (Cell::origin(), scores[Cell::origin()]);
        for (cell, &value) in scores.iter_cells() {
            if value > best.1 {
                best = (cell, value);
            }
        }
        best.0
    }
}

fn checked_add(score: i32, delta: i32, row: usize, col: usize) -> SeqAlignResult<i32> {
    score.checked_add(delta).ok_or_else(|| {
        SeqAlignError::Configuration(format!(
            "score overflow at cell ({}, {}): scoring values are too large",
            row, col
        ))
    })
}
