use serde::Serialize;
use std::ops::{Index, IndexMut};

/// A position in a DP matrix. Row 0 and column 0 are the empty-prefix boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    pub fn is_origin(&self) -> bool {
        self.row == 0 && self.col == 0
    }
}

/// Fixed-size 2D arena stored row-major in one allocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        if self.contains(cell) {
            Some(&self.data[self.offset(cell)])
        } else {
            None
        }
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Cells with their values, in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (Cell, &T)> + '_ {
        let cols = self.cols.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, value)| (Cell::new(i / cols, i % cols), value))
    }

    fn offset(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "{:?} outside {}x{}", cell, self.rows, self.cols);
        cell.row * self.cols + cell.col
    }
}

impl<T> Index<Cell> for Grid<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &T {
        &self.data[self.offset(cell)]
    }
}

impl<T> IndexMut<Cell> for Grid<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        let offset = self.offset(cell);
        &mut self.data[offset]
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self[Cell::new(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self[Cell::new(row, col)]
    }
}
