//! Matrix value types.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 700;

/// Dimensions of a matrix, displayed as `RxC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A matrix as supplied by a caller.
///
/// Nothing about it is trusted: the declared `rows`/`cols` may disagree with
/// `data`, rows may be ragged and entries may be non-finite. Turn it into a
/// [`Matrix`] with [`validate_matrix`](crate::validate_matrix).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixInput {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl MatrixInput {
    pub fn new(rows: usize, cols: usize, data: Vec<Vec<f64>>) -> Self {
        Self { rows, cols, data }
    }

    /// Builds an input whose declared dimensions come from `data` itself.
    ///
    /// `cols` is taken from the first row; an empty `data` yields `0x0`.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Self {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        Self { rows, cols, data }
    }

    pub fn declared_shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }
}

impl From<Vec<Vec<f64>>> for MatrixInput {
    fn from(data: Vec<Vec<f64>>) -> Self {
        Self::from_rows(data)
    }
}

impl From<&Matrix> for MatrixInput {
    fn from(matrix: &Matrix) -> Self {
        Self::new(matrix.rows, matrix.cols, matrix.to_rows())
    }
}

/// A dense, rectangular, row-major matrix.
///
/// Values of this type have passed validation or were produced by an engine
/// routine; the engine never mutates a `Matrix` it was handed and always
/// allocates a new one for its output.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Wraps a row-major buffer. Callers inside the crate guarantee
    /// `data.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    pub(crate) fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_parts(rows, cols, vec![0.0; rows * cols])
    }

    /// The `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data
            .chunks(self.cols)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Largest absolute entry, `0.0` for an all-zero matrix.
    pub(crate) fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.cols + col]
    }
}
