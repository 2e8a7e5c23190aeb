//! LU decomposition with partial pivoting.
//!
//! Gaussian elimination factors a square `A` as `P·A = L·U`, where `P` is a
//! row permutation, `L` is unit lower-triangular and `U` is upper-triangular.
//! Determinant and inverse both come from these factors, which keeps them
//! O(n³) instead of the O(n!) of cofactor expansion.
//!
//! # Singularity
//!
//! At each step the candidate with the largest magnitude in the current column
//! becomes the pivot. If that magnitude is at most
//! [`SINGULAR_TOLERANCE`] × the largest absolute entry of `A`, elimination
//! stops and the matrix is reported singular. A singular matrix has
//! determinant `0.0` and no inverse.

use crate::Error;
use crate::matrix::Matrix;
use crate::operation::Operation;

/// Relative pivot threshold below which a matrix counts as singular.
pub const SINGULAR_TOLERANCE: f64 = 1e-10;

/// Packed `L\U` factors of a square matrix.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    n: usize,
    /// Row-major; strictly-lower part holds `L` (unit diagonal implied),
    /// upper part including the diagonal holds `U`.
    lu: Vec<f64>,
    /// `perm[i]` is the row of `A` that ended up at row `i`.
    perm: Vec<usize>,
    swaps: usize,
    singular: bool,
}

impl LuDecomposition {
    /// Factors `a`. Singularity is recorded, not returned.
    ///
    /// A non-square `a` fails with [`Error::NotSquare`], reported against
    /// [`Operation::Determinant`].
    pub fn factorize(a: &Matrix) -> Result<Self, Error> {
        if !a.shape().is_square() {
            return Err(Error::NotSquare {
                operation: Operation::Determinant,
                shape: a.shape(),
            });
        }

        let n = a.rows();
        let mut lu = a.as_slice().to_vec();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut swaps = 0;
        let tolerance = SINGULAR_TOLERANCE * a.max_abs();

        for k in 0..n {
            let (pivot_row, pivot_abs) = (k..n)
                .map(|r| (r, lu[r * n + k].abs()))
                .fold((k, -1.0), |best, cand| if cand.1 > best.1 { cand } else { best });

            if pivot_abs <= tolerance {
                tracing::debug!(n, column = k, pivot_abs, tolerance, "singular pivot");
                return Ok(Self {
                    n,
                    lu,
                    perm,
                    swaps,
                    singular: true,
                });
            }

            if pivot_row != k {
                swap_rows(&mut lu, n, k, pivot_row);
                perm.swap(k, pivot_row);
                swaps += 1;
            }

            let pivot = lu[k * n + k];
            let (upper, lower) = lu.split_at_mut((k + 1) * n);
            let pivot_tail = &upper[k * n + k + 1..(k + 1) * n];

            for row in lower.chunks_mut(n) {
                let factor = row[k] / pivot;
                row[k] = factor;
                if factor == 0.0 {
                    continue;
                }
                for (x, &u) in row[k + 1..].iter_mut().zip(pivot_tail) {
                    *x -= factor * u;
                }
            }
        }

        Ok(Self {
            n,
            lu,
            perm,
            swaps,
            singular: false,
        })
    }

    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// Number of row swaps performed while pivoting.
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// `(-1)^swaps · Π diag(U)`, or `0.0` for a singular matrix.
    pub fn determinant(&self) -> f64 {
        if self.singular {
            return 0.0;
        }
        let sign = if self.swaps % 2 == 0 { 1.0 } else { -1.0 };
        (0..self.n).fold(sign, |det, i| det * self.lu[i * self.n + i])
    }

    /// Solves `A·x = b` for one right-hand side.
    ///
    /// # Panics
    ///
    /// Panics if `b.len()` differs from the matrix dimension.
    pub fn solve(&self, b: &[f64]) -> Result<Vec<f64>, Error> {
        if self.singular {
            return Err(Error::SingularMatrix);
        }
        assert_eq!(b.len(), self.n, "right-hand side length must match the matrix");

        let mut x: Vec<f64> = self.perm.iter().map(|&p| b[p]).collect();
        self.substitute(&mut x);
        Ok(x)
    }

    /// Solves `A·X = I` by calling [`solve`](Self::solve) once per column.
    pub fn inverse(&self) -> Result<Matrix, Error> {
        let n = self.n;
        let mut inv = Matrix::zeros(n, n);
        let mut unit = vec![0.0; n];

        for j in 0..n {
            unit[j] = 1.0;
            let column = self.solve(&unit)?;
            unit[j] = 0.0;
            for (i, &v) in column.iter().enumerate() {
                inv[(i, j)] = v;
            }
        }

        Ok(inv)
    }

    /// Forward then back substitution, in place. `x` arrives already permuted.
    fn substitute(&self, x: &mut [f64]) {
        let n = self.n;

        // Leading zeros of the right-hand side stay zero under L.
        let first = x.iter().position(|&v| v != 0.0).unwrap_or(n);
        for i in first + 1..n {
            let row = &self.lu[i * n + first..i * n + i];
            let sum: f64 = row
                .iter()
                .zip(&x[first..i])
                .map(|(&l, &xj)| l * xj)
                .sum();
            x[i] -= sum;
        }

        for i in (0..n).rev() {
            let row = &self.lu[i * n..(i + 1) * n];
            let sum: f64 = row[i + 1..]
                .iter()
                .zip(&x[i + 1..])
                .map(|(&u, &xj)| u * xj)
                .sum();
            x[i] = (x[i] - sum) / row[i];
        }
    }
}

fn swap_rows(data: &mut [f64], n: usize, a: usize, b: usize) {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = data.split_at_mut(hi * n);
    head[lo * n..(lo + 1) * n].swap_with_slice(&mut tail[..n]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Operand, validate_matrix};

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        validate_matrix(&rows.into(), Operand::A).unwrap()
    }

    #[test]
    fn pivots_on_largest_entry() {
        let lu = LuDecomposition::factorize(&matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]])).unwrap();
        assert_eq!(lu.swaps(), 1);
        assert!((lu.determinant() + 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_leading_entry_needs_a_swap() {
        let lu = LuDecomposition::factorize(&matrix(vec![vec![0.0, 1.0], vec![1.0, 0.0]])).unwrap();
        assert!(!lu.is_singular());
        assert_eq!(lu.determinant(), -1.0);
    }

    #[test]
    fn all_zero_matrix_is_singular() {
        let lu = LuDecomposition::factorize(&matrix(vec![vec![0.0; 3]; 3])).unwrap();
        assert!(lu.is_singular());
        assert_eq!(lu.determinant(), 0.0);
        assert_eq!(lu.inverse().unwrap_err(), Error::SingularMatrix);
    }

    #[test]
    fn tolerance_is_relative_to_magnitude() {
        let tiny = LuDecomposition::factorize(&matrix(vec![vec![1e-20]])).unwrap();
        assert!(!tiny.is_singular());

        let nearly = matrix(vec![vec![1e6, 1e6], vec![1e6, 1e6 + 1e-7]]);
        assert!(LuDecomposition::factorize(&nearly).unwrap().is_singular());
    }

    #[test]
    fn solve_single_right_hand_side() {
        let a = matrix(vec![
            vec![2.0, 1.0, -1.0],
            vec![-3.0, -1.0, 2.0],
            vec![-2.0, 1.0, 2.0],
        ]);
        let x = LuDecomposition::factorize(&a).unwrap().solve(&[8.0, -11.0, -3.0]).unwrap();
        for (got, want) in x.iter().zip([2.0, 3.0, -1.0]) {
            assert!((got - want).abs() < 1e-10, "{got} != {want}");
        }
    }

    #[test]
    fn non_square_input_is_an_error() {
        let a = matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(
            LuDecomposition::factorize(&a).unwrap_err(),
            Error::NotSquare {
                operation: Operation::Determinant,
                shape: a.shape(),
            }
        );
    }

    #[test]
    fn inverse_columns_match_solve() {
        let a = matrix(vec![vec![4.0, 3.0], vec![6.0, 3.0]]);
        let lu = LuDecomposition::factorize(&a).unwrap();
        let inv = lu.inverse().unwrap();
        for j in 0..2 {
            let mut unit = [0.0; 2];
            unit[j] = 1.0;
            let column = lu.solve(&unit).unwrap();
            for i in 0..2 {
                assert_eq!(inv[(i, j)], column[i]);
            }
        }
        assert!((inv[(0, 0)] + 0.5).abs() < 1e-12);
        assert!((inv[(1, 0)] - 1.0).abs() < 1e-12);
    }
}
