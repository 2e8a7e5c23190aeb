//! Elementwise addition, subtraction and transpose.

use crate::Error;
use crate::matrix::Matrix;
use crate::operation::Operation;

/// `A + B`, entry by entry.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, Error> {
    zip_with(Operation::Add, a, b, |x, y| x + y)
}

/// `A - B`, entry by entry.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, Error> {
    zip_with(Operation::Subtract, a, b, |x, y| x - y)
}

/// Swaps rows and columns; an `r×c` input gives a `c×r` result.
pub fn transpose(a: &Matrix) -> Matrix {
    let (rows, cols) = (a.rows(), a.cols());
    let mut out = Matrix::zeros(cols, rows);
    for i in 0..rows {
        for (j, &v) in a.row(i).iter().enumerate() {
            out[(j, i)] = v;
        }
    }
    out
}

fn zip_with(
    operation: Operation,
    a: &Matrix,
    b: &Matrix,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Matrix, Error> {
    if a.shape() != b.shape() {
        return Err(Error::ShapeMismatch {
            operation,
            a: a.shape(),
            b: b.shape(),
        });
    }

    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Ok(Matrix::from_parts(a.rows(), a.cols(), data))
}
