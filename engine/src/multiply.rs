//! Dense matrix product.

use crate::Error;
use crate::matrix::Matrix;
use crate::operation::Operation;

/// Computes `A × B` for an `m×n` A and an `n×p` B.
///
/// Each entry accumulates `A[i][k] * B[k][j]` in increasing `k`, the same
/// order as the textbook triple loop. The loops run `i-k-j` so the inner loop
/// walks both B and the output row contiguously.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, Error> {
    if a.cols() != b.rows() {
        return Err(Error::ShapeMismatch {
            operation: Operation::Multiply,
            a: a.shape(),
            b: b.shape(),
        });
    }

    let (m, p) = (a.rows(), b.cols());
    let mut out = vec![0.0; m * p];

    for (i, out_row) in out.chunks_mut(p).enumerate() {
        for (k, &a_ik) in a.row(i).iter().enumerate() {
            if a_ik == 0.0 {
                continue;
            }
            for (c, &b_kj) in out_row.iter_mut().zip(b.row(k)) {
                *c += a_ik * b_kj;
            }
        }
    }

    Ok(Matrix::from_parts(m, p, out))
}
