//! Shape validation for operation requests.

use crate::error::{Error, Operand};
use crate::matrix::{MAX_DIMENSION, Matrix, MatrixInput, Shape};
use crate::operation::Operation;

/// Operands that passed every precondition of their operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOperands {
    pub operation: Operation,
    pub a: Matrix,
    pub b: Option<Matrix>,
}

/// Checks a caller-supplied matrix and converts it to a dense [`Matrix`].
///
/// The declared dimensions must agree with the data, every row must have the
/// same length, every entry must be finite and both dimensions must lie in
/// `1..=MAX_DIMENSION`.
pub fn validate_matrix(input: &MatrixInput, operand: Operand) -> Result<Matrix, Error> {
    let malformed = |reason: String| Error::MalformedMatrix { operand, reason };

    if input.data.len() != input.rows {
        return Err(malformed(format!(
            "declared {} rows but {} were supplied",
            input.rows,
            input.data.len()
        )));
    }

    for (i, row) in input.data.iter().enumerate() {
        if row.len() != input.cols {
            return Err(malformed(format!(
                "row {} has {} columns, expected {}",
                i + 1,
                row.len(),
                input.cols
            )));
        }
    }

    let shape = input.declared_shape();
    if !in_range(shape.rows) || !in_range(shape.cols) {
        return Err(Error::DimensionOutOfRange { operand, shape });
    }

    let mut data = Vec::with_capacity(shape.rows * shape.cols);
    for (i, row) in input.data.iter().enumerate() {
        if let Some(j) = row.iter().position(|v| !v.is_finite()) {
            return Err(malformed(format!(
                "entry at row {}, column {} is not a finite number",
                i + 1,
                j + 1
            )));
        }
        data.extend_from_slice(row);
    }

    Ok(Matrix::from_parts(shape.rows, shape.cols, data))
}

/// Checks every precondition `operation` places on its operands.
///
/// A matrix B supplied to a unary operation is still validated, then dropped.
pub fn validate(
    operation: Operation,
    a: &MatrixInput,
    b: Option<&MatrixInput>,
) -> Result<ValidatedOperands, Error> {
    let a = validate_matrix(a, Operand::A)?;
    let b = b.map(|b| validate_matrix(b, Operand::B)).transpose()?;

    if !operation.is_binary() {
        if requires_square(operation) && !a.shape().is_square() {
            return Err(Error::NotSquare {
                operation,
                shape: a.shape(),
            });
        }
        return Ok(ValidatedOperands {
            operation,
            a,
            b: None,
        });
    }

    let b = b.ok_or(Error::MissingOperand(operation))?;
    let compatible = match operation {
        Operation::Multiply => a.cols() == b.rows(),
        _ => a.shape() == b.shape(),
    };
    if !compatible {
        return Err(mismatch(operation, a.shape(), b.shape()));
    }

    Ok(ValidatedOperands {
        operation,
        a,
        b: Some(b),
    })
}

fn in_range(dim: usize) -> bool {
    (1..=MAX_DIMENSION).contains(&dim)
}

fn requires_square(operation: Operation) -> bool {
    matches!(operation, Operation::Determinant | Operation::Inverse)
}

fn mismatch(operation: Operation, a: Shape, b: Shape) -> Error {
    Error::ShapeMismatch { operation, a, b }
}
