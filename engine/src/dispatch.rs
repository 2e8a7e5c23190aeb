//! Routes a request to its routine and times the computation.

use std::time::{Duration, Instant};

use crate::elementary::{add, subtract, transpose};
use crate::error::Error;
use crate::lu::LuDecomposition;
use crate::multiply::multiply;
use crate::operation::{Operation, OperationRequest, OperationResult, Value};
use crate::shape::{ValidatedOperands, validate};

/// Runs one operation request.
///
/// The operation name and operand shapes are checked first; a rejected
/// request reports zero elapsed time. Once validation passes the timer starts,
/// so `elapsed` covers the arithmetic, including any work done before an
/// inverse turns out to be singular.
///
/// This never panics on caller input and holds no state between calls.
pub fn execute(request: &OperationRequest) -> OperationResult {
    let operands = request
        .operation
        .parse::<Operation>()
        .and_then(|op| validate(op, &request.matrix_a, request.matrix_b.as_ref()));

    let operands = match operands {
        Ok(operands) => operands,
        Err(e) => {
            tracing::warn!(operation = %request.operation, error = %e, "rejected request");
            return OperationResult {
                outcome: Err(e),
                elapsed: Duration::ZERO,
            };
        }
    };

    let operation = operands.operation;
    let shape = operands.a.shape();

    let start = Instant::now();
    let outcome = run(operands);
    let elapsed = start.elapsed();

    match &outcome {
        Ok(_) => tracing::debug!(%operation, %shape, ?elapsed, "operation complete"),
        Err(e) => tracing::warn!(%operation, %shape, ?elapsed, error = %e, "operation failed"),
    }

    OperationResult { outcome, elapsed }
}

fn run(operands: ValidatedOperands) -> Result<Value, Error> {
    let ValidatedOperands { operation, a, b } = operands;
    let rhs = || b.as_ref().ok_or(Error::MissingOperand(operation));

    let value = match operation {
        Operation::Add => Value::Matrix(add(&a, rhs()?)?),
        Operation::Subtract => Value::Matrix(subtract(&a, rhs()?)?),
        Operation::Multiply => Value::Matrix(multiply(&a, rhs()?)?),
        Operation::Transpose => Value::Matrix(transpose(&a)),
        Operation::Determinant => Value::Scalar(LuDecomposition::factorize(&a)?.determinant()),
        Operation::Inverse => Value::Matrix(LuDecomposition::factorize(&a)?.inverse()?),
    };

    Ok(value)
}
