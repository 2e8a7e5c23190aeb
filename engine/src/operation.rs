//! Operation names, requests and results.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::Error;
use crate::matrix::{Matrix, MatrixInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Transpose,
    Determinant,
    Inverse,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Transpose,
        Operation::Determinant,
        Operation::Inverse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Transpose => "transpose",
            Operation::Determinant => "determinant",
            Operation::Inverse => "inverse",
        }
    }

    /// Whether the operation needs matrix B.
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Subtract | Operation::Multiply
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}

/// A single call into the engine.
///
/// `operation` is kept as the caller's raw name so that an unsupported name
/// is reported as [`Error::UnknownOperation`] rather than failing earlier.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub operation: String,
    pub matrix_a: MatrixInput,
    pub matrix_b: Option<MatrixInput>,
}

impl OperationRequest {
    pub fn new(operation: Operation, matrix_a: MatrixInput, matrix_b: Option<MatrixInput>) -> Self {
        Self {
            operation: operation.to_string(),
            matrix_a,
            matrix_b,
        }
    }
}

/// What a successful operation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Matrix(Matrix),
    Scalar(f64),
}

impl Value {
    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Value::Matrix(m) => Some(m),
            Value::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            Value::Matrix(_) => None,
        }
    }
}

/// Outcome of [`execute`](crate::execute) together with its wall-clock cost.
///
/// `elapsed` is zero when the request was rejected before any arithmetic ran.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    pub outcome: Result<Value, Error>,
    pub elapsed: Duration,
}

impl OperationResult {
    pub fn value(&self) -> Option<&Value> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn into_outcome(self) -> Result<Value, Error> {
        self.outcome
    }
}
