//! Error types for matrix operations.

use std::fmt;

use thiserror::Error;

use crate::matrix::{MAX_DIMENSION, Shape};
use crate::operation::Operation;

/// Which operand of a request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => f.write_str("A"),
            Operand::B => f.write_str("B"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("matrix {operand} is malformed: {reason}")]
    MalformedMatrix { operand: Operand, reason: String },

    #[error("matrix {operand} is {shape}, rows and columns must be between 1 and {max}", max = MAX_DIMENSION)]
    DimensionOutOfRange { operand: Operand, shape: Shape },

    #[error("{0} requires matrix B")]
    MissingOperand(Operation),

    #[error("{operation} shape mismatch: A is {a}, B is {b}")]
    ShapeMismatch {
        operation: Operation,
        a: Shape,
        b: Shape,
    },

    #[error("{operation} requires a square matrix, A is {shape}")]
    NotSquare { operation: Operation, shape: Shape },

    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,
}
