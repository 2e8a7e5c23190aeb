//! Dense matrix operation engine.
//!
//! `matrix-engine` validates caller-supplied matrices, runs the requested
//! operation and reports how long the computation took. It supports
//! elementwise addition and subtraction, multiplication, transpose,
//! determinant and inverse for real-valued matrices up to 700×700.
//!
//! Determinant and inverse are derived from an LU decomposition with partial
//! pivoting, so both run in O(n³) even at the maximum size.
//!
//! # Example
//!
//! ```
//! use matrix_engine::{MatrixInput, Operation, OperationRequest, Value, execute};
//!
//! let a = MatrixInput::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
//! let b = MatrixInput::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
//!
//! let result = execute(&OperationRequest::new(Operation::Add, a, Some(b)));
//! match result.value() {
//!     Some(Value::Matrix(m)) => assert_eq!(m.to_rows(), vec![vec![6.0, 8.0], vec![10.0, 12.0]]),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

mod dispatch;
mod elementary;
mod error;
mod lu;
mod matrix;
mod multiply;
mod operation;
mod shape;

pub use dispatch::execute;
pub use elementary::{add, subtract, transpose};
pub use error::{Error, Operand};
pub use lu::{LuDecomposition, SINGULAR_TOLERANCE};
pub use matrix::{MAX_DIMENSION, Matrix, MatrixInput, Shape};
pub use multiply::multiply;
pub use operation::{Operation, OperationRequest, OperationResult, Value};
pub use shape::{ValidatedOperands, validate, validate_matrix};
