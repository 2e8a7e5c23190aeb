//! Conversions between protobuf messages and engine types.

use matrix_engine::{MatrixInput, OperationResult, Value};

use crate::matrix::{execute_response, ExecuteResponse, Matrix, Row};

impl Matrix {
    /// Builds a message whose declared dimensions come from `rows`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let cols = rows.first().map_or(0, |row| row.len());
        Self {
            rows: rows.len() as u32,
            cols: cols as u32,
            data: rows.into_iter().map(|values| Row { values }).collect(),
        }
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data.into_iter().map(|row| row.values).collect()
    }
}

/// Declared dimensions are carried over untouched; the engine re-checks them.
impl From<Matrix> for MatrixInput {
    fn from(m: Matrix) -> Self {
        MatrixInput::new(m.rows as usize, m.cols as usize, m.into_rows())
    }
}

impl From<&matrix_engine::Matrix> for Matrix {
    fn from(m: &matrix_engine::Matrix) -> Self {
        Self {
            rows: m.rows() as u32,
            cols: m.cols() as u32,
            data: (0..m.rows())
                .map(|i| Row {
                    values: m.row(i).to_vec(),
                })
                .collect(),
        }
    }
}

impl From<&OperationResult> for ExecuteResponse {
    fn from(result: &OperationResult) -> Self {
        let value = result.value().map(|value| match value {
            Value::Matrix(m) => execute_response::Value::Matrix(m.into()),
            Value::Scalar(v) => execute_response::Value::Scalar(*v),
        });

        Self {
            value,
            elapsed_time_ms: result.elapsed_ms(),
            error: result.error_message().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_engine::{execute, Operation, OperationRequest};

    #[test]
    fn declared_shape_survives_conversion() {
        let wire = Matrix {
            rows: 3,
            cols: 2,
            data: vec![Row {
                values: vec![1.0, 2.0],
            }],
        };
        let input = MatrixInput::from(wire);
        assert_eq!((input.rows, input.cols), (3, 2));
        assert_eq!(input.data, vec![vec![1.0, 2.0]]);
    }

    #[test]
    fn response_carries_value_or_error() {
        let a = MatrixInput::from(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));

        let det = execute(&OperationRequest::new(Operation::Determinant, a.clone(), None));
        let response = ExecuteResponse::from(&det);
        assert!(response.error.is_empty());
        match response.value {
            Some(execute_response::Value::Scalar(v)) => assert!((v + 2.0).abs() < 1e-12),
            other => panic!("unexpected value: {:?}", other),
        }

        let missing = execute(&OperationRequest::new(Operation::Add, a, None));
        let response = ExecuteResponse::from(&missing);
        assert!(response.value.is_none());
        assert_eq!(response.error, "add requires matrix B");
        assert_eq!(response.elapsed_time_ms, 0.0);
    }
}
