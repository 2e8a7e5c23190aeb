use chrono::Utc;
use matrix_engine::Shape;

/// One executed operation as kept in the history table.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    pub id: i64,
    pub operation: String,
    pub a_shape: Shape,
    pub b_shape: Option<Shape>,
    pub elapsed_ms: f64,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// A history entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOperation {
    pub operation: String,
    pub a_shape: Shape,
    pub b_shape: Option<Shape>,
    pub elapsed_ms: f64,
    pub created_at: i64,
}

impl NewOperation {
    pub fn new(operation: impl Into<String>, a_shape: Shape, b_shape: Option<Shape>, elapsed_ms: f64) -> Self {
        Self {
            operation: operation.into(),
            a_shape,
            b_shape,
            elapsed_ms,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}
