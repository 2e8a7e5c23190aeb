//! Error types for matrix-client operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("gRPC status error: {0}")]
    Status(#[from] tonic::Status),

    #[error("server rejected the operation: {0}")]
    Remote(String),

    #[error("server response carried neither a value nor an error")]
    EmptyResponse,

    #[error("CSV parse error: {0}")]
    Csv(String),
}
