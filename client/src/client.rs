//! gRPC client for the matrix service.

use futures_util::StreamExt;
use matrix_engine::Operation;
use matrix_service_types::MAX_MESSAGE_SIZE;
use matrix_service_types::matrix::matrix_service_client::MatrixServiceClient;
use matrix_service_types::matrix::{
    ExecuteRequest, HistoryRecord, HistoryRequest, Matrix, execute_response,
};
use tonic::transport::{Channel, Endpoint};

use crate::Error;

/// What the server computed.
#[derive(Debug, Clone, PartialEq)]
pub enum Computed {
    Matrix(Vec<Vec<f64>>),
    Scalar(f64),
}

/// A successful operation and the server-side time it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub value: Computed,
    pub elapsed_ms: f64,
}

/// Connection to a `matrix-server`.
///
/// # Example
///
/// ```no_run
/// use matrix_client::{Computed, MatrixClient};
/// use matrix_engine::Operation;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut client = MatrixClient::connect("localhost:50051").await?;
///
///     let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
///     let det = client.execute(Operation::Determinant, a, None).await?;
///     assert!(matches!(det.value, Computed::Scalar(_)));
///
///     Ok(())
/// }
/// ```
pub struct MatrixClient {
    client: MatrixServiceClient<Channel>,
}

impl MatrixClient {
    /// Connects to a server at `addr` (e.g. `"localhost:50051"`).
    pub async fn connect(addr: impl Into<ServerAddr>) -> Result<Self, Error> {
        let server_addr = addr.into();
        let endpoint = Endpoint::from_shared(format!("http://{}", server_addr.0))?;
        let channel = endpoint.connect().await?;
        Ok(Self {
            client: MatrixServiceClient::new(channel)
                .max_decoding_message_size(MAX_MESSAGE_SIZE)
                .max_encoding_message_size(MAX_MESSAGE_SIZE),
        })
    }

    /// Runs `operation` on the server.
    ///
    /// An operation the engine rejects comes back as [`Error::Remote`] with
    /// the engine's message.
    pub async fn execute(
        &mut self,
        operation: Operation,
        a: Vec<Vec<f64>>,
        b: Option<Vec<Vec<f64>>>,
    ) -> Result<Execution, Error> {
        let request = ExecuteRequest {
            operation: operation.to_string(),
            matrix_a: Some(Matrix::from_rows(a)),
            matrix_b: b.map(Matrix::from_rows),
        };

        let response = self.client.execute(request).await?.into_inner();
        if !response.error.is_empty() {
            return Err(Error::Remote(response.error));
        }

        let value = match response.value.ok_or(Error::EmptyResponse)? {
            execute_response::Value::Matrix(m) => Computed::Matrix(m.into_rows()),
            execute_response::Value::Scalar(v) => Computed::Scalar(v),
        };

        Ok(Execution {
            value,
            elapsed_ms: response.elapsed_time_ms,
        })
    }

    /// Fetches up to `limit` recent operations, newest first. `0` uses the
    /// server's default.
    pub async fn history(&mut self, limit: u32) -> Result<Vec<HistoryRecord>, Error> {
        let mut stream = self
            .client
            .history(HistoryRequest { limit })
            .await?
            .into_inner();

        let mut records = Vec::new();
        while let Some(record) = stream.next().await {
            records.push(record?);
        }
        Ok(records)
    }
}

/// Server address wrapper for type-safe connection.
#[derive(Clone)]
pub struct ServerAddr(pub String);

impl From<String> for ServerAddr {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ServerAddr {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
