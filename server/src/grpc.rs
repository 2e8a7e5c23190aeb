use crate::models::{NewOperation, OperationRecord};
use crate::storage::HistoryStore;
use futures_util::stream::Stream;
use matrix_engine::{Operation, OperationRequest};
use matrix_service_types::MAX_MESSAGE_SIZE;
use matrix_service_types::matrix::{
    matrix_service_server::{MatrixService, MatrixServiceServer},
    ExecuteRequest, ExecuteResponse, HistoryRecord, HistoryRequest,
};
use std::pin::Pin;
use std::sync::Arc;
use tonic::{Request, Response, Status};

#[derive(Clone)]
pub struct MatrixServiceImpl {
    history: Arc<dyn HistoryStore>,
    history_limit: u32,
}

impl MatrixServiceImpl {
    pub fn new(history: Arc<dyn HistoryStore>, history_limit: u32) -> Self {
        Self {
            history,
            history_limit,
        }
    }

    fn remember(&self, entry: NewOperation) {
        let store = Arc::clone(&self.history);
        tokio::spawn(async move {
            if let Err(e) = store.record(entry).await {
                tracing::warn!(error = %e, "failed to record operation history");
            }
        });
    }
}

type HistoryStream = Pin<Box<dyn Stream<Item = Result<HistoryRecord, Status>> + Send>>;

#[tonic::async_trait]
impl MatrixService for MatrixServiceImpl {
    type HistoryStream = HistoryStream;

    async fn execute(
        &self,
        request: Request<ExecuteRequest>,
    ) -> Result<Response<ExecuteResponse>, Status> {
        let req = request.into_inner();
        let matrix_a = req
            .matrix_a
            .ok_or_else(|| Status::invalid_argument("matrix_a is required"))?;

        let request = OperationRequest {
            operation: req.operation,
            matrix_a: matrix_a.into(),
            matrix_b: req.matrix_b.map(Into::into),
        };
        tracing::info!(
            operation = %request.operation,
            a = %request.matrix_a.declared_shape(),
            "execute"
        );

        let (request, result) = tokio::task::spawn_blocking(move || {
            let result = matrix_engine::execute(&request);
            (request, result)
        })
        .await
        .map_err(|e| Status::internal(format!("Engine task failed: {}", e)))?;

        if result.value().is_some() {
            let binary = request
                .operation
                .parse::<Operation>()
                .is_ok_and(|op| op.is_binary());
            self.remember(NewOperation::new(
                request.operation.as_str(),
                request.matrix_a.declared_shape(),
                request
                    .matrix_b
                    .as_ref()
                    .filter(|_| binary)
                    .map(|b| b.declared_shape()),
                result.elapsed_ms(),
            ));
        }

        Ok(Response::new(ExecuteResponse::from(&result)))
    }

    async fn history(
        &self,
        request: Request<HistoryRequest>,
    ) -> Result<Response<Self::HistoryStream>, Status> {
        let limit = match request.into_inner().limit {
            0 => self.history_limit,
            n => n,
        };
        tracing::info!(limit, "history");

        let records = self
            .history
            .recent(limit)
            .await
            .map_err(|e| Status::internal(format!("Database error: {}", e)))?;

        let output = async_stream::stream! {
            for record in records {
                yield Ok(HistoryRecord::from(record));
            }
        };

        Ok(Response::new(Box::pin(output)))
    }
}

impl From<OperationRecord> for HistoryRecord {
    fn from(record: OperationRecord) -> Self {
        Self {
            id: record.id,
            operation: record.operation,
            a_rows: record.a_shape.rows as u32,
            a_cols: record.a_shape.cols as u32,
            b_rows: record.b_shape.map(|s| s.rows as u32),
            b_cols: record.b_shape.map(|s| s.cols as u32),
            elapsed_time_ms: record.elapsed_ms,
            created_at: record.created_at,
        }
    }
}

pub fn create_server(
    history: Arc<dyn HistoryStore>,
    history_limit: u32,
) -> MatrixServiceServer<MatrixServiceImpl> {
    MatrixServiceServer::new(MatrixServiceImpl::new(history, history_limit))
        .max_decoding_message_size(MAX_MESSAGE_SIZE)
        .max_encoding_message_size(MAX_MESSAGE_SIZE)
}
