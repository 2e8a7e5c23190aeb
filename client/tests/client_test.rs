use std::sync::Arc;
use std::time::Duration;

use matrix_client::{Computed, Error, MatrixClient};
use matrix_engine::Operation;
use tokio::net::TcpListener;
use tokio::time::sleep;

async fn start_test_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let pool = matrix_server::db::init_pool("sqlite::memory:").await.unwrap();
    let storage = Arc::new(matrix_server::storage::Storage::new(pool));
    let server = matrix_server::grpc::create_server(storage, 50);

    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(server)
            .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    sleep(Duration::from_millis(100)).await;
    addr.to_string()
}

#[tokio::test]
async fn test_inverse_round_trip() {
    let addr = start_test_server().await;
    let mut client = MatrixClient::connect(addr).await.unwrap();

    let execution = client
        .execute(Operation::Inverse, vec![vec![2.0, 0.0], vec![0.0, 4.0]], None)
        .await
        .unwrap();
    assert_eq!(
        execution.value,
        Computed::Matrix(vec![vec![0.5, 0.0], vec![0.0, 0.25]])
    );
    assert!(execution.elapsed_ms >= 0.0);
}

#[tokio::test]
async fn test_transpose_at_maximum_size() {
    let addr = start_test_server().await;
    let mut client = MatrixClient::connect(addr).await.unwrap();

    let a: Vec<Vec<f64>> = (0..700)
        .map(|i| (0..700).map(|j| (i * 700 + j) as f64).collect())
        .collect();
    let execution = client
        .execute(Operation::Transpose, a, None)
        .await
        .unwrap();
    match execution.value {
        Computed::Matrix(t) => {
            assert_eq!(t.len(), 700);
            assert_eq!(t[3][5], (5 * 700 + 3) as f64);
        }
        other => panic!("expected a matrix, got {:?}", other),
    }
}

#[tokio::test]
async fn test_engine_error_is_remote() {
    let addr = start_test_server().await;
    let mut client = MatrixClient::connect(addr).await.unwrap();

    let err = client
        .execute(
            Operation::Multiply,
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
            Some(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]),
        )
        .await
        .unwrap_err();
    match err {
        Error::Remote(msg) => assert_eq!(msg, "multiply shape mismatch: A is 2x3, B is 2x3"),
        other => panic!("expected a remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_history_after_execute() {
    let addr = start_test_server().await;
    let mut client = MatrixClient::connect(addr).await.unwrap();

    client
        .execute(Operation::Determinant, vec![vec![3.0]], None)
        .await
        .unwrap();
    sleep(Duration::from_millis(200)).await;

    let records = client.history(5).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].operation, "determinant");
}
