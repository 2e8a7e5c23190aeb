//! gRPC front end for `matrix-engine`.
//!
//! `matrix-server` exposes the engine through the `MatrixService` defined in
//! `matrix-service-types` and keeps a SQLite history of successful
//! operations. Matrix arithmetic runs on tokio's blocking pool so large
//! factorizations never stall the RPC executor.

pub mod config;
pub mod db;
pub mod grpc;
pub mod models;
pub mod storage;
