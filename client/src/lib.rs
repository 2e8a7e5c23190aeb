//! Client for the matrix service.
//!
//! `matrix-client` talks to a `matrix-server` over gRPC. It also carries the
//! caller-side ways of producing matrices: parsing comma-separated text and
//! generating random integer-valued matrices. The server re-validates
//! everything it receives, so nothing here is trusted by the engine.
//!
//! # Example
//!
//! ```no_run
//! use matrix_client::{Computed, MatrixClient, input};
//! use matrix_engine::Operation;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = MatrixClient::connect("localhost:50051").await?;
//!
//!     let a = input::parse_csv("1,2\n3,4\n")?;
//!     let b = input::parse_csv("5,6\n7,8\n")?;
//!
//!     let sum = client.execute(Operation::Add, a, Some(b)).await?;
//!     assert_eq!(
//!         sum.value,
//!         Computed::Matrix(vec![vec![6.0, 8.0], vec![10.0, 12.0]])
//!     );
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
pub mod input;

pub use client::{Computed, Execution, MatrixClient, ServerAddr};
pub use error::Error;
