//! Wire types for the matrix service.
//!
//! The protobuf definitions live in `proto/matrix.proto`; this crate compiles
//! them with `tonic-prost-build` and adds conversions to and from the
//! `matrix-engine` types so that neither the server nor the client has to
//! copy rows by hand.

mod convert;

/// Largest gRPC message either side will encode or decode.
///
/// A 700×700 operand pair plus framing is a little under 8 MiB, above tonic's
/// 4 MiB default.
pub const MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;

pub mod matrix {
    tonic::include_proto!("matrix");
}
