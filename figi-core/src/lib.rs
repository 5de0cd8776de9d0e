//! figi-core
//!
//! The mapping pipeline minus the network:
//!
//! - `codec`: turns [`MappingJob`]s into the request JSON array and turns a
//!   reply body back into a [`MappingResponse`].
//! - `transport`: the [`MappingTransport`] trait every HTTP backend (or test
//!   double) implements, and the [`RawReply`] it returns.
//!
//! Enable the `tracing` feature to emit debug events for encoded request
//! sizes, decoded counts, and result fields longer than their advisory
//! bounds.
#![warn(missing_docs)]

/// Request encoding and reply decoding.
pub mod codec;
/// The transport seam between the pipeline and an HTTP client.
pub mod transport;

pub use codec::{decode_response, encode_job, encode_request, request_body};
pub use figi_types::*;
pub use transport::{MappingTransport, RawReply};
