//! figi maps third-party security identifiers to FIGIs through the OpenFIGI
//! mapping API.
//!
//! Overview
//! - Describe each lookup as a [`MappingJob`]: an [`IdType`], a value, and
//!   optional exchange, MIC, currency and market sector filters.
//! - [`OpenFigi::map`] sends all jobs in one request and returns a
//!   [`MappingResponse`] with one [`JobResult`] per job, in order.
//! - Non-200 replies surface as [`FigiError::Http`] with the service's body;
//!   network failures as [`FigiError::Transport`]. Nothing is retried;
//!   [`FigiError::is_retryable`] tells the caller when another attempt may help.
//! - The service caps jobs per request (lower without an API key). Split
//!   large batches yourself; the client sends what it is given.
//!
//! Example
//! ```rust,ignore
//! use figi::{IdType, MappingJob, OpenFigi};
//!
//! let client = OpenFigi::builder().api_key("...").build()?;
//! let jobs = [MappingJob::new(IdType::IdWertpapier, "851399").with_exch_code("US")];
//! let resp = client.map(&jobs).await?;
//! for result in &resp.jobs[0].results {
//!     println!("{result}");
//! }
//! resp.release();
//! ```
//!
//! Features
//! - `tracing`: spans around `map`/`send_raw` and debug events from encoding,
//!   decoding and the HTTP transport.
#![warn(missing_docs)]

mod client;

pub use client::{OpenFigi, OpenFigiBuilder};
pub use figi_core::*;
pub use figi_http::{API_KEY_HEADER, HttpTransport};
