//! Synchronous client for the JSONPlaceholder todo API.
//!
//! # Overview
//! Two operations: `fetch_todos` issues one blocking GET and hands back the
//! raw response, `fetch_uncompleted_todos` parses it and keeps only the
//! records whose `completed` field is `false`.
//!
//! # Design
//! - `TodoClient` is stateless — it holds a base URL and a transport.
//! - A non-success HTTP status is a soft failure: `Ok(None)` from the
//!   fetcher, an empty list from the filter. Transport and parse failures
//!   are hard and propagate as `FetchError`.
//! - I/O goes through the `Transport` trait; unit tests script responses,
//!   production code uses the ureq-backed `UreqTransport`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use http::{HttpResponse, Transport, UreqTransport};
pub use types::Todo;
