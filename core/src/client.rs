//! Fetch and filter operations for the todo API.
//!
//! # Design
//! `TodoClient` holds a base URL and a `Transport` and carries no mutable
//! state between calls; each fetch is an independent request/response
//! round-trip. The fetcher returns the raw response so callers can layer
//! their own parsing on top; the filter is the one parse this crate ships.
//!
//! A non-success status is a soft failure: `fetch_todos` returns `Ok(None)`
//! and `fetch_uncompleted_todos` returns an empty list. Transport and parse
//! failures are hard and propagate as `FetchError`.

use crate::error::FetchError;
use crate::http::{HttpResponse, Transport, UreqTransport};
use crate::types::Todo;

/// Base URL of the public JSONPlaceholder API, used by `TodoClient::default`.
pub const DEFAULT_BASE_URL: &str = "http://jsonplaceholder.typicode.com";

/// Synchronous client for the todo API.
///
/// Issues one blocking GET per fetch call. No retries, no caching.
#[derive(Debug)]
pub struct TodoClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl TodoClient<UreqTransport> {
    /// Client against `base_url` using the blocking ureq transport with no
    /// timeout configured.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl Default for TodoClient<UreqTransport> {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl<T: Transport> TodoClient<T> {
    /// Client with a caller-supplied transport. This is the seam the unit
    /// tests use to script responses.
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// GET the todo collection.
    ///
    /// Returns `Ok(Some(response))` with the unparsed body when the server
    /// answers with a success status, `Ok(None)` when it answers with any
    /// other status, and `Err` when the round-trip itself fails.
    pub fn fetch_todos(&self) -> Result<Option<HttpResponse>, FetchError> {
        let url = format!("{}/todos", self.base_url);
        let response = self.transport.get(&url)?;
        if response.is_success() {
            Ok(Some(response))
        } else {
            Ok(None)
        }
    }

    /// Fetch the todo collection and keep only uncompleted records.
    ///
    /// Calls `fetch_todos` once. A soft failure yields an empty list; a
    /// malformed body is a `Deserialization` error. The result preserves
    /// the server's record order and contains exactly the records whose
    /// `completed` field is `false` — records where the field is missing
    /// or `null` are dropped, not treated as uncompleted.
    pub fn fetch_uncompleted_todos(&self) -> Result<Vec<Todo>, FetchError> {
        let Some(response) = self.fetch_todos()? else {
            return Ok(Vec::new());
        };
        let todos: Vec<Todo> = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;
        Ok(todos
            .into_iter()
            .filter(|todo| todo.completed == Some(false))
            .collect())
    }
}
