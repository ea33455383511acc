//! HTTP transport for the todo client.
//!
//! # Design
//! `HttpResponse` describes a completed round-trip as plain data (status and
//! body as owned values). The round-trip itself goes through the `Transport`
//! trait so tests can script responses without opening a socket; the
//! production implementation is `UreqTransport`, a thin wrapper over a
//! `ureq::Agent`.
//!
//! The agent is built with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as `HttpResponse` values rather than `Err` —
//! interpreting the status is `TodoClient`'s job, not the transport's.

use std::fmt;
use std::time::Duration;

use crate::error::FetchError;

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Executes a single GET request and returns the response as data.
///
/// Implementations return `Err` only for transport-level failures; any
/// status the server actually sent, success or not, is an `Ok` response.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Blocking transport backed by a `ureq::Agent`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    /// Transport with no timeout: a call blocks until the server responds
    /// or the connection fails.
    pub fn new() -> Self {
        Self::with_timeout(None)
    }

    /// Transport with a global per-call timeout covering the whole
    /// round-trip. `None` disables the timeout.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
