//! Error types for the todo API client.
//!
//! # Design
//! Only hard failures are errors. A non-2xx HTTP status is a soft failure
//! and surfaces as the `None` arm of `TodoClient::fetch_todos`, never as a
//! `FetchError`. That keeps the two outcomes the caller reacts to
//! differently — "the server said no" and "we never got an answer" —
//! distinct in the type system.

use std::fmt;

/// Errors returned by `TodoClient` fetch methods.
#[derive(Debug)]
pub enum FetchError {
    /// The request never completed: connection failure, timeout, or the
    /// response body could not be read off the socket.
    Transport(String),

    /// The response body could not be deserialized into a todo array.
    Deserialization(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "transport failed: {msg}"),
            FetchError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for FetchError {}
