//! Domain DTOs for the todo API.
//!
//! # Design
//! `Todo` mirrors the JSONPlaceholder `/todos` schema: camelCase field names
//! on the wire, snake_case in Rust. The mock-server crate defines its own
//! copy of the shape; integration tests catch any drift between the two.
//!
//! `completed` is an `Option<bool>` rather than a `bool`: upstream data has
//! been observed with the field missing, and a record without it must not
//! fail deserialization of the whole array. The filter treats such records
//! as not uncompleted (see `TodoClient::fetch_uncompleted_todos`).

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    /// `None` when the record carried no `completed` field (or `null`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
