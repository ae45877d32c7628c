// ABOUTME: Tag type definitions
// ABOUTME: Wire shapes for tags returned by and sent to the backend

use serde::{Deserialize, Serialize};

/// A label as returned by the backend.
///
/// `id` and `key` are unique across tags. `key` is the stable slug the
/// server derives from the name; `created_at` is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub key: String,
    pub created_at: String,
}

/// Body for `POST /tags`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCreate {
    pub name: String,
}

impl TagCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
