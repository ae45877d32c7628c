// ABOUTME: Tag record types for the Svara task API
// ABOUTME: Tags are server-owned labels attached to tasks by id

pub mod types;

// Re-export main types
pub use types::{Tag, TagCreate};
