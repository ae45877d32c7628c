// ABOUTME: Task record types for the Svara task API
// ABOUTME: Status and view enums plus the create/update request shapes

pub mod types;

pub use types::*;
