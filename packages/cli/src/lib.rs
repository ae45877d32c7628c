//! Svara CLI library
//!
//! Command definitions and handlers for the `svara` binary. Handlers are
//! generic over the client's endpoint traits and return the text to print.

pub mod commands;
pub mod output;
pub mod validation;

pub use commands::tags::{handle_tags_command, TagsCommands};
pub use commands::tasks::{handle_tasks_command, TasksCommands};
pub use output::OutputFormat;
