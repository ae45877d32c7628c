//! Svara API client
//!
//! Typed wrapper around the Svara task/tag HTTP API. Every call goes through
//! a single gateway ([`ApiClient::fetch_json`]) that sends one request,
//! checks the status and decodes the JSON body.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod tags;
pub mod tasks;

// Re-export commonly used types and traits
pub use api::{TagApi, TaskApi};
pub use config::{ClientConfig, ConfigError, API_BASE_ENV, DEFAULT_API_BASE};
pub use error::{ClientError, ClientResult};
pub use gateway::{ApiClient, RequestOptions};
pub use tasks::list_path;

pub use svara_tags::{Tag, TagCreate};
pub use svara_tasks::{Task, TaskCreate, TaskStatus, TaskUpdate, TaskView};
