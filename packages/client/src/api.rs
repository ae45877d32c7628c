//! Endpoint traits implemented by [`crate::ApiClient`].
//!
//! Front ends depend on these rather than on the concrete client so they can
//! be exercised against mocks.

use async_trait::async_trait;
use svara_tags::{Tag, TagCreate};
use svara_tasks::{Task, TaskCreate, TaskUpdate, TaskView};

use crate::error::ClientResult;

#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `GET /views/{view}` for a curated view, `GET /tasks` for `None`
    async fn fetch_tasks(&self, view: Option<TaskView>) -> ClientResult<Vec<Task>>;
    async fn fetch_all_tasks(&self) -> ClientResult<Vec<Task>>;
    async fn fetch_task(&self, id: i64) -> ClientResult<Task>;
    async fn create_task(&self, task: &TaskCreate) -> ClientResult<Task>;
    async fn update_task(&self, id: i64, task: &TaskUpdate) -> ClientResult<Task>;
    async fn delete_task(&self, id: i64) -> ClientResult<()>;
    /// Server-side inbox -> next transition
    async fn promote_task(&self, id: i64) -> ClientResult<Task>;
    /// Server-side transition to done; the server sets `done_at`
    async fn complete_task(&self, id: i64) -> ClientResult<Task>;
    /// PATCH carrying only `{"note": ...}`
    async fn update_task_note(&self, id: i64, note: &str) -> ClientResult<Task>;
}

#[async_trait]
pub trait TagApi: Send + Sync {
    async fn fetch_tags(&self) -> ClientResult<Vec<Tag>>;
    async fn fetch_tag(&self, id: i64) -> ClientResult<Tag>;
    async fn create_tag(&self, tag: &TagCreate) -> ClientResult<Tag>;
    async fn delete_tag(&self, id: i64) -> ClientResult<()>;
}
