// ABOUTME: Task endpoints on top of the request gateway
// ABOUTME: Fixes method, path and body for each task operation

use async_trait::async_trait;
use reqwest::Method;
use svara_tasks::{Task, TaskCreate, TaskUpdate, TaskView};

use crate::api::TaskApi;
use crate::error::ClientResult;
use crate::gateway::{ApiClient, RequestOptions};

/// Listing path for a view selector: curated views go to `/views/{view}`,
/// everything else to the generic `/tasks` listing.
pub fn list_path(view: Option<TaskView>) -> String {
    match view {
        Some(view) => view.path(),
        None => "/tasks".to_string(),
    }
}

fn task_path(id: i64) -> String {
    format!("/tasks/{}", id)
}

#[async_trait]
impl TaskApi for ApiClient {
    async fn fetch_tasks(&self, view: Option<TaskView>) -> ClientResult<Vec<Task>> {
        self.fetch_record(&list_path(view), RequestOptions::default())
            .await
    }

    async fn fetch_all_tasks(&self) -> ClientResult<Vec<Task>> {
        self.fetch_record("/tasks", RequestOptions::default()).await
    }

    async fn fetch_task(&self, id: i64) -> ClientResult<Task> {
        self.fetch_record(&task_path(id), RequestOptions::default())
            .await
    }

    async fn create_task(&self, task: &TaskCreate) -> ClientResult<Task> {
        let options = RequestOptions::new(Method::POST).json(task)?;
        self.fetch_record("/tasks", options).await
    }

    async fn update_task(&self, id: i64, task: &TaskUpdate) -> ClientResult<Task> {
        let options = RequestOptions::new(Method::PATCH).json(task)?;
        self.fetch_record(&task_path(id), options).await
    }

    async fn delete_task(&self, id: i64) -> ClientResult<()> {
        self.fetch_empty(&task_path(id), RequestOptions::new(Method::DELETE))
            .await
    }

    async fn promote_task(&self, id: i64) -> ClientResult<Task> {
        let path = format!("{}/promote", task_path(id));
        self.fetch_record(&path, RequestOptions::new(Method::POST))
            .await
    }

    async fn complete_task(&self, id: i64) -> ClientResult<Task> {
        let path = format!("{}/complete", task_path(id));
        self.fetch_record(&path, RequestOptions::new(Method::POST))
            .await
    }

    async fn update_task_note(&self, id: i64, note: &str) -> ClientResult<Task> {
        self.update_task(id, &TaskUpdate::note(note)).await
    }
}
