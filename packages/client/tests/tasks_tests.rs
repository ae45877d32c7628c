// ABOUTME: Integration tests for the task endpoints
// ABOUTME: Verifies method, path and body of every task operation against a mock server

mod common;

use common::{client_for, single_request_body, tag_json, task_json};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use svara_client::{ClientError, TaskApi, TaskCreate, TaskStatus, TaskUpdate, TaskView};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[rstest]
#[case(TaskView::Inbox, "/views/inbox")]
#[case(TaskView::Today, "/views/today")]
#[case(TaskView::Backlog, "/views/backlog")]
#[case(TaskView::Done, "/views/done")]
#[tokio::test]
async fn test_fetch_tasks_uses_curated_view(#[case] view: TaskView, #[case] expected: &str) {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(expected))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([task_json(1, "Stretch", "inbox")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client_for(&server).fetch_tasks(Some(view)).await.unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Stretch");
}

#[tokio::test]
async fn test_fetch_tasks_without_view_uses_generic_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client_for(&server).fetch_tasks(None).await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_fetch_all_tasks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            task_json(1, "One", "inbox"),
            task_json(2, "Two", "done"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client_for(&server).fetch_all_tasks().await.unwrap();

    assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(tasks[1].status, TaskStatus::Done);
}

#[tokio::test]
async fn test_fetch_task_fields_match_body() {
    let server = MockServer::start().await;
    let mut body = task_json(7, "Call plumber", "waiting");
    body["note"] = json!("after 5pm");
    body["today_rank"] = json!(1);
    body["tags"] = json!([tag_json(4, "Home")]);

    Mock::given(method("GET"))
        .and(path("/tasks/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let task = client_for(&server).fetch_task(7).await.unwrap();

    assert_eq!(task.note.as_deref(), Some("after 5pm"));
    assert_eq!(task.tags[0].key, "home");
    assert_eq!(serde_json::to_value(&task).unwrap(), body);
}

#[tokio::test]
async fn test_fetch_missing_task_reports_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Task not found" })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_task(99).await.unwrap_err();

    assert_eq!(err.to_string(), "Task not found");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_create_task_posts_body() {
    let server = MockServer::start().await;
    let create = TaskCreate {
        title: "Renew passport".to_string(),
        note: Some("bring photos".to_string()),
        status: Some(TaskStatus::Next),
        due_at: Some("2024-09-01T00:00:00".to_string()),
        today_rank: None,
        tag_ids: vec![3, 8],
    };

    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(body_json(json!({
            "title": "Renew passport",
            "note": "bring photos",
            "status": "next",
            "due_at": "2024-09-01T00:00:00",
            "tag_ids": [3, 8]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json(11, "Renew passport", "next")))
        .expect(1)
        .mount(&server)
        .await;

    let task = client_for(&server).create_task(&create).await.unwrap();
    assert_eq!(task.id, 11);

    let sent: TaskCreate = serde_json::from_value(single_request_body(&server).await).unwrap();
    assert_eq!(sent, create);
}

#[tokio::test]
async fn test_update_task_patches_only_given_fields() {
    let server = MockServer::start().await;
    let update = TaskUpdate {
        title: Some("Renew passport today".to_string()),
        due_at: Some(None),
        tag_ids: Some(Some(vec![])),
        ..Default::default()
    };

    Mock::given(method("PATCH"))
        .and(path("/tasks/11"))
        .and(body_json(json!({
            "title": "Renew passport today",
            "due_at": null,
            "tag_ids": []
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(task_json(11, "Renew passport today", "next")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let task = client_for(&server).update_task(11, &update).await.unwrap();
    assert_eq!(task.title, "Renew passport today");

    let sent: TaskUpdate = serde_json::from_value(single_request_body(&server).await).unwrap();
    assert_eq!(sent, update);
}

#[tokio::test]
async fn test_update_task_with_no_content_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/tasks/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .update_task(5, &TaskUpdate::note("x"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::EmptyResponse(204)));
}

#[tokio::test]
async fn test_update_task_note_sends_only_note() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/tasks/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(4, "Read", "inbox")))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).update_task_note(4, "hello").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(String::from_utf8(requests[0].body.clone()).unwrap(), r#"{"note":"hello"}"#);
}

#[tokio::test]
async fn test_delete_task_accepts_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/tasks/12"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_task(12).await.unwrap();
}

#[tokio::test]
async fn test_delete_task_ignores_empty_ok_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/tasks/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_task(1).await.unwrap();
}

#[tokio::test]
async fn test_promote_task() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tasks/2/promote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(2, "Draft plan", "next")))
        .expect(1)
        .mount(&server)
        .await;

    let task = client_for(&server).promote_task(2).await.unwrap();
    assert_eq!(task.status, TaskStatus::Next);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_promote_rejected_by_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tasks/2/promote"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "detail": "Task must be in inbox to promote" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).promote_task(2).await.unwrap_err();
    assert_eq!(err.to_string(), "Task must be in inbox to promote");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_complete_task_sets_done_at() {
    let server = MockServer::start().await;
    let mut body = task_json(6, "Ship release", "done");
    body["done_at"] = json!("2024-05-03T18:20:00");

    Mock::given(method("POST"))
        .and(path("/tasks/6/complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let task = client_for(&server).complete_task(6).await.unwrap();

    assert!(task.is_done());
    assert_eq!(task.done_at.as_deref(), Some("2024-05-03T18:20:00"));
}
