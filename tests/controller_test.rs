use async_trait::async_trait;
use projects_page::clients::ProjectClient;
use projects_page::controller::{
    ControllerContext, ControllerError, ControllerHandle, DeleteOutcome, FormState, Operation,
    ProjectListController,
};
use projects_page::interaction::{Confirm, FixedAnswer, MemoryNavigator, Navigator};
use projects_page::model::{Project, ProjectDraft, ProjectId};
use resource_client::mock::MockTransport;
use resource_client::{ApiError, Method};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

/// Spawns a controller over `mock` and returns its handle.
fn start(mock: &MockTransport, answer: bool, navigator: Arc<MemoryNavigator>) -> ControllerHandle {
    let (controller, handle) = ProjectListController::new(8);
    tokio::spawn(controller.run(ControllerContext {
        client: ProjectClient::from_transport(Arc::new(mock.clone())),
        confirm: Arc::new(FixedAnswer(answer)),
        navigator,
    }));
    handle
}

/// Waits until the mock has seen `count` requests.
async fn wait_for_requests(mock: &MockTransport, count: usize) {
    for _ in 0..200 {
        if mock.requests().len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("mock saw {} requests, expected {}", mock.requests().len(), count);
}

/// Waits until nothing is in flight.
async fn wait_until_idle(handle: &ControllerHandle) {
    for _ in 0..200 {
        if handle.snapshot().await.unwrap().in_flight.is_none() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("controller stayed busy");
}

/// A prompt answered later by the test.
struct PendingAnswer(Mutex<Option<oneshot::Receiver<bool>>>);

#[async_trait]
impl Confirm for PendingAnswer {
    async fn confirm(&self, _message: &str) -> bool {
        let answer = self.0.lock().unwrap().take();
        match answer {
            Some(answer) => answer.await.unwrap_or(false),
            None => false,
        }
    }
}

fn titles(projects: &[Project]) -> Vec<&str> {
    projects.iter().map(|p| p.title.as_str()).collect()
}

#[tokio::test]
async fn test_initialize_replaces_collection() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects").return_json(
        200,
        &json!([
            {"id": 1, "title": "A", "featured": true},
            {"id": "b", "title": "B", "technologies": ["Rust"]}
        ]),
    );
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));

    let count = handle.initialize().await.unwrap();

    assert_eq!(count, 2);
    let view = handle.snapshot().await.unwrap();
    assert_eq!(titles(&view.projects), vec!["A", "B"]);
    assert_eq!(view.projects[0].id, ProjectId::from("1"));
    assert!(view.in_flight.is_none());
    assert!(mock.requests()[0].no_store);
    mock.verify();
}

#[tokio::test]
async fn test_non_array_listing_is_empty() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!({"error": "nope"}));
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));

    assert_eq!(handle.initialize().await.unwrap(), 0);
    assert!(handle.snapshot().await.unwrap().projects.is_empty());
}

#[tokio::test]
async fn test_transport_failure_leaves_collection_empty() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_err(ApiError::Transport("connection refused".into()));
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));

    let result = handle.initialize().await;

    assert!(matches!(result, Err(ControllerError::Api(ApiError::Transport(_)))));
    let view = handle.snapshot().await.unwrap();
    assert!(view.projects.is_empty());
    assert!(view.in_flight.is_none());
}

#[tokio::test]
async fn test_second_initialize_does_not_fetch() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}]));
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));

    assert_eq!(handle.initialize().await.unwrap(), 1);
    assert_eq!(handle.initialize().await.unwrap(), 1);

    assert_eq!(mock.requests().len(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_duplicate_ids_keep_first() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects").return_json(
        200,
        &json!([
            {"id": 1, "title": "First"},
            {"id": "1", "title": "Second"},
            {"id": 2, "title": "Other"}
        ]),
    );
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));

    assert_eq!(handle.initialize().await.unwrap(), 2);
    let view = handle.snapshot().await.unwrap();
    assert_eq!(titles(&view.projects), vec!["First", "Other"]);
}

#[tokio::test]
async fn test_delete_on_detail_page_redirects() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]));
    mock.expect(Method::Delete, "/api/projects/2").return_status(204);
    let navigator = Arc::new(MemoryNavigator::new("/projects/2"));
    let handle = start(&mock, true, navigator.clone());
    handle.initialize().await.unwrap();

    let outcome = handle.request_delete(ProjectId::from("2")).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Removed { redirected: true });
    assert_eq!(navigator.current_path(), "/projects");
    let view = handle.snapshot().await.unwrap();
    assert_eq!(titles(&view.projects), vec!["A"]);
    mock.verify();
}

#[tokio::test]
async fn test_delete_elsewhere_stays_put() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]));
    mock.expect(Method::Delete, "/api/projects/1").return_status(200);
    let navigator = Arc::new(MemoryNavigator::new("/projects/2"));
    let handle = start(&mock, true, navigator.clone());
    handle.initialize().await.unwrap();

    let outcome = handle.request_delete(ProjectId::from("1")).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Removed { redirected: false });
    assert_eq!(navigator.history(), vec!["/projects/2"]);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}]));
    let handle = start(&mock, false, Arc::new(MemoryNavigator::default()));
    handle.initialize().await.unwrap();

    let outcome = handle.request_delete(ProjectId::from("1")).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(mock.requests().len(), 1);
    assert_eq!(handle.snapshot().await.unwrap().projects.len(), 1);
}

#[tokio::test]
async fn test_failed_delete_keeps_project() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}]));
    mock.expect(Method::Delete, "/api/projects/1").return_status(500);
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));
    handle.initialize().await.unwrap();

    let result = handle.request_delete(ProjectId::from("1")).await;

    let Err(ControllerError::Api(error)) = result else {
        panic!("expected an API error, got {result:?}");
    };
    assert_eq!(error.status(), Some(500));
    let view = handle.snapshot().await.unwrap();
    assert_eq!(view.projects.len(), 1);
    assert!(view.in_flight.is_none());
}

#[tokio::test]
async fn test_create_resynchronizes_and_closes_form() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects").return_json(200, &json!([]));
    mock.expect(Method::Post, "/api/projects").return_status(201);
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 10, "title": "Server copy", "featured": true}]));
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));
    handle.initialize().await.unwrap();

    handle.request_create().await.unwrap();
    assert_eq!(handle.snapshot().await.unwrap().form, FormState::CreatingNew);

    let mut draft = ProjectDraft::new("Local copy", "desc");
    draft.technologies = vec!["Rust".into()];
    handle.submit_form(draft, None).await.unwrap();

    let view = handle.snapshot().await.unwrap();
    assert_eq!(titles(&view.projects), vec!["Server copy"]);
    assert!(view.projects[0].featured);
    assert_eq!(view.form, FormState::Closed);

    let requests = mock.requests();
    assert_eq!(
        requests[1].body,
        Some(json!({
            "title": "Local copy",
            "description": "desc",
            "technologies": ["Rust"],
            "featured": false
        }))
    );
    mock.verify();
}

#[tokio::test]
async fn test_edit_updates_by_id() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 7, "title": "Old"}]));
    mock.expect(Method::Put, "/api/projects/7").return_status(200);
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 7, "title": "New"}]));
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));
    handle.initialize().await.unwrap();

    let project = handle.snapshot().await.unwrap().projects[0].clone();
    handle.request_edit(project.clone()).await.unwrap();
    assert_eq!(
        handle.snapshot().await.unwrap().form.target(),
        Some(&project)
    );

    let mut draft = ProjectDraft::from(&project);
    draft.title = "New".into();
    handle.submit_form(draft, Some(project)).await.unwrap();

    let view = handle.snapshot().await.unwrap();
    assert_eq!(titles(&view.projects), vec!["New"]);
    assert_eq!(view.form, FormState::Closed);
    mock.verify();
}

#[tokio::test]
async fn test_failed_save_keeps_form_open() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}]));
    mock.expect(Method::Post, "/api/projects").return_status(422);
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));
    handle.initialize().await.unwrap();
    handle.request_create().await.unwrap();

    let result = handle.submit_form(ProjectDraft::new("", ""), None).await;

    assert!(matches!(
        result,
        Err(ControllerError::Api(ApiError::Status { status: 422, .. }))
    ));
    let view = handle.snapshot().await.unwrap();
    assert_eq!(view.form, FormState::CreatingNew);
    assert_eq!(titles(&view.projects), vec!["A"]);
    assert_eq!(mock.requests().len(), 2);
    mock.verify();
}

#[tokio::test]
async fn test_failed_refresh_keeps_collection_and_closes_form() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}]));
    mock.expect(Method::Post, "/api/projects").return_status(201);
    mock.expect(Method::Get, "/api/projects")
        .return_err(ApiError::Transport("reset".into()));
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));
    handle.initialize().await.unwrap();
    handle.request_create().await.unwrap();

    handle.submit_form(ProjectDraft::new("B", ""), None).await.unwrap();

    let view = handle.snapshot().await.unwrap();
    assert_eq!(titles(&view.projects), vec!["A"]);
    assert_eq!(view.form, FormState::Closed);
}

#[tokio::test]
async fn test_submit_without_open_form_is_rejected() {
    let mock = MockTransport::new();
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));

    let result = handle.submit_form(ProjectDraft::new("A", ""), None).await;

    assert!(matches!(result, Err(ControllerError::FormClosed)));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_cancel_closes_form_without_requests() {
    let mock = MockTransport::new();
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));

    handle.request_create().await.unwrap();
    handle.cancel_form().await.unwrap();

    assert_eq!(handle.snapshot().await.unwrap().form, FormState::Closed);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_operations_refused_while_saving() {
    let mock = MockTransport::new();
    let (release, hold) = oneshot::channel();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}]));
    mock.expect(Method::Post, "/api/projects")
        .hold_until(hold)
        .return_status(201);
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]));
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));
    handle.initialize().await.unwrap();
    handle.request_create().await.unwrap();

    let saving = tokio::spawn({
        let handle = handle.clone();
        async move { handle.submit_form(ProjectDraft::new("B", ""), None).await }
    });
    wait_for_requests(&mock, 2).await;

    let view = handle.snapshot().await.unwrap();
    assert_eq!(view.in_flight, Some(Operation::Saving));

    let second = handle.submit_form(ProjectDraft::new("C", ""), None).await;
    assert!(matches!(second, Err(ControllerError::Busy(Operation::Saving))));

    let delete = handle.request_delete(ProjectId::from("1")).await;
    assert!(matches!(delete, Err(ControllerError::Busy(Operation::Saving))));

    let cancel = handle.cancel_form().await;
    assert!(matches!(cancel, Err(ControllerError::Busy(Operation::Saving))));

    release.send(()).unwrap();
    saving.await.unwrap().unwrap();

    let view = handle.snapshot().await.unwrap();
    assert_eq!(titles(&view.projects), vec!["A", "B"]);
    assert!(view.in_flight.is_none());
    assert_eq!(view.form, FormState::Closed);
    mock.verify();
}

#[tokio::test]
async fn test_form_can_open_while_deleting() {
    let mock = MockTransport::new();
    let (release, hold) = oneshot::channel();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}]));
    mock.expect(Method::Delete, "/api/projects/1")
        .hold_until(hold)
        .return_status(204);
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));
    handle.initialize().await.unwrap();

    let deleting = tokio::spawn({
        let handle = handle.clone();
        async move { handle.request_delete(ProjectId::from("1")).await }
    });
    wait_for_requests(&mock, 2).await;

    assert_eq!(
        handle.snapshot().await.unwrap().in_flight,
        Some(Operation::Deleting(ProjectId::from("1")))
    );
    handle.request_create().await.unwrap();

    release.send(()).unwrap();
    let outcome = deleting.await.unwrap().unwrap();

    assert_eq!(outcome, DeleteOutcome::Removed { redirected: false });
    let view = handle.snapshot().await.unwrap();
    assert!(view.projects.is_empty());
    assert_eq!(view.form, FormState::CreatingNew);
}

#[tokio::test]
async fn test_unparseable_refresh_keeps_collection() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]));
    mock.expect(Method::Post, "/api/projects").return_status(201);
    mock.expect(Method::Get, "/api/projects")
        .return_body(502, "<html>Bad Gateway</html>");
    let handle = start(&mock, true, Arc::new(MemoryNavigator::default()));
    handle.initialize().await.unwrap();
    handle.request_create().await.unwrap();

    handle.submit_form(ProjectDraft::new("C", ""), None).await.unwrap();

    let view = handle.snapshot().await.unwrap();
    assert_eq!(titles(&view.projects), vec!["A", "B"]);
    assert_eq!(view.form, FormState::Closed);
    mock.verify();
}

#[tokio::test]
async fn test_panicked_save_clears_in_flight_and_shuts_down() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}]));
    // No expectation for the POST: the mock panics inside the save task.
    let (controller, handle) = ProjectListController::new(8);
    let task = tokio::spawn(controller.run(ControllerContext {
        client: ProjectClient::from_transport(Arc::new(mock.clone())),
        confirm: Arc::new(FixedAnswer(true)),
        navigator: Arc::new(MemoryNavigator::default()),
    }));
    handle.initialize().await.unwrap();
    handle.request_create().await.unwrap();

    let result = handle.submit_form(ProjectDraft::new("B", ""), None).await;
    assert!(matches!(result, Err(ControllerError::Dropped)));

    wait_until_idle(&handle).await;
    let view = handle.snapshot().await.unwrap();
    assert_eq!(titles(&view.projects), vec!["A"]);
    assert_eq!(view.form, FormState::CreatingNew);

    drop(handle);
    tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("controller did not shut down")
        .unwrap();
}

#[tokio::test]
async fn test_open_prompt_does_not_block_snapshots() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/api/projects")
        .return_json(200, &json!([{"id": 1, "title": "A"}]));
    mock.expect(Method::Delete, "/api/projects/1").return_status(204);
    let (answer, pending) = oneshot::channel();
    let (controller, handle) = ProjectListController::new(8);
    tokio::spawn(controller.run(ControllerContext {
        client: ProjectClient::from_transport(Arc::new(mock.clone())),
        confirm: Arc::new(PendingAnswer(Mutex::new(Some(pending)))),
        navigator: Arc::new(MemoryNavigator::default()),
    }));
    handle.initialize().await.unwrap();

    let deleting = tokio::spawn({
        let handle = handle.clone();
        async move { handle.request_delete(ProjectId::from("1")).await }
    });

    let mut view = handle.snapshot().await.unwrap();
    for _ in 0..200 {
        if view.in_flight.is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
        view = handle.snapshot().await.unwrap();
    }
    assert_eq!(view.in_flight, Some(Operation::Deleting(ProjectId::from("1"))));
    assert_eq!(view.projects.len(), 1);
    assert_eq!(mock.requests().len(), 1);

    answer.send(true).unwrap();
    let outcome = deleting.await.unwrap().unwrap();

    assert_eq!(outcome, DeleteOutcome::Removed { redirected: false });
    assert!(handle.snapshot().await.unwrap().projects.is_empty());
    mock.verify();
}
