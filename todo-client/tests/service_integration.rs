//! NetworkTodoService and controllers against a live mock backend

use std::net::SocketAddr;

use todo_client::list::SERVER_PROBLEM_MESSAGE;
use todo_client::{
    AddTodo, ClientConfig, ClientError, NetworkTodoService, NewTodo, RecordingNotifier,
    SubmitError, TodoList, TodoQuery, TodoService,
};
use todo_client::Todo;
use todo_mock::AppState;

async fn start() -> (AppState, NetworkTodoService) {
    let state = AppState::with_fixtures();
    let (addr, _handle) = todo_mock::spawn(state.clone()).await.unwrap();
    (state, service_at(addr))
}

fn service_at(addr: SocketAddr) -> NetworkTodoService {
    ClientConfig::new(format!("http://{addr}/api"))
        .with_timeout(5)
        .build_service()
        .unwrap()
}

#[tokio::test]
async fn test_owner_query_string() {
    let (state, service) = start().await;
    let todos = service
        .get_todos(Some(&TodoQuery::default().owner("roberta")))
        .await
        .unwrap();
    assert!(todos.is_empty());
    assert_eq!(state.last_query().await.as_deref(), Some("owner=roberta"));
}

#[tokio::test]
async fn test_body_and_status_query_string() {
    let (state, service) = start().await;
    let query = TodoQuery::default().body("Hello").status("incomplete");
    service.get_todos(Some(&query)).await.unwrap();
    assert_eq!(
        state.last_query().await.as_deref(),
        Some("body=Hello&status=incomplete")
    );
}

#[tokio::test]
async fn test_no_query_string() {
    let (state, service) = start().await;
    let todos = service.get_todos(None).await.unwrap();
    assert_eq!(todos.len(), 5);
    assert_eq!(state.last_query().await, None);

    // Empty criteria are dropped entirely
    let query = TodoQuery::default().owner("").limit(0);
    service.get_todos(Some(&query)).await.unwrap();
    assert_eq!(state.last_query().await, None);
}

#[tokio::test]
async fn test_get_by_id() {
    let (_state, service) = start().await;
    let todo = service.get_todo_by_id("sam_id").await.unwrap();
    assert_eq!(todo.owner, "Sam");
    assert_eq!(todo.category, "video games");

    let err = service.get_todo_by_id("missing").await.unwrap_err();
    match err {
        ClientError::NotFound(msg) => assert_eq!(msg, "The requested todo was not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_by_id_with_reserved_characters() {
    let ids = ["a?b", "x/y", "c#d", "with space"];
    let todos = ids
        .iter()
        .map(|id| Todo {
            id: id.to_string(),
            owner: "Roberta".into(),
            status: true,
            body: format!("Stored under {id}"),
            category: "chores".into(),
        })
        .collect();
    let state = AppState::new(todos);
    let (addr, _handle) = todo_mock::spawn(state).await.unwrap();
    let service = service_at(addr);

    for id in ids {
        let todo = service.get_todo_by_id(id).await.unwrap();
        assert_eq!(todo.id, id);
        assert_eq!(todo.body, format!("Stored under {id}"));
    }
}

#[tokio::test]
async fn test_backend_rejection_is_validation_error() {
    let (_state, service) = start().await;
    let err = service
        .get_todos(Some(&TodoQuery::default().status("done")))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_add_round_trip() {
    let (state, service) = start().await;
    let draft = NewTodo::new("Roberta", "Water the plants", "incomplete", "chores");
    let id = service.add_todo(&draft).await.unwrap();

    let stored = service.get_todo_by_id(&id).await.unwrap();
    assert_eq!(stored.owner, "Roberta");
    assert!(!stored.status);
    assert_eq!(state.todos().await.len(), 6);
}

#[tokio::test]
async fn test_add_controller_against_backend() {
    let (_state, service) = start().await;
    let add = AddTodo::new(service, RecordingNotifier::new());

    let draft = NewTodo::new("Roberta", "Water the plants", "complete", "chores");
    let path = add.submit(&draft).await.unwrap();
    assert!(path.starts_with("/todos/"));
    assert_eq!(add.notifier().last().unwrap().message, "Added todo Roberta");

    let bad = NewTodo::new("Roberta", "Hi", "complete", "chores");
    assert!(matches!(
        add.submit(&bad).await,
        Err(SubmitError::Invalid(_))
    ));
}

#[tokio::test]
async fn test_list_controller_against_backend() {
    let (_state, service) = start().await;
    let mut list = TodoList::new(service, RecordingNotifier::new());
    list.owner = Some("egg".into());
    list.category = Some("COOL".into());

    assert!(list.refresh().await);
    assert_eq!(list.server_filtered().len(), 2);
    assert_eq!(list.filtered().len(), 1);
    assert_eq!(list.filtered()[0].id, "egg2_id");
    assert!(list.notifier().notifications().is_empty());
}

#[tokio::test]
async fn test_unreachable_backend() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let service = service_at(addr);

    let err = service.get_todos(None).await.unwrap_err();
    assert!(err.is_transport());

    let mut list = TodoList::new(service, RecordingNotifier::new());
    assert!(!list.refresh().await);
    assert!(list.filtered().is_empty());

    let notes = list.notifier().notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].message, SERVER_PROBLEM_MESSAGE);
    assert_eq!(notes[0].action.as_deref(), Some("OK"));
}
