use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rolodex_core::repository::Result as RepoResult;
use rolodex_core::{Contact, ContactId, ContactManager, ContactRecord, Repository, StorageError};
use rolodex_gateway::{App, AppState};
use rolodex_storage::InMemoryRepository;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    app_with(InMemoryRepository::new())
}

fn app_with<R: Repository>(repository: R) -> Router {
    App::router(AppState::new(Arc::new(ContactManager::new(repository))))
}

/// Repository that fails every call, standing in for a lost connection.
struct UnavailableRepository;

#[async_trait]
impl Repository for UnavailableRepository {
    async fn insert(&self, _contact: Contact) -> RepoResult<ContactId> {
        Err(StorageError::Unavailable("connection reset by peer".to_string()))
    }

    async fn find_all(&self) -> RepoResult<Vec<ContactRecord>> {
        Err(StorageError::Unavailable("connection reset by peer".to_string()))
    }

    async fn update_by_id(&self, _id: &ContactId, _contact: Contact) -> RepoResult<u64> {
        Err(StorageError::Unavailable("connection reset by peer".to_string()))
    }

    async fn delete_by_id(&self, _id: &ContactId) -> RepoResult<u64> {
        Err(StorageError::Unavailable("connection reset by peer".to_string()))
    }
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn ann() -> Value {
    json!({"name": "Ann", "age": 30, "mobile": "555-0100", "email": "ann@x.com"})
}

async fn create(app: &Router, payload: Value) -> String {
    let (status, body) = send(app, Method::POST, "/contacts/", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_str().unwrap().to_string()
}

async fn list(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, Method::GET, "/contacts/", None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().clone()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn create_returns_id_and_message() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/contacts/", Some(ann())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Contact created successfully");
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn create_then_list_includes_contact() {
    let app = app();
    let id = create(&app, ann()).await;

    let contacts = list(&app).await;

    assert_eq!(
        contacts,
        vec![json!({
            "id": id,
            "name": "Ann",
            "age": 30,
            "mobile": "555-0100",
            "email": "ann@x.com",
        })]
    );
}

#[tokio::test]
async fn list_on_empty_collection() {
    assert!(list(&app()).await.is_empty());
}

#[tokio::test]
async fn route_without_trailing_slash() {
    let app = app();
    let (status, _) = send(&app, Method::POST, "/contacts", Some(ann())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/contacts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn client_supplied_id_is_ignored_on_create() {
    let app = app();
    let mut payload = ann();
    payload["id"] = json!("client-chosen");

    let id = create(&app, payload).await;

    assert_ne!(id, "client-chosen");
    assert_eq!(list(&app).await[0]["id"], id);
}

#[tokio::test]
async fn create_rejects_wrong_types_without_storing() {
    let app = app();

    for payload in [
        json!({"name": "Ann", "age": "thirty", "mobile": "555-0100", "email": "ann@x.com"}),
        json!({"name": "Ann", "age": 30.5, "mobile": "555-0100", "email": "ann@x.com"}),
        json!({"name": 7, "age": 30, "mobile": "555-0100", "email": "ann@x.com"}),
        json!({"name": "Ann", "age": 30, "mobile": "555-0100"}),
        json!([]),
    ] {
        let (status, body) = send(&app, Method::POST, "/contacts/", Some(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn create_rejects_malformed_json() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/contacts/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let app = app();
    let id = create(&app, ann()).await;
    let replacement = json!({"name": "Bob", "age": 41, "mobile": "555-0199", "email": "bob@y.org"});

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/contacts/{id}"),
        Some(replacement),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Contact updated successfully"}));
    assert_eq!(
        list(&app).await,
        vec![json!({
            "id": id,
            "name": "Bob",
            "age": 41,
            "mobile": "555-0199",
            "email": "bob@y.org",
        })]
    );
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let app = app();
    create(&app, ann()).await;
    let before = list(&app).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/contacts/ffffffffffffffffffffffff",
        Some(json!({"name": "Bob", "age": 41, "mobile": "555-0199", "email": "bob@y.org"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Contact not found"}));
    assert_eq!(list(&app).await, before);
}

#[tokio::test]
async fn update_rejects_invalid_payload() {
    let app = app();
    let id = create(&app, ann()).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/contacts/{id}"),
        Some(json!({"name": "Bob"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(list(&app).await[0]["name"], "Ann");
}

#[tokio::test]
async fn update_with_malformed_id_is_server_error() {
    let (status, body) = send(&app(), Method::PUT, "/contacts/not-an-id", Some(ann())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Error updating contact"}));
}

#[tokio::test]
async fn undecodable_id_is_server_error() {
    let app = app();
    create(&app, ann()).await;

    let (status, body) = send(&app, Method::PUT, "/contacts/%FF", Some(ann())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Error updating contact"}));

    let (status, body) = send(&app, Method::DELETE, "/contacts/%FF", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Error deleting contact"}));

    assert_eq!(list(&app).await[0]["name"], "Ann");
}

#[tokio::test]
async fn delete_then_list_excludes_contact() {
    let app = app();
    let id = create(&app, ann()).await;
    let kept = create(
        &app,
        json!({"name": "Bob", "age": 41, "mobile": "555-0199", "email": "bob@y.org"}),
    )
    .await;

    let (status, body) = send(&app, Method::DELETE, &format!("/contacts/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Contact deleted successfully"}));
    let ids: Vec<Value> = list(&app).await.into_iter().map(|c| c["id"].clone()).collect();
    assert_eq!(ids, vec![json!(kept)]);
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let app = app();
    create(&app, ann()).await;

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/contacts/ffffffffffffffffffffffff",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Contact not found"}));
    assert_eq!(list(&app).await.len(), 1);
}

#[tokio::test]
async fn delete_twice_is_not_found() {
    let app = app();
    let id = create(&app, ann()).await;
    let uri = format!("/contacts/{id}");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_with_malformed_id_is_server_error() {
    let (status, body) = send(&app(), Method::DELETE, "/contacts/xyz", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Error deleting contact"}));
}

#[tokio::test]
async fn storage_failures_return_fixed_messages() {
    let app = app_with(UnavailableRepository);
    let id = "ffffffffffffffffffffffff";

    let cases = [
        (Method::POST, "/contacts/".to_string(), Some(ann()), "Error creating contact"),
        (Method::GET, "/contacts/".to_string(), None, "Error retrieving contacts"),
        (Method::PUT, format!("/contacts/{id}"), Some(ann()), "Error updating contact"),
        (Method::DELETE, format!("/contacts/{id}"), None, "Error deleting contact"),
    ];

    for (method, uri, body, detail) in cases {
        let (status, response) = send(&app, method, &uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response, json!({"detail": detail}));
    }
}

#[tokio::test]
async fn concurrent_creates_are_all_listed() {
    let app = app();
    let mut handles = vec![];

    for i in 0..16 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let payload = json!({
                "name": format!("user{i}"),
                "age": 20 + i,
                "mobile": "555-0100",
                "email": format!("user{i}@x.com"),
            });
            create(&app, payload).await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 16);
    assert_eq!(list(&app).await.len(), 16);
}
