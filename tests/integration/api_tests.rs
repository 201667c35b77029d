//! End-to-end tests against an in-process mock of the library API

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use hzs_library_client::{
    http::ReqwestTransport,
    models::{
        auth::Role,
        book::{BookCopyCreate, CopyStatus},
    },
    routes::Navigation,
    services::{FileStorage, MemoryStorage, SessionStorage},
    ApiErrorKind, AppConfig, LibraryClient,
};

#[derive(Default)]
struct MockApi {
    seen_auth: Mutex<Vec<Option<String>>>,
    copies: Mutex<Vec<Value>>,
}

fn admin_token() -> String {
    encode(
        &Header::default(),
        &json!({"user_id": 1, "role": "admin"}),
        &EncodingKey::from_secret(b"server-secret"),
    )
    .unwrap()
}

async fn login(Form(form): Form<HashMap<String, String>>) -> Response {
    let username = form.get("username").map(String::as_str);
    let password = form.get("password").map(String::as_str);

    match (username, password) {
        (Some("alice@example.com"), Some("secret")) => {
            Json(json!({"access_token": "abc123", "token_type": "bearer"})).into_response()
        }
        (Some("admin@example.com"), Some("secret")) => Json(json!({
            "access_token": admin_token(),
            "token_type": "bearer",
            "f_name": "Ada",
            "l_name": "Admin"
        }))
        .into_response(),
        _ => (StatusCode::FORBIDDEN, Json(json!({"detail": "Invalid Credentials"}))).into_response(),
    }
}

async fn get_book(State(api): State<Arc<MockApi>>, Path(id): Path<i64>, headers: HeaderMap) -> Response {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    api.seen_auth.lock().push(auth);

    Json(json!({"book_id": id, "b_name": "The Left Hand of Darkness", "topic": "Fiction"})).into_response()
}

async fn delete_book(Path(id): Path<i64>) -> Response {
    if id == 42 {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Book not found"}))).into_response();
    }
    Json(json!({"message": "Book deleted"})).into_response()
}

async fn add_copy(State(api): State<Arc<MockApi>>, Path(id): Path<i64>, Json(body): Json<Value>) -> Response {
    let mut copies = api.copies.lock();
    let copy = json!({"copy_id": copies.len() as i64 + 1, "book_id": id, "status": body["status"]});
    copies.push(copy.clone());
    (StatusCode::CREATED, Json(copy)).into_response()
}

async fn list_copies(State(api): State<Arc<MockApi>>, Path(id): Path<i64>) -> Response {
    let copies: Vec<Value> = api
        .copies
        .lock()
        .iter()
        .filter(|c| c["book_id"] == id)
        .cloned()
        .collect();
    Json(copies).into_response()
}

async fn broken() -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Html("<html><body><h1>502 Bad Gateway</h1></body></html>"),
    )
        .into_response()
}

async fn spawn_api() -> (String, Arc<MockApi>) {
    let state = Arc::new(MockApi::default());
    let app = Router::new()
        .route("/login", post(login))
        .route("/book/:id", get(get_book).delete(delete_book))
        .route("/book/:id/copy", post(add_copy))
        .route("/book/:id/copies", get(list_copies))
        .route("/broken", get(broken))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

fn client(base_url: &str, storage: Arc<dyn SessionStorage>) -> LibraryClient {
    let mut config = AppConfig::default();
    config.api.base_url = base_url.to_string();

    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    LibraryClient::with_parts(config, Arc::new(ReqwestTransport::with_client(http)), storage).unwrap()
}

fn memory_client(base_url: &str) -> LibraryClient {
    client(base_url, Arc::new(MemoryStorage::default()))
}

#[tokio::test]
async fn test_login_without_role_claim_is_denied_by_role_guard() {
    let (base, _) = spawn_api().await;
    let client = memory_client(&base);

    let outcome = client.auth.login("alice@example.com", "secret").await.unwrap();
    assert_eq!(outcome.token, "abc123");
    assert_eq!(outcome.role, None);
    assert_eq!(client.session.token().as_deref(), Some("abc123"));

    // Authenticated pages open, role-gated ones send the user to the landing page
    assert_eq!(
        client.routes.navigate("/books", &client.session),
        Navigation::Render("books".into())
    );
    match client.routes.navigate("/admin", &client.session) {
        Navigation::Redirect(redirect) => assert_eq!(redirect.to, "/home"),
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_admin_login_decodes_role() {
    let (base, _) = spawn_api().await;
    let client = memory_client(&base);

    let outcome = client.auth.login("admin@example.com", "secret").await.unwrap();
    assert_eq!(outcome.role, Some(Role::Admin));
    assert_eq!(client.session.display_name(), "Ada Admin");
    assert_eq!(
        client.routes.navigate("/rooms", &client.session),
        Navigation::Render("rooms".into())
    );
}

#[tokio::test]
async fn test_rejected_login_keeps_guest_session() {
    let (base, _) = spawn_api().await;
    let client = memory_client(&base);

    let err = client.auth.login("alice@example.com", "wrong").await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.status_code, 403);
    assert_eq!(api.message, "Invalid Credentials");
    assert!(!client.session.is_authenticated());
}

#[tokio::test]
async fn test_bearer_header_follows_session() {
    let (base, api) = spawn_api().await;
    let client = memory_client(&base);

    client.api.books.get(1).await.unwrap();
    client.auth.login("alice@example.com", "secret").await.unwrap();
    client.api.books.get(1).await.unwrap();
    client.auth.logout().unwrap();
    client.api.books.get(1).await.unwrap();

    assert_eq!(
        *api.seen_auth.lock(),
        vec![None, Some("Bearer abc123".to_string()), None]
    );
}

#[tokio::test]
async fn test_delete_missing_book_surfaces_detail() {
    let (base, _) = spawn_api().await;
    let client = memory_client(&base);

    let err = client.api.books.delete(42).await.unwrap_err();
    assert_eq!(err.to_string(), "Book not found");
    assert_eq!(err.status_code, 404);
    assert_eq!(err.kind, ApiErrorKind::Application);

    assert!(client.api.books.delete(7).await.is_ok());
}

#[tokio::test]
async fn test_added_copy_is_listed() {
    let (base, _) = spawn_api().await;
    let client = memory_client(&base);

    let copy = client
        .api
        .books
        .add_copy(7, &BookCopyCreate { status: CopyStatus::Available })
        .await
        .unwrap();
    assert_eq!(copy.book_id, 7);

    let copies = client.api.books.copies(7).await.unwrap();
    assert!(copies
        .iter()
        .any(|c| c.book_id == 7 && c.status == "AVAILABLE" && c.is_available()));
    assert!(client.api.books.copies(8).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_html_error_page_is_a_protocol_error() {
    let (base, _) = spawn_api().await;
    let client = memory_client(&base);

    let err = client.http.get::<Value>("/broken").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Protocol);
    assert_eq!(err.status_code, 502);
    assert!(err.message.starts_with("Unexpected non-JSON response: <html>"));
}

#[tokio::test]
async fn test_unreachable_api_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = memory_client(&format!("http://{}", addr));

    let err = client.api.books.list().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.status_code, 0);
    assert!(err.message.starts_with("Network error"));

    let err = client.auth.login("alice@example.com", "secret").await.unwrap_err();
    assert!(err
        .as_api()
        .unwrap()
        .message
        .starts_with("Network error during login"));
}

#[tokio::test]
async fn test_session_file_survives_restart_until_logout() {
    let (base, _) = spawn_api().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let first = client(&base, Arc::new(FileStorage::new(&path)));
    first.auth.login("admin@example.com", "secret").await.unwrap();
    drop(first);

    let second = client(&base, Arc::new(FileStorage::new(&path)));
    assert_eq!(second.session.role(), Some(Role::Admin));
    assert_eq!(second.session.display_name(), "Ada Admin");

    let redirect = second.auth.logout().unwrap();
    assert_eq!(redirect.to, "/login");
    assert!(!path.exists());

    let third = client(&base, Arc::new(FileStorage::new(&path)));
    assert!(!third.session.is_authenticated());
    match third.routes.navigate("/invoices", &third.session) {
        Navigation::Redirect(redirect) => {
            assert_eq!(redirect.to, "/login");
            assert_eq!(redirect.from.as_deref(), Some("/invoices"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_unreadable_session_file_still_allows_commands() {
    let (base, _) = spawn_api().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"token":"abc","role":"librarian"}"#).unwrap();

    let client = client(&base, Arc::new(FileStorage::new(&path)));
    assert!(!client.session.is_authenticated());

    client.auth.login("alice@example.com", "secret").await.unwrap();
    assert_eq!(client.session.token().as_deref(), Some("abc123"));
    client.auth.logout().unwrap();
    assert!(!path.exists());
}
