//! HTTP client core shared by every resource client.
//!
//! Builds absolute URLs, attaches the bearer token from the [`SessionStore`],
//! encodes JSON bodies and turns every failure into a single [`ApiError`].

pub mod transport;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    error::{body_excerpt, normalize_error_body, ApiError, ApiResult},
    services::session::SessionStore,
};

pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};

const JSON: &str = "application/json";
const FORM: &str = "application/x-www-form-urlencoded";

#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    base_url: Arc<str>,
    session: SessionStore,
}

impl HttpClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: &str, session: SessionStore) -> Self {
        Self {
            transport,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.execute(Method::GET, path, None).await?;
        decode_json(response).inspect_err(|e| log_failure(&Method::GET, path, e))
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::POST, path, Some(encode(body)?)).await?;
        decode_json(response).inspect_err(|e| log_failure(&Method::POST, path, e))
    }

    /// POST without a request body (query-string endpoints)
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.execute(Method::POST, path, None).await?;
        decode_json(response).inspect_err(|e| log_failure(&Method::POST, path, e))
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::PUT, path, Some(encode(body)?)).await?;
        decode_json(response).inspect_err(|e| log_failure(&Method::PUT, path, e))
    }

    /// DELETE; success carries no value
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.execute(Method::DELETE, path, None).await?;
        decode_empty(response).inspect_err(|e| log_failure(&Method::DELETE, path, e))
    }

    /// Form-encoded POST returning the raw response.
    ///
    /// Used for the login exchange, whose contract differs from the JSON
    /// endpoints; the caller interprets transport failures and the body.
    /// No bearer token is attached.
    pub async fn send_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let request = self.build(Method::POST, path, None, Some((FORM, body.into_bytes())));
        tracing::debug!(method = "POST", path, "Sending form request");
        self.transport.send(request).await
    }

    fn build(
        &self,
        method: Method,
        path: &str,
        bearer: Option<HeaderValue>,
        body: Option<(&'static str, Vec<u8>)>,
    ) -> HttpRequest {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));

        if let Some(value) = bearer {
            headers.insert(AUTHORIZATION, value);
        }

        let body = body.map(|(content_type, bytes)| {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
            bytes
        });

        HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        }
    }

    /// Authorization value for the stored token, if any
    fn bearer(&self) -> ApiResult<Option<HeaderValue>> {
        let Some(token) = self.session.token() else {
            return Ok(None);
        };

        HeaderValue::from_str(&format!("Bearer {}", token))
            .map(Some)
            .map_err(|_| ApiError::protocol(0, "Stored token cannot be sent in an Authorization header"))
    }

    async fn execute(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> ApiResult<HttpResponse> {
        let bearer = self
            .bearer()
            .inspect_err(|e| log_failure(&method, path, e))?;
        let request = self.build(method.clone(), path, bearer, body.map(|b| (JSON, b)));
        tracing::debug!(
            method = %method,
            path,
            authenticated = request.headers.contains_key(AUTHORIZATION),
            "Sending API request"
        );

        self.transport.send(request).await.map_err(|e| {
            let err = ApiError::network(format!("Network error: {}", e));
            log_failure(&method, path, &err);
            err
        })
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> ApiResult<Vec<u8>> {
    serde_json::to_vec(body)
        .map_err(|e| ApiError::protocol(0, format!("Failed to encode request body: {}", e)))
}

/// Parse a JSON response, then check the status, then decode into `T`
pub(crate) fn decode_json<T: DeserializeOwned>(response: HttpResponse) -> ApiResult<T> {
    let status = response.status;
    let value: Value = serde_json::from_slice(&response.body).map_err(|_| {
        ApiError::protocol(
            status,
            format!("Unexpected non-JSON response: {}", body_excerpt(&response.body)),
        )
    })?;

    if !response.is_success() {
        return Err(normalize_error_body(status, &value));
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::protocol(status, format!("Unexpected response shape: {}", e)))
}

fn decode_empty(response: HttpResponse) -> ApiResult<()> {
    if response.is_success() {
        return Ok(());
    }

    let status = response.status;
    match serde_json::from_slice::<Value>(&response.body) {
        Ok(value) => Err(normalize_error_body(status, &value)),
        Err(_) => Err(ApiError::application(status, format!("Status {}", status))),
    }
}

fn log_failure(method: &Method, path: &str, err: &ApiError) {
    tracing::warn!(
        method = %method,
        path,
        status = err.status_code,
        kind = ?err.kind,
        "API request failed: {}",
        err.message
    );
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn json_response(status: u16, body: Value) -> HttpResponse {
        HttpResponse {
            status,
            content_type: Some(JSON.to_string()),
            body: body.to_string().into_bytes(),
        }
    }

    pub fn raw_response(status: u16, content_type: Option<&str>, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn client_with(transport: transport::MockTransport, session: SessionStore) -> HttpClient {
        HttpClient::new(Arc::new(transport), "http://api.test/", session)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::transport::MockTransport;
    use super::*;
    use crate::error::ApiErrorKind;
    use crate::models::{auth::Role, Book};
    use serde_json::json;

    #[tokio::test]
    async fn test_bearer_token_is_attached() {
        let session = SessionStore::in_memory();
        session.set_session("tok-1", Some(Role::Customer), None).unwrap();

        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == Method::GET
                    && req.url == "http://api.test/book/1"
                    && req.headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) == Some("Bearer tok-1")
                    && req.body.is_none()
            })
            .times(1)
            .returning(|_| Ok(json_response(200, json!({"book_id": 1, "b_name": "Dune", "topic": null}))));

        let client = client_with(transport, session);
        let book: Book = client.get("/book/1").await.unwrap();
        assert_eq!(book.b_name, "Dune");
    }

    #[tokio::test]
    async fn test_no_token_sends_unauthenticated() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| !req.headers.contains_key(AUTHORIZATION))
            .times(1)
            .returning(|_| Ok(json_response(200, json!([]))));

        let client = client_with(transport, SessionStore::in_memory());
        let books: Vec<Book> = client.get("/book/").await.unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_json_body_and_content_type() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                let body: Value = serde_json::from_slice(req.body.as_deref().unwrap_or_default()).unwrap();
                req.method == Method::POST
                    && req.headers.get(CONTENT_TYPE).map(|v| v.as_bytes()) == Some(JSON.as_bytes())
                    && body == json!({"b_name": "Dune"})
            })
            .times(1)
            .returning(|_| Ok(json_response(201, json!({"book_id": 9, "b_name": "Dune"}))));

        let client = client_with(transport, SessionStore::in_memory());
        let book: Book = client.post("/book/", &json!({"b_name": "Dune"})).await.unwrap();
        assert_eq!(book.book_id, 9);
        assert_eq!(book.topic, None);
    }

    #[tokio::test]
    async fn test_non_2xx_uses_detail() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(json_response(404, json!({"detail": "Book not found"}))));

        let client = client_with(transport, SessionStore::in_memory());
        let err = client.get::<Book>("/book/42").await.unwrap_err();
        assert_eq!(err.message, "Book not found");
        assert_eq!(err.status_code, 404);
        assert_eq!(err.kind, ApiErrorKind::Application);
    }

    #[tokio::test]
    async fn test_html_error_page_is_protocol_error() {
        let page = format!("<!DOCTYPE html><html><body>{}</body></html>", "x".repeat(300));
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(move |_| Ok(raw_response(502, Some("text/html"), &page)));

        let client = client_with(transport, SessionStore::in_memory());
        let err = client.get::<Value>("/book/").await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Protocol);
        assert_eq!(err.status_code, 502);
        assert!(err.message.starts_with("Unexpected non-JSON response: <!DOCTYPE html>"));
        assert!(err.message.len() < 160);
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_protocol_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(json_response(200, json!({"unexpected": true}))));

        let client = client_with(transport, SessionStore::in_memory());
        let err = client.get::<Book>("/book/1").await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Protocol);
        assert!(err.message.starts_with("Unexpected response shape"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|req| Err(TransportError::Connect(req.url)));

        let client = client_with(transport, SessionStore::in_memory());
        let err = client.delete("/book/1").await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Network);
        assert_eq!(err.status_code, 0);
        assert_eq!(err.message, "Network error: cannot connect to http://api.test/book/1");
    }

    #[tokio::test]
    async fn test_delete_without_body() {
        let mut transport = MockTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(raw_response(204, None, "")));
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(raw_response(404, None, "")));
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(json_response(403, json!({"detail": "Only admin can delete books"}))));

        let client = client_with(transport, SessionStore::in_memory());
        tokio_test::assert_ok!(client.delete("/book/1").await);

        let err = client.delete("/book/2").await.unwrap_err();
        assert_eq!(err.message, "Status 404");

        let err = client.delete("/book/3").await.unwrap_err();
        assert_eq!(err.message, "Only admin can delete books");
        assert_eq!(err.status_code, 403);
    }

    #[tokio::test]
    async fn test_unsendable_token_fails_instead_of_going_out_anonymous() {
        let session = SessionStore::in_memory();
        session.set_session("bad\ntoken", Some(Role::Customer), None).unwrap();

        let mut transport = MockTransport::new();
        transport.expect_send().never();

        let client = client_with(transport, session);
        let err = client.get::<Value>("/book/").await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Protocol);
        assert_eq!(err.message, "Stored token cannot be sent in an Authorization header");
    }

    #[tokio::test]
    async fn test_send_form_encodes_fields() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.headers.get(CONTENT_TYPE).map(|v| v.as_bytes()) == Some(FORM.as_bytes())
                    && req.body.as_deref() == Some("username=alice%40example.com&password=p%26ss%20word".as_bytes())
            })
            .times(1)
            .returning(|_| Ok(json_response(200, json!({}))));

        let client = client_with(transport, SessionStore::in_memory());
        let response = client
            .send_form("/login", &[("username", "alice@example.com"), ("password", "p&ss word")])
            .await
            .unwrap();
        assert!(response.is_success());
    }
}
