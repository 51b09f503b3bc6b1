// src/tests/utils.rs

use crate::config::AppConfig;
use crate::router::{handle, AppState};
use astra::{Body, Request};
use std::collections::HashMap;
use std::env::VarError;
use std::io::Read;

/// What a route test looks at once the handler has run.
pub struct TestResponse {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

/// App state pointed at a mock directory API.
pub fn test_state(api_base: &str) -> AppState {
    let vars = HashMap::from([("NEARBY_API_BASE_URL".to_string(), api_base.to_string())]);
    let config = AppConfig::from_lookup(|key| vars.get(key).cloned().ok_or(VarError::NotPresent))
        .expect("test config should load");
    AppState::new(config).expect("test state should build")
}

pub fn request(method: &str, uri: &str, content_type: Option<&str>, body: String) -> Request {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }
    builder.body(Body::from(body)).expect("valid test request")
}

/// Run one request through the router on a blocking thread.
///
/// The blocking HTTP client must not be created or dropped on an async
/// worker, so the whole app state lives inside the blocking task.
pub async fn send(api_base: String, method: &'static str, uri: &'static str) -> TestResponse {
    send_form(api_base, method, uri, None, String::new()).await
}

/// Like `send`, with a request body.
pub async fn send_form(
    api_base: String,
    method: &'static str,
    uri: &'static str,
    content_type: Option<&'static str>,
    body: String,
) -> TestResponse {
    tokio::task::spawn_blocking(move || {
        let state = test_state(&api_base);
        let mut resp = match handle(request(method, uri, content_type, body), &state) {
            Ok(resp) => resp,
            Err(err) => crate::responses::html_error_response(err),
        };

        let location = resp
            .headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let mut body = String::new();
        resp.body_mut()
            .reader()
            .read_to_string(&mut body)
            .expect("readable body");

        TestResponse {
            status: resp.status().as_u16(),
            location,
            body,
        }
    })
    .await
    .expect("blocking task panicked")
}

/// Run a client call on a blocking thread.
pub async fn blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}
