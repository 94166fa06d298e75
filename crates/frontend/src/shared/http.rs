//! API gateway: every REST call in the dashboard goes through here.
//!
//! Attaches the persisted bearer token, normalizes error bodies to
//! human-readable strings, and owns the global unauthorized path: the first
//! 401 from anywhere clears the persisted session and forces navigation to
//! the login entry point, exactly once, no matter how many in-flight calls
//! fail together.

use std::cell::Cell;

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

thread_local! {
    static UNAUTHORIZED_HANDLED: Cell<bool> = const { Cell::new(false) };
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let request = builder(Method::GET, path)
        .build()
        .map_err(|e| format!("Failed to build request: {e}"))?;
    decode(request.send().await).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let request = builder(Method::POST, path)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {e}"))?;
    decode(request.send().await).await
}

pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let request = builder(Method::PUT, path)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {e}"))?;
    decode(request.send().await).await
}

pub async fn patch<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let request = builder(Method::PATCH, path)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {e}"))?;
    decode(request.send().await).await
}

pub async fn delete(path: &str) -> Result<(), String> {
    let request = builder(Method::DELETE, path)
        .build()
        .map_err(|e| format!("Failed to build request: {e}"))?;
    check(request.send().await).await.map(|_| ())
}

fn builder(method: Method, path: &str) -> RequestBuilder {
    let builder = RequestBuilder::new(&api_url(path))
        .method(method)
        .header("Accept", "application/json");
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(
    sent: Result<Response, gloo_net::Error>,
) -> Result<T, String> {
    let response = check(sent).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

async fn check(sent: Result<Response, gloo_net::Error>) -> Result<Response, String> {
    let response = sent.map_err(|e| format!("Network error: {e}"))?;
    if response.status() == 401 {
        force_logout();
        return Err("Session expired".to_string());
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(response.status(), &body));
    }
    Ok(response)
}

/// Unwrap a structured error body, falling back to the bare status code.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    format!("HTTP {status}")
}

/// Returns true only for the first unauthorized response in this session.
fn begin_unauthorized() -> bool {
    UNAUTHORIZED_HANDLED.with(|flag| !flag.replace(true))
}

fn force_logout() {
    if !begin_unauthorized() {
        return;
    }
    storage::clear_session();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_unwraps_structured_body() {
        assert_eq!(
            error_message(400, r#"{"message":"Stock cannot be negative"}"#),
            "Stock cannot be negative"
        );
        assert_eq!(
            error_message(500, r#"{"error":"boom"}"#),
            "boom"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(502, "<html>bad gateway</html>"), "HTTP 502");
        assert_eq!(error_message(404, r#"{"message":""}"#), "HTTP 404");
        assert_eq!(error_message(418, ""), "HTTP 418");
    }

    #[test]
    fn test_unauthorized_is_handled_exactly_once() {
        // Each test runs on its own thread, so the flag starts fresh here.
        assert!(begin_unauthorized());
        assert!(!begin_unauthorized());
        assert!(!begin_unauthorized());
    }
}
