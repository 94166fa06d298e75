//! API URL helpers.
//!
//! The backend base URL can be pinned at build time through the
//! `ELECKYO_API_URL` environment variable; otherwise it is derived from the
//! current window location with the development backend port.

/// Get the base URL for API requests.
pub fn api_base() -> String {
    if let Some(url) = option_env!("ELECKYO_API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:4000", protocol, hostname)
}

/// Build a full API URL from a resource path (should start with "/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Resolve an image reference returned by the backend. Absolute URLs pass
/// through; relative paths are resolved against the backend origin.
pub fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", api_base(), path)
    } else {
        format!("{}/{}", api_base(), path)
    }
}
