use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Login with email and password. This call bypasses the gateway on
/// purpose: a 401 here means bad credentials, not an expired session, and
/// must not trigger the global logout path.
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&format!("{}/users/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if response.status() == 401 {
        return Err("Invalid email or password".to_string());
    }
    if !response.ok() {
        return Err(format!("Login failed: HTTP {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}
