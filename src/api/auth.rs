//! Auth API
//!
//! `POST {api_base}/login`. No retry, no timeout.

use gloo_net::http::Request;

use crate::config::AppConfig;
use crate::error::LoginError;
use crate::models::{Credentials, LoginResponse};
use crate::session::LoginReply;

pub async fn login(config: &AppConfig, credentials: &Credentials) -> Result<LoginReply, LoginError> {
    let body = serde_json::to_string(credentials).map_err(|e| LoginError::Transport(e.to_string()))?;

    let response = Request::post(&config.endpoint("login"))
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| LoginError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| LoginError::Transport(e.to_string()))?;

    let status = response.status();
    let text = response.text().await.map_err(|e| LoginError::Transport(e.to_string()))?;
    decode_reply(status, &text)
}

/// Decode a login response body. Any non-JSON body is malformed, whatever the status.
pub fn decode_reply(status: u16, text: &str) -> Result<LoginReply, LoginError> {
    let body: LoginResponse = serde_json::from_str(text).map_err(|e| LoginError::MalformedResponse {
        status,
        reason: e.to_string(),
    })?;
    Ok(LoginReply { status, body })
}
