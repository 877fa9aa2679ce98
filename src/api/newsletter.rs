//! Newsletter signup stub.  Validates the address, logs it and answers;
//! nothing is persisted.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use super::ApiState;

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

const INVALID: &str = "Invalid email address";
const MALFORMED: &str = "Please provide a valid email address";

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub message: &'static str,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Pull a usable address out of the request body.
fn extract_email(state: &ApiState, body: &Value) -> ApiResult<String> {
    if body.is_null() {
        return Err(ApiError::internal("request body is JSON null"));
    }
    let email = match body.get("email") {
        None | Some(Value::Null) => return Err(ApiError::bad_request(INVALID)),
        Some(Value::String(s)) => s,
        Some(_) => return Err(ApiError::bad_request(INVALID)),
    };
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::bad_request(INVALID));
    }
    if !state.email.is_match(email) {
        return Err(ApiError::bad_request(MALFORMED));
    }
    Ok(email.clone())
}

/// `POST /api/newsletter`
pub async fn subscribe(
    State(state): State<Arc<ApiState>>,
    body: Bytes,
) -> ApiResult<Json<SubscribeResponse>> {
    let body: Value = serde_json::from_slice(&body)?;
    let email = extract_email(&state, &body)?;

    tracing::info!(
        email = %email,
        timestamp = %Utc::now().to_rfc3339(),
        source = "website",
        "newsletter signup"
    );

    // Stands in for the call to a mailing-list provider.
    if !state.signup_delay.is_zero() {
        tokio::time::sleep(state.signup_delay).await;
    }

    Ok(Json(SubscribeResponse {
        success: true,
        message: "Successfully subscribed to newsletter!",
        email,
    }))
}

/// `GET /api/newsletter`
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Newsletter API is running",
        timestamp: Utc::now().to_rfc3339(),
    })
}
