use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::auth::SESSION_TOKEN_HEADER;

/// Wrapper for success responses: a status code, the bare JSON body, and
/// optionally the session token carried in the dedicated response header.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    data: T,
    status: StatusCode,
    session_token: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK response
    pub fn ok(data: T) -> Self {
        Self::with_status(data, StatusCode::OK)
    }

    /// 201 Created response
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }

    pub fn with_status(data: T, status: StatusCode) -> Self {
        Self {
            data,
            status,
            session_token: None,
        }
    }

    /// Attach a session token to the `x-auth` response header.
    pub fn session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

impl ApiResponse<()> {
    /// 204 No Content response (body is suppressed)
    pub fn no_content() -> Self {
        Self::with_status((), StatusCode::NO_CONTENT)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let mut response = if self.status == StatusCode::NO_CONTENT {
            self.status.into_response()
        } else {
            match serde_json::to_value(&self.data) {
                Ok(value) => (self.status, Json(value)).into_response(),
                Err(e) => {
                    tracing::error!("Failed to serialize response data: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "error": true,
                            "message": "Failed to serialize response data",
                            "code": "INTERNAL_SERVER_ERROR"
                        })),
                    )
                        .into_response();
                }
            }
        };

        if let Some(token) = self.session_token {
            match HeaderValue::from_str(&token) {
                Ok(value) => {
                    response
                        .headers_mut()
                        .insert(HeaderName::from_static(SESSION_TOKEN_HEADER), value);
                }
                Err(_) => {
                    tracing::error!("Session token is not a valid header value");
                }
            }
        }

        response
    }
}
