use axum::{
    http::{header::HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::prices::PriceRequestError;

use super::middleware::CORRELATION_ID_HEADER;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    InternalError(String),
}

/// An [`AppError`] tagged with the request's correlation id.
#[derive(Debug)]
pub struct AppErrorWithContext {
    pub error: AppError,
    pub correlation_id: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    code: &'static str,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<&'a str>,
}

impl AppError {
    pub fn with_correlation_id(self, correlation_id: Option<String>) -> AppErrorWithContext {
        AppErrorWithContext {
            error: self,
            correlation_id,
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::InternalError(msg) => {
                msg
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.with_correlation_id(None).into_response()
    }
}

impl IntoResponse for AppErrorWithContext {
    fn into_response(self) -> Response {
        let (status, code) = self.error.status_and_code();
        let message = self.error.message();

        if status.is_server_error() {
            tracing::error!(code, error = %message, "Request failed");
        }

        let body = ErrorBody {
            error: message,
            code,
            timestamp: Utc::now().to_rfc3339(),
            correlation_id: self.correlation_id.as_deref(),
        };
        let mut response = (status, Json(body)).into_response();

        if let Some(value) = self
            .correlation_id
            .as_deref()
            .and_then(|id| HeaderValue::from_str(id).ok())
        {
            response.headers_mut().insert(CORRELATION_ID_HEADER, value);
        }
        response
    }
}

impl From<PriceRequestError> for AppError {
    fn from(e: PriceRequestError) -> Self {
        if e.is_client_error() {
            AppError::BadRequest(e.to_string())
        } else {
            AppError::InternalError(e.to_string())
        }
    }
}
