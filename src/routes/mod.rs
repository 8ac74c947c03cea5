pub mod events;
pub mod festivals;
pub mod meta;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utsav_core::UtsavError;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert dataset errors to HTTP responses.
///
/// The error display strings are the wire-contract bodies, so the mapping
/// here only picks the status code.
pub struct ApiError(UtsavError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            UtsavError::FestivalNotFound => StatusCode::NOT_FOUND,
            UtsavError::MonthOutOfRange => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<UtsavError> for ApiError {
    fn from(err: UtsavError) -> Self {
        Self(err)
    }
}
