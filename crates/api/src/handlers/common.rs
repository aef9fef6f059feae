use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use skychart_types::QueryError;

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl ErrorResponse {
	pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			error: error.into(),
			message: message.into(),
			timestamp: chrono::Utc::now().timestamp(),
		}
	}
}

/// Map a query outcome to its status code and JSON body
pub fn query_error(e: QueryError) -> ApiError {
	let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
	(status, Json(ErrorResponse::new(e.code(), e.to_string())))
}

pub fn bad_request(message: impl Into<String>) -> ApiError {
	query_error(QueryError::bad_request(message))
}
