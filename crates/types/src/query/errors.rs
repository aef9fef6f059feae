//! Error types for registry queries

use std::fmt;

use thiserror::Error;

/// Kind of registry entity a lookup was made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
	Chain,
	AssetList,
	Asset,
	Path,
}

impl fmt::Display for Resource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Resource::Chain => "chain",
			Resource::AssetList => "asset list",
			Resource::Asset => "asset",
			Resource::Path => "path",
		};
		f.write_str(name)
	}
}

/// Caller-facing outcomes of a failed query
///
/// Neither variant is fatal; the transport layer maps them to status codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
	#[error("{resource} not found: {key}")]
	NotFound { resource: Resource, key: String },

	#[error("bad request: {reason}")]
	BadRequest { reason: String },
}

pub type QueryResult<T> = Result<T, QueryError>;

impl QueryError {
	pub fn not_found(resource: Resource, key: impl Into<String>) -> Self {
		Self::NotFound {
			resource,
			key: key.into(),
		}
	}

	pub fn bad_request(reason: impl Into<String>) -> Self {
		Self::BadRequest {
			reason: reason.into(),
		}
	}

	/// HTTP status code this outcome maps to
	pub fn status_code(&self) -> u16 {
		match self {
			QueryError::NotFound { .. } => 404,
			QueryError::BadRequest { .. } => 400,
		}
	}

	/// Stable machine-readable error code
	pub fn code(&self) -> &'static str {
		match self {
			QueryError::NotFound { .. } => "NOT_FOUND",
			QueryError::BadRequest { .. } => "BAD_REQUEST",
		}
	}
}
