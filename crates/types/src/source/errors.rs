//! Error types for remote source operations

use thiserror::Error;

use crate::parse::ParseError;

/// Failures talking to the remote registry
///
/// A missing document is not an error; `fetch_file` reports it as `None`.
#[derive(Error, Debug)]
pub enum SourceError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status_code} from {url}")]
	HttpStatus { status_code: u16, url: String },

	#[error("Invalid URL '{url}': {reason}")]
	InvalidUrl { url: String, reason: String },

	#[error("Invalid response: {0}")]
	Parse(#[from] ParseError),
}

pub type SourceResult<T> = Result<T, SourceError>;

impl SourceError {
	pub fn http_status(status_code: u16, url: impl Into<String>) -> Self {
		Self::HttpStatus {
			status_code,
			url: url.into(),
		}
	}

	/// HTTP status code carried by the error, if any
	pub fn status_code(&self) -> Option<u16> {
		match self {
			SourceError::HttpStatus { status_code, .. } => Some(*status_code),
			SourceError::Http(e) => e.status().map(|status| status.as_u16()),
			_ => None,
		}
	}
}
