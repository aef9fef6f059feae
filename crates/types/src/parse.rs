//! Document parsing
//!
//! Decodes raw registry bytes into typed documents. Unknown fields are
//! ignored and missing fields take their empty defaults, but a document that
//! is not an object, or has a field of the wrong type, is rejected.

use std::fmt;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::assets::AssetList;
use crate::chains::Chain;
use crate::paths::Path;
use crate::source::DirectoryEntry;

/// Kind of document being decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
	Chain,
	AssetList,
	Path,
	Listing,
	Commits,
}

impl fmt::Display for DocumentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			DocumentKind::Chain => "chain",
			DocumentKind::AssetList => "asset list",
			DocumentKind::Path => "path",
			DocumentKind::Listing => "directory listing",
			DocumentKind::Commits => "commit history",
		};
		f.write_str(name)
	}
}

#[derive(Debug, Error)]
pub enum ParseError {
	#[error("malformed {kind} document: {source}")]
	Malformed {
		kind: DocumentKind,
		#[source]
		source: serde_json::Error,
	},

	#[error("{kind} document must be a JSON {expected}")]
	UnexpectedShape {
		kind: DocumentKind,
		expected: &'static str,
	},
}

pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
	pub fn kind(&self) -> DocumentKind {
		match self {
			ParseError::Malformed { kind, .. } | ParseError::UnexpectedShape { kind, .. } => *kind,
		}
	}
}

fn decode_object<T: DeserializeOwned>(bytes: &[u8], kind: DocumentKind) -> ParseResult<T> {
	let value: serde_json::Value =
		serde_json::from_slice(bytes).map_err(|source| ParseError::Malformed { kind, source })?;
	if !value.is_object() {
		return Err(ParseError::UnexpectedShape {
			kind,
			expected: "object",
		});
	}
	serde_json::from_value(value).map_err(|source| ParseError::Malformed { kind, source })
}

pub fn parse_chain(bytes: &[u8]) -> ParseResult<Chain> {
	decode_object(bytes, DocumentKind::Chain)
}

pub fn parse_asset_list(bytes: &[u8]) -> ParseResult<AssetList> {
	decode_object(bytes, DocumentKind::AssetList)
}

pub fn parse_path(bytes: &[u8]) -> ParseResult<Path> {
	decode_object(bytes, DocumentKind::Path)
}

/// Decode a directory listing into typed entries
pub fn parse_listing(bytes: &[u8]) -> ParseResult<Vec<DirectoryEntry>> {
	serde_json::from_slice(bytes).map_err(|source| ParseError::Malformed {
		kind: DocumentKind::Listing,
		source,
	})
}

/// Count the entries of a commit history response
pub fn parse_commit_count(bytes: &[u8]) -> ParseResult<usize> {
	let commits: Vec<serde_json::Value> =
		serde_json::from_slice(bytes).map_err(|source| ParseError::Malformed {
			kind: DocumentKind::Commits,
			source,
		})?;
	Ok(commits.len())
}
