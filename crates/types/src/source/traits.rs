//! Core trait for remote registry sources

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;

use super::{DirectoryEntry, SourceResult};

/// Read-only access to a remotely hosted registry
///
/// Every call is a single attempt; implementations must not retry or cache.
#[async_trait]
pub trait RegistrySource: Send + Sync + Debug {
	/// List the entries of a registry directory (`""` is the registry root)
	async fn list_directory(&self, path: &str) -> SourceResult<Vec<DirectoryEntry>>;

	/// Fetch the raw contents of a registry file
	///
	/// Returns `Ok(None)` when the file does not exist.
	async fn fetch_file(&self, path: &str) -> SourceResult<Option<Vec<u8>>>;

	/// Whether the registry has recorded any commit after `since`
	async fn has_commits_since(&self, since: DateTime<Utc>) -> SourceResult<bool>;

	/// Short human-readable description used in logs
	fn describe(&self) -> String {
		format!("{:?}", self)
	}
}
