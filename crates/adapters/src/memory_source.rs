//! In-memory registry source
//!
//! Serves a registry tree held in memory. Used by tests and local runs that
//! must not reach the network; failures, latency and new commits can be
//! injected at runtime.

use std::{
	collections::BTreeMap,
	sync::atomic::{AtomicUsize, Ordering},
	time::Duration,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use skychart_types::{DirectoryEntry, EntryKind, RegistrySource, SourceError, SourceResult};
use tracing::debug;

/// Key under which a commit-history failure is injected
const COMMITS_KEY: &str = "@commits";

#[derive(Debug, Default)]
pub struct MemorySource {
	files: DashMap<String, Vec<u8>>,
	failures: DashMap<String, u16>,
	commits: DashMap<String, DateTime<Utc>>,
	latency: Option<Duration>,
	fetches: AtomicUsize,
	listings: AtomicUsize,
	commit_checks: AtomicUsize,
}

impl MemorySource {
	pub fn new() -> Self {
		Self::default()
	}

	/// Delay every file fetch by `latency`
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = Some(latency);
		self
	}

	/// Add or replace a file, creating its parent directories implicitly
	pub fn insert_file(&self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
		self.files.insert(path.into(), contents.into());
	}

	pub fn remove_file(&self, path: &str) -> bool {
		self.files.remove(path).is_some()
	}

	/// Make every request for `path` answer with `status_code`
	///
	/// Applies to listings of a directory and fetches of a file. A 404 on a
	/// file fetch is reported as an absent file.
	pub fn fail_path(&self, path: impl Into<String>, status_code: u16) {
		self.failures.insert(path.into(), status_code);
	}

	/// Make commit-history checks answer with `status_code`
	pub fn fail_commits(&self, status_code: u16) {
		self.failures.insert(COMMITS_KEY.to_string(), status_code);
	}

	pub fn clear_failures(&self) {
		self.failures.clear();
	}

	/// Record a commit made at `at`
	pub fn add_commit(&self, sha: impl Into<String>, at: DateTime<Utc>) {
		self.commits.insert(sha.into(), at);
	}

	/// Number of file fetches served so far
	pub fn fetch_count(&self) -> usize {
		self.fetches.load(Ordering::SeqCst)
	}

	/// Number of directory listings served so far
	pub fn listing_count(&self) -> usize {
		self.listings.load(Ordering::SeqCst)
	}

	pub fn commit_check_count(&self) -> usize {
		self.commit_checks.load(Ordering::SeqCst)
	}

	pub fn reset_counters(&self) {
		self.fetches.store(0, Ordering::SeqCst);
		self.listings.store(0, Ordering::SeqCst);
		self.commit_checks.store(0, Ordering::SeqCst);
	}

	fn injected_failure(&self, key: &str) -> Option<u16> {
		self.failures.get(key).map(|status| *status)
	}
}

#[async_trait]
impl RegistrySource for MemorySource {
	async fn list_directory(&self, path: &str) -> SourceResult<Vec<DirectoryEntry>> {
		self.listings.fetch_add(1, Ordering::SeqCst);
		let dir = path.trim_matches('/');
		if let Some(status) = self.injected_failure(dir) {
			return Err(SourceError::http_status(status, format!("memory://{}", dir)));
		}

		let prefix = if dir.is_empty() {
			String::new()
		} else {
			format!("{}/", dir)
		};

		// Sorted by name, directories win over files of the same name
		let mut entries: BTreeMap<String, EntryKind> = BTreeMap::new();
		for file in self.files.iter() {
			let Some(relative) = file.key().strip_prefix(prefix.as_str()) else {
				continue;
			};
			match relative.split_once('/') {
				Some((child, _)) => {
					entries.insert(child.to_string(), EntryKind::Dir);
				},
				None => {
					entries.entry(relative.to_string()).or_insert(EntryKind::File);
				},
			}
		}

		if entries.is_empty() && !dir.is_empty() {
			return Err(SourceError::http_status(404, format!("memory://{}", dir)));
		}

		debug!("Listed {} entries under '{}'", entries.len(), dir);
		Ok(entries
			.into_iter()
			.map(|(name, kind)| DirectoryEntry { name, kind })
			.collect())
	}

	async fn fetch_file(&self, path: &str) -> SourceResult<Option<Vec<u8>>> {
		self.fetches.fetch_add(1, Ordering::SeqCst);
		if let Some(latency) = self.latency {
			tokio::time::sleep(latency).await;
		}

		match self.injected_failure(path) {
			Some(404) => return Ok(None),
			Some(status) => {
				return Err(SourceError::http_status(status, format!("memory://{}", path)))
			},
			None => {},
		}

		Ok(self.files.get(path).map(|contents| contents.value().clone()))
	}

	async fn has_commits_since(&self, since: DateTime<Utc>) -> SourceResult<bool> {
		self.commit_checks.fetch_add(1, Ordering::SeqCst);
		if let Some(status) = self.injected_failure(COMMITS_KEY) {
			return Err(SourceError::http_status(status, "memory://commits"));
		}
		Ok(self.commits.iter().any(|commit| *commit.value() > since))
	}

	fn describe(&self) -> String {
		format!("memory ({} files)", self.files.len())
	}
}
