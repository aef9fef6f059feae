//! Registry synchronizer
//!
//! Drives one synchronization pass: staleness check, discovery, per-document
//! fetch and parse, index rebuild and atomic publication. Passes never
//! interleave; a trigger that arrives while a pass is running is a no-op.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use skychart_config::{FailurePolicy, Settings};
use skychart_storage::{RegistryDocuments, RegistrySnapshot, SnapshotStore};
use skychart_types::{
	canonical_path_name, parse_asset_list, parse_chain, parse_path, split_path_name, AssetList,
	Chain, DirectoryEntry, ParseError, ParseResult, Path, RegistrySource, SourceError,
};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

const CHAIN_DOCUMENT: &str = "chain.json";
const ASSET_LIST_DOCUMENT: &str = "assetlist.json";

/// A pass that failed before publishing; the previous snapshot stays live
#[derive(Debug, Error)]
pub enum SyncError {
	#[error("failed to fetch {document}: {source}")]
	Source {
		document: String,
		#[source]
		source: SourceError,
	},

	#[error("failed to parse {document}: {source}")]
	Parse {
		document: String,
		#[source]
		source: ParseError,
	},
}

impl SyncError {
	/// Registry path of the document that failed
	pub fn document(&self) -> &str {
		match self {
			SyncError::Source { document, .. } | SyncError::Parse { document, .. } => document,
		}
	}
}

/// What a call to `sync_once` did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SyncOutcome {
	/// No commits since the last check; nothing was fetched
	Unchanged { checked_at: DateTime<Utc> },
	/// A new snapshot was published
	Published {
		version: u64,
		chains: usize,
		paths: usize,
		/// Documents left out under the skip policy
		skipped: Vec<String>,
	},
	/// Another pass was in progress
	AlreadyRunning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncPhase {
	Idle,
	Syncing,
}

/// A path document found in the paths directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredPath {
	/// File name as listed, e.g. `cosmoshub-osmosis.json`
	pub file_name: String,
	pub canonical_name: String,
}

/// Knobs of a synchronization pass
#[derive(Debug, Clone)]
pub struct SyncOptions {
	pub paths_directory: String,
	pub excluded_marker: String,
	pub excluded_prefixes: Vec<String>,
	pub max_concurrent_fetches: usize,
	pub failure_policy: FailurePolicy,
}

impl SyncOptions {
	pub fn from_settings(settings: &Settings) -> Self {
		Self {
			paths_directory: settings.registry.paths_directory.clone(),
			excluded_marker: settings.registry.excluded_marker.clone(),
			excluded_prefixes: settings.registry.excluded_prefixes.clone(),
			max_concurrent_fetches: settings.sync.max_concurrent_fetches,
			failure_policy: settings.sync.failure_policy,
		}
	}
}

impl Default for SyncOptions {
	fn default() -> Self {
		Self::from_settings(&Settings::default())
	}
}

/// Trait for triggering synchronization passes
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RegistrySync: Send + Sync {
	async fn sync_once(&self) -> Result<SyncOutcome, SyncError>;

	fn phase(&self) -> SyncPhase;
}

/// Chain directories worth fetching
///
/// Keeps directories whose name has no `.` and does not contain
/// `excluded_marker`. Metadata directories such as `_IBC` pass this filter
/// and simply have no chain documents, unless `excluded_prefixes` names them.
/// Discovery order is preserved.
pub fn discover_chains(
	entries: &[DirectoryEntry],
	excluded_marker: &str,
	excluded_prefixes: &[String],
) -> Vec<String> {
	entries
		.iter()
		.filter(|entry| entry.is_dir())
		.map(|entry| entry.name.as_str())
		.filter(|name| !name.contains('.'))
		.filter(|name| excluded_marker.is_empty() || !name.contains(excluded_marker))
		.filter(|name| {
			!excluded_prefixes
				.iter()
				.any(|prefix| !prefix.is_empty() && name.starts_with(prefix.as_str()))
		})
		.map(str::to_string)
		.collect()
}

/// Path documents worth fetching
///
/// Keeps files whose name has both a `.` and a `-`. The name up to the first
/// `.` must split into exactly two chain names; anything else is skipped.
/// Each path is fetched from its canonical file, so a listed file named in
/// the other order resolves to a canonical document that may not exist.
pub fn discover_paths(entries: &[DirectoryEntry]) -> Vec<DiscoveredPath> {
	let mut seen = HashSet::new();
	let mut discovered = Vec::new();

	for entry in entries.iter().filter(|entry| entry.is_file()) {
		let name = entry.name.as_str();
		if !name.contains('.') || !name.contains('-') {
			continue;
		}
		let stem = name.split('.').next().unwrap_or_default();
		// Chain names never contain '-', so `a-b-c` is malformed rather than truncated
		let Some((chain_1, chain_2)) = split_path_name(stem) else {
			warn!("Skipping path document '{}': name is not 'chain1-chain2'", name);
			continue;
		};
		let canonical_name = canonical_path_name(chain_1, chain_2);
		if !seen.insert(canonical_name.clone()) {
			warn!(
				"Skipping path document '{}': '{}' already discovered",
				name, canonical_name
			);
			continue;
		}
		discovered.push(DiscoveredPath {
			file_name: name.to_string(),
			canonical_name,
		});
	}

	discovered
}

/// Resets the phase flag when a pass ends, including when it is cancelled
struct PhaseGuard<'a>(&'a AtomicBool);

impl<'a> PhaseGuard<'a> {
	fn enter(flag: &'a AtomicBool) -> Self {
		flag.store(true, Ordering::SeqCst);
		Self(flag)
	}
}

impl Drop for PhaseGuard<'_> {
	fn drop(&mut self) {
		self.0.store(false, Ordering::SeqCst);
	}
}

type ChainDocuments = (Option<Chain>, Option<AssetList>);

pub struct RegistrySynchronizer {
	source: Arc<dyn RegistrySource>,
	store: Arc<dyn SnapshotStore>,
	options: SyncOptions,
	pass_lock: Mutex<()>,
	syncing: AtomicBool,
	/// Start of the last pass that checked the commit history, in ms since epoch
	last_checked_ms: AtomicI64,
}

impl RegistrySynchronizer {
	pub fn new(
		source: Arc<dyn RegistrySource>,
		store: Arc<dyn SnapshotStore>,
		options: SyncOptions,
	) -> Self {
		Self {
			source,
			store,
			options,
			pass_lock: Mutex::new(()),
			syncing: AtomicBool::new(false),
			last_checked_ms: AtomicI64::new(0),
		}
	}

	pub fn phase(&self) -> SyncPhase {
		if self.syncing.load(Ordering::SeqCst) {
			SyncPhase::Syncing
		} else {
			SyncPhase::Idle
		}
	}

	/// Timestamp passed to the next staleness check
	///
	/// Starts at the Unix epoch so the first pass always fetches.
	pub fn last_checked(&self) -> DateTime<Utc> {
		DateTime::from_timestamp_millis(self.last_checked_ms.load(Ordering::SeqCst))
			.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
	}

	pub fn store(&self) -> &Arc<dyn SnapshotStore> {
		&self.store
	}

	/// Run one pass unless another one is in progress
	pub async fn sync_once(&self) -> Result<SyncOutcome, SyncError> {
		let Ok(_pass) = self.pass_lock.try_lock() else {
			debug!("Registry sync already running, ignoring trigger");
			return Ok(SyncOutcome::AlreadyRunning);
		};
		let _phase = PhaseGuard::enter(&self.syncing);
		self.run_pass().await
	}

	async fn run_pass(&self) -> Result<SyncOutcome, SyncError> {
		let started_at = Utc::now();
		let since = self.last_checked();

		let changed = self
			.source
			.has_commits_since(since)
			.await
			.map_err(|source| SyncError::Source {
				document: "commit history".to_string(),
				source,
			})?;
		if !changed {
			self.record_checked(started_at);
			debug!("No registry commits since {}, keeping current snapshot", since);
			return Ok(SyncOutcome::Unchanged {
				checked_at: started_at,
			});
		}

		info!("Registry changed since {}, syncing from {}", since, self.source.describe());

		let root = self.list("").await?;
		let chain_names = discover_chains(
			&root,
			&self.options.excluded_marker,
			&self.options.excluded_prefixes,
		);
		let listing = self.list(&self.options.paths_directory).await?;
		let paths = discover_paths(&listing);
		debug!(
			"Discovered {} chains and {} paths",
			chain_names.len(),
			paths.len()
		);

		let mut documents = RegistryDocuments::new();
		let mut skipped = Vec::new();
		self.fetch_chains(chain_names, &mut documents, &mut skipped)
			.await?;
		self.fetch_paths(paths, &mut documents, &mut skipped).await?;

		let chains = documents.chain_names.len();
		let path_count = documents.path_names.len();
		let published = self
			.store
			.publish(RegistrySnapshot::build(documents, started_at));
		self.record_checked(started_at);

		info!(
			"✅ Registry sync complete: snapshot v{} ({} chains, {} paths, {} skipped)",
			published.version(),
			chains,
			path_count,
			skipped.len()
		);

		Ok(SyncOutcome::Published {
			version: published.version(),
			chains,
			paths: path_count,
			skipped,
		})
	}

	async fn fetch_chains(
		&self,
		chain_names: Vec<String>,
		documents: &mut RegistryDocuments,
		skipped: &mut Vec<String>,
	) -> Result<(), SyncError> {
		let mut results = stream::iter(chain_names)
			.map(|name| async move {
				let result = self.fetch_chain(&name).await;
				(name, result)
			})
			.buffered(self.concurrency());

		while let Some((name, result)) = results.next().await {
			match result {
				Ok((chain, asset_list)) => documents.insert_chain(name, chain, asset_list),
				Err(e) => self.handle_failure(e, name, skipped)?,
			}
		}
		Ok(())
	}

	async fn fetch_paths(
		&self,
		paths: Vec<DiscoveredPath>,
		documents: &mut RegistryDocuments,
		skipped: &mut Vec<String>,
	) -> Result<(), SyncError> {
		let mut results = stream::iter(paths)
			.map(|discovered| async move {
				let document = format!(
					"{}/{}.json",
					self.options.paths_directory, discovered.canonical_name
				);
				let result = self.fetch_document(document, parse_path).await;
				(discovered.canonical_name, result)
			})
			.buffered(self.concurrency());

		while let Some((canonical_name, result)) = results.next().await {
			match result {
				Ok(path) => documents.insert_path(canonical_name, path),
				Err(e) => self.handle_failure(e, canonical_name, skipped)?,
			}
		}
		Ok(())
	}

	async fn fetch_chain(&self, chain_name: &str) -> Result<ChainDocuments, SyncError> {
		futures::try_join!(
			self.fetch_document(format!("{}/{}", chain_name, CHAIN_DOCUMENT), parse_chain),
			self.fetch_document(
				format!("{}/{}", chain_name, ASSET_LIST_DOCUMENT),
				parse_asset_list
			),
		)
	}

	/// Fetch and parse one document; an absent document is `Ok(None)`
	async fn fetch_document<T>(
		&self,
		document: String,
		parse: fn(&[u8]) -> ParseResult<T>,
	) -> Result<Option<T>, SyncError> {
		match self.source.fetch_file(&document).await {
			Ok(Some(bytes)) => match parse(&bytes) {
				Ok(parsed) => Ok(Some(parsed)),
				Err(source) => Err(SyncError::Parse { document, source }),
			},
			Ok(None) => {
				debug!("{} not found, skipping", document);
				Ok(None)
			},
			Err(source) => Err(SyncError::Source { document, source }),
		}
	}

	async fn list(&self, directory: &str) -> Result<Vec<DirectoryEntry>, SyncError> {
		self.source
			.list_directory(directory)
			.await
			.map_err(|source| SyncError::Source {
				document: if directory.is_empty() {
					"registry root".to_string()
				} else {
					directory.to_string()
				},
				source,
			})
	}

	fn handle_failure(
		&self,
		error: SyncError,
		name: String,
		skipped: &mut Vec<String>,
	) -> Result<(), SyncError> {
		match self.options.failure_policy {
			FailurePolicy::Abort => {
				warn!("Aborting registry sync: {}", error);
				Err(error)
			},
			FailurePolicy::Skip => {
				warn!("Leaving '{}' out of this pass: {}", name, error);
				skipped.push(name);
				Ok(())
			},
		}
	}

	fn concurrency(&self) -> usize {
		self.options.max_concurrent_fetches.max(1)
	}

	fn record_checked(&self, at: DateTime<Utc>) {
		self.last_checked_ms
			.store(at.timestamp_millis(), Ordering::SeqCst);
	}
}

#[async_trait::async_trait]
impl RegistrySync for RegistrySynchronizer {
	async fn sync_once(&self) -> Result<SyncOutcome, SyncError> {
		RegistrySynchronizer::sync_once(self).await
	}

	fn phase(&self) -> SyncPhase {
		RegistrySynchronizer::phase(self)
	}
}
