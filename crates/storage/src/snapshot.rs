//! Immutable registry snapshots
//!
//! A snapshot is built once from a pass's documents and never mutated after
//! publication. Readers hold an `Arc` to it for as long as they need a
//! consistent view.

use chrono::{DateTime, Utc};
use serde::Serialize;
use skychart_types::{AssetList, Chain, Path, TagDimension};

use crate::documents::RegistryDocuments;
use crate::index::RegistryIndex;

/// Complete state served to queries, valid as of one successful pass
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
	version: u64,
	synced_at: Option<DateTime<Utc>>,
	documents: RegistryDocuments,
	index: RegistryIndex,
}

/// Summary counts of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotStats {
	pub version: u64,
	pub synced_at: Option<DateTime<Utc>>,
	pub chains: usize,
	pub asset_lists: usize,
	pub assets: usize,
	pub paths: usize,
	pub tag_buckets: usize,
}

impl RegistrySnapshot {
	/// The snapshot served before the first successful pass
	pub fn empty() -> Self {
		Self::default()
	}

	/// Index a pass's documents into a new snapshot
	///
	/// The version is assigned by the store on publication.
	pub fn build(documents: RegistryDocuments, synced_at: DateTime<Utc>) -> Self {
		let index = RegistryIndex::build(&documents);
		Self {
			version: 0,
			synced_at: Some(synced_at),
			documents,
			index,
		}
	}

	pub(crate) fn with_version(mut self, version: u64) -> Self {
		self.version = version;
		self
	}

	pub fn version(&self) -> u64 {
		self.version
	}

	pub fn synced_at(&self) -> Option<DateTime<Utc>> {
		self.synced_at
	}

	pub fn index(&self) -> &RegistryIndex {
		&self.index
	}

	/// Discovered chain names in discovery order
	pub fn chain_names(&self) -> &[String] {
		&self.documents.chain_names
	}

	/// Discovered canonical path names in discovery order
	pub fn path_names(&self) -> &[String] {
		&self.documents.path_names
	}

	pub fn chain(&self, chain_name: &str) -> Option<&Chain> {
		self.documents.chains.get(chain_name)
	}

	pub fn asset_list(&self, chain_name: &str) -> Option<&AssetList> {
		self.documents.asset_lists.get(chain_name)
	}

	pub fn path(&self, canonical_name: &str) -> Option<&Path> {
		self.index.path(canonical_name)
	}

	pub fn paths(&self) -> impl Iterator<Item = &Path> {
		self.index.paths()
	}

	pub fn paths_with_tag(&self, dimension: TagDimension, value: &str) -> Vec<&Path> {
		self.index.paths_with_tag(dimension, value)
	}

	pub fn stats(&self) -> SnapshotStats {
		SnapshotStats {
			version: self.version,
			synced_at: self.synced_at,
			chains: self.documents.chains.len(),
			asset_lists: self.documents.asset_lists.len(),
			assets: self.index.indexed_assets(),
			paths: self.index.indexed_paths(),
			tag_buckets: self.index.tag_buckets(),
		}
	}
}
