//! Registry query service
//!
//! Read-only accessor over the latest published snapshot. Each operation
//! loads the snapshot once, so it answers from a single consistent view even
//! while a synchronization pass is publishing a new one.

use std::sync::Arc;

use skychart_storage::{RegistrySnapshot, SnapshotStats, SnapshotStore};
use skychart_types::{
	canonical_path_name, Asset, AssetList, Chain, EndpointKind, EndpointList, Path, QueryError,
	QueryResult, Resource, TagDimension,
};

#[derive(Clone)]
pub struct RegistryQueryService {
	store: Arc<dyn SnapshotStore>,
}

impl RegistryQueryService {
	pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
		Self { store }
	}

	/// Chain names in discovery order
	pub fn list_chain_names(&self) -> Vec<String> {
		self.store.current().chain_names().to_vec()
	}

	/// Look up a chain by name, then by chain identifier
	pub fn get_chain(&self, key: &str) -> QueryResult<Chain> {
		let snapshot = self.store.current();
		by_name_or_id(&snapshot, key, RegistrySnapshot::chain)
			.cloned()
			.ok_or_else(|| QueryError::not_found(Resource::Chain, key))
	}

	/// One endpoint group of a chain
	///
	/// An unresolved chain is reported before an unknown kind.
	pub fn get_endpoints(&self, chain_key: &str, kind: &str) -> QueryResult<EndpointList> {
		let chain = self.get_chain(chain_key)?;
		let kind: EndpointKind = kind.parse()?;
		Ok(kind.select(&chain))
	}

	/// Look up a chain's asset list by chain name, then by chain identifier
	pub fn get_asset_list(&self, chain_key: &str) -> QueryResult<AssetList> {
		let snapshot = self.store.current();
		by_name_or_id(&snapshot, chain_key, RegistrySnapshot::asset_list)
			.cloned()
			.ok_or_else(|| QueryError::not_found(Resource::AssetList, chain_key))
	}

	/// Look up an asset by display name through the chain that owns it
	pub fn get_asset(&self, display: &str) -> QueryResult<Asset> {
		let snapshot = self.store.current();
		snapshot
			.index()
			.chain_name_for_asset(display)
			.and_then(|chain_name| snapshot.asset_list(chain_name))
			.and_then(|asset_list| asset_list.find_by_display(display))
			.cloned()
			.ok_or_else(|| QueryError::not_found(Resource::Asset, display))
	}

	/// Every indexed asset display name, sorted
	pub fn list_asset_names(&self) -> Vec<String> {
		let snapshot = self.store.current();
		let mut names: Vec<String> = snapshot.index().asset_names().map(str::to_string).collect();
		names.sort();
		names
	}

	/// Canonical path names in discovery order
	pub fn list_path_names(&self) -> Vec<String> {
		self.store.current().path_names().to_vec()
	}

	/// All paths; order is unspecified
	pub fn list_paths(&self) -> Vec<Path> {
		self.store.current().paths().cloned().collect()
	}

	/// The path between two chains, named in either order
	pub fn get_path(&self, chain_1: &str, chain_2: &str) -> QueryResult<Path> {
		let name = canonical_path_name(chain_1, chain_2);
		self.store
			.current()
			.path(&name)
			.cloned()
			.ok_or_else(|| QueryError::not_found(Resource::Path, name))
	}

	/// Paths with a channel tagged `value` along `dimension`
	///
	/// An empty value returns every path. A path is repeated once per
	/// qualifying channel; an unknown value yields an empty list.
	pub fn get_paths_by_tag(&self, dimension: TagDimension, value: &str) -> Vec<Path> {
		let snapshot = self.store.current();
		if value.is_empty() {
			return snapshot.paths().cloned().collect();
		}
		snapshot
			.paths_with_tag(dimension, value)
			.into_iter()
			.cloned()
			.collect()
	}

	pub fn snapshot_stats(&self) -> SnapshotStats {
		self.store.stats()
	}
}

/// Look a document up under `key` as a chain name, then as a chain identifier
fn by_name_or_id<'a, T>(
	snapshot: &'a RegistrySnapshot,
	key: &str,
	lookup: impl Fn(&'a RegistrySnapshot, &str) -> Option<&'a T>,
) -> Option<&'a T> {
	lookup(snapshot, key).or_else(|| {
		snapshot
			.index()
			.chain_name_for_id(key)
			.and_then(|name| lookup(snapshot, name))
	})
}
