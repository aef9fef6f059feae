//! Lookup indexes derived from a pass's documents
//!
//! # Invariants
//!
//! * `chain_by_id` maps every indexed chain identifier to a chain name.
//! * `chain_by_asset` only holds display names from the asset lists of the
//!   same pass; on a collision the last list processed wins.
//! * Every name in a tag bucket is a key of `path_by_name`.

use std::collections::HashMap;

use skychart_types::{Path, TagDimension};
use tracing::warn;

use crate::documents::RegistryDocuments;

/// Composite key of the tag index
pub type TagKey = (TagDimension, String);

/// A display name claimed by more than one asset list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCollision {
	pub display: String,
	pub previous_chain: String,
	pub chain: String,
}

/// The four derived lookup structures
#[derive(Debug, Clone, Default)]
pub struct RegistryIndex {
	chain_by_id: HashMap<String, String>,
	chain_by_asset: HashMap<String, String>,
	path_by_name: HashMap<String, Path>,
	paths_by_tag: HashMap<TagKey, Vec<String>>,
	collisions: Vec<AssetCollision>,
}

impl RegistryIndex {
	/// Derive all indexes from the documents of one pass
	pub fn build(documents: &RegistryDocuments) -> Self {
		let mut index = Self::default();

		// Chain identifiers, in discovery order so the result is deterministic
		for name in &documents.chain_names {
			match documents.chains.get(name) {
				Some(chain) if chain.has_chain_id() => {
					index.chain_by_id.insert(chain.chain_id.clone(), name.clone());
				},
				_ => {},
			}
		}

		// Asset display names, resolving each list's owner by chain identifier
		for list_key in &documents.chain_names {
			let Some(asset_list) = documents.asset_lists.get(list_key) else {
				continue;
			};
			let owner = index
				.chain_by_id
				.get(&asset_list.chain_id)
				.cloned()
				.unwrap_or_else(|| list_key.clone());

			for asset in &asset_list.assets {
				if let Some(previous) = index
					.chain_by_asset
					.insert(asset.display.clone(), owner.clone())
				{
					if previous != owner {
						warn!(
							"Asset display name '{}' claimed by both {} and {}; keeping {}",
							asset.display, previous, owner, owner
						);
						index.collisions.push(AssetCollision {
							display: asset.display.clone(),
							previous_chain: previous,
							chain: owner.clone(),
						});
					}
				}
			}
		}

		// Paths by canonical name, then every qualifying channel's tag values
		for name in &documents.path_names {
			let Some(path) = documents.paths.get(name) else {
				continue;
			};
			for channel in &path.channels {
				for dimension in TagDimension::ALL {
					if let Some(value) = channel.tags.value(dimension) {
						index
							.paths_by_tag
							.entry((dimension, value))
							.or_default()
							.push(name.clone());
					}
				}
			}
			index.path_by_name.insert(name.clone(), path.clone());
		}

		debug_assert!(index.tag_references_resolve());
		index
	}

	/// Resolve a chain identifier to a chain name
	pub fn chain_name_for_id(&self, chain_id: &str) -> Option<&str> {
		self.chain_by_id.get(chain_id).map(String::as_str)
	}

	/// Resolve an asset display name to the chain that owns it
	pub fn chain_name_for_asset(&self, display: &str) -> Option<&str> {
		self.chain_by_asset.get(display).map(String::as_str)
	}

	pub fn path(&self, canonical_name: &str) -> Option<&Path> {
		self.path_by_name.get(canonical_name)
	}

	pub fn paths(&self) -> impl Iterator<Item = &Path> {
		self.path_by_name.values()
	}

	/// Paths with a channel carrying `value` for `dimension`
	///
	/// A path appears once per qualifying channel.
	pub fn paths_with_tag(&self, dimension: TagDimension, value: &str) -> Vec<&Path> {
		self.paths_by_tag
			.get(&(dimension, value.to_string()))
			.map(|names| names.iter().filter_map(|name| self.path(name)).collect())
			.unwrap_or_default()
	}

	/// Canonical path names referenced by a tag bucket
	pub fn tag_bucket(&self, dimension: TagDimension, value: &str) -> &[String] {
		self.paths_by_tag
			.get(&(dimension, value.to_string()))
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	pub fn asset_names(&self) -> impl Iterator<Item = &str> {
		self.chain_by_asset.keys().map(String::as_str)
	}

	pub fn collisions(&self) -> &[AssetCollision] {
		&self.collisions
	}

	pub fn indexed_chain_ids(&self) -> usize {
		self.chain_by_id.len()
	}

	pub fn indexed_assets(&self) -> usize {
		self.chain_by_asset.len()
	}

	pub fn indexed_paths(&self) -> usize {
		self.path_by_name.len()
	}

	pub fn tag_buckets(&self) -> usize {
		self.paths_by_tag.len()
	}

	/// Whether every tag bucket entry names an indexed path
	pub fn tag_references_resolve(&self) -> bool {
		self.paths_by_tag
			.values()
			.flatten()
			.all(|name| self.path_by_name.contains_key(name))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use skychart_types::{canonical_path_name, Asset, AssetList, Chain, Channel, ChannelTags, PathChain};

	fn path_between(a: &str, b: &str, tags: Vec<ChannelTags>) -> Path {
		Path {
			chain_1: PathChain {
				chain_name: a.to_string(),
				..Default::default()
			},
			chain_2: PathChain {
				chain_name: b.to_string(),
				..Default::default()
			},
			channels: tags
				.into_iter()
				.map(|tags| Channel {
					tags,
					..Default::default()
				})
				.collect(),
		}
	}

	fn asset_list(chain_id: &str, displays: &[&str]) -> AssetList {
		AssetList {
			chain_id: chain_id.to_string(),
			assets: displays
				.iter()
				.map(|display| Asset::new(format!("u{}", display), *display, display.to_uppercase()))
				.collect(),
			..Default::default()
		}
	}

	fn documents() -> RegistryDocuments {
		let mut docs = RegistryDocuments::new();
		docs.insert_chain(
			"cosmoshub",
			Some(Chain::new("cosmoshub", "cosmoshub-4")),
			Some(asset_list("cosmoshub-4", &["atom"])),
		);
		docs.insert_chain(
			"osmosis",
			Some(Chain::new("osmosis", "osmosis-1")),
			Some(asset_list("osmosis-1", &["osmo", "ion"])),
		);
		docs.insert_chain("juno", Some(Chain::new("juno", "juno-1")), None);
		docs.insert_path(
			canonical_path_name("osmosis", "cosmoshub"),
			Some(path_between(
				"osmosis",
				"cosmoshub",
				vec![
					ChannelTags {
						status: "live".to_string(),
						preferred: true,
						dex: "osmosis".to_string(),
						properties: String::new(),
					},
					ChannelTags {
						status: "live".to_string(),
						preferred: false,
						dex: String::new(),
						properties: "ics721".to_string(),
					},
				],
			)),
		);
		docs.insert_path(
			canonical_path_name("juno", "osmosis"),
			Some(path_between(
				"juno",
				"osmosis",
				vec![ChannelTags {
					status: "killed".to_string(),
					..Default::default()
				}],
			)),
		);
		docs
	}

	#[test]
	fn test_chain_and_asset_indexes() {
		let index = RegistryIndex::build(&documents());

		assert_eq!(index.chain_name_for_id("osmosis-1"), Some("osmosis"));
		assert_eq!(index.chain_name_for_id("juno-1"), Some("juno"));
		assert_eq!(index.chain_name_for_id("osmosis"), None);
		assert_eq!(index.chain_name_for_asset("ion"), Some("osmosis"));
		assert_eq!(index.chain_name_for_asset("atom"), Some("cosmoshub"));
		assert_eq!(index.indexed_assets(), 3);
		assert!(index.collisions().is_empty());
	}

	#[test]
	fn test_tag_index_partitions_by_dimension() {
		let index = RegistryIndex::build(&documents());

		// Both channels of cosmoshub-osmosis are live, so the path is listed twice
		assert_eq!(
			index.tag_bucket(TagDimension::Status, "live"),
			["cosmoshub-osmosis", "cosmoshub-osmosis"]
		);
		assert_eq!(index.tag_bucket(TagDimension::Status, "killed"), ["juno-osmosis"]);
		assert_eq!(index.tag_bucket(TagDimension::Dex, "osmosis"), ["cosmoshub-osmosis"]);
		assert_eq!(index.tag_bucket(TagDimension::Properties, "ics721"), ["cosmoshub-osmosis"]);

		// preferred is always emitted, empty strings never are
		assert_eq!(index.tag_bucket(TagDimension::Preferred, "true").len(), 1);
		assert_eq!(index.tag_bucket(TagDimension::Preferred, "false").len(), 2);
		assert!(index.tag_bucket(TagDimension::Dex, "").is_empty());
		assert!(index.tag_bucket(TagDimension::Dex, "astroport").is_empty());

		let paths = index.paths_with_tag(TagDimension::Dex, "osmosis");
		assert_eq!(paths.len(), 1);
		assert_eq!(paths[0].canonical_name(), "cosmoshub-osmosis");
	}

	#[test]
	fn test_every_tag_reference_resolves() {
		let index = RegistryIndex::build(&documents());
		assert!(index.tag_references_resolve());
		assert_eq!(index.indexed_paths(), 2);

		for dimension in TagDimension::ALL {
			for value in ["live", "killed", "true", "false", "osmosis", "ics721"] {
				for name in index.tag_bucket(dimension, value) {
					assert!(index.path(name).is_some(), "orphan tag entry {}", name);
				}
			}
		}
	}

	#[test]
	fn test_missing_documents_are_not_indexed() {
		let mut docs = RegistryDocuments::new();
		docs.insert_chain("foo", Some(Chain::new("foo", "foo-1")), None);
		docs.insert_chain("bar", None, None);
		docs.insert_path("bar-foo", None);

		let index = RegistryIndex::build(&docs);
		assert_eq!(index.chain_name_for_id("foo-1"), Some("foo"));
		assert_eq!(index.indexed_chain_ids(), 1);
		assert_eq!(index.indexed_assets(), 0);
		assert_eq!(index.indexed_paths(), 0);
		assert_eq!(index.tag_buckets(), 0);
	}

	#[test]
	fn test_asset_collision_is_last_writer_wins() {
		let mut docs = RegistryDocuments::new();
		docs.insert_chain(
			"cosmoshub",
			Some(Chain::new("cosmoshub", "cosmoshub-4")),
			Some(asset_list("cosmoshub-4", &["atom"])),
		);
		docs.insert_chain(
			"osmosis",
			Some(Chain::new("osmosis", "osmosis-1")),
			Some(asset_list("osmosis-1", &["atom"])),
		);

		let index = RegistryIndex::build(&docs);
		assert_eq!(index.chain_name_for_asset("atom"), Some("osmosis"));
		assert_eq!(
			index.collisions(),
			[AssetCollision {
				display: "atom".to_string(),
				previous_chain: "cosmoshub".to_string(),
				chain: "osmosis".to_string(),
			}]
		);
	}

	#[test]
	fn test_asset_list_with_unknown_chain_id_falls_back_to_directory() {
		let mut docs = RegistryDocuments::new();
		docs.insert_chain("stargaze", None, Some(asset_list("", &["stars"])));

		let index = RegistryIndex::build(&docs);
		assert_eq!(index.chain_name_for_asset("stars"), Some("stargaze"));
	}
}
