//! Documents gathered by one synchronization pass

use std::collections::HashMap;

use skychart_types::{AssetList, Chain, Path};

/// Everything fetched during a pass, before indexing
///
/// Chains and asset lists are keyed by the registry directory they were
/// fetched from; paths are keyed by canonical path name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryDocuments {
	/// Discovered chain names, in discovery order
	pub chain_names: Vec<String>,
	/// Discovered canonical path names, in discovery order
	pub path_names: Vec<String>,
	pub chains: HashMap<String, Chain>,
	pub asset_lists: HashMap<String, AssetList>,
	pub paths: HashMap<String, Path>,
}

impl RegistryDocuments {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a discovered chain and whichever of its documents exist
	pub fn insert_chain(
		&mut self,
		chain_name: impl Into<String>,
		chain: Option<Chain>,
		asset_list: Option<AssetList>,
	) {
		let chain_name = chain_name.into();
		if let Some(chain) = chain {
			self.chains.insert(chain_name.clone(), chain);
		}
		if let Some(asset_list) = asset_list {
			self.asset_lists.insert(chain_name.clone(), asset_list);
		}
		self.chain_names.push(chain_name);
	}

	/// Record a discovered path and its document, if it exists
	pub fn insert_path(&mut self, canonical_name: impl Into<String>, path: Option<Path>) {
		let canonical_name = canonical_name.into();
		if let Some(path) = path {
			self.paths.insert(canonical_name.clone(), path);
		}
		self.path_names.push(canonical_name);
	}
}
