//! IBC path domain model
//!
//! A path describes the IBC connection between exactly two chains and the
//! channels opened over it. Paths are identified by their canonical name,
//! which does not depend on the order the two chains are given in.

pub mod tags;

use serde::{Deserialize, Serialize};

pub use tags::TagDimension;

/// Separator between the two chain names of a path name
pub const PATH_NAME_SEPARATOR: char = '-';

/// Build the canonical name of the path between two chains
///
/// The lexicographically smaller name always comes first, so
/// `canonical_path_name(a, b) == canonical_path_name(b, a)`.
pub fn canonical_path_name(chain_a: &str, chain_b: &str) -> String {
	if chain_a > chain_b {
		format!("{}{}{}", chain_b, PATH_NAME_SEPARATOR, chain_a)
	} else {
		format!("{}{}{}", chain_a, PATH_NAME_SEPARATOR, chain_b)
	}
}

/// Split a `chain1-chain2` path name into its two chain names
///
/// Returns `None` unless the name holds exactly two non-empty tokens.
pub fn split_path_name(name: &str) -> Option<(&str, &str)> {
	let mut tokens = name.split(PATH_NAME_SEPARATOR);
	match (tokens.next(), tokens.next(), tokens.next()) {
		(Some(a), Some(b), None) if !a.is_empty() && !b.is_empty() => Some((a, b)),
		_ => None,
	}
}

/// Connectivity descriptor between two chains
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Path {
	#[serde(rename = "chain-1")]
	pub chain_1: PathChain,
	#[serde(rename = "chain-2")]
	pub chain_2: PathChain,
	pub channels: Vec<Channel>,
}

/// One side of a path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PathChain {
	pub chain_name: String,
	pub client_id: String,
	pub connection_id: String,
}

/// A channel opened over the path's connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
	#[serde(rename = "chain-1")]
	pub chain_1: ChannelEnd,
	#[serde(rename = "chain-2")]
	pub chain_2: ChannelEnd,
	pub ordering: String,
	pub version: String,
	pub tags: ChannelTags,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ChannelEnd {
	pub channel_id: String,
	pub port_id: String,
}

/// Categorical facets used to filter paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelTags {
	pub status: String,
	pub preferred: bool,
	pub dex: String,
	pub properties: String,
}

impl Path {
	/// Canonical name of this path, derived from its two chain names
	pub fn canonical_name(&self) -> String {
		canonical_path_name(&self.chain_1.chain_name, &self.chain_2.chain_name)
	}

	/// Whether the path connects the given chain
	pub fn connects(&self, chain_name: &str) -> bool {
		self.chain_1.chain_name == chain_name || self.chain_2.chain_name == chain_name
	}
}

impl ChannelTags {
	/// The value this channel carries for a tag dimension
	///
	/// Empty strings count as absent. `preferred` is a boolean and always has
	/// a value.
	pub fn value(&self, dimension: TagDimension) -> Option<String> {
		let value = match dimension {
			TagDimension::Status => &self.status,
			TagDimension::Dex => &self.dex,
			TagDimension::Properties => &self.properties,
			TagDimension::Preferred => return Some(self.preferred.to_string()),
		};

		if value.is_empty() {
			None
		} else {
			Some(value.clone())
		}
	}
}
