//! Chain domain model
//!
//! Mirrors the `chain.json` document published for every chain in the registry.
//! Only the fields the mirror serves are modelled; anything else in the
//! document is ignored when decoding.

use serde::{Deserialize, Serialize};

/// A blockchain network as described by its registry `chain.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chain {
	/// Registry-assigned name, unique across the registry (e.g. "osmosis")
	pub chain_name: String,
	pub status: String,
	pub network_type: String,
	/// Human-readable name (e.g. "Osmosis")
	pub pretty_name: String,
	/// Network chain identifier (e.g. "osmosis-1")
	pub chain_id: String,
	pub bech32_prefix: String,
	pub daemon_name: String,
	pub node_home: String,
	pub slip44: u32,
	pub apis: Apis,
	pub peers: Peers,
}

/// Endpoint groups exposed by a chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Apis {
	pub rpc: Vec<Endpoint>,
	pub grpc: Vec<Endpoint>,
	pub rest: Vec<Endpoint>,
}

/// A single API endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
	pub address: String,
	pub provider: String,
}

/// Peer lists used to bootstrap a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peers {
	pub seeds: Vec<Peer>,
	pub persistent_peers: Vec<Peer>,
}

/// A seed or persistent peer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peer {
	pub id: String,
	pub address: String,
	pub provider: String,
}

impl Chain {
	pub fn new(chain_name: impl Into<String>, chain_id: impl Into<String>) -> Self {
		Self {
			chain_name: chain_name.into(),
			chain_id: chain_id.into(),
			..Default::default()
		}
	}

	/// Whether the document carries a chain identifier that can be indexed
	pub fn has_chain_id(&self) -> bool {
		!self.chain_id.is_empty()
	}
}
