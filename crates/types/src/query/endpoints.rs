//! Endpoint kinds served for a chain

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::QueryError;
use crate::chains::{Chain, Endpoint, Peer};

/// Which endpoint group of a chain to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
	Rpc,
	Grpc,
	Rest,
	Peers,
	Seeds,
}

/// Endpoints selected from a chain for an [`EndpointKind`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EndpointList {
	Apis(Vec<Endpoint>),
	Peers(Vec<Peer>),
}

impl EndpointKind {
	pub const ALL: [EndpointKind; 5] = [
		EndpointKind::Rpc,
		EndpointKind::Grpc,
		EndpointKind::Rest,
		EndpointKind::Peers,
		EndpointKind::Seeds,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			EndpointKind::Rpc => "rpc",
			EndpointKind::Grpc => "grpc",
			EndpointKind::Rest => "rest",
			EndpointKind::Peers => "peers",
			EndpointKind::Seeds => "seeds",
		}
	}

	/// Select this endpoint group from a chain
	pub fn select(&self, chain: &Chain) -> EndpointList {
		match self {
			EndpointKind::Rpc => EndpointList::Apis(chain.apis.rpc.clone()),
			EndpointKind::Grpc => EndpointList::Apis(chain.apis.grpc.clone()),
			EndpointKind::Rest => EndpointList::Apis(chain.apis.rest.clone()),
			EndpointKind::Peers => EndpointList::Peers(chain.peers.persistent_peers.clone()),
			EndpointKind::Seeds => EndpointList::Peers(chain.peers.seeds.clone()),
		}
	}
}

impl fmt::Display for EndpointKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for EndpointKind {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		EndpointKind::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| QueryError::bad_request(format!("unknown endpoint kind '{}'", s)))
	}
}

impl EndpointList {
	pub fn len(&self) -> usize {
		match self {
			EndpointList::Apis(endpoints) => endpoints.len(),
			EndpointList::Peers(peers) => peers.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
