//! Registry fixtures shared by the service tests

use chrono::Utc;
use serde_json::json;
use skychart_adapters::MemorySource;

/// Path document between two chains with a single transfer channel
pub fn path_json(chain_1: &str, chain_2: &str, dex: &str, preferred: bool) -> String {
	json!({
		"chain-1": {"chain-name": chain_1, "client-id": "07-tendermint-1", "connection-id": "connection-1"},
		"chain-2": {"chain-name": chain_2, "client-id": "07-tendermint-0", "connection-id": "connection-0"},
		"channels": [{
			"chain-1": {"channel-id": "channel-141", "port-id": "transfer"},
			"chain-2": {"channel-id": "channel-0", "port-id": "transfer"},
			"ordering": "unordered",
			"version": "ics20-1",
			"tags": {"status": "live", "preferred": preferred, "dex": dex}
		}]
	})
	.to_string()
}

/// Two chains, their asset lists and the path between them
pub fn atom_osmo_registry() -> MemorySource {
	let source = MemorySource::new();
	source.insert_file(
		"atom/chain.json",
		json!({
			"chain_name": "atom",
			"chain_id": "cosmoshub-4",
			"apis": {"rpc": [{"address": "https://rpc.cosmos.network", "provider": "cosmos"}]},
			"peers": {"seeds": [{"id": "ade4d8", "address": "seed.cosmos.network:26656"}]}
		})
		.to_string(),
	);
	source.insert_file(
		"atom/assetlist.json",
		json!({
			"chain_name": "atom",
			"chain_id": "cosmoshub-4",
			"assets": [{"base": "uatom", "display": "atom", "symbol": "ATOM"}]
		})
		.to_string(),
	);
	source.insert_file(
		"osmo/chain.json",
		json!({"chain_name": "osmo", "chain_id": "osmosis-1"}).to_string(),
	);
	source.insert_file(
		"osmo/assetlist.json",
		json!({
			"chain_name": "osmo",
			"chain_id": "osmosis-1",
			"assets": [
				{"base": "uosmo", "display": "osmo", "symbol": "OSMO"},
				{"base": "uion", "display": "ion", "symbol": "ION"}
			]
		})
		.to_string(),
	);
	source.insert_file("_IBC/atom-osmo.json", path_json("atom", "osmo", "osmosis", true));
	source.add_commit("abc123", Utc::now() - chrono::Duration::minutes(5));
	source
}
