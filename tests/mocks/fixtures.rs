//! Sample registry served from memory

use serde_json::json;
use skychart::{chrono, MemorySource};

fn ibc_channel(
	channel_1: &str,
	channel_2: &str,
	port: &str,
	tags: serde_json::Value,
) -> serde_json::Value {
	json!({
		"chain-1": {"channel-id": channel_1, "port-id": port},
		"chain-2": {"channel-id": channel_2, "port-id": port},
		"ordering": "unordered",
		"version": "ics20-1",
		"tags": tags
	})
}

/// Three mainnet chains, one testnet and two IBC paths
///
/// `juno` has no asset list. `juno-osmosis` has a preferred transfer channel
/// and a killed wasm channel.
#[allow(dead_code)]
pub fn sample_registry() -> MemorySource {
	let source = MemorySource::new();

	source.insert_file(
		"cosmoshub/chain.json",
		json!({
			"$schema": "../chain.schema.json",
			"chain_name": "cosmoshub",
			"status": "live",
			"network_type": "mainnet",
			"pretty_name": "Cosmos Hub",
			"chain_id": "cosmoshub-4",
			"bech32_prefix": "cosmos",
			"daemon_name": "gaiad",
			"node_home": "$HOME/.gaia",
			"slip44": 118,
			"apis": {
				"rpc": [{"address": "https://rpc.cosmos.network", "provider": "cosmos"}],
				"grpc": [{"address": "grpc.cosmos.network:443"}],
				"rest": [
					{"address": "https://lcd.cosmos.network", "provider": "cosmos"},
					{"address": "https://rest.cosmos.directory/cosmoshub"}
				]
			},
			"peers": {
				"seeds": [{"id": "ade4d8bc8cbe014af6ebdf3cb7b1e9ad36f412c0", "address": "seeds.polkachu.com:14956"}],
				"persistent_peers": [{"id": "ee27245d88c632a556cf72cc7f3587380c09b469", "address": "45.79.249.253:26656"}]
			}
		})
		.to_string(),
	);
	source.insert_file(
		"cosmoshub/assetlist.json",
		json!({
			"chain_name": "cosmoshub",
			"chain_id": "cosmoshub-4",
			"assets": [{
				"description": "The native staking and governance token of the Cosmos Hub.",
				"denom_units": [{"denom": "uatom", "exponent": 0}, {"denom": "atom", "exponent": 6}],
				"base": "uatom",
				"name": "Cosmos Hub Atom",
				"display": "atom",
				"symbol": "ATOM",
				"logo_URIs": {"png": "https://example.org/atom.png"},
				"coingecko_id": "cosmos"
			}]
		})
		.to_string(),
	);

	source.insert_file(
		"osmosis/chain.json",
		json!({"chain_name": "osmosis", "chain_id": "osmosis-1", "pretty_name": "Osmosis"})
			.to_string(),
	);
	source.insert_file(
		"osmosis/assetlist.json",
		json!({
			"chain_name": "osmosis",
			"chain_id": "osmosis-1",
			"assets": [
				{"base": "uosmo", "display": "osmo", "symbol": "OSMO"},
				{"base": "uion", "display": "ion", "symbol": "ION"}
			]
		})
		.to_string(),
	);

	source.insert_file(
		"juno/chain.json",
		json!({"chain_name": "juno", "chain_id": "juno-1"}).to_string(),
	);

	source.insert_file(
		"testnets/osmosistestnet/chain.json",
		json!({"chain_name": "osmosistestnet", "chain_id": "osmo-test-5"}).to_string(),
	);

	source.insert_file(
		"_IBC/cosmoshub-osmosis.json",
		json!({
			"chain-1": {"chain-name": "cosmoshub", "client-id": "07-tendermint-259", "connection-id": "connection-257"},
			"chain-2": {"chain-name": "osmosis", "client-id": "07-tendermint-1", "connection-id": "connection-1"},
			"channels": [ibc_channel(
				"channel-141",
				"channel-0",
				"transfer",
				json!({"status": "live", "preferred": true, "dex": "osmosis"})
			)]
		})
		.to_string(),
	);
	source.insert_file(
		"_IBC/juno-osmosis.json",
		json!({
			"chain-1": {"chain-name": "juno", "client-id": "07-tendermint-0", "connection-id": "connection-0"},
			"chain-2": {"chain-name": "osmosis", "client-id": "07-tendermint-1457", "connection-id": "connection-1142"},
			"channels": [
				ibc_channel(
					"channel-0",
					"channel-42",
					"transfer",
					json!({"status": "live", "preferred": true, "dex": "osmosis"})
				),
				ibc_channel(
					"channel-47",
					"channel-169",
					"wasm.juno1v4887y83d6g28puzvt8cl0f3cdhd3y6y9mpysnsp3k8krdm7l6jqgm0rkn",
					json!({"status": "killed", "preferred": false, "properties": "cw20"})
				)
			]
		})
		.to_string(),
	);

	source.insert_file("README.md", "# Chain Registry");
	source.add_commit("3f2c1a9", chrono::Utc::now() - chrono::Duration::hours(1));

	source
}
