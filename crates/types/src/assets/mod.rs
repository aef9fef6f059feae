//! Asset list domain model
//!
//! Mirrors the `assetlist.json` document published next to each `chain.json`.

use serde::{Deserialize, Serialize};

/// The fungible assets native to, or bridged onto, a chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetList {
	pub chain_name: String,
	/// Identifier of the owning chain, matched against `Chain::chain_id`
	pub chain_id: String,
	pub assets: Vec<Asset>,
}

/// A single asset entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
	pub description: String,
	pub denom_units: Vec<DenomUnit>,
	pub base: String,
	pub name: String,
	/// Display denomination, unique within the list
	pub display: String,
	pub symbol: String,
	#[serde(rename = "logo_URIs")]
	pub logo_uris: LogoUris,
	pub coingecko_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DenomUnit {
	pub denom: String,
	pub exponent: u32,
	pub aliases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoUris {
	pub png: String,
	pub svg: String,
}

impl AssetList {
	/// Find an asset by its display name
	pub fn find_by_display(&self, display: &str) -> Option<&Asset> {
		self.assets.iter().find(|asset| asset.display == display)
	}
}

impl Asset {
	pub fn new(base: impl Into<String>, display: impl Into<String>, symbol: impl Into<String>) -> Self {
		Self {
			base: base.into(),
			display: display.into(),
			symbol: symbol.into(),
			..Default::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_asset_list_decodes_logo_uris() {
		let json = r#"{
			"chain_id": "osmosis-1",
			"assets": [{
				"base": "uosmo",
				"display": "osmo",
				"symbol": "OSMO",
				"denom_units": [{"denom": "uosmo", "exponent": 0}, {"denom": "osmo", "exponent": 6}],
				"logo_URIs": {"png": "https://example.com/osmo.png"}
			}]
		}"#;

		let list: AssetList = serde_json::from_str(json).unwrap();
		assert_eq!(list.chain_id, "osmosis-1");
		assert_eq!(list.assets[0].logo_uris.png, "https://example.com/osmo.png");
		assert_eq!(list.assets[0].denom_units[1].exponent, 6);
	}

	#[test]
	fn test_find_by_display() {
		let list = AssetList {
			chain_name: "osmosis".to_string(),
			chain_id: "osmosis-1".to_string(),
			assets: vec![Asset::new("uosmo", "osmo", "OSMO"), Asset::new("uion", "ion", "ION")],
		};

		assert_eq!(list.find_by_display("ion").unwrap().symbol, "ION");
		assert!(list.find_by_display("uion").is_none());
	}
}
