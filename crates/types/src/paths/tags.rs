//! Tag dimensions used to partition paths

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::query::QueryError;

/// The closed set of channel tag facets paths can be filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagDimension {
	Status,
	Preferred,
	Dex,
	Properties,
}

impl TagDimension {
	pub const ALL: [TagDimension; 4] = [
		TagDimension::Status,
		TagDimension::Preferred,
		TagDimension::Dex,
		TagDimension::Properties,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			TagDimension::Status => "status",
			TagDimension::Preferred => "preferred",
			TagDimension::Dex => "dex",
			TagDimension::Properties => "properties",
		}
	}
}

impl fmt::Display for TagDimension {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TagDimension {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		TagDimension::ALL
			.into_iter()
			.find(|dimension| dimension.as_str() == s)
			.ok_or_else(|| QueryError::bad_request(format!("unrecognized tag '{}'", s)))
	}
}
