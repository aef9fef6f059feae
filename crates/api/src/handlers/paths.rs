//! Path handlers

use axum::{
	extract::{rejection::QueryRejection, Path as UrlPath, Query, State},
	response::Json,
};
use serde::Deserialize;
use skychart_types::{split_path_name, Path, QueryError, TagDimension};
use tracing::debug;

use crate::handlers::common::{bad_request, query_error, ApiError};
use crate::state::AppState;

/// Query string of `/v1/paths/filter`; exactly one tag must be given
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathFilter {
	pub dex: Option<String>,
	pub preferred: Option<String>,
	pub properties: Option<String>,
	pub status: Option<String>,
}

impl PathFilter {
	/// The single tag dimension and value this filter selects
	pub fn selection(self) -> Result<(TagDimension, String), QueryError> {
		let mut selected: Vec<(TagDimension, String)> = [
			(TagDimension::Dex, self.dex),
			(TagDimension::Preferred, self.preferred),
			(TagDimension::Properties, self.properties),
			(TagDimension::Status, self.status),
		]
		.into_iter()
		.filter_map(|(dimension, value)| value.map(|value| (dimension, value)))
		.collect();

		match selected.len() {
			1 => Ok(selected.remove(0)),
			0 => Err(QueryError::bad_request(
				"expected one of dex, preferred, properties or status",
			)),
			_ => Err(QueryError::bad_request("only one tag filter may be given")),
		}
	}
}

/// GET /v1/paths - Every path
pub async fn list_paths(State(state): State<AppState>) -> Json<Vec<Path>> {
	Json(state.query_service.list_paths())
}

/// GET /v1/paths/names - Canonical path names
pub async fn list_path_names(State(state): State<AppState>) -> Json<Vec<String>> {
	Json(state.query_service.list_path_names())
}

/// GET /v1/paths/filter?{tag}={value} - Paths with a channel carrying a tag value
pub async fn filter_paths(
	State(state): State<AppState>,
	filter: Result<Query<PathFilter>, QueryRejection>,
) -> Result<Json<Vec<Path>>, ApiError> {
	let Query(filter) = filter.map_err(|e| bad_request(e.body_text()))?;
	let (dimension, value) = filter.selection().map_err(query_error)?;
	debug!("Filtering paths by {}={}", dimension, value);
	Ok(Json(state.query_service.get_paths_by_tag(dimension, &value)))
}

/// GET /v1/path/{chain1}-{chain2} - Path between two chains, in either order
pub async fn get_path(
	State(state): State<AppState>,
	UrlPath(name): UrlPath<String>,
) -> Result<Json<Path>, ApiError> {
	let (chain_1, chain_2) = split_path_name(&name)
		.ok_or_else(|| bad_request(format!("path '{}' is not 'chain1-chain2'", name)))?;
	state
		.query_service
		.get_path(chain_1, chain_2)
		.map(Json)
		.map_err(query_error)
}
