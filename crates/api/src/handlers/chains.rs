//! Chain handlers

use axum::{
	extract::{Path, State},
	response::Json,
};
use skychart_types::{AssetList, Chain, EndpointList};
use tracing::debug;

use crate::handlers::common::{query_error, ApiError};
use crate::state::AppState;

/// GET /v1/chains - Chain names in discovery order
pub async fn list_chains(State(state): State<AppState>) -> Json<Vec<String>> {
	Json(state.query_service.list_chain_names())
}

/// GET /v1/chain/{chain} - Chain by name or chain id
pub async fn get_chain(
	State(state): State<AppState>,
	Path(chain): Path<String>,
) -> Result<Json<Chain>, ApiError> {
	debug!("Looking up chain '{}'", chain);
	state
		.query_service
		.get_chain(&chain)
		.map(Json)
		.map_err(query_error)
}

/// GET /v1/chain/{chain}/endpoints/{kind} - One endpoint group of a chain
pub async fn get_endpoints(
	State(state): State<AppState>,
	Path((chain, kind)): Path<(String, String)>,
) -> Result<Json<EndpointList>, ApiError> {
	state
		.query_service
		.get_endpoints(&chain, &kind)
		.map(Json)
		.map_err(query_error)
}

/// GET /v1/chain/{chain}/assets - Asset list of a chain
pub async fn get_chain_assets(
	State(state): State<AppState>,
	Path(chain): Path<String>,
) -> Result<Json<AssetList>, ApiError> {
	state
		.query_service
		.get_asset_list(&chain)
		.map(Json)
		.map_err(query_error)
}
