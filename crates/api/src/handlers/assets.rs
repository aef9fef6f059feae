//! Asset handlers

use axum::{
	extract::{Path, State},
	response::Json,
};
use skychart_types::Asset;

use crate::handlers::common::{query_error, ApiError};
use crate::state::AppState;

/// GET /v1/assets - Indexed asset display names, sorted
pub async fn list_assets(State(state): State<AppState>) -> Json<Vec<String>> {
	Json(state.query_service.list_asset_names())
}

/// GET /v1/asset/{display} - Asset by display name
pub async fn get_asset(
	State(state): State<AppState>,
	Path(display): Path<String>,
) -> Result<Json<Asset>, ApiError> {
	state
		.query_service
		.get_asset(&display)
		.map(Json)
		.map_err(query_error)
}
