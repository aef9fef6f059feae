use axum::{extract::State, response::Json};
use serde::Serialize;
use skychart_service::SyncPhase;
use skychart_storage::SnapshotStats;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	/// `ok` once a snapshot has been published, `initializing` before
	pub status: &'static str,
	pub sync_phase: SyncPhase,
	pub snapshot: SnapshotStats,
}

/// GET /health - Liveness plus snapshot summary
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
	let snapshot = state.query_service.snapshot_stats();
	let status = if snapshot.version > 0 {
		"ok"
	} else {
		"initializing"
	};
	Json(HealthResponse {
		status,
		sync_phase: state.sync.phase(),
		snapshot,
	})
}
