use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{
	filter_paths, get_asset, get_chain, get_chain_assets, get_endpoints, get_path, health,
	list_assets, list_chains, list_path_names, list_paths,
};
use crate::security::add_response_headers;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
	let cors = CorsLayer::permissive();
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::DEBUG))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	let router = Router::new()
		.route("/health", get(health))
		.route("/v1/chains", get(list_chains))
		.route("/v1/chain/{chain}", get(get_chain))
		.route("/v1/chain/{chain}/endpoints/{kind}", get(get_endpoints))
		.route("/v1/chain/{chain}/assets", get(get_chain_assets))
		.route("/v1/assets", get(list_assets))
		.route("/v1/asset/{display}", get(get_asset))
		.route("/v1/paths", get(list_paths))
		.route("/v1/paths/names", get(list_path_names))
		.route("/v1/paths/filter", get(filter_paths))
		.route("/v1/path/{name}", get(get_path))
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id);

	add_response_headers(router)
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{
		body::{to_bytes, Body},
		http::{Request, StatusCode},
	};
	use serde_json::Value;
	use skychart_adapters::MemorySource;
	use skychart_service::{RegistryQueryService, RegistrySynchronizer, SyncOptions};
	use skychart_storage::{MemoryStore, RegistryDocuments, RegistrySnapshot, SnapshotStore};
	use skychart_types::{parse_path, Asset, AssetList, Chain, Endpoint};
	use std::sync::Arc;
	use tower::ServiceExt;

	const PATH_DOCUMENT: &str = r#"{
		"chain-1": {"chain-name": "cosmoshub", "client-id": "07-tendermint-259", "connection-id": "connection-257"},
		"chain-2": {"chain-name": "osmosis", "client-id": "07-tendermint-1", "connection-id": "connection-1"},
		"channels": [{
			"chain-1": {"channel-id": "channel-141", "port-id": "transfer"},
			"chain-2": {"channel-id": "channel-0", "port-id": "transfer"},
			"ordering": "unordered",
			"version": "ics20-1",
			"tags": {"status": "live", "preferred": true, "dex": "osmosis"}
		}]
	}"#;

	fn app() -> Router {
		let store: Arc<dyn SnapshotStore> = Arc::new(MemoryStore::new());

		let mut cosmoshub = Chain::new("cosmoshub", "cosmoshub-4");
		cosmoshub.apis.rpc.push(Endpoint {
			address: "https://rpc.cosmos.network".to_string(),
			provider: "cosmos".to_string(),
		});
		let asset_list = AssetList {
			chain_name: "cosmoshub".to_string(),
			chain_id: "cosmoshub-4".to_string(),
			assets: vec![Asset::new("uatom", "atom", "ATOM")],
		};

		let mut documents = RegistryDocuments::new();
		documents.insert_chain("cosmoshub", Some(cosmoshub), Some(asset_list));
		documents.insert_chain("osmosis", Some(Chain::new("osmosis", "osmosis-1")), None);
		documents.insert_path(
			"cosmoshub-osmosis",
			Some(parse_path(PATH_DOCUMENT.as_bytes()).unwrap()),
		);
		store.publish(RegistrySnapshot::build(documents, chrono::Utc::now()));

		let sync = RegistrySynchronizer::new(
			Arc::new(MemorySource::new()),
			Arc::clone(&store),
			SyncOptions::default(),
		);
		let state = AppState {
			query_service: Arc::new(RegistryQueryService::new(store)),
			sync: Arc::new(sync),
		};
		create_router().with_state(state)
	}

	async fn get_json(uri: &str) -> (StatusCode, Value) {
		let response = app()
			.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
			.await
			.unwrap();
		let status = response.status();
		let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
		(status, serde_json::from_slice(&body).unwrap())
	}

	#[tokio::test]
	async fn test_health_reports_snapshot() {
		let (status, body) = get_json("/health").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["status"], "ok");
		assert_eq!(body["sync_phase"], "idle");
		assert_eq!(body["snapshot"]["version"], 1);
		assert_eq!(body["snapshot"]["chains"], 2);
	}

	#[tokio::test]
	async fn test_chain_routes() {
		let (status, body) = get_json("/v1/chains").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, serde_json::json!(["cosmoshub", "osmosis"]));

		let (status, body) = get_json("/v1/chain/cosmoshub-4").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["chain_name"], "cosmoshub");

		let (status, body) = get_json("/v1/chain/cosmoshub/endpoints/rpc").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body[0]["address"], "https://rpc.cosmos.network");

		let (status, body) = get_json("/v1/chain/cosmoshub/endpoints/websocket").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["error"], "BAD_REQUEST");

		let (status, _) = get_json("/v1/chain/osmosis/assets").await;
		assert_eq!(status, StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn test_asset_routes() {
		let (status, body) = get_json("/v1/assets").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, serde_json::json!(["atom"]));

		let (status, body) = get_json("/v1/asset/atom").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["base"], "uatom");
		assert_eq!(body["logo_URIs"]["png"], "");

		let (status, body) = get_json("/v1/asset/uatom").await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body["error"], "NOT_FOUND");
		assert!(body["timestamp"].is_i64());
	}

	#[tokio::test]
	async fn test_path_routes() {
		let (status, forward) = get_json("/v1/path/cosmoshub-osmosis").await;
		assert_eq!(status, StatusCode::OK);
		let (_, backward) = get_json("/v1/path/osmosis-cosmoshub").await;
		assert_eq!(forward, backward);
		assert_eq!(forward["chain-1"]["chain-name"], "cosmoshub");

		let (status, _) = get_json("/v1/path/cosmoshub-juno").await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		let (status, _) = get_json("/v1/path/cosmoshub").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);

		let (_, names) = get_json("/v1/paths/names").await;
		assert_eq!(names, serde_json::json!(["cosmoshub-osmosis"]));
	}

	#[tokio::test]
	async fn test_filter_route() {
		let (status, body) = get_json("/v1/paths/filter?dex=osmosis").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body.as_array().map(Vec::len), Some(1));

		let (_, body) = get_json("/v1/paths/filter?preferred=false").await;
		assert_eq!(body, serde_json::json!([]));

		let (_, body) = get_json("/v1/paths/filter?status=").await;
		assert_eq!(body.as_array().map(Vec::len), Some(1));

		let (status, body) = get_json("/v1/paths/filter?chain=osmosis").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["error"], "BAD_REQUEST");

		let (status, _) = get_json("/v1/paths/filter").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
	}
}
