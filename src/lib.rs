//! Skychart
//!
//! In-memory mirror of the Cosmos chain registry. A background job polls the
//! hosted registry, rebuilds the chain, asset and IBC path indexes, and
//! publishes them as an immutable snapshot served over HTTP.

// Core domain types
pub use skychart_types::{
	chrono, serde_json, Asset, AssetList, Chain, EndpointKind, EndpointList, Path, QueryError,
	RegistrySource, SourceError, TagDimension,
};

// Storage layer
pub use skychart_storage::{MemoryStore, RegistrySnapshot, SnapshotStats, SnapshotStore};

// Service layer
pub use skychart_service::{
	PollingScheduler, RegistryQueryService, RegistrySync, RegistrySynchronizer, SyncError,
	SyncOptions, SyncOutcome,
};

// Adapters
pub use skychart_adapters::{GithubSource, MemorySource};

// API layer
pub use skychart_api::{create_router, AppState};

// Config
pub use skychart_config::{load_config, log_service_info, log_startup_complete, Settings};

pub mod models {
	pub use skychart_types::*;
}

pub mod storage {
	pub use skychart_storage::*;
}

pub mod config {
	pub use skychart_config::*;
}

pub mod adapters {
	pub use skychart_adapters::*;
}

pub mod api {
	pub use skychart_api::*;
}

pub mod service {
	pub use skychart_service::*;
}

use std::net::SocketAddr;
use std::sync::Arc;

use skychart_config::{log_service_shutdown, LogFormat};
use skychart_service::{BackgroundJob, BackgroundJobHandler};
use tracing::info;

/// Builder wiring the registry source, snapshot store, services and router
#[derive(Default)]
pub struct SkychartBuilder {
	settings: Option<Settings>,
	source: Option<Arc<dyn RegistrySource>>,
	store: Option<Arc<dyn SnapshotStore>>,
}

impl SkychartBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Use `source` instead of the GitHub registry named in the settings
	pub fn with_source(mut self, source: Arc<dyn RegistrySource>) -> Self {
		self.source = Some(source);
		self
	}

	pub fn with_store(mut self, store: Arc<dyn SnapshotStore>) -> Self {
		self.store = Some(store);
		self
	}

	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	fn init_tracing_from_settings(&self, settings: &Settings) {
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);
	}

	/// Build the services and router without starting any background work
	///
	/// The snapshot stays empty until a pass runs, either through the
	/// returned state's synchronizer or a `PollingScheduler`.
	pub fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings.validate()?;

		let source = match self.source {
			Some(source) => source,
			None => Arc::new(GithubSource::from_settings(&settings)?) as Arc<dyn RegistrySource>,
		};
		let store = self
			.store
			.unwrap_or_else(|| Arc::new(MemoryStore::new()) as Arc<dyn SnapshotStore>);
		info!("Registry source: {}", source.describe());

		let synchronizer = RegistrySynchronizer::new(
			source,
			Arc::clone(&store),
			SyncOptions::from_settings(&settings),
		);

		let app_state = AppState {
			query_service: Arc::new(RegistryQueryService::new(store)),
			sync: Arc::new(synchronizer),
		};
		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server
	///
	/// Loads `.env` and the configuration unless settings were provided,
	/// initializes tracing, starts registry polling and serves until Ctrl-C.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config()?,
		};

		self.init_tracing_from_settings(&settings);
		log_service_info(&settings);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;
		let sync_interval = settings.sync_interval();

		let (app, state) = self.with_settings(settings).start()?;

		let scheduler = PollingScheduler::new(
			Arc::new(BackgroundJobHandler::new(Arc::clone(&state.sync))),
			BackgroundJob::SyncRegistry,
		);
		let cancel = scheduler.cancellation_token();
		let polling = scheduler.spawn(sync_interval);

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  GET  /v1/chains");
		info!("  GET  /v1/chain/{{chain}}");
		info!("  GET  /v1/chain/{{chain}}/endpoints/{{kind}}");
		info!("  GET  /v1/chain/{{chain}}/assets");
		info!("  GET  /v1/assets");
		info!("  GET  /v1/asset/{{display}}");
		info!("  GET  /v1/paths");
		info!("  GET  /v1/paths/names");
		info!("  GET  /v1/paths/filter?{{dex|preferred|properties|status}}=value");
		info!("  GET  /v1/path/{{chain1}}-{{chain2}}");

		axum::serve(listener, app)
			.with_graceful_shutdown(async {
				let _ = tokio::signal::ctrl_c().await;
			})
			.await?;

		cancel.cancel();
		polling.await?;
		log_service_shutdown();

		Ok(())
	}
}
