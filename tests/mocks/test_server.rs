//! Test server for integration tests

use std::sync::Arc;

use axum::Router;
use skychart::{AppState, MemorySource, RegistrySource, RegistrySync, Settings, SkychartBuilder};
use tokio::task::JoinHandle;

use super::fixtures::sample_registry;

/// Test server instance backed by an in-memory registry
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
	#[allow(dead_code)]
	pub state: AppState,
	#[allow(dead_code)]
	pub source: Arc<MemorySource>,
}

#[allow(dead_code)]
impl TestServer {
	/// Spawn a server over the sample registry after one sync pass
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let server = Self::spawn_unsynced().await?;
		server.state.sync.sync_once().await?;
		Ok(server)
	}

	/// Spawn a server over the sample registry without syncing
	pub async fn spawn_unsynced() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_source(Arc::new(sample_registry()), Settings::default()).await
	}

	pub async fn spawn_with_source(
		source: Arc<MemorySource>,
		settings: Settings,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, state) = SkychartBuilder::new()
			.with_settings(settings)
			.with_source(Arc::clone(&source) as Arc<dyn RegistrySource>)
			.start()?;

		let (base_url, handle) = Self::serve(app).await?;
		Ok(Self {
			base_url,
			handle,
			state,
			source,
		})
	}

	async fn serve(app: Router) -> Result<(String, JoinHandle<()>), Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok((base_url, handle))
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}
