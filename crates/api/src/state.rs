use std::sync::Arc;

use skychart_service::{RegistryQueryService, RegistrySync};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub query_service: Arc<RegistryQueryService>,
	pub sync: Arc<dyn RegistrySync>,
}
