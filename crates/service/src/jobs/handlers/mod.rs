//! Job handler implementations

use async_trait::async_trait;
use std::sync::Arc;

use crate::sync::RegistrySync;

use super::types::{BackgroundJob, JobResult};

pub mod registry_sync;

pub use registry_sync::RegistrySyncHandler;

/// Trait for anything that can process a background job
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobHandler: Send + Sync {
	/// Handle a background job
	async fn handle(&self, job: BackgroundJob) -> JobResult;
}

/// Dispatches background jobs to their handlers
pub struct BackgroundJobHandler {
	registry_sync_handler: RegistrySyncHandler,
}

impl BackgroundJobHandler {
	pub fn new(sync: Arc<dyn RegistrySync>) -> Self {
		Self {
			registry_sync_handler: RegistrySyncHandler::new(sync),
		}
	}
}

#[async_trait]
impl JobHandler for BackgroundJobHandler {
	async fn handle(&self, job: BackgroundJob) -> JobResult {
		match job {
			BackgroundJob::SyncRegistry => {
				self.registry_sync_handler.handle().await?;
				Ok(())
			},
		}
	}
}
