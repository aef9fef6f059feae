//! Registry sync job handler

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::jobs::types::JobResult;
use crate::sync::{RegistrySync, SyncOutcome};

/// Runs one synchronization pass and reports its outcome
pub struct RegistrySyncHandler {
	sync: Arc<dyn RegistrySync>,
}

impl RegistrySyncHandler {
	pub fn new(sync: Arc<dyn RegistrySync>) -> Self {
		Self { sync }
	}

	pub async fn handle(&self) -> JobResult<SyncOutcome> {
		match self.sync.sync_once().await {
			Ok(outcome) => {
				match &outcome {
					SyncOutcome::Unchanged { checked_at } => {
						debug!("Registry unchanged as of {}", checked_at)
					},
					SyncOutcome::Published {
						version, skipped, ..
					} if !skipped.is_empty() => {
						info!(
							"Registry snapshot v{} published without: {}",
							version,
							skipped.join(", ")
						)
					},
					SyncOutcome::Published { .. } => {},
					SyncOutcome::AlreadyRunning => {
						debug!("Registry sync still running from a previous trigger")
					},
				}
				Ok(outcome)
			},
			Err(e) => {
				error!("Registry sync failed, keeping previous snapshot: {}", e);
				Err(e.into())
			},
		}
	}
}
