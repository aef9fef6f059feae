//! Polling scheduler for recurring jobs

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::handlers::JobHandler;
use super::types::BackgroundJob;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Runs a job immediately and then on every interval tick
///
/// Ticks missed while a job is still running are skipped rather than
/// replayed. The loop ends when the cancellation token fires.
pub struct PollingScheduler {
	handler: Arc<dyn JobHandler>,
	job: BackgroundJob,
	cancel: CancellationToken,
}

impl PollingScheduler {
	pub fn new(handler: Arc<dyn JobHandler>, job: BackgroundJob) -> Self {
		Self {
			handler,
			job,
			cancel: CancellationToken::new(),
		}
	}

	/// Token that stops the loop once cancelled
	pub fn cancellation_token(&self) -> CancellationToken {
		self.cancel.clone()
	}

	pub fn spawn(self, interval: Duration) -> JoinHandle<()> {
		let Self {
			handler,
			job,
			cancel,
		} = self;

		tokio::spawn(async move {
			let mut ticker = tokio::time::interval(interval.max(MIN_INTERVAL));
			ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
			info!(
				"🔄 Scheduled '{}' every {:?}",
				job.description(),
				interval
			);

			loop {
				tokio::select! {
					_ = cancel.cancelled() => {
						info!("Stopping '{}'", job.description());
						break;
					}
					_ = ticker.tick() => {
						if let Err(e) = handler.handle(job.clone()).await {
							warn!("'{}' failed: {}", job.description(), e);
						}
					}
				}
			}
		})
	}
}
