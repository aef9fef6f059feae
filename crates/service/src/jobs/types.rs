//! Background job types and definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sync::SyncError;

/// Errors that can occur during job processing
#[derive(Debug, Error)]
pub enum JobError {
	#[error("Job processing failed: {message}")]
	ProcessingFailed { message: String },

	#[error("Registry sync failed: {0}")]
	Sync(#[from] SyncError),
}

/// Result type for job operations
pub type JobResult<T = ()> = Result<T, JobError>;

/// Background job types that can be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundJob {
	/// Run one registry synchronization pass
	SyncRegistry,
}

impl BackgroundJob {
	/// Get a human-readable description of the job
	pub fn description(&self) -> String {
		match self {
			BackgroundJob::SyncRegistry => "Synchronize registry snapshot".to_string(),
		}
	}
}
