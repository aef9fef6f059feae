//! Skychart Service
//!
//! Registry synchronization, read-only queries over the published snapshot,
//! and the background job that keeps the snapshot fresh.

pub mod jobs;
pub mod query;
pub mod sync;

#[cfg(test)]
mod test_support;

pub use jobs::{BackgroundJob, BackgroundJobHandler, JobError, JobHandler, PollingScheduler};
pub use query::RegistryQueryService;
pub use sync::{
	discover_chains, discover_paths, DiscoveredPath, RegistrySync, RegistrySynchronizer,
	SyncError, SyncOptions, SyncOutcome, SyncPhase,
};
