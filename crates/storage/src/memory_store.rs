//! In-memory snapshot store backed by a single atomic pointer

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, info};

use crate::snapshot::RegistrySnapshot;
use crate::traits::SnapshotStore;

/// In-memory store publishing snapshots with one atomic pointer swap
///
/// Loads are lock-free. There is a single writer (the synchronizer), so
/// publication does not need compare-and-swap.
#[derive(Clone)]
pub struct MemoryStore {
	current: Arc<ArcSwap<RegistrySnapshot>>,
}

impl MemoryStore {
	/// Create a store serving the empty snapshot
	pub fn new() -> Self {
		Self {
			current: Arc::new(ArcSwap::from_pointee(RegistrySnapshot::empty())),
		}
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

impl SnapshotStore for MemoryStore {
	fn current(&self) -> Arc<RegistrySnapshot> {
		self.current.load_full()
	}

	fn publish(&self, snapshot: RegistrySnapshot) -> Arc<RegistrySnapshot> {
		let version = self.current.load().version() + 1;
		let published = Arc::new(snapshot.with_version(version));
		self.current.store(Arc::clone(&published));

		let stats = published.stats();
		info!(
			"Published registry snapshot v{} ({} chains, {} asset lists, {} paths)",
			stats.version, stats.chains, stats.asset_lists, stats.paths
		);
		debug!("Snapshot v{} has {} tag buckets", version, stats.tag_buckets);

		published
	}
}
