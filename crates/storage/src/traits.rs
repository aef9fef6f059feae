//! Storage traits for pluggable snapshot stores

use std::sync::Arc;

use crate::snapshot::{RegistrySnapshot, SnapshotStats};

/// Holds the snapshot currently served to readers
///
/// Publication replaces the whole snapshot in one step; readers either see
/// the previous snapshot or the new one, never a mix.
pub trait SnapshotStore: Send + Sync {
	/// The latest published snapshot
	fn current(&self) -> Arc<RegistrySnapshot>;

	/// Publish a new snapshot, assigning it the next version number
	fn publish(&self, snapshot: RegistrySnapshot) -> Arc<RegistrySnapshot>;

	fn stats(&self) -> SnapshotStats {
		self.current().stats()
	}
}
