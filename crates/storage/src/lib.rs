//! Skychart Storage
//!
//! Index building and snapshot storage for the skychart registry mirror.
//! Snapshots are immutable and published atomically, so queries never lock
//! and never observe a partially rebuilt index.

pub mod documents;
pub mod index;
pub mod memory_store;
pub mod snapshot;
pub mod traits;

pub use documents::RegistryDocuments;
pub use index::{AssetCollision, RegistryIndex, TagKey};
pub use memory_store::MemoryStore;
pub use snapshot::{RegistrySnapshot, SnapshotStats};
pub use traits::SnapshotStore;
