//! Remote registry source abstractions

pub mod errors;
pub mod listing;
pub mod traits;

pub use errors::{SourceError, SourceResult};
pub use listing::{DirectoryEntry, EntryKind};
pub use traits::RegistrySource;
