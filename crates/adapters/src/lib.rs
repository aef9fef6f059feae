//! Skychart Adapters
//!
//! Remote registry sources. `GithubSource` reads the hosted registry over
//! HTTP; `MemorySource` serves an in-memory tree for tests and offline runs.

pub mod github_source;
pub mod memory_source;

pub use github_source::GithubSource;
pub use memory_source::MemorySource;
pub use skychart_types::{RegistrySource, SourceError, SourceResult};
