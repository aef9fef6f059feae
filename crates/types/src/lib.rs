//! Skychart Types
//!
//! Shared models and traits for the skychart registry mirror.
//! This crate contains the registry documents, the typed parser, the remote
//! source contract and the query error types.

pub mod assets;
pub mod chains;
pub mod parse;
pub mod paths;
pub mod query;
pub mod source;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use assets::{Asset, AssetList, DenomUnit, LogoUris};
pub use chains::{Apis, Chain, Endpoint, Peer, Peers};
pub use parse::{
	parse_asset_list, parse_chain, parse_commit_count, parse_listing, parse_path, DocumentKind,
	ParseError, ParseResult,
};
pub use paths::{
	canonical_path_name, split_path_name, Channel, ChannelEnd, ChannelTags, Path, PathChain,
	TagDimension,
};
pub use query::{EndpointKind, EndpointList, QueryError, QueryResult, Resource};
pub use source::{DirectoryEntry, EntryKind, RegistrySource, SourceError, SourceResult};
