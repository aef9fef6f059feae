//! Configuration settings structures

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub registry: RegistrySettings,
	pub sync: SyncSettings,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Location and layout of the mirrored registry
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RegistrySettings {
	/// `owner/name` of the registry repository
	pub repository: String,
	pub branch: String,
	/// Base URL of the directory listing and commit history API
	pub api_base_url: String,
	/// Base URL raw documents are served from
	pub raw_base_url: String,
	/// Directory holding the IBC path documents
	pub paths_directory: String,
	/// Top-level directories containing this marker are not chains
	pub excluded_marker: String,
	/// Top-level directories starting with any of these are not chains
	pub excluded_prefixes: Vec<String>,
}

/// Synchronization cadence and failure handling
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SyncSettings {
	/// Seconds between synchronization passes
	pub interval_secs: u64,
	/// Upper bound on document fetches in flight during a pass
	pub max_concurrent_fetches: usize,
	pub failure_policy: FailurePolicy,
}

/// What a pass does when one chain's or path's documents fail to fetch or parse
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
	/// Abandon the whole pass and keep serving the previous snapshot
	#[default]
	Abort,
	/// Leave the failing entity out of this pass and publish the rest
	Skip,
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Request timeout for HTTP clients
	pub request_ms: u64,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
	#[error("invalid value for {field}: {reason}")]
	InvalidField { field: &'static str, reason: String },
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
		}
	}
}

impl Default for RegistrySettings {
	fn default() -> Self {
		Self {
			repository: "cosmos/chain-registry".to_string(),
			branch: "master".to_string(),
			api_base_url: "https://api.github.com".to_string(),
			raw_base_url: "https://raw.githubusercontent.com".to_string(),
			paths_directory: "_IBC".to_string(),
			excluded_marker: "testnets".to_string(),
			excluded_prefixes: Vec::new(),
		}
	}
}

impl Default for SyncSettings {
	fn default() -> Self {
		Self {
			interval_secs: 300,
			max_concurrent_fetches: 8,
			failure_policy: FailurePolicy::Abort,
		}
	}
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self { request_ms: 10_000 }
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	pub fn sync_interval(&self) -> Duration {
		Duration::from_secs(self.sync.interval_secs)
	}

	pub fn request_timeout(&self) -> Duration {
		Duration::from_millis(self.timeouts.request_ms)
	}

	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		fn invalid(field: &'static str, reason: &str) -> ConfigValidationError {
			ConfigValidationError::InvalidField {
				field,
				reason: reason.to_string(),
			}
		}

		let repository = &self.registry.repository;
		match repository.split_once('/') {
			Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {},
			_ => return Err(invalid("registry.repository", "expected 'owner/name'")),
		}
		if self.registry.branch.is_empty() {
			return Err(invalid("registry.branch", "must not be empty"));
		}
		if self.registry.paths_directory.is_empty() {
			return Err(invalid("registry.paths_directory", "must not be empty"));
		}
		if self.sync.interval_secs == 0 {
			return Err(invalid("sync.interval_secs", "must be greater than zero"));
		}
		if self.sync.max_concurrent_fetches == 0 {
			return Err(invalid(
				"sync.max_concurrent_fetches",
				"must be greater than zero",
			));
		}
		if self.timeouts.request_ms == 0 {
			return Err(invalid("timeouts.request_ms", "must be greater than zero"));
		}
		Ok(())
	}
}
