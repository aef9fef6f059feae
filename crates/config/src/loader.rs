//! Configuration loading utilities

use crate::settings::ConfigValidationError;
use crate::Settings;
use config::{Config, ConfigError, Environment, File};
use thiserror::Error;

/// Default location of the optional configuration file (extension resolved by `config`)
pub const DEFAULT_CONFIG_PATH: &str = "config/config";

/// Prefix of environment variable overrides, e.g. `SKYCHART__SYNC__INTERVAL_SECS=60`
pub const ENV_PREFIX: &str = "SKYCHART";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
	#[error("failed to load configuration: {0}")]
	Config(#[from] ConfigError),

	#[error("invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),
}

/// Load configuration from `CONFIG_PATH` (or the default file) and the environment
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
	load_config_from(&path)
}

/// Load configuration from a specific file path, then apply environment overrides
///
/// The file is optional; missing sections and fields fall back to defaults.
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	let settings: Settings = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true),
		)
		.build()?
		.try_deserialize()?;

	settings.validate()?;
	Ok(settings)
}
