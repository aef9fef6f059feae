//! Skychart Configuration
//!
//! Configuration management and startup utilities for the skychart registry mirror.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use settings::{
	ConfigValidationError, FailurePolicy, LogFormat, LoggingSettings, RegistrySettings,
	ServerSettings, Settings, SyncSettings, TimeoutSettings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
