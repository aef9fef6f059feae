//! Service startup logging
//!
//! Logs service, environment and registry details once at startup so a
//! running mirror can be identified from its logs.

use std::env;
use tracing::info;

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info(settings: &Settings) {
	// Use the root package name, not the current crate
	let service_name = "skychart";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Skychart Registry Mirror Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	if let Ok(config_path) = env::var("CONFIG_PATH") {
		info!("📋 Config Path: {}", config_path);
	}

	info!(
		"📚 Registry: {}@{} (paths in {})",
		settings.registry.repository, settings.registry.branch, settings.registry.paths_directory
	);
	info!(
		"🔁 Sync: every {}s, {} concurrent fetches, failure policy {:?}",
		settings.sync.interval_secs, settings.sync.max_concurrent_fetches, settings.sync.failure_policy
	);

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Skychart Registry Mirror Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Skychart Registry Mirror Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}
