//! Skychart server
//!
//! Main entry point for the registry mirror

use skychart::SkychartBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	SkychartBuilder::new().start_server().await
}
