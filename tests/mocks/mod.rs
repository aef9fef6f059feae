//! Shared fixtures and servers for integration tests

pub mod fixtures;
pub mod test_server;

#[allow(unused_imports)]
pub use fixtures::sample_registry;
#[allow(unused_imports)]
pub use test_server::TestServer;
