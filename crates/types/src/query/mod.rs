//! Query-facing types shared by the service and API layers

pub mod endpoints;
pub mod errors;

pub use endpoints::{EndpointKind, EndpointList};
pub use errors::{QueryError, QueryResult, Resource};
