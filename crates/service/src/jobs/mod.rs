//! Background jobs
//!
//! Periodic registry synchronization. The scheduler owns the timer loop and
//! hands each tick to a job handler; failures are logged and the loop keeps
//! running until it is cancelled.

pub mod handlers;
pub mod scheduler;
pub mod types;

pub use handlers::{BackgroundJobHandler, JobHandler, RegistrySyncHandler};
pub use scheduler::PollingScheduler;
pub use types::{BackgroundJob, JobError, JobResult};
