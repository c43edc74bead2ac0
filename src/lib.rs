//! Client-side models for an Oozie-style batch-job orchestration service.
//!
//! Raw JSON payloads from the service hydrate into typed [`Workflow`] and
//! [`Coordinator`] jobs that expose status inspection, lifecycle control
//! relayed through an [`OozieApi`] handle, and lazily fetched logs and
//! definitions. This crate only represents jobs and relays control intents;
//! it never schedules or retries anything itself.

pub mod action;
pub mod api;
pub mod coordinator;
pub mod error;
pub mod job;
pub mod list;
pub mod parse;
pub mod types;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{CoordinatorAction, JobAction, WorkflowAction};
pub use api::{ApiHandle, OozieApi};
pub use coordinator::{Coordinator, CoordinatorInfo};
pub use error::{OozieError, Result};
pub use job::{Job, JobVariant};
pub use list::{CoordinatorList, JobList, WorkflowList};
pub use types::{ControlAction, JobKind, JobLocator, JobStatus};
pub use workflow::{Workflow, WorkflowInfo};
