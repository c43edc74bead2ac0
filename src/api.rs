//! The narrow interface to the remote orchestration service. Transport,
//! authentication and retry policy all live in the implementation, not here.

use std::sync::Arc;

use crate::error::Result;
use crate::types::ControlAction;

/// Operations a job delegates to the remote service.
///
/// `job_control` may fail with [`OozieError::InvalidTransition`] when the
/// service rejects the verb for the job's actual (not last-hydrated) state;
/// all three may fail with [`OozieError::Remote`].
///
/// [`OozieError::InvalidTransition`]: crate::OozieError::InvalidTransition
/// [`OozieError::Remote`]: crate::OozieError::Remote
pub trait OozieApi {
    /// Fetch the full execution log text for a job.
    fn get_job_log(&self, job_id: &str) -> Result<String>;

    /// Fetch the job definition document.
    fn get_job_definition(&self, job_id: &str) -> Result<String>;

    /// Issue a control verb against a job.
    fn job_control(&self, job_id: &str, action: ControlAction) -> Result<()>;
}

/// Shared handle to the API collaborator, held by every hydrated job.
pub type ApiHandle = Arc<dyn OozieApi + Send + Sync>;
