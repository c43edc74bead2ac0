//! Test double for the API collaborator, recording every delegated call.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::api::{ApiHandle, OozieApi};
use crate::error::{OozieError, Result};
use crate::types::ControlAction;

#[derive(Default)]
pub struct MockApi {
    log_calls: AtomicUsize,
    definition_calls: AtomicUsize,
    control_calls: Mutex<Vec<(String, ControlAction)>>,
    fail: bool,
}

impl MockApi {
    /// A mock whose every call reports a remote failure.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn log_calls(&self) -> usize {
        self.log_calls.load(Ordering::SeqCst)
    }

    pub fn definition_calls(&self) -> usize {
        self.definition_calls.load(Ordering::SeqCst)
    }

    pub fn control_calls(&self) -> Vec<(String, ControlAction)> {
        self.control_calls
            .lock()
            .expect("mock lock poisoned")
            .clone()
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            Err(OozieError::Remote("mock failure".into()))
        } else {
            Ok(())
        }
    }
}

impl OozieApi for MockApi {
    fn get_job_log(&self, job_id: &str) -> Result<String> {
        self.check()?;
        self.log_calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("log for {job_id}"))
    }

    fn get_job_definition(&self, job_id: &str) -> Result<String> {
        self.check()?;
        self.definition_calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("definition for {job_id}"))
    }

    fn job_control(&self, job_id: &str, action: ControlAction) -> Result<()> {
        self.check()?;
        self.control_calls
            .lock()
            .expect("mock lock poisoned")
            .push((job_id.to_string(), action));
        Ok(())
    }
}

/// Fresh handle to a recording mock.
pub fn mock_api() -> ApiHandle {
    Arc::new(MockApi::default())
}
