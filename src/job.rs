//! Shared job behavior: attribute hydration, lazy log/definition retrieval,
//! control delegation and the status policy table. Workflow and coordinator
//! specifics plug in through a variant descriptor instead of subclassing.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::action::JobAction;
use crate::api::ApiHandle;
use crate::error::{OozieError, Result};
use crate::parse::{opt_str, opt_timestamp, parse_config};
use crate::types::{ControlAction, JobKind, JobLocator, JobStatus};

// ---------------------------------------------------------------------------
// JobVariant
// ---------------------------------------------------------------------------

/// Descriptor for a job variant: its action type, its discriminator, the wire
/// keys that differ between variants, and the hydrator for its own fields.
pub trait JobVariant: Sized {
    type Action: JobAction;

    const KIND: JobKind;

    /// Key holding the job collection in a listing payload.
    const LIST_KEY: &'static str;

    /// Wire field carrying the job identifier (`coordJobId` for
    /// coordinators, which is what makes the two variants interchangeable by
    /// a common `id` view).
    const ID_FIELD: &'static str;

    /// Wire field carrying the application name.
    const APP_NAME_FIELD: &'static str;

    fn from_payload(map: &Map<String, Value>) -> Result<Self>;
}

// ---------------------------------------------------------------------------
// Job
// ---------------------------------------------------------------------------

/// A hydrated job. Holds a handle to the API collaborator for control calls
/// and lazy fetches; construction itself never touches the network.
///
/// The `log`/`definition` caches are filled on first access through `&mut
/// self`, so a `Job` wants a single owner; wrap it in a lock if it must be
/// shared across threads.
pub struct Job<V: JobVariant> {
    api: ApiHandle,
    pub id: String,
    pub app_name: Option<String>,
    pub status: Option<JobStatus>,
    pub user: Option<String>,
    pub group: Option<String>,
    pub acl: Option<String>,
    pub console_url: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Raw configuration text, as received.
    pub conf: Option<String>,
    /// Parsed configuration; empty when `conf` is empty or absent.
    pub conf_dict: IndexMap<String, String>,
    /// Actions in the order the service listed them.
    pub actions: Vec<V::Action>,
    /// Variant-specific fields.
    pub info: V,
    log: Option<String>,
    definition: Option<String>,
}

impl<V: JobVariant> Job<V> {
    /// Hydrate from a raw field-to-value mapping. Missing optional fields
    /// hydrate as absent; a missing `actions` list hydrates as empty.
    pub fn from_payload(api: ApiHandle, map: &Map<String, Value>) -> Result<Self> {
        let conf = opt_str(map, "conf");
        let conf_dict = match conf.as_deref() {
            Some(raw) if !raw.is_empty() => parse_config(raw)?,
            _ => IndexMap::new(),
        };

        let actions = match map.get("actions") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(Value::as_object)
                .map(V::Action::from_payload)
                .collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };

        Ok(Self {
            api,
            id: opt_str(map, V::ID_FIELD).unwrap_or_default(),
            app_name: opt_str(map, V::APP_NAME_FIELD),
            status: opt_str(map, "status").and_then(|s| JobStatus::parse(&s)),
            user: opt_str(map, "user"),
            group: opt_str(map, "group"),
            acl: opt_str(map, "acl"),
            console_url: opt_str(map, "consoleUrl"),
            start_time: opt_timestamp(map, "startTime")?,
            end_time: opt_timestamp(map, "endTime")?,
            conf,
            conf_dict,
            actions,
            info: V::from_payload(map)?,
            log: None,
            definition: None,
        })
    }

    pub fn kind(&self) -> JobKind {
        V::KIND
    }

    pub fn locator(&self) -> JobLocator {
        JobLocator::new(V::KIND, self.id.clone())
    }

    // -----------------------------------------------------------------------
    // Lazy accessors
    // -----------------------------------------------------------------------

    /// Execution log, fetched from the service on first access and cached
    /// for the lifetime of this object.
    pub fn log(&mut self) -> Result<&str> {
        if self.log.is_none() {
            debug!(job_id = %self.id, "fetching job log");
            self.log = Some(self.api.get_job_log(&self.id)?);
        }
        Ok(self.log.as_deref().unwrap_or_default())
    }

    /// Job definition document, fetched on first access and cached.
    pub fn definition(&mut self) -> Result<&str> {
        if self.definition.is_none() {
            debug!(job_id = %self.id, "fetching job definition");
            self.definition = Some(self.api.get_job_definition(&self.id)?);
        }
        Ok(self.definition.as_deref().unwrap_or_default())
    }

    // -----------------------------------------------------------------------
    // Control operations
    // -----------------------------------------------------------------------

    /// Relay a control verb to the service. `status` keeps the value from the
    /// last hydration; re-fetch the job to observe the effect.
    pub fn control(&self, action: ControlAction) -> Result<()> {
        debug!(job_id = %self.id, action = %action, "issuing job control");
        self.api.job_control(&self.id, action)
    }

    pub fn start(&self) -> Result<()> {
        self.control(ControlAction::Start)
    }

    pub fn suspend(&self) -> Result<()> {
        self.control(ControlAction::Suspend)
    }

    pub fn resume(&self) -> Result<()> {
        self.control(ControlAction::Resume)
    }

    pub fn kill(&self) -> Result<()> {
        self.control(ControlAction::Kill)
    }

    // -----------------------------------------------------------------------
    // Status policy
    // -----------------------------------------------------------------------

    /// Control verbs advisable for the last-hydrated status, `kill` always
    /// last. Advisory only: the service may still reject a verb if the job
    /// has moved on since hydration.
    pub fn available_actions(&self) -> Vec<ControlAction> {
        if self.status.is_some_and(JobStatus::is_terminal) {
            return Vec::new();
        }

        let mut actions = Vec::new();
        match self.status {
            Some(JobStatus::Prep) => actions.push(ControlAction::Start),
            Some(JobStatus::Running) => actions.push(ControlAction::Suspend),
            Some(JobStatus::Suspended) => actions.push(ControlAction::Resume),
            _ => {}
        }
        actions.push(ControlAction::Kill);
        actions
    }

    /// Percentage of finished actions, 0 to 100. A job without actions
    /// reports 0.
    pub fn progress(&self) -> f64 {
        let finished = self.actions.iter().filter(|a| a.is_finished()).count();
        finished as f64 / self.actions.len().max(1) as f64 * 100.0
    }

    /// Only the recorded owner or a superuser may modify a job. Pure check
    /// over the given identity; no network involved.
    pub fn check_request_permission(&self, username: &str, is_superuser: bool) -> Result<()> {
        if is_superuser || self.user.as_deref() == Some(username) {
            return Ok(());
        }
        warn!(job_id = %self.id, %username, "insufficient permission");
        Err(OozieError::PermissionDenied {
            username: username.to_string(),
            owner: self.user.clone().unwrap_or_default(),
        })
    }
}

impl<V: JobVariant + fmt::Debug> fmt::Debug for Job<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Job")
            .field("kind", &V::KIND)
            .field("id", &self.id)
            .field("app_name", &self.app_name)
            .field("status", &self.status)
            .field("user", &self.user)
            .field("actions", &self.actions.len())
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
