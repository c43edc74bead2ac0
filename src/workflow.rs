//! Workflow jobs: a single directed sequence of actions executed once per
//! run.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::action::WorkflowAction;
use crate::error::Result;
use crate::job::{Job, JobVariant};
use crate::parse::{opt_i64, opt_str, opt_timestamp};
use crate::types::JobKind;

/// Fields only workflow jobs carry.
#[derive(Debug, Clone)]
pub struct WorkflowInfo {
    pub app_path: Option<String>,
    pub external_id: Option<String>,
    pub parent_id: Option<String>,
    /// Run ordinal, coerced from the wire's string form.
    pub run: Option<i64>,
    pub created_time: Option<DateTime<Utc>>,
    pub last_mod_time: Option<DateTime<Utc>>,
}

impl JobVariant for WorkflowInfo {
    type Action = WorkflowAction;

    const KIND: JobKind = JobKind::Workflow;
    const LIST_KEY: &'static str = "workflows";
    const ID_FIELD: &'static str = "id";
    const APP_NAME_FIELD: &'static str = "appName";

    fn from_payload(map: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            app_path: opt_str(map, "appPath"),
            external_id: opt_str(map, "externalId"),
            parent_id: opt_str(map, "parentId"),
            run: opt_i64(map, "run")?,
            created_time: opt_timestamp(map, "createdTime")?,
            last_mod_time: opt_timestamp(map, "lastModTime")?,
        })
    }
}

pub type Workflow = Job<WorkflowInfo>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
