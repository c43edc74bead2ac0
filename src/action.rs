//! Actions: the smallest unit of work inside a job. One hydrated per raw
//! action payload; immutable after construction.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::parse::{opt_i64, opt_str, opt_timestamp, parse_config};

/// Behavior shared by both action variants.
pub trait JobAction: Sized {
    /// Hydrate from a raw field-to-value mapping. Missing keys hydrate as
    /// absent, never an error.
    fn from_payload(map: &Map<String, Value>) -> Result<Self>;

    /// Last-reported status string, verbatim from the wire.
    fn status(&self) -> Option<&str>;

    /// The service marks a completed action with status `OK`, for both
    /// variants.
    fn is_finished(&self) -> bool {
        self.status() == Some("OK")
    }
}

// ---------------------------------------------------------------------------
// WorkflowAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct WorkflowAction {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Wire field `type` (e.g. `map-reduce`, `pig`).
    pub action_type: Option<String>,
    pub status: Option<String>,
    pub transition: Option<String>,
    pub data: Option<String>,
    pub external_id: Option<String>,
    pub external_status: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub console_url: Option<String>,
    pub tracker_uri: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub retries: Option<i64>,
    /// Raw configuration text, as received.
    pub conf: Option<String>,
    /// Parsed configuration; empty when `conf` is empty or absent.
    pub conf_dict: IndexMap<String, String>,
}

impl JobAction for WorkflowAction {
    fn from_payload(map: &Map<String, Value>) -> Result<Self> {
        let conf = opt_str(map, "conf");
        let conf_dict = match conf.as_deref() {
            Some(raw) if !raw.is_empty() => parse_config(raw)?,
            _ => IndexMap::new(),
        };

        Ok(Self {
            id: opt_str(map, "id"),
            name: opt_str(map, "name"),
            action_type: opt_str(map, "type"),
            status: opt_str(map, "status"),
            transition: opt_str(map, "transition"),
            data: opt_str(map, "data"),
            external_id: opt_str(map, "externalId"),
            external_status: opt_str(map, "externalStatus"),
            error_code: opt_str(map, "errorCode"),
            error_message: opt_str(map, "errorMessage"),
            console_url: opt_str(map, "consoleUrl"),
            tracker_uri: opt_str(map, "trackerUri"),
            start_time: opt_timestamp(map, "startTime")?,
            end_time: opt_timestamp(map, "endTime")?,
            retries: opt_i64(map, "retries")?,
            conf,
            conf_dict,
        })
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

// ---------------------------------------------------------------------------
// CoordinatorAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CoordinatorAction {
    pub id: Option<String>,
    /// Ordinal of this materialization within the coordinator.
    pub action_number: Option<i64>,
    pub action_type: Option<String>,
    pub status: Option<String>,
    pub coord_job_id: Option<String>,
    pub external_id: Option<String>,
    pub external_status: Option<String>,
    pub missing_dependencies: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub console_url: Option<String>,
    pub tracker_uri: Option<String>,
    pub created_conf: Option<String>,
    pub run_conf: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    pub nominal_time: Option<DateTime<Utc>>,
    pub last_modified_time: Option<DateTime<Utc>>,
    /// Parsed from `runConf`; coordinator actions always carry a config, so
    /// this is always built (absent text parses as empty).
    pub conf_dict: IndexMap<String, String>,
}

impl JobAction for CoordinatorAction {
    fn from_payload(map: &Map<String, Value>) -> Result<Self> {
        let run_conf = opt_str(map, "runConf");
        let conf_dict = parse_config(run_conf.as_deref().unwrap_or_default())?;

        Ok(Self {
            id: opt_str(map, "id"),
            action_number: opt_i64(map, "actionNumber")?,
            action_type: opt_str(map, "type"),
            status: opt_str(map, "status"),
            coord_job_id: opt_str(map, "coordJobId"),
            external_id: opt_str(map, "externalId"),
            external_status: opt_str(map, "externalStatus"),
            missing_dependencies: opt_str(map, "missingDependencies"),
            error_code: opt_str(map, "errorCode"),
            error_message: opt_str(map, "errorMessage"),
            console_url: opt_str(map, "consoleUrl"),
            tracker_uri: opt_str(map, "trackerUri"),
            created_conf: opt_str(map, "createdConf"),
            run_conf,
            created_time: opt_timestamp(map, "createdTime")?,
            nominal_time: opt_timestamp(map, "nominalTime")?,
            last_modified_time: opt_timestamp(map, "lastModifiedTime")?,
            conf_dict,
        })
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
