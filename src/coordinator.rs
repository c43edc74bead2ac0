//! Coordinator jobs: a recurring variant that materializes action instances
//! over time. The wire names its identifier `coordJobId` and its name
//! `coordJobName`; the descriptor aliases both so coordinators and workflows
//! share one `id`/`app_name` view in mixed listings.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::action::CoordinatorAction;
use crate::error::Result;
use crate::job::{Job, JobVariant};
use crate::parse::{opt_i64, opt_str, opt_timestamp};
use crate::types::JobKind;

/// Fields only coordinator jobs carry.
#[derive(Debug, Clone)]
pub struct CoordinatorInfo {
    pub coord_external_id: Option<String>,
    pub coord_job_path: Option<String>,
    pub frequency: Option<String>,
    pub time_unit: Option<String>,
    pub time_zone: Option<String>,
    pub concurrency: Option<i64>,
    pub execution_policy: Option<String>,
    pub time_out: Option<i64>,
    pub mat_throttling: Option<i64>,
    pub last_action: Option<String>,
    pub next_materialized_time: Option<DateTime<Utc>>,
    /// Left as raw wire text; the service reports it unparsed.
    pub pause_time: Option<String>,
}

impl JobVariant for CoordinatorInfo {
    type Action = CoordinatorAction;

    const KIND: JobKind = JobKind::Coordinator;
    const LIST_KEY: &'static str = "coordinatorjobs";
    const ID_FIELD: &'static str = "coordJobId";
    const APP_NAME_FIELD: &'static str = "coordJobName";

    fn from_payload(map: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            coord_external_id: opt_str(map, "coordExternalId"),
            coord_job_path: opt_str(map, "coordJobPath"),
            frequency: opt_str(map, "frequency"),
            time_unit: opt_str(map, "timeUnit"),
            time_zone: opt_str(map, "timeZone"),
            concurrency: opt_i64(map, "concurrency")?,
            execution_policy: opt_str(map, "executionPolicy"),
            time_out: opt_i64(map, "timeOut")?,
            mat_throttling: opt_i64(map, "mat_throttling")?,
            last_action: opt_str(map, "lastAction"),
            next_materialized_time: opt_timestamp(map, "nextMaterializedTime")?,
            pause_time: opt_str(map, "pauseTime"),
        })
    }
}

pub type Coordinator = Job<CoordinatorInfo>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
