//! Paginated job listings: one page of hydrated jobs plus the server's
//! pagination metadata and the filter criteria that produced the page.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::api::ApiHandle;
use crate::coordinator::CoordinatorInfo;
use crate::error::{OozieError, Result};
use crate::job::{Job, JobVariant};
use crate::workflow::WorkflowInfo;

/// One page of a job listing.
///
/// `total` is the server's reported grand total, not the page size;
/// `offset + jobs.len()` is the exclusive upper bound of this page in
/// server-side ordering.
pub struct JobList<V: JobVariant> {
    pub offset: i64,
    pub total: i64,
    /// Jobs in the order the server listed them.
    pub jobs: Vec<Job<V>>,
    /// Filter criteria used to select this page, retained unmodified.
    pub filters: Option<IndexMap<String, String>>,
}

impl<V: JobVariant> JobList<V> {
    pub fn from_payload(
        api: &ApiHandle,
        payload: &Value,
        filters: Option<IndexMap<String, String>>,
    ) -> Result<Self> {
        let map = payload
            .as_object()
            .ok_or_else(|| OozieError::MalformedListResponse("payload is not an object".into()))?;

        let entries = map
            .get(V::LIST_KEY)
            .ok_or_else(|| {
                OozieError::MalformedListResponse(format!("missing '{}' key", V::LIST_KEY))
            })?
            .as_array()
            .ok_or_else(|| {
                OozieError::MalformedListResponse(format!("'{}' is not an array", V::LIST_KEY))
            })?;

        let jobs = entries
            .iter()
            .map(|entry| {
                let job = entry.as_object().ok_or_else(|| {
                    OozieError::MalformedListResponse(format!(
                        "'{}' entry is not an object",
                        V::LIST_KEY
                    ))
                })?;
                Job::from_payload(api.clone(), job)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            offset: page_int(map, "offset")?,
            total: page_int(map, "total")?,
            jobs,
            filters,
        })
    }
}

/// Pagination fields must be numeric, though the wire sometimes sends them as
/// strings.
fn page_int(map: &Map<String, Value>, key: &str) -> Result<i64> {
    crate::parse::opt_i64(map, key)
        .ok()
        .flatten()
        .ok_or_else(|| {
            OozieError::MalformedListResponse(format!("missing or non-numeric '{key}'"))
        })
}

pub type WorkflowList = JobList<WorkflowInfo>;
pub type CoordinatorList = JobList<CoordinatorInfo>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
