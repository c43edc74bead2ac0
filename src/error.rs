use thiserror::Error;

use crate::types::ControlAction;

#[derive(Debug, Error)]
pub enum OozieError {
    #[error("malformed timestamp: '{0}'")]
    MalformedTimestamp(String),

    #[error("malformed configuration: {0}")]
    MalformedConfig(String),

    #[error("malformed list response: {0}")]
    MalformedListResponse(String),

    #[error("field '{field}' is not a number: '{value}'")]
    MalformedNumber { field: String, value: String },

    #[error("remote service error: {0}")]
    Remote(String),

    #[error("service rejected '{action}' for job {job_id}: {reason}")]
    InvalidTransition {
        job_id: String,
        action: ControlAction,
        reason: String,
    },

    #[error("permission denied: user '{username}' cannot modify user '{owner}'s job")]
    PermissionDenied { username: String, owner: String },

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid control action: {0}")]
    InvalidControlAction(String),
}

pub type Result<T> = std::result::Result<T, OozieError>;
