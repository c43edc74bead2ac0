use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// JobStatus
// ---------------------------------------------------------------------------

/// Status a job advertises in its last-fetched payload. The set is defined by
/// the orchestration service; anything outside it hydrates as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Prep,
    Running,
    Suspended,
    Succeeded,
    Killed,
    Failed,
}

impl JobStatus {
    pub fn all() -> &'static [JobStatus] {
        &[
            JobStatus::Prep,
            JobStatus::Running,
            JobStatus::Suspended,
            JobStatus::Succeeded,
            JobStatus::Killed,
            JobStatus::Failed,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Prep => "PREP",
            JobStatus::Running => "RUNNING",
            JobStatus::Suspended => "SUSPENDED",
            JobStatus::Succeeded => "SUCCEEDED",
            JobStatus::Killed => "KILLED",
            JobStatus::Failed => "FAILED",
        }
    }

    /// Lenient wire-side parse. Unknown literals map to `None` so that a
    /// service-side status addition degrades to "status absent" instead of
    /// failing hydration.
    pub fn parse(s: &str) -> Option<JobStatus> {
        JobStatus::all().iter().copied().find(|st| st.as_str() == s)
    }

    /// No control verb applies once a job reaches one of these.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            JobStatus::Succeeded | JobStatus::Killed | JobStatus::Failed
        )
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobStatus {
    type Err = crate::error::OozieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::parse(s).ok_or_else(|| crate::error::OozieError::InvalidStatus(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ControlAction
// ---------------------------------------------------------------------------

/// Control verbs relayed to the service, using its wire spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlAction {
    Start,
    Suspend,
    Resume,
    Kill,
}

impl ControlAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlAction::Start => "start",
            ControlAction::Suspend => "suspend",
            ControlAction::Resume => "resume",
            ControlAction::Kill => "kill",
        }
    }
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ControlAction {
    type Err = crate::error::OozieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(ControlAction::Start),
            "suspend" => Ok(ControlAction::Suspend),
            "resume" => Ok(ControlAction::Resume),
            "kill" => Ok(ControlAction::Kill),
            _ => Err(crate::error::OozieError::InvalidControlAction(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// JobKind
// ---------------------------------------------------------------------------

/// Discriminator exposed to presentation code as the `type` of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobKind {
    Workflow,
    Coordinator,
}

impl JobKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JobKind::Workflow => "Workflow",
            JobKind::Coordinator => "Coordinator",
        }
    }

    fn path_segment(self) -> &'static str {
        match self {
            JobKind::Workflow => "workflows",
            JobKind::Coordinator => "coordinators",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// JobLocator
// ---------------------------------------------------------------------------

/// Opaque navigable reference to a job, for presentation layers to turn into
/// a link. Workflow and coordinator locators are distinct by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobLocator {
    pub kind: JobKind,
    pub id: String,
}

impl JobLocator {
    pub fn new(kind: JobKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn path(&self) -> String {
        format!("/{}/{}", self.kind.path_segment(), self.id)
    }
}

impl fmt::Display for JobLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_roundtrip() {
        for status in JobStatus::all() {
            let parsed = JobStatus::from_str(status.as_str()).unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn status_parse_unknown_is_none() {
        assert_eq!(JobStatus::parse("DONEWITHERROR"), None);
        assert_eq!(JobStatus::parse(""), None);
        assert_eq!(JobStatus::parse("running"), None);
    }

    #[test]
    fn terminal_statuses() {
        assert!(JobStatus::Succeeded.is_terminal());
        assert!(JobStatus::Killed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(!JobStatus::Prep.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(!JobStatus::Suspended.is_terminal());
    }

    #[test]
    fn control_action_wire_spelling() {
        assert_eq!(ControlAction::Start.as_str(), "start");
        assert_eq!(ControlAction::Kill.as_str(), "kill");
        assert_eq!(
            ControlAction::from_str("resume").unwrap(),
            ControlAction::Resume
        );
        assert!(ControlAction::from_str("restart").is_err());
    }

    #[test]
    fn locator_paths_distinct_by_kind() {
        let wf = JobLocator::new(JobKind::Workflow, "W1");
        let coord = JobLocator::new(JobKind::Coordinator, "W1");
        assert_eq!(wf.path(), "/workflows/W1");
        assert_eq!(coord.path(), "/coordinators/W1");
        assert_ne!(wf, coord);
    }

    #[test]
    fn kind_display_literals() {
        assert_eq!(JobKind::Workflow.to_string(), "Workflow");
        assert_eq!(JobKind::Coordinator.to_string(), "Coordinator");
    }
}
