//! Job execution service interface.

use crate::job::NativeJob;
use amber_beacon_core::WorkId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result code of an immediate submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitStatus {
    /// The service accepted the job.
    Accepted,
    /// The service is rate limiting submissions.
    Throttled,
    /// The job uses a trigger or constraint the service does not support.
    Unsupported,
    /// The service cannot currently take submissions.
    ServiceUnavailable,
}

impl SubmitStatus {
    /// Whether the submission succeeded.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Throttled => write!(f, "throttled"),
            Self::Unsupported => write!(f, "unsupported"),
            Self::ServiceUnavailable => write!(f, "service unavailable"),
        }
    }
}

/// The external job-execution service.
///
/// This abstraction allows testing the scheduler without a live service.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    /// Whether the service is reachable from this host.
    ///
    /// Probed once at scheduler construction; a scheduler cannot function
    /// without its execution backend.
    fn is_available(&self) -> bool;

    /// Submits a job for near-term execution.
    ///
    /// Exactly one attempt per call; the status is the service's result
    /// code, not an error.
    async fn submit(&self, job: NativeJob) -> SubmitStatus;

    /// Removes any queued job for the given work id.
    ///
    /// Best effort: failures are the service's concern and are not
    /// surfaced.
    async fn cancel(&self, id: &WorkId);
}
