//! Native job representation and conversion.

use amber_beacon_core::WorkItem;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A job in the execution service's native representation.
///
/// The tag carries the work id: the execution service's own cancellation
/// path is tag-keyed, so cancelling a work id removes any queued job
/// submitted for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeJob {
    /// Service-side identity of the job.
    pub tag: String,
    /// Opaque payload handed back to the job when it runs.
    pub payload: JsonValue,
}

impl NativeJob {
    /// Creates a job with the given tag and an empty payload.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            payload: JsonValue::Object(Default::default()),
        }
    }

    /// Sets the job payload.
    #[must_use]
    pub fn with_payload(mut self, payload: JsonValue) -> Self {
        self.payload = payload;
        self
    }
}

/// Maps a work item into the execution service's native representation.
///
/// Conversion is infallible: a converter owns whatever service-specific
/// defaults the native representation needs.
pub trait JobConverter: Send + Sync {
    /// Converts a work item into a native job.
    fn convert(&self, item: &dyn WorkItem) -> NativeJob;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_job_starts_with_empty_payload() {
        let job = NativeJob::new("work-1");
        assert_eq!(job.tag, "work-1");
        assert_eq!(job.payload, serde_json::json!({}));
    }

    #[test]
    fn native_job_payload_is_settable() {
        let job = NativeJob::new("work-2").with_payload(serde_json::json!({"attempt": 1}));
        assert_eq!(job.payload["attempt"], 1);
    }
}
