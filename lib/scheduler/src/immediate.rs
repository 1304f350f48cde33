//! Immediate dispatch to the job-execution service.

use amber_beacon_core::WorkItem;
use amber_beacon_integration::{ExecutionBackend, JobConverter};
use std::sync::Arc;
use tracing::{debug, error};

/// Submits due work straight to the execution service.
///
/// Submission is best effort: exactly one attempt per call, no retry, and
/// a non-success result code is recorded as a diagnostic rather than
/// escalated. Callers that care about re-attempting must detect the
/// outcome by other means.
pub struct ImmediateDispatcher<B: ExecutionBackend, C: JobConverter> {
    backend: Arc<B>,
    converter: C,
}

impl<B: ExecutionBackend, C: JobConverter> ImmediateDispatcher<B, C> {
    /// Creates a dispatcher submitting through the given backend.
    pub fn new(backend: Arc<B>, converter: C) -> Self {
        Self { backend, converter }
    }

    /// Converts the item and submits it for near-term execution.
    pub async fn dispatch(&self, item: &dyn WorkItem) {
        let job = self.converter.convert(item);
        debug!(work_id = %item.id(), "scheduling work now");
        let status = self.backend.submit(job).await;
        if !status.is_accepted() {
            error!(work_id = %item.id(), %status, "immediate submission rejected");
        }
    }
}
