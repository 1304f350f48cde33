//! Dispatch-time routing between the immediate and deferred paths.

use crate::cancelled::CancellationRegistry;
use crate::deferred::DeferredTrigger;
use crate::error::{SchedulerError, SchedulingError};
use crate::immediate::ImmediateDispatcher;
use amber_beacon_core::{WorkId, WorkItem};
use amber_beacon_integration::{ExecutionBackend, HostServices, JobConverter};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error};

/// Which path a work item takes at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    /// Due now or overdue: submit to the execution service.
    RunNow,
    /// Due in the future: arm a deferred trigger.
    Defer,
}

/// Routes a next-run time against the current instant.
///
/// A run time equal to `now` is due now, not deferred; arming a
/// zero-delay timer would only push back work that is already eligible.
fn disposition(next_run: DateTime<Utc>, now: DateTime<Utc>) -> Disposition {
    if next_run > now {
        Disposition::Defer
    } else {
        Disposition::RunNow
    }
}

/// The dispatch-time scheduler.
///
/// For each work item presented, decides between handing it straight to
/// the execution backend and arming a wake-capable trigger that
/// re-presents it later, and keeps the record of cancelled work that both
/// paths consult.
///
/// A single instance is expected to serve a small number of concurrent
/// callers; all operations take `&self`. Callers are responsible for not
/// double-submitting the same work id concurrently: at most one path per
/// item is active at a time.
pub struct Scheduler<B: ExecutionBackend, C: JobConverter, H: HostServices> {
    backend: Arc<B>,
    immediate: ImmediateDispatcher<B, C>,
    deferred: DeferredTrigger<H>,
    cancelled: CancellationRegistry,
}

impl<B: ExecutionBackend, C: JobConverter, H: HostServices> Scheduler<B, C, H> {
    /// Creates a scheduler over the given backend, converter and host.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::ExecutionBackendUnavailable`] when the
    /// backend's availability probe fails; no operation can function
    /// without it.
    pub fn new(backend: B, converter: C, host: H) -> Result<Self, SchedulerError> {
        if !backend.is_available() {
            return Err(SchedulerError::ExecutionBackendUnavailable);
        }
        let backend = Arc::new(backend);
        Ok(Self {
            immediate: ImmediateDispatcher::new(Arc::clone(&backend), converter),
            deferred: DeferredTrigger::new(host),
            cancelled: CancellationRegistry::new(),
            backend,
        })
    }

    /// Schedules each item, independently and in the order given.
    ///
    /// Items due at or before the current instant go to the immediate
    /// path; items due later get a deferred trigger. The decision is
    /// stateless and re-evaluated fresh on every call. Empty input is a
    /// no-op.
    ///
    /// Rejected immediate submissions are recorded as diagnostics only.
    /// A refused trigger registration does not stop the batch; remaining
    /// items are still processed and the first such failure is returned
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::TriggerRegistration`] for the first
    /// deferred registration the timer service refused.
    pub async fn schedule(&self, items: &[&dyn WorkItem]) -> Result<(), SchedulingError> {
        let mut first_failure = None;
        for item in items {
            match disposition(item.next_run_time(), Utc::now()) {
                Disposition::RunNow => self.immediate.dispatch(*item).await,
                Disposition::Defer => {
                    if let Err(e) = self.deferred.arm(*item).await {
                        error!(work_id = %item.id(), error = %e, "deferred trigger registration failed");
                        first_failure.get_or_insert(e);
                    }
                }
            }
        }
        first_failure.map_or(Ok(()), Err)
    }

    /// Cancels the given work id.
    ///
    /// Marks the id in the cancellation registry, permanently for the
    /// life of this scheduler, and re-issues the backend's own
    /// cancellation so any job already queued there is removed. Repeat
    /// cancellations re-issue the backend call but change nothing else.
    pub async fn cancel(&self, id: &WorkId) {
        self.cancelled.mark(id);
        debug!(work_id = %id, "cancelled work");
        self.backend.cancel(id).await;
    }

    /// Whether the given work id has ever been cancelled.
    ///
    /// Pure membership query; consumers of fired triggers must check this
    /// before re-presenting an item.
    #[must_use]
    pub fn is_cancelled(&self, id: &WorkId) -> bool {
        self.cancelled.contains(id)
    }

    /// Returns a handle to the cancellation registry.
    ///
    /// The handle shares this scheduler's record, so it can be passed to
    /// the downstream trigger consumer instead of the scheduler itself.
    #[must_use]
    pub fn cancellation_registry(&self) -> CancellationRegistry {
        self.cancelled.clone()
    }
}
