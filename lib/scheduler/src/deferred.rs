//! Deferred triggers through the host's wake timer.

use crate::error::SchedulingError;
use amber_beacon_core::WorkItem;
use amber_beacon_integration::{HostServices, TokenGenerator, TriggerPayload, WakeTimer};
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// Arms wake-capable one-shot triggers for work that is not yet due.
///
/// Timer and token handles are acquired from the host on first use and
/// reused for the component's lifetime. Every armed trigger is an
/// independent registration under a fresh token; nothing is retained here
/// after submission. The timer service owns the registration until it
/// fires or is cancelled through the execution service's own path.
pub struct DeferredTrigger<H: HostServices> {
    host: H,
    timer: OnceLock<Arc<dyn WakeTimer>>,
    tokens: OnceLock<Arc<dyn TokenGenerator>>,
}

impl<H: HostServices> DeferredTrigger<H> {
    /// Creates a trigger source acquiring its handles from the given host.
    pub fn new(host: H) -> Self {
        Self {
            host,
            timer: OnceLock::new(),
            tokens: OnceLock::new(),
        }
    }

    /// Arms a one-shot wake trigger at the item's next run time.
    ///
    /// Uses the host's exact timer API when available; otherwise falls
    /// back to inexact delivery, trading precision for a registration at
    /// all.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::TriggerRegistration`] when the timer
    /// service refuses the registration.
    pub async fn arm(&self, item: &dyn WorkItem) -> Result<(), SchedulingError> {
        let token = self.token_generator().next_token();
        let payload = TriggerPayload::new(item.id().clone(), token);
        let fire_at = item.next_run_time();
        let timer = self.wake_timer();

        debug!(work_id = %item.id(), %token, %fire_at, "scheduling work later");
        let armed = if timer.supports_exact() {
            timer.arm_exact_wake(fire_at, token, payload).await
        } else {
            warn!(work_id = %item.id(), "host lacks exact wake timers, using inexact delivery");
            timer.arm_wake(fire_at, token, payload).await
        };

        armed.map_err(|e| SchedulingError::TriggerRegistration {
            id: item.id().clone(),
            reason: e.to_string(),
        })
    }

    fn wake_timer(&self) -> &Arc<dyn WakeTimer> {
        self.timer.get_or_init(|| self.host.wake_timer())
    }

    fn token_generator(&self) -> &Arc<dyn TokenGenerator> {
        self.tokens.get_or_init(|| self.host.token_generator())
    }
}
