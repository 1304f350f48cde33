//! Wake-capable timer service interface.

use amber_beacon_core::{RequestToken, WorkId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Callback payload delivered to the downstream consumer when a deferred
/// trigger fires.
///
/// The consumer is expected to query the scheduler's `is_cancelled` with
/// the carried work id before re-presenting the item for scheduling; a
/// trigger for cancelled work must be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerPayload {
    /// The work the trigger was armed for.
    pub work_id: WorkId,
    /// Token issued when the trigger was registered.
    pub token: RequestToken,
}

impl TriggerPayload {
    /// Creates a payload for the given work and registration token.
    #[must_use]
    pub fn new(work_id: WorkId, token: RequestToken) -> Self {
        Self { work_id, token }
    }
}

/// Errors from timer registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The timer service refused the registration.
    RegistrationFailed { message: String },
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegistrationFailed { message } => {
                write!(f, "timer registration failed: {message}")
            }
        }
    }
}

impl std::error::Error for TimerError {}

/// The host's wake-capable timer service.
///
/// Triggers are one-shot and keyed by request token. "Wake-capable" means
/// a trigger can rouse a sleeping host; a work item's due time is a hard
/// scheduling contract, so batched or opportunistic delivery is not an
/// acceptable substitute for the exact API.
#[async_trait]
pub trait WakeTimer: Send + Sync {
    /// Whether this host offers exact-time delivery.
    ///
    /// Hosts that only provide a coarser timer API report `false`; the
    /// scheduler then falls back to [`WakeTimer::arm_wake`], accepting
    /// reduced precision as a documented trade-off.
    fn supports_exact(&self) -> bool;

    /// Arms a one-shot trigger firing at exactly the given instant.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::RegistrationFailed`] when the service refuses
    /// the registration.
    async fn arm_exact_wake(
        &self,
        fire_at: DateTime<Utc>,
        token: RequestToken,
        payload: TriggerPayload,
    ) -> Result<(), TimerError>;

    /// Arms a one-shot trigger with best-effort delivery near the given
    /// instant.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::RegistrationFailed`] when the service refuses
    /// the registration.
    async fn arm_wake(
        &self,
        fire_at: DateTime<Utc>,
        token: RequestToken,
        payload: TriggerPayload,
    ) -> Result<(), TimerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_work_id_and_token() {
        let payload = TriggerPayload::new(WorkId::new("deferred-1"), RequestToken::new(9));
        assert_eq!(payload.work_id.as_str(), "deferred-1");
        assert_eq!(payload.token.value(), 9);
    }

    #[test]
    fn timer_error_display_includes_message() {
        let err = TimerError::RegistrationFailed {
            message: "quota exceeded".to_string(),
        };
        assert!(err.to_string().contains("quota exceeded"));
    }
}
