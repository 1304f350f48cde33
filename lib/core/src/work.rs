//! The work-item model.
//!
//! A work item is the unit of schedulable, deferrable work: a stable
//! identity plus a rule producing the next eligible run time from the
//! item's own schedule state. The scheduler only reads items; ownership
//! stays with the caller.

use crate::id::WorkId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Longest delay a backed-off request can accrue, in milliseconds.
const MAX_BACKOFF_MILLIS: i64 = 5 * 60 * 60 * 1000;

/// Default base backoff delay, in milliseconds.
const DEFAULT_BACKOFF_MILLIS: i64 = 30_000;

/// A unit of schedulable work.
///
/// This abstraction keeps the scheduler independent of how callers model
/// their schedule state; [`WorkRequest`] is the stock implementation.
pub trait WorkItem: Send + Sync {
    /// Stable identity of this work.
    fn id(&self) -> &WorkId;

    /// Absolute time at which this work next becomes eligible to run.
    fn next_run_time(&self) -> DateTime<Utc>;
}

/// Backoff policy applied to a request with failed run attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffPolicy {
    /// Delay grows linearly with the attempt count.
    Linear,
    /// Delay doubles with each attempt.
    Exponential,
}

/// A concrete work request.
///
/// One-time requests become eligible after their initial delay; periodic
/// requests at the start of the next period. Failed attempts push a
/// request into backoff, which overrides both until the attempt count is
/// reset.
#[derive(Debug, Clone)]
pub struct WorkRequest {
    /// Stable work identity.
    pub id: WorkId,
    /// Base time the schedule is computed from.
    pub period_start: DateTime<Utc>,
    /// Delay before a one-time request first becomes eligible.
    pub initial_delay: Duration,
    /// Interval between eligible runs, for periodic requests.
    pub interval: Option<Duration>,
    /// Number of failed run attempts so far.
    pub run_attempt_count: u32,
    /// Backoff policy applied while backed off.
    pub backoff_policy: BackoffPolicy,
    /// Base backoff delay.
    pub backoff_delay: Duration,
}

impl WorkRequest {
    /// Creates a one-time request due now.
    #[must_use]
    pub fn new(id: impl Into<WorkId>) -> Self {
        Self {
            id: id.into(),
            period_start: Utc::now(),
            initial_delay: Duration::zero(),
            interval: None,
            run_attempt_count: 0,
            backoff_policy: BackoffPolicy::Exponential,
            backoff_delay: Duration::milliseconds(DEFAULT_BACKOFF_MILLIS),
        }
    }

    /// Sets the base time the schedule is computed from.
    #[must_use]
    pub fn with_period_start(mut self, period_start: DateTime<Utc>) -> Self {
        self.period_start = period_start;
        self
    }

    /// Sets the initial delay.
    #[must_use]
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Makes the request periodic with the given interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the backoff policy and base delay.
    #[must_use]
    pub fn with_backoff(mut self, policy: BackoffPolicy, delay: Duration) -> Self {
        self.backoff_policy = policy;
        self.backoff_delay = delay;
        self
    }

    /// Sets the failed attempt count.
    #[must_use]
    pub fn with_run_attempt_count(mut self, count: u32) -> Self {
        self.run_attempt_count = count;
        self
    }

    /// Whether failed attempts have pushed this request into backoff.
    #[must_use]
    pub fn is_backed_off(&self) -> bool {
        self.run_attempt_count > 0
    }

    /// Whether this request repeats on an interval.
    #[must_use]
    pub fn is_periodic(&self) -> bool {
        self.interval.is_some()
    }

    /// Accrued backoff delay, clamped to the five-hour maximum.
    fn backoff_duration(&self) -> Duration {
        let base = self.backoff_delay.num_milliseconds().max(0);
        let attempts = i64::from(self.run_attempt_count);
        let millis = match self.backoff_policy {
            BackoffPolicy::Linear => base.saturating_mul(attempts),
            BackoffPolicy::Exponential => {
                // Shift capped so the factor stays representable.
                let doublings = u32::try_from(attempts.saturating_sub(1)).unwrap_or(0).min(62);
                base.saturating_mul(1_i64 << doublings)
            }
        };
        Duration::milliseconds(millis.min(MAX_BACKOFF_MILLIS))
    }
}

impl WorkItem for WorkRequest {
    fn id(&self) -> &WorkId {
        &self.id
    }

    fn next_run_time(&self) -> DateTime<Utc> {
        if self.is_backed_off() {
            self.period_start + self.backoff_duration()
        } else if let Some(interval) = self.interval {
            self.period_start + interval
        } else {
            self.period_start + self.initial_delay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn one_time_request_runs_after_initial_delay() {
        let request = WorkRequest::new("one-time")
            .with_period_start(base_time())
            .with_initial_delay(Duration::minutes(10));

        assert_eq!(request.next_run_time(), base_time() + Duration::minutes(10));
        assert!(!request.is_periodic());
    }

    #[test]
    fn request_without_delay_is_due_at_period_start() {
        let request = WorkRequest::new("immediate").with_period_start(base_time());

        assert_eq!(request.next_run_time(), base_time());
    }

    #[test]
    fn periodic_request_runs_at_next_period() {
        let request = WorkRequest::new("periodic")
            .with_period_start(base_time())
            .with_interval(Duration::hours(1));

        assert_eq!(request.next_run_time(), base_time() + Duration::hours(1));
        assert!(request.is_periodic());
    }

    #[test]
    fn linear_backoff_scales_with_attempt_count() {
        let request = WorkRequest::new("linear")
            .with_period_start(base_time())
            .with_backoff(BackoffPolicy::Linear, Duration::seconds(30))
            .with_run_attempt_count(3);

        assert!(request.is_backed_off());
        assert_eq!(request.next_run_time(), base_time() + Duration::seconds(90));
    }

    #[test]
    fn exponential_backoff_doubles_per_attempt() {
        let request = WorkRequest::new("exponential")
            .with_period_start(base_time())
            .with_backoff(BackoffPolicy::Exponential, Duration::seconds(30))
            .with_run_attempt_count(3);

        assert_eq!(request.next_run_time(), base_time() + Duration::seconds(120));
    }

    #[test]
    fn backoff_is_clamped_to_maximum() {
        let request = WorkRequest::new("clamped")
            .with_period_start(base_time())
            .with_backoff(BackoffPolicy::Exponential, Duration::minutes(30))
            .with_run_attempt_count(40);

        assert_eq!(request.next_run_time(), base_time() + Duration::hours(5));
    }

    #[test]
    fn backoff_overrides_periodic_schedule() {
        let request = WorkRequest::new("backed-off-periodic")
            .with_period_start(base_time())
            .with_interval(Duration::hours(2))
            .with_backoff(BackoffPolicy::Linear, Duration::seconds(10))
            .with_run_attempt_count(1);

        assert_eq!(request.next_run_time(), base_time() + Duration::seconds(10));
    }
}
