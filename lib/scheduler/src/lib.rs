//! Dispatch-time scheduling for amber-beacon background work.
//!
//! This crate decides, per unit of deferrable work, whether to hand it
//! straight to the external job-execution service or to arm a wake-capable
//! trigger that re-presents it later:
//!
//! - **Scheduler**: the dispatch decision (due work goes now, future work
//!   goes later)
//! - **Immediate Dispatcher**: best-effort submission to the execution
//!   service
//! - **Deferred Trigger**: exact, wake-capable one-shot timers keyed by
//!   request token
//! - **Cancellation Registry**: the record of work ids that must no longer
//!   be acted on
//!
//! Conceptually a work item moves `Unscheduled -> {ImmediateSubmitted |
//! DeferredArmed} -> (Fired | Cancelled)`; none of that state is persisted
//! here. When a deferred trigger fires, the downstream consumer is
//! expected to check [`Scheduler::is_cancelled`] before re-presenting the
//! item for scheduling.

pub mod cancelled;
pub mod deferred;
pub mod dispatch;
pub mod error;
pub mod immediate;

pub use cancelled::CancellationRegistry;
pub use deferred::DeferredTrigger;
pub use dispatch::Scheduler;
pub use error::{SchedulerError, SchedulingError};
pub use immediate::ImmediateDispatcher;
