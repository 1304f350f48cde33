//! External service interfaces for the amber-beacon scheduler.
//!
//! This crate defines the capability traits the scheduling core consumes:
//!
//! - **Job execution**: conversion of work items into the execution
//!   service's native job representation, and submission to that service
//! - **Wake timers**: exact, wake-capable one-shot triggers for deferred
//!   work
//! - **Token generation**: process-unique request tokens for trigger
//!   registrations
//!
//! All integrations are expressed as traits so alternative backends can be
//! substituted without touching the decision logic.

pub mod execution;
pub mod host;
pub mod job;
pub mod timer;
pub mod token;

pub use execution::{ExecutionBackend, SubmitStatus};
pub use host::HostServices;
pub use job::{JobConverter, NativeJob};
pub use timer::{TimerError, TriggerPayload, WakeTimer};
pub use token::{SequentialTokenGenerator, TokenGenerator};
