//! Host service acquisition.

use crate::timer::WakeTimer;
use crate::token::TokenGenerator;
use std::sync::Arc;

/// The host environment that timer and token handles are acquired from.
///
/// Acquisition can be context-dependent or expensive, so the scheduler
/// asks for each handle once, on first use, and reuses it thereafter.
pub trait HostServices: Send + Sync {
    /// Returns a handle to the host's wake-capable timer service.
    fn wake_timer(&self) -> Arc<dyn WakeTimer>;

    /// Returns a handle to the host's token generator.
    fn token_generator(&self) -> Arc<dyn TokenGenerator>;
}
