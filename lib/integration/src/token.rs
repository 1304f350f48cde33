//! Request token generation.

use amber_beacon_core::RequestToken;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues request tokens for deferred-trigger registrations.
///
/// Tokens must be unique per generator for the life of the process so two
/// registrations for the same work id never collide.
pub trait TokenGenerator: Send + Sync {
    /// Returns a fresh, never-before-issued token.
    fn next_token(&self) -> RequestToken;
}

/// Token generator backed by an atomic counter.
#[derive(Debug, Default)]
pub struct SequentialTokenGenerator {
    next: AtomicU64,
}

impl SequentialTokenGenerator {
    /// Creates a generator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator starting at the given value.
    ///
    /// Hosts that persist their token high-water mark can resume above it.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl TokenGenerator for SequentialTokenGenerator {
    fn next_token(&self) -> RequestToken {
        RequestToken::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tokens_are_unique_and_increasing() {
        let generator = SequentialTokenGenerator::new();
        let tokens: Vec<u64> = (0..5).map(|_| generator.next_token().value()).collect();
        assert_eq!(tokens, vec![0, 1, 2, 3, 4]);

        let unique: HashSet<u64> = tokens.into_iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn generator_resumes_above_starting_value() {
        let generator = SequentialTokenGenerator::starting_at(100);
        assert_eq!(generator.next_token().value(), 100);
        assert_eq!(generator.next_token().value(), 101);
    }
}
