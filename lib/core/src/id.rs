//! Identifier types for schedulable work.
//!
//! Work identifiers are caller-supplied strings: the scheduler treats them
//! as opaque, stable identities and never validates their shape. Request
//! tokens are process-unique integers issued when a deferred trigger is
//! registered, so a firing can be correlated with its registration.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Stable identity of a unit of schedulable work.
///
/// The id lives for the lifetime of the work it names. Callers that manage
/// their own identity scheme construct ids from strings; callers that do
/// not can use [`WorkId::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(String);

impl WorkId {
    /// Creates a work id from a caller-supplied string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh, globally unique work id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WorkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for WorkId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for WorkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Numeric token correlating a deferred-trigger registration with its
/// eventual firing.
///
/// Tokens are issued by a token generator and are unique per generator for
/// the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Wraps a raw token value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw token value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn work_id_from_string_round_trips() {
        let id = WorkId::new("job-42");
        assert_eq!(id.as_str(), "job-42");
        assert_eq!(id.to_string(), "job-42");
    }

    #[test]
    fn generated_work_ids_are_unique() {
        let ids: HashSet<WorkId> = (0..100).map(|_| WorkId::generate()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn work_id_usable_as_set_member() {
        let mut set = HashSet::new();
        set.insert(WorkId::from("a"));
        assert!(set.contains(&WorkId::new("a")));
        assert!(!set.contains(&WorkId::new("b")));
    }

    #[test]
    fn request_token_exposes_value() {
        let token = RequestToken::new(7);
        assert_eq!(token.value(), 7);
        assert_eq!(token.to_string(), "7");
    }
}
