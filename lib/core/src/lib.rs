//! Core domain types for the amber-beacon work scheduler.
//!
//! This crate provides the foundational types shared by the scheduling
//! crates: stable work identifiers, request tokens, and the work-item
//! model that dispatch decisions are made against.

pub mod id;
pub mod work;

pub use id::{RequestToken, WorkId};
pub use work::{BackoffPolicy, WorkItem, WorkRequest};
