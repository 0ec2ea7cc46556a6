//! Repository façade over the reminder store.
//!
//! # Responsibility
//! - Provide the single entry point used by presentation and background
//!   consumers.
//! - Translate store outcomes into an explicit success/error result so
//!   callers never distinguish "empty" from "failed" via exceptions.
//!
//! # Invariants
//! - The repository holds no state of its own; all state lives in the
//!   store, so one handle is freely shared across concurrent callers.

pub mod reminder_repo;
