//! Reminder store abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable keyed-storage contract for reminder records.
//! - Isolate SQLite query details from the repository façade above.
//!
//! # Invariants
//! - The store is the only reader/writer of the backing records.
//! - Missing ids are a normal outcome (`Ok(None)`), never an error at
//!   this layer; the repository above maps absence to its error result.

pub mod memory;
pub mod reminder_store;
