//! User operations.
//!
//! Each submodule implements one CLI command by wiring the storage layer,
//! the analytics engine, and (where needed) the summary service client.
//! Operations that mutate the journal use the strict loader and refuse to
//! clobber a corrupt file; read-only reports degrade to an empty journal.

pub mod insights;
pub mod log;
pub mod show;
pub mod stats;
pub mod summarize;
