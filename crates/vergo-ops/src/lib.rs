//! Task implementations for the vergo versioning gate.
//!
//! Each `ops_*` module implements one build task; `ops_schedule` turns a
//! requested task list into the deterministic execution plan.

pub mod ops_clean;
pub mod ops_schedule;
pub mod ops_tasks;
pub mod ops_version;
pub mod ops_version_file;
