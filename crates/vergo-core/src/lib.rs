//! Core data types for the vergo versioning gate.
//!
//! This crate defines the types that represent a vergo-validated build:
//! manifest parsing, the project model, structured version values,
//! dependency declarations, the release policy constants, and the
//! configuration-phase validation checks.
//!
//! This crate performs no I/O beyond reading build manifests.

pub mod dependency;
pub mod manifest;
pub mod policy;
pub mod project;
pub mod validate;
pub mod version;
