//! plinth-migrate - linear schema migration runner.
//!
//! Applies a caller-supplied registry of versioned migrations against a
//! DuckDB database, recording one row per attempt in the `schemas` version
//! store. Intended to run once, synchronously, at application startup
//! before concurrent traffic begins.

pub mod error;
pub mod migration;
pub mod runner;

pub use error::{MigrateError, MigrateResult};
pub use migration::{Migration, VersionRecord};
pub use runner::{current_version, migrate};
