//! Migration registry and version store types.

use chrono::{DateTime, Utc};

/// A single schema migration step.
///
/// Immutable once defined; the runner never mutates the registry. Levels
/// must be unique and strictly increasing across the registry.
#[derive(Debug, Clone)]
pub struct Migration {
    /// Human-readable name, for logging.
    pub name: &'static str,
    /// Unique, strictly increasing level. Becomes the primary key of the
    /// version row recorded when this step is attempted.
    pub level: i64,
    /// Schema-altering SQL to execute. May contain multiple statements.
    pub sql: &'static str,
}

/// One recorded migration attempt.
///
/// A retried level produces a new row, so the store holds one row per
/// attempt, not per level. The current version is the row with the highest
/// level.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionRecord {
    /// Migration level this attempt belongs to.
    pub level: i64,
    /// Whether the migration statement succeeded.
    pub success: bool,
    /// When the attempt was recorded.
    pub timestamp: DateTime<Utc>,
    /// Statement wall time in whole milliseconds, success or not.
    pub took_ms: i64,
}

impl VersionRecord {
    /// The zero record returned when no version store exists yet.
    ///
    /// Level 0 means "run all migrations from the start".
    pub(crate) fn uninitialized() -> Self {
        VersionRecord {
            level: 0,
            success: false,
            timestamp: DateTime::UNIX_EPOCH,
            took_ms: 0,
        }
    }
}
