//! Error types for plinth-migrate.

use thiserror::Error;

/// Migration runner errors.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Reading the version store failed (M001).
    #[error("[M001] failed to query schema version: {0}")]
    SchemaQueryFailed(#[source] duckdb::Error),

    /// Creating the version store failed (M002).
    #[error("[M002] failed to create schema table: {0}")]
    SchemaTableCreateFailed(#[source] duckdb::Error),

    /// The most recent recorded attempt did not succeed (M003).
    ///
    /// Fatal: the version store must be repaired externally before any
    /// further migrations run.
    #[error("[M003] previous migration failed at level {level}")]
    PreviousMigrationFailed { level: i64 },

    /// A migration statement failed but the attempt was recorded (M004).
    #[error("[M004] migration {level} failed: {source}")]
    StatementExecutionFailed {
        level: i64,
        #[source]
        source: duckdb::Error,
    },

    /// Recording a migration attempt failed (M005).
    ///
    /// Preserves the statement failure too, when the statement and the
    /// record insert failed together.
    #[error("[M005] failed to record attempt for migration {level}: {insert}{note}", note = statement_note(.statement))]
    RecordInsertFailed {
        level: i64,
        #[source]
        insert: duckdb::Error,
        statement: Option<duckdb::Error>,
    },

    /// The migration registry is malformed (M006).
    #[error("[M006] invalid migration registry: {0}")]
    InvalidRegistry(String),
}

/// Result type alias for [`MigrateError`].
pub type MigrateResult<T> = Result<T, MigrateError>;

fn statement_note(statement: &Option<duckdb::Error>) -> String {
    match statement {
        Some(e) => format!(" (migration statement also failed: {e})"),
        None => String::new(),
    }
}

/// Classify a DuckDB error as "relation does not exist".
///
/// duckdb::Error does not expose structured variants, so string matching is
/// the only reliable approach. The patterns are kept narrow to avoid
/// misclassifying function/type/schema errors.
pub(crate) fn is_table_not_found(err: &duckdb::Error) -> bool {
    let msg = err.to_string();
    msg.contains("Table with name")
        || msg.contains("Table or view with name")
        || (msg.contains("Catalog Error") && msg.contains("Table") && msg.contains("not exist"))
}
