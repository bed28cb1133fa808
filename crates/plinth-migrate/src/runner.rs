//! The migration apply loop and version store access.
//!
//! Single-writer, no rollback: the first failure aborts all remaining
//! migrations and leaves the failed attempt recorded in the version store.

use crate::error::{is_table_not_found, MigrateError, MigrateResult};
use crate::migration::{Migration, VersionRecord};
use chrono::{DateTime, Utc};
use duckdb::Connection;
use std::time::Instant;

const CREATE_VERSION_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS schemas (
        level       INTEGER NOT NULL,
        success     BOOLEAN NOT NULL DEFAULT false,
        "timestamp" TIMESTAMP WITH TIME ZONE DEFAULT now(),
        took_ms     INTEGER NOT NULL,

        PRIMARY KEY (level)
    );"#;

/// Return the current schema version: the [`VersionRecord`] with the
/// highest level.
///
/// A missing or empty `schemas` table yields the zero record
/// `{level: 0, success: false}` with no error, which the runner reads as
/// "run all migrations from the start". Any other failure surfaces as
/// [`MigrateError::SchemaQueryFailed`].
pub fn current_version(conn: &Connection) -> MigrateResult<VersionRecord> {
    let result = conn.query_row(
        r#"SELECT level, success, CAST(epoch_ms("timestamp") AS BIGINT), took_ms
           FROM schemas ORDER BY level DESC LIMIT 1"#,
        [],
        |row| {
            Ok(VersionRecord {
                level: row.get(0)?,
                success: row.get(1)?,
                timestamp: DateTime::from_timestamp_millis(row.get(2)?)
                    .unwrap_or(DateTime::UNIX_EPOCH),
                took_ms: row.get(3)?,
            })
        },
    );

    match result {
        Ok(record) => Ok(record),
        Err(duckdb::Error::QueryReturnedNoRows) => Ok(VersionRecord::uninitialized()),
        Err(e) if is_table_not_found(&e) => Ok(VersionRecord::uninitialized()),
        Err(e) => Err(MigrateError::SchemaQueryFailed(e)),
    }
}

/// Create the `schemas` version store if it does not exist.
fn ensure_version_table(conn: &Connection) -> MigrateResult<()> {
    conn.execute_batch(CREATE_VERSION_TABLE)
        .map_err(MigrateError::SchemaTableCreateFailed)?;
    Ok(())
}

/// Reject registries with non-positive or non-increasing levels.
///
/// Level 0 is reserved for the uninitialized store, so registered levels
/// start at 1.
fn validate_registry(migrations: &[Migration]) -> MigrateResult<()> {
    if let Some(first) = migrations.first() {
        if first.level < 1 {
            return Err(MigrateError::InvalidRegistry(format!(
                "level {} ({}): levels start at 1",
                first.level, first.name
            )));
        }
    }
    for pair in migrations.windows(2) {
        if pair[1].level <= pair[0].level {
            return Err(MigrateError::InvalidRegistry(format!(
                "level {} ({}) follows level {} ({}): levels must be strictly increasing",
                pair[1].level, pair[1].name, pair[0].level, pair[0].name
            )));
        }
    }
    Ok(())
}

/// Run all registered migrations with a level above the current version,
/// in ascending order, through the last one inclusive.
///
/// Bootstraps the version store on first use. Halts with
/// [`MigrateError::PreviousMigrationFailed`] if the most recent recorded
/// attempt was unsuccessful; no auto-repair, no skip. Running twice with no
/// new registrations performs zero schema mutations and records zero rows
/// on the second call.
pub fn migrate(conn: &Connection, migrations: &[Migration]) -> MigrateResult<()> {
    validate_registry(migrations)?;

    let current = current_version(conn)?;
    if current.level == 0 {
        ensure_version_table(conn)?;
    } else if !current.success {
        return Err(MigrateError::PreviousMigrationFailed {
            level: current.level,
        });
    }

    let Some(last) = migrations.last() else {
        log::debug!("migration registry is empty, nothing to run");
        return Ok(());
    };
    if current.level >= last.level {
        log::debug!("no new migrations to run (current level {})", current.level);
        return Ok(());
    }

    for migration in migrations.iter().filter(|m| m.level > current.level) {
        migrate_single(conn, migration)?;
    }
    Ok(())
}

/// Run a single migration and record the attempt.
///
/// The attempt row is inserted whether or not the statement succeeded; a
/// failed statement still halts the loop after its row lands.
fn migrate_single(conn: &Connection, migration: &Migration) -> MigrateResult<()> {
    log::debug!("applying migration {} ({})", migration.level, migration.name);

    let start = Instant::now();
    let statement_result = conn.execute_batch(migration.sql);
    let took_ms = start.elapsed().as_millis() as i64;

    let record = VersionRecord {
        level: migration.level,
        success: statement_result.is_ok(),
        timestamp: Utc::now(),
        took_ms,
    };
    if let Err(insert_err) = insert_record(conn, &record) {
        return Err(MigrateError::RecordInsertFailed {
            level: migration.level,
            insert: insert_err,
            statement: statement_result.err(),
        });
    }

    statement_result.map_err(|e| MigrateError::StatementExecutionFailed {
        level: migration.level,
        source: e,
    })
}

fn insert_record(conn: &Connection, record: &VersionRecord) -> Result<(), duckdb::Error> {
    conn.execute(
        r#"INSERT INTO schemas (level, success, "timestamp", took_ms)
           VALUES (?, ?, CAST(? AS TIMESTAMP WITH TIME ZONE), ?)"#,
        duckdb::params![
            record.level,
            record.success,
            record.timestamp.to_rfc3339(),
            record.took_ms,
        ],
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
