//! Forward-only schema migrations tracked in `schema_version`.
//! Each migration runs inside its own transaction.

pub mod v001_causal_tables;

use rusqlite::{params, Connection};
use tracing::{debug, info};

use causal_core::errors::{CausalMemoryResult, StorageError};

type MigrationFn = fn(&Connection) -> CausalMemoryResult<()>;

const MIGRATIONS: &[(u32, &str, MigrationFn)] =
    &[(1, "causal_tables", v001_causal_tables::migrate)];

/// Highest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

/// Apply every migration newer than the recorded version.
pub fn run_migrations(conn: &Connection) -> CausalMemoryResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| StorageError::MigrationFailed {
        version: 0,
        reason: e.to_string(),
    })?;

    let current = current_version(conn)?;
    debug!(current, latest = LATEST_VERSION, "checking schema version");

    for &(version, name, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        let failed = |reason: String| StorageError::MigrationFailed { version, reason };

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| failed(e.to_string()))?;
        migrate(&*tx).map_err(|e| failed(e.to_string()))?;
        tx.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| failed(e.to_string()))?;
        tx.commit().map_err(|e| failed(e.to_string()))?;

        info!(version, name, "applied migration");
    }

    current_version(conn)
}

/// Get the current schema version (0 for a fresh database).
pub fn current_version(conn: &Connection) -> CausalMemoryResult<u32> {
    let version: u32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .map_err(|e| StorageError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        })?;
    Ok(version)
}
