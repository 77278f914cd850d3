//! PRAGMA configuration applied to every SQLite connection.

use std::time::Duration;

use rusqlite::Connection;

use causal_core::errors::CausalMemoryResult;

use crate::to_storage_err;

/// WAL mode, NORMAL sync, foreign keys ON, and the configured busy timeout.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> CausalMemoryResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    conn.busy_timeout(Duration::from_millis(u64::from(busy_timeout_ms)))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Read connections only need the busy timeout and query-only mode.
pub fn apply_read_pragmas(conn: &Connection, busy_timeout_ms: u32) -> CausalMemoryResult<()> {
    conn.busy_timeout(Duration::from_millis(u64::from(busy_timeout_ms)))
        .map_err(|e| to_storage_err(e.to_string()))?;
    conn.execute_batch("PRAGMA query_only = ON;")
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> CausalMemoryResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
