//! Named scalar values (system confidence and friends).

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use causal_core::errors::CausalMemoryResult;

use crate::to_storage_err;

pub fn get_scalar(conn: &Connection, key: &str) -> CausalMemoryResult<Option<f64>> {
    conn.query_row(
        "SELECT value FROM scalars WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn set_scalar(conn: &Connection, key: &str, value: f64) -> CausalMemoryResult<()> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO scalars (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
