//! v001: causal_nodes, causal_edges, scalars.

use rusqlite::Connection;

use causal_core::errors::CausalMemoryResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> CausalMemoryResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS causal_nodes (
            name        TEXT PRIMARY KEY,
            node_type   TEXT,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS causal_edges (
            source      TEXT NOT NULL REFERENCES causal_nodes(name),
            target      TEXT NOT NULL REFERENCES causal_nodes(name),
            weight      REAL NOT NULL CHECK (weight >= 0.0 AND weight <= 1.0),
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            PRIMARY KEY (source, target)
        );

        CREATE INDEX IF NOT EXISTS idx_causal_edges_source ON causal_edges(source);
        CREATE INDEX IF NOT EXISTS idx_causal_edges_target ON causal_edges(target);

        CREATE TABLE IF NOT EXISTS scalars (
            key         TEXT PRIMARY KEY,
            value       REAL NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
