//! Node and edge reads/writes. Every value is bound as a parameter.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use causal_core::errors::{CausalMemoryResult, GraphError};
use causal_core::models::validate_weight;

use crate::to_storage_err;

/// Insert a node, or update its type tag when one is given.
pub fn upsert_node(conn: &Connection, name: &str, node_type: Option<&str>) -> CausalMemoryResult<()> {
    conn.execute(
        "INSERT INTO causal_nodes (name, node_type) VALUES (?1, ?2)
         ON CONFLICT(name) DO UPDATE SET node_type = COALESCE(excluded.node_type, causal_nodes.node_type)",
        params![name, node_type],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn node_exists(conn: &Connection, name: &str) -> CausalMemoryResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM causal_nodes WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(found.is_some())
}

pub fn node_type(conn: &Connection, name: &str) -> CausalMemoryResult<Option<String>> {
    let tag: Option<Option<String>> = conn
        .query_row(
            "SELECT node_type FROM causal_nodes WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(tag.flatten())
}

/// Outgoing edges of `source`, ordered by target name.
pub fn edges_out(conn: &Connection, source: &str) -> CausalMemoryResult<Vec<(String, f64)>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT target, weight FROM causal_edges WHERE source = ?1 ORDER BY target",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![source], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut edges = Vec::new();
    for row in rows {
        edges.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(edges)
}

pub fn edge_weight(conn: &Connection, source: &str, target: &str) -> CausalMemoryResult<Option<f64>> {
    conn.query_row(
        "SELECT weight FROM causal_edges WHERE source = ?1 AND target = ?2",
        params![source, target],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Insert or overwrite the edge weight. Both endpoints must already exist.
pub fn upsert_edge(conn: &Connection, source: &str, target: &str, weight: f64) -> CausalMemoryResult<()> {
    validate_weight(weight)?;
    if !node_exists(conn, source)? {
        return Err(GraphError::edge_write(source, target, "source node does not exist").into());
    }
    if !node_exists(conn, target)? {
        return Err(GraphError::edge_write(source, target, "target node does not exist").into());
    }

    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO causal_edges (source, target, weight, updated_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(source, target) DO UPDATE SET weight = excluded.weight, updated_at = excluded.updated_at",
        params![source, target, weight, now],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn node_count(conn: &Connection) -> CausalMemoryResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM causal_nodes", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

pub fn edge_count(conn: &Connection) -> CausalMemoryResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM causal_edges", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
