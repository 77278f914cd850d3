//! SqliteGraph: owns the connection pool, runs migrations on open,
//! and implements the graph access traits.

use std::path::Path;
use std::sync::Mutex;

use tracing::{debug, info};

use causal_core::config::defaults::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_READ_POOL_SIZE};
use causal_core::config::StorageConfig;
use causal_core::errors::CausalMemoryResult;
use causal_core::models::validate_weight;
use causal_core::traits::{ICausalGraphStore, IGraphAccess};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{graph_ops, scalar_ops};
use crate::to_storage_err;

pub struct SqliteGraph {
    pool: ConnectionPool,
    update_gate: Mutex<()>,
}

impl SqliteGraph {
    /// Open a graph backed by a file on disk with default pool settings.
    pub fn open(path: &Path) -> CausalMemoryResult<Self> {
        Self::open_with(path, DEFAULT_READ_POOL_SIZE, DEFAULT_BUSY_TIMEOUT_MS)
    }

    pub fn open_with(
        path: &Path,
        read_pool_size: usize,
        busy_timeout_ms: u32,
    ) -> CausalMemoryResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size, busy_timeout_ms)?;
        let version = pool.writer.with_conn(migrations::run_migrations)?;
        info!(path = %path.display(), schema_version = version, "opened sqlite causal graph");
        Ok(Self {
            pool,
            update_gate: Mutex::new(()),
        })
    }

    /// Open an in-memory graph. All reads go through the writer.
    pub fn open_in_memory() -> CausalMemoryResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let version = pool.writer.with_conn(migrations::run_migrations)?;
        debug!(schema_version = version, "opened in-memory sqlite causal graph");
        Ok(Self {
            pool,
            update_gate: Mutex::new(()),
        })
    }

    /// File-backed when `db_path` is set, in-memory otherwise.
    pub fn from_config(config: &StorageConfig) -> CausalMemoryResult<Self> {
        match &config.db_path {
            Some(path) => Self::open_with(
                Path::new(path),
                config.read_pool_size,
                config.busy_timeout_ms,
            ),
            None => Self::open_in_memory(),
        }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn schema_version(&self) -> CausalMemoryResult<u32> {
        self.pool.writer.with_conn(migrations::current_version)
    }

    pub fn node_type(&self, name: &str) -> CausalMemoryResult<Option<String>> {
        self.with_reader(|conn| graph_ops::node_type(conn, name))
    }

    /// File-backed: uses the read pool. In-memory: uses the writer.
    fn with_reader<F, T>(&self, f: F) -> CausalMemoryResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> CausalMemoryResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

impl IGraphAccess for SqliteGraph {
    fn get_edges_out(&self, node: &str) -> CausalMemoryResult<Vec<(String, f64)>> {
        self.with_reader(|conn| graph_ops::edges_out(conn, node))
    }

    fn node_exists(&self, name: &str) -> CausalMemoryResult<bool> {
        self.with_reader(|conn| graph_ops::node_exists(conn, name))
    }

    fn set_edge_weight(&self, source: &str, target: &str, weight: f64) -> CausalMemoryResult<()> {
        self.pool
            .writer
            .with_conn(|conn| graph_ops::upsert_edge(conn, source, target, weight))
    }

    fn get_scalar(&self, key: &str) -> CausalMemoryResult<Option<f64>> {
        self.with_reader(|conn| scalar_ops::get_scalar(conn, key))
    }

    fn set_scalar(&self, key: &str, value: f64) -> CausalMemoryResult<()> {
        self.pool
            .writer
            .with_conn(|conn| scalar_ops::set_scalar(conn, key, value))
    }

    fn edge_weight(&self, source: &str, target: &str) -> CausalMemoryResult<Option<f64>> {
        self.with_reader(|conn| graph_ops::edge_weight(conn, source, target))
    }

    fn update_gate(&self) -> &Mutex<()> {
        &self.update_gate
    }
}

impl ICausalGraphStore for SqliteGraph {
    fn add_node(&self, name: &str, node_type: Option<&str>) -> CausalMemoryResult<()> {
        self.pool
            .writer
            .with_conn(|conn| graph_ops::upsert_node(conn, name, node_type))
    }

    fn add_causal_link(
        &self,
        cause: &str,
        cause_type: Option<&str>,
        effect: &str,
        effect_type: Option<&str>,
        weight: f64,
    ) -> CausalMemoryResult<()> {
        validate_weight(weight)?;
        self.pool.writer.with_conn(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(e.to_string()))?;
            graph_ops::upsert_node(&tx, cause, cause_type)?;
            graph_ops::upsert_node(&tx, effect, effect_type)?;
            graph_ops::upsert_edge(&tx, cause, effect, weight)?;
            tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
            debug!(cause, effect, weight, "causal link stored");
            Ok(())
        })
    }

    fn node_count(&self) -> CausalMemoryResult<usize> {
        self.with_reader(graph_ops::node_count)
    }

    fn edge_count(&self) -> CausalMemoryResult<usize> {
        self.with_reader(graph_ops::edge_count)
    }
}
