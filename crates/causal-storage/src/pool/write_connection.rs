//! Single write connection behind a mutex. Serialized writes.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use causal_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use causal_core::errors::{CausalMemoryError, CausalMemoryResult};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> CausalMemoryResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> CausalMemoryResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> CausalMemoryResult<T>
    where
        F: FnOnce(&Connection) -> CausalMemoryResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| CausalMemoryError::ConcurrencyError(format!("write lock poisoned: {e}")))?;
        f(&guard)
    }
}
