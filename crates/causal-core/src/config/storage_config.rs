use serde::{Deserialize, Serialize};

use super::defaults;

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database path. `None` keeps the graph in memory.
    pub db_path: Option<String>,
    /// Read connections opened in file mode.
    pub read_pool_size: usize,
    /// SQLite busy timeout.
    pub busy_timeout_ms: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: Some(defaults::DEFAULT_DB_FILENAME.to_string()),
            read_pool_size: defaults::DEFAULT_READ_POOL_SIZE,
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}
