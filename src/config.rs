//! Connection configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Database location: in-memory or a file on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DatabasePath {
    /// In-memory database.
    #[default]
    Memory,
    /// File-based database.
    File(PathBuf),
}

impl DatabasePath {
    /// Parse a data source string: `":memory:"` (or empty) is in-memory,
    /// anything else is a file path.
    pub fn from_data_source(data_source: &str) -> Self {
        if data_source.is_empty() || data_source == ":memory:" {
            Self::Memory
        } else {
            Self::File(PathBuf::from(data_source))
        }
    }

    /// Check if this is an in-memory database.
    pub fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

/// Options applied when opening a connection.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    /// Database location.
    pub path: DatabasePath,
    /// Enforce foreign keys.
    pub foreign_keys: bool,
    /// How long the driver waits on a locked database before failing.
    pub busy_timeout: Option<Duration>,
}

impl ConnectOptions {
    /// Options for the given data source with the defaults below.
    pub fn from_data_source(data_source: &str) -> Self {
        Self {
            path: DatabasePath::from_data_source(data_source),
            ..Self::default()
        }
    }
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            path: DatabasePath::Memory,
            foreign_keys: true,
            busy_timeout: Some(Duration::from_millis(5000)),
        }
    }
}
