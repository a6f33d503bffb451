//! Connection handling: driver lookup, opening, and session creation.

use tracing::debug;

use crate::config::{ConnectOptions, DatabasePath};
use crate::error::{Error, Result};
use crate::session::Session;

/// Supported database drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    /// SQLite, via `rusqlite`.
    Sqlite,
}

impl Driver {
    /// Look up a driver by name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            other => Err(Error::UnknownDriver(other.to_string())),
        }
    }
}

/// A wrapper around one open database handle.
///
/// Opened once, closed once; sessions are created from it and borrow it
/// for their lifetime.
pub struct Connection {
    handle: rusqlite::Connection,
}

impl Connection {
    /// Open a connection by driver name and data source.
    ///
    /// The data source is `":memory:"` or a file path. Driver failures
    /// surface verbatim.
    pub fn open(driver_name: &str, data_source: &str) -> Result<Self> {
        Driver::from_name(driver_name)?;
        Self::open_with(ConnectOptions::from_data_source(data_source))
    }

    /// Open a connection with explicit options.
    pub fn open_with(options: ConnectOptions) -> Result<Self> {
        let handle = match &options.path {
            DatabasePath::Memory => rusqlite::Connection::open_in_memory()?,
            DatabasePath::File(path) => rusqlite::Connection::open(path)?,
        };
        if options.foreign_keys {
            handle.pragma_update(None, "foreign_keys", true)?;
        }
        if let Some(timeout) = options.busy_timeout {
            handle.busy_timeout(timeout)?;
        }
        debug!(path = ?options.path, "opened connection");
        Ok(Self { handle })
    }

    /// Close the handle. The driver's close error surfaces verbatim.
    pub fn close(self) -> Result<()> {
        self.handle.close().map_err(|(_, err)| Error::Driver(err))
    }

    /// Begin a transaction and return a session wrapping it.
    pub fn new_session(&self) -> Result<Session<'_>> {
        Session::begin(self)
    }

    /// Run raw statements outside any session, e.g. schema setup.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        debug!(sql = %sql, "executing batch");
        self.handle.execute_batch(sql)?;
        Ok(())
    }

    pub(crate) fn handle(&self) -> &rusqlite::Connection {
        &self.handle
    }
}
