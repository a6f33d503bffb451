//! Error types for record and session operations.
//!
//! Every failure surfaces to the immediate caller; nothing is retried or
//! recovered internally. Driver failures pass through verbatim as
//! [`Error::Driver`].

use thiserror::Error;

/// Result type for loam operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during record and session operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying driver failure, passed through verbatim.
    #[error("driver error: {0}")]
    Driver(#[from] rusqlite::Error),

    /// No driver is registered under the requested name.
    #[error("unknown database driver: {0}")]
    UnknownDriver(String),

    /// A column value could not be coerced into its field's kind.
    #[error("cannot coerce column '{column}': {message}")]
    TypeCoercion {
        /// The column whose value failed to coerce.
        column: String,
        /// What went wrong.
        message: String,
    },

    /// A `get` matched no rows.
    #[error("no {model} row matched the query")]
    NotFound {
        /// The record type that was queried.
        model: String,
    },

    /// A `get` matched more than one row.
    #[error("more than one {model} row matched the query")]
    NotUnique {
        /// The record type that was queried.
        model: String,
    },

    /// The session's transaction has ended; call `renew()` first.
    #[error("transaction already ended; renew the session before using it")]
    TransactionClosed,

    /// `renew()` was called while a transaction is still live.
    #[error("transaction still active; commit or roll back before renewing")]
    TransactionActive,
}

impl Error {
    /// Create a coercion error for the given column.
    pub fn type_coercion(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TypeCoercion {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a not-found error for the given record type.
    pub fn not_found(model: impl Into<String>) -> Self {
        Self::NotFound {
            model: model.into(),
        }
    }

    /// Create a not-unique error for the given record type.
    pub fn not_unique(model: impl Into<String>) -> Self {
        Self::NotUnique {
            model: model.into(),
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
