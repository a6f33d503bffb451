//! # Loam
//!
//! A minimal convention-over-configuration record mapper for SQLite.
//!
//! Loam maps plain structs to table rows using naming conventions alone: a
//! type named `UserAccount` lives in the `user_accounts` table and a field
//! named `first_name` maps to the `first_name` column. There is no schema
//! language and no query builder: sessions wrap one transaction and offer
//! fetch-by-id, fetch-by-condition, and insert-or-update persistence.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use loam::{Connection, Record, Value};
//!
//! #[derive(Debug, Default, Record)]
//! #[loam(table = "people")]
//! struct Person {
//!     id: i64,
//!     first_name: String,
//!     age: i64,
//! }
//!
//! fn main() -> loam::Result<()> {
//!     let conn = Connection::open("sqlite", "./app.db")?;
//!     let mut session = conn.new_session()?;
//!
//!     let mut ada = Person { id: 0, first_name: "Ada".into(), age: 30 };
//!     session.save(&mut ada)?; // insert (id was 0), then commit
//!
//!     session.renew()?;
//!     let mut found = Person::default();
//!     session.get(&mut found, ada.id(), &[])?;
//!     assert_eq!(found.first_name, "Ada");
//!     Ok(())
//! }
//! ```
//!
//! A record's identity field is the `i64` field named `id`; its zero value
//! means "not yet persisted". Condition fragments are raw SQL bodies with
//! positional `?` placeholders; never place untrusted input in the
//! fragment itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod connection;
pub mod error;
pub mod naming;
pub mod record;
pub mod row;
pub mod session;
pub mod sql;
pub mod value;

pub use config::{ConnectOptions, DatabasePath};
pub use connection::{Connection, Driver};
pub use error::{Error, Result};
pub use record::{FieldSpec, Record};
pub use row::Row;
pub use session::{Filter, Session};
pub use value::{FieldKind, Value};

pub use loam_codegen::Record;
