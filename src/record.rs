//! The record trait: a struct mapped to one table row by convention.
//!
//! Implementations are generated with `#[derive(Record)]`, which builds a
//! field descriptor table and the marshalling code at compile time, so there
//! is no runtime field introspection. A record must have an `i64` identity
//! field named `id` (or marked `#[loam(id)]`); the zero value means "not
//! yet persisted".
//!
//! ```rust,ignore
//! use loam::Record;
//!
//! #[derive(Debug, Default, Record)]
//! struct Person {
//!     id: i64,
//!     first_name: String,
//!     age: i64,
//! }
//!
//! assert_eq!(Person::table_name(), "persons");
//! ```

use crate::error::Result;
use crate::naming;
use crate::row::Row;
use crate::value::FieldKind;

/// Compile-time descriptor for one mapped field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The Rust field name.
    pub name: &'static str,
    /// The column name (snake_case of the field name unless overridden).
    pub column: &'static str,
    /// The field's kind tag.
    pub kind: FieldKind,
}

/// A struct mapped to one table row.
///
/// `Default` supplies the zero value appended per result row by
/// `Session::get_all`.
pub trait Record: Default {
    /// The record type's name, as written in Rust.
    const MODEL: &'static str;

    /// Descriptor table for every mapped field, in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// The table this record maps to: pluralized snake_case of [`MODEL`]
    /// unless the type overrides it with `#[loam(table = "...")]`.
    ///
    /// [`MODEL`]: Record::MODEL
    fn table_name() -> String {
        naming::table_name(Self::MODEL)
    }

    /// Marshal the record into a row, one column per mapped field, in
    /// declaration order.
    fn to_row(&self) -> Row;

    /// Load a row into the record, coercing each value into its field's
    /// kind. Columns with no matching field are skipped silently; a value
    /// that cannot be coerced fails with the offending column's name.
    fn load_row(&mut self, row: &Row) -> Result<()>;

    /// Current value of the identity field.
    fn id(&self) -> i64;

    /// Write the identity field (after an insert reports the new id).
    fn set_id(&mut self, id: i64);
}
