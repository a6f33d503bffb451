//! Procedural macros for the loam record mapper.
//!
//! This crate provides the `#[derive(Record)]` macro, which turns a plain
//! struct into a mapped record: it builds the field descriptor table and
//! the row marshalling code at compile time, so no field introspection
//! happens at runtime.
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(Debug, Default, loam::Record)]
//! struct UserAccount {
//!     id: i64,
//!     email: String,
//!     active: bool,
//! }
//! // maps to the `user_accounts` table with columns id, email, active
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod record;

/// Derive a `loam::Record` implementation for a struct.
///
/// The struct must have named fields, one of which is the `i64` identity
/// field: the field named `id`, or the one marked `#[loam(id)]` (which
/// must still map to the `id` column).
///
/// # Attributes
///
/// ## Struct-level
/// - `#[loam(table = "table_name")]` to override the conventional
///   pluralized snake_case table name
///
/// ## Field-level
/// - `#[loam(id)]` to mark the identity field
/// - `#[loam(column = "col_name")]` to override the conventional
///   snake_case column name
///
/// # Supported field types
///
/// `String`, `bool`, `i16`, `i32`, `i64`, `f32`, `f64`, `Vec<u8>`. Any
/// other field type is a compile error.
#[proc_macro_derive(Record, attributes(loam))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match record::derive_record_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
