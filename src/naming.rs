//! Naming conventions linking Rust type and field names to SQL identifiers.
//!
//! Loam never asks for an explicit schema mapping: a record type named
//! `UserAccount` lives in the `user_accounts` table, and a field named
//! `first_name` maps to the `first_name` column. The functions here are the
//! whole convention.
//!
//! ```rust
//! use loam::naming;
//!
//! assert_eq!(naming::table_name("UserAccount"), "user_accounts");
//! assert_eq!(naming::snake_case("FirstName"), "first_name");
//! assert_eq!(naming::title_case("first_name"), "FirstName");
//! ```
//!
//! The pluralizer is deliberately limited to two rules (trailing `y` →
//! `ies`, otherwise append `s`); anything fancier belongs in an explicit
//! table-name override on the record type.

/// Convert a TitleCase identifier to snake_case.
///
/// Every character is lower-cased; an underscore is inserted before each
/// uppercase letter except the first character of the string.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert a snake_case identifier to TitleCase.
///
/// The character following the start of the string or an underscore is
/// upper-cased; the underscore separators are dropped.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut up_next = true;
    for ch in name.chars() {
        if ch == '_' {
            up_next = true;
        } else if up_next {
            up_next = false;
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Pluralize an English noun.
///
/// Two rules only: a trailing `y` becomes `ies`, everything else gets an
/// `s` appended.
pub fn pluralize(s: &str) -> String {
    match s.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{s}s"),
    }
}

/// Derive the table name for a record type: pluralized snake_case.
pub fn table_name(type_name: &str) -> String {
    pluralize(&snake_case(type_name))
}
