//! The row mapping: an ordered column-name to value map.
//!
//! A [`Row`] is the interchange format between SQL results and records:
//! query results materialize into rows, and records marshal into rows
//! before being written. Insertion order is preserved so that column lists
//! generated from a row are deterministic (a record's row follows its
//! field declaration order).

use indexmap::IndexMap;

use crate::value::Value;

/// A single table row as a column-name to value mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value, preserving first-insertion order.
    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        self.columns.insert(column.into(), value);
    }

    /// Get a column value.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    /// Remove a column and return its value, keeping the remaining order.
    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.columns.shift_remove(column)
    }

    /// Iterate over `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.columns.values()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut row = Row::new();
        row.set("first_name", Value::from("Ada"));
        row.set("age", Value::from(30i64));
        let columns: Vec<_> = row.columns().collect();
        assert_eq!(columns, vec!["first_name", "age"]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut row = Row::new();
        row.set("id", Value::from(1i64));
        row.set("first_name", Value::from("Ada"));
        row.set("age", Value::from(30i64));

        assert_eq!(row.remove("id"), Some(Value::Int(1)));
        assert_eq!(row.remove("id"), None);
        let columns: Vec<_> = row.columns().collect();
        assert_eq!(columns, vec!["first_name", "age"]);
    }

    #[test]
    fn test_get() {
        let mut row = Row::new();
        row.set("age", Value::from(30i64));
        assert_eq!(row.get("age"), Some(&Value::Int(30)));
        assert_eq!(row.get("missing"), None);
        assert_eq!(row.len(), 1);
        assert!(!row.is_empty());
    }
}
