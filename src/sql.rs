//! SQL statement text builders.
//!
//! Pure functions producing the three statement shapes this library ever
//! issues. All caller data travels through positional `?` placeholders,
//! including the id in an update, which is bound as the final parameter
//! rather than written into the statement text.

/// `select * from <table> <condition>`.
///
/// The condition is a caller-supplied raw fragment (for example
/// `where id = ?`); an empty condition selects the whole table.
pub fn select(table: &str, condition: &str) -> String {
    if condition.is_empty() {
        format!("select * from {table}")
    } else {
        format!("select * from {table} {condition}")
    }
}

/// `insert into <table> (<k1>, <k2>, ...) values (?, ?, ...)`.
pub fn insert(table: &str, columns: &[&str]) -> String {
    let placeholders = vec!["?"; columns.len()];
    format!(
        "insert into {} ({}) values ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// `update <table> set <k1> = ?, <k2> = ? where id = ?`.
///
/// The id placeholder is last; callers bind the non-id values in column
/// order followed by the id.
pub fn update(table: &str, columns: &[&str]) -> String {
    let assignments: Vec<String> = columns.iter().map(|c| format!("{c} = ?")).collect();
    format!(
        "update {} set {} where id = ?",
        table,
        assignments.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        assert_eq!(
            select("people", "where id = ?"),
            "select * from people where id = ?"
        );
        assert_eq!(select("people", ""), "select * from people");
    }

    #[test]
    fn test_insert() {
        assert_eq!(
            insert("people", &["first_name", "age"]),
            "insert into people (first_name, age) values (?, ?)"
        );
    }

    #[test]
    fn test_update_binds_id() {
        // The id travels as a bound parameter, never interpolated into the
        // statement text.
        let stmt = update("people", &["first_name", "age"]);
        assert_eq!(stmt, "update people set first_name = ?, age = ? where id = ?");
        assert!(!stmt.contains("id = 1"));
    }
}
