//! Sessions: one transaction, record-level operations on top of it.
//!
//! A session wraps exactly one live transaction and moves through an
//! explicit state machine:
//!
//! ```text
//! Active(tx) --commit/rollback--> Ended --renew--> Active(tx')
//! ```
//!
//! A transaction's life ends at commit or rollback, so [`Session::save`]
//! leaves the session in `Ended`; every further operation fails with
//! [`Error::TransactionClosed`] until [`Session::renew`] begins a fresh
//! transaction on the owning connection.
//!
//! Condition fragments passed to [`Session::get`], [`Session::get_all`] and
//! [`Session::query_rows`] are concatenated into the statement text as-is;
//! only their positional `?` arguments are bound. Callers must not place
//! untrusted input in the fragment itself.

use std::mem;

use rusqlite::{Transaction, types};
use tracing::{debug, trace};

use crate::connection::Connection;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::row::Row;
use crate::sql;
use crate::value::Value;

/// Row filter for [`Session::get`]: a primary key or a raw condition body.
#[derive(Debug, Clone, Copy)]
pub enum Filter<'a> {
    /// Match by primary key (`where id = ?`, bound).
    Id(i64),
    /// Raw condition body, auto-prefixed with `where `.
    Clause(&'a str),
}

impl From<i64> for Filter<'static> {
    fn from(id: i64) -> Self {
        Filter::Id(id)
    }
}

impl<'a> From<&'a str> for Filter<'a> {
    fn from(clause: &'a str) -> Self {
        Filter::Clause(clause)
    }
}

enum TxState<'conn> {
    Active(Transaction<'conn>),
    Ended,
}

/// A transactional unit of work.
///
/// Owns one transaction at a time; not for concurrent use; callers
/// serialize access to a given session.
pub struct Session<'conn> {
    conn: &'conn Connection,
    state: TxState<'conn>,
}

impl<'conn> Session<'conn> {
    pub(crate) fn begin(conn: &'conn Connection) -> Result<Self> {
        let tx = conn.handle().unchecked_transaction()?;
        Ok(Self {
            conn,
            state: TxState::Active(tx),
        })
    }

    /// Whether the session currently holds a live transaction.
    pub fn is_active(&self) -> bool {
        matches!(self.state, TxState::Active(_))
    }

    fn tx(&self) -> Result<&Transaction<'conn>> {
        match &self.state {
            TxState::Active(tx) => Ok(tx),
            TxState::Ended => Err(Error::TransactionClosed),
        }
    }

    /// Commit the live transaction. The session transitions to `Ended`.
    pub fn commit(&mut self) -> Result<()> {
        match mem::replace(&mut self.state, TxState::Ended) {
            TxState::Active(tx) => {
                tx.commit()?;
                Ok(())
            }
            TxState::Ended => Err(Error::TransactionClosed),
        }
    }

    /// Roll back the live transaction. The session transitions to `Ended`.
    pub fn rollback(&mut self) -> Result<()> {
        match mem::replace(&mut self.state, TxState::Ended) {
            TxState::Active(tx) => {
                tx.rollback()?;
                Ok(())
            }
            TxState::Ended => Err(Error::TransactionClosed),
        }
    }

    /// Begin a new transaction after the previous one ended.
    ///
    /// Only valid in `Ended`; renewing over a live transaction is rejected
    /// with [`Error::TransactionActive`].
    pub fn renew(&mut self) -> Result<()> {
        match self.state {
            TxState::Active(_) => Err(Error::TransactionActive),
            TxState::Ended => {
                self.state = TxState::Active(self.conn.handle().unchecked_transaction()?);
                Ok(())
            }
        }
    }

    /// Run `select * from <table> <condition>` and materialize every result
    /// row.
    ///
    /// The condition is a raw fragment (e.g. `"where id = ?"`) with
    /// positional bound arguments; an empty condition selects the whole
    /// table. Each column is copied out of the cursor into an owned
    /// [`Value`].
    pub fn query_rows(&self, table: &str, condition: &str, params: &[Value]) -> Result<Vec<Row>> {
        let stmt_text = sql::select(table, condition);
        debug!(sql = %stmt_text, "executing query");

        let tx = self.tx()?;
        let mut stmt = tx.prepare(&stmt_text)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();

        let bound: Vec<types::Value> = params.iter().map(Value::to_sqlite).collect();
        let bound_refs: Vec<&dyn rusqlite::ToSql> =
            bound.iter().map(|v| v as &dyn rusqlite::ToSql).collect();

        let mut rows = stmt.query(bound_refs.as_slice())?;
        let mut results = Vec::new();
        while let Some(cursor_row) = rows.next()? {
            let mut row = Row::new();
            for (i, column) in columns.iter().enumerate() {
                row.set(column.clone(), Value::from_sqlite(cursor_row.get_ref(i)?));
            }
            results.push(row);
        }
        trace!(rows = results.len(), "query materialized");
        Ok(results)
    }

    /// Insert a row and return the driver-reported id of the new row.
    ///
    /// Columns appear in the row's insertion order, one `?` placeholder
    /// per column.
    pub fn insert(&self, table: &str, row: &Row) -> Result<i64> {
        let columns: Vec<&str> = row.columns().collect();
        let stmt_text = sql::insert(table, &columns);
        debug!(sql = %stmt_text, "executing insert");

        let tx = self.tx()?;
        let bound: Vec<types::Value> = row.values().map(Value::to_sqlite).collect();
        let bound_refs: Vec<&dyn rusqlite::ToSql> =
            bound.iter().map(|v| v as &dyn rusqlite::ToSql).collect();
        tx.execute(&stmt_text, bound_refs.as_slice())?;
        Ok(tx.last_insert_rowid())
    }

    /// Persist a record: insert when its id is zero, update otherwise.
    ///
    /// On insert, the driver-reported id is written back into the record's
    /// identity field. On update, exactly the non-id columns are set,
    /// scoped by the id bound as the final parameter.
    pub fn update<T: Record>(&self, record: &mut T) -> Result<()> {
        let table = T::table_name();
        let mut row = record.to_row();
        row.remove("id");
        let id = record.id();

        if id == 0 {
            let new_id = self.insert(&table, &row)?;
            record.set_id(new_id);
            return Ok(());
        }

        let columns: Vec<&str> = row.columns().collect();
        let stmt_text = sql::update(&table, &columns);
        debug!(sql = %stmt_text, "executing update");

        let tx = self.tx()?;
        let mut bound: Vec<types::Value> = row.values().map(Value::to_sqlite).collect();
        bound.push(types::Value::Integer(id));
        let bound_refs: Vec<&dyn rusqlite::ToSql> =
            bound.iter().map(|v| v as &dyn rusqlite::ToSql).collect();
        tx.execute(&stmt_text, bound_refs.as_slice())?;
        Ok(())
    }

    /// Persist a record, then commit.
    ///
    /// The session transitions to `Ended`; call [`Session::renew`] before
    /// further operations.
    pub fn save<T: Record>(&mut self, record: &mut T) -> Result<()> {
        self.update(record)?;
        self.commit()
    }

    /// Fetch exactly one record.
    ///
    /// The filter is either an id (`session.get(&mut p, 7, &[])`) or a raw
    /// condition body (`session.get(&mut p, "first_name = ?", &params)`).
    /// Zero matches fail with [`Error::NotFound`], more than one with
    /// [`Error::NotUnique`], even for conditions the caller believed
    /// unique.
    pub fn get<'f, T: Record>(
        &self,
        record: &mut T,
        filter: impl Into<Filter<'f>>,
        params: &[Value],
    ) -> Result<()> {
        let table = T::table_name();
        let rows = match filter.into() {
            Filter::Id(id) => self.query_rows(&table, "where id = ?", &[Value::Int(id)])?,
            Filter::Clause(clause) => {
                let condition = format!("where {clause}");
                self.query_rows(&table, &condition, params)?
            }
        };

        match rows.as_slice() {
            [] => Err(Error::not_found(T::MODEL)),
            [row] => record.load_row(row),
            _ => Err(Error::not_unique(T::MODEL)),
        }
    }

    /// Fetch every matching record, appending to `out` in cursor order.
    ///
    /// The optional condition is a raw body auto-prefixed with `where `.
    /// One freshly default-initialized element is appended per result row.
    pub fn get_all<T: Record>(
        &self,
        out: &mut Vec<T>,
        condition: Option<&str>,
        params: &[Value],
    ) -> Result<()> {
        let table = T::table_name();
        let rows = match condition {
            Some(clause) => {
                let condition = format!("where {}", clause.trim());
                self.query_rows(&table, &condition, params)?
            }
            None => self.query_rows(&table, "", &[])?,
        };

        for row in &rows {
            let mut record = T::default();
            record.load_row(row)?;
            out.push(record);
        }
        Ok(())
    }
}
