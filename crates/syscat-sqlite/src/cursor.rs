//! Cursor implementation over a prepared rusqlite statement.

use rusqlite::types::ValueRef;
use syscat_core::{CatalogError, CatalogResult, Cursor, SqlValue};

/// One open rusqlite result set as a [`Cursor`].
///
/// rusqlite's `Rows` borrows the statement and only exposes the current
/// row, so `advance` buffers each row into owned values. SQLite surfaces
/// every integer as 64-bit; the core conversion layer narrows them back
/// per the declared shape.
pub struct SqliteCursor<'stmt> {
    rows: rusqlite::Rows<'stmt>,
    width: usize,
    current: Vec<SqlValue>,
    on_row: bool,
}

impl<'stmt> SqliteCursor<'stmt> {
    /// Execute the statement and wrap its result set.
    pub fn new(stmt: &'stmt mut rusqlite::Statement<'_>) -> CatalogResult<Self> {
        let width = stmt.column_count();
        let rows = stmt.query([]).map_err(CatalogError::driver)?;
        Ok(Self { rows, width, current: Vec::new(), on_row: false })
    }
}

fn to_value(cell: ValueRef<'_>) -> SqlValue {
    match cell {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(i) => SqlValue::BigInt(i),
        ValueRef::Real(f) => SqlValue::Float(f),
        ValueRef::Text(t) => SqlValue::NVarchar(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => SqlValue::VarBinary(b.to_vec()),
    }
}

impl Cursor for SqliteCursor<'_> {
    fn advance(&mut self) -> CatalogResult<bool> {
        match self.rows.next().map_err(CatalogError::driver)? {
            Some(row) => {
                self.current.clear();
                for i in 0..self.width {
                    let cell = row.get_ref(i).map_err(CatalogError::driver)?;
                    self.current.push(to_value(cell));
                }
                self.on_row = true;
                Ok(true)
            }
            None => {
                self.current.clear();
                self.on_row = false;
                Ok(false)
            }
        }
    }

    fn value(&self, ordinal: usize) -> CatalogResult<SqlValue> {
        if !self.on_row {
            return Err(CatalogError::driver(NotPositioned));
        }
        if ordinal >= self.width {
            return Err(CatalogError::OrdinalOutOfRange { ordinal, width: self.width });
        }
        Ok(self.current[ordinal].clone())
    }

    fn column_count(&self) -> usize {
        self.width
    }
}

#[derive(Debug, thiserror::Error)]
#[error("cursor is not positioned on a row")]
struct NotPositioned;
