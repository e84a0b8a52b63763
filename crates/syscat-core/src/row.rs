//! Borrowed view of the current cursor row with typed, ordinal-based access.

use crate::cursor::Cursor;
use crate::error::{CatalogError, CatalogResult};
use crate::shape::ColumnDef;
use crate::value::{FromSqlValue, ValueError};

/// The current row of a cursor, carrying the view name and shape so that
/// conversion failures name the offending column.
pub struct Row<'c> {
    cursor: &'c dyn Cursor,
    view: &'static str,
    shape: &'static [ColumnDef],
}

impl<'c> Row<'c> {
    pub fn new(cursor: &'c dyn Cursor, view: &'static str, shape: &'static [ColumnDef]) -> Self {
        Self { cursor, view, shape }
    }

    /// Read the cell at `ordinal` as `V`.
    ///
    /// Use `Option<V>` for nullable columns; a non-`Option` target fails
    /// with [`CatalogError::UnexpectedNull`] when the cell is NULL.
    pub fn get<V: FromSqlValue>(&self, ordinal: usize) -> CatalogResult<V> {
        let value = self.cursor.value(ordinal)?;
        V::from_sql_value(value).map_err(|e| self.contextualize(ordinal, e))
    }

    fn column_name(&self, ordinal: usize) -> &'static str {
        self.shape
            .iter()
            .find(|c| c.ordinal == ordinal)
            .map(|c| c.name)
            .unwrap_or("?")
    }

    fn contextualize(&self, ordinal: usize, err: ValueError) -> CatalogError {
        let view = self.view;
        let column = self.column_name(ordinal);
        match err {
            ValueError::UnexpectedNull => CatalogError::UnexpectedNull { view, column, ordinal },
            ValueError::TypeMismatch { expected, found } => {
                CatalogError::TypeMismatch { view, column, ordinal, expected, found }
            }
            ValueError::OutOfRange { expected, value } => {
                CatalogError::OutOfRange { view, column, ordinal, expected, value }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StaticCursor;
    use crate::shape::{ColumnDef, SqlType};
    use crate::value::SqlValue;

    const SHAPE: &[ColumnDef] = &[
        ColumnDef::new(0, "id", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, true),
    ];

    fn on_row(values: Vec<SqlValue>) -> StaticCursor {
        let mut cursor = StaticCursor::new(values.len(), vec![values]);
        cursor.advance().unwrap();
        cursor
    }

    #[test]
    fn typed_reads_by_ordinal() {
        let cursor = on_row(vec![SqlValue::Int(3), SqlValue::NVarchar("dbo".into())]);
        let row = Row::new(&cursor, "sys.schemas", SHAPE);
        assert_eq!(row.get::<i32>(0).unwrap(), 3);
        assert_eq!(row.get::<Option<String>>(1).unwrap(), Some("dbo".into()));
    }

    #[test]
    fn null_in_not_null_column_names_the_column() {
        let cursor = on_row(vec![SqlValue::Null, SqlValue::Null]);
        let row = Row::new(&cursor, "sys.schemas", SHAPE);
        match row.get::<i32>(0) {
            Err(CatalogError::UnexpectedNull { view: "sys.schemas", column: "id", ordinal: 0 }) => {}
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn mismatch_reports_expected_and_found() {
        let cursor = on_row(vec![SqlValue::NVarchar("x".into()), SqlValue::Null]);
        let row = Row::new(&cursor, "sys.schemas", SHAPE);
        match row.get::<i32>(0) {
            Err(CatalogError::TypeMismatch { expected: "int", found: "nvarchar", .. }) => {}
            other => panic!("unexpected: {other:?}"),
        }
    }
}
