//! The generic typed reader: one open cursor in, a sequence of records out.

use std::marker::PhantomData;

use crate::cursor::Cursor;
use crate::error::{CatalogError, CatalogResult};
use crate::row::Row;
use crate::view::CatalogView;

/// Adapts one open cursor into a lazy sequence of `V` records.
///
/// Constructed over an owned cursor the reader releases it when dropped or
/// consumed; constructed over `&mut C` the caller keeps the cursor. No
/// retries anywhere: driver and coercion failures propagate unmodified.
pub struct CatalogReader<C, V> {
    cursor: C,
    on_row: bool,
    done: bool,
    _view: PhantomData<V>,
}

impl<C: Cursor, V: CatalogView> CatalogReader<C, V> {
    pub fn new(cursor: C) -> Self {
        Self { cursor, on_row: false, done: false, _view: PhantomData }
    }

    /// Move to the next row. `Ok(false)` once the result set is exhausted;
    /// stays exhausted afterwards.
    pub fn advance(&mut self) -> CatalogResult<bool> {
        if self.done {
            return Ok(false);
        }
        match self.cursor.advance() {
            Ok(true) => {
                self.on_row = true;
                Ok(true)
            }
            Ok(false) => {
                self.on_row = false;
                self.done = true;
                Ok(false)
            }
            Err(e) => {
                self.on_row = false;
                self.done = true;
                Err(e)
            }
        }
    }

    /// Materialize the current row.
    ///
    /// Valid only while positioned on a row, i.e. after
    /// [`advance`](CatalogReader::advance) returned `true`; may be called
    /// repeatedly for the same row.
    pub fn record(&self) -> CatalogResult<V> {
        if !self.on_row {
            return Err(CatalogError::NotOnRow { view: V::VIEW });
        }
        let row = Row::new(&self.cursor, V::VIEW, V::SHAPE);
        V::from_row(&row)
    }

    /// Drain the whole result set, preserving server order.
    ///
    /// Returns the complete sequence or the first error; nothing partial.
    pub fn read_all(mut self) -> CatalogResult<Vec<V>> {
        let mut records = Vec::new();
        while self.advance()? {
            records.push(self.record()?);
        }
        Ok(records)
    }

    /// The first record, if any. Remaining rows are abandoned with the
    /// cursor.
    pub fn first(mut self) -> CatalogResult<Option<V>> {
        if self.advance()? {
            Ok(Some(self.record()?))
        } else {
            Ok(None)
        }
    }
}

impl<C: Cursor, V: CatalogView> Iterator for CatalogReader<C, V> {
    type Item = CatalogResult<V>;

    /// Lazy iteration; fuses after exhaustion or the first error.
    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(true) => match self.record() {
                Ok(record) => Some(Ok(record)),
                Err(e) => {
                    self.on_row = false;
                    self.done = true;
                    Some(Err(e))
                }
            },
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StaticCursor;
    use crate::shape::{ColumnDef, SqlType};
    use crate::value::SqlValue;

    #[derive(Debug, Clone, PartialEq)]
    struct PairRow {
        id: i32,
        label: Option<String>,
    }

    impl CatalogView for PairRow {
        const VIEW: &'static str = "sys.pairs";
        const QUERY: &'static str = "SELECT id, label FROM sys.pairs";
        const SHAPE: &'static [ColumnDef] = &[
            ColumnDef::new(0, "id", SqlType::Int, false),
            ColumnDef::new(1, "label", SqlType::NVarchar, true),
        ];

        fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
            Ok(Self { id: row.get(0)?, label: row.get(1)? })
        }
    }

    fn three_rows() -> StaticCursor {
        StaticCursor::new(
            2,
            vec![
                vec![SqlValue::Int(1), SqlValue::NVarchar("a".into())],
                vec![SqlValue::Int(2), SqlValue::Null],
                vec![SqlValue::Int(3), SqlValue::NVarchar("c".into())],
            ],
        )
    }

    #[test]
    fn read_all_preserves_order_and_null_sentinel() {
        let records = CatalogReader::<_, PairRow>::new(three_rows()).read_all().unwrap();
        assert_eq!(
            records,
            vec![
                PairRow { id: 1, label: Some("a".into()) },
                PairRow { id: 2, label: None },
                PairRow { id: 3, label: Some("c".into()) },
            ]
        );
    }

    #[test]
    fn record_before_advance_is_not_on_row() {
        let reader = CatalogReader::<_, PairRow>::new(three_rows());
        match reader.record() {
            Err(CatalogError::NotOnRow { view: "sys.pairs" }) => {}
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn record_after_exhaustion_is_not_on_row() {
        let mut reader = CatalogReader::<_, PairRow>::new(StaticCursor::empty(2));
        assert!(!reader.advance().unwrap());
        assert!(matches!(reader.record(), Err(CatalogError::NotOnRow { .. })));
    }

    #[test]
    fn record_can_be_read_twice_for_the_same_row() {
        let mut reader = CatalogReader::<_, PairRow>::new(three_rows());
        assert!(reader.advance().unwrap());
        assert_eq!(reader.record().unwrap(), reader.record().unwrap());
    }

    #[test]
    fn first_returns_only_the_first_record() {
        let first = CatalogReader::<_, PairRow>::new(three_rows()).first().unwrap();
        assert_eq!(first, Some(PairRow { id: 1, label: Some("a".into()) }));
        let none = CatalogReader::<_, PairRow>::new(StaticCursor::empty(2)).first().unwrap();
        assert_eq!(none, None);
    }

    #[test]
    fn iterator_yields_each_record_lazily() {
        let collected: CatalogResult<Vec<_>> =
            CatalogReader::<_, PairRow>::new(three_rows()).collect();
        assert_eq!(collected.unwrap().len(), 3);
    }

    #[test]
    fn iterator_fuses_after_a_coercion_error() {
        let cursor = StaticCursor::new(
            2,
            vec![
                vec![SqlValue::Int(1), SqlValue::Null],
                vec![SqlValue::Null, SqlValue::Null],
                vec![SqlValue::Int(3), SqlValue::Null],
            ],
        );
        let mut reader = CatalogReader::<_, PairRow>::new(cursor);
        assert!(reader.next().unwrap().is_ok());
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
    }

    #[test]
    fn read_all_fails_whole_on_null_in_not_null_column() {
        let cursor = StaticCursor::new(
            2,
            vec![
                vec![SqlValue::Int(1), SqlValue::Null],
                vec![SqlValue::Null, SqlValue::NVarchar("b".into())],
            ],
        );
        let err = CatalogReader::<_, PairRow>::new(cursor).read_all().unwrap_err();
        match err {
            CatalogError::UnexpectedNull { view: "sys.pairs", column: "id", ordinal: 0 } => {}
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn non_owning_reader_leaves_the_cursor_with_the_caller() {
        let mut cursor = three_rows();
        {
            let reader = CatalogReader::<_, PairRow>::new(&mut cursor);
            assert_eq!(reader.read_all().unwrap().len(), 3);
        }
        // Caller still holds the cursor after the reader is gone.
        assert_eq!(cursor.column_count(), 2);
        assert!(!cursor.advance().unwrap());
    }
}
