//! The cursor seam between readers and the database driver.
//!
//! A [`Cursor`] is one open server-side result iterator: synchronous,
//! blocking, exclusively owned. Connection management, cancellation, and
//! retries all live on the driver side of this trait.

use crate::error::{CatalogError, CatalogResult};
use crate::value::SqlValue;

/// One open result cursor.
///
/// A reader constructed over an owned cursor releases it when the reader is
/// dropped or consumed. A reader constructed over `&mut C` never releases
/// the caller's cursor (the non-owning mode).
pub trait Cursor {
    /// Move to the next row. `Ok(false)` when the result set is exhausted.
    fn advance(&mut self) -> CatalogResult<bool>;

    /// The cell at `ordinal` of the current row.
    ///
    /// Only valid while positioned on a row, i.e. immediately after
    /// [`advance`](Cursor::advance) returned `true`.
    fn value(&self, ordinal: usize) -> CatalogResult<SqlValue>;

    /// Width of the result set.
    fn column_count(&self) -> usize;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    fn advance(&mut self) -> CatalogResult<bool> {
        (**self).advance()
    }

    fn value(&self, ordinal: usize) -> CatalogResult<SqlValue> {
        (**self).value(ordinal)
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("cursor is not positioned on a row")]
struct NotPositioned;

/// In-memory cursor over materialized rows. Used by fixtures and tests.
#[derive(Debug, Clone)]
pub struct StaticCursor {
    rows: Vec<Vec<SqlValue>>,
    width: usize,
    // Index of the current row; None before the first advance() and after
    // exhaustion.
    pos: Option<usize>,
    next: usize,
}

impl StaticCursor {
    /// Every row must have exactly `width` cells.
    pub fn new(width: usize, rows: Vec<Vec<SqlValue>>) -> Self {
        Self { rows, width, pos: None, next: 0 }
    }

    pub fn empty(width: usize) -> Self {
        Self::new(width, Vec::new())
    }
}

impl Cursor for StaticCursor {
    fn advance(&mut self) -> CatalogResult<bool> {
        if self.next < self.rows.len() {
            self.pos = Some(self.next);
            self.next += 1;
            Ok(true)
        } else {
            self.pos = None;
            Ok(false)
        }
    }

    fn value(&self, ordinal: usize) -> CatalogResult<SqlValue> {
        let pos = self.pos.ok_or_else(|| CatalogError::driver(NotPositioned))?;
        if ordinal >= self.width {
            return Err(CatalogError::OrdinalOutOfRange { ordinal, width: self.width });
        }
        Ok(self.rows[pos][ordinal].clone())
    }

    fn column_count(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_through_rows_then_stays_exhausted() {
        let mut cursor = StaticCursor::new(1, vec![vec![SqlValue::Int(1)], vec![SqlValue::Int(2)]]);
        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.value(0).unwrap(), SqlValue::Int(1));
        assert!(cursor.advance().unwrap());
        assert_eq!(cursor.value(0).unwrap(), SqlValue::Int(2));
        assert!(!cursor.advance().unwrap());
        assert!(!cursor.advance().unwrap());
    }

    #[test]
    fn value_before_advance_is_an_error() {
        let cursor = StaticCursor::new(1, vec![vec![SqlValue::Int(1)]]);
        assert!(cursor.value(0).is_err());
    }

    #[test]
    fn ordinal_beyond_width_is_an_error() {
        let mut cursor = StaticCursor::new(2, vec![vec![SqlValue::Int(1), SqlValue::Null]]);
        cursor.advance().unwrap();
        match cursor.value(5) {
            Err(CatalogError::OrdinalOutOfRange { ordinal: 5, width: 2 }) => {}
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn mut_reference_is_a_cursor_too() {
        let mut cursor = StaticCursor::new(1, vec![vec![SqlValue::Int(9)]]);
        let mut borrowed: &mut StaticCursor = &mut cursor;
        assert!(borrowed.advance().unwrap());
        assert_eq!(borrowed.value(0).unwrap(), SqlValue::Int(9));
        assert_eq!(borrowed.column_count(), 1);
    }
}
