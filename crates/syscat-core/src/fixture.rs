//! Shape-driven test fixtures.
//!
//! The one real risk surface in generated readers is drift between a view's
//! declared shape and its `from_row` ordinals. [`exercise`] drives a reader
//! over a shape-derived two-row cursor and panics on any wiring mismatch, so
//! one call per view covers the whole surface.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::cursor::StaticCursor;
use crate::reader::CatalogReader;
use crate::shape::{ColumnDef, SqlType};
use crate::value::SqlValue;
use crate::view::CatalogView;

/// A representative non-null value for each declared type.
pub fn sample_value(ty: SqlType) -> SqlValue {
    match ty {
        SqlType::Bit => SqlValue::Bit(true),
        SqlType::TinyInt => SqlValue::TinyInt(3),
        SqlType::SmallInt => SqlValue::SmallInt(12),
        SqlType::Int => SqlValue::Int(42),
        SqlType::BigInt => SqlValue::BigInt(420_000),
        SqlType::Float => SqlValue::Float(2.5),
        SqlType::NVarchar => SqlValue::NVarchar("dbo".into()),
        SqlType::DateTime => SqlValue::DateTime(
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        ),
        SqlType::Guid => SqlValue::Guid(Uuid::from_u128(0x6f9619ff_8b86_d011_b42d_00c04fc964ff)),
        SqlType::VarBinary => SqlValue::VarBinary(vec![0xDE, 0xAD, 0xBE, 0xEF]),
        // Variant cells can hold anything the server put there.
        SqlType::Variant => SqlValue::Int(7),
    }
}

/// One row with every column populated.
pub fn populated_row(shape: &[ColumnDef]) -> Vec<SqlValue> {
    shape.iter().map(|c| sample_value(c.ty)).collect()
}

/// One row with NULL in every nullable column.
pub fn null_row(shape: &[ColumnDef]) -> Vec<SqlValue> {
    shape
        .iter()
        .map(|c| if c.nullable { SqlValue::Null } else { sample_value(c.ty) })
        .collect()
}

/// Cursor over the given rows, sized to the shape.
pub fn cursor_for(shape: &[ColumnDef], rows: Vec<Vec<SqlValue>>) -> StaticCursor {
    StaticCursor::new(shape.len(), rows)
}

/// Verify the wiring between a view's `SHAPE`, `QUERY`, and `from_row`.
///
/// Drains a two-row cursor (row 1 fully populated, row 2 NULL in every
/// nullable column) through a typed reader. Panics on mismatch; intended
/// for use inside `#[test]` functions, one call per view.
pub fn exercise<V: CatalogView>() {
    assert!(!V::SHAPE.is_empty(), "{}: empty shape", V::VIEW);
    for (i, col) in V::SHAPE.iter().enumerate() {
        assert_eq!(
            col.ordinal, i,
            "{}: ordinal of {} does not match its shape position",
            V::VIEW,
            col.name
        );
    }
    assert!(
        V::QUERY.contains(V::VIEW),
        "{}: query text does not reference the view",
        V::VIEW
    );

    let rows = vec![populated_row(V::SHAPE), null_row(V::SHAPE)];
    let reader = CatalogReader::<_, V>::new(cursor_for(V::SHAPE, rows));
    let records = reader
        .read_all()
        .unwrap_or_else(|e| panic!("{}: {e}", V::VIEW));
    assert_eq!(records.len(), 2, "{}: expected both fixture rows", V::VIEW);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogResult;
    use crate::row::Row;

    struct SchemaLike {
        #[allow(dead_code)]
        name: String,
        #[allow(dead_code)]
        principal_id: Option<i32>,
    }

    impl CatalogView for SchemaLike {
        const VIEW: &'static str = "sys.schemas";
        const QUERY: &'static str = "SELECT name, principal_id FROM sys.schemas";
        const SHAPE: &'static [ColumnDef] = &[
            ColumnDef::new(0, "name", SqlType::NVarchar, false),
            ColumnDef::new(1, "principal_id", SqlType::Int, true),
        ];

        fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
            Ok(Self { name: row.get(0)?, principal_id: row.get(1)? })
        }
    }

    #[test]
    fn exercise_accepts_a_consistent_view() {
        exercise::<SchemaLike>();
    }

    #[test]
    fn null_row_spares_not_null_columns() {
        let row = null_row(SchemaLike::SHAPE);
        assert!(!row[0].is_null());
        assert!(row[1].is_null());
    }

    #[test]
    fn sample_values_match_their_declared_type() {
        assert_eq!(sample_value(SqlType::Int).type_name(), "int");
        assert_eq!(sample_value(SqlType::Guid).type_name(), "uniqueidentifier");
        assert!(!sample_value(SqlType::Variant).is_null());
    }
}
