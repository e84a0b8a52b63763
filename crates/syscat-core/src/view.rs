//! The row-shape descriptor implemented once per catalog view.

use crate::error::CatalogResult;
use crate::row::Row;
use crate::shape::ColumnDef;

/// Binds a record type to one catalog view: its name, the fixed query text,
/// the declared row shape, and the ordinal-based conversion from a row.
///
/// The query text is the wire-level contract with the server; `SHAPE`
/// ordinals must match its column order exactly. `from_row` reads each
/// declared column by fixed ordinal.
pub trait CatalogView: Sized {
    /// Fully qualified view name, e.g. `"sys.schemas"`.
    const VIEW: &'static str;

    /// The fixed `SELECT` executed against the server.
    const QUERY: &'static str;

    /// Declared column layout, in `SELECT` order.
    const SHAPE: &'static [ColumnDef];

    /// Materialize one record from the current row.
    fn from_row(row: &Row<'_>) -> CatalogResult<Self>;
}
