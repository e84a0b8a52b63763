//! Free functions that run a view's fixed query on a connection.

use rusqlite::Connection;
use syscat_core::{CatalogError, CatalogReader, CatalogResult, CatalogView};

use crate::cursor::SqliteCursor;

/// Run `V::QUERY` and drain the whole result set.
pub fn read_all<V: CatalogView>(conn: &Connection) -> CatalogResult<Vec<V>> {
    tracing::debug!(view = V::VIEW, "reading catalog view");
    let mut stmt = conn.prepare(V::QUERY).map_err(CatalogError::driver)?;
    let cursor = SqliteCursor::new(&mut stmt)?;
    CatalogReader::<_, V>::new(cursor).read_all()
}

/// Run `V::QUERY` and return the first record, if any.
pub fn read_first<V: CatalogView>(conn: &Connection) -> CatalogResult<Option<V>> {
    tracing::debug!(view = V::VIEW, "reading first record of catalog view");
    let mut stmt = conn.prepare(V::QUERY).map_err(CatalogError::driver)?;
    let cursor = SqliteCursor::new(&mut stmt)?;
    CatalogReader::<_, V>::new(cursor).first()
}
