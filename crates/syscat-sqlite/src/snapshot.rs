//! Snapshot databases: offline catalog copies attached under a `sys` alias.
//!
//! The fixed query texts reference views as `sys.<name>`. SQLite resolves
//! that notation against a database attached with the alias `sys`, so a
//! snapshot file holding one table per view runs the queries verbatim.

use std::path::Path;

use rusqlite::Connection;
use syscat_core::{CatalogError, CatalogResult, CatalogView, SqlType};

use crate::query;

/// SQLite column affinity for a declared catalog type. `sql_variant`
/// columns get no affinity so inserted values keep their storage class.
fn affinity(ty: SqlType) -> &'static str {
    match ty {
        SqlType::Bit
        | SqlType::TinyInt
        | SqlType::SmallInt
        | SqlType::Int
        | SqlType::BigInt => "INTEGER",
        SqlType::Float => "REAL",
        SqlType::NVarchar | SqlType::DateTime | SqlType::Guid => "TEXT",
        SqlType::VarBinary => "BLOB",
        SqlType::Variant => "",
    }
}

/// A connection with a snapshot database attached as `sys`.
pub struct Snapshot {
    conn: Connection,
}

impl Snapshot {
    /// Open an existing snapshot read-only.
    pub fn open(path: &Path) -> CatalogResult<Self> {
        tracing::debug!(path = %path.display(), "opening catalog snapshot");
        let snapshot = Self::attach(path)?;
        snapshot
            .conn
            .execute_batch("PRAGMA query_only = ON;")
            .map_err(CatalogError::driver)?;
        Ok(snapshot)
    }

    /// Create (or open read-write) a snapshot file, for fixture building.
    pub fn create(path: &Path) -> CatalogResult<Self> {
        tracing::debug!(path = %path.display(), "creating catalog snapshot");
        Self::attach(path)
    }

    /// In-memory snapshot, for tests.
    pub fn open_in_memory() -> CatalogResult<Self> {
        let conn = Connection::open_in_memory().map_err(CatalogError::driver)?;
        conn.execute_batch("ATTACH DATABASE ':memory:' AS sys; PRAGMA busy_timeout = 5000;")
            .map_err(CatalogError::driver)?;
        Ok(Self { conn })
    }

    fn attach(path: &Path) -> CatalogResult<Self> {
        let conn = Connection::open_in_memory().map_err(CatalogError::driver)?;
        let target = path.to_string_lossy();
        conn.execute("ATTACH DATABASE ?1 AS sys", [target.as_ref()])
            .map_err(CatalogError::driver)?;
        conn.execute_batch("PRAGMA busy_timeout = 5000;")
            .map_err(CatalogError::driver)?;
        Ok(Self { conn })
    }

    /// The underlying connection, for raw fixture SQL.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Create the snapshot table for a view from its declared shape.
    pub fn install<V: CatalogView>(&self) -> CatalogResult<()> {
        let table = V::VIEW.strip_prefix("sys.").unwrap_or(V::VIEW);
        let columns: Vec<String> = V::SHAPE
            .iter()
            .map(|c| {
                let mut col = format!("\"{}\"", c.name);
                let aff = affinity(c.ty);
                if !aff.is_empty() {
                    col.push(' ');
                    col.push_str(aff);
                }
                if !c.nullable {
                    col.push_str(" NOT NULL");
                }
                col
            })
            .collect();
        let ddl = format!("CREATE TABLE sys.\"{}\" ({})", table, columns.join(", "));
        tracing::debug!(view = V::VIEW, "installing snapshot table");
        self.conn.execute_batch(&ddl).map_err(CatalogError::driver)
    }

    /// Drain a view's fixed query against this snapshot.
    pub fn read_all<V: CatalogView>(&self) -> CatalogResult<Vec<V>> {
        query::read_all(&self.conn)
    }

    /// First record of a view's fixed query against this snapshot.
    pub fn read_first<V: CatalogView>(&self) -> CatalogResult<Option<V>> {
        query::read_first(&self.conn)
    }
}
