//! Error type shared by every catalog reader.
//!
//! There is no recovery here: driver failures pass through unmodified and
//! shape mismatches surface at the offending column read.

/// Errors raised while reading catalog rows.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failure reported by the underlying database driver, unmodified.
    #[error("driver error: {source}")]
    Driver {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A NOT NULL column held a database NULL.
    #[error("{view}.{column} (ordinal {ordinal}): unexpected NULL in NOT NULL column")]
    UnexpectedNull {
        view: &'static str,
        column: &'static str,
        ordinal: usize,
    },

    /// The value at an ordinal does not match the declared column type.
    #[error("{view}.{column} (ordinal {ordinal}): expected {expected}, found {found}")]
    TypeMismatch {
        view: &'static str,
        column: &'static str,
        ordinal: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// Right type family, but the value does not fit the declared width.
    #[error("{view}.{column} (ordinal {ordinal}): value {value} out of range for {expected}")]
    OutOfRange {
        view: &'static str,
        column: &'static str,
        ordinal: usize,
        expected: &'static str,
        value: i64,
    },

    /// An ordinal beyond the width of the result set.
    #[error("column ordinal {ordinal} out of range for result width {width}")]
    OrdinalOutOfRange { ordinal: usize, width: usize },

    /// A record was requested while the cursor is not positioned on a row.
    #[error("{view}: no current row (advance() must return true before reading)")]
    NotOnRow { view: &'static str },
}

impl CatalogError {
    /// Wrap a driver-side error without touching it.
    pub fn driver<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CatalogError::Driver { source: Box::new(source) }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
