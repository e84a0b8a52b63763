//! # syscat-core
//!
//! Foundation crate for the syscat catalog readers.
//! Defines the value model, row-shape metadata, the cursor seam to the
//! database driver, the generic typed reader, and errors.
//! Every other crate in the workspace depends on this.

pub mod cursor;
pub mod error;
pub mod fixture;
pub mod reader;
pub mod row;
pub mod shape;
pub mod value;
pub mod view;

// Re-export the most commonly used types at the crate root.
pub use cursor::{Cursor, StaticCursor};
pub use error::{CatalogError, CatalogResult};
pub use reader::CatalogReader;
pub use row::Row;
pub use shape::{ColumnDef, SqlType};
pub use value::{FromSqlValue, SqlValue};
pub use view::CatalogView;
