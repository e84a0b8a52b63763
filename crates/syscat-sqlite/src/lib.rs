//! # syscat-sqlite
//!
//! Runs the fixed catalog queries against SQLite snapshot databases:
//! offline copies of catalog data attached under a `sys` schema alias so
//! the query texts execute verbatim. This is the driver side of the
//! `syscat-core` cursor seam; the live-server driver is supplied by the
//! calling application.

pub mod cursor;
pub mod query;
pub mod snapshot;

pub use cursor::SqliteCursor;
pub use query::{read_all, read_first};
pub use snapshot::Snapshot;
