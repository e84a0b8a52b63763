//! SQL Trace catalog views.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType};

/// Row of `sys.traces`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRow {
    pub id: i32,
    pub status: i32,
    pub path: Option<String>,
    pub max_size: Option<i64>,
    pub stop_time: Option<NaiveDateTime>,
    pub max_files: Option<i32>,
    pub is_rowset: bool,
    pub is_rollover: bool,
    pub is_shutdown: bool,
    pub is_default: bool,
    pub buffer_count: i32,
    pub buffer_size: i32,
    pub file_position: Option<i64>,
    pub reader_spid: Option<i32>,
    pub start_time: Option<NaiveDateTime>,
    pub last_event_time: Option<NaiveDateTime>,
    pub event_count: Option<i64>,
    pub dropped_event_count: Option<i32>,
}

impl CatalogView for TraceRow {
    const VIEW: &'static str = "sys.traces";
    const QUERY: &'static str = "SELECT id, status, path, max_size, stop_time, max_files, is_rowset, is_rollover, \
         is_shutdown, is_default, buffer_count, buffer_size, file_position, reader_spid, \
         start_time, last_event_time, event_count, dropped_event_count FROM sys.traces";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "id", SqlType::Int, false),
        ColumnDef::new(1, "status", SqlType::Int, false),
        ColumnDef::new(2, "path", SqlType::NVarchar, true),
        ColumnDef::new(3, "max_size", SqlType::BigInt, true),
        ColumnDef::new(4, "stop_time", SqlType::DateTime, true),
        ColumnDef::new(5, "max_files", SqlType::Int, true),
        ColumnDef::new(6, "is_rowset", SqlType::Bit, false),
        ColumnDef::new(7, "is_rollover", SqlType::Bit, false),
        ColumnDef::new(8, "is_shutdown", SqlType::Bit, false),
        ColumnDef::new(9, "is_default", SqlType::Bit, false),
        ColumnDef::new(10, "buffer_count", SqlType::Int, false),
        ColumnDef::new(11, "buffer_size", SqlType::Int, false),
        ColumnDef::new(12, "file_position", SqlType::BigInt, true),
        ColumnDef::new(13, "reader_spid", SqlType::Int, true),
        ColumnDef::new(14, "start_time", SqlType::DateTime, true),
        ColumnDef::new(15, "last_event_time", SqlType::DateTime, true),
        ColumnDef::new(16, "event_count", SqlType::BigInt, true),
        ColumnDef::new(17, "dropped_event_count", SqlType::Int, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            id: row.get(0)?,
            status: row.get(1)?,
            path: row.get(2)?,
            max_size: row.get(3)?,
            stop_time: row.get(4)?,
            max_files: row.get(5)?,
            is_rowset: row.get(6)?,
            is_rollover: row.get(7)?,
            is_shutdown: row.get(8)?,
            is_default: row.get(9)?,
            buffer_count: row.get(10)?,
            buffer_size: row.get(11)?,
            file_position: row.get(12)?,
            reader_spid: row.get(13)?,
            start_time: row.get(14)?,
            last_event_time: row.get(15)?,
            event_count: row.get(16)?,
            dropped_event_count: row.get(17)?,
        })
    }
}

/// Row of `sys.trace_categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceCategoryRow {
    pub category_id: i16,
    pub name: String,
    pub r#type: u8,
}

impl CatalogView for TraceCategoryRow {
    const VIEW: &'static str = "sys.trace_categories";
    const QUERY: &'static str = "SELECT category_id, name, type FROM sys.trace_categories";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "category_id", SqlType::SmallInt, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, false),
        ColumnDef::new(2, "type", SqlType::TinyInt, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            category_id: row.get(0)?,
            name: row.get(1)?,
            r#type: row.get(2)?,
        })
    }
}

/// Row of `sys.trace_events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEventRow {
    pub trace_event_id: i16,
    pub category_id: i16,
    pub name: String,
}

impl CatalogView for TraceEventRow {
    const VIEW: &'static str = "sys.trace_events";
    const QUERY: &'static str = "SELECT trace_event_id, category_id, name FROM sys.trace_events";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "trace_event_id", SqlType::SmallInt, false),
        ColumnDef::new(1, "category_id", SqlType::SmallInt, false),
        ColumnDef::new(2, "name", SqlType::NVarchar, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            trace_event_id: row.get(0)?,
            category_id: row.get(1)?,
            name: row.get(2)?,
        })
    }
}

/// Row of `sys.trace_columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceColumnRow {
    pub trace_column_id: i16,
    pub name: String,
    pub type_name: Option<String>,
    pub max_size: Option<i32>,
    pub is_filterable: bool,
    pub is_repeatable: bool,
    pub is_repeated_base: bool,
}

impl CatalogView for TraceColumnRow {
    const VIEW: &'static str = "sys.trace_columns";
    const QUERY: &'static str = "SELECT trace_column_id, name, type_name, max_size, is_filterable, is_repeatable, \
         is_repeated_base FROM sys.trace_columns";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "trace_column_id", SqlType::SmallInt, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, false),
        ColumnDef::new(2, "type_name", SqlType::NVarchar, true),
        ColumnDef::new(3, "max_size", SqlType::Int, true),
        ColumnDef::new(4, "is_filterable", SqlType::Bit, false),
        ColumnDef::new(5, "is_repeatable", SqlType::Bit, false),
        ColumnDef::new(6, "is_repeated_base", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            trace_column_id: row.get(0)?,
            name: row.get(1)?,
            type_name: row.get(2)?,
            max_size: row.get(3)?,
            is_filterable: row.get(4)?,
            is_repeatable: row.get(5)?,
            is_repeated_base: row.get(6)?,
        })
    }
}

/// Row of `sys.trace_subclass_values`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSubclassValueRow {
    pub trace_event_id: i16,
    pub trace_column_id: i16,
    pub subclass_name: Option<String>,
    pub subclass_value: i16,
}

impl CatalogView for TraceSubclassValueRow {
    const VIEW: &'static str = "sys.trace_subclass_values";
    const QUERY: &'static str = "SELECT trace_event_id, trace_column_id, subclass_name, subclass_value \
         FROM sys.trace_subclass_values";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "trace_event_id", SqlType::SmallInt, false),
        ColumnDef::new(1, "trace_column_id", SqlType::SmallInt, false),
        ColumnDef::new(2, "subclass_name", SqlType::NVarchar, true),
        ColumnDef::new(3, "subclass_value", SqlType::SmallInt, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            trace_event_id: row.get(0)?,
            trace_column_id: row.get(1)?,
            subclass_name: row.get(2)?,
            subclass_value: row.get(3)?,
        })
    }
}

/// Row of `sys.trace_event_bindings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEventBindingRow {
    pub trace_event_id: i16,
    pub trace_column_id: i16,
}

impl CatalogView for TraceEventBindingRow {
    const VIEW: &'static str = "sys.trace_event_bindings";
    const QUERY: &'static str =
        "SELECT trace_event_id, trace_column_id FROM sys.trace_event_bindings";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "trace_event_id", SqlType::SmallInt, false),
        ColumnDef::new(1, "trace_column_id", SqlType::SmallInt, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            trace_event_id: row.get(0)?,
            trace_column_id: row.get(1)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<TraceRow>();
        fixture::exercise::<TraceCategoryRow>();
        fixture::exercise::<TraceEventRow>();
        fixture::exercise::<TraceColumnRow>();
        fixture::exercise::<TraceSubclassValueRow>();
        fixture::exercise::<TraceEventBindingRow>();
    }
}
