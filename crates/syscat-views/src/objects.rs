//! Object catalog views: schemas, objects and the per-type object views.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType, SqlValue};

/// Row of `sys.schemas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaRow {
    pub name: String,
    pub schema_id: i32,
    pub principal_id: Option<i32>,
}

impl CatalogView for SchemaRow {
    const VIEW: &'static str = "sys.schemas";
    const QUERY: &'static str = "SELECT name, schema_id, principal_id FROM sys.schemas";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "schema_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            schema_id: row.get(1)?,
            principal_id: row.get(2)?,
        })
    }
}

/// Row of `sys.objects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRow {
    pub name: String,
    pub object_id: i32,
    pub principal_id: Option<i32>,
    pub schema_id: i32,
    pub parent_object_id: i32,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub is_ms_shipped: bool,
    pub is_published: bool,
    pub is_schema_published: bool,
}

impl CatalogView for ObjectRow {
    const VIEW: &'static str = "sys.objects";
    const QUERY: &'static str = "SELECT name, object_id, principal_id, schema_id, parent_object_id, type, type_desc, \
         create_date, modify_date, is_ms_shipped, is_published, is_schema_published FROM sys.objects";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "object_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "schema_id", SqlType::Int, false),
        ColumnDef::new(4, "parent_object_id", SqlType::Int, false),
        ColumnDef::new(5, "type", SqlType::NVarchar, false),
        ColumnDef::new(6, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(7, "create_date", SqlType::DateTime, false),
        ColumnDef::new(8, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(9, "is_ms_shipped", SqlType::Bit, false),
        ColumnDef::new(10, "is_published", SqlType::Bit, false),
        ColumnDef::new(11, "is_schema_published", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            object_id: row.get(1)?,
            principal_id: row.get(2)?,
            schema_id: row.get(3)?,
            parent_object_id: row.get(4)?,
            r#type: row.get(5)?,
            type_desc: row.get(6)?,
            create_date: row.get(7)?,
            modify_date: row.get(8)?,
            is_ms_shipped: row.get(9)?,
            is_published: row.get(10)?,
            is_schema_published: row.get(11)?,
        })
    }
}

/// Row of `sys.tables`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub name: String,
    pub object_id: i32,
    pub principal_id: Option<i32>,
    pub schema_id: i32,
    pub parent_object_id: i32,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub is_ms_shipped: bool,
    pub is_published: bool,
    pub is_schema_published: bool,
    pub lob_data_space_id: i32,
    pub filestream_data_space_id: Option<i32>,
    pub max_column_id_used: i32,
    pub lock_on_bulk_load: bool,
    pub uses_ansi_nulls: Option<bool>,
    pub is_replicated: Option<bool>,
    pub has_replication_filter: Option<bool>,
    pub is_merge_published: Option<bool>,
    pub is_sync_tran_subscribed: Option<bool>,
    pub has_unchecked_assembly_data: bool,
    pub text_in_row_limit: Option<i32>,
    pub large_value_types_out_of_row: Option<bool>,
    pub is_tracked_by_cdc: Option<bool>,
    pub lock_escalation: Option<u8>,
    pub lock_escalation_desc: Option<String>,
}

impl CatalogView for TableRow {
    const VIEW: &'static str = "sys.tables";
    const QUERY: &'static str = "SELECT name, object_id, principal_id, schema_id, parent_object_id, type, type_desc, \
         create_date, modify_date, is_ms_shipped, is_published, is_schema_published, \
         lob_data_space_id, filestream_data_space_id, max_column_id_used, lock_on_bulk_load, \
         uses_ansi_nulls, is_replicated, has_replication_filter, is_merge_published, \
         is_sync_tran_subscribed, has_unchecked_assembly_data, text_in_row_limit, \
         large_value_types_out_of_row, is_tracked_by_cdc, lock_escalation, lock_escalation_desc \
         FROM sys.tables";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "object_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "schema_id", SqlType::Int, false),
        ColumnDef::new(4, "parent_object_id", SqlType::Int, false),
        ColumnDef::new(5, "type", SqlType::NVarchar, false),
        ColumnDef::new(6, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(7, "create_date", SqlType::DateTime, false),
        ColumnDef::new(8, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(9, "is_ms_shipped", SqlType::Bit, false),
        ColumnDef::new(10, "is_published", SqlType::Bit, false),
        ColumnDef::new(11, "is_schema_published", SqlType::Bit, false),
        ColumnDef::new(12, "lob_data_space_id", SqlType::Int, false),
        ColumnDef::new(13, "filestream_data_space_id", SqlType::Int, true),
        ColumnDef::new(14, "max_column_id_used", SqlType::Int, false),
        ColumnDef::new(15, "lock_on_bulk_load", SqlType::Bit, false),
        ColumnDef::new(16, "uses_ansi_nulls", SqlType::Bit, true),
        ColumnDef::new(17, "is_replicated", SqlType::Bit, true),
        ColumnDef::new(18, "has_replication_filter", SqlType::Bit, true),
        ColumnDef::new(19, "is_merge_published", SqlType::Bit, true),
        ColumnDef::new(20, "is_sync_tran_subscribed", SqlType::Bit, true),
        ColumnDef::new(21, "has_unchecked_assembly_data", SqlType::Bit, false),
        ColumnDef::new(22, "text_in_row_limit", SqlType::Int, true),
        ColumnDef::new(23, "large_value_types_out_of_row", SqlType::Bit, true),
        ColumnDef::new(24, "is_tracked_by_cdc", SqlType::Bit, true),
        ColumnDef::new(25, "lock_escalation", SqlType::TinyInt, true),
        ColumnDef::new(26, "lock_escalation_desc", SqlType::NVarchar, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            object_id: row.get(1)?,
            principal_id: row.get(2)?,
            schema_id: row.get(3)?,
            parent_object_id: row.get(4)?,
            r#type: row.get(5)?,
            type_desc: row.get(6)?,
            create_date: row.get(7)?,
            modify_date: row.get(8)?,
            is_ms_shipped: row.get(9)?,
            is_published: row.get(10)?,
            is_schema_published: row.get(11)?,
            lob_data_space_id: row.get(12)?,
            filestream_data_space_id: row.get(13)?,
            max_column_id_used: row.get(14)?,
            lock_on_bulk_load: row.get(15)?,
            uses_ansi_nulls: row.get(16)?,
            is_replicated: row.get(17)?,
            has_replication_filter: row.get(18)?,
            is_merge_published: row.get(19)?,
            is_sync_tran_subscribed: row.get(20)?,
            has_unchecked_assembly_data: row.get(21)?,
            text_in_row_limit: row.get(22)?,
            large_value_types_out_of_row: row.get(23)?,
            is_tracked_by_cdc: row.get(24)?,
            lock_escalation: row.get(25)?,
            lock_escalation_desc: row.get(26)?,
        })
    }
}

/// Row of `sys.views`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewRow {
    pub name: String,
    pub object_id: i32,
    pub principal_id: Option<i32>,
    pub schema_id: i32,
    pub parent_object_id: i32,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub is_ms_shipped: bool,
    pub is_published: bool,
    pub is_schema_published: bool,
    pub is_replicated: Option<bool>,
    pub has_replication_filter: Option<bool>,
    pub has_opaque_metadata: bool,
    pub has_unchecked_assembly_data: bool,
    pub with_check_option: bool,
    pub is_date_correlation_view: bool,
}

impl CatalogView for ViewRow {
    const VIEW: &'static str = "sys.views";
    const QUERY: &'static str = "SELECT name, object_id, principal_id, schema_id, parent_object_id, type, type_desc, \
         create_date, modify_date, is_ms_shipped, is_published, is_schema_published, \
         is_replicated, has_replication_filter, has_opaque_metadata, has_unchecked_assembly_data, \
         with_check_option, is_date_correlation_view FROM sys.views";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "object_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "schema_id", SqlType::Int, false),
        ColumnDef::new(4, "parent_object_id", SqlType::Int, false),
        ColumnDef::new(5, "type", SqlType::NVarchar, false),
        ColumnDef::new(6, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(7, "create_date", SqlType::DateTime, false),
        ColumnDef::new(8, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(9, "is_ms_shipped", SqlType::Bit, false),
        ColumnDef::new(10, "is_published", SqlType::Bit, false),
        ColumnDef::new(11, "is_schema_published", SqlType::Bit, false),
        ColumnDef::new(12, "is_replicated", SqlType::Bit, true),
        ColumnDef::new(13, "has_replication_filter", SqlType::Bit, true),
        ColumnDef::new(14, "has_opaque_metadata", SqlType::Bit, false),
        ColumnDef::new(15, "has_unchecked_assembly_data", SqlType::Bit, false),
        ColumnDef::new(16, "with_check_option", SqlType::Bit, false),
        ColumnDef::new(17, "is_date_correlation_view", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            object_id: row.get(1)?,
            principal_id: row.get(2)?,
            schema_id: row.get(3)?,
            parent_object_id: row.get(4)?,
            r#type: row.get(5)?,
            type_desc: row.get(6)?,
            create_date: row.get(7)?,
            modify_date: row.get(8)?,
            is_ms_shipped: row.get(9)?,
            is_published: row.get(10)?,
            is_schema_published: row.get(11)?,
            is_replicated: row.get(12)?,
            has_replication_filter: row.get(13)?,
            has_opaque_metadata: row.get(14)?,
            has_unchecked_assembly_data: row.get(15)?,
            with_check_option: row.get(16)?,
            is_date_correlation_view: row.get(17)?,
        })
    }
}

/// Row of `sys.procedures`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureRow {
    pub name: String,
    pub object_id: i32,
    pub principal_id: Option<i32>,
    pub schema_id: i32,
    pub parent_object_id: i32,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub is_ms_shipped: bool,
    pub is_published: bool,
    pub is_schema_published: bool,
    pub is_auto_executed: bool,
    pub is_execution_replicated: Option<bool>,
    pub is_repl_serializable_only: Option<bool>,
    pub skips_repl_constraints: Option<bool>,
}

impl CatalogView for ProcedureRow {
    const VIEW: &'static str = "sys.procedures";
    const QUERY: &'static str = "SELECT name, object_id, principal_id, schema_id, parent_object_id, type, type_desc, \
         create_date, modify_date, is_ms_shipped, is_published, is_schema_published, \
         is_auto_executed, is_execution_replicated, is_repl_serializable_only, \
         skips_repl_constraints FROM sys.procedures";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "object_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "schema_id", SqlType::Int, false),
        ColumnDef::new(4, "parent_object_id", SqlType::Int, false),
        ColumnDef::new(5, "type", SqlType::NVarchar, false),
        ColumnDef::new(6, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(7, "create_date", SqlType::DateTime, false),
        ColumnDef::new(8, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(9, "is_ms_shipped", SqlType::Bit, false),
        ColumnDef::new(10, "is_published", SqlType::Bit, false),
        ColumnDef::new(11, "is_schema_published", SqlType::Bit, false),
        ColumnDef::new(12, "is_auto_executed", SqlType::Bit, false),
        ColumnDef::new(13, "is_execution_replicated", SqlType::Bit, true),
        ColumnDef::new(14, "is_repl_serializable_only", SqlType::Bit, true),
        ColumnDef::new(15, "skips_repl_constraints", SqlType::Bit, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            object_id: row.get(1)?,
            principal_id: row.get(2)?,
            schema_id: row.get(3)?,
            parent_object_id: row.get(4)?,
            r#type: row.get(5)?,
            type_desc: row.get(6)?,
            create_date: row.get(7)?,
            modify_date: row.get(8)?,
            is_ms_shipped: row.get(9)?,
            is_published: row.get(10)?,
            is_schema_published: row.get(11)?,
            is_auto_executed: row.get(12)?,
            is_execution_replicated: row.get(13)?,
            is_repl_serializable_only: row.get(14)?,
            skips_repl_constraints: row.get(15)?,
        })
    }
}

/// Row of `sys.synonyms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymRow {
    pub name: String,
    pub object_id: i32,
    pub principal_id: Option<i32>,
    pub schema_id: i32,
    pub parent_object_id: i32,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub is_ms_shipped: bool,
    pub is_published: bool,
    pub is_schema_published: bool,
    pub base_object_name: Option<String>,
}

impl CatalogView for SynonymRow {
    const VIEW: &'static str = "sys.synonyms";
    const QUERY: &'static str = "SELECT name, object_id, principal_id, schema_id, parent_object_id, type, type_desc, \
         create_date, modify_date, is_ms_shipped, is_published, is_schema_published, \
         base_object_name FROM sys.synonyms";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "object_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "schema_id", SqlType::Int, false),
        ColumnDef::new(4, "parent_object_id", SqlType::Int, false),
        ColumnDef::new(5, "type", SqlType::NVarchar, false),
        ColumnDef::new(6, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(7, "create_date", SqlType::DateTime, false),
        ColumnDef::new(8, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(9, "is_ms_shipped", SqlType::Bit, false),
        ColumnDef::new(10, "is_published", SqlType::Bit, false),
        ColumnDef::new(11, "is_schema_published", SqlType::Bit, false),
        ColumnDef::new(12, "base_object_name", SqlType::NVarchar, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            object_id: row.get(1)?,
            principal_id: row.get(2)?,
            schema_id: row.get(3)?,
            parent_object_id: row.get(4)?,
            r#type: row.get(5)?,
            type_desc: row.get(6)?,
            create_date: row.get(7)?,
            modify_date: row.get(8)?,
            is_ms_shipped: row.get(9)?,
            is_published: row.get(10)?,
            is_schema_published: row.get(11)?,
            base_object_name: row.get(12)?,
        })
    }
}

/// Row of `sys.sequences`. The bound and value columns are `sql_variant`,
/// typed per the sequence's declared type on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceRow {
    pub name: String,
    pub object_id: i32,
    pub principal_id: Option<i32>,
    pub schema_id: i32,
    pub parent_object_id: i32,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub is_ms_shipped: bool,
    pub is_published: bool,
    pub is_schema_published: bool,
    pub start_value: Option<SqlValue>,
    pub increment: Option<SqlValue>,
    pub minimum_value: Option<SqlValue>,
    pub maximum_value: Option<SqlValue>,
    pub is_cycling: bool,
    pub is_cached: bool,
    pub cache_size: Option<i32>,
    pub current_value: Option<SqlValue>,
}

impl CatalogView for SequenceRow {
    const VIEW: &'static str = "sys.sequences";
    const QUERY: &'static str = "SELECT name, object_id, principal_id, schema_id, parent_object_id, type, type_desc, \
         create_date, modify_date, is_ms_shipped, is_published, is_schema_published, \
         start_value, increment, minimum_value, maximum_value, is_cycling, is_cached, \
         cache_size, current_value FROM sys.sequences";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "object_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "schema_id", SqlType::Int, false),
        ColumnDef::new(4, "parent_object_id", SqlType::Int, false),
        ColumnDef::new(5, "type", SqlType::NVarchar, false),
        ColumnDef::new(6, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(7, "create_date", SqlType::DateTime, false),
        ColumnDef::new(8, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(9, "is_ms_shipped", SqlType::Bit, false),
        ColumnDef::new(10, "is_published", SqlType::Bit, false),
        ColumnDef::new(11, "is_schema_published", SqlType::Bit, false),
        ColumnDef::new(12, "start_value", SqlType::Variant, true),
        ColumnDef::new(13, "increment", SqlType::Variant, true),
        ColumnDef::new(14, "minimum_value", SqlType::Variant, true),
        ColumnDef::new(15, "maximum_value", SqlType::Variant, true),
        ColumnDef::new(16, "is_cycling", SqlType::Bit, false),
        ColumnDef::new(17, "is_cached", SqlType::Bit, false),
        ColumnDef::new(18, "cache_size", SqlType::Int, true),
        ColumnDef::new(19, "current_value", SqlType::Variant, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            object_id: row.get(1)?,
            principal_id: row.get(2)?,
            schema_id: row.get(3)?,
            parent_object_id: row.get(4)?,
            r#type: row.get(5)?,
            type_desc: row.get(6)?,
            create_date: row.get(7)?,
            modify_date: row.get(8)?,
            is_ms_shipped: row.get(9)?,
            is_published: row.get(10)?,
            is_schema_published: row.get(11)?,
            start_value: row.get(12)?,
            increment: row.get(13)?,
            minimum_value: row.get(14)?,
            maximum_value: row.get(15)?,
            is_cycling: row.get(16)?,
            is_cached: row.get(17)?,
            cache_size: row.get(18)?,
            current_value: row.get(19)?,
        })
    }
}

/// Row of `sys.triggers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerRow {
    pub name: String,
    pub object_id: i32,
    pub parent_class: u8,
    pub parent_class_desc: Option<String>,
    pub parent_id: i32,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub is_ms_shipped: bool,
    pub is_disabled: bool,
    pub is_not_for_replication: bool,
    pub is_instead_of_trigger: bool,
}

impl CatalogView for TriggerRow {
    const VIEW: &'static str = "sys.triggers";
    const QUERY: &'static str = "SELECT name, object_id, parent_class, parent_class_desc, parent_id, type, \
         type_desc, create_date, modify_date, is_ms_shipped, is_disabled, \
         is_not_for_replication, is_instead_of_trigger FROM sys.triggers";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "object_id", SqlType::Int, false),
        ColumnDef::new(2, "parent_class", SqlType::TinyInt, false),
        ColumnDef::new(3, "parent_class_desc", SqlType::NVarchar, true),
        ColumnDef::new(4, "parent_id", SqlType::Int, false),
        ColumnDef::new(5, "type", SqlType::NVarchar, false),
        ColumnDef::new(6, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(7, "create_date", SqlType::DateTime, false),
        ColumnDef::new(8, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(9, "is_ms_shipped", SqlType::Bit, false),
        ColumnDef::new(10, "is_disabled", SqlType::Bit, false),
        ColumnDef::new(11, "is_not_for_replication", SqlType::Bit, false),
        ColumnDef::new(12, "is_instead_of_trigger", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            object_id: row.get(1)?,
            parent_class: row.get(2)?,
            parent_class_desc: row.get(3)?,
            parent_id: row.get(4)?,
            r#type: row.get(5)?,
            type_desc: row.get(6)?,
            create_date: row.get(7)?,
            modify_date: row.get(8)?,
            is_ms_shipped: row.get(9)?,
            is_disabled: row.get(10)?,
            is_not_for_replication: row.get(11)?,
            is_instead_of_trigger: row.get(12)?,
        })
    }
}

/// Row of `sys.trigger_events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerEventRow {
    pub object_id: i32,
    pub r#type: i32,
    pub type_desc: Option<String>,
    pub is_first: bool,
    pub is_last: bool,
    pub event_group_type: Option<i32>,
    pub event_group_type_desc: Option<String>,
}

impl CatalogView for TriggerEventRow {
    const VIEW: &'static str = "sys.trigger_events";
    const QUERY: &'static str = "SELECT object_id, type, type_desc, is_first, is_last, event_group_type, \
         event_group_type_desc FROM sys.trigger_events";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "object_id", SqlType::Int, false),
        ColumnDef::new(1, "type", SqlType::Int, false),
        ColumnDef::new(2, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(3, "is_first", SqlType::Bit, false),
        ColumnDef::new(4, "is_last", SqlType::Bit, false),
        ColumnDef::new(5, "event_group_type", SqlType::Int, true),
        ColumnDef::new(6, "event_group_type_desc", SqlType::NVarchar, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            object_id: row.get(0)?,
            r#type: row.get(1)?,
            type_desc: row.get(2)?,
            is_first: row.get(3)?,
            is_last: row.get(4)?,
            event_group_type: row.get(5)?,
            event_group_type_desc: row.get(6)?,
        })
    }
}

/// Row of `sys.sql_modules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlModuleRow {
    pub object_id: i32,
    pub definition: Option<String>,
    pub uses_ansi_nulls: Option<bool>,
    pub uses_quoted_identifier: Option<bool>,
    pub is_schema_bound: Option<bool>,
    pub uses_database_collation: Option<bool>,
    pub is_recompiled: Option<bool>,
    pub null_on_null_input: Option<bool>,
    pub execute_as_principal_id: Option<i32>,
}

impl CatalogView for SqlModuleRow {
    const VIEW: &'static str = "sys.sql_modules";
    const QUERY: &'static str = "SELECT object_id, definition, uses_ansi_nulls, uses_quoted_identifier, \
         is_schema_bound, uses_database_collation, is_recompiled, null_on_null_input, \
         execute_as_principal_id FROM sys.sql_modules";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "object_id", SqlType::Int, false),
        ColumnDef::new(1, "definition", SqlType::NVarchar, true),
        ColumnDef::new(2, "uses_ansi_nulls", SqlType::Bit, true),
        ColumnDef::new(3, "uses_quoted_identifier", SqlType::Bit, true),
        ColumnDef::new(4, "is_schema_bound", SqlType::Bit, true),
        ColumnDef::new(5, "uses_database_collation", SqlType::Bit, true),
        ColumnDef::new(6, "is_recompiled", SqlType::Bit, true),
        ColumnDef::new(7, "null_on_null_input", SqlType::Bit, true),
        ColumnDef::new(8, "execute_as_principal_id", SqlType::Int, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            object_id: row.get(0)?,
            definition: row.get(1)?,
            uses_ansi_nulls: row.get(2)?,
            uses_quoted_identifier: row.get(3)?,
            is_schema_bound: row.get(4)?,
            uses_database_collation: row.get(5)?,
            is_recompiled: row.get(6)?,
            null_on_null_input: row.get(7)?,
            execute_as_principal_id: row.get(8)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::{fixture, CatalogReader, SqlValue};

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<SchemaRow>();
        fixture::exercise::<ObjectRow>();
        fixture::exercise::<TableRow>();
        fixture::exercise::<ViewRow>();
        fixture::exercise::<ProcedureRow>();
        fixture::exercise::<SynonymRow>();
        fixture::exercise::<SequenceRow>();
        fixture::exercise::<TriggerRow>();
        fixture::exercise::<TriggerEventRow>();
        fixture::exercise::<SqlModuleRow>();
    }

    #[test]
    fn decodes_schema_rows_in_order() {
        let cursor = fixture::cursor_for(
            SchemaRow::SHAPE,
            vec![
                vec![SqlValue::NVarchar("dbo".into()), SqlValue::Int(1), SqlValue::Int(1)],
                vec![SqlValue::NVarchar("guest".into()), SqlValue::Int(2), SqlValue::Null],
            ],
        );
        let rows = CatalogReader::<_, SchemaRow>::new(cursor).read_all().unwrap();
        assert_eq!(
            rows,
            vec![
                SchemaRow { name: "dbo".into(), schema_id: 1, principal_id: Some(1) },
                SchemaRow { name: "guest".into(), schema_id: 2, principal_id: None },
            ]
        );
    }

    #[test]
    fn schema_row_serializes_with_column_names() {
        let row = SchemaRow { name: "dbo".into(), schema_id: 1, principal_id: None };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["name"], "dbo");
        assert_eq!(json["schema_id"], 1);
        assert!(json["principal_id"].is_null());
    }
}
