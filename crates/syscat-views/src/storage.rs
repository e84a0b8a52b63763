//! Storage catalog views: data spaces, files, partitions, allocation units.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType, SqlValue};
use uuid::Uuid;

/// Row of `sys.data_spaces`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSpaceRow {
    pub name: String,
    pub data_space_id: i32,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub is_default: bool,
}

impl CatalogView for DataSpaceRow {
    const VIEW: &'static str = "sys.data_spaces";
    const QUERY: &'static str =
        "SELECT name, data_space_id, type, type_desc, is_default FROM sys.data_spaces";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "data_space_id", SqlType::Int, false),
        ColumnDef::new(2, "type", SqlType::NVarchar, false),
        ColumnDef::new(3, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(4, "is_default", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            data_space_id: row.get(1)?,
            r#type: row.get(2)?,
            type_desc: row.get(3)?,
            is_default: row.get(4)?,
        })
    }
}

/// Row of `sys.filegroups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilegroupRow {
    pub name: String,
    pub data_space_id: i32,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub is_default: bool,
    pub filegroup_guid: Option<Uuid>,
    pub log_filegroup_id: Option<i32>,
    pub is_read_only: Option<bool>,
}

impl CatalogView for FilegroupRow {
    const VIEW: &'static str = "sys.filegroups";
    const QUERY: &'static str = "SELECT name, data_space_id, type, type_desc, is_default, filegroup_guid, \
         log_filegroup_id, is_read_only FROM sys.filegroups";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "data_space_id", SqlType::Int, false),
        ColumnDef::new(2, "type", SqlType::NVarchar, false),
        ColumnDef::new(3, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(4, "is_default", SqlType::Bit, false),
        ColumnDef::new(5, "filegroup_guid", SqlType::Guid, true),
        ColumnDef::new(6, "log_filegroup_id", SqlType::Int, true),
        ColumnDef::new(7, "is_read_only", SqlType::Bit, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            data_space_id: row.get(1)?,
            r#type: row.get(2)?,
            type_desc: row.get(3)?,
            is_default: row.get(4)?,
            filegroup_guid: row.get(5)?,
            log_filegroup_id: row.get(6)?,
            is_read_only: row.get(7)?,
        })
    }
}

/// Row of `sys.database_files`. The redo/differential LSN columns are not
/// selected; their `numeric(25,0)` representation has no counterpart in the
/// value model and no other view needs one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseFileRow {
    pub file_id: i32,
    pub file_guid: Option<Uuid>,
    pub r#type: u8,
    pub type_desc: Option<String>,
    pub data_space_id: i32,
    pub name: String,
    pub physical_name: String,
    pub state: Option<u8>,
    pub state_desc: Option<String>,
    pub size: i32,
    pub max_size: i32,
    pub growth: i32,
    pub is_media_read_only: bool,
    pub is_read_only: bool,
    pub is_sparse: bool,
    pub is_percent_growth: bool,
    pub is_name_reserved: bool,
}

impl CatalogView for DatabaseFileRow {
    const VIEW: &'static str = "sys.database_files";
    const QUERY: &'static str = "SELECT file_id, file_guid, type, type_desc, data_space_id, name, physical_name, \
         state, state_desc, size, max_size, growth, is_media_read_only, is_read_only, \
         is_sparse, is_percent_growth, is_name_reserved FROM sys.database_files";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "file_id", SqlType::Int, false),
        ColumnDef::new(1, "file_guid", SqlType::Guid, true),
        ColumnDef::new(2, "type", SqlType::TinyInt, false),
        ColumnDef::new(3, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(4, "data_space_id", SqlType::Int, false),
        ColumnDef::new(5, "name", SqlType::NVarchar, false),
        ColumnDef::new(6, "physical_name", SqlType::NVarchar, false),
        ColumnDef::new(7, "state", SqlType::TinyInt, true),
        ColumnDef::new(8, "state_desc", SqlType::NVarchar, true),
        ColumnDef::new(9, "size", SqlType::Int, false),
        ColumnDef::new(10, "max_size", SqlType::Int, false),
        ColumnDef::new(11, "growth", SqlType::Int, false),
        ColumnDef::new(12, "is_media_read_only", SqlType::Bit, false),
        ColumnDef::new(13, "is_read_only", SqlType::Bit, false),
        ColumnDef::new(14, "is_sparse", SqlType::Bit, false),
        ColumnDef::new(15, "is_percent_growth", SqlType::Bit, false),
        ColumnDef::new(16, "is_name_reserved", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            file_id: row.get(0)?,
            file_guid: row.get(1)?,
            r#type: row.get(2)?,
            type_desc: row.get(3)?,
            data_space_id: row.get(4)?,
            name: row.get(5)?,
            physical_name: row.get(6)?,
            state: row.get(7)?,
            state_desc: row.get(8)?,
            size: row.get(9)?,
            max_size: row.get(10)?,
            growth: row.get(11)?,
            is_media_read_only: row.get(12)?,
            is_read_only: row.get(13)?,
            is_sparse: row.get(14)?,
            is_percent_growth: row.get(15)?,
            is_name_reserved: row.get(16)?,
        })
    }
}

/// Row of `sys.partitions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionRow {
    pub partition_id: i64,
    pub object_id: i32,
    pub index_id: i32,
    pub partition_number: i32,
    pub hobt_id: i64,
    pub rows: Option<i64>,
    pub data_compression: u8,
    pub data_compression_desc: Option<String>,
}

impl CatalogView for PartitionRow {
    const VIEW: &'static str = "sys.partitions";
    const QUERY: &'static str = "SELECT partition_id, object_id, index_id, partition_number, hobt_id, rows, \
         data_compression, data_compression_desc FROM sys.partitions";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "partition_id", SqlType::BigInt, false),
        ColumnDef::new(1, "object_id", SqlType::Int, false),
        ColumnDef::new(2, "index_id", SqlType::Int, false),
        ColumnDef::new(3, "partition_number", SqlType::Int, false),
        ColumnDef::new(4, "hobt_id", SqlType::BigInt, false),
        ColumnDef::new(5, "rows", SqlType::BigInt, true),
        ColumnDef::new(6, "data_compression", SqlType::TinyInt, false),
        ColumnDef::new(7, "data_compression_desc", SqlType::NVarchar, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            partition_id: row.get(0)?,
            object_id: row.get(1)?,
            index_id: row.get(2)?,
            partition_number: row.get(3)?,
            hobt_id: row.get(4)?,
            rows: row.get(5)?,
            data_compression: row.get(6)?,
            data_compression_desc: row.get(7)?,
        })
    }
}

/// Row of `sys.partition_schemes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionSchemeRow {
    pub name: String,
    pub data_space_id: i32,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub is_default: bool,
    pub function_id: i32,
}

impl CatalogView for PartitionSchemeRow {
    const VIEW: &'static str = "sys.partition_schemes";
    const QUERY: &'static str = "SELECT name, data_space_id, type, type_desc, is_default, function_id \
         FROM sys.partition_schemes";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "data_space_id", SqlType::Int, false),
        ColumnDef::new(2, "type", SqlType::NVarchar, false),
        ColumnDef::new(3, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(4, "is_default", SqlType::Bit, false),
        ColumnDef::new(5, "function_id", SqlType::Int, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            data_space_id: row.get(1)?,
            r#type: row.get(2)?,
            type_desc: row.get(3)?,
            is_default: row.get(4)?,
            function_id: row.get(5)?,
        })
    }
}

/// Row of `sys.partition_functions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionFunctionRow {
    pub name: String,
    pub function_id: i32,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub fanout: i32,
    pub boundary_value_on_right: bool,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
}

impl CatalogView for PartitionFunctionRow {
    const VIEW: &'static str = "sys.partition_functions";
    const QUERY: &'static str = "SELECT name, function_id, type, type_desc, fanout, boundary_value_on_right, \
         create_date, modify_date FROM sys.partition_functions";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "function_id", SqlType::Int, false),
        ColumnDef::new(2, "type", SqlType::NVarchar, false),
        ColumnDef::new(3, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(4, "fanout", SqlType::Int, false),
        ColumnDef::new(5, "boundary_value_on_right", SqlType::Bit, false),
        ColumnDef::new(6, "create_date", SqlType::DateTime, false),
        ColumnDef::new(7, "modify_date", SqlType::DateTime, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            function_id: row.get(1)?,
            r#type: row.get(2)?,
            type_desc: row.get(3)?,
            fanout: row.get(4)?,
            boundary_value_on_right: row.get(5)?,
            create_date: row.get(6)?,
            modify_date: row.get(7)?,
        })
    }
}

/// Row of `sys.partition_range_values`. Boundary values are `sql_variant`,
/// typed per the function's parameter type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionRangeValueRow {
    pub function_id: i32,
    pub boundary_id: i32,
    pub parameter_id: i32,
    pub value: Option<SqlValue>,
}

impl CatalogView for PartitionRangeValueRow {
    const VIEW: &'static str = "sys.partition_range_values";
    const QUERY: &'static str =
        "SELECT function_id, boundary_id, parameter_id, value FROM sys.partition_range_values";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "function_id", SqlType::Int, false),
        ColumnDef::new(1, "boundary_id", SqlType::Int, false),
        ColumnDef::new(2, "parameter_id", SqlType::Int, false),
        ColumnDef::new(3, "value", SqlType::Variant, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            function_id: row.get(0)?,
            boundary_id: row.get(1)?,
            parameter_id: row.get(2)?,
            value: row.get(3)?,
        })
    }
}

/// Row of `sys.allocation_units`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationUnitRow {
    pub allocation_unit_id: i64,
    pub r#type: u8,
    pub type_desc: Option<String>,
    pub container_id: i64,
    pub data_space_id: Option<i32>,
    pub total_pages: i64,
    pub used_pages: i64,
    pub data_pages: i64,
}

impl CatalogView for AllocationUnitRow {
    const VIEW: &'static str = "sys.allocation_units";
    const QUERY: &'static str = "SELECT allocation_unit_id, type, type_desc, container_id, data_space_id, \
         total_pages, used_pages, data_pages FROM sys.allocation_units";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "allocation_unit_id", SqlType::BigInt, false),
        ColumnDef::new(1, "type", SqlType::TinyInt, false),
        ColumnDef::new(2, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(3, "container_id", SqlType::BigInt, false),
        ColumnDef::new(4, "data_space_id", SqlType::Int, true),
        ColumnDef::new(5, "total_pages", SqlType::BigInt, false),
        ColumnDef::new(6, "used_pages", SqlType::BigInt, false),
        ColumnDef::new(7, "data_pages", SqlType::BigInt, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            allocation_unit_id: row.get(0)?,
            r#type: row.get(1)?,
            type_desc: row.get(2)?,
            container_id: row.get(3)?,
            data_space_id: row.get(4)?,
            total_pages: row.get(5)?,
            used_pages: row.get(6)?,
            data_pages: row.get(7)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<DataSpaceRow>();
        fixture::exercise::<FilegroupRow>();
        fixture::exercise::<DatabaseFileRow>();
        fixture::exercise::<PartitionRow>();
        fixture::exercise::<PartitionSchemeRow>();
        fixture::exercise::<PartitionFunctionRow>();
        fixture::exercise::<PartitionRangeValueRow>();
        fixture::exercise::<AllocationUnitRow>();
    }
}
