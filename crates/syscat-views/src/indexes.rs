//! Index and statistics catalog views.

use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType};

/// Row of `sys.indexes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRow {
    pub object_id: i32,
    pub name: Option<String>,
    pub index_id: i32,
    pub r#type: u8,
    pub type_desc: Option<String>,
    pub is_unique: Option<bool>,
    pub data_space_id: Option<i32>,
    pub ignore_dup_key: Option<bool>,
    pub is_primary_key: Option<bool>,
    pub is_unique_constraint: Option<bool>,
    pub fill_factor: u8,
    pub is_padded: Option<bool>,
    pub is_disabled: Option<bool>,
    pub is_hypothetical: Option<bool>,
    pub allow_row_locks: Option<bool>,
    pub allow_page_locks: Option<bool>,
    pub has_filter: Option<bool>,
    pub filter_definition: Option<String>,
}

impl CatalogView for IndexRow {
    const VIEW: &'static str = "sys.indexes";
    const QUERY: &'static str = "SELECT object_id, name, index_id, type, type_desc, is_unique, data_space_id, \
         ignore_dup_key, is_primary_key, is_unique_constraint, fill_factor, is_padded, \
         is_disabled, is_hypothetical, allow_row_locks, allow_page_locks, has_filter, \
         filter_definition FROM sys.indexes";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "object_id", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, true),
        ColumnDef::new(2, "index_id", SqlType::Int, false),
        ColumnDef::new(3, "type", SqlType::TinyInt, false),
        ColumnDef::new(4, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(5, "is_unique", SqlType::Bit, true),
        ColumnDef::new(6, "data_space_id", SqlType::Int, true),
        ColumnDef::new(7, "ignore_dup_key", SqlType::Bit, true),
        ColumnDef::new(8, "is_primary_key", SqlType::Bit, true),
        ColumnDef::new(9, "is_unique_constraint", SqlType::Bit, true),
        ColumnDef::new(10, "fill_factor", SqlType::TinyInt, false),
        ColumnDef::new(11, "is_padded", SqlType::Bit, true),
        ColumnDef::new(12, "is_disabled", SqlType::Bit, true),
        ColumnDef::new(13, "is_hypothetical", SqlType::Bit, true),
        ColumnDef::new(14, "allow_row_locks", SqlType::Bit, true),
        ColumnDef::new(15, "allow_page_locks", SqlType::Bit, true),
        ColumnDef::new(16, "has_filter", SqlType::Bit, true),
        ColumnDef::new(17, "filter_definition", SqlType::NVarchar, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            object_id: row.get(0)?,
            name: row.get(1)?,
            index_id: row.get(2)?,
            r#type: row.get(3)?,
            type_desc: row.get(4)?,
            is_unique: row.get(5)?,
            data_space_id: row.get(6)?,
            ignore_dup_key: row.get(7)?,
            is_primary_key: row.get(8)?,
            is_unique_constraint: row.get(9)?,
            fill_factor: row.get(10)?,
            is_padded: row.get(11)?,
            is_disabled: row.get(12)?,
            is_hypothetical: row.get(13)?,
            allow_row_locks: row.get(14)?,
            allow_page_locks: row.get(15)?,
            has_filter: row.get(16)?,
            filter_definition: row.get(17)?,
        })
    }
}

/// Row of `sys.index_columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexColumnRow {
    pub object_id: i32,
    pub index_id: i32,
    pub index_column_id: i32,
    pub column_id: i32,
    pub key_ordinal: u8,
    pub partition_ordinal: u8,
    pub is_descending_key: Option<bool>,
    pub is_included_column: Option<bool>,
}

impl CatalogView for IndexColumnRow {
    const VIEW: &'static str = "sys.index_columns";
    const QUERY: &'static str = "SELECT object_id, index_id, index_column_id, column_id, key_ordinal, \
         partition_ordinal, is_descending_key, is_included_column FROM sys.index_columns";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "object_id", SqlType::Int, false),
        ColumnDef::new(1, "index_id", SqlType::Int, false),
        ColumnDef::new(2, "index_column_id", SqlType::Int, false),
        ColumnDef::new(3, "column_id", SqlType::Int, false),
        ColumnDef::new(4, "key_ordinal", SqlType::TinyInt, false),
        ColumnDef::new(5, "partition_ordinal", SqlType::TinyInt, false),
        ColumnDef::new(6, "is_descending_key", SqlType::Bit, true),
        ColumnDef::new(7, "is_included_column", SqlType::Bit, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            object_id: row.get(0)?,
            index_id: row.get(1)?,
            index_column_id: row.get(2)?,
            column_id: row.get(3)?,
            key_ordinal: row.get(4)?,
            partition_ordinal: row.get(5)?,
            is_descending_key: row.get(6)?,
            is_included_column: row.get(7)?,
        })
    }
}

/// Row of `sys.stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
    pub object_id: i32,
    pub name: Option<String>,
    pub stats_id: i32,
    pub auto_created: Option<bool>,
    pub user_created: Option<bool>,
    pub no_recompute: Option<bool>,
    pub has_filter: Option<bool>,
    pub filter_definition: Option<String>,
}

impl CatalogView for StatRow {
    const VIEW: &'static str = "sys.stats";
    const QUERY: &'static str = "SELECT object_id, name, stats_id, auto_created, user_created, no_recompute, \
         has_filter, filter_definition FROM sys.stats";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "object_id", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, true),
        ColumnDef::new(2, "stats_id", SqlType::Int, false),
        ColumnDef::new(3, "auto_created", SqlType::Bit, true),
        ColumnDef::new(4, "user_created", SqlType::Bit, true),
        ColumnDef::new(5, "no_recompute", SqlType::Bit, true),
        ColumnDef::new(6, "has_filter", SqlType::Bit, true),
        ColumnDef::new(7, "filter_definition", SqlType::NVarchar, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            object_id: row.get(0)?,
            name: row.get(1)?,
            stats_id: row.get(2)?,
            auto_created: row.get(3)?,
            user_created: row.get(4)?,
            no_recompute: row.get(5)?,
            has_filter: row.get(6)?,
            filter_definition: row.get(7)?,
        })
    }
}

/// Row of `sys.stats_columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatColumnRow {
    pub object_id: i32,
    pub stats_id: i32,
    pub stats_column_id: i32,
    pub column_id: i32,
}

impl CatalogView for StatColumnRow {
    const VIEW: &'static str = "sys.stats_columns";
    const QUERY: &'static str =
        "SELECT object_id, stats_id, stats_column_id, column_id FROM sys.stats_columns";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "object_id", SqlType::Int, false),
        ColumnDef::new(1, "stats_id", SqlType::Int, false),
        ColumnDef::new(2, "stats_column_id", SqlType::Int, false),
        ColumnDef::new(3, "column_id", SqlType::Int, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            object_id: row.get(0)?,
            stats_id: row.get(1)?,
            stats_column_id: row.get(2)?,
            column_id: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<IndexRow>();
        fixture::exercise::<IndexColumnRow>();
        fixture::exercise::<StatRow>();
        fixture::exercise::<StatColumnRow>();
    }
}
