//! Full-text search catalog views.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType};

/// Row of `sys.fulltext_catalogs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulltextCatalogRow {
    pub fulltext_catalog_id: i32,
    pub name: String,
    pub path: Option<String>,
    pub is_default: bool,
    pub is_accent_sensitivity_on: bool,
    pub data_space_id: Option<i32>,
    pub file_id: Option<i32>,
    pub principal_id: Option<i32>,
    pub is_importing: Option<bool>,
}

impl CatalogView for FulltextCatalogRow {
    const VIEW: &'static str = "sys.fulltext_catalogs";
    const QUERY: &'static str = "SELECT fulltext_catalog_id, name, path, is_default, is_accent_sensitivity_on, \
         data_space_id, file_id, principal_id, is_importing FROM sys.fulltext_catalogs";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "fulltext_catalog_id", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, false),
        ColumnDef::new(2, "path", SqlType::NVarchar, true),
        ColumnDef::new(3, "is_default", SqlType::Bit, false),
        ColumnDef::new(4, "is_accent_sensitivity_on", SqlType::Bit, false),
        ColumnDef::new(5, "data_space_id", SqlType::Int, true),
        ColumnDef::new(6, "file_id", SqlType::Int, true),
        ColumnDef::new(7, "principal_id", SqlType::Int, true),
        ColumnDef::new(8, "is_importing", SqlType::Bit, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            fulltext_catalog_id: row.get(0)?,
            name: row.get(1)?,
            path: row.get(2)?,
            is_default: row.get(3)?,
            is_accent_sensitivity_on: row.get(4)?,
            data_space_id: row.get(5)?,
            file_id: row.get(6)?,
            principal_id: row.get(7)?,
            is_importing: row.get(8)?,
        })
    }
}

/// Row of `sys.fulltext_indexes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulltextIndexRow {
    pub object_id: i32,
    pub unique_index_id: i32,
    pub fulltext_catalog_id: i32,
    pub is_enabled: bool,
    pub change_tracking_state: Option<String>,
    pub change_tracking_state_desc: Option<String>,
    pub has_crawl_completed: Option<bool>,
    pub crawl_type: Option<String>,
    pub crawl_type_desc: Option<String>,
    pub crawl_start_date: Option<NaiveDateTime>,
    pub crawl_end_date: Option<NaiveDateTime>,
    pub stoplist_id: Option<i32>,
    pub data_space_id: i32,
}

impl CatalogView for FulltextIndexRow {
    const VIEW: &'static str = "sys.fulltext_indexes";
    const QUERY: &'static str = "SELECT object_id, unique_index_id, fulltext_catalog_id, is_enabled, \
         change_tracking_state, change_tracking_state_desc, has_crawl_completed, crawl_type, \
         crawl_type_desc, crawl_start_date, crawl_end_date, stoplist_id, data_space_id \
         FROM sys.fulltext_indexes";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "object_id", SqlType::Int, false),
        ColumnDef::new(1, "unique_index_id", SqlType::Int, false),
        ColumnDef::new(2, "fulltext_catalog_id", SqlType::Int, false),
        ColumnDef::new(3, "is_enabled", SqlType::Bit, false),
        ColumnDef::new(4, "change_tracking_state", SqlType::NVarchar, true),
        ColumnDef::new(5, "change_tracking_state_desc", SqlType::NVarchar, true),
        ColumnDef::new(6, "has_crawl_completed", SqlType::Bit, true),
        ColumnDef::new(7, "crawl_type", SqlType::NVarchar, true),
        ColumnDef::new(8, "crawl_type_desc", SqlType::NVarchar, true),
        ColumnDef::new(9, "crawl_start_date", SqlType::DateTime, true),
        ColumnDef::new(10, "crawl_end_date", SqlType::DateTime, true),
        ColumnDef::new(11, "stoplist_id", SqlType::Int, true),
        ColumnDef::new(12, "data_space_id", SqlType::Int, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            object_id: row.get(0)?,
            unique_index_id: row.get(1)?,
            fulltext_catalog_id: row.get(2)?,
            is_enabled: row.get(3)?,
            change_tracking_state: row.get(4)?,
            change_tracking_state_desc: row.get(5)?,
            has_crawl_completed: row.get(6)?,
            crawl_type: row.get(7)?,
            crawl_type_desc: row.get(8)?,
            crawl_start_date: row.get(9)?,
            crawl_end_date: row.get(10)?,
            stoplist_id: row.get(11)?,
            data_space_id: row.get(12)?,
        })
    }
}

/// Row of `sys.fulltext_index_columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulltextIndexColumnRow {
    pub object_id: i32,
    pub column_id: i32,
    pub type_column_id: Option<i32>,
    pub language_id: i32,
}

impl CatalogView for FulltextIndexColumnRow {
    const VIEW: &'static str = "sys.fulltext_index_columns";
    const QUERY: &'static str = "SELECT object_id, column_id, type_column_id, language_id \
         FROM sys.fulltext_index_columns";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "object_id", SqlType::Int, false),
        ColumnDef::new(1, "column_id", SqlType::Int, false),
        ColumnDef::new(2, "type_column_id", SqlType::Int, true),
        ColumnDef::new(3, "language_id", SqlType::Int, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            object_id: row.get(0)?,
            column_id: row.get(1)?,
            type_column_id: row.get(2)?,
            language_id: row.get(3)?,
        })
    }
}

/// Row of `sys.fulltext_languages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulltextLanguageRow {
    pub lcid: i32,
    pub name: String,
}

impl CatalogView for FulltextLanguageRow {
    const VIEW: &'static str = "sys.fulltext_languages";
    const QUERY: &'static str = "SELECT lcid, name FROM sys.fulltext_languages";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "lcid", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self { lcid: row.get(0)?, name: row.get(1)? })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<FulltextCatalogRow>();
        fixture::exercise::<FulltextIndexRow>();
        fixture::exercise::<FulltextIndexColumnRow>();
        fixture::exercise::<FulltextLanguageRow>();
    }
}
