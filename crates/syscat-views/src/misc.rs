//! Remaining catalog views: XML schema collections, plan guides,
//! extended properties.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType, SqlValue};

/// Row of `sys.xml_schema_collections`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlSchemaCollectionRow {
    pub xml_collection_id: i32,
    pub schema_id: i32,
    pub principal_id: Option<i32>,
    pub name: String,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
}

impl CatalogView for XmlSchemaCollectionRow {
    const VIEW: &'static str = "sys.xml_schema_collections";
    const QUERY: &'static str = "SELECT xml_collection_id, schema_id, principal_id, name, create_date, modify_date \
         FROM sys.xml_schema_collections";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "xml_collection_id", SqlType::Int, false),
        ColumnDef::new(1, "schema_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "name", SqlType::NVarchar, false),
        ColumnDef::new(4, "create_date", SqlType::DateTime, false),
        ColumnDef::new(5, "modify_date", SqlType::DateTime, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            xml_collection_id: row.get(0)?,
            schema_id: row.get(1)?,
            principal_id: row.get(2)?,
            name: row.get(3)?,
            create_date: row.get(4)?,
            modify_date: row.get(5)?,
        })
    }
}

/// Row of `sys.plan_guides`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanGuideRow {
    pub plan_guide_id: i32,
    pub name: String,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub is_disabled: bool,
    pub query_text: Option<String>,
    pub scope_type: u8,
    pub scope_type_desc: Option<String>,
    pub scope_object_id: Option<i32>,
    pub scope_batch: Option<String>,
    pub parameters: Option<String>,
    pub hints: Option<String>,
}

impl CatalogView for PlanGuideRow {
    const VIEW: &'static str = "sys.plan_guides";
    const QUERY: &'static str = "SELECT plan_guide_id, name, create_date, modify_date, is_disabled, query_text, \
         scope_type, scope_type_desc, scope_object_id, scope_batch, parameters, hints \
         FROM sys.plan_guides";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "plan_guide_id", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, false),
        ColumnDef::new(2, "create_date", SqlType::DateTime, false),
        ColumnDef::new(3, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(4, "is_disabled", SqlType::Bit, false),
        ColumnDef::new(5, "query_text", SqlType::NVarchar, true),
        ColumnDef::new(6, "scope_type", SqlType::TinyInt, false),
        ColumnDef::new(7, "scope_type_desc", SqlType::NVarchar, true),
        ColumnDef::new(8, "scope_object_id", SqlType::Int, true),
        ColumnDef::new(9, "scope_batch", SqlType::NVarchar, true),
        ColumnDef::new(10, "parameters", SqlType::NVarchar, true),
        ColumnDef::new(11, "hints", SqlType::NVarchar, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            plan_guide_id: row.get(0)?,
            name: row.get(1)?,
            create_date: row.get(2)?,
            modify_date: row.get(3)?,
            is_disabled: row.get(4)?,
            query_text: row.get(5)?,
            scope_type: row.get(6)?,
            scope_type_desc: row.get(7)?,
            scope_object_id: row.get(8)?,
            scope_batch: row.get(9)?,
            parameters: row.get(10)?,
            hints: row.get(11)?,
        })
    }
}

/// Row of `sys.extended_properties`. The property value is `sql_variant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedPropertyRow {
    pub class: u8,
    pub class_desc: Option<String>,
    pub major_id: i32,
    pub minor_id: i32,
    pub name: String,
    pub value: Option<SqlValue>,
}

impl CatalogView for ExtendedPropertyRow {
    const VIEW: &'static str = "sys.extended_properties";
    const QUERY: &'static str = "SELECT class, class_desc, major_id, minor_id, name, value \
         FROM sys.extended_properties";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "class", SqlType::TinyInt, false),
        ColumnDef::new(1, "class_desc", SqlType::NVarchar, true),
        ColumnDef::new(2, "major_id", SqlType::Int, false),
        ColumnDef::new(3, "minor_id", SqlType::Int, false),
        ColumnDef::new(4, "name", SqlType::NVarchar, false),
        ColumnDef::new(5, "value", SqlType::Variant, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            class: row.get(0)?,
            class_desc: row.get(1)?,
            major_id: row.get(2)?,
            minor_id: row.get(3)?,
            name: row.get(4)?,
            value: row.get(5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<XmlSchemaCollectionRow>();
        fixture::exercise::<PlanGuideRow>();
        fixture::exercise::<ExtendedPropertyRow>();
    }
}
