//! Column and type catalog views.

use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType, SqlValue};

/// Row of `sys.columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRow {
    pub object_id: i32,
    pub name: Option<String>,
    pub column_id: i32,
    pub system_type_id: u8,
    pub user_type_id: i32,
    pub max_length: i16,
    pub precision: u8,
    pub scale: u8,
    pub collation_name: Option<String>,
    pub is_nullable: Option<bool>,
    pub is_ansi_padded: bool,
    pub is_rowguidcol: bool,
    pub is_identity: bool,
    pub is_computed: bool,
    pub is_filestream: bool,
    pub is_replicated: Option<bool>,
    pub is_non_sql_subscribed: Option<bool>,
    pub is_merge_published: Option<bool>,
    pub is_dts_replicated: Option<bool>,
    pub is_xml_document: bool,
    pub xml_collection_id: i32,
    pub default_object_id: i32,
    pub rule_object_id: i32,
}

impl CatalogView for ColumnRow {
    const VIEW: &'static str = "sys.columns";
    const QUERY: &'static str = "SELECT object_id, name, column_id, system_type_id, user_type_id, max_length, \
         precision, scale, collation_name, is_nullable, is_ansi_padded, is_rowguidcol, \
         is_identity, is_computed, is_filestream, is_replicated, is_non_sql_subscribed, \
         is_merge_published, is_dts_replicated, is_xml_document, xml_collection_id, \
         default_object_id, rule_object_id FROM sys.columns";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "object_id", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, true),
        ColumnDef::new(2, "column_id", SqlType::Int, false),
        ColumnDef::new(3, "system_type_id", SqlType::TinyInt, false),
        ColumnDef::new(4, "user_type_id", SqlType::Int, false),
        ColumnDef::new(5, "max_length", SqlType::SmallInt, false),
        ColumnDef::new(6, "precision", SqlType::TinyInt, false),
        ColumnDef::new(7, "scale", SqlType::TinyInt, false),
        ColumnDef::new(8, "collation_name", SqlType::NVarchar, true),
        ColumnDef::new(9, "is_nullable", SqlType::Bit, true),
        ColumnDef::new(10, "is_ansi_padded", SqlType::Bit, false),
        ColumnDef::new(11, "is_rowguidcol", SqlType::Bit, false),
        ColumnDef::new(12, "is_identity", SqlType::Bit, false),
        ColumnDef::new(13, "is_computed", SqlType::Bit, false),
        ColumnDef::new(14, "is_filestream", SqlType::Bit, false),
        ColumnDef::new(15, "is_replicated", SqlType::Bit, true),
        ColumnDef::new(16, "is_non_sql_subscribed", SqlType::Bit, true),
        ColumnDef::new(17, "is_merge_published", SqlType::Bit, true),
        ColumnDef::new(18, "is_dts_replicated", SqlType::Bit, true),
        ColumnDef::new(19, "is_xml_document", SqlType::Bit, false),
        ColumnDef::new(20, "xml_collection_id", SqlType::Int, false),
        ColumnDef::new(21, "default_object_id", SqlType::Int, false),
        ColumnDef::new(22, "rule_object_id", SqlType::Int, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            object_id: row.get(0)?,
            name: row.get(1)?,
            column_id: row.get(2)?,
            system_type_id: row.get(3)?,
            user_type_id: row.get(4)?,
            max_length: row.get(5)?,
            precision: row.get(6)?,
            scale: row.get(7)?,
            collation_name: row.get(8)?,
            is_nullable: row.get(9)?,
            is_ansi_padded: row.get(10)?,
            is_rowguidcol: row.get(11)?,
            is_identity: row.get(12)?,
            is_computed: row.get(13)?,
            is_filestream: row.get(14)?,
            is_replicated: row.get(15)?,
            is_non_sql_subscribed: row.get(16)?,
            is_merge_published: row.get(17)?,
            is_dts_replicated: row.get(18)?,
            is_xml_document: row.get(19)?,
            xml_collection_id: row.get(20)?,
            default_object_id: row.get(21)?,
            rule_object_id: row.get(22)?,
        })
    }
}

/// Row of `sys.identity_columns`. The seed, increment and last-value
/// columns are `sql_variant`, typed per the column's declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityColumnRow {
    pub object_id: i32,
    pub name: Option<String>,
    pub column_id: i32,
    pub system_type_id: u8,
    pub user_type_id: i32,
    pub max_length: i16,
    pub precision: u8,
    pub scale: u8,
    pub is_nullable: Option<bool>,
    pub is_identity: bool,
    pub seed_value: Option<SqlValue>,
    pub increment_value: Option<SqlValue>,
    pub last_value: Option<SqlValue>,
    pub is_not_for_replication: bool,
}

impl CatalogView for IdentityColumnRow {
    const VIEW: &'static str = "sys.identity_columns";
    const QUERY: &'static str = "SELECT object_id, name, column_id, system_type_id, user_type_id, max_length, \
         precision, scale, is_nullable, is_identity, seed_value, increment_value, \
         last_value, is_not_for_replication FROM sys.identity_columns";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "object_id", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, true),
        ColumnDef::new(2, "column_id", SqlType::Int, false),
        ColumnDef::new(3, "system_type_id", SqlType::TinyInt, false),
        ColumnDef::new(4, "user_type_id", SqlType::Int, false),
        ColumnDef::new(5, "max_length", SqlType::SmallInt, false),
        ColumnDef::new(6, "precision", SqlType::TinyInt, false),
        ColumnDef::new(7, "scale", SqlType::TinyInt, false),
        ColumnDef::new(8, "is_nullable", SqlType::Bit, true),
        ColumnDef::new(9, "is_identity", SqlType::Bit, false),
        ColumnDef::new(10, "seed_value", SqlType::Variant, true),
        ColumnDef::new(11, "increment_value", SqlType::Variant, true),
        ColumnDef::new(12, "last_value", SqlType::Variant, true),
        ColumnDef::new(13, "is_not_for_replication", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            object_id: row.get(0)?,
            name: row.get(1)?,
            column_id: row.get(2)?,
            system_type_id: row.get(3)?,
            user_type_id: row.get(4)?,
            max_length: row.get(5)?,
            precision: row.get(6)?,
            scale: row.get(7)?,
            is_nullable: row.get(8)?,
            is_identity: row.get(9)?,
            seed_value: row.get(10)?,
            increment_value: row.get(11)?,
            last_value: row.get(12)?,
            is_not_for_replication: row.get(13)?,
        })
    }
}

/// Row of `sys.computed_columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedColumnRow {
    pub object_id: i32,
    pub name: Option<String>,
    pub column_id: i32,
    pub system_type_id: u8,
    pub user_type_id: i32,
    pub max_length: i16,
    pub precision: u8,
    pub scale: u8,
    pub is_nullable: Option<bool>,
    pub is_persisted: bool,
    pub definition: Option<String>,
    pub uses_database_collation: bool,
}

impl CatalogView for ComputedColumnRow {
    const VIEW: &'static str = "sys.computed_columns";
    const QUERY: &'static str = "SELECT object_id, name, column_id, system_type_id, user_type_id, max_length, \
         precision, scale, is_nullable, is_persisted, definition, uses_database_collation \
         FROM sys.computed_columns";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "object_id", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, true),
        ColumnDef::new(2, "column_id", SqlType::Int, false),
        ColumnDef::new(3, "system_type_id", SqlType::TinyInt, false),
        ColumnDef::new(4, "user_type_id", SqlType::Int, false),
        ColumnDef::new(5, "max_length", SqlType::SmallInt, false),
        ColumnDef::new(6, "precision", SqlType::TinyInt, false),
        ColumnDef::new(7, "scale", SqlType::TinyInt, false),
        ColumnDef::new(8, "is_nullable", SqlType::Bit, true),
        ColumnDef::new(9, "is_persisted", SqlType::Bit, false),
        ColumnDef::new(10, "definition", SqlType::NVarchar, true),
        ColumnDef::new(11, "uses_database_collation", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            object_id: row.get(0)?,
            name: row.get(1)?,
            column_id: row.get(2)?,
            system_type_id: row.get(3)?,
            user_type_id: row.get(4)?,
            max_length: row.get(5)?,
            precision: row.get(6)?,
            scale: row.get(7)?,
            is_nullable: row.get(8)?,
            is_persisted: row.get(9)?,
            definition: row.get(10)?,
            uses_database_collation: row.get(11)?,
        })
    }
}

/// Row of `sys.types`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRow {
    pub name: String,
    pub system_type_id: u8,
    pub user_type_id: i32,
    pub schema_id: i32,
    pub principal_id: Option<i32>,
    pub max_length: i16,
    pub precision: u8,
    pub scale: u8,
    pub collation_name: Option<String>,
    pub is_nullable: Option<bool>,
    pub is_user_defined: bool,
    pub is_assembly_type: bool,
    pub default_object_id: i32,
    pub rule_object_id: i32,
    pub is_table_type: bool,
}

impl CatalogView for TypeRow {
    const VIEW: &'static str = "sys.types";
    const QUERY: &'static str = "SELECT name, system_type_id, user_type_id, schema_id, principal_id, max_length, \
         precision, scale, collation_name, is_nullable, is_user_defined, is_assembly_type, \
         default_object_id, rule_object_id, is_table_type FROM sys.types";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "system_type_id", SqlType::TinyInt, false),
        ColumnDef::new(2, "user_type_id", SqlType::Int, false),
        ColumnDef::new(3, "schema_id", SqlType::Int, false),
        ColumnDef::new(4, "principal_id", SqlType::Int, true),
        ColumnDef::new(5, "max_length", SqlType::SmallInt, false),
        ColumnDef::new(6, "precision", SqlType::TinyInt, false),
        ColumnDef::new(7, "scale", SqlType::TinyInt, false),
        ColumnDef::new(8, "collation_name", SqlType::NVarchar, true),
        ColumnDef::new(9, "is_nullable", SqlType::Bit, true),
        ColumnDef::new(10, "is_user_defined", SqlType::Bit, false),
        ColumnDef::new(11, "is_assembly_type", SqlType::Bit, false),
        ColumnDef::new(12, "default_object_id", SqlType::Int, false),
        ColumnDef::new(13, "rule_object_id", SqlType::Int, false),
        ColumnDef::new(14, "is_table_type", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            system_type_id: row.get(1)?,
            user_type_id: row.get(2)?,
            schema_id: row.get(3)?,
            principal_id: row.get(4)?,
            max_length: row.get(5)?,
            precision: row.get(6)?,
            scale: row.get(7)?,
            collation_name: row.get(8)?,
            is_nullable: row.get(9)?,
            is_user_defined: row.get(10)?,
            is_assembly_type: row.get(11)?,
            default_object_id: row.get(12)?,
            rule_object_id: row.get(13)?,
            is_table_type: row.get(14)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<ColumnRow>();
        fixture::exercise::<IdentityColumnRow>();
        fixture::exercise::<ComputedColumnRow>();
        fixture::exercise::<TypeRow>();
    }

    #[test]
    fn identity_variants_come_back_raw() {
        let mut populated = fixture::populated_row(IdentityColumnRow::SHAPE);
        populated[10] = SqlValue::BigInt(1);
        populated[11] = SqlValue::BigInt(1);
        populated[12] = SqlValue::BigInt(41);
        let cursor = fixture::cursor_for(IdentityColumnRow::SHAPE, vec![populated]);
        let row = syscat_core::CatalogReader::<_, IdentityColumnRow>::new(cursor)
            .first()
            .unwrap()
            .unwrap();
        assert_eq!(row.seed_value, Some(SqlValue::BigInt(1)));
        assert_eq!(row.last_value, Some(SqlValue::BigInt(41)));
    }
}
