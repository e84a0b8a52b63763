//! Constraint catalog views.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType};

/// Row of `sys.check_constraints`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConstraintRow {
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
    pub is_disabled: bool,
    pub is_not_for_replication: bool,
    pub is_not_trusted: bool,
    pub parent_column_id: i32,
    pub definition: Option<String>,
    pub uses_database_collation: bool,
    pub is_system_named: bool,
}

impl CatalogView for CheckConstraintRow {
    const VIEW: &'static str = "sys.check_constraints";
    const QUERY: &'static str = "SELECT name, object_id, principal_id, schema_id, parent_object_id, type, type_desc, \
         create_date, modify_date, is_ms_shipped, is_published, is_schema_published, \
         is_disabled, is_not_for_replication, is_not_trusted, parent_column_id, definition, \
         uses_database_collation, is_system_named FROM sys.check_constraints";
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
        ColumnDef::new(12, "is_disabled", SqlType::Bit, false),
        ColumnDef::new(13, "is_not_for_replication", SqlType::Bit, false),
        ColumnDef::new(14, "is_not_trusted", SqlType::Bit, false),
        ColumnDef::new(15, "parent_column_id", SqlType::Int, false),
        ColumnDef::new(16, "definition", SqlType::NVarchar, true),
        ColumnDef::new(17, "uses_database_collation", SqlType::Bit, false),
        ColumnDef::new(18, "is_system_named", SqlType::Bit, false),
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
            is_disabled: row.get(12)?,
            is_not_for_replication: row.get(13)?,
            is_not_trusted: row.get(14)?,
            parent_column_id: row.get(15)?,
            definition: row.get(16)?,
            uses_database_collation: row.get(17)?,
            is_system_named: row.get(18)?,
        })
    }
}

/// Row of `sys.default_constraints`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultConstraintRow {
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
    pub parent_column_id: i32,
    pub definition: Option<String>,
    pub is_system_named: bool,
}

impl CatalogView for DefaultConstraintRow {
    const VIEW: &'static str = "sys.default_constraints";
    const QUERY: &'static str = "SELECT name, object_id, principal_id, schema_id, parent_object_id, type, type_desc, \
         create_date, modify_date, is_ms_shipped, is_published, is_schema_published, \
         parent_column_id, definition, is_system_named FROM sys.default_constraints";
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
        ColumnDef::new(12, "parent_column_id", SqlType::Int, false),
        ColumnDef::new(13, "definition", SqlType::NVarchar, true),
        ColumnDef::new(14, "is_system_named", SqlType::Bit, false),
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
            parent_column_id: row.get(12)?,
            definition: row.get(13)?,
            is_system_named: row.get(14)?,
        })
    }
}

/// Row of `sys.key_constraints`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyConstraintRow {
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
    pub unique_index_id: i32,
    pub is_system_named: bool,
}

impl CatalogView for KeyConstraintRow {
    const VIEW: &'static str = "sys.key_constraints";
    const QUERY: &'static str = "SELECT name, object_id, principal_id, schema_id, parent_object_id, type, type_desc, \
         create_date, modify_date, is_ms_shipped, is_published, is_schema_published, \
         unique_index_id, is_system_named FROM sys.key_constraints";
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
        ColumnDef::new(12, "unique_index_id", SqlType::Int, false),
        ColumnDef::new(13, "is_system_named", SqlType::Bit, false),
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
            unique_index_id: row.get(12)?,
            is_system_named: row.get(13)?,
        })
    }
}

/// Row of `sys.foreign_keys`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyRow {
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
    pub referenced_object_id: i32,
    pub key_index_id: i32,
    pub is_disabled: bool,
    pub is_not_for_replication: bool,
    pub is_not_trusted: bool,
    pub delete_referential_action: u8,
    pub delete_referential_action_desc: Option<String>,
    pub update_referential_action: u8,
    pub update_referential_action_desc: Option<String>,
    pub is_system_named: bool,
}

impl CatalogView for ForeignKeyRow {
    const VIEW: &'static str = "sys.foreign_keys";
    const QUERY: &'static str = "SELECT name, object_id, principal_id, schema_id, parent_object_id, type, type_desc, \
         create_date, modify_date, is_ms_shipped, is_published, is_schema_published, \
         referenced_object_id, key_index_id, is_disabled, is_not_for_replication, \
         is_not_trusted, delete_referential_action, delete_referential_action_desc, \
         update_referential_action, update_referential_action_desc, is_system_named \
         FROM sys.foreign_keys";
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
        ColumnDef::new(12, "referenced_object_id", SqlType::Int, false),
        ColumnDef::new(13, "key_index_id", SqlType::Int, false),
        ColumnDef::new(14, "is_disabled", SqlType::Bit, false),
        ColumnDef::new(15, "is_not_for_replication", SqlType::Bit, false),
        ColumnDef::new(16, "is_not_trusted", SqlType::Bit, false),
        ColumnDef::new(17, "delete_referential_action", SqlType::TinyInt, false),
        ColumnDef::new(18, "delete_referential_action_desc", SqlType::NVarchar, true),
        ColumnDef::new(19, "update_referential_action", SqlType::TinyInt, false),
        ColumnDef::new(20, "update_referential_action_desc", SqlType::NVarchar, true),
        ColumnDef::new(21, "is_system_named", SqlType::Bit, false),
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
            referenced_object_id: row.get(12)?,
            key_index_id: row.get(13)?,
            is_disabled: row.get(14)?,
            is_not_for_replication: row.get(15)?,
            is_not_trusted: row.get(16)?,
            delete_referential_action: row.get(17)?,
            delete_referential_action_desc: row.get(18)?,
            update_referential_action: row.get(19)?,
            update_referential_action_desc: row.get(20)?,
            is_system_named: row.get(21)?,
        })
    }
}

/// Row of `sys.foreign_key_columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyColumnRow {
    pub constraint_object_id: i32,
    pub constraint_column_id: i32,
    pub parent_object_id: i32,
    pub parent_column_id: i32,
    pub referenced_object_id: i32,
    pub referenced_column_id: i32,
}

impl CatalogView for ForeignKeyColumnRow {
    const VIEW: &'static str = "sys.foreign_key_columns";
    const QUERY: &'static str = "SELECT constraint_object_id, constraint_column_id, parent_object_id, \
         parent_column_id, referenced_object_id, referenced_column_id \
         FROM sys.foreign_key_columns";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "constraint_object_id", SqlType::Int, false),
        ColumnDef::new(1, "constraint_column_id", SqlType::Int, false),
        ColumnDef::new(2, "parent_object_id", SqlType::Int, false),
        ColumnDef::new(3, "parent_column_id", SqlType::Int, false),
        ColumnDef::new(4, "referenced_object_id", SqlType::Int, false),
        ColumnDef::new(5, "referenced_column_id", SqlType::Int, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            constraint_object_id: row.get(0)?,
            constraint_column_id: row.get(1)?,
            parent_object_id: row.get(2)?,
            parent_column_id: row.get(3)?,
            referenced_object_id: row.get(4)?,
            referenced_column_id: row.get(5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<CheckConstraintRow>();
        fixture::exercise::<DefaultConstraintRow>();
        fixture::exercise::<KeyConstraintRow>();
        fixture::exercise::<ForeignKeyRow>();
        fixture::exercise::<ForeignKeyColumnRow>();
    }
}
