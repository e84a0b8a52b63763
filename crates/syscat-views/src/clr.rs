//! CLR assembly catalog views.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType};

/// Row of `sys.assemblies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyRow {
    pub name: String,
    pub principal_id: Option<i32>,
    pub assembly_id: i32,
    pub clr_name: Option<String>,
    pub permission_set: Option<u8>,
    pub permission_set_desc: Option<String>,
    pub is_visible: bool,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub is_user_defined: Option<bool>,
}

impl CatalogView for AssemblyRow {
    const VIEW: &'static str = "sys.assemblies";
    const QUERY: &'static str = "SELECT name, principal_id, assembly_id, clr_name, permission_set, \
         permission_set_desc, is_visible, create_date, modify_date, is_user_defined \
         FROM sys.assemblies";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "principal_id", SqlType::Int, true),
        ColumnDef::new(2, "assembly_id", SqlType::Int, false),
        ColumnDef::new(3, "clr_name", SqlType::NVarchar, true),
        ColumnDef::new(4, "permission_set", SqlType::TinyInt, true),
        ColumnDef::new(5, "permission_set_desc", SqlType::NVarchar, true),
        ColumnDef::new(6, "is_visible", SqlType::Bit, false),
        ColumnDef::new(7, "create_date", SqlType::DateTime, false),
        ColumnDef::new(8, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(9, "is_user_defined", SqlType::Bit, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            principal_id: row.get(1)?,
            assembly_id: row.get(2)?,
            clr_name: row.get(3)?,
            permission_set: row.get(4)?,
            permission_set_desc: row.get(5)?,
            is_visible: row.get(6)?,
            create_date: row.get(7)?,
            modify_date: row.get(8)?,
            is_user_defined: row.get(9)?,
        })
    }
}

/// Row of `sys.assembly_files`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyFileRow {
    pub assembly_id: i32,
    pub name: Option<String>,
    pub file_id: i32,
    pub content: Option<Vec<u8>>,
}

impl CatalogView for AssemblyFileRow {
    const VIEW: &'static str = "sys.assembly_files";
    const QUERY: &'static str = "SELECT assembly_id, name, file_id, content FROM sys.assembly_files";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "assembly_id", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, true),
        ColumnDef::new(2, "file_id", SqlType::Int, false),
        ColumnDef::new(3, "content", SqlType::VarBinary, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            assembly_id: row.get(0)?,
            name: row.get(1)?,
            file_id: row.get(2)?,
            content: row.get(3)?,
        })
    }
}

/// Row of `sys.assembly_modules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyModuleRow {
    pub object_id: i32,
    pub assembly_id: i32,
    pub assembly_class: Option<String>,
    pub assembly_method: Option<String>,
    pub null_on_null_input: Option<bool>,
    pub execute_as_principal_id: Option<i32>,
}

impl CatalogView for AssemblyModuleRow {
    const VIEW: &'static str = "sys.assembly_modules";
    const QUERY: &'static str = "SELECT object_id, assembly_id, assembly_class, assembly_method, \
         null_on_null_input, execute_as_principal_id FROM sys.assembly_modules";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "object_id", SqlType::Int, false),
        ColumnDef::new(1, "assembly_id", SqlType::Int, false),
        ColumnDef::new(2, "assembly_class", SqlType::NVarchar, true),
        ColumnDef::new(3, "assembly_method", SqlType::NVarchar, true),
        ColumnDef::new(4, "null_on_null_input", SqlType::Bit, true),
        ColumnDef::new(5, "execute_as_principal_id", SqlType::Int, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            object_id: row.get(0)?,
            assembly_id: row.get(1)?,
            assembly_class: row.get(2)?,
            assembly_method: row.get(3)?,
            null_on_null_input: row.get(4)?,
            execute_as_principal_id: row.get(5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<AssemblyRow>();
        fixture::exercise::<AssemblyFileRow>();
        fixture::exercise::<AssemblyModuleRow>();
    }
}
