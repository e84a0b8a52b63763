//! Security catalog views: principals, role memberships, permissions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType};

/// Row of `sys.server_principals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerPrincipalRow {
    pub name: String,
    pub principal_id: i32,
    pub sid: Option<Vec<u8>>,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub is_disabled: Option<bool>,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub default_database_name: Option<String>,
    pub default_language_name: Option<String>,
    pub credential_id: Option<i32>,
}

impl CatalogView for ServerPrincipalRow {
    const VIEW: &'static str = "sys.server_principals";
    const QUERY: &'static str = "SELECT name, principal_id, sid, type, type_desc, is_disabled, create_date, \
         modify_date, default_database_name, default_language_name, credential_id \
         FROM sys.server_principals";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "principal_id", SqlType::Int, false),
        ColumnDef::new(2, "sid", SqlType::VarBinary, true),
        ColumnDef::new(3, "type", SqlType::NVarchar, false),
        ColumnDef::new(4, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(5, "is_disabled", SqlType::Bit, true),
        ColumnDef::new(6, "create_date", SqlType::DateTime, false),
        ColumnDef::new(7, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(8, "default_database_name", SqlType::NVarchar, true),
        ColumnDef::new(9, "default_language_name", SqlType::NVarchar, true),
        ColumnDef::new(10, "credential_id", SqlType::Int, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            principal_id: row.get(1)?,
            sid: row.get(2)?,
            r#type: row.get(3)?,
            type_desc: row.get(4)?,
            is_disabled: row.get(5)?,
            create_date: row.get(6)?,
            modify_date: row.get(7)?,
            default_database_name: row.get(8)?,
            default_language_name: row.get(9)?,
            credential_id: row.get(10)?,
        })
    }
}

/// Row of `sys.sql_logins`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlLoginRow {
    pub name: String,
    pub principal_id: i32,
    pub sid: Option<Vec<u8>>,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub is_disabled: Option<bool>,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub default_database_name: Option<String>,
    pub default_language_name: Option<String>,
    pub credential_id: Option<i32>,
    pub is_policy_checked: Option<bool>,
    pub is_expiration_checked: Option<bool>,
    pub password_hash: Option<Vec<u8>>,
}

impl CatalogView for SqlLoginRow {
    const VIEW: &'static str = "sys.sql_logins";
    const QUERY: &'static str = "SELECT name, principal_id, sid, type, type_desc, is_disabled, create_date, \
         modify_date, default_database_name, default_language_name, credential_id, \
         is_policy_checked, is_expiration_checked, password_hash FROM sys.sql_logins";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "principal_id", SqlType::Int, false),
        ColumnDef::new(2, "sid", SqlType::VarBinary, true),
        ColumnDef::new(3, "type", SqlType::NVarchar, false),
        ColumnDef::new(4, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(5, "is_disabled", SqlType::Bit, true),
        ColumnDef::new(6, "create_date", SqlType::DateTime, false),
        ColumnDef::new(7, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(8, "default_database_name", SqlType::NVarchar, true),
        ColumnDef::new(9, "default_language_name", SqlType::NVarchar, true),
        ColumnDef::new(10, "credential_id", SqlType::Int, true),
        ColumnDef::new(11, "is_policy_checked", SqlType::Bit, true),
        ColumnDef::new(12, "is_expiration_checked", SqlType::Bit, true),
        ColumnDef::new(13, "password_hash", SqlType::VarBinary, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            principal_id: row.get(1)?,
            sid: row.get(2)?,
            r#type: row.get(3)?,
            type_desc: row.get(4)?,
            is_disabled: row.get(5)?,
            create_date: row.get(6)?,
            modify_date: row.get(7)?,
            default_database_name: row.get(8)?,
            default_language_name: row.get(9)?,
            credential_id: row.get(10)?,
            is_policy_checked: row.get(11)?,
            is_expiration_checked: row.get(12)?,
            password_hash: row.get(13)?,
        })
    }
}

/// Row of `sys.server_role_members`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerRoleMemberRow {
    pub role_principal_id: i32,
    pub member_principal_id: i32,
}

impl CatalogView for ServerRoleMemberRow {
    const VIEW: &'static str = "sys.server_role_members";
    const QUERY: &'static str =
        "SELECT role_principal_id, member_principal_id FROM sys.server_role_members";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "role_principal_id", SqlType::Int, false),
        ColumnDef::new(1, "member_principal_id", SqlType::Int, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            role_principal_id: row.get(0)?,
            member_principal_id: row.get(1)?,
        })
    }
}

/// Row of `sys.database_principals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabasePrincipalRow {
    pub name: String,
    pub principal_id: i32,
    pub r#type: String,
    pub type_desc: Option<String>,
    pub default_schema_name: Option<String>,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub owning_principal_id: Option<i32>,
    pub sid: Option<Vec<u8>>,
    pub is_fixed_role: bool,
}

impl CatalogView for DatabasePrincipalRow {
    const VIEW: &'static str = "sys.database_principals";
    const QUERY: &'static str = "SELECT name, principal_id, type, type_desc, default_schema_name, create_date, \
         modify_date, owning_principal_id, sid, is_fixed_role FROM sys.database_principals";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "principal_id", SqlType::Int, false),
        ColumnDef::new(2, "type", SqlType::NVarchar, false),
        ColumnDef::new(3, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(4, "default_schema_name", SqlType::NVarchar, true),
        ColumnDef::new(5, "create_date", SqlType::DateTime, false),
        ColumnDef::new(6, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(7, "owning_principal_id", SqlType::Int, true),
        ColumnDef::new(8, "sid", SqlType::VarBinary, true),
        ColumnDef::new(9, "is_fixed_role", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            principal_id: row.get(1)?,
            r#type: row.get(2)?,
            type_desc: row.get(3)?,
            default_schema_name: row.get(4)?,
            create_date: row.get(5)?,
            modify_date: row.get(6)?,
            owning_principal_id: row.get(7)?,
            sid: row.get(8)?,
            is_fixed_role: row.get(9)?,
        })
    }
}

/// Row of `sys.database_role_members`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseRoleMemberRow {
    pub role_principal_id: i32,
    pub member_principal_id: i32,
}

impl CatalogView for DatabaseRoleMemberRow {
    const VIEW: &'static str = "sys.database_role_members";
    const QUERY: &'static str =
        "SELECT role_principal_id, member_principal_id FROM sys.database_role_members";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "role_principal_id", SqlType::Int, false),
        ColumnDef::new(1, "member_principal_id", SqlType::Int, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            role_principal_id: row.get(0)?,
            member_principal_id: row.get(1)?,
        })
    }
}

/// Row of `sys.database_permissions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabasePermissionRow {
    pub class: u8,
    pub class_desc: Option<String>,
    pub major_id: i32,
    pub minor_id: i32,
    pub grantee_principal_id: i32,
    pub grantor_principal_id: i32,
    pub r#type: String,
    pub permission_name: Option<String>,
    pub state: String,
    pub state_desc: Option<String>,
}

impl CatalogView for DatabasePermissionRow {
    const VIEW: &'static str = "sys.database_permissions";
    const QUERY: &'static str = "SELECT class, class_desc, major_id, minor_id, grantee_principal_id, \
         grantor_principal_id, type, permission_name, state, state_desc \
         FROM sys.database_permissions";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "class", SqlType::TinyInt, false),
        ColumnDef::new(1, "class_desc", SqlType::NVarchar, true),
        ColumnDef::new(2, "major_id", SqlType::Int, false),
        ColumnDef::new(3, "minor_id", SqlType::Int, false),
        ColumnDef::new(4, "grantee_principal_id", SqlType::Int, false),
        ColumnDef::new(5, "grantor_principal_id", SqlType::Int, false),
        ColumnDef::new(6, "type", SqlType::NVarchar, false),
        ColumnDef::new(7, "permission_name", SqlType::NVarchar, true),
        ColumnDef::new(8, "state", SqlType::NVarchar, false),
        ColumnDef::new(9, "state_desc", SqlType::NVarchar, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            class: row.get(0)?,
            class_desc: row.get(1)?,
            major_id: row.get(2)?,
            minor_id: row.get(3)?,
            grantee_principal_id: row.get(4)?,
            grantor_principal_id: row.get(5)?,
            r#type: row.get(6)?,
            permission_name: row.get(7)?,
            state: row.get(8)?,
            state_desc: row.get(9)?,
        })
    }
}

/// Row of `sys.server_permissions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerPermissionRow {
    pub class: u8,
    pub class_desc: Option<String>,
    pub major_id: i32,
    pub minor_id: i32,
    pub grantee_principal_id: i32,
    pub grantor_principal_id: i32,
    pub r#type: String,
    pub permission_name: Option<String>,
    pub state: String,
    pub state_desc: Option<String>,
}

impl CatalogView for ServerPermissionRow {
    const VIEW: &'static str = "sys.server_permissions";
    const QUERY: &'static str = "SELECT class, class_desc, major_id, minor_id, grantee_principal_id, \
         grantor_principal_id, type, permission_name, state, state_desc \
         FROM sys.server_permissions";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "class", SqlType::TinyInt, false),
        ColumnDef::new(1, "class_desc", SqlType::NVarchar, true),
        ColumnDef::new(2, "major_id", SqlType::Int, false),
        ColumnDef::new(3, "minor_id", SqlType::Int, false),
        ColumnDef::new(4, "grantee_principal_id", SqlType::Int, false),
        ColumnDef::new(5, "grantor_principal_id", SqlType::Int, false),
        ColumnDef::new(6, "type", SqlType::NVarchar, false),
        ColumnDef::new(7, "permission_name", SqlType::NVarchar, true),
        ColumnDef::new(8, "state", SqlType::NVarchar, false),
        ColumnDef::new(9, "state_desc", SqlType::NVarchar, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            class: row.get(0)?,
            class_desc: row.get(1)?,
            major_id: row.get(2)?,
            minor_id: row.get(3)?,
            grantee_principal_id: row.get(4)?,
            grantor_principal_id: row.get(5)?,
            r#type: row.get(6)?,
            permission_name: row.get(7)?,
            state: row.get(8)?,
            state_desc: row.get(9)?,
        })
    }
}

/// Row of `sys.credentials`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRow {
    pub credential_id: i32,
    pub name: String,
    pub credential_identity: Option<String>,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
}

impl CatalogView for CredentialRow {
    const VIEW: &'static str = "sys.credentials";
    const QUERY: &'static str = "SELECT credential_id, name, credential_identity, create_date, modify_date \
         FROM sys.credentials";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "credential_id", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, false),
        ColumnDef::new(2, "credential_identity", SqlType::NVarchar, true),
        ColumnDef::new(3, "create_date", SqlType::DateTime, false),
        ColumnDef::new(4, "modify_date", SqlType::DateTime, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            credential_id: row.get(0)?,
            name: row.get(1)?,
            credential_identity: row.get(2)?,
            create_date: row.get(3)?,
            modify_date: row.get(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<ServerPrincipalRow>();
        fixture::exercise::<SqlLoginRow>();
        fixture::exercise::<ServerRoleMemberRow>();
        fixture::exercise::<DatabasePrincipalRow>();
        fixture::exercise::<DatabaseRoleMemberRow>();
        fixture::exercise::<DatabasePermissionRow>();
        fixture::exercise::<ServerPermissionRow>();
        fixture::exercise::<CredentialRow>();
    }
}
