//! Linked server and endpoint catalog views.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType};

/// Row of `sys.servers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerRow {
    pub server_id: i32,
    pub name: String,
    pub product: String,
    pub provider: String,
    pub data_source: Option<String>,
    pub location: Option<String>,
    pub provider_string: Option<String>,
    pub catalog: Option<String>,
    pub connect_timeout: Option<i32>,
    pub query_timeout: Option<i32>,
    pub is_linked: bool,
    pub is_remote_login_enabled: bool,
    pub is_rpc_out_enabled: bool,
    pub is_data_access_enabled: bool,
    pub is_collation_compatible: bool,
    pub uses_remote_collation: bool,
    pub collation_name: Option<String>,
    pub lazy_schema_validation: bool,
    pub is_system: bool,
    pub is_publisher: bool,
    pub is_subscriber: bool,
    pub is_distributor: bool,
    pub is_nonsql_subscriber: bool,
    pub is_remote_proc_transaction_promotion_enabled: Option<bool>,
    pub modify_date: NaiveDateTime,
}

impl CatalogView for ServerRow {
    const VIEW: &'static str = "sys.servers";
    const QUERY: &'static str = "SELECT server_id, name, product, provider, data_source, location, \
         provider_string, catalog, connect_timeout, query_timeout, is_linked, \
         is_remote_login_enabled, is_rpc_out_enabled, is_data_access_enabled, \
         is_collation_compatible, uses_remote_collation, collation_name, \
         lazy_schema_validation, is_system, is_publisher, is_subscriber, is_distributor, \
         is_nonsql_subscriber, is_remote_proc_transaction_promotion_enabled, modify_date \
         FROM sys.servers";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "server_id", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, false),
        ColumnDef::new(2, "product", SqlType::NVarchar, false),
        ColumnDef::new(3, "provider", SqlType::NVarchar, false),
        ColumnDef::new(4, "data_source", SqlType::NVarchar, true),
        ColumnDef::new(5, "location", SqlType::NVarchar, true),
        ColumnDef::new(6, "provider_string", SqlType::NVarchar, true),
        ColumnDef::new(7, "catalog", SqlType::NVarchar, true),
        ColumnDef::new(8, "connect_timeout", SqlType::Int, true),
        ColumnDef::new(9, "query_timeout", SqlType::Int, true),
        ColumnDef::new(10, "is_linked", SqlType::Bit, false),
        ColumnDef::new(11, "is_remote_login_enabled", SqlType::Bit, false),
        ColumnDef::new(12, "is_rpc_out_enabled", SqlType::Bit, false),
        ColumnDef::new(13, "is_data_access_enabled", SqlType::Bit, false),
        ColumnDef::new(14, "is_collation_compatible", SqlType::Bit, false),
        ColumnDef::new(15, "uses_remote_collation", SqlType::Bit, false),
        ColumnDef::new(16, "collation_name", SqlType::NVarchar, true),
        ColumnDef::new(17, "lazy_schema_validation", SqlType::Bit, false),
        ColumnDef::new(18, "is_system", SqlType::Bit, false),
        ColumnDef::new(19, "is_publisher", SqlType::Bit, false),
        ColumnDef::new(20, "is_subscriber", SqlType::Bit, false),
        ColumnDef::new(21, "is_distributor", SqlType::Bit, false),
        ColumnDef::new(22, "is_nonsql_subscriber", SqlType::Bit, false),
        ColumnDef::new(23, "is_remote_proc_transaction_promotion_enabled", SqlType::Bit, true),
        ColumnDef::new(24, "modify_date", SqlType::DateTime, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            server_id: row.get(0)?,
            name: row.get(1)?,
            product: row.get(2)?,
            provider: row.get(3)?,
            data_source: row.get(4)?,
            location: row.get(5)?,
            provider_string: row.get(6)?,
            catalog: row.get(7)?,
            connect_timeout: row.get(8)?,
            query_timeout: row.get(9)?,
            is_linked: row.get(10)?,
            is_remote_login_enabled: row.get(11)?,
            is_rpc_out_enabled: row.get(12)?,
            is_data_access_enabled: row.get(13)?,
            is_collation_compatible: row.get(14)?,
            uses_remote_collation: row.get(15)?,
            collation_name: row.get(16)?,
            lazy_schema_validation: row.get(17)?,
            is_system: row.get(18)?,
            is_publisher: row.get(19)?,
            is_subscriber: row.get(20)?,
            is_distributor: row.get(21)?,
            is_nonsql_subscriber: row.get(22)?,
            is_remote_proc_transaction_promotion_enabled: row.get(23)?,
            modify_date: row.get(24)?,
        })
    }
}

/// Row of `sys.linked_logins`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedLoginRow {
    pub server_id: i32,
    pub local_principal_id: Option<i32>,
    pub uses_self_credential: bool,
    pub remote_name: Option<String>,
    pub modify_date: NaiveDateTime,
}

impl CatalogView for LinkedLoginRow {
    const VIEW: &'static str = "sys.linked_logins";
    const QUERY: &'static str = "SELECT server_id, local_principal_id, uses_self_credential, remote_name, \
         modify_date FROM sys.linked_logins";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "server_id", SqlType::Int, false),
        ColumnDef::new(1, "local_principal_id", SqlType::Int, true),
        ColumnDef::new(2, "uses_self_credential", SqlType::Bit, false),
        ColumnDef::new(3, "remote_name", SqlType::NVarchar, true),
        ColumnDef::new(4, "modify_date", SqlType::DateTime, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            server_id: row.get(0)?,
            local_principal_id: row.get(1)?,
            uses_self_credential: row.get(2)?,
            remote_name: row.get(3)?,
            modify_date: row.get(4)?,
        })
    }
}

/// Row of `sys.remote_logins`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteLoginRow {
    pub server_id: i32,
    pub local_principal_id: Option<i32>,
    pub remote_name: Option<String>,
    pub modify_date: NaiveDateTime,
}

impl CatalogView for RemoteLoginRow {
    const VIEW: &'static str = "sys.remote_logins";
    const QUERY: &'static str =
        "SELECT server_id, local_principal_id, remote_name, modify_date FROM sys.remote_logins";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "server_id", SqlType::Int, false),
        ColumnDef::new(1, "local_principal_id", SqlType::Int, true),
        ColumnDef::new(2, "remote_name", SqlType::NVarchar, true),
        ColumnDef::new(3, "modify_date", SqlType::DateTime, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            server_id: row.get(0)?,
            local_principal_id: row.get(1)?,
            remote_name: row.get(2)?,
            modify_date: row.get(3)?,
        })
    }
}

/// Row of `sys.endpoints`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointRow {
    pub name: String,
    pub endpoint_id: i32,
    pub principal_id: Option<i32>,
    pub protocol: u8,
    pub protocol_desc: Option<String>,
    pub r#type: u8,
    pub type_desc: Option<String>,
    pub state: Option<u8>,
    pub state_desc: Option<String>,
    pub is_admin_endpoint: bool,
}

impl CatalogView for EndpointRow {
    const VIEW: &'static str = "sys.endpoints";
    const QUERY: &'static str = "SELECT name, endpoint_id, principal_id, protocol, protocol_desc, type, \
         type_desc, state, state_desc, is_admin_endpoint FROM sys.endpoints";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "endpoint_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "protocol", SqlType::TinyInt, false),
        ColumnDef::new(4, "protocol_desc", SqlType::NVarchar, true),
        ColumnDef::new(5, "type", SqlType::TinyInt, false),
        ColumnDef::new(6, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(7, "state", SqlType::TinyInt, true),
        ColumnDef::new(8, "state_desc", SqlType::NVarchar, true),
        ColumnDef::new(9, "is_admin_endpoint", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            endpoint_id: row.get(1)?,
            principal_id: row.get(2)?,
            protocol: row.get(3)?,
            protocol_desc: row.get(4)?,
            r#type: row.get(5)?,
            type_desc: row.get(6)?,
            state: row.get(7)?,
            state_desc: row.get(8)?,
            is_admin_endpoint: row.get(9)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<ServerRow>();
        fixture::exercise::<LinkedLoginRow>();
        fixture::exercise::<RemoteLoginRow>();
        fixture::exercise::<EndpointRow>();
    }
}
