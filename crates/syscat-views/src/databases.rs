//! Database-scoped and server-wide configuration catalog views.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType, SqlValue};
use uuid::Uuid;

/// Row of `sys.databases`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseRow {
    pub name: String,
    pub database_id: i32,
    pub source_database_id: Option<i32>,
    pub owner_sid: Option<Vec<u8>>,
    pub create_date: NaiveDateTime,
    pub compatibility_level: u8,
    pub collation_name: Option<String>,
    pub user_access: Option<u8>,
    pub user_access_desc: Option<String>,
    pub is_read_only: Option<bool>,
    pub is_auto_close_on: bool,
    pub is_auto_shrink_on: Option<bool>,
    pub state: Option<u8>,
    pub state_desc: Option<String>,
    pub is_in_standby: Option<bool>,
    pub snapshot_isolation_state: Option<u8>,
    pub snapshot_isolation_state_desc: Option<String>,
    pub is_read_committed_snapshot_on: Option<bool>,
    pub recovery_model: Option<u8>,
    pub recovery_model_desc: Option<String>,
    pub page_verify_option: Option<u8>,
    pub page_verify_option_desc: Option<String>,
    pub is_auto_create_stats_on: Option<bool>,
    pub is_auto_update_stats_on: Option<bool>,
    pub is_fulltext_enabled: Option<bool>,
    pub is_trustworthy_on: Option<bool>,
    pub is_db_chaining_on: Option<bool>,
    pub is_broker_enabled: bool,
    pub service_broker_guid: Uuid,
    pub is_published: bool,
    pub is_subscribed: bool,
    pub is_merge_published: bool,
    pub is_distributor: bool,
    pub log_reuse_wait: Option<u8>,
    pub log_reuse_wait_desc: Option<String>,
    pub is_date_correlation_on: bool,
}

impl CatalogView for DatabaseRow {
    const VIEW: &'static str = "sys.databases";
    const QUERY: &'static str = "SELECT name, database_id, source_database_id, owner_sid, create_date, \
         compatibility_level, collation_name, user_access, user_access_desc, is_read_only, \
         is_auto_close_on, is_auto_shrink_on, state, state_desc, is_in_standby, \
         snapshot_isolation_state, snapshot_isolation_state_desc, \
         is_read_committed_snapshot_on, recovery_model, recovery_model_desc, \
         page_verify_option, page_verify_option_desc, is_auto_create_stats_on, \
         is_auto_update_stats_on, is_fulltext_enabled, is_trustworthy_on, is_db_chaining_on, \
         is_broker_enabled, service_broker_guid, is_published, is_subscribed, \
         is_merge_published, is_distributor, log_reuse_wait, log_reuse_wait_desc, \
         is_date_correlation_on FROM sys.databases";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "database_id", SqlType::Int, false),
        ColumnDef::new(2, "source_database_id", SqlType::Int, true),
        ColumnDef::new(3, "owner_sid", SqlType::VarBinary, true),
        ColumnDef::new(4, "create_date", SqlType::DateTime, false),
        ColumnDef::new(5, "compatibility_level", SqlType::TinyInt, false),
        ColumnDef::new(6, "collation_name", SqlType::NVarchar, true),
        ColumnDef::new(7, "user_access", SqlType::TinyInt, true),
        ColumnDef::new(8, "user_access_desc", SqlType::NVarchar, true),
        ColumnDef::new(9, "is_read_only", SqlType::Bit, true),
        ColumnDef::new(10, "is_auto_close_on", SqlType::Bit, false),
        ColumnDef::new(11, "is_auto_shrink_on", SqlType::Bit, true),
        ColumnDef::new(12, "state", SqlType::TinyInt, true),
        ColumnDef::new(13, "state_desc", SqlType::NVarchar, true),
        ColumnDef::new(14, "is_in_standby", SqlType::Bit, true),
        ColumnDef::new(15, "snapshot_isolation_state", SqlType::TinyInt, true),
        ColumnDef::new(16, "snapshot_isolation_state_desc", SqlType::NVarchar, true),
        ColumnDef::new(17, "is_read_committed_snapshot_on", SqlType::Bit, true),
        ColumnDef::new(18, "recovery_model", SqlType::TinyInt, true),
        ColumnDef::new(19, "recovery_model_desc", SqlType::NVarchar, true),
        ColumnDef::new(20, "page_verify_option", SqlType::TinyInt, true),
        ColumnDef::new(21, "page_verify_option_desc", SqlType::NVarchar, true),
        ColumnDef::new(22, "is_auto_create_stats_on", SqlType::Bit, true),
        ColumnDef::new(23, "is_auto_update_stats_on", SqlType::Bit, true),
        ColumnDef::new(24, "is_fulltext_enabled", SqlType::Bit, true),
        ColumnDef::new(25, "is_trustworthy_on", SqlType::Bit, true),
        ColumnDef::new(26, "is_db_chaining_on", SqlType::Bit, true),
        ColumnDef::new(27, "is_broker_enabled", SqlType::Bit, false),
        ColumnDef::new(28, "service_broker_guid", SqlType::Guid, false),
        ColumnDef::new(29, "is_published", SqlType::Bit, false),
        ColumnDef::new(30, "is_subscribed", SqlType::Bit, false),
        ColumnDef::new(31, "is_merge_published", SqlType::Bit, false),
        ColumnDef::new(32, "is_distributor", SqlType::Bit, false),
        ColumnDef::new(33, "log_reuse_wait", SqlType::TinyInt, true),
        ColumnDef::new(34, "log_reuse_wait_desc", SqlType::NVarchar, true),
        ColumnDef::new(35, "is_date_correlation_on", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            database_id: row.get(1)?,
            source_database_id: row.get(2)?,
            owner_sid: row.get(3)?,
            create_date: row.get(4)?,
            compatibility_level: row.get(5)?,
            collation_name: row.get(6)?,
            user_access: row.get(7)?,
            user_access_desc: row.get(8)?,
            is_read_only: row.get(9)?,
            is_auto_close_on: row.get(10)?,
            is_auto_shrink_on: row.get(11)?,
            state: row.get(12)?,
            state_desc: row.get(13)?,
            is_in_standby: row.get(14)?,
            snapshot_isolation_state: row.get(15)?,
            snapshot_isolation_state_desc: row.get(16)?,
            is_read_committed_snapshot_on: row.get(17)?,
            recovery_model: row.get(18)?,
            recovery_model_desc: row.get(19)?,
            page_verify_option: row.get(20)?,
            page_verify_option_desc: row.get(21)?,
            is_auto_create_stats_on: row.get(22)?,
            is_auto_update_stats_on: row.get(23)?,
            is_fulltext_enabled: row.get(24)?,
            is_trustworthy_on: row.get(25)?,
            is_db_chaining_on: row.get(26)?,
            is_broker_enabled: row.get(27)?,
            service_broker_guid: row.get(28)?,
            is_published: row.get(29)?,
            is_subscribed: row.get(30)?,
            is_merge_published: row.get(31)?,
            is_distributor: row.get(32)?,
            log_reuse_wait: row.get(33)?,
            log_reuse_wait_desc: row.get(34)?,
            is_date_correlation_on: row.get(35)?,
        })
    }
}

/// Row of `sys.backup_devices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDeviceRow {
    pub name: String,
    pub r#type: u8,
    pub type_desc: Option<String>,
    pub physical_name: Option<String>,
}

impl CatalogView for BackupDeviceRow {
    const VIEW: &'static str = "sys.backup_devices";
    const QUERY: &'static str = "SELECT name, type, type_desc, physical_name FROM sys.backup_devices";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "type", SqlType::TinyInt, false),
        ColumnDef::new(2, "type_desc", SqlType::NVarchar, true),
        ColumnDef::new(3, "physical_name", SqlType::NVarchar, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            r#type: row.get(1)?,
            type_desc: row.get(2)?,
            physical_name: row.get(3)?,
        })
    }
}

/// Row of `sys.configurations`. The value columns are `sql_variant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRow {
    pub configuration_id: i32,
    pub name: String,
    pub value: Option<SqlValue>,
    pub minimum: Option<SqlValue>,
    pub maximum: Option<SqlValue>,
    pub value_in_use: Option<SqlValue>,
    pub description: Option<String>,
    pub is_dynamic: bool,
    pub is_advanced: bool,
}

impl CatalogView for ConfigurationRow {
    const VIEW: &'static str = "sys.configurations";
    const QUERY: &'static str = "SELECT configuration_id, name, value, minimum, maximum, value_in_use, \
         description, is_dynamic, is_advanced FROM sys.configurations";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "configuration_id", SqlType::Int, false),
        ColumnDef::new(1, "name", SqlType::NVarchar, false),
        ColumnDef::new(2, "value", SqlType::Variant, true),
        ColumnDef::new(3, "minimum", SqlType::Variant, true),
        ColumnDef::new(4, "maximum", SqlType::Variant, true),
        ColumnDef::new(5, "value_in_use", SqlType::Variant, true),
        ColumnDef::new(6, "description", SqlType::NVarchar, true),
        ColumnDef::new(7, "is_dynamic", SqlType::Bit, false),
        ColumnDef::new(8, "is_advanced", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            configuration_id: row.get(0)?,
            name: row.get(1)?,
            value: row.get(2)?,
            minimum: row.get(3)?,
            maximum: row.get(4)?,
            value_in_use: row.get(5)?,
            description: row.get(6)?,
            is_dynamic: row.get(7)?,
            is_advanced: row.get(8)?,
        })
    }
}

/// Row of `sys.messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRow {
    pub message_id: i32,
    pub language_id: i16,
    pub severity: u8,
    pub is_event_logged: bool,
    pub text: Option<String>,
}

impl CatalogView for MessageRow {
    const VIEW: &'static str = "sys.messages";
    const QUERY: &'static str =
        "SELECT message_id, language_id, severity, is_event_logged, text FROM sys.messages";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "message_id", SqlType::Int, false),
        ColumnDef::new(1, "language_id", SqlType::SmallInt, false),
        ColumnDef::new(2, "severity", SqlType::TinyInt, false),
        ColumnDef::new(3, "is_event_logged", SqlType::Bit, false),
        ColumnDef::new(4, "text", SqlType::NVarchar, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            message_id: row.get(0)?,
            language_id: row.get(1)?,
            severity: row.get(2)?,
            is_event_logged: row.get(3)?,
            text: row.get(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<DatabaseRow>();
        fixture::exercise::<BackupDeviceRow>();
        fixture::exercise::<ConfigurationRow>();
        fixture::exercise::<MessageRow>();
    }

    #[test]
    fn configuration_values_keep_their_server_type() {
        let mut populated = fixture::populated_row(ConfigurationRow::SHAPE);
        populated[2] = SqlValue::Int(16384);
        let cursor = fixture::cursor_for(ConfigurationRow::SHAPE, vec![populated]);
        let row = syscat_core::CatalogReader::<_, ConfigurationRow>::new(cursor)
            .first()
            .unwrap()
            .unwrap();
        assert_eq!(row.value, Some(SqlValue::Int(16384)));
    }
}
