//! Service Broker catalog views.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType};
use uuid::Uuid;

/// Row of `sys.services`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRow {
    pub name: String,
    pub service_id: i32,
    pub principal_id: Option<i32>,
    pub service_queue_id: i32,
}

impl CatalogView for ServiceRow {
    const VIEW: &'static str = "sys.services";
    const QUERY: &'static str =
        "SELECT name, service_id, principal_id, service_queue_id FROM sys.services";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "service_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "service_queue_id", SqlType::Int, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            service_id: row.get(1)?,
            principal_id: row.get(2)?,
            service_queue_id: row.get(3)?,
        })
    }
}

/// Row of `sys.service_queues`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceQueueRow {
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
    pub max_readers: Option<i16>,
    pub activation_procedure: Option<String>,
    pub execute_as_principal_id: Option<i32>,
    pub is_activation_enabled: bool,
    pub is_receive_enabled: bool,
    pub is_enqueue_enabled: bool,
    pub is_retention_enabled: bool,
}

impl CatalogView for ServiceQueueRow {
    const VIEW: &'static str = "sys.service_queues";
    const QUERY: &'static str = "SELECT name, object_id, principal_id, schema_id, parent_object_id, type, type_desc, \
         create_date, modify_date, is_ms_shipped, is_published, is_schema_published, \
         max_readers, activation_procedure, execute_as_principal_id, is_activation_enabled, \
         is_receive_enabled, is_enqueue_enabled, is_retention_enabled FROM sys.service_queues";
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
        ColumnDef::new(12, "max_readers", SqlType::SmallInt, true),
        ColumnDef::new(13, "activation_procedure", SqlType::NVarchar, true),
        ColumnDef::new(14, "execute_as_principal_id", SqlType::Int, true),
        ColumnDef::new(15, "is_activation_enabled", SqlType::Bit, false),
        ColumnDef::new(16, "is_receive_enabled", SqlType::Bit, false),
        ColumnDef::new(17, "is_enqueue_enabled", SqlType::Bit, false),
        ColumnDef::new(18, "is_retention_enabled", SqlType::Bit, false),
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
            max_readers: row.get(12)?,
            activation_procedure: row.get(13)?,
            execute_as_principal_id: row.get(14)?,
            is_activation_enabled: row.get(15)?,
            is_receive_enabled: row.get(16)?,
            is_enqueue_enabled: row.get(17)?,
            is_retention_enabled: row.get(18)?,
        })
    }
}

/// Row of `sys.service_contracts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceContractRow {
    pub name: String,
    pub service_contract_id: i32,
    pub principal_id: Option<i32>,
}

impl CatalogView for ServiceContractRow {
    const VIEW: &'static str = "sys.service_contracts";
    const QUERY: &'static str =
        "SELECT name, service_contract_id, principal_id FROM sys.service_contracts";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "service_contract_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            service_contract_id: row.get(1)?,
            principal_id: row.get(2)?,
        })
    }
}

/// Row of `sys.service_message_types`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceMessageTypeRow {
    pub name: String,
    pub message_type_id: i32,
    pub principal_id: Option<i32>,
    pub validation: Option<String>,
    pub validation_desc: Option<String>,
    pub xml_collection_id: Option<i32>,
}

impl CatalogView for ServiceMessageTypeRow {
    const VIEW: &'static str = "sys.service_message_types";
    const QUERY: &'static str = "SELECT name, message_type_id, principal_id, validation, validation_desc, \
         xml_collection_id FROM sys.service_message_types";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "message_type_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "validation", SqlType::NVarchar, true),
        ColumnDef::new(4, "validation_desc", SqlType::NVarchar, true),
        ColumnDef::new(5, "xml_collection_id", SqlType::Int, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            message_type_id: row.get(1)?,
            principal_id: row.get(2)?,
            validation: row.get(3)?,
            validation_desc: row.get(4)?,
            xml_collection_id: row.get(5)?,
        })
    }
}

/// Row of `sys.service_contract_message_usages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceContractMessageUsageRow {
    pub service_contract_id: i32,
    pub message_type_id: i32,
    pub is_sent_by_initiator: bool,
    pub is_sent_by_target: bool,
}

impl CatalogView for ServiceContractMessageUsageRow {
    const VIEW: &'static str = "sys.service_contract_message_usages";
    const QUERY: &'static str = "SELECT service_contract_id, message_type_id, is_sent_by_initiator, \
         is_sent_by_target FROM sys.service_contract_message_usages";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "service_contract_id", SqlType::Int, false),
        ColumnDef::new(1, "message_type_id", SqlType::Int, false),
        ColumnDef::new(2, "is_sent_by_initiator", SqlType::Bit, false),
        ColumnDef::new(3, "is_sent_by_target", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            service_contract_id: row.get(0)?,
            message_type_id: row.get(1)?,
            is_sent_by_initiator: row.get(2)?,
            is_sent_by_target: row.get(3)?,
        })
    }
}

/// Row of `sys.service_contract_usages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceContractUsageRow {
    pub service_id: i32,
    pub service_contract_id: i32,
}

impl CatalogView for ServiceContractUsageRow {
    const VIEW: &'static str = "sys.service_contract_usages";
    const QUERY: &'static str =
        "SELECT service_id, service_contract_id FROM sys.service_contract_usages";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "service_id", SqlType::Int, false),
        ColumnDef::new(1, "service_contract_id", SqlType::Int, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            service_id: row.get(0)?,
            service_contract_id: row.get(1)?,
        })
    }
}

/// Row of `sys.routes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRow {
    pub name: String,
    pub route_id: i32,
    pub principal_id: Option<i32>,
    pub remote_service_name: Option<String>,
    pub broker_instance: Option<String>,
    pub lifetime: Option<NaiveDateTime>,
    pub address: Option<String>,
    pub mirror_address: Option<String>,
}

impl CatalogView for RouteRow {
    const VIEW: &'static str = "sys.routes";
    const QUERY: &'static str = "SELECT name, route_id, principal_id, remote_service_name, broker_instance, \
         lifetime, address, mirror_address FROM sys.routes";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "route_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "remote_service_name", SqlType::NVarchar, true),
        ColumnDef::new(4, "broker_instance", SqlType::NVarchar, true),
        ColumnDef::new(5, "lifetime", SqlType::DateTime, true),
        ColumnDef::new(6, "address", SqlType::NVarchar, true),
        ColumnDef::new(7, "mirror_address", SqlType::NVarchar, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            route_id: row.get(1)?,
            principal_id: row.get(2)?,
            remote_service_name: row.get(3)?,
            broker_instance: row.get(4)?,
            lifetime: row.get(5)?,
            address: row.get(6)?,
            mirror_address: row.get(7)?,
        })
    }
}

/// Row of `sys.remote_service_bindings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteServiceBindingRow {
    pub name: String,
    pub remote_service_binding_id: i32,
    pub principal_id: Option<i32>,
    pub remote_service_name: Option<String>,
    pub service_contract_id: i32,
    pub remote_principal_id: Option<i32>,
    pub is_anonymous_on: bool,
}

impl CatalogView for RemoteServiceBindingRow {
    const VIEW: &'static str = "sys.remote_service_bindings";
    const QUERY: &'static str = "SELECT name, remote_service_binding_id, principal_id, remote_service_name, \
         service_contract_id, remote_principal_id, is_anonymous_on \
         FROM sys.remote_service_bindings";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "remote_service_binding_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "remote_service_name", SqlType::NVarchar, true),
        ColumnDef::new(4, "service_contract_id", SqlType::Int, false),
        ColumnDef::new(5, "remote_principal_id", SqlType::Int, true),
        ColumnDef::new(6, "is_anonymous_on", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            remote_service_binding_id: row.get(1)?,
            principal_id: row.get(2)?,
            remote_service_name: row.get(3)?,
            service_contract_id: row.get(4)?,
            remote_principal_id: row.get(5)?,
            is_anonymous_on: row.get(6)?,
        })
    }
}

/// Row of `sys.conversation_endpoints`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEndpointRow {
    pub conversation_handle: Uuid,
    pub conversation_id: Uuid,
    pub is_initiator: bool,
    pub service_contract_id: i32,
    pub conversation_group_id: Uuid,
    pub service_id: i32,
    pub lifetime: Option<NaiveDateTime>,
    pub state: String,
    pub state_desc: Option<String>,
    pub far_service: Option<String>,
    pub far_broker_instance: Option<String>,
    pub principal_id: Option<i32>,
    pub far_principal_id: Option<i32>,
    pub dialog_timer: Option<NaiveDateTime>,
    pub send_sequence: i64,
    pub end_dialog_sequence: i64,
    pub receive_sequence: i64,
    pub receive_sequence_frag: i32,
}

impl CatalogView for ConversationEndpointRow {
    const VIEW: &'static str = "sys.conversation_endpoints";
    const QUERY: &'static str = "SELECT conversation_handle, conversation_id, is_initiator, service_contract_id, \
         conversation_group_id, service_id, lifetime, state, state_desc, far_service, \
         far_broker_instance, principal_id, far_principal_id, dialog_timer, send_sequence, \
         end_dialog_sequence, receive_sequence, receive_sequence_frag \
         FROM sys.conversation_endpoints";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "conversation_handle", SqlType::Guid, false),
        ColumnDef::new(1, "conversation_id", SqlType::Guid, false),
        ColumnDef::new(2, "is_initiator", SqlType::Bit, false),
        ColumnDef::new(3, "service_contract_id", SqlType::Int, false),
        ColumnDef::new(4, "conversation_group_id", SqlType::Guid, false),
        ColumnDef::new(5, "service_id", SqlType::Int, false),
        ColumnDef::new(6, "lifetime", SqlType::DateTime, true),
        ColumnDef::new(7, "state", SqlType::NVarchar, false),
        ColumnDef::new(8, "state_desc", SqlType::NVarchar, true),
        ColumnDef::new(9, "far_service", SqlType::NVarchar, true),
        ColumnDef::new(10, "far_broker_instance", SqlType::NVarchar, true),
        ColumnDef::new(11, "principal_id", SqlType::Int, true),
        ColumnDef::new(12, "far_principal_id", SqlType::Int, true),
        ColumnDef::new(13, "dialog_timer", SqlType::DateTime, true),
        ColumnDef::new(14, "send_sequence", SqlType::BigInt, false),
        ColumnDef::new(15, "end_dialog_sequence", SqlType::BigInt, false),
        ColumnDef::new(16, "receive_sequence", SqlType::BigInt, false),
        ColumnDef::new(17, "receive_sequence_frag", SqlType::Int, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            conversation_handle: row.get(0)?,
            conversation_id: row.get(1)?,
            is_initiator: row.get(2)?,
            service_contract_id: row.get(3)?,
            conversation_group_id: row.get(4)?,
            service_id: row.get(5)?,
            lifetime: row.get(6)?,
            state: row.get(7)?,
            state_desc: row.get(8)?,
            far_service: row.get(9)?,
            far_broker_instance: row.get(10)?,
            principal_id: row.get(11)?,
            far_principal_id: row.get(12)?,
            dialog_timer: row.get(13)?,
            send_sequence: row.get(14)?,
            end_dialog_sequence: row.get(15)?,
            receive_sequence: row.get(16)?,
            receive_sequence_frag: row.get(17)?,
        })
    }
}

/// Row of `sys.conversation_groups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationGroupRow {
    pub conversation_group_id: Uuid,
    pub service_id: i32,
    pub is_system: bool,
}

impl CatalogView for ConversationGroupRow {
    const VIEW: &'static str = "sys.conversation_groups";
    const QUERY: &'static str =
        "SELECT conversation_group_id, service_id, is_system FROM sys.conversation_groups";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "conversation_group_id", SqlType::Guid, false),
        ColumnDef::new(1, "service_id", SqlType::Int, false),
        ColumnDef::new(2, "is_system", SqlType::Bit, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            conversation_group_id: row.get(0)?,
            service_id: row.get(1)?,
            is_system: row.get(2)?,
        })
    }
}

/// Row of `sys.transmission_queue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionQueueRow {
    pub conversation_handle: Uuid,
    pub to_service_name: Option<String>,
    pub to_broker_instance: Option<String>,
    pub from_service_name: Option<String>,
    pub service_contract_name: Option<String>,
    pub enqueue_time: NaiveDateTime,
    pub message_sequence_number: i64,
    pub message_type_name: Option<String>,
    pub is_conversation_error: bool,
    pub is_end_of_dialog: bool,
    pub message_body: Option<Vec<u8>>,
    pub transmission_status: Option<String>,
    pub priority: u8,
}

impl CatalogView for TransmissionQueueRow {
    const VIEW: &'static str = "sys.transmission_queue";
    const QUERY: &'static str = "SELECT conversation_handle, to_service_name, to_broker_instance, \
         from_service_name, service_contract_name, enqueue_time, message_sequence_number, \
         message_type_name, is_conversation_error, is_end_of_dialog, message_body, \
         transmission_status, priority FROM sys.transmission_queue";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "conversation_handle", SqlType::Guid, false),
        ColumnDef::new(1, "to_service_name", SqlType::NVarchar, true),
        ColumnDef::new(2, "to_broker_instance", SqlType::NVarchar, true),
        ColumnDef::new(3, "from_service_name", SqlType::NVarchar, true),
        ColumnDef::new(4, "service_contract_name", SqlType::NVarchar, true),
        ColumnDef::new(5, "enqueue_time", SqlType::DateTime, false),
        ColumnDef::new(6, "message_sequence_number", SqlType::BigInt, false),
        ColumnDef::new(7, "message_type_name", SqlType::NVarchar, true),
        ColumnDef::new(8, "is_conversation_error", SqlType::Bit, false),
        ColumnDef::new(9, "is_end_of_dialog", SqlType::Bit, false),
        ColumnDef::new(10, "message_body", SqlType::VarBinary, true),
        ColumnDef::new(11, "transmission_status", SqlType::NVarchar, true),
        ColumnDef::new(12, "priority", SqlType::TinyInt, false),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            conversation_handle: row.get(0)?,
            to_service_name: row.get(1)?,
            to_broker_instance: row.get(2)?,
            from_service_name: row.get(3)?,
            service_contract_name: row.get(4)?,
            enqueue_time: row.get(5)?,
            message_sequence_number: row.get(6)?,
            message_type_name: row.get(7)?,
            is_conversation_error: row.get(8)?,
            is_end_of_dialog: row.get(9)?,
            message_body: row.get(10)?,
            transmission_status: row.get(11)?,
            priority: row.get(12)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<ServiceRow>();
        fixture::exercise::<ServiceQueueRow>();
        fixture::exercise::<ServiceContractRow>();
        fixture::exercise::<ServiceMessageTypeRow>();
        fixture::exercise::<ServiceContractMessageUsageRow>();
        fixture::exercise::<ServiceContractUsageRow>();
        fixture::exercise::<RouteRow>();
        fixture::exercise::<RemoteServiceBindingRow>();
        fixture::exercise::<ConversationEndpointRow>();
        fixture::exercise::<ConversationGroupRow>();
        fixture::exercise::<TransmissionQueueRow>();
    }
}
