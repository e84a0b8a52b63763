//! Cryptography catalog views: certificates and keys.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use syscat_core::{CatalogResult, CatalogView, ColumnDef, Row, SqlType};
use uuid::Uuid;

/// Row of `sys.certificates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateRow {
    pub name: String,
    pub certificate_id: i32,
    pub principal_id: Option<i32>,
    pub pvt_key_encryption_type: Option<String>,
    pub pvt_key_encryption_type_desc: Option<String>,
    pub is_active_for_begin_dialog: Option<bool>,
    pub issuer_name: Option<String>,
    pub cert_serial_number: Option<String>,
    pub sid: Option<Vec<u8>>,
    pub string_sid: Option<String>,
    pub subject: Option<String>,
    pub expiry_date: Option<NaiveDateTime>,
    pub start_date: Option<NaiveDateTime>,
    pub thumbprint: Vec<u8>,
    pub pvt_key_last_backup_date: Option<NaiveDateTime>,
}

impl CatalogView for CertificateRow {
    const VIEW: &'static str = "sys.certificates";
    const QUERY: &'static str = "SELECT name, certificate_id, principal_id, pvt_key_encryption_type, \
         pvt_key_encryption_type_desc, is_active_for_begin_dialog, issuer_name, \
         cert_serial_number, sid, string_sid, subject, expiry_date, start_date, thumbprint, \
         pvt_key_last_backup_date FROM sys.certificates";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "certificate_id", SqlType::Int, false),
        ColumnDef::new(2, "principal_id", SqlType::Int, true),
        ColumnDef::new(3, "pvt_key_encryption_type", SqlType::NVarchar, true),
        ColumnDef::new(4, "pvt_key_encryption_type_desc", SqlType::NVarchar, true),
        ColumnDef::new(5, "is_active_for_begin_dialog", SqlType::Bit, true),
        ColumnDef::new(6, "issuer_name", SqlType::NVarchar, true),
        ColumnDef::new(7, "cert_serial_number", SqlType::NVarchar, true),
        ColumnDef::new(8, "sid", SqlType::VarBinary, true),
        ColumnDef::new(9, "string_sid", SqlType::NVarchar, true),
        ColumnDef::new(10, "subject", SqlType::NVarchar, true),
        ColumnDef::new(11, "expiry_date", SqlType::DateTime, true),
        ColumnDef::new(12, "start_date", SqlType::DateTime, true),
        ColumnDef::new(13, "thumbprint", SqlType::VarBinary, false),
        ColumnDef::new(14, "pvt_key_last_backup_date", SqlType::DateTime, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            certificate_id: row.get(1)?,
            principal_id: row.get(2)?,
            pvt_key_encryption_type: row.get(3)?,
            pvt_key_encryption_type_desc: row.get(4)?,
            is_active_for_begin_dialog: row.get(5)?,
            issuer_name: row.get(6)?,
            cert_serial_number: row.get(7)?,
            sid: row.get(8)?,
            string_sid: row.get(9)?,
            subject: row.get(10)?,
            expiry_date: row.get(11)?,
            start_date: row.get(12)?,
            thumbprint: row.get(13)?,
            pvt_key_last_backup_date: row.get(14)?,
        })
    }
}

/// Row of `sys.asymmetric_keys`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsymmetricKeyRow {
    pub name: String,
    pub principal_id: Option<i32>,
    pub asymmetric_key_id: i32,
    pub pvt_key_encryption_type: Option<String>,
    pub pvt_key_encryption_type_desc: Option<String>,
    pub thumbprint: Vec<u8>,
    pub algorithm: String,
    pub algorithm_desc: Option<String>,
    pub key_length: i32,
    pub sid: Option<Vec<u8>>,
    pub string_sid: Option<String>,
    pub public_key: Option<Vec<u8>>,
}

impl CatalogView for AsymmetricKeyRow {
    const VIEW: &'static str = "sys.asymmetric_keys";
    const QUERY: &'static str = "SELECT name, principal_id, asymmetric_key_id, pvt_key_encryption_type, \
         pvt_key_encryption_type_desc, thumbprint, algorithm, algorithm_desc, key_length, \
         sid, string_sid, public_key FROM sys.asymmetric_keys";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "principal_id", SqlType::Int, true),
        ColumnDef::new(2, "asymmetric_key_id", SqlType::Int, false),
        ColumnDef::new(3, "pvt_key_encryption_type", SqlType::NVarchar, true),
        ColumnDef::new(4, "pvt_key_encryption_type_desc", SqlType::NVarchar, true),
        ColumnDef::new(5, "thumbprint", SqlType::VarBinary, false),
        ColumnDef::new(6, "algorithm", SqlType::NVarchar, false),
        ColumnDef::new(7, "algorithm_desc", SqlType::NVarchar, true),
        ColumnDef::new(8, "key_length", SqlType::Int, false),
        ColumnDef::new(9, "sid", SqlType::VarBinary, true),
        ColumnDef::new(10, "string_sid", SqlType::NVarchar, true),
        ColumnDef::new(11, "public_key", SqlType::VarBinary, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            principal_id: row.get(1)?,
            asymmetric_key_id: row.get(2)?,
            pvt_key_encryption_type: row.get(3)?,
            pvt_key_encryption_type_desc: row.get(4)?,
            thumbprint: row.get(5)?,
            algorithm: row.get(6)?,
            algorithm_desc: row.get(7)?,
            key_length: row.get(8)?,
            sid: row.get(9)?,
            string_sid: row.get(10)?,
            public_key: row.get(11)?,
        })
    }
}

/// Row of `sys.symmetric_keys`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetricKeyRow {
    pub name: String,
    pub principal_id: Option<i32>,
    pub symmetric_key_id: i32,
    pub key_length: i32,
    pub key_algorithm: String,
    pub algorithm_desc: Option<String>,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
    pub key_guid: Option<Uuid>,
}

impl CatalogView for SymmetricKeyRow {
    const VIEW: &'static str = "sys.symmetric_keys";
    const QUERY: &'static str = "SELECT name, principal_id, symmetric_key_id, key_length, key_algorithm, \
         algorithm_desc, create_date, modify_date, key_guid FROM sys.symmetric_keys";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "name", SqlType::NVarchar, false),
        ColumnDef::new(1, "principal_id", SqlType::Int, true),
        ColumnDef::new(2, "symmetric_key_id", SqlType::Int, false),
        ColumnDef::new(3, "key_length", SqlType::Int, false),
        ColumnDef::new(4, "key_algorithm", SqlType::NVarchar, false),
        ColumnDef::new(5, "algorithm_desc", SqlType::NVarchar, true),
        ColumnDef::new(6, "create_date", SqlType::DateTime, false),
        ColumnDef::new(7, "modify_date", SqlType::DateTime, false),
        ColumnDef::new(8, "key_guid", SqlType::Guid, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            name: row.get(0)?,
            principal_id: row.get(1)?,
            symmetric_key_id: row.get(2)?,
            key_length: row.get(3)?,
            key_algorithm: row.get(4)?,
            algorithm_desc: row.get(5)?,
            create_date: row.get(6)?,
            modify_date: row.get(7)?,
            key_guid: row.get(8)?,
        })
    }
}

/// Row of `sys.crypt_properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptPropertyRow {
    pub class: u8,
    pub class_desc: Option<String>,
    pub major_id: i32,
    pub thumbprint: Vec<u8>,
    pub crypt_type: String,
    pub crypt_type_desc: Option<String>,
    pub crypt_property: Option<Vec<u8>>,
}

impl CatalogView for CryptPropertyRow {
    const VIEW: &'static str = "sys.crypt_properties";
    const QUERY: &'static str = "SELECT class, class_desc, major_id, thumbprint, crypt_type, crypt_type_desc, \
         crypt_property FROM sys.crypt_properties";
    const SHAPE: &'static [ColumnDef] = &[
        ColumnDef::new(0, "class", SqlType::TinyInt, false),
        ColumnDef::new(1, "class_desc", SqlType::NVarchar, true),
        ColumnDef::new(2, "major_id", SqlType::Int, false),
        ColumnDef::new(3, "thumbprint", SqlType::VarBinary, false),
        ColumnDef::new(4, "crypt_type", SqlType::NVarchar, false),
        ColumnDef::new(5, "crypt_type_desc", SqlType::NVarchar, true),
        ColumnDef::new(6, "crypt_property", SqlType::VarBinary, true),
    ];

    fn from_row(row: &Row<'_>) -> CatalogResult<Self> {
        Ok(Self {
            class: row.get(0)?,
            class_desc: row.get(1)?,
            major_id: row.get(2)?,
            thumbprint: row.get(3)?,
            crypt_type: row.get(4)?,
            crypt_type_desc: row.get(5)?,
            crypt_property: row.get(6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syscat_core::fixture;

    #[test]
    fn shapes_and_ordinals_are_wired() {
        fixture::exercise::<CertificateRow>();
        fixture::exercise::<AsymmetricKeyRow>();
        fixture::exercise::<SymmetricKeyRow>();
        fixture::exercise::<CryptPropertyRow>();
    }
}
