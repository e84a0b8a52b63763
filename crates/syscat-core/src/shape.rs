//! Row-shape metadata: the declared column layout of one catalog view.
//!
//! Shapes are fixed at code-generation time and never mutated at runtime.
//! Ordinals must match the declared `SELECT` column order exactly; a
//! mismatch surfaces as a coercion error at read time, not compile time.

use serde::{Deserialize, Serialize};

/// Declared semantic type of a catalog column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlType {
    Bit,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    NVarchar,
    DateTime,
    Guid,
    VarBinary,
    /// `sql_variant` columns; read as a raw value.
    Variant,
}

impl SqlType {
    pub fn name(&self) -> &'static str {
        match self {
            SqlType::Bit => "bit",
            SqlType::TinyInt => "tinyint",
            SqlType::SmallInt => "smallint",
            SqlType::Int => "int",
            SqlType::BigInt => "bigint",
            SqlType::Float => "float",
            SqlType::NVarchar => "nvarchar",
            SqlType::DateTime => "datetime",
            SqlType::Guid => "uniqueidentifier",
            SqlType::VarBinary => "varbinary",
            SqlType::Variant => "sql_variant",
        }
    }
}

/// One entry of a view's row shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub ordinal: usize,
    pub name: &'static str,
    pub ty: SqlType,
    pub nullable: bool,
}

impl ColumnDef {
    pub const fn new(ordinal: usize, name: &'static str, ty: SqlType, nullable: bool) -> Self {
        Self { ordinal, name, ty, nullable }
    }
}
