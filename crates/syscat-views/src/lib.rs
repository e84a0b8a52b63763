//! # syscat-views
//!
//! Record types for SQL Server system catalog views, one struct per view,
//! grouped into area modules the way the SQL Server documentation groups
//! catalog views. Each type carries its fixed query text and declared row
//! shape; `syscat-core` provides the reader that runs them.
//!
//! Column sets follow the SQL Server 2008 catalog documentation. Every
//! query is a bare `SELECT` with an explicit column list and no `ORDER BY`;
//! row order is whatever the server delivers.

pub mod broker;
pub mod clr;
pub mod columns;
pub mod constraints;
pub mod crypto;
pub mod databases;
pub mod fulltext;
pub mod indexes;
pub mod misc;
pub mod objects;
pub mod security;
pub mod servers;
pub mod storage;
pub mod trace;
