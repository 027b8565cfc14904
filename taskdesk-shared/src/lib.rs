//! # taskdesk shared library
//!
//! Code shared by the taskdesk binaries:
//!
//! - `models`: database record types and their CRUD operations
//! - `auth`: password hashing and verification
//! - `db`: connection pool and migration runner

pub mod auth;
pub mod db;
pub mod models;
