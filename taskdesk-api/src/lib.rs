//! # taskdesk API server library
//!
//! Core functionality for the taskdesk API server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `envelope`: Success response envelopes
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod envelope;
pub mod error;
pub mod routes;
