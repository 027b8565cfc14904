/// Database infrastructure: connection pool and migration runner.

pub mod migrations;
pub mod pool;

pub use pool::{create_pool, health_check, DatabaseConfig};
