//! Database abstraction layer for the customer server
//!
//! This module provides a unified interface for customer storage across
//! different database backends (PostgreSQL, SQLite) while keeping the SQL
//! dialect of each engine in its own module.
//!
//! # Architecture
//!
//! ```text
//! Common Logic (customer_read.rs, customer_save.rs, customer_delete.rs)
//!     ↓
//! Database-specific implementations
//!     ├── postgres/ (PostgreSQL-specific code)
//!     └── sqlite/   (SQLite-specific code)
//! ```

pub mod config;
pub mod customer_delete;
pub mod customer_read;
pub mod customer_save;
pub mod postgres;
pub mod sqlite;

// Re-export key types for convenience
pub use config::DatabaseBackendConfig;

pub use customer_delete::UnifiedCustomerDeleteOps;

pub use customer_read::UnifiedCustomerReadOps;

pub use customer_save::UnifiedCustomerSaveOps;

pub use postgres::{PostgresCustomerDeleter, PostgresCustomerReader, PostgresCustomerSaver};
pub use sqlite::{SqliteCustomerDeleter, SqliteCustomerReader, SqliteCustomerSaver};
