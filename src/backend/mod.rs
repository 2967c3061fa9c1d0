use crate::error::AppResult;
use crate::models::Customer;
use crate::parser::PageRequest;
use async_trait::async_trait;
use std::sync::Arc;

pub mod database;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Supported database backend types
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseType {
    PostgreSQL,
    SQLite,
}

/// Core backend abstraction
///
/// Lifecycle operations every storage backend supports, independent of the
/// resource it stores.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Check if the storage backend is healthy and accessible
    async fn health_check(&self) -> AppResult<()>;

    /// Create the customer table if it does not exist yet
    async fn init_schema(&self) -> AppResult<()>;

    /// Clean up resources when storage is no longer needed
    async fn cleanup(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Customer record store
///
/// Reads run directly against the pool; `save_customer` and
/// `delete_customer` each run in their own transaction.
#[async_trait]
pub trait CustomerBackend: Send + Sync {
    /// Find a customer by ID
    async fn find_customer_by_id(&self, id: i64) -> AppResult<Option<Customer>>;

    /// Find one page of customers, returning the page items and the total row count
    async fn find_all_customers(&self, request: &PageRequest)
        -> AppResult<(Vec<Customer>, i64)>;

    /// Insert the customer when it has no ID, otherwise overwrite the row with its ID
    async fn save_customer(&self, customer: &Customer) -> AppResult<Customer>;

    /// Delete the customer's row, returning whether a row was removed
    async fn delete_customer(&self, customer: &Customer) -> AppResult<bool>;
}

/// Combined backend interface used by the application
pub trait AppBackend: Backend + CustomerBackend {}

/// Automatic implementation for any type that implements both traits
impl<T> AppBackend for T where T: Backend + CustomerBackend {}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    pub async fn create(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Arc<dyn AppBackend>> {
        let backend = Self::create_backend(config).await?;
        Ok(Arc::from(backend))
    }

    /// Create a backend based on configuration (returns Box)
    pub async fn create_backend(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Box<dyn AppBackend>> {
        match config.database_type {
            DatabaseType::PostgreSQL => {
                let backend =
                    crate::backend::database::postgres::PostgresBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
            DatabaseType::SQLite => {
                let backend =
                    crate::backend::database::sqlite::SqliteBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
        }
    }
}
