use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{debug, info};

use super::super::config::DatabaseBackendConfig;
use crate::backend::database::{
    PostgresCustomerDeleter, PostgresCustomerReader, PostgresCustomerSaver,
    UnifiedCustomerDeleteOps, UnifiedCustomerReadOps, UnifiedCustomerSaveOps,
};
use crate::backend::{Backend, CustomerBackend};
use crate::error::{AppError, AppResult};
use crate::models::Customer;
use crate::parser::PageRequest;

/// PostgreSQL database backend implementation
pub struct PostgresBackend {
    pool: PgPool,
    customer_read_ops: UnifiedCustomerReadOps<PostgresCustomerReader>,
    customer_save_ops: UnifiedCustomerSaveOps<PostgresCustomerSaver>,
    customer_delete_ops: UnifiedCustomerDeleteOps<PostgresCustomerDeleter>,
}

impl PostgresBackend {
    /// Create a new PostgreSQL backend instance
    pub fn new(pool: PgPool) -> Self {
        // Create database-specific adapters
        let customer_reader = PostgresCustomerReader::new(pool.clone());
        let customer_saver = PostgresCustomerSaver::new(pool.clone());
        let customer_deleter = PostgresCustomerDeleter::new(pool.clone());

        Self {
            pool,
            customer_read_ops: UnifiedCustomerReadOps::new(customer_reader),
            customer_save_ops: UnifiedCustomerSaveOps::new(customer_saver),
            customer_delete_ops: UnifiedCustomerDeleteOps::new(customer_deleter),
        }
    }

    /// Connect using the given configuration
    pub async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config.validate()?;

        // Create connection pool
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&config.connection_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;

        info!("Connected to PostgreSQL database");

        Ok(Self::new(pool))
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Backend for PostgresBackend {
    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;

        Ok(())
    }

    async fn init_schema(&self) -> AppResult<()> {
        super::schema::init_schema(&self.pool).await
    }

    async fn cleanup(&self) -> AppResult<()> {
        self.pool.close().await;
        Ok(())
    }
}

#[async_trait]
impl CustomerBackend for PostgresBackend {
    async fn find_customer_by_id(&self, id: i64) -> AppResult<Option<Customer>> {
        debug!("Finding customer {}", id);
        self.customer_read_ops.find_customer_by_id(id).await
    }

    async fn find_all_customers(
        &self,
        request: &PageRequest,
    ) -> AppResult<(Vec<Customer>, i64)> {
        self.customer_read_ops.find_all_customers(request).await
    }

    async fn save_customer(&self, customer: &Customer) -> AppResult<Customer> {
        self.customer_save_ops.save_customer(customer).await
    }

    async fn delete_customer(&self, customer: &Customer) -> AppResult<bool> {
        self.customer_delete_ops.delete_customer(customer).await
    }
}
