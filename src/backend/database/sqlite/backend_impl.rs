use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use super::super::config::DatabaseBackendConfig;
use crate::backend::database::{
    SqliteCustomerDeleter, SqliteCustomerReader, SqliteCustomerSaver, UnifiedCustomerDeleteOps,
    UnifiedCustomerReadOps, UnifiedCustomerSaveOps,
};
use crate::backend::{Backend, CustomerBackend};
use crate::error::{AppError, AppResult};
use crate::models::Customer;
use crate::parser::PageRequest;

/// SQLite database backend implementation
///
/// Used for the zero-config in-memory mode as well as file databases.
pub struct SqliteBackend {
    pool: SqlitePool,
    customer_read_ops: UnifiedCustomerReadOps<SqliteCustomerReader>,
    customer_save_ops: UnifiedCustomerSaveOps<SqliteCustomerSaver>,
    customer_delete_ops: UnifiedCustomerDeleteOps<SqliteCustomerDeleter>,
}

impl SqliteBackend {
    /// Create a new SQLite backend instance
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            customer_read_ops: UnifiedCustomerReadOps::new(SqliteCustomerReader::new(pool.clone())),
            customer_save_ops: UnifiedCustomerSaveOps::new(SqliteCustomerSaver::new(pool.clone())),
            customer_delete_ops: UnifiedCustomerDeleteOps::new(SqliteCustomerDeleter::new(
                pool.clone(),
            )),
            pool,
        }
    }

    /// Connect using the given configuration
    pub async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config.validate()?;

        let options = SqliteConnectOptions::from_str(&config.connection_url)
            .map_err(|e| AppError::Configuration(format!("Invalid SQLite URL: {}", e)))?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout));

        // An in-memory database lives only as long as its connection.
        if config.is_memory_database() {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to SQLite: {}", e)))?;

        info!("Connected to SQLite database {}", config.redacted_url());

        Ok(Self::new(pool))
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Backend for SqliteBackend {
    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
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
impl CustomerBackend for SqliteBackend {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{SortOrder, SortSpec};

    async fn setup_backend() -> SqliteBackend {
        let backend = SqliteBackend::connect(&DatabaseBackendConfig::memory_sqlite())
            .await
            .unwrap();
        backend.init_schema().await.unwrap();
        backend
    }

    #[tokio::test]
    async fn test_health_check_and_cleanup() {
        let backend = setup_backend().await;
        assert!(backend.health_check().await.is_ok());

        backend.cleanup().await.unwrap();
        assert!(backend.pool().is_closed());
        assert!(backend.health_check().await.is_err());
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let backend = setup_backend().await;

        let first = backend
            .save_customer(&Customer::new("박진희", "01022223333"))
            .await
            .unwrap();
        let second = backend
            .save_customer(&Customer::new("김철수", "01011112222"))
            .await
            .unwrap();

        assert!(first.id.is_some());
        assert!(second.id.is_some());
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "박진희");
        assert_eq!(first.tel, "01022223333");

        let found = backend
            .find_customer_by_id(first.id.unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(first));
    }

    #[tokio::test]
    async fn test_update_overwrites_row() {
        let backend = setup_backend().await;

        let mut customer = backend
            .save_customer(&Customer::new("박진희", "01022223333"))
            .await
            .unwrap();
        customer.name = "이영희".to_string();
        customer.tel = "01099998888".to_string();

        let updated = backend.save_customer(&customer).await.unwrap();
        assert_eq!(updated, customer);

        let found = backend
            .find_customer_by_id(customer.id.unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "이영희");
        assert_eq!(found.tel, "01099998888");
    }

    #[tokio::test]
    async fn test_update_of_missing_row_is_not_found() {
        let backend = setup_backend().await;

        let result = backend
            .save_customer(&Customer::with_id(4242, "박진희", "01022223333"))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete() {
        let backend = setup_backend().await;

        let customer = backend
            .save_customer(&Customer::new("박진희", "01022223333"))
            .await
            .unwrap();

        assert!(backend.delete_customer(&customer).await.unwrap());
        assert_eq!(
            backend.find_customer_by_id(customer.id.unwrap()).await.unwrap(),
            None
        );

        // Already gone, and never stored
        assert!(!backend.delete_customer(&customer).await.unwrap());
        assert!(!backend
            .delete_customer(&Customer::new("박진희", "01022223333"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_find_all_pages_and_sorts() {
        let backend = setup_backend().await;

        for (name, tel) in [
            ("가", "01000000001"),
            ("나", "01000000002"),
            ("다", "01000000003"),
            ("라", "01000000004"),
            ("마", "01000000005"),
        ] {
            backend.save_customer(&Customer::new(name, tel)).await.unwrap();
        }

        let (first_page, total) = backend
            .find_all_customers(&PageRequest::of_size(2))
            .await
            .unwrap();
        assert_eq!(total, 5);
        assert_eq!(first_page.len(), 2);
        assert_eq!(first_page[0].name, "가");

        let (last_page, _) = backend
            .find_all_customers(&PageRequest::new(2, 2, vec![]))
            .await
            .unwrap();
        assert_eq!(last_page.len(), 1);
        assert_eq!(last_page[0].name, "마");

        let descending = PageRequest::new(
            0,
            10,
            vec![SortSpec::new("id".to_string(), SortOrder::Descending)],
        );
        let (all, _) = backend.find_all_customers(&descending).await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].name, "마");
        assert_eq!(all[4].name, "가");
    }

    #[tokio::test]
    async fn test_column_constraint_surfaces_as_database_error() {
        let backend = setup_backend().await;

        let result = backend
            .save_customer(&Customer::new("a".repeat(101), "01022223333"))
            .await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_config() {
        let config = DatabaseBackendConfig::sqlite("mysql://nope");
        assert!(matches!(
            SqliteBackend::connect(&config).await,
            Err(AppError::Configuration(_))
        ));
    }
}
