use async_trait::async_trait;
use tracing::debug;

use crate::error::AppResult;
use crate::models::Customer;

/// Database-specific adapter for customer DELETE operations
#[async_trait]
pub trait CustomerDeleter: Send + Sync {
    /// Execute customer delete and return whether a row was removed
    async fn execute_customer_delete(&self, id: i64) -> AppResult<bool>;
}

/// Unified customer DELETE operations using the adapter pattern
pub struct UnifiedCustomerDeleteOps<T: CustomerDeleter> {
    deleter: T,
}

impl<T: CustomerDeleter> UnifiedCustomerDeleteOps<T> {
    pub fn new(deleter: T) -> Self {
        Self { deleter }
    }

    /// Delete a customer. A customer that was never stored, or whose row is
    /// already gone, is a no-op.
    pub async fn delete_customer(&self, customer: &Customer) -> AppResult<bool> {
        let Some(id) = customer.id else {
            debug!("Skipping delete of unsaved customer");
            return Ok(false);
        };

        self.deleter.execute_customer_delete(id).await
    }
}
