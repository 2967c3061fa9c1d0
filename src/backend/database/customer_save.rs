use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::Customer;

/// Database-specific adapter for customer INSERT/UPDATE operations
///
/// Each call runs in its own transaction.
#[async_trait]
pub trait CustomerSaver: Send + Sync {
    /// Insert a new row and return it with the generated ID
    async fn execute_customer_insert(&self, name: &str, tel: &str) -> AppResult<Customer>;

    /// Overwrite the row with the given ID, returning `None` if no row matched
    async fn execute_customer_update(
        &self,
        id: i64,
        name: &str,
        tel: &str,
    ) -> AppResult<Option<Customer>>;
}

/// Unified customer save operations using the adapter pattern
pub struct UnifiedCustomerSaveOps<T: CustomerSaver> {
    saver: T,
}

impl<T: CustomerSaver> UnifiedCustomerSaveOps<T> {
    pub fn new(saver: T) -> Self {
        Self { saver }
    }

    /// Insert when the customer has no ID yet, otherwise update in place
    pub async fn save_customer(&self, customer: &Customer) -> AppResult<Customer> {
        match customer.id {
            None => {
                self.saver
                    .execute_customer_insert(&customer.name, &customer.tel)
                    .await
            }
            Some(id) => self
                .saver
                .execute_customer_update(id, &customer.name, &customer.tel)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Customer {} no longer exists", id))),
        }
    }
}
