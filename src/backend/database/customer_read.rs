//! Customer read operations
//!
//! Common interface for customer reads across database backends, plus the
//! ORDER BY construction both engines share.

use crate::error::AppResult;
use crate::models::Customer;
use crate::parser::{PageRequest, SortSpec};
use async_trait::async_trait;

/// Trait for customer read operations
#[async_trait]
pub trait CustomerReader: Send + Sync {
    /// Find a customer by ID
    async fn find_customer_by_id(&self, id: i64) -> AppResult<Option<Customer>>;

    /// Fetch one page of customers in the given order
    async fn find_customer_page(
        &self,
        order_by: &str,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Customer>>;

    /// Count all customers
    async fn count_customers(&self) -> AppResult<i64>;
}

/// Shared logic for customer reads
pub struct CustomerReadProcessor;

impl CustomerReadProcessor {
    /// Map a sortable property to its column
    fn sort_column(spec: &SortSpec) -> Option<&'static str> {
        match spec.attribute.as_str() {
            "id" => Some("id"),
            "name" => Some("name"),
            "tel" => Some("tel"),
            _ => None,
        }
    }

    /// Build the ORDER BY clause for a page request. Listings without a
    /// sort are ordered by id so that paging is stable.
    pub fn build_order_by(sort: &[SortSpec]) -> String {
        let keys: Vec<String> = sort
            .iter()
            .filter_map(|spec| {
                Self::sort_column(spec).map(|column| format!("{} {}", column, spec.order.as_sql()))
            })
            .collect();

        if keys.is_empty() {
            " ORDER BY id ASC".to_string()
        } else {
            format!(" ORDER BY {}", keys.join(", "))
        }
    }
}

/// Unified customer read operations
pub struct UnifiedCustomerReadOps<T: CustomerReader> {
    reader: T,
}

impl<T: CustomerReader> UnifiedCustomerReadOps<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }

    /// Find a customer by ID
    pub async fn find_customer_by_id(&self, id: i64) -> AppResult<Option<Customer>> {
        self.reader.find_customer_by_id(id).await
    }

    /// Find one page of customers and the total count
    pub async fn find_all_customers(
        &self,
        request: &PageRequest,
    ) -> AppResult<(Vec<Customer>, i64)> {
        let order_by = CustomerReadProcessor::build_order_by(&request.sort);
        let customers = self
            .reader
            .find_customer_page(&order_by, request.size, request.offset())
            .await?;
        let total = self.reader.count_customers().await?;
        Ok((customers, total))
    }
}
