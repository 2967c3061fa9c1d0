//! Mock backend for isolating services and handlers from storage in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::backend::{Backend, CustomerBackend};
use crate::error::AppResult;
use crate::models::Customer;
use crate::parser::PageRequest;

mock! {
    pub CustomerStore {}

    #[async_trait]
    impl Backend for CustomerStore {
        async fn health_check(&self) -> AppResult<()>;
        async fn init_schema(&self) -> AppResult<()>;
        async fn cleanup(&self) -> AppResult<()>;
    }

    #[async_trait]
    impl CustomerBackend for CustomerStore {
        async fn find_customer_by_id(&self, id: i64) -> AppResult<Option<Customer>>;
        async fn find_all_customers(&self, request: &PageRequest) -> AppResult<(Vec<Customer>, i64)>;
        async fn save_customer(&self, customer: &Customer) -> AppResult<Customer>;
        async fn delete_customer(&self, customer: &Customer) -> AppResult<bool>;
    }
}
