use async_trait::async_trait;
use sqlx::PgPool;

use super::super::customer_delete::CustomerDeleter;
use super::schema::CUSTOMER_TABLE;
use crate::error::{AppError, AppResult};

/// PostgreSQL-specific implementation of CustomerDeleter
pub struct PostgresCustomerDeleter {
    pool: PgPool,
}

impl PostgresCustomerDeleter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerDeleter for PostgresCustomerDeleter {
    async fn execute_customer_delete(&self, id: i64) -> AppResult<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Failed to start transaction: {}", e)))?;

        let sql = format!("DELETE FROM {} WHERE id = $1", CUSTOMER_TABLE);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete customer: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Failed to commit transaction: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
