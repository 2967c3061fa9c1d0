use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::customer_save::CustomerSaver;
use super::customer_read_impl::customer_from_row;
use super::schema::CUSTOMER_TABLE;
use crate::error::{AppError, AppResult};
use crate::models::Customer;

/// SQLite-specific implementation of CustomerSaver
pub struct SqliteCustomerSaver {
    pool: SqlitePool,
}

impl SqliteCustomerSaver {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerSaver for SqliteCustomerSaver {
    async fn execute_customer_insert(&self, name: &str, tel: &str) -> AppResult<Customer> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Failed to start transaction: {}", e)))?;

        let sql = format!(
            "INSERT INTO {} (name, tel) VALUES (?1, ?2) RETURNING id, name, tel",
            CUSTOMER_TABLE
        );

        let row = sqlx::query(&sql)
            .bind(name)
            .bind(tel)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert customer: {}", e)))?;

        let customer = customer_from_row(&row)?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Failed to commit transaction: {}", e)))?;

        Ok(customer)
    }

    async fn execute_customer_update(
        &self,
        id: i64,
        name: &str,
        tel: &str,
    ) -> AppResult<Option<Customer>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Failed to start transaction: {}", e)))?;

        let sql = format!(
            "UPDATE {} SET name = ?1, tel = ?2 WHERE id = ?3 RETURNING id, name, tel",
            CUSTOMER_TABLE
        );

        let row = sqlx::query(&sql)
            .bind(name)
            .bind(tel)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Failed to update customer: {}", e)))?;

        let customer = row.as_ref().map(customer_from_row).transpose()?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Failed to commit transaction: {}", e)))?;

        Ok(customer)
    }
}
