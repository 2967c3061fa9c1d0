use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::super::customer_read::CustomerReader;
use super::schema::CUSTOMER_TABLE;
use crate::error::{AppError, AppResult};
use crate::models::Customer;

/// PostgreSQL-specific implementation of CustomerReader
pub struct PostgresCustomerReader {
    pool: PgPool,
}

impl PostgresCustomerReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn customer_from_row(row: &PgRow) -> AppResult<Customer> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| AppError::Database(format!("Failed to read id column: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| AppError::Database(format!("Failed to read name column: {}", e)))?;
    let tel: String = row
        .try_get("tel")
        .map_err(|e| AppError::Database(format!("Failed to read tel column: {}", e)))?;

    Ok(Customer::with_id(id, name, tel))
}

#[async_trait]
impl CustomerReader for PostgresCustomerReader {
    async fn find_customer_by_id(&self, id: i64) -> AppResult<Option<Customer>> {
        let sql = format!("SELECT id, name, tel FROM {} WHERE id = $1", CUSTOMER_TABLE);

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to find customer: {}", e)))?;

        row.as_ref().map(customer_from_row).transpose()
    }

    async fn find_customer_page(
        &self,
        order_by: &str,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Customer>> {
        let sql = format!(
            "SELECT id, name, tel FROM {}{} LIMIT $1 OFFSET $2",
            CUSTOMER_TABLE, order_by
        );

        let rows = sqlx::query(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to list customers: {}", e)))?;

        rows.iter().map(customer_from_row).collect()
    }

    async fn count_customers(&self) -> AppResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", CUSTOMER_TABLE);

        let (count,): (i64,) = sqlx::query_as(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to count customers: {}", e)))?;

        Ok(count)
    }
}
