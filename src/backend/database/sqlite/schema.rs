use crate::error::{AppError, AppResult};
use crate::models::{NAME_COLUMN_LENGTH, TEL_COLUMN_LENGTH};
use sqlx::SqlitePool;

pub const CUSTOMER_TABLE: &str = "customer";

/// Initialize the customer table for SQLite
///
/// SQLite ignores declared VARCHAR lengths, so the column caps are enforced
/// with CHECK constraints.
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    let customer_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR({name_len}) NOT NULL CHECK (length(name) <= {name_len}),
            tel VARCHAR({tel_len}) NOT NULL CHECK (length(tel) <= {tel_len})
        )
        "#,
        table = CUSTOMER_TABLE,
        name_len = NAME_COLUMN_LENGTH,
        tel_len = TEL_COLUMN_LENGTH,
    );

    sqlx::query(&customer_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create customer table: {}", e)))?;

    Ok(())
}

/// Drop the customer table (for cleanup/testing)
pub async fn drop_schema(pool: &SqlitePool) -> AppResult<()> {
    let sql = format!("DROP TABLE IF EXISTS {}", CUSTOMER_TABLE);
    sqlx::query(&sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to drop table {}: {}", CUSTOMER_TABLE, e)))?;

    Ok(())
}
