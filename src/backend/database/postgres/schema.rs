use crate::error::{AppError, AppResult};
use crate::models::{NAME_COLUMN_LENGTH, TEL_COLUMN_LENGTH};
use sqlx::PgPool;

pub const CUSTOMER_TABLE: &str = "customer";

/// Initialize the customer table for PostgreSQL
pub async fn init_schema(pool: &PgPool) -> AppResult<()> {
    let customer_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR({}) NOT NULL,
            tel VARCHAR({}) NOT NULL
        )
        "#,
        CUSTOMER_TABLE, NAME_COLUMN_LENGTH, TEL_COLUMN_LENGTH
    );

    sqlx::query(&customer_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create customer table: {}", e)))?;

    let comments = [
        format!("COMMENT ON COLUMN {}.name IS '이름'", CUSTOMER_TABLE),
        format!("COMMENT ON COLUMN {}.tel IS '전화번호'", CUSTOMER_TABLE),
    ];

    for sql in comments.iter() {
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to comment column: {}", e)))?;
    }

    Ok(())
}

/// Drop the customer table (for cleanup/testing)
pub async fn drop_schema(pool: &PgPool) -> AppResult<()> {
    let sql = format!("DROP TABLE IF EXISTS {}", CUSTOMER_TABLE);
    sqlx::query(&sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to drop table {}: {}", CUSTOMER_TABLE, e)))?;

    Ok(())
}
