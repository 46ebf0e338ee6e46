//! Startup DDL for the trivia tables.

use crate::error::AppError;
use sqlx::PgPool;

/// The category set the trivia frontend ships with.
pub const DEFAULT_CATEGORIES: &[&str] = &["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

const CATEGORIES_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS categories (
        id BIGSERIAL PRIMARY KEY,
        "type" TEXT NOT NULL
    )
"#;

// category is deliberately not a foreign key; the service checks it on insert
const QUESTIONS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS questions (
        id BIGSERIAL PRIMARY KEY,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        category BIGINT NOT NULL,
        difficulty BIGINT NOT NULL
    )
"#;

/// Create the tables if they are missing. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in [CATEGORIES_DDL, QUESTIONS_DDL] {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("trivia schema ready");
    Ok(())
}

/// Insert [`DEFAULT_CATEGORIES`] when the table is empty. Returns how many rows were written.
pub async fn seed_categories(pool: &PgPool) -> Result<u64, AppError> {
    let mut tx = pool.begin().await?;
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::debug!(existing, "categories already present, skipping seed");
        return Ok(0);
    }
    let mut count = 0u64;
    for kind in DEFAULT_CATEGORIES {
        sqlx::query(r#"INSERT INTO categories ("type") VALUES ($1)"#)
            .bind(*kind)
            .execute(&mut *tx)
            .await?;
        count += 1;
    }
    tx.commit().await?;
    tracing::info!(count, "seeded categories");
    Ok(count)
}
