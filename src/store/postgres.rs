//! PostgreSQL-backed store.

use super::TriviaStore;
use crate::error::AppError;
use crate::model::{Category, NewQuestion, Question};
use crate::selector::QuestionFilter;
use crate::sql::{
    bind_all, delete_question, insert_question, select_categories, select_category_by_id,
    select_question_by_id, select_questions,
};
use async_trait::async_trait;
use sqlx::PgPool;

type QuestionRow = (i64, String, String, i64, i64);

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, AppError> {
        let q = select_categories();
        tracing::debug!(sql = %q.sql, "query");
        let rows: Vec<(i64, String)> = sqlx::query_as(&q.sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(|(id, kind)| Category { id, kind }).collect())
    }

    async fn category(&self, id: i64) -> Result<Option<Category>, AppError> {
        let q = select_category_by_id();
        tracing::debug!(sql = %q.sql, id, "query");
        let row: Option<(i64, String)> = sqlx::query_as(&q.sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(id, kind)| Category { id, kind }))
    }

    async fn questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, AppError> {
        let q = select_questions(filter);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows: Vec<QuestionRow> = bind_all(sqlx::query_as(&q.sql), &q.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn question(&self, id: i64) -> Result<Option<Question>, AppError> {
        let q = select_question_by_id();
        tracing::debug!(sql = %q.sql, id, "query");
        let row: Option<QuestionRow> = sqlx::query_as(&q.sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Question::from))
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, AppError> {
        let q = insert_question();
        tracing::debug!(sql = %q.sql, "query");
        let row: QuestionRow = sqlx::query_as(&q.sql)
            .bind(&new.question)
            .bind(&new.answer)
            .bind(new.category)
            .bind(new.difficulty)
            .fetch_one(&self.pool)
            .await?;
        Ok(Question::from(row))
    }

    async fn delete_question(&self, id: i64) -> Result<bool, AppError> {
        let q = delete_question();
        tracing::debug!(sql = %q.sql, id, "query");
        let deleted: Option<(i64,)> = sqlx::query_as(&q.sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted.is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
