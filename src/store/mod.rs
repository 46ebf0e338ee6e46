//! Data access for questions and categories. Handlers only see the [`TriviaStore`] trait.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::AppError;
use crate::model::{Category, NewQuestion, Question};
use crate::selector::QuestionFilter;
use async_trait::async_trait;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, AppError>;

    async fn category(&self, id: i64) -> Result<Option<Category>, AppError>;

    /// Questions matching `filter`, ordered by id.
    async fn questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, AppError>;

    async fn question(&self, id: i64) -> Result<Option<Question>, AppError>;

    /// Insert and return the stored row with its new id.
    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, AppError>;

    /// Returns false when no row had that id.
    async fn delete_question(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
