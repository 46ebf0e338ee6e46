//! Endpoint logic: pick the filter, read the store, shape the envelope.

use crate::error::AppError;
use crate::model::{category_map, QuizRequest};
use crate::pagination::paginate;
use crate::response::{
    category_list, created, deleted, quiz_question, CategoryList, Created, Deleted, QuestionPage,
    QuizQuestion, ALL_CATEGORIES,
};
use crate::selector::{pick_random, QuestionFilter};
use crate::service::RequestValidator;
use crate::store::TriviaStore;
use serde_json::Value;

pub struct TriviaService;

impl TriviaService {
    /// All categories; an empty table is a 404.
    pub async fn categories(store: &dyn TriviaStore) -> Result<CategoryList, AppError> {
        let categories = store.categories().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("no categories".into()));
        }
        Ok(category_list(category_map(categories)))
    }

    /// One page of every question. A page with nothing on it is a 404.
    pub async fn questions(store: &dyn TriviaStore, page: i64) -> Result<QuestionPage, AppError> {
        let selection = store.questions(&QuestionFilter::All).await?;
        let current = paginate(&selection, page);
        if current.is_empty() {
            return Err(AppError::NotFound(format!("page {}", page)));
        }
        let categories = category_map(store.categories().await?);
        Ok(QuestionPage::new(current, selection.len(), ALL_CATEGORIES).with_categories(categories))
    }

    pub async fn delete_question(store: &dyn TriviaStore, id: i64) -> Result<Deleted, AppError> {
        if !store.delete_question(id).await? {
            return Err(AppError::UnknownQuestion(id));
        }
        tracing::info!(id, "question deleted");
        Ok(deleted(id))
    }

    /// Validate and insert. The referenced category has to exist.
    pub async fn create_question(store: &dyn TriviaStore, body: &Value) -> Result<Created, AppError> {
        let new = RequestValidator::new_question(body)?;
        if store.category(new.category).await?.is_none() {
            return Err(AppError::Validation(format!("category {} does not exist", new.category)));
        }
        let question = store.insert_question(&new).await?;
        tracing::info!(id = question.id, category = question.category, "question created");
        Ok(created(question.id))
    }

    /// Substring search. Never a 404: no match is an empty page.
    pub async fn search(
        store: &dyn TriviaStore,
        search_term: Option<&str>,
        page: i64,
    ) -> Result<QuestionPage, AppError> {
        let term = RequestValidator::search_term(search_term)?;
        let selection = store.questions(&QuestionFilter::Search(term)).await?;
        Ok(QuestionPage::new(paginate(&selection, page), selection.len(), ALL_CATEGORIES))
    }

    pub async fn questions_in_category(
        store: &dyn TriviaStore,
        category_id: i64,
        page: i64,
    ) -> Result<QuestionPage, AppError> {
        let category = store
            .category(category_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("category {}", category_id)))?;
        let selection = store.questions(&QuestionFilter::Category(category.id)).await?;
        Ok(QuestionPage::new(paginate(&selection, page), selection.len(), category.kind))
    }

    /// Random unused question from the chosen category (0 = any). No candidates left is a 422.
    pub async fn next_quiz_question(
        store: &dyn TriviaStore,
        request: QuizRequest,
    ) -> Result<QuizQuestion, AppError> {
        let category = request
            .quiz_category
            .ok_or_else(|| AppError::Validation("quiz_category is required".into()))?;
        let filter = QuestionFilter::quiz(category.id, request.previous_questions);
        let candidates = store.questions(&filter).await?;
        let next = pick_random(&candidates, &mut rand::thread_rng())
            .cloned()
            .ok_or(AppError::QuizExhausted(category.id))?;
        Ok(quiz_question(next))
    }
}
