//! Category handlers: list all, list questions in one.

use super::parse_id;
use crate::error::AppError;
use crate::pagination::PageQuery;
use crate::service::TriviaService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::categories(state.store.as_ref()).await?;
    Ok(Json(body))
}

/// GET /categories/:id/questions?page=N
pub async fn category_questions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(page): Query<PageQuery>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::questions_in_category(state.store.as_ref(), parse_id(&id)?, page.page()).await?;
    Ok(Json(body))
}
