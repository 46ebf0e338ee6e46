//! Question handlers: paginated list, create, delete, search.

use super::parse_id;
use crate::error::AppError;
use crate::model::SearchRequest;
use crate::pagination::PageQuery;
use crate::service::TriviaService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

pub async fn list_questions(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::questions(state.store.as_ref(), page.page()).await?;
    Ok(Json(body))
}

pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::delete_question(state.store.as_ref(), parse_id(&id)?).await?;
    Ok(Json(body))
}

// Body stays loose so a missing or mistyped field is a 422 from validation, not a rejection.
pub async fn create_question(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::create_question(state.store.as_ref(), &body).await?;
    Ok(Json(body))
}

pub async fn search_questions(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Json(body): Json<SearchRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::search(state.store.as_ref(), body.search_term.as_deref(), page.page()).await?;
    Ok(Json(body))
}
