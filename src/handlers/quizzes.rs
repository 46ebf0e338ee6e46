use crate::error::AppError;
use crate::model::QuizRequest;
use crate::service::TriviaService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// POST /quizzes
pub async fn play_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::next_quiz_question(state.store.as_ref(), request).await?;
    Ok(Json(body))
}
