//! Quiz endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{pick_question, Question, QuizRequest};

#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// `null` once every candidate has been seen
    pub question: Option<Question>,
}

/// POST /quizzes - next random unseen question
///
/// Every failure here, including a malformed body, answers 422.
async fn play_quiz(
    State(state): State<Arc<AppState>>,
    body: Result<JsonBody<QuizRequest>, ApiError>,
) -> Result<Json<QuizResponse>, ApiError> {
    let JsonBody(req) = body.map_err(|e| ApiError::unprocessable(format!("{:?}", e)))?;
    let scope = req.scope().map_err(ApiError::unprocessable)?;

    let candidates = state
        .store
        .quiz_candidates(scope.category(), req.previous())
        .await
        .map_err(ApiError::store_unprocessable)?;

    let question = pick_question(&candidates, &mut rand::thread_rng());
    tracing::debug!(
        ?scope,
        candidates = candidates.len(),
        picked = question.as_ref().map(|q| q.id),
        "quiz question"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(play_quiz))
}
