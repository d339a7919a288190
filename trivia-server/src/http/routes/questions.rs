//! Question endpoints
//!
//! Listing, creation, deletion and search. Each mutating handler answers with
//! the refreshed page so the client can redraw without a second request.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PageQuery, ValidId};
use crate::http::server::AppState;
use crate::models::{category_map, CategoryMap, CreateQuestionRequest, NewQuestion, Question};

/// Paginated question listing with the category mapping
#[derive(Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Always an empty object; the listing is not scoped to a category
    pub current_category: Map<String, Value>,
    pub categories: CategoryMap,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub created: i32,
    pub question_created: String,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// Search request
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// GET /questions - one page of all questions
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let selection = state.store.list_questions().await?;
    let questions = page.paginate(&selection);
    if questions.is_empty() {
        return Err(ApiError::not_found(format!("page {} is empty", page.page)));
    }

    let categories = state.store.list_categories().await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions: selection.len(),
        current_category: Map::new(),
        categories: category_map(&categories),
    }))
}

/// DELETE /questions/{id}
///
/// Both a missing id and a store failure answer 422.
async fn delete_question(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    PageQuery(page): PageQuery,
) -> Result<Json<DeleteResponse>, ApiError> {
    let store = &state.store;

    let existing = store
        .get_question(id)
        .await
        .map_err(ApiError::store_unprocessable)?;
    if existing.is_none() {
        return Err(ApiError::unprocessable(format!("question '{}' does not exist", id)));
    }

    store
        .delete_question(id)
        .await
        .map_err(ApiError::store_unprocessable)?;
    tracing::info!(id, "question deleted");

    let selection = store
        .list_questions()
        .await
        .map_err(ApiError::store_unprocessable)?;
    let total_questions = store
        .count_questions()
        .await
        .map_err(ApiError::store_unprocessable)?;

    Ok(Json(DeleteResponse {
        success: true,
        deleted: id,
        questions: page.paginate(&selection),
        total_questions,
    }))
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
    JsonBody(req): JsonBody<CreateQuestionRequest>,
) -> Result<Json<CreateResponse>, ApiError> {
    let new = NewQuestion::try_from(req)?;
    let store = &state.store;

    let question = store
        .insert_question(new)
        .await
        .map_err(ApiError::store_unprocessable)?;
    tracing::info!(id = question.id, "question created");

    let selection = store
        .list_questions()
        .await
        .map_err(ApiError::store_unprocessable)?;
    let total_questions = store
        .count_questions()
        .await
        .map_err(ApiError::store_unprocessable)?;

    Ok(Json(CreateResponse {
        success: true,
        created: question.id,
        question_created: question.question,
        questions: page.paginate(&selection),
        total_questions,
    }))
}

/// POST /questions/search - case-insensitive substring search
///
/// A missing or empty `searchTerm` is a bad request. No matches is still a
/// success with an empty list.
async fn search_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = req
        .search_term
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("searchTerm is required"))?;

    let selection = state
        .store
        .search_questions(&term)
        .await
        .map_err(ApiError::store_not_found)?;
    tracing::debug!(term = %term, matches = selection.len(), "question search");

    Ok(Json(SearchResponse {
        success: true,
        questions: page.paginate(&selection),
        total_questions: selection.len(),
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
