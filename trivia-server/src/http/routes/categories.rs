//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, ValidId};
use crate::http::server::AppState;
use crate::models::{category_map, CategoryMap, Question};

/// Category mapping response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// Questions filtered to one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Size of the filtered set, not of the whole table
    pub total_questions: usize,
    pub current_category: String,
}

/// GET /categories - id → type mapping of every category
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.list_categories().await?;
    if categories.is_empty() {
        return Err(ApiError::not_found("no categories"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// GET /categories/{id}/questions - paginated questions of one category
async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    PageQuery(page): PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = state
        .store
        .get_category(id)
        .await
        .map_err(ApiError::store_not_found)?
        .ok_or_else(|| ApiError::not_found(format!("category '{}' not found", id)))?;

    let selection = state
        .store
        .questions_in_category(category.id)
        .await
        .map_err(ApiError::store_not_found)?;
    tracing::debug!(category = category.id, matches = selection.len(), "category questions");

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page.paginate(&selection),
        total_questions: selection.len(),
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
}
