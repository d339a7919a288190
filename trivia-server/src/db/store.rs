//! Store port used by the HTTP handlers
//!
//! Handlers only see `dyn TriviaStore`; Postgres and in-memory adapters
//! implement it. Every collection method returns rows ordered by id.

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Question};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub fn question_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "question",
            id: id.to_string(),
        }
    }
}

#[async_trait]
pub trait TriviaStore: Send + Sync + 'static {
    /// All categories, ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, DbError>;

    async fn get_category(&self, id: i32) -> Result<Option<Category>, DbError>;

    /// All questions, ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, DbError>;

    /// Questions whose `category` equals `category`.
    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError>;

    /// Case-insensitive substring match on question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError>;

    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError>;

    /// Insert and return the stored row with its generated id.
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError>;

    /// Delete by id. Returns `DbError::NotFound` when nothing was deleted.
    async fn delete_question(&self, id: i32) -> Result<(), DbError>;

    async fn count_questions(&self) -> Result<i64, DbError>;

    /// Quiz candidates: questions in `category` (or any category when `None`)
    /// whose id is not in `exclude`.
    async fn quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError>;
}
