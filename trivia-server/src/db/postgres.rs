//! Postgres adapter for [`TriviaStore`]
//!
//! Plain runtime-checked sqlx queries over the shared pool; each call
//! acquires a pooled connection for the duration of one statement.

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{DbError, TriviaStore};
use crate::models::{Category, NewQuestion, Question};

/// sqlx-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Wrap `term` as an ILIKE pattern, escaping the LIKE metacharacters so the
/// match stays a literal substring search.
pub(crate) fn substring_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, DbError> {
        let row = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(substring_pattern(term))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError> {
        let row = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let row = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::question_not_found(id));
        }
        Ok(())
    }

    async fn count_questions(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::INTEGER IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#,
        )
        .bind(category)
        .bind(exclude)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
