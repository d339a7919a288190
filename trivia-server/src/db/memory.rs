//! In-process [`TriviaStore`] for tests and `--in-memory` development runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{DbError, TriviaStore};
use crate::models::{Category, NewQuestion, Question};

#[derive(Debug, Default)]
struct MemoryInner {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    next_category_id: i32,
    next_question_id: i32,
}

impl MemoryInner {
    fn filtered<F>(&self, keep: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        self.questions.values().filter(|q| keep(q)).cloned().collect()
    }
}

/// Store backed by ordered maps behind an async `RwLock`.
///
/// Ids are generated from counters starting at 1, like a `SERIAL` column.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-filled with categories (by type) and questions.
    pub fn with_data<I, Q>(categories: I, questions: Q) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        Q: IntoIterator<Item = NewQuestion>,
    {
        let mut inner = MemoryInner::default();
        for kind in categories {
            inner.next_category_id += 1;
            let id = inner.next_category_id;
            inner.categories.insert(
                id,
                Category {
                    id,
                    kind: kind.into(),
                },
            );
        }
        for new in questions {
            inner.next_question_id += 1;
            let id = inner.next_question_id;
            inner.questions.insert(id, new.with_id(id));
        }
        Self {
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.inner.read().await.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, DbError> {
        Ok(self.inner.read().await.categories.get(&id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        Ok(self.inner.read().await.questions.values().cloned().collect())
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        Ok(self.inner.read().await.filtered(|q| q.category == category))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let needle = term.to_lowercase();
        Ok(self
            .inner
            .read()
            .await
            .filtered(|q| q.question.to_lowercase().contains(&needle)))
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError> {
        Ok(self.inner.read().await.questions.get(&id).cloned())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let mut inner = self.inner.write().await;
        inner.next_question_id += 1;
        let question = new.with_id(inner.next_question_id);
        inner.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        self.inner
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::question_not_found(id))
    }

    async fn count_questions(&self) -> Result<i64, DbError> {
        Ok(self.inner.read().await.questions.len() as i64)
    }

    async fn quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        Ok(self.inner.read().await.filtered(|q| {
            category.map_or(true, |c| q.category == c) && !exclude.contains(&q.id)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i32) -> NewQuestion {
        NewQuestion {
            question: text.into(),
            answer: "answer".into(),
            category,
            difficulty: 1,
        }
    }

    fn seeded() -> MemoryStore {
        MemoryStore::with_data(
            ["Science", "Art"],
            [
                new_question("What is H2O?", 1),
                new_question("Who painted the Royal portrait?", 2),
                new_question("Speed of light?", 1),
            ],
        )
    }

    #[tokio::test]
    async fn ids_are_sequential() {
        let store = seeded();
        let ids: Vec<i32> = store
            .list_questions()
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let created = store.insert_question(new_question("New?", 2)).await.unwrap();
        assert_eq!(created.id, 4);

        let category_ids: Vec<i32> = store
            .list_categories()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(category_ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = seeded();
        store.delete_question(3).await.unwrap();
        let created = store.insert_question(new_question("Again?", 1)).await.unwrap();
        assert_eq!(created.id, 4);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = seeded();
        let err = store.delete_question(999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "question", .. }));
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let store = seeded();
        let found = store.search_questions("royal").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[tokio::test]
    async fn category_filter() {
        let store = seeded();
        let science = store.questions_in_category(1).await.unwrap();
        assert_eq!(science.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(store.questions_in_category(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn quiz_candidates_respect_scope_and_exclusions() {
        let store = seeded();
        let all = store.quiz_candidates(None, &[2]).await.unwrap();
        assert_eq!(all.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 3]);

        let science = store.quiz_candidates(Some(1), &[1]).await.unwrap();
        assert_eq!(science.iter().map(|q| q.id).collect::<Vec<_>>(), vec![3]);

        assert!(store.quiz_candidates(Some(1), &[1, 3]).await.unwrap().is_empty());
    }
}
