//! Quiz play: request shape, category scope and random selection

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

use super::question::int_field;
use super::{Question, ValidationError};

/// Category type the web client sends when "All" is selected
pub const ALL_CATEGORIES_SENTINEL: &str = "click";

/// `POST /quizzes` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<i32>>,
}

/// The category picked on the client; `id` may arrive as `3` or `"3"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategory {
    pub id: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i32),
}

impl QuizScope {
    /// Category filter for the store, `None` meaning every category.
    pub fn category(self) -> Option<i32> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(id),
        }
    }
}

impl QuizRequest {
    /// Resolve the requested scope.
    pub fn scope(&self) -> Result<QuizScope, ValidationError> {
        let category = self
            .quiz_category
            .as_ref()
            .ok_or(ValidationError::Missing {
                field: "quiz_category",
            })?;
        let kind = category.kind.as_deref().ok_or(ValidationError::Missing {
            field: "quiz_category.type",
        })?;
        if kind == ALL_CATEGORIES_SENTINEL {
            return Ok(QuizScope::All);
        }

        let id = match &category.id {
            None | Some(Value::Null) => {
                return Err(ValidationError::Missing {
                    field: "quiz_category.id",
                })
            }
            Some(v) => int_field("quiz_category.id", v)?,
        };
        // the client's "All" entry carries id 0
        if id == 0 {
            Ok(QuizScope::All)
        } else {
            Ok(QuizScope::Category(id))
        }
    }

    /// Ids the client has already seen this session.
    pub fn previous(&self) -> &[i32] {
        self.previous_questions.as_deref().unwrap_or_default()
    }
}

/// Pick one candidate uniformly at random.
pub fn pick_question<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}
