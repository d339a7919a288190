//! Question records and creation input validation
//!
//! Creation requires all four fields present and non-blank. Presence problems
//! are reported before type problems so the handler can map them differently.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::ValidationError;

/// A quiz item as stored and as sent to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Validated input for inserting a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Materialize the stored row once the store has assigned an id.
    pub fn with_id(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Raw `POST /questions` body. Every field is optional here so that an empty
/// object still deserializes and fails validation instead of extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<Value>,
    pub answer: Option<Value>,
    pub difficulty: Option<Value>,
    pub category: Option<Value>,
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ValidationError;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        let question = present("question", req.question)?;
        let answer = present("answer", req.answer)?;
        let difficulty = present("difficulty", req.difficulty)?;
        let category = present("category", req.category)?;

        Ok(Self {
            question: text_field("question", question)?,
            answer: text_field("answer", answer)?,
            difficulty: int_field("difficulty", &difficulty)?,
            category: int_field("category", &category)?,
        })
    }
}

/// Reject absent, null and blank-string values.
fn present(field: &'static str, value: Option<Value>) -> Result<Value, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::Missing { field }),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ValidationError::Empty { field }),
        Some(v) => Ok(v),
    }
}

fn text_field(field: &'static str, value: Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(ValidationError::InvalidType {
            field,
            expected: "a string",
        }),
    }
}

/// Accept a JSON integer or a string holding one (form clients send `"3"`).
pub(crate) fn int_field(field: &'static str, value: &Value) -> Result<i32, ValidationError> {
    let invalid = ValidationError::InvalidType {
        field,
        expected: "an integer",
    };
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or(invalid),
        Value::String(s) => s.trim().parse::<i32>().map_err(|_| invalid),
        _ => Err(invalid),
    }
}
