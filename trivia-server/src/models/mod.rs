//! Domain models with validation at construction
//!
//! Request bodies are checked when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod question;
pub mod quiz;
pub mod pagination;

pub use validation::ValidationError;
pub use category::{category_map, Category, CategoryMap};
pub use question::{CreateQuestionRequest, NewQuestion, Question};
pub use quiz::{pick_question, QuizCategory, QuizRequest, QuizScope, ALL_CATEGORIES_SENTINEL};
pub use pagination::{Pagination, PaginationParams, QUESTIONS_PER_PAGE};
