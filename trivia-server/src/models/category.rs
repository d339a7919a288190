//! Category records and the id → type mapping sent to clients

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A labeled grouping for questions (e.g. "Science")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Categories keyed by id, serialized as a JSON object (`{"1": "Science"}`).
pub type CategoryMap = BTreeMap<i32, String>;

/// Build the id → type mapping from a list of categories.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
