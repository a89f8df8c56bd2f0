use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `category` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// A category that has not been persisted yet; `id` is assigned on save
    pub fn unsaved(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}
