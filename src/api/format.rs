use serde::{Deserialize, Serialize};

use crate::database::models::category::Category;

/// Public wire format of a category, decoupled from the table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

pub fn to_category_response(category: Category) -> CategoryResponse {
    CategoryResponse {
        id: category.id,
        name: category.name,
    }
}

pub fn to_categories_response(categories: Vec<Category>) -> Vec<CategoryResponse> {
    categories.into_iter().map(to_category_response).collect()
}
