use serde::Deserialize;

use crate::domain::category::{NewCategory, UpdateCategory};

/// JSON body accepted when creating or renaming a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryForm {
    pub category_name: String,
}

impl CategoryForm {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory::new(self.category_name)
    }

    pub fn into_update_category(self) -> UpdateCategory {
        UpdateCategory::new(self.category_name)
    }
}
