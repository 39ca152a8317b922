use serde::Deserialize;

use crate::domain::product::{NewProduct, UpdateProduct};

/// JSON body accepted by `POST /api/products`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductForm {
    pub product_name: String,
    pub price_cents: i64,
    /// Falls back to the default stock level when omitted.
    #[serde(default)]
    pub stock: Option<i32>,
    pub category_id: i32,
    /// Tags to attach to the new product.
    #[serde(default, rename = "tagIds")]
    pub tag_ids: Vec<i32>,
}

impl CreateProductForm {
    /// Split the body into the product row payload and the requested tag ids.
    pub fn into_new_product(self) -> (NewProduct, Vec<i32>) {
        let mut product = NewProduct::new(self.product_name, self.price_cents, self.category_id);
        if let Some(stock) = self.stock {
            product = product.with_stock(stock);
        }
        (product, self.tag_ids)
    }
}

/// JSON body accepted by `PUT /api/products/{id}`.
///
/// Every product field is optional. `tagIds`, when present, is the complete
/// set of tags the product should carry afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductForm {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default, rename = "tagIds")]
    pub tag_ids: Option<Vec<i32>>,
}

impl UpdateProductForm {
    /// Split the body into the row patch and the desired tag set, if any.
    pub fn into_update_product(self) -> (UpdateProduct, Option<Vec<i32>>) {
        let mut updates = UpdateProduct::new();
        if let Some(name) = self.product_name {
            updates = updates.product_name(name);
        }
        if let Some(price_cents) = self.price_cents {
            updates = updates.price_cents(price_cents);
        }
        if let Some(stock) = self.stock {
            updates = updates.stock(stock);
        }
        if let Some(category_id) = self.category_id {
            updates = updates.category_id(category_id);
        }
        (updates, self.tag_ids)
    }
}
