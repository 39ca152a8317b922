use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{category::Category, tag::Tag};

/// Stock level assigned when a product is created without one.
pub const DEFAULT_STOCK: i32 = 10;

/// Domain representation of a product row.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub product_name: String,
    /// Price represented in the smallest currency unit (for example cents).
    pub price_cents: i64,
    /// Units currently in stock.
    pub stock: i32,
    /// Identifier of the category the product belongs to.
    pub category_id: i32,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// A product joined with its category and tags.
#[derive(Debug, Serialize, Clone)]
pub struct ProductDetails {
    #[serde(flatten)]
    pub product: Product,
    /// Owning category; `None` only if the row vanished between queries.
    pub category: Option<Category>,
    /// Tags attached through the product_tags association.
    #[serde(rename = "product_tags")]
    pub tags: Vec<Tag>,
}

impl ProductDetails {
    /// Identifiers of the attached tags, in load order.
    pub fn tag_ids(&self) -> Vec<i32> {
        self.tags.iter().map(|tag| tag.id).collect()
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub product_name: String,
    /// Price represented in the smallest currency unit.
    pub price_cents: i64,
    /// Units in stock.
    pub stock: i32,
    /// Identifier of the owning category.
    pub category_id: i32,
}

impl NewProduct {
    /// Build a new product payload with the default stock level.
    pub fn new(product_name: impl Into<String>, price_cents: i64, category_id: i32) -> Self {
        Self {
            product_name: product_name.into(),
            price_cents,
            stock: DEFAULT_STOCK,
            category_id,
        }
    }

    /// Override the initial stock level.
    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProduct {
    /// Optional name update.
    pub product_name: Option<String>,
    /// Optional price update in the smallest currency unit.
    pub price_cents: Option<i64>,
    /// Optional stock update.
    pub stock: Option<i32>,
    /// Optional move to another category.
    pub category_id: Option<i32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            product_name: None,
            price_cents: None,
            stock: None,
            category_id: None,
            updated_at: now,
        }
    }

    /// Update the product name.
    pub fn product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    /// Update the product price.
    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    /// Update the stock level.
    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Move the product to another category.
    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }
}
