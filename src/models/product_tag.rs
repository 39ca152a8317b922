use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_tag::{
    NewProductTag as DomainNewProductTag, ProductTag as DomainProductTag,
};

/// A `product_tags` row linking one product to one tag.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_tags)]
pub struct ProductTag {
    pub id: i32,
    pub product_id: i32,
    pub tag_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable association; timestamps come from the column defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Insertable)]
#[diesel(table_name = crate::schema::product_tags)]
pub struct NewProductTag {
    pub product_id: i32,
    pub tag_id: i32,
}

impl NewProductTag {
    /// Converts a reconciliation batch into insertable rows, preserving order.
    pub fn batch(rows: &[DomainNewProductTag]) -> Vec<Self> {
        rows.iter().map(Self::from).collect()
    }
}

impl From<ProductTag> for DomainProductTag {
    fn from(row: ProductTag) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            tag_id: row.tag_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<&DomainNewProductTag> for NewProductTag {
    fn from(pairing: &DomainNewProductTag) -> Self {
        Self {
            product_id: pairing.product_id,
            tag_id: pairing.tag_id,
        }
    }
}
