use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation linking a product to a tag record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductTag {
    /// Unique identifier of the product-tag association.
    pub id: i32,
    /// Identifier of the product the tag is attached to.
    pub product_id: i32,
    /// Identifier of the referenced tag record.
    pub tag_id: i32,
    /// Timestamp for when the association was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the association.
    pub updated_at: NaiveDateTime,
}

/// Payload required to associate an existing tag with a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NewProductTag {
    /// Identifier of the product receiving the tag.
    pub product_id: i32,
    /// Identifier of the tag being attached to the product.
    pub tag_id: i32,
}

impl NewProductTag {
    /// Construct a new association payload between a product and a tag.
    pub fn new(product_id: i32, tag_id: i32) -> Self {
        Self { product_id, tag_id }
    }

    /// One association per distinct tag id, keeping the first occurrence's position.
    pub fn for_product(product_id: i32, tag_ids: &[i32]) -> Vec<Self> {
        let mut seen = Vec::with_capacity(tag_ids.len());
        for tag_id in tag_ids {
            if !seen.contains(tag_id) {
                seen.push(*tag_id);
            }
        }
        seen.into_iter()
            .map(|tag_id| Self::new(product_id, tag_id))
            .collect()
    }
}

/// Changes needed to bring a product's associations in line with a desired tag set.
///
/// Associations whose tag is in both sets are neither removed nor re-created,
/// so their ids and timestamps survive the update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSyncPlan {
    /// Associations to create for tags not attached yet.
    pub to_add: Vec<NewProductTag>,
    /// Ids of association rows whose tag is no longer wanted.
    pub to_remove: Vec<i32>,
}

impl TagSyncPlan {
    /// Diff the `existing` associations of `product_id` against `desired` tag ids.
    pub fn diff(product_id: i32, existing: &[ProductTag], desired: &[i32]) -> Self {
        let to_add = NewProductTag::for_product(product_id, desired)
            .into_iter()
            .filter(|new_tag| !existing.iter().any(|row| row.tag_id == new_tag.tag_id))
            .collect();

        let to_remove = existing
            .iter()
            .filter(|row| !desired.contains(&row.tag_id))
            .map(|row| row.id)
            .collect();

        Self { to_add, to_remove }
    }

    /// Whether applying the plan would change nothing.
    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Outcome of a tag reconciliation: the number of removed rows and the rows created.
///
/// Serializes as a two-element JSON array, `[removed, [added...]]`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TagSyncOutcome(pub usize, pub Vec<ProductTag>);

impl TagSyncOutcome {
    /// Number of association rows deleted.
    pub fn removed(&self) -> usize {
        self.0
    }

    /// Association rows inserted for newly requested tags.
    pub fn added(&self) -> &[ProductTag] {
        &self.1
    }
}
