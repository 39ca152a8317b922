use std::thread;

use crate::domain::{
    product::ProductDetails,
    product_tag::{NewProductTag, TagSyncOutcome, TagSyncPlan},
};
use crate::forms::products::{CreateProductForm, UpdateProductForm};
use crate::repository::{ProductReader, ProductTagReader, ProductTagWriter, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every product with its category and tags.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<ProductDetails>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products().map_err(ServiceError::from)
}

/// Returns a single product with its category and tags.
pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<ProductDetails>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Inserts a product, attaches the requested tags and returns the stored record.
///
/// A failure while attaching tags leaves the product row in place and is
/// reported as [`ServiceError::TagAssignment`].
pub fn create_product<R>(repo: &R, form: CreateProductForm) -> ServiceResult<ProductDetails>
where
    R: ProductReader + ProductWriter + ProductTagWriter + ?Sized,
{
    let (new_product, tag_ids) = form.into_new_product();

    let created = repo
        .create_product(&new_product)
        .map_err(ServiceError::from)?;

    if !tag_ids.is_empty() {
        let associations = NewProductTag::for_product(created.id, &tag_ids);
        if let Err(err) = repo.create_product_tags(&associations) {
            log::error!("Failed to attach tags to product {}: {err}", created.id);
            return Err(ServiceError::TagAssignment {
                product_id: created.id,
                source: err,
            });
        }
    }

    get_product(repo, created.id)
}

/// Patches a product and, when `tagIds` is supplied, reconciles its tag set.
///
/// Associations already matching the desired set are kept as they are; the
/// removal of stale rows and the insertion of missing ones run concurrently.
pub fn update_product<R>(
    repo: &R,
    product_id: i32,
    form: UpdateProductForm,
) -> ServiceResult<TagSyncOutcome>
where
    R: ProductWriter + ProductTagReader + ProductTagWriter + Sync + ?Sized,
{
    let (updates, tag_ids) = form.into_update_product();

    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from)?;

    let Some(tag_ids) = tag_ids else {
        return Ok(TagSyncOutcome::default());
    };

    let existing = repo
        .list_product_tags(product_id)
        .map_err(ServiceError::from)?;
    let plan = TagSyncPlan::diff(product_id, &existing, &tag_ids);

    apply_tag_sync_plan(repo, &plan)
}

/// Deletes a product; its tag associations cascade with it.
pub fn delete_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(ServiceError::from)
}

fn apply_tag_sync_plan<R>(repo: &R, plan: &TagSyncPlan) -> ServiceResult<TagSyncOutcome>
where
    R: ProductTagWriter + Sync + ?Sized,
{
    if plan.is_noop() {
        return Ok(TagSyncOutcome::default());
    }

    let (removed, added) = thread::scope(|scope| {
        let removal = scope.spawn(|| repo.delete_product_tags(&plan.to_remove));
        let added = repo.create_product_tags(&plan.to_add);
        (removal.join(), added)
    });

    let removed = removed
        .map_err(|_| ServiceError::Internal("tag removal worker panicked".to_string()))?
        .map_err(ServiceError::from)?;
    let added = added.map_err(ServiceError::from)?;

    Ok(TagSyncOutcome(removed, added))
}
