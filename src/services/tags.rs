use crate::domain::tag::{Tag, TagWithProducts};
use crate::forms::tags::TagForm;
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every tag with the products carrying it.
pub fn list_tags<R>(repo: &R) -> ServiceResult<Vec<TagWithProducts>>
where
    R: TagReader + ?Sized,
{
    repo.list_tags().map_err(ServiceError::from)
}

/// Returns one tag with the products carrying it.
pub fn get_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<TagWithProducts>
where
    R: TagReader + ?Sized,
{
    repo.get_tag_by_id(tag_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new tag.
pub fn create_tag<R>(repo: &R, form: TagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    repo.create_tag(&form.into_new_tag())
        .map_err(ServiceError::from)
}

/// Renames an existing tag.
pub fn rename_tag<R>(repo: &R, tag_id: i32, form: TagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    repo.update_tag(tag_id, &form.into_update_tag())
        .map_err(ServiceError::from)
}

/// Deletes a tag; its product associations cascade with it.
pub fn delete_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<()>
where
    R: TagWriter + ?Sized,
{
    repo.delete_tag(tag_id).map_err(ServiceError::from)
}
