use crate::domain::category::{Category, CategoryWithProducts};
use crate::forms::categories::CategoryForm;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every category with its products.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryWithProducts>>
where
    R: CategoryReader + ?Sized,
{
    repo.list_categories().map_err(ServiceError::from)
}

/// Returns one category with its products.
pub fn get_category<R>(repo: &R, category_id: i32) -> ServiceResult<CategoryWithProducts>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_category<R>(repo: &R, form: CategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    repo.create_category(&form.into_new_category())
        .map_err(ServiceError::from)
}

pub fn rename_category<R>(repo: &R, category_id: i32, form: CategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    repo.update_category(category_id, &form.into_update_category())
        .map_err(ServiceError::from)
}

/// Deletes a category together with the products filed under it.
pub fn delete_category<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    repo.delete_category(category_id)
        .map_err(ServiceError::from)
}
