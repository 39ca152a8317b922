use mockall::mock;

use super::{
    CategoryReader, CategoryWriter, ProductReader, ProductTagReader, ProductTagWriter,
    ProductWriter, TagReader, TagWriter,
};
use crate::domain::{
    category::{Category, CategoryWithProducts, NewCategory, UpdateCategory},
    product::{NewProduct, Product, ProductDetails, UpdateProduct},
    product_tag::{NewProductTag, ProductTag},
    tag::{NewTag, Tag, TagWithProducts, UpdateTag},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn list_products(&self) -> RepositoryResult<Vec<ProductDetails>>;
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<ProductDetails>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductTagReader {}

    impl ProductTagReader for ProductTagReader {
        fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<ProductTag>>;
    }
}

mock! {
    pub ProductTagWriter {}

    impl ProductTagWriter for ProductTagWriter {
        fn create_product_tags(&self, new_product_tags: &[NewProductTag]) -> RepositoryResult<Vec<ProductTag>>;
        fn delete_product_tags(&self, product_tag_ids: &[i32]) -> RepositoryResult<usize>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithProducts>>;
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithProducts>>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub TagReader {}

    impl TagReader for TagReader {
        fn list_tags(&self) -> RepositoryResult<Vec<TagWithProducts>>;
        fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<TagWithProducts>>;
    }
}

mock! {
    pub TagWriter {}

    impl TagWriter for TagWriter {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
        fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
        fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
    }
}
