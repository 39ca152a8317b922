use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::{
    Category as DomainCategory, CategoryWithProducts, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::domain::product::Product as DomainProduct;
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::models::product::Product as DbProduct;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithProducts>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let db_categories = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?;

        attach_products(&mut conn, db_categories)
    }

    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithProducts>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id)
            .first::<DbCategory>(&mut conn)
            .optional()?;

        match category {
            Some(category) => Ok(attach_products(&mut conn, vec![category])?.pop()),
            None => Ok(None),
        }
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCategory::from(updates);

        let updated = diesel::update(categories::table.find(category_id))
            .set(&db_updates)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(categories::table.find(category_id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn attach_products(
    conn: &mut SqliteConnection,
    db_categories: Vec<DbCategory>,
) -> RepositoryResult<Vec<CategoryWithProducts>> {
    use crate::schema::products;

    if db_categories.is_empty() {
        return Ok(Vec::new());
    }

    let category_ids: Vec<i32> = db_categories.iter().map(|category| category.id).collect();

    let rows = products::table
        .filter(products::category_id.eq_any(&category_ids))
        .order(products::id.asc())
        .load::<DbProduct>(conn)?;

    let mut by_category: HashMap<i32, Vec<DomainProduct>> = HashMap::new();
    for row in rows {
        by_category.entry(row.category_id).or_default().push(row.into());
    }

    Ok(db_categories
        .into_iter()
        .map(|db_category| {
            let products = by_category.remove(&db_category.id).unwrap_or_default();
            CategoryWithProducts {
                category: db_category.into(),
                products,
            }
        })
        .collect())
}
