use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::Product as DomainProduct;
use crate::domain::tag::{
    NewTag as DomainNewTag, Tag as DomainTag, TagWithProducts, UpdateTag as DomainUpdateTag,
};
use crate::models::product::Product as DbProduct;
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag, UpdateTag as DbUpdateTag};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TagReader, TagWriter};

impl TagReader for DieselRepository {
    fn list_tags(&self) -> RepositoryResult<Vec<TagWithProducts>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let db_tags = tags::table.order(tags::id.asc()).load::<DbTag>(&mut conn)?;

        attach_products(&mut conn, db_tags)
    }

    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<TagWithProducts>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let tag = tags::table
            .find(id)
            .first::<DbTag>(&mut conn)
            .optional()?;

        match tag {
            Some(tag) => Ok(attach_products(&mut conn, vec![tag])?.pop()),
            None => Ok(None),
        }
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &DomainNewTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let insertable = DbNewTag::from(new_tag);

        let created = diesel::insert_into(tags::table)
            .values(&insertable)
            .get_result::<DbTag>(&mut conn)?;

        Ok(created.into())
    }

    fn update_tag(&self, tag_id: i32, updates: &DomainUpdateTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateTag::from(updates);

        let updated = diesel::update(tags::table.find(tag_id))
            .set(&db_updates)
            .get_result::<DbTag>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(tags::table.find(tag_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn attach_products(
    conn: &mut SqliteConnection,
    db_tags: Vec<DbTag>,
) -> RepositoryResult<Vec<TagWithProducts>> {
    use crate::schema::{product_tags, products};

    if db_tags.is_empty() {
        return Ok(Vec::new());
    }

    let tag_ids: Vec<i32> = db_tags.iter().map(|tag| tag.id).collect();

    let rows = product_tags::table
        .inner_join(products::table)
        .filter(product_tags::tag_id.eq_any(&tag_ids))
        .order((product_tags::tag_id.asc(), products::id.asc()))
        .select((product_tags::tag_id, DbProduct::as_select()))
        .load::<(i32, DbProduct)>(conn)?;

    let mut by_tag: HashMap<i32, Vec<DomainProduct>> = HashMap::new();
    for (tag_id, product) in rows {
        by_tag.entry(tag_id).or_default().push(product.into());
    }

    Ok(db_tags
        .into_iter()
        .map(|db_tag| {
            let products = by_tag.remove(&db_tag.id).unwrap_or_default();
            TagWithProducts {
                tag: db_tag.into(),
                products,
            }
        })
        .collect())
}
