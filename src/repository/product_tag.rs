use diesel::prelude::*;

use crate::domain::product_tag::{
    NewProductTag as DomainNewProductTag, ProductTag as DomainProductTag,
};
use crate::models::product_tag::{NewProductTag as DbNewProductTag, ProductTag as DbProductTag};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductTagReader, ProductTagWriter};

impl ProductTagReader for DieselRepository {
    fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductTag>> {
        use crate::schema::product_tags;

        let mut conn = self.conn()?;
        let rows = product_tags::table
            .filter(product_tags::product_id.eq(product_id))
            .order(product_tags::id.asc())
            .load::<DbProductTag>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl ProductTagWriter for DieselRepository {
    fn create_product_tags(
        &self,
        new_product_tags: &[DomainNewProductTag],
    ) -> RepositoryResult<Vec<DomainProductTag>> {
        use crate::schema::product_tags;

        if new_product_tags.is_empty() {
            return Ok(Vec::new());
        }

        let rows = DbNewProductTag::batch(new_product_tags);
        let mut conn = self.conn()?;

        conn.transaction::<Vec<DomainProductTag>, RepositoryError, _>(|conn| {
            let mut created = Vec::with_capacity(rows.len());
            for new_row in &rows {
                let row = diesel::insert_into(product_tags::table)
                    .values(new_row)
                    .get_result::<DbProductTag>(conn)?;
                created.push(row.into());
            }
            Ok(created)
        })
    }

    fn delete_product_tags(&self, product_tag_ids: &[i32]) -> RepositoryResult<usize> {
        use crate::schema::product_tags;

        if product_tag_ids.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let deleted =
            diesel::delete(product_tags::table.filter(product_tags::id.eq_any(product_tag_ids)))
                .execute(&mut conn)?;

        Ok(deleted)
    }
}
