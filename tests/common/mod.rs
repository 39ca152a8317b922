//! Helpers for integration tests.
#![allow(dead_code)]

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use storefront_api::db::{DbPool, establish_connection_pool};
use storefront_api::domain::{category::NewCategory, tag::NewTag};
use storefront_api::repository::{CategoryWriter, DieselRepository, TagWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // Clean up old DB

        let pool =
            establish_connection_pool(filename).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}

/// Insert one category and tags named `tag-1`..`tag-N`, returning their ids.
pub fn seed_catalog(repo: &DieselRepository, tag_count: usize) -> (i32, Vec<i32>) {
    let category = repo
        .create_category(&NewCategory::new("Shirts"))
        .expect("create category");
    let tag_ids = (1..=tag_count)
        .map(|index| {
            repo.create_tag(&NewTag::new(format!("tag-{index}")))
                .expect("create tag")
                .id
        })
        .collect();
    (category.id, tag_ids)
}
