//! Helpers for integration tests.

use festival_storefront::db::{DbPool, establish_connection_pool, run_migrations};
use festival_storefront::repository::DieselRepository;
use festival_storefront::seed::seed_catalog;
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Repository over this database with the festival catalog loaded.
    #[allow(dead_code)]
    pub fn seeded_repo(&self) -> DieselRepository {
        let repo = DieselRepository::new(self.pool());
        seed_catalog(&repo).expect("Seeding failed");
        repo
    }
}
