//! Database test fixtures and utilities
//!
//! Every fixture gets its own in-memory SQLite database with migrations
//! applied, so tests never share rows.

use std::path::PathBuf;

use devconnect::backend::server::config::connect_database;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Create a migrated in-memory connection pool
pub async fn create_test_pool() -> SqlitePool {
    connect_database("sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database fixture
    pub async fn new() -> Self {
        Self {
            pool: create_test_pool().await,
        }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// File-backed database, removed again on drop
///
/// Several pooled connections share one file here, unlike the in-memory
/// pool, so writers really contend for the SQLite lock.
pub struct FileDatabase {
    pool: SqlitePool,
    path: PathBuf,
}

impl FileDatabase {
    pub async fn new() -> Self {
        let path = std::env::temp_dir().join(format!("devconnect-{}.db", Uuid::new_v4()));
        let pool = connect_database(&format!("sqlite://{}?mode=rwc", path.display()))
            .await
            .expect("Failed to create file-backed test database");
        Self { pool, path }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Drop for FileDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", self.path.display(), suffix));
        }
    }
}
