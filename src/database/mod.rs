//! Database layer: connection pool and repositories.

mod repository;

pub use repository::*;

use std::sync::Arc;

use sqlx::{
    migrate::Migrator,
    sqlite::{SqlitePool, SqlitePoolOptions},
};

use crate::error::Result;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

// =====================================
// Database connection
// =====================================
/// Shared connection pool.
///
/// Cloning is cheap; the pool itself lives behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// Connects to the database, creating the sqlite file's parent directory
    /// when needed.
    ///
    /// # Errors
    /// Returns an error when the pool cannot be established.
    pub async fn connect(database_url: impl AsRef<str>) -> Result<Self> {
        let url = database_url.as_ref();
        if let Some(path) = url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if let Some(parent) = std::path::Path::new(path).parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .acquire_timeout(std::time::Duration::from_secs(5))
            .idle_timeout(std::time::Duration::from_secs(600))
            .connect(url)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Applies pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&*self.pool).await?;
        Ok(())
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Cheap liveness probe.
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&*self.pool).await?;
        Ok(())
    }
}

// =====================================
// Test utilities
// =====================================
impl Database {
    /// In-memory database with migrations applied; for tests.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let db = Self {
            pool: Arc::new(pool),
        };

        db.migrate().await?;
        Ok(db)
    }

    /// In-memory database without migrations; every insert fails. Used to
    /// exercise persistence-failure paths in tests.
    pub async fn in_memory_unmigrated() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }
}
