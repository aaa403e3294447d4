//! # Database Handle
//!
//! Opens the SQLite store, applies migrations and hands out repositories.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  DbConfig::new(path)          DbConfig::in_memory()                    │
//! │  Storage::File (WAL)          Storage::Memory (one pinned connection)  │
//! │         │                              │                                │
//! │         └──────────────┬───────────────┘                                │
//! │                        ▼                                                │
//! │  Database::new(config) ── open pool ── apply migrations                │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  Database (Clone) ──► router state ──► db.items() per request          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  Database::close() on shutdown                                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! File databases use the WAL journal so concurrent readers do not wait on
//! a writer.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::item::ItemRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Where the data lives.
#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    /// SQLite file, created on first open.
    File(PathBuf),

    /// Private in-memory database, gone when the pool closes.
    Memory,
}

/// Database configuration.
///
/// ```rust,ignore
/// let config = DbConfig::new("./inventory.db")
///     .max_connections(10)
///     .acquire_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub storage: Storage,

    /// Pool size. Default: 5
    pub max_connections: u32,

    /// How long a request waits for a free connection. Default: 30 seconds
    pub acquire_timeout: Duration,
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            storage: Storage::File(path.into()),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Fresh, isolated in-memory database (for tests).
    pub fn in_memory() -> Self {
        DbConfig {
            storage: Storage::Memory,
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let options = match &self.storage {
            Storage::File(path) => SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal),
            Storage::Memory => SqliteConnectOptions::from_str("sqlite::memory:")?,
        };

        Ok(options.foreign_keys(true))
    }

    fn pool_options(&self) -> SqlitePoolOptions {
        let options = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout);

        match self.storage {
            // The data only exists while its connection does
            Storage::Memory => options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None),
            Storage::File(_) => options,
        }
    }
}

// =============================================================================
// Database
// =============================================================================

/// Shared database handle. Clones share one pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool described by `config` and applies pending migrations.
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready for queries
    /// * `Err(DbError::ConnectionFailed)` - File could not be opened or created
    /// * `Err(DbError::MigrationFailed)` - Schema could not be applied
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(storage = ?config.storage, "Opening database");

        let pool = config
            .pool_options()
            .connect_with(config.connect_options()?)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        let db = Database { pool };
        db.run_migrations().await?;

        info!(
            max_connections = config.max_connections,
            "Database ready"
        );
        Ok(db)
    }

    /// Applies pending migrations. Already-applied ones are skipped.
    pub async fn run_migrations(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// Raw pool, for queries outside the repository.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the inventory item repository.
    ///
    /// ```rust,ignore
    /// let item = db.items().get_by_id(7).await?;
    /// ```
    pub fn items(&self) -> ItemRepository {
        ItemRepository::new(self.pool.clone())
    }

    /// Closes the pool; every later query fails.
    pub async fn close(&self) {
        info!("Closing database");
        self.pool.close().await;
    }

    /// True when a trivial query succeeds.
    pub async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_in_memory_databases_are_isolated() {
        let a = Database::new(DbConfig::in_memory()).await.unwrap();
        let b = Database::new(DbConfig::in_memory()).await.unwrap();

        sqlx::query("INSERT INTO inventory (name, quantity, unit_price) VALUES ('A', 1, 1.0)")
            .execute(a.pool())
            .await
            .unwrap();

        assert_eq!(a.items().count().await.unwrap(), 1);
        assert_eq!(b.items().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_migrations_create_inventory_table() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'inventory'",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(tables, 1);

        // Re-running is a no-op
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_database_is_created_and_reopened() {
        let path = std::env::temp_dir().join(format!(
            "inventory-db-test-{}.db",
            std::process::id()
        ));

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        assert!(path.exists());
        sqlx::query("INSERT INTO inventory (name, quantity, unit_price) VALUES ('A', 1, 1.0)")
            .execute(db.pool())
            .await
            .unwrap();
        db.close().await;

        let reopened = Database::new(DbConfig::new(&path)).await.unwrap();
        assert_eq!(reopened.items().count().await.unwrap(), 1);
        reopened.close().await;

        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
        }
    }

    #[tokio::test]
    async fn test_closed_database_is_unhealthy() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(!db.health_check().await);
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(3));

        assert_eq!(config.storage, Storage::File(PathBuf::from("/tmp/test.db")));
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout, Duration::from_secs(3));
    }
}
