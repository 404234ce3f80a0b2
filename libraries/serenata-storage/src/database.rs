/// Database implementation
use crate::error::{Result, StorageError};
use crate::songs;
use async_trait::async_trait;
use serenata_core::{Song, SongId, SongStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// SQLite-backed song store
///
/// Stand-in for the hosted production database: the reveal flow only needs
/// the `SongStore` read contract, which this satisfies.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection
    ///
    /// # Errors
    /// Returns an error if the connection fails or migrations fail
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        // Run migrations manually for reliability across different execution contexts
        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Create database from an existing pool (for testing)
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an in-memory database (for testing)
    ///
    /// Pinned to a single connection: every pooled connection to
    /// `sqlite::memory:` is its own empty database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Get a reference to the underlying pool (for testing)
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run database migrations
    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // Embedded migrations for reliability
        const MIGRATIONS: &[&str] =
            &[include_str!("../migrations/20260110000001_create_songs.sql")];

        for migration in MIGRATIONS {
            sqlx::query(migration)
                .execute(pool)
                .await
                .map_err(|e| StorageError::Migration(e.to_string()))?;
        }

        Ok(())
    }

    /// Insert a song (seeding and tests)
    pub async fn insert_song(&self, song: &Song) -> Result<()> {
        songs::insert(&self.pool, song).await
    }

    /// Fetch a single song by id
    pub async fn song(&self, id: &SongId) -> Result<Song> {
        songs::get(&self.pool, id).await
    }
}

#[async_trait]
impl SongStore for Database {
    async fn songs_by_ids(&self, ids: &[SongId]) -> serenata_core::Result<Vec<Song>> {
        songs::get_by_ids(&self.pool, ids)
            .await
            .map_err(Into::into)
    }
}
