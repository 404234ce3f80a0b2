//! Serenata Storage
//!
//! SQLite-backed implementation of the `SongStore` trait from
//! `serenata-core`, with embedded migrations.
//!
//! # Example
//!
//! ```rust,no_run
//! use serenata_storage::Database;
//! use serenata_core::{SongId, SongStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new("sqlite:serenata.db").await?;
//! let songs = db.songs_by_ids(&[SongId::new("abc-123")]).await?;
//! println!("found {} songs", songs.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod database;
mod error;
pub mod songs;

pub use database::Database;
pub use error::{Result, StorageError};
