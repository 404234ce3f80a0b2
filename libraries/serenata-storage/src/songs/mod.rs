//! Song row access
//!
//! Free functions over a pool, so the reveal flow and tests can share the
//! same queries without going through the `Database` wrapper.

use crate::error::{Result, StorageError};
use chrono::{DateTime, Utc};
use serenata_core::{Song, SongId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SONG_COLUMNS: &str = "id, recipient_name, sender_name, relationship, occasion, \
                            genre_name, audio_url, lyrics, photo_url, created_at";

/// Fetch all songs matching the given ids in a single query
///
/// Returns rows in whatever order SQLite yields them; may return fewer rows
/// than ids. An empty id list short-circuits to an empty result.
pub async fn get_by_ids(pool: &SqlitePool, ids: &[SongId]) -> Result<Vec<Song>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("SELECT {SONG_COLUMNS} FROM songs WHERE id IN ({placeholders})");

    let mut query = sqlx::query(&sql);
    for id in ids {
        query = query.bind(id.as_str());
    }

    let rows = query.fetch_all(pool).await?;
    tracing::debug!(requested = ids.len(), matched = rows.len(), "song lookup");

    rows.iter().map(song_from_row).collect()
}

/// Fetch a single song by id
pub async fn get(pool: &SqlitePool, id: &SongId) -> Result<Song> {
    let sql = format!("SELECT {SONG_COLUMNS} FROM songs WHERE id = ?");
    let row = sqlx::query(&sql)
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StorageError::not_found("Song", id.as_str()))?;

    song_from_row(&row)
}

/// Insert a song row (seeding and tests)
pub async fn insert(pool: &SqlitePool, song: &Song) -> Result<()> {
    sqlx::query(
        "INSERT INTO songs (id, recipient_name, sender_name, relationship, occasion, \
         genre_name, audio_url, lyrics, photo_url, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(song.id.as_str())
    .bind(&song.recipient_name)
    .bind(&song.sender_name)
    .bind(&song.relationship)
    .bind(&song.occasion)
    .bind(&song.genre_name)
    .bind(song.audio_url.as_deref())
    .bind(song.lyrics.as_deref())
    .bind(song.photo_url.as_deref())
    .bind(song.created_at.timestamp())
    .execute(pool)
    .await?;

    Ok(())
}

fn song_from_row(row: &SqliteRow) -> Result<Song> {
    let created_ts: i64 = row.try_get("created_at")?;

    Ok(Song {
        id: SongId::new(row.try_get::<String, _>("id")?),
        recipient_name: row.try_get("recipient_name")?,
        sender_name: row.try_get("sender_name")?,
        relationship: row.try_get("relationship")?,
        occasion: row.try_get("occasion")?,
        genre_name: row.try_get("genre_name")?,
        audio_url: row.try_get("audio_url")?,
        lyrics: row.try_get("lyrics")?,
        photo_url: row.try_get("photo_url")?,
        created_at: DateTime::<Utc>::from_timestamp(created_ts, 0)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
    })
}
