//! Song set fetching
//!
//! Exactly one store read per page load resolves the whole song set. The
//! store may return rows in any order and may miss some ids; the fetcher
//! restores the link's id order and drops unmatched ids silently. The
//! primary (first) song gates the reveal: if it has no playable audio the
//! link is unusable. A combo's second song without audio is tolerated and
//! handled gracefully by the player.

use crate::error::{Result, RevealError};
use serenata_core::{Song, SongSet, SongSetRequest, SongStore};
use std::collections::HashMap;

/// Resolve a song set request against the store
///
/// # Errors
/// `NotFound` when no records match or the primary song is not ready;
/// store failures bubble up as `Core` and end in the same user-visible
/// error state.
pub async fn fetch_song_set(
    store: &dyn SongStore,
    request: &SongSetRequest,
) -> Result<SongSet> {
    let ids = request.ids();
    tracing::debug!(requested = ids.len(), "fetching song set");

    let rows = store.songs_by_ids(ids).await?;

    let mut by_id: HashMap<String, Song> = rows
        .into_iter()
        .map(|song| (song.id.as_str().to_string(), song))
        .collect();

    // Restore link order; unmatched ids drop out silently
    let ordered: Vec<Song> = ids
        .iter()
        .filter_map(|id| by_id.remove(id.as_str()))
        .collect();

    if ordered.is_empty() {
        return Err(RevealError::NotFound(
            "no songs match the requested ids".to_string(),
        ));
    }
    if !ordered[0].is_ready() {
        return Err(RevealError::NotFound(format!(
            "song {} is still being generated",
            ordered[0].id
        )));
    }

    Ok(SongSet::new(ordered)?)
}
