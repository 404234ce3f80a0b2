/// Song store trait
use crate::error::Result;
use crate::types::{Song, SongId};
use async_trait::async_trait;

/// Read access to the song store
///
/// The production store is a hosted database; `serenata-storage` provides
/// the concrete implementation. The reveal flow only ever reads.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Fetch all songs matching the given ids in one call
    ///
    /// May return fewer rows than requested and in any order; callers that
    /// care about order must re-sort against their id list.
    async fn songs_by_ids(&self, ids: &[SongId]) -> Result<Vec<Song>>;
}
