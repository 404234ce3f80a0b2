/// Song set domain type
use crate::error::{Result, SerenataError};
use crate::share;
use crate::types::{Song, SongId};
use serde::{Deserialize, Serialize};

/// The ordered group of songs behind one share link
///
/// One song is the normal case; two songs form a combo, played back to back
/// with auto-advance. Order always matches the id list in the link, never
/// the order the store happened to return rows in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SongSetData")]
pub struct SongSet {
    songs: Vec<Song>,
}

/// Raw mirror that routes deserialization through the validated constructor
#[derive(Deserialize)]
struct SongSetData {
    songs: Vec<Song>,
}

impl TryFrom<SongSetData> for SongSet {
    type Error = SerenataError;

    fn try_from(data: SongSetData) -> Result<Self> {
        Self::new(data.songs)
    }
}

impl SongSet {
    /// Create a song set from an already-ordered list of songs
    ///
    /// # Errors
    /// Returns `InvalidInput` if the list is empty.
    pub fn new(songs: Vec<Song>) -> Result<Self> {
        if songs.is_empty() {
            return Err(SerenataError::invalid_input("song set cannot be empty"));
        }
        Ok(Self { songs })
    }

    /// All songs, in link order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Number of songs in the set
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// A set is never empty; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether this set is a combo (more than one song)
    pub fn is_combo(&self) -> bool {
        self.songs.len() > 1
    }

    /// The primary song, which gates the reveal
    pub fn primary(&self) -> &Song {
        &self.songs[0]
    }

    /// Song at the given position
    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// IDs of all songs, in link order
    pub fn ids(&self) -> Vec<SongId> {
        self.songs.iter().map(|s| s.id.clone()).collect()
    }

    /// Canonical share URL for this set
    pub fn share_url(&self) -> String {
        share::share_url(&self.ids())
    }
}
