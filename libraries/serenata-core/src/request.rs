//! Song set request parsing
//!
//! A share link carries one or two song ids, either in the path
//! (`/song/<id>[,<id>]`) or in a query parameter (`id`, `song_id`, or
//! `song_ids`). The id order in the link is significant: it decides
//! playback order for combos.

use crate::error::{Result, SerenataError};
use crate::types::SongId;
use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameter names accepted for song ids, checked in order
const ID_QUERY_PARAMS: [&str; 3] = ["id", "song_id", "song_ids"];

/// Parsed request for a song set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SongSetRequestData")]
pub struct SongSetRequest {
    ids: Vec<SongId>,
}

/// Raw mirror that routes deserialization through the validated constructor
#[derive(Deserialize)]
struct SongSetRequestData {
    ids: Vec<SongId>,
}

impl TryFrom<SongSetRequestData> for SongSetRequest {
    type Error = SerenataError;

    fn try_from(data: SongSetRequestData) -> Result<Self> {
        Self::new(data.ids)
    }
}

impl SongSetRequest {
    /// Build a request from explicit ids
    ///
    /// # Errors
    /// Returns `NotFound` if no ids are given; a link without ids resolves
    /// to no song, the same outcome as an unknown id.
    pub fn new(ids: Vec<SongId>) -> Result<Self> {
        if ids.is_empty() {
            return Err(SerenataError::not_found("Song set", "no ids in link"));
        }
        Ok(Self { ids })
    }

    /// Parse a comma-separated id list, e.g. `"abc,def"`
    ///
    /// Whitespace around ids is trimmed and empty segments are dropped, so
    /// `"abc,"` still resolves to one id.
    pub fn parse_list(list: &str) -> Result<Self> {
        let ids: Vec<SongId> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(SongId::from)
            .collect();
        Self::new(ids)
    }

    /// Parse a full share URL
    ///
    /// Accepts both the path form `/song/<ids>` and the query forms
    /// `?id=`, `?song_id=`, `?song_ids=`. The path form wins when both are
    /// present.
    pub fn parse_url(raw: &str) -> Result<Self> {
        let url = Url::parse(raw)
            .map_err(|e| SerenataError::invalid_input(format!("bad share url: {e}")))?;

        if let Some(list) = path_id_list(&url) {
            return Self::parse_list(list);
        }

        for param in ID_QUERY_PARAMS {
            if let Some((_, value)) = url.query_pairs().find(|(k, _)| k == param) {
                return Self::parse_list(&value);
            }
        }

        Err(SerenataError::not_found("Song set", raw))
    }

    /// Requested ids, in link order
    pub fn ids(&self) -> &[SongId] {
        &self.ids
    }

    /// Number of requested ids
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// A request is never empty; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Extract the id list from a `/song/<ids>` path, if present
fn path_id_list(url: &Url) -> Option<&str> {
    let mut segments = url.path_segments()?;
    while let Some(segment) = segments.next() {
        if segment == "song" {
            return segments.next().filter(|s| !s.is_empty());
        }
    }
    None
}
