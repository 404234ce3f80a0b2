/// Song domain type
use crate::types::SongId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A personalized song, as delivered by a share link
///
/// Records are owned by the store and fetched read-only. `audio_url` being
/// `None` means generation has not finished; such a song is not playable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Name of the person the song is for
    pub recipient_name: String,

    /// Name of the person who sent the gift
    pub sender_name: String,

    /// Relationship of the sender to the recipient (free text, e.g. "mama")
    pub relationship: String,

    /// Occasion the song celebrates (free text, e.g. "cumpleanos")
    pub occasion: String,

    /// Display label for the musical style
    pub genre_name: String,

    /// Playable media URL; `None` until generation completes
    pub audio_url: Option<String>,

    /// Full lyrics, one line per `\n`; lines in brackets are section markers
    pub lyrics: Option<String>,

    /// Photo shown during the reveal flash
    pub photo_url: Option<String>,

    /// When the song was created
    pub created_at: DateTime<Utc>,
}

impl Song {
    /// Create a song with minimal fields (mostly for tests and seeding)
    pub fn new(id: impl Into<SongId>, recipient_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            recipient_name: recipient_name.into(),
            sender_name: String::new(),
            relationship: String::new(),
            occasion: String::new(),
            genre_name: String::new(),
            audio_url: None,
            lyrics: None,
            photo_url: None,
            created_at: Utc::now(),
        }
    }

    /// Whether the song has a playable audio source
    pub fn is_ready(&self) -> bool {
        self.audio_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Classify the lyrics into renderable lines
    ///
    /// Blank lines are preserved as empty text lines so stanza breaks
    /// survive rendering.
    pub fn lyric_lines(&self) -> Vec<LyricLine<'_>> {
        self.lyrics
            .as_deref()
            .map(|lyrics| lyrics.lines().map(LyricLine::classify).collect())
            .unwrap_or_default()
    }
}

/// A single rendered line of lyrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LyricLine<'a> {
    /// Section marker such as "[Coro]"; never sung content
    Section(&'a str),

    /// Ordinary lyric text
    Text(&'a str),
}

impl<'a> LyricLine<'a> {
    /// Classify one raw lyrics line
    ///
    /// Lines starting with `[` are section markers; the brackets are
    /// stripped for display.
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix('[') {
            Self::Section(rest.strip_suffix(']').unwrap_or(rest))
        } else {
            Self::Text(line)
        }
    }

    /// Whether this line is a section marker
    pub fn is_section(&self) -> bool {
        matches!(self, Self::Section(_))
    }
}
