//! Serenata Core
//!
//! Platform-agnostic domain types and pure logic for the Serenata
//! song-gift product.
//!
//! This crate provides:
//! - **Domain Types**: `Song`, `SongId`, `SongSet`
//! - **Request parsing**: song ids from share-link paths and query strings
//! - **Dedication generation**: deterministic templated messages
//! - **Themes**: the closed set of reveal skins
//! - **Share URLs** and playback clock formatting
//! - **Error Handling**: unified `SerenataError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use serenata_core::{Song, SongSet, generate_dedication};
//!
//! let mut song = Song::new("abc-123", "Ana");
//! song.occasion = "cumpleanos".to_string();
//! song.audio_url = Some("https://cdn.example.com/abc-123.mp3".to_string());
//!
//! let dedication = generate_dedication(&song);
//! assert!(dedication.contains("Ana"));
//!
//! let set = SongSet::new(vec![song]).unwrap();
//! assert_eq!(set.share_url(), "https://serenata.app/song/abc-123");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dedication;
pub mod error;
pub mod request;
pub mod share;
pub mod store;
pub mod theme;
pub mod timefmt;
pub mod types;

// Re-export commonly used types
pub use dedication::generate_dedication;
pub use error::{Result, SerenataError};
pub use request::SongSetRequest;
pub use share::{share_url, SHARE_BASE_URL};
pub use store::SongStore;
pub use theme::{RevealTheme, ThemeStyle};
pub use timefmt::format_clock;
pub use types::{LyricLine, Song, SongId, SongSet};
