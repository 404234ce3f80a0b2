/// Domain types for Serenata
mod ids;
mod song;
mod song_set;

pub use ids::SongId;
pub use song::{LyricLine, Song};
pub use song_set::SongSet;
