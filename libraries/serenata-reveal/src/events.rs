//! Reveal and playback events
//!
//! Event-based communication for UI synchronization. The sequencer and the
//! player each buffer events internally; a rendering layer drains them
//! periodically (every frame, or on its own tick) and re-renders from the
//! drained batch.

use crate::sequencer::RevealPhase;
use serde::{Deserialize, Serialize};
use serenata_core::SongId;

/// Events emitted by the reveal sequencer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RevealEvent {
    /// The reveal moved to a new phase
    PhaseChanged {
        /// The phase just entered
        phase: RevealPhase,
    },

    /// The countdown ticked to a new number
    CountdownTick {
        /// Displayed number (3, 2, 1)
        value: u8,
        /// Contextual caption shown under the number
        caption: String,
    },

    /// The confetti batch was generated on entering the flash phase
    ConfettiBurst {
        /// Number of pieces in the batch
        count: usize,
    },

    /// The confetti batch self-cleared
    ConfettiCleared,

    /// Loading failed; the page shows the terminal error state
    LoadFailed {
        /// User-visible error text
        message: String,
    },
}

/// Events emitted by the playback manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playing/paused flipped
    StateChanged {
        /// Whether playback is now running
        is_playing: bool,
    },

    /// The active song of the set changed
    SongChanged {
        /// New active index
        index: usize,
        /// ID of the new active song
        song_id: SongId,
    },

    /// Track duration became known
    DurationLoaded {
        /// Duration in seconds
        seconds: f64,
    },

    /// The current track played to its natural end
    TrackEnded {
        /// ID of the finished song
        song_id: SongId,
    },

    /// The browser rejected an automatic play() call
    ///
    /// Recovered silently; playback waits for explicit interaction.
    AutoplayBlocked,
}
