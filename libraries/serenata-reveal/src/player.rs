//! Playback manager
//!
//! Wraps a single `MediaElement` bound to the active song of a song set.
//! Holds the per-set playback state (`active_index`, `is_playing`,
//! `current_time`, `duration`) and enforces the reset invariant: switching
//! songs always zeroes progress and stops playback until explicitly
//! resumed, so a newly selected track never shows stale progress.
//!
//! The manager is synchronous; `RevealController` supplies the timed parts
//! (auto-advance gaps, the flash autoplay attempt).

use crate::error::{Result, RevealError};
use crate::events::PlayerEvent;
use crate::source::{MediaElement, MediaEvent};
use crate::visualizer::Visualizer;
use serenata_core::{Song, SongSet};
use std::time::Duration;

/// Playback manager for one song set
pub struct PlayerManager {
    element: Box<dyn MediaElement>,
    songs: Option<SongSet>,
    active_index: usize,
    is_playing: bool,
    current_time: f64,
    duration: f64,
    has_source: bool,
    visualizer: Visualizer,
    pending_events: Vec<PlayerEvent>,
}

impl PlayerManager {
    /// Create a manager around a platform media element
    pub fn new(element: Box<dyn MediaElement>) -> Self {
        Self {
            element,
            songs: None,
            active_index: 0,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            has_source: false,
            visualizer: Visualizer::new(),
            pending_events: Vec::new(),
        }
    }

    // ===== Song set binding =====

    /// Bind a fetched song set and load its primary song
    ///
    /// Does not auto-play; the reveal choreography decides when playback
    /// starts.
    pub fn set_song_set(&mut self, songs: SongSet) {
        self.songs = Some(songs);
        self.active_index = 0;
        self.load_active();
    }

    /// The bound song set, if loaded
    pub fn song_set(&self) -> Option<&SongSet> {
        self.songs.as_ref()
    }

    /// The currently active song
    pub fn active_song(&self) -> Option<&Song> {
        self.songs.as_ref().and_then(|s| s.get(self.active_index))
    }

    /// Index of the active song within the set
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Switch the active song of a combo
    ///
    /// Resets `current_time`/`duration` to zero and stops playback before
    /// any new playback starts.
    pub fn select_song(&mut self, index: usize) -> Result<()> {
        let len = self.songs.as_ref().map_or(0, SongSet::len);
        if index >= len {
            return Err(RevealError::IndexOutOfBounds(index));
        }
        if index == self.active_index {
            return Ok(());
        }

        self.active_index = index;
        self.load_active();

        if let Some(song) = self.active_song() {
            let song_id = song.id.clone();
            self.pending_events
                .push(PlayerEvent::SongChanged { index, song_id });
        }
        Ok(())
    }

    /// Load the active song into the element, resetting playback state
    fn load_active(&mut self) {
        if self.is_playing {
            self.element.pause();
        }
        self.is_playing = false;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.visualizer.reset();

        match self.active_song().and_then(|s| s.audio_url.clone()) {
            Some(url) if !url.is_empty() => {
                self.element.set_source(&url);
                self.has_source = true;
            }
            _ => {
                // Second song of a combo may not be generated yet
                self.element.clear_source();
                self.has_source = false;
            }
        }
    }

    // ===== Playback control =====

    /// Toggle play/pause
    ///
    /// A rejected play attempt (autoplay policy) leaves `is_playing`
    /// false; playback then waits for the next explicit interaction.
    pub fn toggle(&mut self) {
        if self.is_playing {
            self.element.pause();
            self.set_playing(false);
        } else {
            self.try_play();
        }
    }

    /// Careful automatic play: only marks playing if the element accepted
    ///
    /// Used by the flash-phase autoplay. Rejection degrades silently.
    pub fn try_play(&mut self) {
        if !self.has_source {
            tracing::debug!("play requested with no media source");
            return;
        }
        match self.element.play() {
            Ok(()) => self.set_playing(true),
            Err(e) => {
                tracing::debug!(error = %e, "play attempt rejected");
                self.pending_events.push(PlayerEvent::AutoplayBlocked);
            }
        }
    }

    /// Optimistic automatic play: marks playing before the attempt
    ///
    /// This is the auto-advance path's historical behavior: `is_playing`
    /// goes true even if the element then rejects the call. Kept as-is
    /// deliberately; the asymmetry with `try_play` is pinned by tests.
    pub fn play_optimistic(&mut self) {
        if !self.has_source {
            tracing::debug!("auto-advance play requested with no media source");
            return;
        }
        self.set_playing(true);
        if let Err(e) = self.element.play() {
            tracing::debug!(error = %e, "auto-advance play rejected");
            self.pending_events.push(PlayerEvent::AutoplayBlocked);
        }
    }

    /// Seek to a normalized position in `[0, 1]` of the track
    ///
    /// No-op while the duration is unknown (0 or NaN), so a click on an
    /// unloaded progress bar cannot corrupt state.
    pub fn seek(&mut self, fraction: f64) {
        if !self.duration_known() {
            return;
        }
        let target = fraction.clamp(0.0, 1.0) * self.duration;
        self.element.set_position(target);
        self.current_time = target;
    }

    /// Jump by a signed number of seconds, clamped into `[0, duration]`
    pub fn skip(&mut self, delta_seconds: f64) {
        if !self.duration_known() {
            return;
        }
        let target = (self.current_time + delta_seconds).clamp(0.0, self.duration);
        self.element.set_position(target);
        self.current_time = target;
    }

    // ===== Element events =====

    /// Feed one media event from the platform adapter
    ///
    /// Returns the index of the song to auto-advance to when the current
    /// track ended and the set has a next song; the controller owns the
    /// 1.5 s + 0.3 s advance choreography.
    pub fn handle_media_event(&mut self, event: MediaEvent) -> Option<usize> {
        match event {
            MediaEvent::TimeUpdate { seconds } => {
                self.current_time = seconds;
                None
            }
            MediaEvent::LoadedMetadata { duration_seconds } => {
                self.duration = duration_seconds;
                self.pending_events.push(PlayerEvent::DurationLoaded {
                    seconds: duration_seconds,
                });
                None
            }
            MediaEvent::Ended => {
                self.set_playing(false);
                if let Some(song) = self.active_song() {
                    let song_id = song.id.clone();
                    self.pending_events.push(PlayerEvent::TrackEnded { song_id });
                }
                let len = self.songs.as_ref().map_or(0, SongSet::len);
                let next = self.active_index + 1;
                (next < len).then_some(next)
            }
        }
    }

    // ===== State =====

    /// Whether playback is currently running
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Current position in seconds
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Track duration in seconds (0 until metadata arrives)
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Position as a fraction of the duration, 0 while duration is unknown
    pub fn progress_fraction(&self) -> f64 {
        if self.duration_known() {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Canonical share URL of the bound set
    pub fn share_url(&self) -> Option<String> {
        self.songs.as_ref().map(SongSet::share_url)
    }

    fn duration_known(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.pending_events
                .push(PlayerEvent::StateChanged { is_playing: playing });
        }
    }

    // ===== Visualizer =====

    /// Recompute visualizer bars for one animation frame
    ///
    /// Returns false (and recomputes nothing) unless playing: no trailing
    /// frame may land after a pause.
    pub fn update_visualizer(&mut self, elapsed: Duration) -> bool {
        if !self.is_playing {
            return false;
        }
        self.visualizer.update(elapsed);
        true
    }

    /// Current visualizer bank
    pub fn visualizer(&self) -> &Visualizer {
        &self.visualizer
    }

    // ===== Events =====

    /// Drain all pending events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }
}
