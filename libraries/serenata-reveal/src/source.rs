//! Media element abstraction
//!
//! The production player drives a browser audio element; tests drive a
//! mock. The trait mirrors the element's imperative surface, and the
//! element reports back through `MediaEvent`s fed into the player, exactly
//! as the browser delivers `timeupdate` / `loadedmetadata` / `ended`.
//!
//! Listener discipline is the platform adapter's job: it must rebind its
//! listeners when the source changes and detach them on unmount, so events
//! are never misattributed across song switches.

use thiserror::Error;

/// Errors surfaced by a media element
#[derive(Debug, Error)]
pub enum MediaError {
    /// The browser rejected play(), typically an autoplay policy
    #[error("Autoplay blocked")]
    AutoplayBlocked,

    /// Any other element failure
    #[error("Media element error: {0}")]
    Element(String),
}

/// Imperative control surface of a single audio element
pub trait MediaElement: Send {
    /// Point the element at a new media URL
    ///
    /// Must not start playback on its own.
    fn set_source(&mut self, url: &str);

    /// Detach any media source (song with no audio yet)
    fn clear_source(&mut self);

    /// Start playback
    ///
    /// # Errors
    /// Returns an error when the element refuses to start, e.g. an
    /// autoplay policy rejection.
    fn play(&mut self) -> Result<(), MediaError>;

    /// Pause playback
    fn pause(&mut self);

    /// Seek the element to an absolute position in seconds
    fn set_position(&mut self, seconds: f64);
}

/// Events delivered by the platform adapter from the bound element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Periodic position report
    TimeUpdate {
        /// Current position in seconds
        seconds: f64,
    },

    /// Metadata loaded; duration is now known
    LoadedMetadata {
        /// Track duration in seconds
        duration_seconds: f64,
    },

    /// Playback reached the natural end of the track
    Ended,
}
