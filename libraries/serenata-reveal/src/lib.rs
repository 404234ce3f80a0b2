//! Serenata Reveal
//!
//! The song-delivery reveal experience and its playback core.
//!
//! This crate provides:
//! - The reveal phase machine (`loading -> mystery -> envelope ->
//!   countdown -> flash -> ready`, with a terminal error state)
//! - Song set fetching with link-order restoration
//! - A playback manager over an abstract `MediaElement` (play/pause,
//!   seek, skip, combo auto-advance)
//! - Confetti batch generation and the cosmetic visualizer
//! - `RevealController`, the async orchestrator owning the cancellable
//!   timer chain
//!
//! # Architecture
//!
//! `serenata-reveal` is platform-agnostic: the browser audio element and
//! the rendering layer sit behind the `MediaElement` trait and the drained
//! event buffers. Everything with real state and timing lives here, where
//! it is testable with a paused clock and a mock element.
//!
//! # Example
//!
//! ```rust,no_run
//! use serenata_reveal::{MediaElement, MediaError, RevealController};
//! use serenata_core::SongSetRequest;
//!
//! struct BrowserAudio;
//! impl MediaElement for BrowserAudio {
//!     fn set_source(&mut self, _url: &str) {}
//!     fn clear_source(&mut self) {}
//!     fn play(&mut self) -> Result<(), MediaError> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn set_position(&mut self, _seconds: f64) {}
//! }
//!
//! # async fn example(store: &dyn serenata_core::SongStore) -> Result<(), Box<dyn std::error::Error>> {
//! let controller = RevealController::new(Box::new(BrowserAudio));
//! let request = SongSetRequest::parse_url("https://serenata.app/song/abc,def")?;
//! controller.load(store, &request).await?;
//! controller.open_gift().await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod confetti;
pub mod controller;
pub mod error;
pub mod events;
pub mod fetcher;
pub mod player;
pub mod sequencer;
pub mod source;
pub mod timing;
pub mod visualizer;

// Public exports
pub use confetti::{ConfettiPiece, CONFETTI_BATCH_SIZE, CONFETTI_PALETTE};
pub use controller::{RevealController, RevealState};
pub use error::{Result, RevealError};
pub use events::{PlayerEvent, RevealEvent};
pub use fetcher::fetch_song_set;
pub use player::PlayerManager;
pub use sequencer::{RevealPhase, RevealSequencer, COUNTDOWN_START};
pub use source::{MediaElement, MediaError, MediaEvent};
pub use timing::RevealTiming;
pub use visualizer::{Visualizer, BAR_COUNT};
