//! Reveal choreography timing
//!
//! The delays are design constants tuned to the reveal animations, not
//! arbitrary numbers; they are configurable so tests can compress them and
//! so a future skin can re-tune the choreography.

use std::time::Duration;

/// Timing constants for the reveal sequence and auto-advance
#[derive(Debug, Clone)]
pub struct RevealTiming {
    /// Envelope phase length; lets the opening animation visually complete
    pub envelope_hold: Duration,

    /// Interval between countdown numbers
    pub countdown_step: Duration,

    /// Delay from entering flash until the automatic play attempt
    pub flash_autoplay_delay: Duration,

    /// Total flash phase length before the page settles into ready
    pub flash_hold: Duration,

    /// Confetti batch lifetime, measured from its creation
    pub confetti_lifetime: Duration,

    /// Pause after a track ends before switching to the next song
    pub advance_gap: Duration,

    /// Pause after switching before the auto-play attempt
    pub advance_play_delay: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            envelope_hold: Duration::from_millis(5500),
            countdown_step: Duration::from_secs(1),
            flash_autoplay_delay: Duration::from_millis(800),
            flash_hold: Duration::from_millis(2500),
            confetti_lifetime: Duration::from_secs(6),
            advance_gap: Duration::from_millis(1500),
            advance_play_delay: Duration::from_millis(300),
        }
    }
}
