//! Cosmetic playback visualizer
//!
//! A fixed bank of bar heights recomputed every animation frame while the
//! player is playing. Heights are a deterministic wave of elapsed time and
//! bar index plus a small random jitter. The bank must stop updating the
//! instant playback pauses; the player enforces that guard.

use rand::Rng;
use std::time::Duration;

/// Number of bars in the bank
pub const BAR_COUNT: usize = 24;

/// Resting height shown while paused
const BASELINE: f32 = 0.15;

/// Bar-height bank for the playback visualizer
#[derive(Debug, Clone)]
pub struct Visualizer {
    bars: [f32; BAR_COUNT],
}

impl Visualizer {
    /// Create a bank at the resting baseline
    pub fn new() -> Self {
        Self {
            bars: [BASELINE; BAR_COUNT],
        }
    }

    /// Current bar heights, each in `[0, 1]`
    pub fn bars(&self) -> &[f32; BAR_COUNT] {
        &self.bars
    }

    /// Recompute the bank for one animation frame
    ///
    /// `elapsed` is wall-clock time since playback started (or any
    /// monotonic reference; only its progression matters).
    pub fn update(&mut self, elapsed: Duration) {
        let t = elapsed.as_secs_f32();
        let mut rng = rand::thread_rng();
        for (i, bar) in self.bars.iter_mut().enumerate() {
            let wave = ((t * 2.4 + i as f32 * 0.65).sin() * 0.5 + 0.5) * 0.72;
            let jitter = rng.gen_range(-0.08..0.08_f32);
            *bar = (BASELINE + wave + jitter).clamp(0.05, 1.0);
        }
    }

    /// Drop back to the resting baseline (e.g. on song switch)
    pub fn reset(&mut self) {
        self.bars = [BASELINE; BAR_COUNT];
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}
