//! Confetti batch generation
//!
//! Purely presentational particles for the flash phase. The batch is
//! generated exactly once per reveal, when the sequencer enters flash, and
//! lives on its own clear timer: it must survive the flash-to-ready
//! transition and never regenerate on re-render.

use rand::Rng;
use serde::Serialize;

/// Number of pieces in one burst
pub const CONFETTI_BATCH_SIZE: usize = 80;

/// Fixed palette the pieces draw from
pub const CONFETTI_PALETTE: [&str; 7] = [
    "#ff6b81", "#ffd166", "#06d6a0", "#4d96ff", "#c77dff", "#ff9f1c", "#f1faee",
];

/// One ephemeral confetti particle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfettiPiece {
    /// Horizontal start position, percent of viewport width
    pub left_pct: f32,

    /// Animation start delay in seconds
    pub delay_s: f32,

    /// Fall duration in seconds
    pub duration_s: f32,

    /// Fill color from the palette
    pub color: &'static str,

    /// Square size in pixels
    pub size_px: f32,

    /// Initial rotation in degrees
    pub rotation_deg: f32,
}

/// Generate one full batch of confetti
pub fn burst() -> Vec<ConfettiPiece> {
    let mut rng = rand::thread_rng();
    (0..CONFETTI_BATCH_SIZE)
        .map(|_| ConfettiPiece {
            left_pct: rng.gen_range(0.0..100.0),
            delay_s: rng.gen_range(0.0..1.5),
            duration_s: rng.gen_range(2.5..4.5),
            color: CONFETTI_PALETTE[rng.gen_range(0..CONFETTI_PALETTE.len())],
            size_px: rng.gen_range(6.0..14.0),
            rotation_deg: rng.gen_range(0.0..360.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_is_exactly_batch_sized() {
        assert_eq!(burst().len(), CONFETTI_BATCH_SIZE);
    }

    #[test]
    fn pieces_stay_in_range() {
        for piece in burst() {
            assert!((0.0..100.0).contains(&piece.left_pct));
            assert!((0.0..1.5).contains(&piece.delay_s));
            assert!((2.5..4.5).contains(&piece.duration_s));
            assert!((6.0..14.0).contains(&piece.size_px));
            assert!((0.0..360.0).contains(&piece.rotation_deg));
            assert!(CONFETTI_PALETTE.contains(&piece.color));
        }
    }
}
