//! Reveal sequencer
//!
//! State machine for the gift-reveal choreography a recipient moves through
//! when opening a shared link:
//!
//! ```text
//! loading -> mystery -> envelope -> countdown -> flash -> ready
//!    |
//!    +-> error (terminal)
//! ```
//!
//! Phases only advance, never regress. `ready` is terminal for the reveal:
//! switching songs in a combo afterwards does not re-enter earlier phases.
//! The sequencer itself is synchronous and timer-free; `RevealController`
//! owns the timer chain that drives the automatic transitions.

use crate::confetti::{self, ConfettiPiece};
use crate::error::{Result, RevealError};
use crate::events::RevealEvent;
use serde::{Deserialize, Serialize};

/// Countdown start value (3 -> 2 -> 1)
pub const COUNTDOWN_START: u8 = 3;

/// Phase of the reveal sequence, page-wide (not per song)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// Fetching the song set
    Loading,
    /// Loaded; waiting for the recipient to open the gift
    Mystery,
    /// Envelope-opening animation playing
    Envelope,
    /// Numeric 3-2-1 countdown
    Countdown,
    /// Confetti burst and photo flash
    Flash,
    /// Player fully visible; terminal
    Ready,
    /// Load failed; terminal
    Error,
}

impl RevealPhase {
    /// Position in the forward order; `Error` sits outside it
    fn order(self) -> Option<u8> {
        match self {
            Self::Loading => Some(0),
            Self::Mystery => Some(1),
            Self::Envelope => Some(2),
            Self::Countdown => Some(3),
            Self::Flash => Some(4),
            Self::Ready => Some(5),
            Self::Error => None,
        }
    }

    /// Whether no further transitions can happen from this phase
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ready | Self::Error)
    }
}

/// Caption shown under each countdown number
pub fn countdown_caption(value: u8) -> &'static str {
    match value {
        3 => "Respira hondo...",
        2 => "Alguien penso mucho en ti...",
        _ => "Aqui viene tu cancion!",
    }
}

/// The reveal state machine
///
/// Owns the phase, the countdown value, and the confetti batch. All state
/// lives here rather than scattered across the page, so the sequence is
/// testable without any rendering layer.
#[derive(Debug)]
pub struct RevealSequencer {
    phase: RevealPhase,
    countdown_value: Option<u8>,
    confetti: Vec<ConfettiPiece>,
    error_message: Option<String>,
    pending_events: Vec<RevealEvent>,
}

impl RevealSequencer {
    /// Create a sequencer at `loading`
    pub fn new() -> Self {
        Self {
            phase: RevealPhase::Loading,
            countdown_value: None,
            confetti: Vec::new(),
            error_message: None,
            pending_events: Vec::new(),
        }
    }

    /// Current phase
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Countdown number currently displayed, if in the countdown phase
    pub fn countdown_value(&self) -> Option<u8> {
        self.countdown_value
    }

    /// Live confetti pieces (empty before flash and after self-clear)
    pub fn confetti(&self) -> &[ConfettiPiece] {
        &self.confetti
    }

    /// Error text for the terminal error state
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    // ===== Transitions =====

    /// Fetch succeeded: `loading -> mystery`
    pub fn complete_load(&mut self) -> Result<()> {
        self.advance(RevealPhase::Loading, RevealPhase::Mystery)
    }

    /// Fetch failed: `loading -> error`, absorbing
    ///
    /// No automatic retry; a full page reload starts a new sequencer.
    pub fn fail_load(&mut self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        self.advance(RevealPhase::Loading, RevealPhase::Error)?;
        tracing::warn!(%message, "reveal load failed");
        self.pending_events.push(RevealEvent::LoadFailed {
            message: message.clone(),
        });
        self.error_message = Some(message);
        Ok(())
    }

    /// Explicit user action: `mystery -> envelope`
    ///
    /// This is the only user-initiated transition; everything after it is
    /// timer-driven.
    pub fn open_gift(&mut self) -> Result<()> {
        self.advance(RevealPhase::Mystery, RevealPhase::Envelope)
    }

    /// Timer: `envelope -> countdown`, displaying the first number
    pub fn begin_countdown(&mut self) -> Result<()> {
        self.advance(RevealPhase::Envelope, RevealPhase::Countdown)?;
        self.countdown_value = Some(COUNTDOWN_START);
        self.emit_tick(COUNTDOWN_START);
        Ok(())
    }

    /// Timer: advance the countdown one number (3 -> 2 -> 1)
    ///
    /// Returns the newly displayed value.
    pub fn countdown_tick(&mut self) -> Result<u8> {
        if self.phase != RevealPhase::Countdown {
            return Err(RevealError::InvalidTransition {
                from: self.phase,
                to: RevealPhase::Countdown,
            });
        }
        let next = self.countdown_value.unwrap_or(COUNTDOWN_START).saturating_sub(1).max(1);
        self.countdown_value = Some(next);
        self.emit_tick(next);
        Ok(next)
    }

    /// Timer: `countdown -> flash`, bursting the confetti batch
    ///
    /// The burst happens exactly once per reveal; the transition guard makes
    /// re-entry (and thus regeneration) impossible.
    pub fn enter_flash(&mut self) -> Result<()> {
        self.advance(RevealPhase::Countdown, RevealPhase::Flash)?;
        self.countdown_value = None;
        self.confetti = confetti::burst();
        self.pending_events.push(RevealEvent::ConfettiBurst {
            count: self.confetti.len(),
        });
        Ok(())
    }

    /// Timer: `flash -> ready`, terminal
    ///
    /// Confetti is left alone here; it clears on its own timer.
    pub fn finish_reveal(&mut self) -> Result<()> {
        self.advance(RevealPhase::Flash, RevealPhase::Ready)
    }

    /// Timer: drop the confetti batch (6 s after its creation)
    pub fn clear_confetti(&mut self) {
        if !self.confetti.is_empty() {
            self.confetti.clear();
            self.pending_events.push(RevealEvent::ConfettiCleared);
        }
    }

    // ===== Events =====

    /// Drain all pending events
    pub fn drain_events(&mut self) -> Vec<RevealEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// Validated forward transition
    fn advance(&mut self, expected_from: RevealPhase, to: RevealPhase) -> Result<()> {
        if self.phase != expected_from || self.regresses(to) {
            return Err(RevealError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        tracing::debug!(from = ?self.phase, ?to, "reveal phase transition");
        self.phase = to;
        self.pending_events.push(RevealEvent::PhaseChanged { phase: to });
        Ok(())
    }

    /// A transition regresses if it targets an earlier position in the order
    fn regresses(&self, to: RevealPhase) -> bool {
        match (self.phase.order(), to.order()) {
            (Some(from), Some(to)) => to <= from,
            // Error is only reachable from loading and absorbs everything
            (_, None) => self.phase != RevealPhase::Loading,
            (None, _) => true,
        }
    }

    fn emit_tick(&mut self, value: u8) {
        self.pending_events.push(RevealEvent::CountdownTick {
            value,
            caption: countdown_caption(value).to_string(),
        });
    }
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to(seq: &mut RevealSequencer, phase: RevealPhase) {
        let steps: [(RevealPhase, fn(&mut RevealSequencer)); 5] = [
            (RevealPhase::Mystery, |s| s.complete_load().unwrap()),
            (RevealPhase::Envelope, |s| s.open_gift().unwrap()),
            (RevealPhase::Countdown, |s| s.begin_countdown().unwrap()),
            (RevealPhase::Flash, |s| {
                s.countdown_tick().unwrap();
                s.countdown_tick().unwrap();
                s.enter_flash().unwrap();
            }),
            (RevealPhase::Ready, |s| s.finish_reveal().unwrap()),
        ];
        for (target, step) in steps {
            step(seq);
            if target == phase {
                return;
            }
        }
    }

    #[test]
    fn happy_path_visits_every_phase_in_order() {
        let mut seq = RevealSequencer::new();
        assert_eq!(seq.phase(), RevealPhase::Loading);

        run_to(&mut seq, RevealPhase::Ready);
        assert_eq!(seq.phase(), RevealPhase::Ready);
        assert!(seq.phase().is_terminal());

        let phases: Vec<RevealPhase> = seq
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                RevealEvent::PhaseChanged { phase } => Some(phase),
                _ => None,
            })
            .collect();
        assert_eq!(
            phases,
            vec![
                RevealPhase::Mystery,
                RevealPhase::Envelope,
                RevealPhase::Countdown,
                RevealPhase::Flash,
                RevealPhase::Ready,
            ]
        );
    }

    #[test]
    fn countdown_runs_three_two_one() {
        let mut seq = RevealSequencer::new();
        run_to(&mut seq, RevealPhase::Countdown);
        assert_eq!(seq.countdown_value(), Some(3));
        assert_eq!(seq.countdown_tick().unwrap(), 2);
        assert_eq!(seq.countdown_tick().unwrap(), 1);
        seq.enter_flash().unwrap();
        assert_eq!(seq.countdown_value(), None);
    }

    #[test]
    fn flash_bursts_exactly_eighty_pieces_once() {
        let mut seq = RevealSequencer::new();
        run_to(&mut seq, RevealPhase::Flash);
        assert_eq!(seq.confetti().len(), 80);

        // Terminal transition keeps the batch alive
        seq.finish_reveal().unwrap();
        assert_eq!(seq.confetti().len(), 80);

        // Re-entering flash is impossible, so no regeneration path exists
        assert!(seq.enter_flash().is_err());
        assert_eq!(seq.confetti().len(), 80);
    }

    #[test]
    fn confetti_clears_on_its_own_timer() {
        let mut seq = RevealSequencer::new();
        run_to(&mut seq, RevealPhase::Ready);
        seq.drain_events();

        seq.clear_confetti();
        assert!(seq.confetti().is_empty());
        assert_eq!(seq.drain_events(), vec![RevealEvent::ConfettiCleared]);

        // Clearing twice emits nothing new
        seq.clear_confetti();
        assert!(!seq.has_pending_events());
    }

    #[test]
    fn phases_never_regress() {
        let mut seq = RevealSequencer::new();
        run_to(&mut seq, RevealPhase::Ready);

        assert!(seq.open_gift().is_err());
        assert!(seq.begin_countdown().is_err());
        assert!(seq.finish_reveal().is_err());
        assert_eq!(seq.phase(), RevealPhase::Ready);
    }

    #[test]
    fn open_gift_requires_mystery() {
        let mut seq = RevealSequencer::new();
        assert!(seq.open_gift().is_err());
        assert_eq!(seq.phase(), RevealPhase::Loading);
    }

    #[test]
    fn failed_load_is_absorbing() {
        let mut seq = RevealSequencer::new();
        seq.fail_load("store unreachable").unwrap();
        assert_eq!(seq.phase(), RevealPhase::Error);
        assert_eq!(seq.error_message(), Some("store unreachable"));

        assert!(seq.complete_load().is_err());
        assert!(seq.open_gift().is_err());
        assert_eq!(seq.phase(), RevealPhase::Error);
    }

    #[test]
    fn error_unreachable_after_load() {
        let mut seq = RevealSequencer::new();
        seq.complete_load().unwrap();
        assert!(seq.fail_load("too late").is_err());
        assert_eq!(seq.phase(), RevealPhase::Mystery);
    }

    #[test]
    fn captions_cover_every_number() {
        assert_eq!(countdown_caption(3), "Respira hondo...");
        assert_eq!(countdown_caption(2), "Alguien penso mucho en ti...");
        assert_eq!(countdown_caption(1), "Aqui viene tu cancion!");
    }
}
