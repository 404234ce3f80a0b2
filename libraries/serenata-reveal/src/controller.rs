//! Reveal controller
//!
//! Owns the whole page state (sequencer + player) behind one lock and
//! drives every timed transition. The reveal cascade is a single spawned
//! task awaiting delays in order, not a pile of independent timers: the
//! cancellation token is re-checked under the lock before every timed
//! mutation, so teardown guarantees that nothing fires afterwards.
//!
//! All mutation happens on short lock sections between awaits; nothing is
//! held across an await, and there is no user-facing cancel. The only
//! cancellation path is teardown (drop or explicit).

use crate::error::{Result, RevealError};
use crate::events::{PlayerEvent, RevealEvent};
use crate::fetcher;
use crate::player::PlayerManager;
use crate::sequencer::{RevealPhase, RevealSequencer, COUNTDOWN_START};
use crate::source::{MediaElement, MediaEvent};
use crate::timing::RevealTiming;
use serenata_core::{generate_dedication, RevealTheme, SongSetRequest, SongStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Combined page state: the reveal machine and the player
pub struct RevealState {
    /// The reveal phase machine
    pub sequencer: RevealSequencer,
    /// The playback manager
    pub player: PlayerManager,
}

/// Orchestrator for one reveal page
///
/// Created on mount, torn down on unmount. Everything the page renders is
/// derived from `RevealState`; the controller only choreographs.
pub struct RevealController {
    state: Arc<Mutex<RevealState>>,
    timing: RevealTiming,
    cancel: CancellationToken,
}

impl RevealController {
    /// Create a controller with default timing
    pub fn new(element: Box<dyn MediaElement>) -> Self {
        Self::with_timing(element, RevealTiming::default())
    }

    /// Create a controller with explicit timing (tests compress delays)
    pub fn with_timing(element: Box<dyn MediaElement>, timing: RevealTiming) -> Self {
        Self {
            state: Arc::new(Mutex::new(RevealState {
                sequencer: RevealSequencer::new(),
                player: PlayerManager::new(element),
            })),
            timing,
            cancel: CancellationToken::new(),
        }
    }

    // ===== Loading =====

    /// Fetch the song set and leave `loading`
    ///
    /// Success moves the page to `mystery`; any failure is terminal and
    /// surfaces its message in the error state. No automatic retry.
    pub async fn load(&self, store: &dyn SongStore, request: &SongSetRequest) -> Result<()> {
        match fetcher::fetch_song_set(store, request).await {
            Ok(set) => {
                let mut state = self.state.lock().await;
                state.player.set_song_set(set);
                state.sequencer.complete_load()?;
                Ok(())
            }
            Err(e) => {
                let mut state = self.state.lock().await;
                // Ignore a second failure report once terminal
                let _ = state.sequencer.fail_load(e.to_string());
                Err(e)
            }
        }
    }

    // ===== Reveal choreography =====

    /// The recipient clicked "open gift"
    ///
    /// Moves to `envelope` immediately and spawns the timer chain that
    /// carries the page through countdown, flash, and ready.
    pub async fn open_gift(&self) -> Result<()> {
        self.state.lock().await.sequencer.open_gift()?;
        self.spawn_reveal_chain();
        Ok(())
    }

    fn spawn_reveal_chain(&self) {
        let state = Arc::clone(&self.state);
        let timing = self.timing.clone();
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            // envelope -> countdown
            if !sleep_unless_cancelled(&cancel, timing.envelope_hold).await {
                return;
            }
            if transition(&state, &cancel, |s| s.sequencer.begin_countdown())
                .await
                .is_err()
            {
                return;
            }

            // countdown 3 -> 2 -> 1
            for _ in 1..COUNTDOWN_START {
                if !sleep_unless_cancelled(&cancel, timing.countdown_step).await {
                    return;
                }
                if transition(&state, &cancel, |s| s.sequencer.countdown_tick().map(|_| ()))
                    .await
                    .is_err()
                {
                    return;
                }
            }

            // countdown -> flash, confetti bursts inside the transition
            if !sleep_unless_cancelled(&cancel, timing.countdown_step).await {
                return;
            }
            if transition(&state, &cancel, |s| s.sequencer.enter_flash())
                .await
                .is_err()
            {
                return;
            }

            // flash + 0.8s: automatic play attempt, silent on rejection
            if !sleep_unless_cancelled(&cancel, timing.flash_autoplay_delay).await {
                return;
            }
            if guarded(&state, &cancel, |s| s.player.try_play()).await.is_none() {
                return;
            }

            // flash -> ready at flash + 2.5s
            let to_ready = timing.flash_hold.saturating_sub(timing.flash_autoplay_delay);
            if !sleep_unless_cancelled(&cancel, to_ready).await {
                return;
            }
            if transition(&state, &cancel, |s| s.sequencer.finish_reveal())
                .await
                .is_err()
            {
                return;
            }

            // confetti self-clears 6s after its creation, independent of phase
            let to_clear = timing.confetti_lifetime.saturating_sub(timing.flash_hold);
            if !sleep_unless_cancelled(&cancel, to_clear).await {
                return;
            }
            let _ = guarded(&state, &cancel, |s| s.sequencer.clear_confetti()).await;
        });
    }

    // ===== Playback =====

    /// Feed one media event from the platform adapter
    ///
    /// An `Ended` event on a non-final combo song schedules the
    /// auto-advance: 1.5 s gap, switch (progress reset), 0.3 s, then the
    /// optimistic play attempt.
    pub async fn handle_media_event(&self, event: MediaEvent) {
        let next = self.state.lock().await.player.handle_media_event(event);
        if let Some(index) = next {
            self.spawn_auto_advance(index);
        }
    }

    fn spawn_auto_advance(&self, index: usize) {
        let state = Arc::clone(&self.state);
        let timing = self.timing.clone();
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            if !sleep_unless_cancelled(&cancel, timing.advance_gap).await {
                return;
            }
            match guarded(&state, &cancel, |s| s.player.select_song(index)).await {
                Some(Ok(())) => {}
                Some(Err(e)) => {
                    tracing::warn!(error = %e, index, "auto-advance target out of range");
                    return;
                }
                None => return,
            }
            if !sleep_unless_cancelled(&cancel, timing.advance_play_delay).await {
                return;
            }
            let _ = guarded(&state, &cancel, |s| s.player.play_optimistic()).await;
        });
    }

    /// Toggle play/pause for the active song
    pub async fn toggle(&self) {
        self.state.lock().await.player.toggle();
    }

    /// Seek to a normalized `[0, 1]` position
    pub async fn seek(&self, fraction: f64) {
        self.state.lock().await.player.seek(fraction);
    }

    /// Jump by a signed number of seconds (the +/- 10 s controls)
    pub async fn skip(&self, delta_seconds: f64) {
        self.state.lock().await.player.skip(delta_seconds);
    }

    /// User picked a song from the combo selector
    ///
    /// Valid only once revealed; earlier phases have no selector. The
    /// phase is untouched: `ready` never regresses.
    pub async fn select_song(&self, index: usize) -> Result<()> {
        self.state.lock().await.player.select_song(index)
    }

    /// Advance the visualizer one frame; no-op while paused
    pub async fn update_visualizer(&self, elapsed: Duration) -> bool {
        self.state.lock().await.player.update_visualizer(elapsed)
    }

    // ===== Derived display state =====

    /// Current reveal phase
    pub async fn phase(&self) -> RevealPhase {
        self.state.lock().await.sequencer.phase()
    }

    /// Dedication text for the active song
    pub async fn dedication(&self) -> Option<String> {
        let state = self.state.lock().await;
        state.player.active_song().map(generate_dedication)
    }

    /// Theme for the page, derived from the primary song's occasion
    pub async fn theme(&self) -> RevealTheme {
        let state = self.state.lock().await;
        state
            .player
            .song_set()
            .map_or(RevealTheme::default(), |set| {
                RevealTheme::for_occasion(&set.primary().occasion)
            })
    }

    /// Run a closure against the locked page state
    ///
    /// Escape hatch for rendering layers and tests that need more than the
    /// accessors above.
    pub async fn with_state<R>(&self, f: impl FnOnce(&mut RevealState) -> R) -> R {
        let mut state = self.state.lock().await;
        f(&mut state)
    }

    // ===== Events =====

    /// Drain pending sequencer events
    pub async fn drain_reveal_events(&self) -> Vec<RevealEvent> {
        self.state.lock().await.sequencer.drain_events()
    }

    /// Drain pending player events
    pub async fn drain_player_events(&self) -> Vec<PlayerEvent> {
        self.state.lock().await.player.drain_events()
    }

    // ===== Teardown =====

    /// Cancel every pending timer; nothing fires afterwards
    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Await a delay unless cancelled first; true means the delay elapsed
async fn sleep_unless_cancelled(cancel: &CancellationToken, duration: Duration) -> bool {
    tokio::select! {
        () = cancel.cancelled() => false,
        () = tokio::time::sleep(duration) => true,
    }
}

/// Run one timed mutation under the lock, unless the page was torn down
///
/// Re-checks the cancellation token right before mutating, so a teardown
/// racing the end of a delay still wins: every state change a timer makes
/// goes through here, playback included, not just phase transitions.
/// `None` means torn down.
async fn guarded<R>(
    state: &Arc<Mutex<RevealState>>,
    cancel: &CancellationToken,
    f: impl FnOnce(&mut RevealState) -> R,
) -> Option<R> {
    let mut s = state.lock().await;
    if cancel.is_cancelled() {
        return None;
    }
    Some(f(&mut s))
}

/// Apply one sequencer transition under the lock
///
/// A refused transition (already torn down, unexpected phase) stops the
/// chain.
async fn transition<F>(
    state: &Arc<Mutex<RevealState>>,
    cancel: &CancellationToken,
    f: F,
) -> Result<()>
where
    F: FnOnce(&mut RevealState) -> Result<()>,
{
    match guarded(state, cancel, f).await {
        Some(result) => result.map_err(|e| {
            tracing::debug!(error = %e, "reveal chain stopped");
            e
        }),
        None => Err(RevealError::Cancelled),
    }
}
