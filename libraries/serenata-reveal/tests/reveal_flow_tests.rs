//! End-to-end reveal flow tests
//!
//! Drive `RevealController` against a real in-memory store and a mock media
//! element. Timer-driven tests pause tokio's clock, so the full choreography
//! runs instantly while keeping its exact schedule observable.

use serenata_core::{RevealTheme, Song, SongSetRequest};
use serenata_reveal::{
    MediaElement, MediaError, PlayerEvent, RevealController, RevealEvent, RevealPhase,
};
use serenata_storage::Database;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct MockState {
    sources: Vec<String>,
    play_calls: usize,
    pause_calls: usize,
    reject_play: bool,
}

/// Mock media element recording every call through a shared handle
struct MockElement {
    state: Arc<Mutex<MockState>>,
}

impl MockElement {
    fn new() -> (Self, Arc<Mutex<MockState>>) {
        let state = Arc::new(Mutex::new(MockState::default()));
        let element = Self {
            state: Arc::clone(&state),
        };
        (element, state)
    }

    fn rejecting() -> (Self, Arc<Mutex<MockState>>) {
        let (element, state) = Self::new();
        state.lock().unwrap().reject_play = true;
        (element, state)
    }
}

impl MediaElement for MockElement {
    fn set_source(&mut self, url: &str) {
        self.state.lock().unwrap().sources.push(url.to_string());
    }

    fn clear_source(&mut self) {}

    fn play(&mut self) -> Result<(), MediaError> {
        let mut state = self.state.lock().unwrap();
        state.play_calls += 1;
        if state.reject_play {
            Err(MediaError::AutoplayBlocked)
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) {
        self.state.lock().unwrap().pause_calls += 1;
    }

    fn set_position(&mut self, _seconds: f64) {}
}

fn ready_song(id: &str, recipient: &str) -> Song {
    let mut song = Song::new(id, recipient);
    song.sender_name = "Luis".to_string();
    song.occasion = "cumpleanos".to_string();
    song.audio_url = Some(format!("https://cdn.serenata.app/audio/{id}.mp3"));
    song
}

async fn seeded_db(songs: &[Song]) -> Database {
    let db = Database::in_memory().await.unwrap();
    for song in songs {
        db.insert_song(song).await.unwrap();
    }
    db
}

fn phases(events: &[RevealEvent]) -> Vec<RevealPhase> {
    events
        .iter()
        .filter_map(|e| match e {
            RevealEvent::PhaseChanged { phase } => Some(*phase),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn load_restores_link_order_and_enters_mystery() {
    let db = seeded_db(&[ready_song("a", "Ana"), ready_song("b", "Ana")]).await;
    let (element, _) = MockElement::new();
    let controller = RevealController::new(Box::new(element));
    let request = SongSetRequest::parse_list("b,a").unwrap();

    controller.load(&db, &request).await.unwrap();

    assert_eq!(controller.phase().await, RevealPhase::Mystery);
    let ids = controller
        .with_state(|s| {
            s.player
                .song_set()
                .unwrap()
                .songs()
                .iter()
                .map(|song| song.id.as_str().to_string())
                .collect::<Vec<_>>()
        })
        .await;
    assert_eq!(ids, vec!["b", "a"]);
}

#[tokio::test]
async fn load_binds_theme_and_dedication_from_the_primary_song() {
    let db = seeded_db(&[ready_song("a", "Ana")]).await;
    let (element, _) = MockElement::new();
    let controller = RevealController::new(Box::new(element));
    let request = SongSetRequest::parse_list("a").unwrap();

    controller.load(&db, &request).await.unwrap();

    assert_eq!(controller.theme().await, RevealTheme::Festivo);
    let dedication = controller.dedication().await.unwrap();
    assert!(dedication.contains("Ana"));
    // Same id, same text, every time
    assert_eq!(controller.dedication().await.unwrap(), dedication);
}

#[tokio::test]
async fn unknown_link_ends_in_the_error_phase() {
    let db = seeded_db(&[]).await;
    let (element, _) = MockElement::new();
    let controller = RevealController::new(Box::new(element));
    let request = SongSetRequest::parse_list("nope").unwrap();

    assert!(controller.load(&db, &request).await.is_err());
    assert_eq!(controller.phase().await, RevealPhase::Error);
    let message = controller
        .with_state(|s| s.sequencer.error_message().map(String::from))
        .await;
    assert!(message.is_some());

    // Terminal: the gift cannot be opened afterwards
    assert!(controller.open_gift().await.is_err());
    assert_eq!(controller.phase().await, RevealPhase::Error);
}

#[tokio::test]
async fn unready_primary_song_ends_in_the_error_phase() {
    let db = seeded_db(&[Song::new("a", "Ana")]).await;
    let (element, _) = MockElement::new();
    let controller = RevealController::new(Box::new(element));
    let request = SongSetRequest::parse_list("a").unwrap();

    assert!(controller.load(&db, &request).await.is_err());
    assert_eq!(controller.phase().await, RevealPhase::Error);
}

#[tokio::test]
async fn full_reveal_runs_the_shipped_schedule() {
    let db = seeded_db(&[ready_song("a", "Ana")]).await;
    let (element, mock) = MockElement::new();
    let controller = RevealController::new(Box::new(element));
    let request = SongSetRequest::parse_list("a").unwrap();

    controller.load(&db, &request).await.unwrap();
    // Pause only after setup: pool connects need real time
    tokio::time::pause();
    controller.open_gift().await.unwrap();
    assert_eq!(controller.phase().await, RevealPhase::Envelope);

    // t = 5.6 s: envelope hold (5.5 s) elapsed
    tokio::time::sleep(Duration::from_millis(5600)).await;
    assert_eq!(controller.phase().await, RevealPhase::Countdown);
    assert_eq!(
        controller.with_state(|s| s.sequencer.countdown_value()).await,
        Some(3)
    );

    // t = 8.7 s: three 1 s steps done, flash entered at 8.5 s
    tokio::time::sleep(Duration::from_millis(3100)).await;
    assert_eq!(controller.phase().await, RevealPhase::Flash);
    assert_eq!(
        controller.with_state(|s| s.sequencer.confetti().len()).await,
        80
    );
    // Autoplay waits until flash + 0.8 s
    assert_eq!(mock.lock().unwrap().play_calls, 0);

    // t = 11.3 s: autoplay fired at 9.3 s, ready at 11.0 s
    tokio::time::sleep(Duration::from_millis(2600)).await;
    assert_eq!(controller.phase().await, RevealPhase::Ready);
    assert_eq!(mock.lock().unwrap().play_calls, 1);
    assert!(controller.with_state(|s| s.player.is_playing()).await);
    // Confetti outlives the flash phase
    assert_eq!(
        controller.with_state(|s| s.sequencer.confetti().len()).await,
        80
    );

    // t = 15.3 s: batch self-cleared at 14.5 s (6 s after its creation)
    tokio::time::sleep(Duration::from_secs(4)).await;
    assert!(controller
        .with_state(|s| s.sequencer.confetti().is_empty())
        .await);

    let events = controller.drain_reveal_events().await;
    assert_eq!(
        phases(&events),
        vec![
            RevealPhase::Mystery,
            RevealPhase::Envelope,
            RevealPhase::Countdown,
            RevealPhase::Flash,
            RevealPhase::Ready,
        ]
    );
    assert!(events
        .iter()
        .any(|e| matches!(e, RevealEvent::ConfettiBurst { count: 80 })));
    assert!(events.contains(&RevealEvent::ConfettiCleared));
}

#[tokio::test]
async fn countdown_ticks_carry_their_captions() {
    let db = seeded_db(&[ready_song("a", "Ana")]).await;
    let (element, _) = MockElement::new();
    let controller = RevealController::new(Box::new(element));
    let request = SongSetRequest::parse_list("a").unwrap();

    controller.load(&db, &request).await.unwrap();
    tokio::time::pause();
    controller.open_gift().await.unwrap();
    tokio::time::sleep(Duration::from_millis(8600)).await;

    let ticks: Vec<(u8, String)> = controller
        .drain_reveal_events()
        .await
        .into_iter()
        .filter_map(|e| match e {
            RevealEvent::CountdownTick { value, caption } => Some((value, caption)),
            _ => None,
        })
        .collect();
    assert_eq!(
        ticks,
        vec![
            (3, "Respira hondo...".to_string()),
            (2, "Alguien penso mucho en ti...".to_string()),
            (1, "Aqui viene tu cancion!".to_string()),
        ]
    );
}

#[tokio::test]
async fn teardown_freezes_the_chain() {
    let db = seeded_db(&[ready_song("a", "Ana")]).await;
    let (element, mock) = MockElement::new();
    let controller = RevealController::new(Box::new(element));
    let request = SongSetRequest::parse_list("a").unwrap();

    controller.load(&db, &request).await.unwrap();
    tokio::time::pause();
    controller.open_gift().await.unwrap();

    tokio::time::sleep(Duration::from_secs(1)).await;
    controller.teardown();

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(controller.phase().await, RevealPhase::Envelope);
    assert_eq!(mock.lock().unwrap().play_calls, 0);
}

#[tokio::test]
async fn blocked_autoplay_leaves_the_player_paused() {
    let db = seeded_db(&[ready_song("a", "Ana")]).await;
    let (element, mock) = MockElement::rejecting();
    let controller = RevealController::new(Box::new(element));
    let request = SongSetRequest::parse_list("a").unwrap();

    controller.load(&db, &request).await.unwrap();
    tokio::time::pause();
    controller.open_gift().await.unwrap();
    tokio::time::sleep(Duration::from_millis(11300)).await;

    // The reveal finishes regardless; playback just waits for a tap
    assert_eq!(controller.phase().await, RevealPhase::Ready);
    assert_eq!(mock.lock().unwrap().play_calls, 1);
    assert!(!controller.with_state(|s| s.player.is_playing()).await);
    assert!(controller
        .drain_player_events()
        .await
        .contains(&PlayerEvent::AutoplayBlocked));
}
