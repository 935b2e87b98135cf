use std::time::Duration;

use flume::Receiver;

use super::*;
use crate::catalog::fixtures::mock_catalog;

fn settings() -> PlayerSettings {
    PlayerSettings {
        tick_interval_ms: 1000,
        simulated_duration_secs: 3,
        ..PlayerSettings::default()
    }
}

fn system_with(settings: PlayerSettings) -> (PlaybackSystem, Receiver<Event>) {
    let (tx, rx) = flume::unbounded();
    (PlaybackSystem::new(mock_catalog(), settings, tx), rx)
}

fn pump(system: &mut PlaybackSystem, rx: &Receiver<Event>) {
    for event in rx.drain() {
        match event {
            Event::ProgressTick(generation) => system.on_progress_tick(generation),
            Event::ProgressFinished(generation) => system.on_progress_finished(generation),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn session_starts_seeded_and_idle() {
    let (system, _rx) = system_with(settings());

    assert_eq!(system.state().current_id(), Some("song1"));
    assert!(!system.is_playing());
    assert!(!system.is_timer_running());
    assert_eq!(system.volume(), 75);
}

#[tokio::test(start_paused = true)]
async fn unseeded_session_has_no_track() {
    let (system, _rx) = system_with(PlayerSettings {
        seed_first_track: false,
        ..settings()
    });
    assert!(system.current_track().is_none());
    assert!(!system.is_liked());
}

#[tokio::test(start_paused = true)]
async fn progress_advances_and_clamps() {
    let (mut system, rx) = system_with(settings());
    let chill = system.catalog().collection("playlist2").unwrap();
    system.play_collection(&chill);
    assert!(system.is_timer_running());

    tokio::time::sleep(Duration::from_millis(1500)).await;
    pump(&mut system, &rx);
    assert_eq!(system.progress().get_progress().0, Duration::from_secs(1));

    tokio::time::sleep(Duration::from_secs(10)).await;
    pump(&mut system, &rx);
    assert!(system.progress().is_finished());
    assert_eq!(system.progress().percent(), 100.0);
    assert!(!system.is_timer_running());
    // Reaching the end does not skip to the next track.
    assert_eq!(system.state().current_id(), Some("song3"));
}

#[tokio::test(start_paused = true)]
async fn track_change_keeps_a_single_timer() {
    let (mut system, rx) = system_with(settings());
    system.play_pause();
    assert_eq!(system.pending_tasks(), 1);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    pump(&mut system, &rx);
    assert_eq!(system.progress().get_progress().0, Duration::from_secs(1));

    system.next();
    assert_eq!(system.pending_tasks(), 1);
    assert_eq!(system.progress().get_progress().0, Duration::ZERO);

    system.next();
    system.previous();
    assert_eq!(system.pending_tasks(), 1);

    tokio::time::sleep(Duration::from_millis(1200)).await;
    pump(&mut system, &rx);
    assert_eq!(system.progress().get_progress().0, Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn pausing_cancels_the_timer_and_resets_progress() {
    let (mut system, rx) = system_with(settings());
    system.play_pause();
    tokio::time::sleep(Duration::from_millis(2500)).await;
    pump(&mut system, &rx);
    assert_eq!(system.progress().get_progress().0, Duration::from_secs(2));

    system.play_pause();
    assert!(!system.is_timer_running());
    assert_eq!(system.pending_tasks(), 0);
    assert_eq!(system.progress().get_progress().0, Duration::ZERO);

    tokio::time::sleep(Duration::from_secs(5)).await;
    pump(&mut system, &rx);
    assert_eq!(system.progress().get_progress().0, Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn ticks_from_a_replaced_timer_are_dropped() {
    let (mut system, _rx) = system_with(settings());
    system.play_pause();
    let stale = system.progress().get_generation();

    system.next();
    system.on_progress_tick(stale);
    assert_eq!(system.progress().get_progress().0, Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn replaying_the_current_track_keeps_progress() {
    let (mut system, rx) = system_with(settings());
    system.play_pause();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    pump(&mut system, &rx);

    let current = system.current_track().cloned().unwrap();
    system.play(current);

    assert_eq!(system.progress().get_progress().0, Duration::from_secs(1));
    assert_eq!(system.pending_tasks(), 1);
}

#[tokio::test(start_paused = true)]
async fn empty_collection_leaves_everything_alone() {
    let (mut system, _rx) = system_with(settings());
    let empty = Arc::new(Collection {
        id: "empty".into(),
        name: "Empty".into(),
        description: None,
        owner: None,
        cover_url: String::new(),
        tracks: Vec::new(),
    });
    let before = system.state().clone();
    let generation = system.progress().get_generation();

    system.play_collection(&empty);

    assert_eq!(system.state(), &before);
    assert_eq!(system.progress().get_generation(), generation);
    assert!(!system.is_timer_running());
}

#[tokio::test(start_paused = true)]
async fn play_item_routes_through_resolver() {
    let (mut system, _rx) = system_with(settings());
    let album = system.catalog().album("album1").unwrap();
    system.play_item(&PlayItem::Album(album));
    system.next();

    assert_eq!(system.state().current_id(), Some("song7"));
    assert!(system.active_collection().is_none());
    assert!(system.is_timer_running());

    system.shutdown();
    assert_eq!(system.pending_tasks(), 0);
}

#[tokio::test(start_paused = true)]
async fn volume_and_mute() {
    let (mut system, _rx) = system_with(settings());

    system.volume_up();
    assert_eq!(system.volume(), 80);
    system.set_volume(250);
    assert_eq!(system.volume(), 100);

    system.toggle_mute();
    assert!(system.is_muted());
    assert_eq!(system.volume(), 0);
    system.toggle_mute();
    assert!(!system.is_muted());
    assert_eq!(system.volume(), 75);

    system.set_volume(0);
    assert!(system.is_muted());
    system.volume_down();
    assert_eq!(system.volume(), 0);
}

#[tokio::test(start_paused = true)]
async fn like_toggles_only_with_a_track() {
    let (mut system, _rx) = system_with(settings());
    let liked = system.is_liked();
    system.toggle_like();
    assert_eq!(system.is_liked(), !liked);

    let (mut empty, _rx) = system_with(PlayerSettings {
        seed_first_track: false,
        ..settings()
    });
    empty.toggle_like();
    assert!(!empty.is_liked());
}
