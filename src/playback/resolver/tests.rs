use super::*;
use crate::catalog::{Album, Artist, fixtures::mock_catalog};

fn titles(tracks: &[Arc<Track>]) -> Vec<&str> {
    tracks.iter().map(|t| t.title.as_str()).collect()
}

fn current_title(state: &PlaybackState) -> &str {
    state.current.as_deref().map(|t| t.title.as_str()).unwrap_or("")
}

fn empty_collection() -> Arc<Collection> {
    Arc::new(Collection {
        id: "empty".into(),
        name: "Empty".into(),
        description: None,
        owner: None,
        cover_url: String::new(),
        tracks: Vec::new(),
    })
}

#[test]
fn context_prefers_active_collection() {
    let catalog = mock_catalog();
    let chill = catalog.collection("playlist2").unwrap();
    let state = PlaybackState {
        current: Some(catalog.track("song3").unwrap()),
        is_playing: true,
        active_collection: Some(chill),
    };

    assert_eq!(
        titles(&resolve_context(&catalog, &state)),
        ["Lost Boy", "Days of Thunder", "Wild Heart"]
    );
}

#[test]
fn context_uses_album_label_then_full_catalog() {
    let catalog = mock_catalog();
    let mut state = PlaybackState::new();
    assert_eq!(resolve_context(&catalog, &state).len(), catalog.tracks.len());

    state.current = Some(catalog.track("song7").unwrap());
    assert_eq!(
        titles(&resolve_context(&catalog, &state)),
        ["Sunset", "Jason"]
    );
}

#[test]
fn next_wraps_within_album_siblings() {
    let catalog = mock_catalog();
    let mut state = PlaybackState::new();
    play(&mut state, catalog.track("song7").unwrap());
    state.is_playing = false;

    let picked = advance(&catalog, &mut state, Direction::Next).unwrap();

    assert_eq!(picked.title, "Sunset");
    assert_eq!(current_title(&state), "Sunset");
    assert!(state.is_playing);
}

#[test]
fn previous_wraps_to_last_entry() {
    let catalog = mock_catalog();
    let mut state = PlaybackState::new();
    play_collection(&mut state, &catalog.collection("playlist1").unwrap());

    advance(&catalog, &mut state, Direction::Previous);

    assert_eq!(current_title(&state), "Tech Noir");
}

#[test]
fn collection_cycle_wraps_to_start() {
    let catalog = mock_catalog();
    let chill = catalog.collection("playlist2").unwrap();
    let mut state = PlaybackState::new();

    play_collection(&mut state, &chill);
    assert_eq!(current_title(&state), "Lost Boy");
    assert!(state.is_playing);
    assert_eq!(state.active_collection.as_ref(), Some(&chill));

    let mut seen = Vec::new();
    for _ in 0..3 {
        advance(&catalog, &mut state, Direction::Next);
        seen.push(current_title(&state).to_string());
    }
    assert_eq!(seen, ["Days of Thunder", "Wild Heart", "Lost Boy"]);
}

#[test]
fn next_then_previous_round_trips() {
    let catalog = mock_catalog();
    for collection in &catalog.collections {
        for track in &collection.tracks {
            let mut state = PlaybackState {
                current: Some(track.clone()),
                is_playing: false,
                active_collection: Some(collection.clone()),
            };
            advance(&catalog, &mut state, Direction::Next);
            advance(&catalog, &mut state, Direction::Previous);
            assert_eq!(state.current_id(), Some(track.id.as_str()));
        }
    }
}

#[test]
fn stale_collection_falls_back_to_album_siblings() {
    let catalog = mock_catalog();
    let chill = catalog.collection("playlist2").unwrap();
    let mut state = PlaybackState::new();
    play_collection(&mut state, &chill);

    // Picked directly, e.g. from search: Jason is not in Chill Vibes.
    play(&mut state, catalog.track("song7").unwrap());
    advance(&catalog, &mut state, Direction::Next);

    assert_eq!(current_title(&state), "Sunset");
    assert_eq!(state.active_collection.as_ref(), Some(&chill));

    advance(&catalog, &mut state, Direction::Previous);
    assert_eq!(current_title(&state), "Jason");
}

#[test]
fn unknown_track_is_a_no_op() {
    let catalog = mock_catalog();
    let stray = Arc::new(Track {
        id: "stray".into(),
        title: "Stray".into(),
        artist: Artist {
            id: "x".into(),
            name: "X".into(),
        },
        album: "Endless Summer".into(),
        duration: "1:00".into(),
        art_url: String::new(),
    });
    let mut state = PlaybackState {
        current: Some(stray),
        is_playing: false,
        active_collection: catalog.collection("playlist2").ok(),
    };
    let before = state.clone();

    assert!(advance(&catalog, &mut state, Direction::Next).is_none());
    assert_eq!(state, before);
}

#[test]
fn advance_without_track_or_context_is_a_no_op() {
    let catalog = mock_catalog();
    let mut state = PlaybackState::new();
    assert!(advance(&catalog, &mut state, Direction::Next).is_none());
    assert_eq!(state, PlaybackState::new());

    let mut state = PlaybackState {
        current: catalog.track("song1").ok(),
        is_playing: false,
        active_collection: Some(empty_collection()),
    };
    let before = state.clone();
    assert!(advance(&catalog, &mut state, Direction::Previous).is_none());
    assert_eq!(state, before);
}

#[test]
fn play_item_album_clears_collection() {
    let catalog = mock_catalog();
    let mut state = PlaybackState::new();
    play_collection(&mut state, &catalog.collection("playlist1").unwrap());

    play_item(
        &catalog,
        &mut state,
        &PlayItem::Album(catalog.album("album3").unwrap()),
    );

    assert_eq!(current_title(&state), "Running in the Night");
    assert!(state.is_playing);
    assert!(state.active_collection.is_none());
}

#[test]
fn play_item_collection_sets_it_active() {
    let catalog = mock_catalog();
    let workout = catalog.collection("playlist5").unwrap();
    let mut state = PlaybackState::seeded(&catalog);

    play_item(&catalog, &mut state, &PlayItem::Collection(workout.clone()));

    assert_eq!(current_title(&state), "Vampires");
    assert_eq!(state.active_collection, Some(workout));
}

#[test]
fn play_item_track_adopts_first_containing_collection() {
    let catalog = mock_catalog();
    let mut state = PlaybackState::new();

    // Sunset sits in Synthwave Dreams, Liked Songs and Focus Flow.
    play_item(
        &catalog,
        &mut state,
        &PlayItem::Track(catalog.track("song1").unwrap()),
    );
    assert_eq!(
        state.active_collection.as_ref().map(|c| c.id.as_str()),
        Some("playlist1")
    );

    // Jason only sits in Focus Flow.
    play_item(
        &catalog,
        &mut state,
        &PlayItem::Track(catalog.track("song7").unwrap()),
    );
    assert_eq!(
        state.active_collection.as_ref().map(|c| c.id.as_str()),
        Some("playlist4")
    );
}

#[test]
fn play_item_track_outside_playlists_clears_collection() {
    let catalog = mock_catalog();
    let lone = Arc::new(Track {
        id: "lone".into(),
        title: "Lone".into(),
        artist: catalog.tracks[0].artist.clone(),
        album: "Solo".into(),
        duration: "2:00".into(),
        art_url: String::new(),
    });
    let mut state = PlaybackState::new();
    play_collection(&mut state, &catalog.collection("playlist2").unwrap());

    play_item(&catalog, &mut state, &PlayItem::Track(lone));

    assert_eq!(current_title(&state), "Lone");
    assert!(state.active_collection.is_none());
}

#[test]
fn play_item_empty_album_keeps_current_track() {
    let catalog = mock_catalog();
    let empty = Arc::new(Album {
        id: "void".into(),
        name: "Void".into(),
        artist: catalog.tracks[0].artist.clone(),
        cover_url: String::new(),
        tracks: Vec::new(),
    });
    let mut state = PlaybackState::seeded(&catalog);
    state.active_collection = catalog.collection("playlist1").ok();

    play_item(&catalog, &mut state, &PlayItem::Album(empty));

    assert_eq!(current_title(&state), "Sunset");
    assert!(!state.is_playing);
    assert!(state.active_collection.is_none());
}

#[test]
fn play_collection_ignores_empty_collection() {
    let catalog = mock_catalog();
    let mut state = PlaybackState::seeded(&catalog);
    state.active_collection = catalog.collection("playlist3").ok();
    let before = state.clone();

    play_collection(&mut state, &empty_collection());

    assert_eq!(state, before);
}

#[test]
fn play_keeps_collection_and_play_pause_toggles() {
    let catalog = mock_catalog();
    let chill = catalog.collection("playlist2").unwrap();
    let mut state = PlaybackState::new();
    play_collection(&mut state, &chill);

    play(&mut state, catalog.track("song10").unwrap());
    assert_eq!(state.active_collection, Some(chill));

    play_pause(&mut state);
    assert!(!state.is_playing);
    assert_eq!(state.current_id(), Some("song10"));
    play_pause(&mut state);
    assert!(state.is_playing);
}
