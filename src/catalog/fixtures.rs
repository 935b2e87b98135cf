//! The mock library the application ships with.

use std::sync::Arc;

use lazy_static::lazy_static;

use super::{Album, Artist, Catalog, Category, Collection, PlayItem, Track};

lazy_static! {
    static ref MOCK_CATALOG: Arc<Catalog> = Arc::new(build());
}

/// Shared handle to the built-in catalog.
pub fn mock_catalog() -> Arc<Catalog> {
    MOCK_CATALOG.clone()
}

fn artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn art(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/300/300")
}

fn build() -> Catalog {
    let midnight = artist("artist1", "The Midnight");
    let fm84 = artist("artist2", "FM-84");
    let gunship = artist("artist3", "Gunship");

    let songs: Vec<Arc<Track>> = [
        ("song1", "Sunset", &midnight, "Endless Summer", "5:18", "sunset"),
        ("song2", "Vampires", &midnight, "Nocturnal", "4:30", "vampires"),
        ("song3", "Lost Boy", &midnight, "Kids", "3:55", "lostboy"),
        ("song4", "Running in the Night", &fm84, "Atlas", "4:20", "atlasfm"),
        ("song5", "Tech Noir", &gunship, "GUNSHIP", "4:50", "technoir"),
        ("song6", "Days of Thunder", &midnight, "Days of Thunder", "5:25", "daysofthunder"),
        ("song7", "Jason", &midnight, "Endless Summer", "5:30", "jason"),
        ("song8", "Shadows", &midnight, "Monsters", "6:11", "shadows"),
        ("song9", "Wild Heart", &fm84, "Atlas", "3:58", "wildheart"),
        (
            "song10",
            "When You Grow Up, Your Heart Dies",
            &gunship,
            "Dark All Day",
            "5:48",
            "darkallday",
        ),
    ]
    .into_iter()
    .map(|(id, title, artist, album, duration, seed)| {
        Arc::new(Track {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.clone(),
            album: album.to_string(),
            duration: duration.to_string(),
            art_url: art(seed),
        })
    })
    .collect();

    let pick = |indices: &[usize]| -> Vec<Arc<Track>> {
        indices.iter().map(|&i| songs[i].clone()).collect()
    };

    let album = |id: &str, name: &str, artist: &Artist, tracks: &[usize]| {
        Arc::new(Album {
            id: id.to_string(),
            name: name.to_string(),
            artist: artist.clone(),
            cover_url: art(id),
            tracks: pick(tracks),
        })
    };

    let albums = vec![
        album("album1", "Endless Summer", &midnight, &[0, 6]),
        album("album2", "Nocturnal", &midnight, &[1]),
        album("album3", "Atlas", &fm84, &[3, 8]),
        album("album4", "GUNSHIP", &gunship, &[4]),
        album("album5", "Monsters", &midnight, &[7]),
    ];

    let playlist = |id: &str,
                    name: &str,
                    description: &str,
                    seed: &str,
                    tracks: &[usize],
                    owner: Option<&str>| {
        Arc::new(Collection {
            id: id.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            owner: owner.map(str::to_string),
            cover_url: art(seed),
            tracks: pick(tracks),
        })
    };

    let collections = vec![
        playlist(
            "playlist1",
            "Synthwave Dreams",
            "Retro waves for late night drives.",
            "playlist1",
            &[0, 1, 3, 4],
            Some("Spotify"),
        ),
        playlist(
            "playlist2",
            "Chill Vibes",
            "Relax and unwind with these tunes.",
            "playlist2",
            &[2, 5, 8],
            Some("User123"),
        ),
        playlist(
            "playlist3",
            "Liked Songs",
            "Your favorite tracks.",
            "liked",
            &[0, 4, 7, 9],
            None,
        ),
        playlist(
            "playlist4",
            "Focus Flow",
            "Instrumental synth to concentrate.",
            "focus",
            &[0, 6],
            None,
        ),
        playlist(
            "playlist5",
            "Workout Beats",
            "High energy tracks for your workout.",
            "workout",
            &[1, 4, 9],
            None,
        ),
    ];

    let shelf = |id: &str, name: &str, items: Vec<PlayItem>| Category {
        id: id.to_string(),
        name: name.to_string(),
        items,
    };
    let playlist_item = |i: usize| PlayItem::Collection(collections[i].clone());
    let album_item = |i: usize| PlayItem::Album(albums[i].clone());

    let categories = vec![
        shelf("cat1", "Focus", vec![playlist_item(3)]),
        shelf("cat2", "Chill", vec![playlist_item(1)]),
        shelf(
            "cat3",
            "Made For You",
            vec![playlist_item(0), playlist_item(4)],
        ),
        shelf(
            "cat4",
            "Recently Played",
            vec![playlist_item(2), album_item(0), album_item(2)],
        ),
    ];

    Catalog::new(songs, albums, collections).with_categories(categories)
}
