use std::{sync::Arc, time::Duration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: Artist,
    /// Free-text album label. Not a reference to an [`Album`] id.
    pub album: String,
    /// Display duration such as `5:18`.
    pub duration: String,
    pub art_url: String,
}

impl Track {
    pub fn duration(&self) -> Option<Duration> {
        parse_duration_label(&self.duration)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artist: Artist,
    pub cover_url: String,
    pub tracks: Vec<Arc<Track>>,
}

/// A user or editorial playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub cover_url: String,
    pub tracks: Vec<Arc<Track>>,
}

impl Collection {
    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|t| t.id == track_id)
    }

    pub fn total_duration(&self) -> Duration {
        total_duration(&self.tracks)
    }
}

impl Album {
    pub fn total_duration(&self) -> Duration {
        total_duration(&self.tracks)
    }
}

/// Anything the user can press "play" on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayItem {
    Track(Arc<Track>),
    Album(Arc<Album>),
    Collection(Arc<Collection>),
}

impl PlayItem {
    pub fn id(&self) -> &str {
        match self {
            PlayItem::Track(t) => &t.id,
            PlayItem::Album(a) => &a.id,
            PlayItem::Collection(c) => &c.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PlayItem::Track(t) => &t.title,
            PlayItem::Album(a) => &a.name,
            PlayItem::Collection(c) => &c.name,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            PlayItem::Track(_) => "Song",
            PlayItem::Album(_) => "Album",
            PlayItem::Collection(_) => "Playlist",
        }
    }

    /// Secondary line shown under the item name on cards.
    pub fn subtitle(&self) -> Option<&str> {
        match self {
            PlayItem::Track(t) => Some(&t.artist.name),
            PlayItem::Album(a) => Some(&a.artist.name),
            PlayItem::Collection(c) => c.owner.as_deref().or(c.description.as_deref()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub items: Vec<PlayItem>,
}

/// Parses an `m:ss` label. Anything else yields `None`.
pub fn parse_duration_label(label: &str) -> Option<Duration> {
    let (minutes, seconds) = label.trim().split_once(':')?;
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(Duration::from_secs(minutes * 60 + seconds))
}

fn total_duration(tracks: &[Arc<Track>]) -> Duration {
    tracks.iter().filter_map(|t| t.duration()).sum()
}

/// Renders a collection length the way the header shows it, e.g. `about 0 hr 20 min`.
pub fn format_total_duration(duration: Duration) -> String {
    let minutes = duration.as_secs_f64() / 60.0;
    let hours = (minutes / 60.0).floor() as u64;
    let rest = (minutes % 60.0).round() as u64;
    format!("about {hours} hr {rest} min")
}
