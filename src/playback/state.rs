use std::sync::Arc;

use crate::catalog::{Catalog, Collection, Track};

/// What is playing right now, and from where.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub current: Option<Arc<Track>>,
    pub is_playing: bool,
    /// Playlist the user last started playback from. `None` after playing an
    /// album or a track that belongs to no playlist.
    pub active_collection: Option<Arc<Collection>>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session start state with the first catalog track selected but paused.
    pub fn seeded(catalog: &Catalog) -> Self {
        Self {
            current: catalog.first_track().cloned(),
            ..Self::default()
        }
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref().map(|t| t.id.as_str())
    }

    pub fn is_current(&self, track_id: &str) -> bool {
        self.current_id() == Some(track_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}
