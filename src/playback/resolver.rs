//! Next/previous resolution over the active playback context.
//!
//! The context is the active playlist if there is one, otherwise the tracks
//! sharing the current track's album label, otherwise the whole catalog.
//! A playlist that no longer holds the current track falls back to the album
//! label siblings. Every operation here is total: missing selections are
//! no-ops.

use std::sync::Arc;

use tracing::debug;

use super::state::{Direction, PlaybackState};
use crate::catalog::{Catalog, Collection, PlayItem, Track};

pub fn resolve_context(catalog: &Catalog, state: &PlaybackState) -> Vec<Arc<Track>> {
    if let Some(collection) = &state.active_collection {
        collection.tracks.clone()
    } else if let Some(current) = &state.current {
        catalog.album_siblings(&current.album)
    } else {
        catalog.tracks.clone()
    }
}

fn position(context: &[Arc<Track>], track_id: &str) -> Option<usize> {
    context.iter().position(|t| t.id == track_id)
}

fn neighbour(len: usize, index: usize, direction: Direction) -> usize {
    match direction {
        Direction::Next => (index + 1) % len,
        Direction::Previous => (index + len - 1) % len,
    }
}

/// Moves to the neighbouring track and starts playing it.
///
/// Returns the newly selected track, or `None` when nothing changed.
pub fn advance(
    catalog: &Catalog,
    state: &mut PlaybackState,
    direction: Direction,
) -> Option<Arc<Track>> {
    let current = state.current.clone()?;
    let context = resolve_context(catalog, state);
    if context.is_empty() {
        return None;
    }

    let (context, index) = match position(&context, &current.id) {
        Some(index) => (context, index),
        None => {
            debug!(track = %current.id, "track outside active context, using album siblings");
            let siblings = catalog.album_siblings(&current.album);
            let index = position(&siblings, &current.id)?;
            (siblings, index)
        }
    };

    let next = context[neighbour(context.len(), index, direction)].clone();
    play(state, next.clone());
    Some(next)
}

/// Selects `track` and starts playing. The active playlist is left alone.
pub fn play(state: &mut PlaybackState, track: Arc<Track>) {
    state.current = Some(track);
    state.is_playing = true;
}

/// Plays a track, album or playlist and updates the active playlist to match.
///
/// A bare track adopts the first playlist in catalog order that contains it.
pub fn play_item(catalog: &Catalog, state: &mut PlaybackState, item: &PlayItem) {
    let first = match item {
        PlayItem::Album(album) => {
            state.active_collection = None;
            album.tracks.first().cloned()
        }
        PlayItem::Collection(collection) => {
            state.active_collection = Some(collection.clone());
            collection.tracks.first().cloned()
        }
        PlayItem::Track(track) => {
            state.active_collection = catalog.collections_containing(&track.id).next().cloned();
            Some(track.clone())
        }
    };

    if let Some(track) = first {
        play(state, track);
    }
}

pub fn play_pause(state: &mut PlaybackState) {
    state.is_playing = !state.is_playing;
}

/// Makes `collection` the active playlist and plays its first track.
/// Empty playlists are ignored.
pub fn play_collection(state: &mut PlaybackState, collection: &Arc<Collection>) {
    let Some(first) = collection.tracks.first().cloned() else {
        return;
    };
    state.active_collection = Some(collection.clone());
    play(state, first);
}

#[cfg(test)]
mod tests;
