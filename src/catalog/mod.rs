//! Static reference data: artists, tracks, albums, playlists and the home
//! page shelves built from them. Everything here is immutable once built.

pub mod error;
pub mod fixtures;
pub mod model;
pub mod search;

use std::sync::Arc;

pub use error::{CatalogError, EntityKind};
pub use model::{
    Album, Artist, Category, Collection, PlayItem, Track, format_total_duration,
    parse_duration_label,
};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub tracks: Vec<Arc<Track>>,
    pub albums: Vec<Arc<Album>>,
    pub collections: Vec<Arc<Collection>>,
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn new(
        tracks: Vec<Arc<Track>>,
        albums: Vec<Arc<Album>>,
        collections: Vec<Arc<Collection>>,
    ) -> Self {
        Self {
            tracks,
            albums,
            collections,
            categories: Vec::new(),
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn first_track(&self) -> Option<&Arc<Track>> {
        self.tracks.first()
    }

    pub fn track(&self, id: &str) -> Result<Arc<Track>, CatalogError> {
        self.tracks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(EntityKind::Track, id))
    }

    pub fn album(&self, id: &str) -> Result<Arc<Album>, CatalogError> {
        self.albums
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(EntityKind::Album, id))
    }

    pub fn collection(&self, id: &str) -> Result<Arc<Collection>, CatalogError> {
        self.collections
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(EntityKind::Collection, id))
    }

    /// Every catalog track carrying `label` as its album label, in catalog order.
    pub fn album_siblings(&self, label: &str) -> Vec<Arc<Track>> {
        self.tracks
            .iter()
            .filter(|t| t.album == label)
            .cloned()
            .collect()
    }

    /// Collections holding a track with this id, in catalog order.
    pub fn collections_containing<'a>(
        &'a self,
        track_id: &'a str,
    ) -> impl Iterator<Item = &'a Arc<Collection>> + 'a {
        self.collections.iter().filter(move |c| c.contains(track_id))
    }
}
