use std::sync::Arc;

use super::{Album, Catalog, Collection, Track};

#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub tracks: Vec<Arc<Track>>,
    pub albums: Vec<Arc<Album>>,
    pub collections: Vec<Arc<Collection>>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.albums.is_empty() && self.collections.is_empty()
    }
}

/// Case-insensitive substring search over the catalog.
///
/// Tracks match on title, artist or album label, albums on name or artist,
/// playlists on name. An empty query matches nothing.
pub fn search(catalog: &Catalog, query: &str) -> SearchResults {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults::default();
    }
    let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);

    SearchResults {
        tracks: catalog
            .tracks
            .iter()
            .filter(|t| hit(&t.title) || hit(&t.artist.name) || hit(&t.album))
            .cloned()
            .collect(),
        albums: catalog
            .albums
            .iter()
            .filter(|a| hit(&a.name) || hit(&a.artist.name))
            .cloned()
            .collect(),
        collections: catalog
            .collections
            .iter()
            .filter(|c| hit(&c.name))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::mock_catalog;

    #[test]
    fn matches_artist_name_case_insensitively() {
        let catalog = mock_catalog();
        let results = search(&catalog, "fm-84");
        let titles: Vec<_> = results.tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Running in the Night", "Wild Heart"]);
        assert_eq!(results.albums.len(), 1);
        assert!(results.collections.is_empty());
    }

    #[test]
    fn album_label_matches_tracks_without_album_entity() {
        let catalog = mock_catalog();
        let results = search(&catalog, "dark all");
        assert_eq!(results.tracks.len(), 1);
        assert!(results.albums.is_empty());
    }

    #[test]
    fn empty_query_matches_nothing() {
        let catalog = mock_catalog();
        assert!(search(&catalog, "   ").is_empty());
        assert!(search(&catalog, "zzz").is_empty());
    }
}
