pub mod album_detail;
pub mod home;
pub mod library;
pub mod playlist_detail;
pub mod search;
pub mod track_list;

pub use album_detail::AlbumDetail;
pub use home::Home;
pub use library::Library;
pub use playlist_detail::PlaylistDetail;
pub use search::Search;

use crate::{catalog::PlayItem, ui::message::ViewRoute};

/// Where opening an item leads. Songs have no page of their own.
pub fn detail_route(item: &PlayItem) -> Option<ViewRoute> {
    match item {
        PlayItem::Track(_) => None,
        PlayItem::Album(album) => Some(ViewRoute::Album(album.id.clone())),
        PlayItem::Collection(collection) => Some(ViewRoute::Playlist(collection.id.clone())),
    }
}
