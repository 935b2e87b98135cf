use std::sync::Arc;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::warn;

use crate::{
    catalog::{Album, Catalog, CatalogError, PlayItem, format_total_duration},
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
        views::track_list::TrackList,
    },
    util::colors,
};

pub struct AlbumDetail {
    album: Result<Arc<Album>, CatalogError>,
    tracks: TrackList,
}

impl AlbumDetail {
    pub fn new(catalog: &Catalog, id: &str) -> Self {
        let album = catalog.album(id);
        if let Err(err) = &album {
            warn!(%err, "cannot open album");
        }
        let tracks = album
            .as_ref()
            .map(|a| a.tracks.clone())
            .unwrap_or_default();

        Self {
            album,
            tracks: TrackList::new(tracks),
        }
    }
}

impl View for AlbumDetail {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let Ok(album) = &self.album else {
            f.render_widget(
                Paragraph::new("Album not found.").style(Style::default().fg(colors::MUTED)),
                area,
            );
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled("ALBUM", Style::default().fg(colors::MUTED))),
            Line::from(Span::styled(
                album.name.clone(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "{} • {} songs, {}",
                album.artist.name,
                album.tracks.len(),
                format_total_duration(album.total_duration())
            )),
        ]);
        f.render_widget(header, chunks[0]);

        self.tracks.render(f, chunks[1], &ctx.playback);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        let album = self.album.as_ref().ok()?;
        match key.code {
            KeyCode::Char('P') => Some(Action::PlayItem(PlayItem::Album(album.clone()))),
            _ => self.tracks.handle_input(key),
        }
    }
}
