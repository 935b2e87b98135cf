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
    catalog::{Catalog, CatalogError, Collection, format_total_duration},
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
        views::track_list::TrackList,
    },
    util::colors,
};

pub struct PlaylistDetail {
    collection: Result<Arc<Collection>, CatalogError>,
    tracks: TrackList,
}

impl PlaylistDetail {
    pub fn new(catalog: &Catalog, id: &str) -> Self {
        let collection = catalog.collection(id);
        if let Err(err) = &collection {
            warn!(%err, "cannot open playlist");
        }
        let tracks = collection
            .as_ref()
            .map(|c| c.tracks.clone())
            .unwrap_or_default();

        Self {
            collection,
            tracks: TrackList::new(tracks),
        }
    }
}

impl View for PlaylistDetail {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let collection = match &self.collection {
            Ok(collection) => collection,
            Err(_) => {
                f.render_widget(
                    Paragraph::new("Playlist not found.").style(Style::default().fg(colors::MUTED)),
                    area,
                );
                return;
            }
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        let owner = collection.owner.as_deref().unwrap_or("Spotify");
        let header = Paragraph::new(vec![
            Line::from(Span::styled("PLAYLIST", Style::default().fg(colors::MUTED))),
            Line::from(Span::styled(
                collection.name.clone(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                collection.description.clone().unwrap_or_default(),
                Style::default().fg(colors::MUTED),
            )),
            Line::from(format!(
                "{owner} • {} songs, {}",
                collection.tracks.len(),
                format_total_duration(collection.total_duration())
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
        let collection = self.collection.as_ref().ok()?;
        match key.code {
            KeyCode::Char('P') => Some(Action::PlayCollection(collection.clone())),
            _ => self.tracks.handle_input(key),
        }
    }
}
