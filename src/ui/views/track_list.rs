use std::sync::Arc;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    catalog::Track,
    playback::PlaybackSystem,
    ui::{
        components::song_row::{header_row, song_row},
        traits::Action,
        util::navigate_list,
    },
    util::colors,
};

/// Song listing shared by the album and playlist pages.
pub struct TrackList {
    tracks: Vec<Arc<Track>>,
    list_state: ListState,
}

impl TrackList {
    pub fn new(tracks: Vec<Arc<Track>>) -> Self {
        let mut list_state = ListState::default();
        if !tracks.is_empty() {
            list_state.select(Some(0));
        }
        Self { tracks, list_state }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, playback: &PlaybackSystem) {
        if self.tracks.is_empty() {
            f.render_widget(
                Paragraph::new("No songs here yet.").style(Style::default().fg(colors::MUTED)),
                area,
            );
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let width = area.width.saturating_sub(2) as usize;
        f.render_widget(Paragraph::new(header_row(width)), chunks[0]);

        let is_playing = playback.is_playing();
        let items: Vec<ListItem> = self
            .tracks
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let is_current = playback.state().is_current(&track.id);
                song_row(i + 1, track, is_current, is_playing, width)
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    /// Selection keys, and `enter` to play the selected song on its own.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if navigate_list(&mut self.list_state, self.tracks.len(), key.code) {
            return Some(Action::None);
        }

        match key.code {
            KeyCode::Enter => self
                .list_state
                .selected()
                .and_then(|i| self.tracks.get(i))
                .cloned()
                .map(Action::PlayTrack),
            _ => None,
        }
    }
}
