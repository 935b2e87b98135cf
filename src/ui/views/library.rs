use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    catalog::{Catalog, PlayItem},
    ui::{
        components::item_row::item_row,
        context::AppContext,
        state::AppState,
        traits::{Action, View},
        util::navigate_list,
        views::detail_route,
    },
    util::colors,
};

pub struct Library {
    items: Vec<PlayItem>,
    list_state: ListState,
}

impl Library {
    pub fn new(catalog: &Catalog) -> Self {
        let items: Vec<PlayItem> = catalog
            .collections
            .iter()
            .cloned()
            .map(PlayItem::Collection)
            .chain(catalog.albums.iter().cloned().map(PlayItem::Album))
            .collect();

        let mut list_state = ListState::default();
        if !items.is_empty() {
            list_state.select(Some(0));
        }

        Self { items, list_state }
    }

    fn selected(&self) -> Option<&PlayItem> {
        self.items.get(self.list_state.selected()?)
    }
}

impl View for Library {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header = Paragraph::new(Line::from(Span::styled(
            "Your Library",
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        f.render_widget(header, chunks[0]);

        let width = chunks[1].width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self.items.iter().map(|i| item_row(i, width)).collect();
        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        if navigate_list(&mut self.list_state, self.items.len(), key.code) {
            return Some(Action::None);
        }

        match key.code {
            KeyCode::Enter => self.selected().and_then(detail_route).map(Action::Open),
            KeyCode::Char('P') => self.selected().cloned().map(Action::PlayItem),
            _ => None,
        }
    }
}
