use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
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

const QUICK_PICKS: usize = 3;
const POPULAR_ALBUMS: usize = 6;

enum Entry {
    Header(String),
    Item(PlayItem),
}

/// Landing page: a greeting, quick picks, the category shelves and popular
/// albums, flattened into one scrollable list.
pub struct Home {
    entries: Vec<Entry>,
    /// Indices into `entries` that hold items.
    selectable: Vec<usize>,
    cursor: ListState,
    list_state: ListState,
}

impl Home {
    pub fn new(catalog: &Catalog) -> Self {
        let mut entries = vec![Entry::Header("Good morning".to_string())];
        entries.extend(
            catalog
                .collections
                .iter()
                .take(QUICK_PICKS)
                .map(|c| Entry::Item(PlayItem::Collection(c.clone())))
                .chain(
                    catalog
                        .albums
                        .iter()
                        .take(QUICK_PICKS)
                        .map(|a| Entry::Item(PlayItem::Album(a.clone()))),
                ),
        );

        for category in &catalog.categories {
            entries.push(Entry::Header(category.name.clone()));
            entries.extend(category.items.iter().cloned().map(Entry::Item));
        }

        entries.push(Entry::Header("Popular Albums".to_string()));
        entries.extend(
            catalog
                .albums
                .iter()
                .take(POPULAR_ALBUMS)
                .map(|a| Entry::Item(PlayItem::Album(a.clone()))),
        );

        let selectable: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e, Entry::Item(_)))
            .map(|(i, _)| i)
            .collect();

        let mut cursor = ListState::default();
        let mut list_state = ListState::default();
        if let Some(&first) = selectable.first() {
            cursor.select(Some(0));
            list_state.select(Some(first));
        }

        Self {
            entries,
            selectable,
            cursor,
            list_state,
        }
    }

    fn selected_item(&self) -> Option<&PlayItem> {
        let index = *self.selectable.get(self.cursor.selected()?)?;
        match &self.entries[index] {
            Entry::Item(item) => Some(item),
            Entry::Header(_) => None,
        }
    }
}

impl View for Home {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| match entry {
                Entry::Header(title) => ListItem::new(Line::from(Span::styled(
                    title.clone(),
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ))),
                Entry::Item(item) => item_row(item, width),
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        if navigate_list(&mut self.cursor, self.selectable.len(), key.code) {
            let row = self.cursor.selected().and_then(|i| self.selectable.get(i));
            self.list_state.select(row.copied());
            return Some(Action::None);
        }

        match key.code {
            KeyCode::Enter => self.selected_item().cloned().map(Action::PlayItem),
            KeyCode::Char('o') => self
                .selected_item()
                .and_then(detail_route)
                .map(Action::Open),
            _ => None,
        }
    }
}
