use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};

use crate::{
    catalog::{PlayItem, search::{SearchResults, search}},
    ui::{
        components::{item_row::item_row, song_row::song_row},
        context::AppContext,
        state::AppState,
        traits::{Action, View},
        util::navigate_list,
        views::detail_route,
    },
    util::colors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchTab {
    Songs,
    Albums,
    Playlists,
}

impl SearchTab {
    const ALL: [SearchTab; 3] = [SearchTab::Songs, SearchTab::Albums, SearchTab::Playlists];

    fn as_str(&self) -> &str {
        match self {
            SearchTab::Songs => "Songs",
            SearchTab::Albums => "Albums",
            SearchTab::Playlists => "Playlists",
        }
    }

    fn next(&self) -> Self {
        match self {
            SearchTab::Songs => SearchTab::Albums,
            SearchTab::Albums => SearchTab::Playlists,
            SearchTab::Playlists => SearchTab::Songs,
        }
    }

    fn prev(&self) -> Self {
        match self {
            SearchTab::Songs => SearchTab::Playlists,
            SearchTab::Albums => SearchTab::Songs,
            SearchTab::Playlists => SearchTab::Albums,
        }
    }
}

pub struct Search {
    input: String,
    is_editing: bool,
    list_state: ListState,
    active_tab: SearchTab,
    results: SearchResults,
    result_limit: usize,
}

impl Search {
    pub fn new(result_limit: usize) -> Self {
        Self {
            input: String::new(),
            is_editing: true,
            list_state: ListState::default(),
            active_tab: SearchTab::Songs,
            results: SearchResults::default(),
            result_limit,
        }
    }

    fn refresh(&mut self, ctx: &AppContext) {
        self.results = search(&ctx.catalog, &self.input);
        self.results.tracks.truncate(self.result_limit);
        self.list_state
            .select((self.visible_len() > 0).then_some(0));
    }

    fn visible(&self) -> Vec<PlayItem> {
        match self.active_tab {
            SearchTab::Songs => self.results.tracks.iter().cloned().map(PlayItem::Track).collect(),
            SearchTab::Albums => self.results.albums.iter().cloned().map(PlayItem::Album).collect(),
            SearchTab::Playlists => self
                .results
                .collections
                .iter()
                .cloned()
                .map(PlayItem::Collection)
                .collect(),
        }
    }

    fn visible_len(&self) -> usize {
        match self.active_tab {
            SearchTab::Songs => self.results.tracks.len(),
            SearchTab::Albums => self.results.albums.len(),
            SearchTab::Playlists => self.results.collections.len(),
        }
    }

    fn selected(&self) -> Option<PlayItem> {
        self.visible().into_iter().nth(self.list_state.selected()?)
    }

    fn switch_tab(&mut self, tab: SearchTab) {
        self.active_tab = tab;
        self.list_state.select((self.visible_len() > 0).then_some(0));
    }

    fn render_browse(&self, f: &mut Frame, area: Rect, ctx: &AppContext) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Browse all",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(
            ctx.catalog
                .categories
                .iter()
                .map(|c| Line::from(format!("  {}", c.name))),
        );
        f.render_widget(Paragraph::new(lines), area);
    }
}

impl View for Search {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(area);

        let input_area = chunks[0];
        let tabs_area = chunks[1];
        let results_area = chunks[2];

        let input_style = if self.is_editing {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let input_block = Block::default()
            .borders(Borders::ALL)
            .title("What do you want to listen to?")
            .border_style(input_style);
        f.render_widget(Paragraph::new(self.input.as_str()).block(input_block), input_area);

        if self.input.trim().is_empty() {
            self.render_browse(f, tabs_area.union(results_area), ctx);
            return;
        }

        if self.results.is_empty() {
            let message = Paragraph::new(vec![
                Line::from(format!("No results found for \"{}\"", self.input.trim())),
                Line::from(Span::styled(
                    "Please make sure your words are spelled correctly \
                     or use fewer or different keywords.",
                    Style::default().fg(colors::MUTED),
                )),
            ]);
            f.render_widget(message, tabs_area.union(results_area));
            return;
        }

        let titles = SearchTab::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>();
        let tabs_widget = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(
                SearchTab::ALL
                    .iter()
                    .position(|t| *t == self.active_tab)
                    .unwrap_or(0),
            )
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs_widget, tabs_area);

        let width = results_area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = match self.active_tab {
            SearchTab::Songs => {
                let is_playing = ctx.playback.is_playing();
                self.results
                    .tracks
                    .iter()
                    .enumerate()
                    .map(|(i, track)| {
                        let is_current = ctx.playback.state().is_current(&track.id);
                        song_row(i + 1, track, is_current, is_playing, width)
                    })
                    .collect()
            }
            _ => self.visible().iter().map(|i| item_row(i, width)).collect(),
        };

        if items.is_empty() {
            f.render_widget(
                Paragraph::new(format!("No {} match.", self.active_tab.as_str().to_lowercase()))
                    .style(Style::default().fg(colors::MUTED)),
                results_area,
            );
            return;
        }

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, results_area, &mut self.list_state);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.is_editing {
            return match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
                KeyCode::Enter | KeyCode::Esc => {
                    self.is_editing = false;
                    Some(Action::None)
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                    self.refresh(ctx);
                    Some(Action::None)
                }
                KeyCode::Backspace => {
                    self.input.pop();
                    self.refresh(ctx);
                    Some(Action::None)
                }
                _ => Some(Action::None),
            };
        }

        let len = self.visible_len();
        if navigate_list(&mut self.list_state, len, key.code) {
            return Some(Action::None);
        }

        match key.code {
            KeyCode::Char('/') => {
                self.is_editing = true;
                Some(Action::None)
            }
            KeyCode::Left => {
                self.switch_tab(self.active_tab.prev());
                Some(Action::None)
            }
            KeyCode::Right => {
                self.switch_tab(self.active_tab.next());
                Some(Action::None)
            }
            KeyCode::Enter => match self.selected()? {
                item @ PlayItem::Track(_) => Some(Action::PlayItem(item)),
                item => detail_route(&item).map(Action::Open),
            },
            KeyCode::Char('P') => self.selected().map(Action::PlayItem),
            _ => None,
        }
    }
}
