use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::{
    ui::{
        app::{App, FIXED_SIDEBAR_ITEMS},
        components::{player::PlayerWidget, sidebar::Sidebar},
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(4)])
            .split(area);

        let main_area = chunks[0];
        let player_area = chunks[1];

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(25), Constraint::Min(1)])
            .split(main_area);

        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];
        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title("waveplay")
            .title_alignment(Alignment::Center);

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL));

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        let content_inner = content_block.inner(content_area);

        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);

        let sidebar_items = self.app.sidebar_items();
        f.render_widget(
            Sidebar::new(
                &sidebar_items,
                FIXED_SIDEBAR_ITEMS.len(),
                self.app.state.ui.sidebar_index,
            ),
            sidebar_inner,
        );

        self.app
            .router
            .render(f, content_inner, &self.app.state, &self.app.ctx);

        f.render_widget(PlayerWidget::new(&self.app.ctx.playback), player_area);
    }
}
