use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{
    playback::PlaybackSystem,
    ui::{
        components::{controls::PlayerControlsWidget, progress::ProgressWidget},
        util::fit,
    },
    util::colors,
};

/// The bar pinned to the bottom of the screen.
pub struct PlayerWidget<'a> {
    playback: &'a PlaybackSystem,
}

impl<'a> PlayerWidget<'a> {
    pub fn new(playback: &'a PlaybackSystem) -> Self {
        Self { playback }
    }
}

impl Widget for PlayerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(track) = self.playback.current_track() else {
            Paragraph::new("No song selected.")
                .style(Style::default().fg(colors::MUTED))
                .centered()
                .render(inner, buf);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(45),
                Constraint::Percentage(25),
            ])
            .split(inner);

        let info_width = chunks[0].width.saturating_sub(3) as usize;
        let heart = if self.playback.is_liked() {
            "♥".fg(colors::PRIMARY)
        } else {
            "♡".fg(colors::MUTED)
        };
        let now_playing = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    fit(&track.title, info_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                heart,
            ]),
            Line::from(Span::styled(
                fit(&track.artist.name, info_width),
                Style::default().fg(colors::MUTED),
            )),
        ]);
        now_playing.render(chunks[0], buf);

        let center = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(chunks[1]);
        PlayerControlsWidget::new(
            self.playback.is_playing(),
            self.playback.volume(),
            self.playback.is_muted(),
        )
        .render(center[0], buf);
        ProgressWidget::new(self.playback.progress(), &track.duration).render(center[1], buf);

        let context = match self.playback.active_collection() {
            Some(collection) => format!("from {}", collection.name),
            None => format!("from {}", track.album),
        };
        Paragraph::new(fit(&context, chunks[2].width as usize))
            .style(Style::default().fg(colors::MUTED))
            .render(chunks[2], buf);
    }
}
