use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    buffer::Buffer,
    style::{Style, Stylize},
    text::{Line, ToSpan},
    widgets::{Gauge, Paragraph, Widget},
};

use crate::util::colors;

/// Transport icons and the volume gauge.
pub struct PlayerControlsWidget {
    is_playing: bool,
    volume: u8,
    is_muted: bool,
}

impl PlayerControlsWidget {
    pub fn new(is_playing: bool, volume: u8, is_muted: bool) -> Self {
        Self {
            is_playing,
            volume,
            is_muted,
        }
    }
}

impl Widget for PlayerControlsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(11), Constraint::Min(6)])
            .split(area);

        let play_icon = if self.is_playing { "⏸" } else { "▶" };
        let mut controls = Line::default();
        controls.push_span("⏮".fg(colors::MUTED));
        controls.push_span("  ");
        controls.push_span(play_icon.fg(colors::PRIMARY).bold());
        controls.push_span("  ");
        controls.push_span("⏭".fg(colors::MUTED));
        Paragraph::new(controls).centered().render(layout[0], buf);

        let (label, fg) = if self.is_muted {
            ("muted".to_string(), colors::MUTED)
        } else {
            (format!("{}%", self.volume), colors::PRIMARY)
        };

        Gauge::default()
            .gauge_style(Style::new().fg(fg).bg(colors::NEUTRAL))
            .ratio(f64::from(self.volume.min(100)) / 100.0)
            .label(label.to_span())
            .render(layout[1], buf);
    }
}
