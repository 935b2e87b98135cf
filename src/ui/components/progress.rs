use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::ToSpan,
    widgets::{Gauge, Widget},
};

use crate::{
    playback::progress::{SimulatedProgress, format_elapsed},
    util::colors,
};

/// Elapsed bar for the current track. The right-hand label is the track's
/// own duration text, not the nominal length the counter runs against.
pub struct ProgressWidget<'a> {
    progress: &'a SimulatedProgress,
    duration_label: &'a str,
}

impl<'a> ProgressWidget<'a> {
    pub fn new(progress: &'a SimulatedProgress, duration_label: &'a str) -> Self {
        Self {
            progress,
            duration_label,
        }
    }
}

impl Widget for ProgressWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (elapsed, _) = self.progress.get_progress();
        let label = format!("{} / {}", format_elapsed(elapsed), self.duration_label);

        Gauge::default()
            .gauge_style(Style::default().fg(colors::PRIMARY).bg(colors::NEUTRAL))
            .ratio(self.progress.ratio())
            .label(label.to_span().fg(Color::White))
            .use_unicode(true)
            .render(area, buf);
    }
}
