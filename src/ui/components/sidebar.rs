use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};

use crate::{ui::util::fit, util::colors};

pub struct Sidebar<'a> {
    items: &'a [String],
    /// Entries before this index are sections, the rest are playlists.
    playlists_from: usize,
    selected_index: usize,
}

impl<'a> Sidebar<'a> {
    pub fn new(items: &'a [String], playlists_from: usize, selected_index: usize) -> Self {
        Self {
            items,
            playlists_from,
            selected_index,
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.saturating_sub(2) as usize;
        let mut items = Vec::with_capacity(self.items.len() + 2);

        for (i, item) in self.items.iter().enumerate() {
            if i == self.playlists_from {
                items.push(ListItem::new(""));
                items.push(
                    ListItem::new(fit("PLAYLISTS", width))
                        .style(Style::default().fg(colors::MUTED)),
                );
            }
            let style = if i == self.selected_index {
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::NEUTRAL)
            };
            items.push(ListItem::new(format!("  {}", fit(item, width))).style(style));
        }

        List::new(items).render(area, buf);
    }
}
