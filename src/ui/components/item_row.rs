use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
};

use crate::{catalog::PlayItem, ui::util::fit, util::colors};

/// A card-like row for an album, playlist or song: name, then kind and
/// subtitle in muted text.
pub fn item_row<'a>(item: &PlayItem, width: usize) -> ListItem<'a> {
    let name_width = (width / 2).max(1);
    let detail = match item.subtitle() {
        Some(subtitle) => format!("{} · {}", item.kind_label(), subtitle),
        None => item.kind_label().to_string(),
    };

    ListItem::new(Line::from(vec![
        Span::raw(fit(item.name(), name_width)),
        Span::raw(" "),
        Span::styled(
            fit(&detail, width.saturating_sub(name_width + 1)),
            Style::default().fg(colors::MUTED),
        ),
    ]))
}
