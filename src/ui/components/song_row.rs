use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::{
    catalog::Track,
    ui::util::{fit, get_active_track_icon},
    util::colors,
};

/// One row of a track listing: position (or the playing indicator), title,
/// artist, album and duration, laid out to `width` columns.
pub fn song_row<'a>(
    position: usize,
    track: &Track,
    is_current: bool,
    is_playing: bool,
    width: usize,
) -> ListItem<'a> {
    let marker = if is_current {
        format!("{:>3}", get_active_track_icon(is_playing))
    } else {
        format!("{position:>3}")
    };

    // marker, gaps and the duration column take 14 columns
    let flexible = width.saturating_sub(14);
    let title_width = flexible * 2 / 5;
    let artist_width = flexible * 3 / 10;
    let album_width = flexible - title_width - artist_width;

    let title_style = if is_current {
        Style::default()
            .fg(colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(vec![
        Span::styled(marker, Style::default().fg(colors::MUTED)),
        Span::raw("  "),
        Span::styled(fit(&track.title, title_width), title_style),
        Span::raw(" "),
        Span::styled(
            fit(&track.artist.name, artist_width),
            Style::default().fg(colors::MUTED),
        ),
        Span::raw(" "),
        Span::styled(
            fit(&track.album, album_width),
            Style::default().fg(colors::MUTED),
        ),
        Span::raw(format!(" {:>5}", track.duration)),
    ]))
}

pub fn header_row<'a>(width: usize) -> Line<'a> {
    let flexible = width.saturating_sub(14);
    let title_width = flexible * 2 / 5;
    let artist_width = flexible * 3 / 10;
    let album_width = flexible - title_width - artist_width;

    Line::from(format!(
        "{:>3}  {} {} {} {:>5}",
        "#",
        fit("TITLE", title_width),
        fit("ARTIST", artist_width),
        fit("ALBUM", album_width),
        "TIME"
    ))
    .style(Style::default().fg(colors::MUTED))
}
