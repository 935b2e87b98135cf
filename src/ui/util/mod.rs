pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn get_active_track_icon(is_playing: bool) -> &'static str {
    if is_playing {
        const FRAME_STEP_MS: u128 = 100;

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        match (now / FRAME_STEP_MS) % 6 {
            1 | 4 => "•",
            2 | 3 => "●",
            _ => "·",
        }
    } else {
        "•"
    }
}

/// Pads or cuts `text` to exactly `width` terminal columns, ending cut text
/// with an ellipsis.
pub fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out.push_str(&" ".repeat(width - 1 - used));
    out
}

/// Moves the selection for the usual list keys. Returns `false` when the key
/// is not a navigation key.
pub fn navigate_list(list_state: &mut ListState, len: usize, code: KeyCode) -> bool {
    if len == 0 {
        return matches!(
            code,
            KeyCode::Down | KeyCode::Up | KeyCode::Char('j' | 'k' | 'g' | 'G')
        );
    }
    let selected = list_state.selected().unwrap_or(0).min(len - 1);
    let next = match code {
        KeyCode::Down | KeyCode::Char('j') => (selected + 1).min(len - 1),
        KeyCode::Up | KeyCode::Char('k') => selected.saturating_sub(1),
        KeyCode::Char('g') | KeyCode::Home => 0,
        KeyCode::Char('G') | KeyCode::End => len - 1,
        _ => return false,
    };
    list_state.select(Some(next));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("Jason", 8), "Jason   ");
        assert_eq!(fit("Running in the Night", 10), "Running i…");
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn fit_counts_wide_characters() {
        let cut = fit("日本語の曲", 6);
        assert_eq!(cut.width(), 6);
        assert!(cut.starts_with("日本"));
    }

    #[test]
    fn list_navigation_clamps() {
        let mut state = ListState::default();
        assert!(navigate_list(&mut state, 3, KeyCode::Char('k')));
        assert_eq!(state.selected(), Some(0));

        navigate_list(&mut state, 3, KeyCode::Char('G'));
        assert_eq!(state.selected(), Some(2));
        navigate_list(&mut state, 3, KeyCode::Down);
        assert_eq!(state.selected(), Some(2));

        assert!(!navigate_list(&mut state, 3, KeyCode::Enter));
    }
}
