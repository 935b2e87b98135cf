use crate::ui::message::{AppMessage, ViewRoute};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char(' '), _) => Some(AppMessage::TogglePlayPause),
            (KeyCode::Char('n'), _) => Some(AppMessage::NextTrack),
            (KeyCode::Char('p'), _) => Some(AppMessage::PreviousTrack),
            (KeyCode::Char('+'), _) => Some(AppMessage::VolumeUp),
            (KeyCode::Char('='), _) => Some(AppMessage::VolumeUp),
            (KeyCode::Char('-'), _) => Some(AppMessage::VolumeDown),
            (KeyCode::Char('m'), _) => Some(AppMessage::ToggleMute),
            (KeyCode::Char('l'), _) => Some(AppMessage::ToggleLike),
            (KeyCode::Char('/'), _) => Some(AppMessage::NavigateTo(ViewRoute::Search)),
            (KeyCode::Esc, _) => Some(AppMessage::GoBack),
            (KeyCode::Tab, _) => Some(AppMessage::NextSidebarItem),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousSidebarItem),
            (KeyCode::Char('1'), _) => Some(AppMessage::SetSidebarIndex(0)),
            (KeyCode::Char('2'), _) => Some(AppMessage::SetSidebarIndex(1)),
            (KeyCode::Char('3'), _) => Some(AppMessage::SetSidebarIndex(2)),
            _ => None,
        }
    }
}
