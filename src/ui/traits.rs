use std::sync::Arc;

use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    catalog::{Collection, PlayItem, Track},
    ui::{context::AppContext, message::ViewRoute, state::AppState},
};

/// What a view asks the application to do after a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Play a single track, keeping the active playlist.
    PlayTrack(Arc<Track>),
    PlayItem(PlayItem),
    PlayCollection(Arc<Collection>),
    Open(ViewRoute),
    /// The key was consumed and nothing else should happen.
    None,
}

pub trait View: Send {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext);
    fn handle_input(&mut self, key: KeyEvent, state: &AppState, ctx: &AppContext)
    -> Option<Action>;
}
