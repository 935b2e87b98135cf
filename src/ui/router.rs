use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use tracing::debug;

use crate::ui::context::AppContext;
use crate::ui::message::ViewRoute;
use crate::ui::state::AppState;
use crate::ui::traits::{Action, View};
use crate::ui::views::{AlbumDetail, Home, Library, PlaylistDetail, Search};

pub struct Router {
    stack: Vec<(ViewRoute, Box<dyn View>)>,
}

impl Router {
    pub fn new(route: ViewRoute, ctx: &AppContext) -> Self {
        Self {
            stack: vec![(route.clone(), build_view(&route, ctx))],
        }
    }

    pub fn push(&mut self, route: ViewRoute, ctx: &AppContext) {
        if self.current() == Some(&route) {
            return;
        }
        debug!(?route, depth = self.stack.len() + 1, "push view");
        let view = build_view(&route, ctx);
        self.stack.push((route, view));
    }

    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Drops the whole history and starts over at `route`.
    pub fn reset(&mut self, route: ViewRoute, ctx: &AppContext) {
        self.stack.clear();
        let view = build_view(&route, ctx);
        self.stack.push((route, view));
    }

    pub fn current(&self) -> Option<&ViewRoute> {
        self.stack.last().map(|(route, _)| route)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        if let Some((_, view)) = self.stack.last_mut() {
            view.render(f, area, state, ctx);
        }
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        let (_, view) = self.stack.last_mut()?;
        view.handle_input(key, state, ctx)
    }
}

fn build_view(route: &ViewRoute, ctx: &AppContext) -> Box<dyn View> {
    match route {
        ViewRoute::Home => Box::new(Home::new(&ctx.catalog)),
        ViewRoute::Search => Box::new(Search::new(ctx.settings.ui.search_result_limit)),
        ViewRoute::Library => Box::new(Library::new(&ctx.catalog)),
        ViewRoute::Playlist(id) => Box::new(PlaylistDetail::new(&ctx.catalog, id)),
        ViewRoute::Album(id) => Box::new(AlbumDetail::new(&ctx.catalog, id)),
    }
}
