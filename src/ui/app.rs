use std::sync::Arc;

use flume::Receiver;
use tracing::info;

use crate::{
    catalog::{Catalog, fixtures::mock_catalog},
    config::Settings,
    event::events::Event,
    playback::PlaybackSystem,
    ui::{
        context::AppContext,
        layout::AppLayout,
        message::{AppMessage, ViewRoute},
        router::Router,
        state::AppState,
        tui::{TerminalEvent, Tui},
        util::handler::EventHandler,
    },
};

pub const FIXED_SIDEBAR_ITEMS: [&str; 3] = ["Home", "Search", "Your Library"];

pub struct App {
    pub ctx: AppContext,
    pub state: AppState,
    pub router: Router,
    pub event_rx: Receiver<Event>,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self::with_catalog(mock_catalog(), settings)
    }

    pub fn with_catalog(catalog: Arc<Catalog>, settings: Settings) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let playback = PlaybackSystem::new(catalog.clone(), settings.player.clone(), event_tx);
        let ctx = AppContext {
            catalog,
            playback,
            settings,
        };
        let router = Router::new(ViewRoute::Home, &ctx);

        Self {
            ctx,
            state: AppState::default(),
            router,
            event_rx,
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?
            .frame_rate(self.ctx.settings.ui.frame_rate())
            .mouse(self.ctx.settings.ui.mouse);
        tui.enter()?;
        info!("session started");

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.should_quit {
            if self.has_focus {
                tui.draw(|f| {
                    let area = f.area();
                    AppLayout::new(self).render(f, area);
                })?;
            }

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.ctx.playback.shutdown();
        tui.exit()?;
        info!("session ended");
        Ok(())
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::TogglePlayPause => self.ctx.playback.play_pause(),
            AppMessage::NextTrack => self.ctx.playback.next(),
            AppMessage::PreviousTrack => self.ctx.playback.previous(),
            AppMessage::VolumeUp => self.ctx.playback.volume_up(),
            AppMessage::VolumeDown => self.ctx.playback.volume_down(),
            AppMessage::ToggleMute => self.ctx.playback.toggle_mute(),
            AppMessage::ToggleLike => self.ctx.playback.toggle_like(),
            AppMessage::NavigateTo(route) => self.open(route),
            AppMessage::GoBack => {
                self.router.pop();
                self.sync_sidebar();
            }
            AppMessage::NextSidebarItem => {
                let len = self.sidebar_items().len();
                self.select_sidebar((self.state.ui.sidebar_index + 1) % len);
            }
            AppMessage::PreviousSidebarItem => {
                let len = self.sidebar_items().len();
                self.select_sidebar((self.state.ui.sidebar_index + len - 1) % len);
            }
            AppMessage::SetSidebarIndex(index) => self.select_sidebar(index),
        }
    }

    pub fn open(&mut self, route: ViewRoute) {
        self.router.push(route, &self.ctx);
        self.sync_sidebar();
    }

    /// Labels shown in the sidebar: the fixed sections, then every playlist.
    pub fn sidebar_items(&self) -> Vec<String> {
        FIXED_SIDEBAR_ITEMS
            .iter()
            .map(|s| s.to_string())
            .chain(self.ctx.catalog.collections.iter().map(|c| c.name.clone()))
            .collect()
    }

    fn sidebar_route(&self, index: usize) -> Option<ViewRoute> {
        match index {
            0 => Some(ViewRoute::Home),
            1 => Some(ViewRoute::Search),
            2 => Some(ViewRoute::Library),
            i => self
                .ctx
                .catalog
                .collections
                .get(i - FIXED_SIDEBAR_ITEMS.len())
                .map(|c| ViewRoute::Playlist(c.id.clone())),
        }
    }

    fn sidebar_index_of(&self, route: &ViewRoute) -> Option<usize> {
        match route {
            ViewRoute::Home => Some(0),
            ViewRoute::Search => Some(1),
            ViewRoute::Library => Some(2),
            ViewRoute::Playlist(id) => self
                .ctx
                .catalog
                .collections
                .iter()
                .position(|c| &c.id == id)
                .map(|i| i + FIXED_SIDEBAR_ITEMS.len()),
            ViewRoute::Album(_) => None,
        }
    }

    fn select_sidebar(&mut self, index: usize) {
        if let Some(route) = self.sidebar_route(index) {
            self.state.ui.sidebar_index = index;
            self.router.reset(route, &self.ctx);
        }
    }

    fn sync_sidebar(&mut self) {
        if let Some(index) = self.router.current().and_then(|r| self.sidebar_index_of(r)) {
            self.state.ui.sidebar_index = index;
        }
    }
}
