use ratatui::crossterm::event::{KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        traits::Action,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        if Self::drain_events(app) {
            should_render = true;
        }

        Ok(should_render)
    }

    /// Applies every event queued by background tasks. Returns whether any
    /// arrived.
    pub fn drain_events(app: &mut App) -> bool {
        let mut received = false;
        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            received = true;
        }
        received
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Resize(..) => {}
            TerminalEvent::Tick => {
                return Ok(app.has_focus);
            }
        }

        Ok(true)
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::ProgressTick(generation) => app.ctx.playback.on_progress_tick(generation),
            Event::ProgressFinished(generation) => {
                debug!(generation, "progress finished");
                app.ctx.playback.on_progress_finished(generation);
            }
        }
    }

    pub fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        let action = app.router.handle_input(evt, &app.state, &app.ctx);

        if let Some(action) = action {
            Self::dispatch_action(app, action);
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt) {
            app.update(msg);
        }
    }

    pub fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::PlayTrack(track) => app.ctx.playback.play(track),
            Action::PlayItem(item) => app.ctx.playback.play_item(&item),
            Action::PlayCollection(collection) => app.ctx.playback.play_collection(&collection),
            Action::Open(route) => app.open(route),
            Action::None => {}
        }
    }

    fn handle_mouse_event(app: &mut App, evt: MouseEvent) {
        match evt.kind {
            MouseEventKind::ScrollUp => app.ctx.playback.volume_up(),
            MouseEventKind::ScrollDown => app.ctx.playback.volume_down(),
            _ => {}
        }
    }
}
