use std::sync::Arc;

use flume::Sender;
use tracing::{debug, info};

use crate::{
    catalog::{Catalog, Collection, PlayItem, Track},
    config::PlayerSettings,
    event::events::Event,
    playback::{
        progress::{SimulatedProgress, spawn_ticker},
        resolver,
        state::{Direction, PlaybackState},
    },
    util::task::TaskManager,
};

const PROGRESS_TASK: &str = "progress";

/// Owns the session's playback state and everything that follows it: the
/// progress timer, the like flag and the volume.
pub struct PlaybackSystem {
    catalog: Arc<Catalog>,
    settings: PlayerSettings,
    state: PlaybackState,
    progress: SimulatedProgress,
    tasks: TaskManager,
    event_tx: Sender<Event>,
    liked: bool,
    volume: u8,
    is_muted: bool,
}

impl PlaybackSystem {
    pub fn new(catalog: Arc<Catalog>, settings: PlayerSettings, event_tx: Sender<Event>) -> Self {
        let state = if settings.seed_first_track {
            PlaybackState::seeded(&catalog)
        } else {
            PlaybackState::new()
        };
        let liked = state.current.is_some() && roll_like();

        Self {
            progress: SimulatedProgress::new(settings.simulated_duration()),
            volume: settings.default_volume,
            catalog,
            settings,
            state,
            tasks: TaskManager::new(),
            event_tx,
            liked,
            is_muted: false,
        }
    }

    pub fn play(&mut self, track: Arc<Track>) {
        self.transition(|_, state| resolver::play(state, track));
    }

    pub fn play_item(&mut self, item: &PlayItem) {
        debug!(kind = item.kind_label(), id = item.id(), "play item");
        self.transition(|catalog, state| resolver::play_item(catalog, state, item));
    }

    pub fn play_collection(&mut self, collection: &Arc<Collection>) {
        self.transition(|_, state| resolver::play_collection(state, collection));
    }

    pub fn play_pause(&mut self) {
        self.transition(|_, state| resolver::play_pause(state));
    }

    pub fn next(&mut self) {
        self.advance(Direction::Next);
    }

    pub fn previous(&mut self) {
        self.advance(Direction::Previous);
    }

    fn advance(&mut self, direction: Direction) {
        self.transition(|catalog, state| {
            if resolver::advance(catalog, state, direction).is_none() {
                debug!(?direction, "nothing to advance to");
            }
        });
    }

    /// Runs one resolver operation and brings the timer and like flag in
    /// line with the resulting state.
    fn transition(&mut self, op: impl FnOnce(&Catalog, &mut PlaybackState)) {
        let previous_id = self.state.current_id().map(str::to_owned);
        let was_playing = self.state.is_playing;

        op(&self.catalog, &mut self.state);

        let track_changed = self.state.current_id() != previous_id.as_deref();
        if track_changed {
            self.liked = roll_like();
            if let Some(track) = &self.state.current {
                info!(track = %track.id, title = %track.title, "now playing");
            }
        }
        if track_changed || was_playing != self.state.is_playing {
            self.restart_progress();
        }
    }

    fn restart_progress(&mut self) {
        self.tasks.abort(PROGRESS_TASK);
        let generation = self.progress.reset();

        if self.state.is_playing && self.state.current.is_some() {
            let period = self.settings.tick_interval();
            let ticks = self.progress.remaining_ticks(period);
            self.tasks.spawn(
                PROGRESS_TASK,
                spawn_ticker(self.event_tx.clone(), generation, period, ticks),
            );
        }
    }

    pub fn on_progress_tick(&mut self, generation: u64) {
        self.progress
            .tick(generation, self.settings.tick_interval());
    }

    pub fn on_progress_finished(&mut self, generation: u64) {
        if generation == self.progress.get_generation() {
            self.tasks.abort(PROGRESS_TASK);
        }
    }

    pub fn toggle_like(&mut self) {
        if self.state.current.is_some() {
            self.liked = !self.liked;
        }
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        self.is_muted = self.volume == 0;
    }

    pub fn volume_up(&mut self) {
        self.set_volume(self.volume.saturating_add(self.settings.volume_step));
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.volume.saturating_sub(self.settings.volume_step));
    }

    /// Muting drops the volume to zero; unmuting restores the default level.
    pub fn toggle_mute(&mut self) {
        if self.is_muted {
            self.volume = self.settings.default_volume;
            self.is_muted = false;
        } else {
            self.volume = 0;
            self.is_muted = true;
        }
    }

    pub fn shutdown(&mut self) {
        self.tasks.abort_all();
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_track(&self) -> Option<&Arc<Track>> {
        self.state.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn active_collection(&self) -> Option<&Arc<Collection>> {
        self.state.active_collection.as_ref()
    }

    pub fn progress(&self) -> &SimulatedProgress {
        &self.progress
    }

    pub fn is_timer_running(&self) -> bool {
        self.tasks.is_running(PROGRESS_TASK)
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.pending()
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted || self.volume == 0
    }
}

fn roll_like() -> bool {
    rand::random_bool(0.5)
}

#[cfg(test)]
mod tests;
