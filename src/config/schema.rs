use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub ui: UiSettings,
}

/// Simulated player behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Period of the progress timer.
    pub tick_interval_ms: u64,
    /// Nominal track length the progress bar runs toward.
    pub simulated_duration_secs: u64,
    pub default_volume: u8,
    pub volume_step: u8,
    /// Select the first catalog track (paused) at start-up.
    pub seed_first_track: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            simulated_duration_secs: 180,
            default_volume: 75,
            volume_step: 5,
            seed_first_track: true,
        }
    }
}

impl PlayerSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn simulated_duration(&self) -> Duration {
        Duration::from_secs(self.simulated_duration_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub frame_rate_ms: u64,
    /// Songs shown in search results.
    pub search_result_limit: usize,
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            frame_rate_ms: 33,
            search_result_limit: 5,
            mouse: false,
        }
    }
}

impl UiSettings {
    pub fn frame_rate(&self) -> Duration {
        Duration::from_millis(self.frame_rate_ms)
    }
}
