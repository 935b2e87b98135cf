use std::{
    env,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use tracing::debug;

use super::schema::{ConfigError, Settings};

const CONFIG_PATH_ENV: &str = "WAVEPLAY_CONFIG_PATH";

impl Settings {
    /// Loads settings from the resolved config path and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = resolve_config_path();
        Self::load_from(path.as_deref())
    }

    /// Loads settings from `path` (missing files are fine) and the environment.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            debug!(path = %path.display(), "reading config file");
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("WAVEPLAY")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.player.tick_interval_ms == 0 {
            return invalid("player.tick_interval_ms must be >= 1");
        }
        if self.player.simulated_duration_secs == 0 {
            return invalid("player.simulated_duration_secs must be >= 1");
        }
        if self.player.default_volume > 100 {
            return invalid("player.default_volume must be <= 100");
        }
        if self.ui.frame_rate_ms == 0 {
            return invalid("ui.frame_rate_ms must be >= 1");
        }
        Ok(())
    }
}

/// `WAVEPLAY_CONFIG_PATH` if set, else the platform default.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    default_config_path()
}

/// `config.toml` inside the platform config directory, e.g.
/// `~/.config/waveplay/config.toml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "waveplay", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
