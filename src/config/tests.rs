use std::io::Write;
use std::sync::{Mutex, MutexGuard, OnceLock};

use super::*;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn defaults_when_file_is_missing() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(Some(dir.path().join("absent.toml").as_path())).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.player.simulated_duration_secs, 180);
    assert_eq!(settings.player.tick_interval().as_millis(), 1000);
}

#[test]
fn file_overrides_selected_fields() {
    let _lock = env_lock();
    let file = toml_file(
        r#"
[player]
simulated_duration_secs = 30
seed_first_track = false

[ui]
search_result_limit = 8
"#,
    );

    let settings = Settings::load_from(Some(file.path())).unwrap();
    assert_eq!(settings.player.simulated_duration_secs, 30);
    assert!(!settings.player.seed_first_track);
    assert_eq!(settings.player.default_volume, 75);
    assert_eq!(settings.ui.search_result_limit, 8);
    assert_eq!(settings.ui.frame_rate_ms, 33);
}

#[test]
fn environment_wins_over_file() {
    let _lock = env_lock();
    let file = toml_file("[player]\nvolume_step = 2\n");
    let _g = EnvGuard::set("WAVEPLAY__PLAYER__VOLUME_STEP", "10");

    let settings = Settings::load_from(Some(file.path())).unwrap();
    assert_eq!(settings.player.volume_step, 10);
}

#[test]
fn rejects_zero_tick_interval() {
    let _lock = env_lock();
    let file = toml_file("[player]\ntick_interval_ms = 0\n");

    let err = Settings::load_from(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("tick_interval_ms"));
}

#[test]
fn rejects_loud_default_volume() {
    let mut settings = Settings::default();
    settings.player.default_volume = 120;
    assert!(settings.validate().is_err());
}

#[test]
fn malformed_file_is_a_load_error() {
    let _lock = env_lock();
    let file = toml_file("[player\nvolume_step = ");
    let err = Settings::load_from(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
fn config_path_env_takes_precedence() {
    let _lock = env_lock();
    let _g = EnvGuard::set("WAVEPLAY_CONFIG_PATH", "/tmp/waveplay-test.toml");
    assert_eq!(
        resolve_config_path(),
        Some(std::path::PathBuf::from("/tmp/waveplay-test.toml"))
    );
}
