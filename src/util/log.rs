use std::{env, fs, path::PathBuf};

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", *PROJECT_NAME)).ok().map(PathBuf::from);
    pub static ref LOG_ENV: String = format!("{}_LOG", *PROJECT_NAME);
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// Directory holding the log file: `WAVEPLAY_DATA`, else the platform data
/// directory, else `.data` in the working directory.
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = DATA_FOLDER.clone() {
        dir
    } else if let Some(dirs) = ProjectDirs::from("dev", "waveplay", env!("CARGO_PKG_NAME")) {
        dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

/// Sends `tracing` output to a file, since the terminal belongs to the UI.
///
/// The filter comes from `WAVEPLAY_LOG`, else `RUST_LOG`, else `info`.
pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    fs::create_dir_all(&directory)?;
    let log_file = fs::File::create(directory.join(LOG_FILE.as_str()))?;

    let builder = EnvFilter::builder().with_default_directive(tracing::Level::INFO.into());
    let env_filter = if env::var_os(LOG_ENV.as_str()).is_some() {
        builder.with_env_var(LOG_ENV.as_str()).from_env()?
    } else {
        builder.from_env()?
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}
