pub mod catalog;
pub mod config;
pub mod event;
pub mod playback;
pub mod ui;
pub mod util;
