use std::sync::Arc;

use crate::{catalog::Catalog, config::Settings, playback::PlaybackSystem};

pub struct AppContext {
    pub catalog: Arc<Catalog>,
    pub playback: PlaybackSystem,
    pub settings: Settings,
}
