pub mod controls;
pub mod item_row;
pub mod player;
pub mod progress;
pub mod sidebar;
pub mod song_row;
