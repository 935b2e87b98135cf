#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    // User Input
    Quit,
    TogglePlayPause,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
    ToggleMute,
    ToggleLike,

    // Navigation
    NavigateTo(ViewRoute),
    GoBack,
    NextSidebarItem,
    PreviousSidebarItem,
    SetSidebarIndex(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRoute {
    Home,
    Search,
    Library,
    Playlist(String),
    Album(String),
}
