/// Messages delivered to the UI loop from background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One tick of the simulated progress timer, tagged with the progress
    /// generation it was started for.
    ProgressTick(u64),
    /// The simulated progress reached the nominal track length.
    ProgressFinished(u64),
}
