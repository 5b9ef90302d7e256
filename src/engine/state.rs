use crate::mvi::State;

/// Where the engine is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedPhase {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Fetching,
    /// The most recently completed fetch succeeded.
    Ready,
    /// The most recently completed fetch failed. Earlier content, if any,
    /// is still readable.
    Errored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    pub phase: FeedPhase,
    /// Requests started but not yet completed. Overlapping fetches are
    /// not coalesced, so this can exceed one.
    pub pending: u32,
}

impl State for FeedState {}

impl FeedState {
    pub fn is_fetching(&self) -> bool {
        self.pending > 0
    }
}
